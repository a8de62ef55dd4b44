//! Neighbor slots: the previous/next screen-nail placeholders
//!
//! A slot owns its screen-nail outright. On an image switch the nails move
//! between the slots and the tile renderer (`release`/`update`), which is
//! what lets a switch complete without re-uploading pixel data.

use crate::curves::ScrollCurves;
use crate::external::{Canvas, PositionSolver, ScreenNail};
use crate::geometry::{gap_to_side, Rotation};

/// One neighbor placeholder (previous or next)
#[derive(Default)]
pub struct NailSlot {
    enabled: bool,
    visible: bool,
    draw_width: i32,
    draw_height: i32,
    offset_x: i32,
    rotation: Rotation,
    nail: Option<Box<dyn ScreenNail>>,
}

impl std::fmt::Debug for NailSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NailSlot")
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("draw_width", &self.draw_width)
            .field("draw_height", &self.draw_height)
            .field("offset_x", &self.offset_x)
            .field("rotation", &self.rotation)
            .field("has_nail", &self.nail.is_some())
            .finish()
    }
}

impl NailSlot {
    /// Replace the slot's screen-nail. `None` disables the slot.
    pub fn update(&mut self, nail: Option<Box<dyn ScreenNail>>, solver: &dyn PositionSolver) {
        self.enabled = nail.is_some();
        if let Some(mut old) = self.nail.take() {
            old.pause_draw();
        }
        self.nail = nail;
        if let Some(nail) = &self.nail {
            self.rotation = nail.rotation();
            self.update_drawing_size(solver);
        }
    }

    /// Release ownership of the screen-nail from this slot
    pub fn release(&mut self) -> Option<Box<dyn ScreenNail>> {
        self.nail.take()
    }

    /// A neighbor visual exists; a disabled slot is never drawn and never
    /// contributes to layout
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Laid out at least partially inside the viewport
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Screen-space center x from the last layout pass
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn draw_size(&self) -> (i32, i32) {
        (self.draw_width, self.draw_height)
    }

    /// Recompute draw size: nail size at the solver's fit scale, with the
    /// fit computed on swapped axes under a quarter-turn rotation
    pub fn update_drawing_size(&mut self, solver: &dyn PositionSolver) {
        let Some(nail) = &self.nail else { return };
        let (width, height) = nail.size();

        let scale = if self.rotation.is_quarter_turn() {
            solver.minimal_scale(height, width)
        } else {
            solver.minimal_scale(width, height)
        };

        self.draw_width = (width as f32 * scale).round() as i32;
        self.draw_height = (height as f32 * scale).round() as i32;
    }

    /// This slot's own centering gap, from its rotated draw dimensions
    pub fn gap_to_side(&self, view_width: i32) -> i32 {
        gap_to_side(
            self.rotation.rotated(self.draw_width, self.draw_height),
            view_width,
        )
    }

    /// Place the slot so its right edge lands at `x` (previous slot)
    pub fn layout_right_edge_at(&mut self, x: i32) {
        self.visible = x > 0;
        self.offset_x = x - self.rotation.rotated(self.draw_width, self.draw_height) / 2;
    }

    /// Place the slot so its left edge lands at `x` (next slot)
    pub fn layout_left_edge_at(&mut self, x: i32, view_width: i32) {
        self.visible = x < view_width;
        self.offset_x = x + self.rotation.rotated(self.draw_width, self.draw_height) / 2;
    }

    /// Draw the slot. With `apply_fade` the nail is drawn at the view
    /// center with the slide-out alpha/scale derived from how far it sits
    /// from its laid-out position.
    pub fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        apply_fade: bool,
        view_width: i32,
        view_height: i32,
        curves: &ScrollCurves,
    ) {
        let offset_x = self.offset_x;
        let rotation = self.rotation;
        let (draw_width, draw_height) = (self.draw_width, self.draw_height);

        let Some(nail) = &mut self.nail else { return };
        if !self.visible {
            nail.no_draw();
            return;
        }

        let x = if apply_fade { view_width / 2 } else { offset_x };
        let y = view_height / 2;

        canvas.save();
        canvas.translate(x as f32, y as f32);
        if apply_fade {
            let progress = (x - offset_x) as f32 / view_width as f32;
            canvas.multiply_alpha(curves.scroll_alpha(progress));
            let scale = curves.scroll_scale(progress);
            canvas.scale(scale, scale);
        }
        if rotation != Rotation::Deg0 {
            canvas.rotate(rotation.degrees() as f32);
        }
        canvas.translate(-x as f32, -y as f32);
        nail.draw(
            canvas,
            x - draw_width / 2,
            y - draw_height / 2,
            draw_width,
            draw_height,
        );
        canvas.restore();
    }
}

/// The pair of neighbor slots
#[derive(Debug, Default)]
pub struct NailSlots {
    pub previous: NailSlot,
    pub next: NailSlot,
}
