//! The pager facade
//!
//! `Pager` owns the controller state plus the boxed collaborators, and
//! exposes the host-facing API: model swaps, invalidation notifications,
//! layout, solver-driven placement, and the small query surface
//! (`is_in_transition`, `is_down`, the open-animation rectangle).
//!
//! Gesture and timer handling lives in `update`; per-frame drawing in
//! `view`.

use crate::commands::{Cmd, Timer};
use crate::config::PagerConfig;
use crate::curves::{move_out_progress, ScrollCurves};
use crate::external::{DataSource, EdgeGlow, PositionSolver, TapListener, TileRenderer};
use crate::geometry::{Rect, Rotation};
use crate::messages::{ImageSlot, SlideDirection};
use crate::model::{LoadingState, PagerState, TransitionMode};
use crate::update;
use crate::view;

/// The transition/loading/neighbor-layout controller for one photo pager
pub struct Pager {
    /// Controller-owned state (plain data)
    pub state: PagerState,
    /// Tunables; see [`PagerConfig`]
    pub config: PagerConfig,
    pub(crate) curves: ScrollCurves,
    pub(crate) model: Option<Box<dyn DataSource>>,
    pub(crate) solver: Box<dyn PositionSolver>,
    pub(crate) tiles: Box<dyn TileRenderer>,
    pub(crate) edge: Box<dyn EdgeGlow>,
    pub(crate) tap_listener: Option<Box<dyn TapListener>>,
}

impl Pager {
    pub fn new(
        solver: Box<dyn PositionSolver>,
        tiles: Box<dyn TileRenderer>,
        edge: Box<dyn EdgeGlow>,
        config: PagerConfig,
    ) -> Self {
        let curves = ScrollCurves::new(
            config.alpha_ease_factor,
            config.scale_focal_length,
            config.transition_scale_factor,
        );
        Self {
            state: PagerState::new(),
            config,
            curves,
            model: None,
            solver,
            tiles,
            edge,
            tap_listener: None,
        }
    }

    /// Swap the image sequence. The solver's image size is zeroed so the
    /// first invalidation lays the new image out from scratch.
    pub fn set_model(&mut self, model: Option<Box<dyn DataSource>>) {
        self.model = model;
        if self.model.is_some() {
            self.solver.set_image_size(0, 0);
        }
    }

    pub fn set_tap_listener(&mut self, listener: Option<Box<dyn TapListener>>) {
        self.tap_listener = listener;
    }

    /// View size changed. Propagates to the solver and recomputes the
    /// neighbor draw sizes.
    pub fn layout(&mut self, width: i32, height: i32) {
        if width == self.state.view_width && height == self.state.view_height {
            return;
        }
        self.state.view_width = width;
        self.state.view_height = height;
        self.solver.set_view_size(width, height);
        self.state.slots.previous.update_drawing_size(&*self.solver);
        self.state.slots.next.update_drawing_size(&*self.solver);
    }

    /// Solver callback: place the current image for this frame, then lay
    /// out the neighbors against its new bounds.
    ///
    /// `center_x`/`center_y` are in image coordinates. While the image is
    /// scrolling out to the right the slide-out fade kicks in: the image
    /// re-centers, shrinks toward the transition scale and loses alpha.
    pub fn set_position(&mut self, center_x: i32, center_y: i32, scale: f32) {
        self.place_tile_view(center_x, center_y, scale);
        view::layout_slots(self);
    }

    fn place_tile_view(&mut self, center_x: i32, center_y: i32, scale: f32) {
        let bounds = self.solver.image_bounds();
        let left = bounds.left.round() as i32;
        let right = bounds.right.round() as i32;
        let width = self.state.view_width;
        let progress = move_out_progress(left, right, width).clamp(-1.0, 1.0);

        let mut center_x = center_x;
        let mut scale = scale;

        // Only rightward movement fades
        if progress < 0.0 {
            if right - left < width {
                // Narrower than the view: keep it at the view center
                center_x = self.solver.image_width() / 2;
            } else {
                // Zoomed in: pin the left edge of the image to the left
                // edge of the view
                center_x = (width as f32 / 2.0 / scale).round() as i32;
            }
            scale *= self.curves.scroll_scale(progress);
            self.tiles.set_alpha(self.curves.scroll_alpha(progress));
        }

        let inverse_x = self.solver.image_width() - center_x;
        let inverse_y = self.solver.image_height() - center_y;
        let rotation = self.state.rotation;
        let (cx, cy) = match rotation {
            Rotation::Deg0 => (center_x, center_y),
            Rotation::Deg90 => (center_y, inverse_x),
            Rotation::Deg180 => (inverse_x, inverse_y),
            Rotation::Deg270 => (inverse_y, center_x),
        };
        self.tiles.set_position(cx, cy, scale, rotation);
    }

    /// A neighbor slot's nail from the data source, unless a switch is
    /// mid-flight (the commit will place the nails itself).
    fn refresh_slot(&mut self, which: ImageSlot) {
        if self.state.transition.is_switch() {
            return;
        }
        let nail = match (&mut self.model, which) {
            (Some(model), ImageSlot::Previous) => model.prev_screen_nail(),
            (Some(model), ImageSlot::Next) => model.next_screen_nail(),
            _ => None,
        };
        let slot = match which {
            ImageSlot::Previous => &mut self.state.slots.previous,
            _ => &mut self.state.slots.next,
        };
        slot.update(nail, &*self.solver);
    }

    /// The data source changed one image in the current window
    pub fn notify_image_invalidated(&mut self, which: ImageSlot) -> Cmd {
        match which {
            ImageSlot::Previous | ImageSlot::Next => {
                self.refresh_slot(which);
                view::layout_slots(self);
                Cmd::Invalidate
            }
            ImageSlot::Current => {
                self.tiles.notify_model_invalidated();
                self.tiles.set_alpha(1.0);

                if let Some(model) = &self.model {
                    self.state.rotation = model.image_rotation();
                }
                let (width, height) = self.tiles.image_size();
                if self.state.rotation.is_quarter_turn() {
                    self.solver.set_image_size(height, width);
                } else {
                    self.solver.set_image_size(width, height);
                }
                update::loading::refresh_loading_state(self).then(Cmd::Invalidate)
            }
        }
    }

    /// The data source changed wholesale (or was cleared)
    pub fn notify_model_invalidated(&mut self) -> Cmd {
        self.refresh_slot(ImageSlot::Previous);
        self.refresh_slot(ImageSlot::Next);
        view::layout_slots(self);

        if self.model.is_none() {
            self.tiles.notify_model_invalidated();
            self.tiles.set_alpha(1.0);
            self.state.rotation = Rotation::Deg0;
            self.solver.set_image_size(0, 0);
            // No source: loading feedback rests
            self.state.loading = LoadingState::Complete;
            Cmd::Cancel(Timer::ShowLoading).then(Cmd::Invalidate)
        } else {
            self.notify_image_invalidated(ImageSlot::Current)
        }
    }

    /// Jump to an arbitrary index; rejected while a transition is active
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.state.transition.is_none() {
            return false;
        }
        if let Some(model) = &mut self.model {
            model.jump_to(index);
        }
        true
    }

    /// Entrance animation for content that is already the target image.
    /// Cancels whatever animation was running.
    pub fn start_slide_in_animation(&mut self, direction: SlideDirection) {
        tracing::debug!(?direction, "slide-in animation");
        self.solver.stop_animation();
        self.state.transition = TransitionMode::SlideIn(direction);
        self.solver.start_slide_in(direction);
    }

    /// The host started the one-shot launch transition
    pub fn open_animation_started(&mut self) {
        self.state.transition = TransitionMode::Open;
    }

    /// Stop animating, drop neighbor visuals and renderer resources
    pub fn pause(&mut self) {
        self.solver.skip_animation();
        self.state.transition = TransitionMode::None;
        self.tiles.free_textures();
        self.state.slots.previous.update(None, &*self.solver);
        self.state.slots.next.update(None, &*self.solver);
    }

    /// Permit resource re-acquisition on the next frame
    pub fn resume(&mut self) {
        self.tiles.prepare_textures();
    }

    /// Seed rectangle for the opening animation, consumed by
    /// [`Pager::retrieve_open_animation_rect`]
    pub fn set_open_animation_rect(&mut self, rect: Rect) {
        self.state.open_animation_rect = Some(rect);
    }

    /// Read-and-clear: the rectangle saved by the previous page, if the
    /// open animation is still wanted
    pub fn retrieve_open_animation_rect(&mut self) -> Option<Rect> {
        self.state.open_animation_rect.take()
    }

    pub fn show_video_play_icon(&mut self, show: bool) {
        self.state.show_video_play_icon = show;
    }

    pub fn is_in_transition(&self) -> bool {
        !self.state.transition.is_none()
    }

    /// A pointer is currently down
    pub fn is_down(&self) -> bool {
        self.state.pointer_down
    }
}
