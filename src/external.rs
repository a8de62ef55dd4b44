//! Interfaces to the surrounding viewer
//!
//! The pager is a controller, not a renderer: image data, pan/zoom
//! kinematics, tiled drawing and the low-level canvas all live outside it.
//! These traits are the seams. The pager only ever calls them; hosts (and
//! the test suite) provide the implementations.

use crate::geometry::{Edges, RectF, Rotation};
use crate::messages::SlideDirection;

/// A cheap, possibly lower-resolution proxy visual for an image, used
/// before or instead of a full decode.
///
/// Ownership matters: a screen-nail is held by exactly one role at a time
/// (the current-image renderer or a neighbor slot) and moves between them
/// on an image switch so pixel data is never re-uploaded.
pub trait ScreenNail {
    /// Unscaled size in pixels, before rotation
    fn size(&self) -> (i32, i32);

    /// Rotation baked into this visual
    fn rotation(&self) -> Rotation;

    /// Draw into the given screen rectangle (the canvas carries any
    /// transform already applied)
    fn draw(&mut self, canvas: &mut dyn Canvas, x: i32, y: i32, width: i32, height: i32);

    /// Called on frames where this nail is laid out off-screen
    fn no_draw(&mut self);

    /// Called when this nail loses its slot; it may drop GPU residency
    fn pause_draw(&mut self);
}

/// The image sequence the pager navigates
///
/// Neighbor accessors return `None` when the adjacent image is
/// unavailable; that disables the slot, it is not an error.
pub trait DataSource {
    /// Advance to the next image (called on switch commit)
    fn next(&mut self);

    /// Step back to the previous image (called on switch commit)
    fn previous(&mut self);

    /// Jump to an arbitrary index
    fn jump_to(&mut self, index: usize);

    /// Rotation of the current image
    fn image_rotation(&self) -> Rotation;

    /// Screen-nail for the next image, if available
    fn next_screen_nail(&mut self) -> Option<Box<dyn ScreenNail>>;

    /// Screen-nail for the previous image, if available
    fn prev_screen_nail(&mut self) -> Option<Box<dyn ScreenNail>>;

    /// Number of decoded tile levels for the current image (0 = nothing
    /// decoded yet)
    fn level_count(&self) -> usize;

    /// Whether a screen-nail proxy exists for the current image
    fn has_screen_nail(&self) -> bool;

    /// Whether loading the current image failed
    fn failed_to_load(&self) -> bool;
}

/// The scroll/zoom/fling physics solver owning screen-to-image mapping
pub trait PositionSolver {
    fn set_view_size(&mut self, width: i32, height: i32);
    fn set_image_size(&mut self, width: i32, height: i32);

    /// Current image bounds on screen
    fn image_bounds(&self) -> RectF;
    fn image_width(&self) -> i32;
    fn image_height(&self) -> i32;

    fn current_scale(&self) -> f32;
    fn is_at_minimal_scale(&self) -> bool;

    /// Fit-to-screen scale the solver would pick for an image of the
    /// given size
    fn minimal_scale(&self, width: i32, height: i32) -> f32;

    /// Which view edges the image currently touches
    fn image_at_edges(&self) -> Edges;

    /// Animate the image horizontally by the given screen offset
    fn start_horizontal_slide(&mut self, offset: i32);

    /// Entrance animation for an image arriving from the given direction
    fn start_slide_in(&mut self, direction: SlideDirection);

    /// Pan by a drag delta; the flags say whether a neighbor exists on
    /// each side (controls rubber-banding past the edge)
    fn start_scroll(&mut self, dx: f32, dy: f32, has_next: bool, has_prev: bool);

    /// Kinetic scroll; returns true if the solver took the fling
    fn fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool;

    /// Plain pointer release (no snap, no fling)
    fn up(&mut self);

    fn begin_scale(&mut self, focus_x: f32, focus_y: f32);

    /// Apply a pinch factor; returns true when the result is outside the
    /// normal scale range
    fn scale_by(&mut self, factor: f32, focus_x: f32, focus_y: f32) -> bool;

    fn end_scale(&mut self);

    fn zoom_in(&mut self, focus_x: f32, focus_y: f32, scale: f32);
    fn reset_to_full_view(&mut self);

    /// Permit (or revoke) temporary over/under-zoom past the normal range
    fn set_extra_scaling_range(&mut self, enabled: bool);

    /// Progress any active tween; must be called once per rendered frame
    fn advance_animation(&mut self);

    /// Stop the active animation, leaving position as-is
    fn stop_animation(&mut self);

    /// Jump the active animation to its end state
    fn skip_animation(&mut self);
}

/// The tiled full-resolution renderer for the current image
pub trait TileRenderer {
    /// Place the image: center (in image coordinates), scale, rotation
    fn set_position(&mut self, center_x: i32, center_y: i32, scale: f32, rotation: Rotation);

    /// Overall alpha applied to the current image
    fn set_alpha(&mut self, alpha: f32);

    /// Re-read image size and tile data from the data source
    fn notify_model_invalidated(&mut self);

    /// Drop cached tiles (the image under them changed)
    fn invalidate_tiles(&mut self);

    /// Decoded size of the current image, before rotation
    fn image_size(&self) -> (i32, i32);

    /// On-screen center of the drawn image
    fn image_center(&self) -> (i32, i32);

    /// Take ownership of the current image's screen-nail
    fn take_screen_nail(&mut self) -> Option<Box<dyn ScreenNail>>;

    /// Hand ownership of a screen-nail to the renderer
    fn put_screen_nail(&mut self, nail: Option<Box<dyn ScreenNail>>);

    /// Draw the current image
    fn draw(&mut self, canvas: &mut dyn Canvas);

    /// Release GPU resources (pause)
    fn free_textures(&mut self);

    /// Re-acquire GPU resources (resume)
    fn prepare_textures(&mut self);
}

/// Edge-glow overshoot effect
pub trait EdgeGlow {
    /// The pointer went up; let any active glow decay
    fn on_release(&mut self);
}

/// Receiver for taps the pager does not consume itself
pub trait TapListener {
    fn on_single_tap_up(&mut self, x: i32, y: i32);
}

/// Minimal drawing surface for the render pass
///
/// Transform state is a save/restore stack, like every 2D canvas. The
/// overlay glyphs (spinner, labels, play icon) are opaque to the pager;
/// the canvas knows their sizes and draws them centered/anchored as
/// documented per method.
pub trait Canvas {
    /// Push matrix + alpha state
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    fn rotate(&mut self, degrees: f32);
    fn multiply_alpha(&mut self, alpha: f32);

    /// Draw the loading spinner centered at (cx, cy)
    fn draw_spinner(&mut self, cx: i32, cy: i32);

    /// Draw the "loading" label horizontally centered at cx, top at y
    fn draw_loading_label(&mut self, cx: i32, y: i32);

    /// Draw the "no thumbnail" label horizontally centered at cx, top at y
    fn draw_failure_label(&mut self, cx: i32, y: i32);

    /// Draw the video play icon in the square at (x, y) with the given
    /// side length
    fn draw_video_play_icon(&mut self, x: i32, y: i32, size: i32);
}
