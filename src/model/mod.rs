//! Pager state - everything the controller itself owns
//!
//! Follows the Elm Architecture pattern: plain data here, mutation in
//! `update`, drawing in `view`. The external collaborators (solver, tile
//! renderer, data source) live on `Pager`, not here.

pub mod loading;
pub mod slots;
pub mod transition;

pub use loading::LoadingState;
pub use slots::{NailSlot, NailSlots};
pub use transition::TransitionMode;

use crate::geometry::{Rect, Rotation};

/// The pager's own mutable state
#[derive(Debug, Default)]
pub struct PagerState {
    /// Viewport width in pixels
    pub view_width: i32,
    /// Viewport height in pixels
    pub view_height: i32,
    /// Rotation of the current image
    pub rotation: Rotation,
    /// The navigation/entrance animation in flight, if any
    pub transition: TransitionMode,
    /// Loading feedback for the current image
    pub loading: LoadingState,
    /// Previous/next neighbor placeholders
    pub slots: NailSlots,
    /// Swallow the next pointer-up (a fling/double-tap/swipe already
    /// consumed this gesture)
    pub ignore_next_up: bool,
    /// The pinch-overshoot deadline timer is armed
    pub cancel_extra_scaling_pending: bool,
    /// A pointer is currently down
    pub pointer_down: bool,
    /// One-shot rectangle seeding the opening animation (read-and-clear)
    pub open_animation_rect: Option<Rect>,
    /// Overlay the video play icon on the loaded image
    pub show_video_play_icon: bool,
}

impl PagerState {
    pub fn new() -> Self {
        Self {
            // No feedback until a data source signals otherwise
            loading: LoadingState::Complete,
            ..Self::default()
        }
    }
}
