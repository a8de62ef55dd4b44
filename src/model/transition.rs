//! Transition mode: the navigation/entrance animation in flight, if any

use crate::messages::SlideDirection;

/// The active transition. At most one at a time; starting another either
/// cancels the current one deterministically or is rejected (see
/// `update::gesture` and `update::transition`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    /// Resting/interactive
    #[default]
    None,
    /// Horizontal slide committing to the next image
    SwitchNext,
    /// Horizontal slide committing to the previous image
    SwitchPrevious,
    /// Entrance animation for an image arriving from a direction
    SlideIn(SlideDirection),
    /// One-shot launch transition
    Open,
}

impl TransitionMode {
    pub fn is_none(self) -> bool {
        self == TransitionMode::None
    }

    /// A switch slide that commits an index change on completion
    pub fn is_switch(self) -> bool {
        matches!(
            self,
            TransitionMode::SwitchNext | TransitionMode::SwitchPrevious
        )
    }

    /// While an image is arriving, neighbor slots stay hidden
    pub fn suppresses_neighbors(self) -> bool {
        matches!(self, TransitionMode::SlideIn(_) | TransitionMode::Open)
    }
}
