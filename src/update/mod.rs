//! Update handlers - all state mutation flows through here
//!
//! One entry point, one queue: gesture events, timer firings and the
//! transition-completion signal are dispatched in the order the host
//! delivers them. No handler blocks; anything delayed is a `Cmd`.

pub mod gesture;
pub mod loading;
pub mod transition;

pub use gesture::{update_gesture, GestureOutcome};

use crate::commands::{Cmd, Timer};
use crate::messages::Msg;
use crate::pager::Pager;

/// Process one message, returning the side effects for the host
pub fn update(pager: &mut Pager, msg: Msg) -> Cmd {
    match msg {
        Msg::Gesture(gesture) => update_gesture(pager, gesture).cmd,
        Msg::Timer(Timer::ShowLoading) => loading::on_spinner_delay_elapsed(pager),
        Msg::Timer(Timer::CancelExtraScaling) => gesture::on_extra_scaling_timeout(pager),
        Msg::TransitionComplete => transition::on_transition_complete(pager),
    }
}
