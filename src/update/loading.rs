//! Loading-state machine
//!
//! Evaluated whenever the data source signals new information about the
//! current image. The spinner never flashes: it only appears after the
//! debounce delay elapses with nothing renderable and no failure.

use crate::commands::{Cmd, Timer};
use crate::model::LoadingState;
use crate::pager::Pager;

/// Re-evaluate loading feedback against what the source has right now
pub fn refresh_loading_state(pager: &mut Pager) -> Cmd {
    let Some(model) = &pager.model else {
        return Cmd::None;
    };

    if model.level_count() != 0 || model.has_screen_nail() {
        pager.state.loading = LoadingState::Complete;
        Cmd::Cancel(Timer::ShowLoading)
    } else if model.failed_to_load() {
        tracing::debug!("image failed to load");
        pager.state.loading = LoadingState::Fail;
        // No opening animation after a failure
        pager.state.open_animation_rect = None;
        Cmd::Cancel(Timer::ShowLoading)
    } else if pager.state.loading != LoadingState::Init {
        pager.state.loading = LoadingState::Init;
        Cmd::batch(vec![
            Cmd::Cancel(Timer::ShowLoading),
            Cmd::Schedule {
                timer: Timer::ShowLoading,
                delay_ms: pager.config.loading_spinner_delay_ms,
            },
        ])
    } else {
        Cmd::None
    }
}

/// The spinner debounce fired. Only acts if nothing newer arrived since
/// it was armed.
pub fn on_spinner_delay_elapsed(pager: &mut Pager) -> Cmd {
    if pager.state.loading != LoadingState::Init {
        return Cmd::None;
    }
    // The open animation is only valid when content loads immediately
    pager.state.open_animation_rect = None;
    pager.state.loading = LoadingState::Timeout;
    Cmd::Invalidate
}
