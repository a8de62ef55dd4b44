//! Gesture arbitration
//!
//! Turns the recognizer's semantic gesture stream into navigation, zoom
//! or pass-through intents. The one piece of cross-gesture state is the
//! up-swallow latch: a fling, double-tap or swipe that consumed the
//! gesture suppresses the trailing release so the solver does not also
//! act on it.

use crate::commands::{Cmd, Timer};
use crate::messages::GestureMsg;
use crate::pager::Pager;
use crate::update::transition::{snap_to_neighbor, swipe_images};

/// Result of feeding one gesture event through arbitration
///
/// `handled == false` lets the host's recognizer offer the gesture to
/// another target (only pinch-begin during a transition does this).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureOutcome {
    pub handled: bool,
    pub cmd: Cmd,
}

impl GestureOutcome {
    fn handled(cmd: Cmd) -> Self {
        Self { handled: true, cmd }
    }

    fn unhandled() -> Self {
        Self {
            handled: false,
            cmd: Cmd::None,
        }
    }
}

pub fn update_gesture(pager: &mut Pager, msg: GestureMsg) -> GestureOutcome {
    match msg {
        GestureMsg::Down { .. } => on_down(pager),
        GestureMsg::Up => on_up(pager),
        GestureMsg::SingleTapUp { x, y } => on_single_tap_up(pager, x, y),
        GestureMsg::DoubleTap { x, y } => on_double_tap(pager, x, y),
        GestureMsg::Scroll { dx, dy } => on_scroll(pager, dx, dy),
        GestureMsg::Fling {
            velocity_x,
            velocity_y,
        } => on_fling(pager, velocity_x, velocity_y),
        GestureMsg::ScaleBegin { focus_x, focus_y } => on_scale_begin(pager, focus_x, focus_y),
        GestureMsg::Scale {
            focus_x,
            focus_y,
            factor,
        } => on_scale(pager, focus_x, focus_y, factor),
        GestureMsg::ScaleEnd => on_scale_end(pager),
    }
}

/// A new gesture sequence starts; stale latch state must not leak into it
fn on_down(pager: &mut Pager) -> GestureOutcome {
    pager.state.pointer_down = true;
    pager.state.ignore_next_up = false;
    GestureOutcome::handled(Cmd::None)
}

fn on_up(pager: &mut Pager) -> GestureOutcome {
    pager.state.pointer_down = false;
    pager.edge.on_release();

    if pager.state.ignore_next_up {
        pager.state.ignore_next_up = false;
        return GestureOutcome::handled(Cmd::None);
    }
    if !snap_to_neighbor(pager) && pager.state.transition.is_none() {
        pager.solver.up();
    }
    GestureOutcome::handled(Cmd::None)
}

fn on_single_tap_up(pager: &mut Pager, x: f32, y: f32) -> GestureOutcome {
    if let Some(listener) = &mut pager.tap_listener {
        listener.on_single_tap_up(x as i32, y as i32);
    }
    GestureOutcome::handled(Cmd::None)
}

fn on_double_tap(pager: &mut Pager, x: f32, y: f32) -> GestureOutcome {
    if !pager.state.transition.is_none() {
        return GestureOutcome::handled(Cmd::None);
    }
    // The double-tap is reported on the second press; the matching
    // release must not also snap or go to the solver
    pager.state.ignore_next_up = true;

    let scale = pager.solver.current_scale();
    if scale <= 1.0 || pager.solver.is_at_minimal_scale() {
        pager.solver.zoom_in(x, y, (scale * 1.5).max(1.5));
    } else {
        pager.solver.reset_to_full_view();
    }
    GestureOutcome::handled(Cmd::None)
}

fn on_scroll(pager: &mut Pager, dx: f32, dy: f32) -> GestureOutcome {
    if !pager.state.transition.is_none() {
        return GestureOutcome::handled(Cmd::None);
    }
    let has_next = pager.state.slots.next.is_enabled();
    let has_prev = pager.state.slots.previous.is_enabled();
    pager.solver.start_scroll(dx, dy, has_next, has_prev);
    GestureOutcome::handled(Cmd::None)
}

fn on_fling(pager: &mut Pager, velocity_x: f32, velocity_y: f32) -> GestureOutcome {
    if swipe_images(pager, velocity_x, velocity_y) {
        pager.state.ignore_next_up = true;
    } else if !pager.state.transition.is_none() {
        // swallow; the animation owns the viewport
    } else if pager.solver.fling(velocity_x, velocity_y) {
        pager.state.ignore_next_up = true;
    }
    GestureOutcome::handled(Cmd::None)
}

fn on_scale_begin(pager: &mut Pager, focus_x: f32, focus_y: f32) -> GestureOutcome {
    if !pager.state.transition.is_none() {
        // Let the recognizer offer the pinch elsewhere
        return GestureOutcome::unhandled();
    }
    pager.solver.begin_scale(focus_x, focus_y);
    GestureOutcome::handled(Cmd::None)
}

fn on_scale(pager: &mut Pager, focus_x: f32, focus_y: f32, factor: f32) -> GestureOutcome {
    // Gesture hardware can produce transient garbage; not an error
    if factor.is_nan() || factor.is_infinite() {
        tracing::trace!(factor, "ignoring invalid pinch factor");
        return GestureOutcome::handled(Cmd::None);
    }
    if !pager.state.transition.is_none() {
        return GestureOutcome::handled(Cmd::None);
    }

    let out_of_range = pager.solver.scale_by(factor, focus_x, focus_y);
    if out_of_range {
        if !pager.state.cancel_extra_scaling_pending {
            pager.state.cancel_extra_scaling_pending = true;
            pager.solver.set_extra_scaling_range(true);
            return GestureOutcome::handled(Cmd::Schedule {
                timer: Timer::CancelExtraScaling,
                delay_ms: pager.config.extra_scaling_timeout_ms,
            });
        }
    } else if pager.state.cancel_extra_scaling_pending {
        pager.state.cancel_extra_scaling_pending = false;
        pager.solver.set_extra_scaling_range(false);
        return GestureOutcome::handled(Cmd::Cancel(Timer::CancelExtraScaling));
    }
    GestureOutcome::handled(Cmd::None)
}

fn on_scale_end(pager: &mut Pager) -> GestureOutcome {
    let mut cmd = Cmd::None;
    if pager.state.cancel_extra_scaling_pending {
        pager.state.cancel_extra_scaling_pending = false;
        pager.solver.set_extra_scaling_range(false);
        cmd = Cmd::Cancel(Timer::CancelExtraScaling);
    }
    pager.solver.end_scale();
    snap_to_neighbor(pager);
    GestureOutcome::handled(cmd)
}

/// The pinch sat in the over-zoom range past the deadline: abort it and
/// revert the overshoot allowance
pub fn on_extra_scaling_timeout(pager: &mut Pager) -> Cmd {
    pager.solver.set_extra_scaling_range(false);
    pager.state.cancel_extra_scaling_pending = false;
    Cmd::CancelPinch
}
