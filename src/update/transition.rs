//! Transition-mode state machine
//!
//! Switch transitions are started by swipes and drag-release snaps, and
//! committed exactly once when the animation subsystem posts
//! `Msg::TransitionComplete` back onto the queue. The commit swaps
//! screen-nail ownership between the tile renderer and the slots so the
//! new current image never re-uploads its pixels.

use crate::commands::Cmd;
use crate::geometry::gap_to_side;
use crate::model::TransitionMode;
use crate::pager::Pager;

/// Fling-to-switch. Returns true when a switch transition started (or
/// restarted, for a fast same-direction swipe).
pub(crate) fn swipe_images(pager: &mut Pager, velocity_x: f32, velocity_y: f32) -> bool {
    match pager.state.transition {
        TransitionMode::None | TransitionMode::SwitchNext | TransitionMode::SwitchPrevious => {}
        _ => return false,
    }

    // Avoid swiping if this looks like a vertical fling through a
    // zoomed-in image
    let is_minimal = pager.solver.is_at_minimal_scale();
    let edges = pager.solver.image_at_edges();
    if !is_minimal && velocity_y.abs() > velocity_x.abs() && (!edges.top || !edges.bottom) {
        return false;
    }

    let half_width = pager.state.view_width / 2;
    let threshold = pager.config.swipe_velocity_threshold;

    if velocity_x < -threshold && (is_minimal || edges.right) {
        stop_current_switch(pager);
        if pager.state.slots.next.is_enabled() {
            tracing::debug!(velocity_x, "swipe to next");
            pager.state.transition = TransitionMode::SwitchNext;
            let offset = pager.state.slots.next.offset_x() - half_width;
            pager.solver.start_horizontal_slide(offset);
            return true;
        }
    } else if velocity_x > threshold && (is_minimal || edges.left) {
        stop_current_switch(pager);
        if pager.state.slots.previous.is_enabled() {
            tracing::debug!(velocity_x, "swipe to previous");
            pager.state.transition = TransitionMode::SwitchPrevious;
            let offset = pager.state.slots.previous.offset_x() - half_width;
            pager.solver.start_horizontal_slide(offset);
            return true;
        }
    }

    false
}

/// Commit an in-flight switch immediately so a fast swipe can start the
/// next one from a clean state
fn stop_current_switch(pager: &mut Pager) {
    match pager.state.transition {
        TransitionMode::SwitchNext => {
            pager.state.transition = TransitionMode::None;
            pager.solver.stop_animation();
            switch_to_next(pager);
        }
        TransitionMode::SwitchPrevious => {
            pager.state.transition = TransitionMode::None;
            pager.solver.stop_animation();
            switch_to_previous(pager);
        }
        _ => {}
    }
}

/// Drag-release snap: if the image was dragged far enough toward an
/// enabled neighbor, start the corresponding switch
pub(crate) fn snap_to_neighbor(pager: &mut Pager) -> bool {
    if !pager.state.transition.is_none() {
        return false;
    }

    let bounds = pager.solver.image_bounds();
    let left = bounds.left.round() as i32;
    let right = bounds.right.round() as i32;
    let width = pager.state.view_width;
    let threshold = pager.config.switch_threshold + gap_to_side(right - left, width);

    if pager.state.slots.next.is_enabled() && threshold < width - right {
        pager.state.transition = TransitionMode::SwitchNext;
        let offset = pager.state.slots.next.offset_x() - width / 2;
        pager.solver.start_horizontal_slide(offset);
        return true;
    }
    if pager.state.slots.previous.is_enabled() && threshold < left {
        pager.state.transition = TransitionMode::SwitchPrevious;
        let offset = pager.state.slots.previous.offset_x() - width / 2;
        pager.solver.start_horizontal_slide(offset);
        return true;
    }

    false
}

/// Commit forward: outgoing current becomes the previous slot's nail, the
/// next slot's nail becomes current, and the source advances
fn switch_to_next(pager: &mut Pager) {
    pager.tiles.invalidate_tiles();
    let outgoing = pager.tiles.take_screen_nail();
    pager.state.slots.previous.update(outgoing, &*pager.solver);
    let incoming = pager.state.slots.next.release();
    pager.tiles.put_screen_nail(incoming);
    if let Some(model) = &mut pager.model {
        model.next();
    }
}

/// Commit backward; mirror of [`switch_to_next`]
fn switch_to_previous(pager: &mut Pager) {
    pager.tiles.invalidate_tiles();
    let outgoing = pager.tiles.take_screen_nail();
    pager.state.slots.next.update(outgoing, &*pager.solver);
    let incoming = pager.state.slots.previous.release();
    pager.tiles.put_screen_nail(incoming);
    if let Some(model) = &mut pager.model {
        model.previous();
    }
}

/// The animation subsystem finished advancing the active animation
pub fn on_transition_complete(pager: &mut Pager) -> Cmd {
    let mode = std::mem::take(&mut pager.state.transition);
    tracing::debug!(?mode, "transition complete");

    if pager.model.is_none() {
        return Cmd::None;
    }
    match mode {
        TransitionMode::SwitchNext => {
            switch_to_next(pager);
            Cmd::Invalidate
        }
        TransitionMode::SwitchPrevious => {
            switch_to_previous(pager);
            Cmd::Invalidate
        }
        // Slide-in and open animations arrive on content that is already
        // current; nothing to commit
        _ => Cmd::None,
    }
}
