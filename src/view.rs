//! Neighbor layout and render-order orchestration
//!
//! Layout places the previous/next slots against the current image's
//! bounds; render decides what is visible this frame and in what order.
//!
//! How the slots are laid out:
//!
//! ```text
//!  previous            current           next
//!  ___________       ________________     __________
//! |  _______  |     |   __________   |   |  ______  |
//! | |       | |     |  |   right->|  |   | |      | |
//! | |       |<-------->|<--left   |  |   | |      | |
//! | |_______| |  |  |  |__________|  |   | |______| |
//! |___________|  |  |________________|   |__________|
//!                |  <--> gap_to_side()
//!                |
//! image_gap + max(previous.gap_to_side(), current gap)
//! ```

use crate::commands::Cmd;
use crate::external::Canvas;
use crate::geometry::gap_to_side;
use crate::model::LoadingState;
use crate::pager::Pager;

/// Recompute both slots' screen offsets from the current image bounds.
/// Runs on every placement from the solver, so neighbor positions track
/// pan/zoom/fling frame by frame.
pub(crate) fn layout_slots(pager: &mut Pager) {
    let width = pager.state.view_width;

    // Bounds may be faked while the real image size is unknown; that is
    // fine, layout just follows them
    let bounds = pager.solver.image_bounds();
    let left = bounds.left.round() as i32;
    let right = bounds.right.round() as i32;
    let gap = gap_to_side(right - left, width);
    let image_gap = pager.config.image_gap;

    let previous = &mut pager.state.slots.previous;
    if previous.is_enabled() {
        let x = left - (image_gap + gap.max(previous.gap_to_side(width)));
        previous.layout_right_edge_at(x);
    }

    let next = &mut pager.state.slots.next;
    if next.is_enabled() {
        let x = right + (image_gap + gap.max(next.gap_to_side(width)));
        next.layout_left_edge_at(x, width);
    }
}

/// Draw one frame
///
/// Order: next slot (faded), current image, overlays, previous slot.
/// Entrance animations (slide-in/open) suppress both slots so only the
/// arriving image is visible. Returns `Cmd::Invalidate` while the spinner
/// needs to keep turning. Advances the solver's animation exactly once.
pub fn render(pager: &mut Pager, canvas: &mut dyn Canvas) -> Cmd {
    let draw_neighbors = !pager.state.transition.suppresses_neighbors();
    let view_width = pager.state.view_width;
    let view_height = pager.state.view_height;

    if draw_neighbors {
        pager
            .state
            .slots
            .next
            .draw(canvas, true, view_width, view_height, &pager.curves);
    }

    if pager.state.loading.shows_content() {
        pager.tiles.draw(canvas);
    }

    // Feedback goes at the center of the image once it is drawn,
    // otherwise at the center of the view
    let (cx, cy) = if pager.state.loading.shows_content() {
        pager.tiles.image_center()
    } else {
        (view_width / 2, view_height / 2)
    };
    let cmd = render_overlays(pager, canvas, cx, cy);

    if draw_neighbors {
        pager
            .state
            .slots
            .previous
            .draw(canvas, false, view_width, view_height, &pager.curves);
    }

    pager.solver.advance_animation();
    cmd
}

fn render_overlays(pager: &mut Pager, canvas: &mut dyn Canvas, cx: i32, cy: i32) -> Cmd {
    // The icon square also anchors the label so text stays put when the
    // play icon replaces the spinner
    let s = pager.state.view_width.min(pager.state.view_height) / 6;
    let mut cmd = Cmd::None;

    match pager.state.loading {
        LoadingState::Timeout => {
            canvas.draw_spinner(cx, cy);
            canvas.draw_loading_label(cx, cy + s / 2 + 5);
            // keep the spinner turning
            cmd = Cmd::Invalidate;
        }
        LoadingState::Fail => {
            canvas.draw_failure_label(cx, cy + s / 2 + 5);
        }
        LoadingState::Init | LoadingState::Complete => {}
    }

    if pager.state.show_video_play_icon
        && !matches!(
            pager.state.loading,
            LoadingState::Init | LoadingState::Timeout
        )
    {
        canvas.draw_video_play_icon(cx - s / 2, cy - s / 2, s);
    }

    cmd
}
