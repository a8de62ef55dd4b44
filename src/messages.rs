//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types; gestures, timer
//! firings and the transition-completion signal share one queue.

use crate::commands::Timer;

/// Direction an incoming image slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// Which image in the window around the current index changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Previous,
    Current,
    Next,
}

/// Semantic gesture events, as decoded by the host's gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMsg {
    /// First pointer went down; starts a gesture sequence
    Down { x: f32, y: f32 },
    /// Last pointer went up
    Up,
    /// Confirmed single tap (screen coordinates)
    SingleTapUp { x: f32, y: f32 },
    /// Double tap (reported on the second press)
    DoubleTap { x: f32, y: f32 },
    /// Drag by a delta since the last scroll event
    Scroll { dx: f32, dy: f32 },
    /// Pointer released with velocity
    Fling { velocity_x: f32, velocity_y: f32 },
    /// Pinch started around a focus point
    ScaleBegin { focus_x: f32, focus_y: f32 },
    /// Pinch update with an incremental scale factor
    Scale {
        focus_x: f32,
        focus_y: f32,
        factor: f32,
    },
    /// Pinch ended
    ScaleEnd,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// A gesture event from the recognizer
    Gesture(GestureMsg),
    /// A one-shot timer armed by an earlier `Cmd::Schedule` fired
    Timer(Timer),
    /// The animation subsystem finished the in-flight transition
    ///
    /// Posted (not called synchronously) so completion always runs on the
    /// update queue, even when the animation advances elsewhere.
    TransitionComplete,
}

impl Msg {
    /// Create a fling gesture message
    pub fn fling(velocity_x: f32, velocity_y: f32) -> Self {
        Msg::Gesture(GestureMsg::Fling {
            velocity_x,
            velocity_y,
        })
    }

    /// Create a scroll gesture message
    pub fn scroll(dx: f32, dy: f32) -> Self {
        Msg::Gesture(GestureMsg::Scroll { dx, dy })
    }
}
