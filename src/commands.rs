//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host must perform after an update:
//! redrawing, arming or cancelling a one-shot timer, or cancelling the
//! platform pinch recognizer. The pager itself never blocks and never
//! owns a clock; "later" is always a scheduled message.

/// Tokens identifying the pager's one-shot delayed triggers
///
/// The host scheduler contract: `Cmd::Schedule` arms the token's timer,
/// `Cmd::Cancel` disarms it if pending, and a firing timer is delivered
/// back as `Msg::Timer(token)` on the same queue as gestures and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Debounce before loading feedback shows the spinner
    ShowLoading,
    /// Deadline for a pinch stuck in the over-zoom range
    CancelExtraScaling,
}

/// Commands returned by update and render
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw
    Invalidate,
    /// Arm a one-shot timer; replaces a pending timer with the same token
    Schedule { timer: Timer, delay_ms: u64 },
    /// Disarm a pending timer (no-op if none is pending)
    Cancel(Timer),
    /// Tell the gesture recognizer to abort the in-flight pinch
    CancelPinch,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing the trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command (or any nested one) requests a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Invalidate => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Merge another command after this one
    pub fn then(self, other: Cmd) -> Cmd {
        Cmd::batch(vec![self, other])
    }
}
