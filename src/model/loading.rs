//! Loading feedback state for the current image

/// What the user should see while the current image loads
///
/// Transitions:
/// ```text
///     Init     -> Timeout, Complete, Fail
///     Timeout  -> Complete, Fail, Init
///     Complete -> Init
///     Fail     -> Init
/// ```
/// `Timeout` is only entered from `Init` after the spinner debounce
/// elapses with no newer signal; see `update::loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    /// A load signal arrived but nothing is renderable yet; the spinner
    /// debounce is armed
    Init,
    /// The debounce elapsed: show the spinner
    Timeout,
    /// Renderable content exists (tiles or a screen-nail)
    #[default]
    Complete,
    /// The source reported a load failure; terminal until the source
    /// signals a successful invalidation
    Fail,
}

impl LoadingState {
    /// Whether the current image itself should be drawn
    pub fn shows_content(self) -> bool {
        self == LoadingState::Complete
    }
}
