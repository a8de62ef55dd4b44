//! Filmstrip - photo pager controller
//!
//! The transition, loading-state and neighbor-layout controller of an
//! interactive single-image viewer embedded in a linear photo sequence.
//! It decides, every frame and on every gesture, which of the current/
//! previous/next visuals are shown and where, which animated transition
//! is in flight, how the gesture stream maps to navigation or zoom/pan
//! intents, and when loading feedback (spinner/failure text) appears.
//!
//! The crate follows the Elm Architecture pattern: state in [`model`],
//! mutation through [`update::update`], drawing through [`view::render`],
//! side effects returned as [`Cmd`] values the host performs. Image data,
//! pan/zoom physics and actual drawing stay outside, behind the traits in
//! [`external`].

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod curves;
pub mod external;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod pager;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::{Cmd, Timer};
pub use config::PagerConfig;
pub use geometry::{Edges, Rect, RectF, Rotation, INVALID_SIZE};
pub use messages::{GestureMsg, ImageSlot, Msg, SlideDirection};
pub use model::{LoadingState, PagerState, TransitionMode};
pub use pager::Pager;
pub use update::{update, GestureOutcome};
pub use view::render;
