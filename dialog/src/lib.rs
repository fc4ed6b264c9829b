//! Typewriter text pacing and battle dialog box state.
//!
//! The dialog box of a battle screen reveals its text one character at a
//! time and shows the action and move menus. This crate models that without
//! any engine types: the host feeds it time and input, and renders what it
//! reports.
//!
//! # Main Types
//!
//! - [`Typewriter`] - Timing state machine revealing one line at a time
//! - [`RevealSink`] / [`RevealEvent`] - Per-character events for the text surface
//! - [`TypewriterConfig`] - Reveal rate, fast-forward and settle pacing
//! - [`DialogBox`] - Panels, menu highlights and move labels
//! - [`play_line`] - Drives a [`Typewriter`] in real time on tokio
//!
//! # Example Usage
//!
//! ```
//! use std::time::Duration;
//! use encounter_dialog::{RevealEvent, Typewriter, TypewriterConfig};
//!
//! let mut typewriter = Typewriter::new(TypewriterConfig::with_rate(10.0))?;
//! let mut events: Vec<RevealEvent> = Vec::new();
//!
//! typewriter.begin_line("GO", &mut events)?;
//! typewriter.advance(Duration::from_millis(200), &mut events);
//! assert_eq!(typewriter.revealed(), "GO");
//!
//! typewriter.advance(Duration::from_millis(1100), &mut events);
//! assert!(!typewriter.is_busy());
//! # Ok::<(), encounter_dialog::DialogError>(())
//! ```

mod config;
mod dialog_box;
mod driver;
mod error;
pub mod menu;
mod typewriter;

pub use config::{ReentryPolicy, TypewriterConfig};
pub use dialog_box::{DialogBox, Panels};
pub use driver::play_line;
pub use error::DialogError;
pub use menu::{Action, Highlight, MoveChoice, MoveDetails};
pub use typewriter::{Phase, RevealEvent, RevealSink, Typewriter};
