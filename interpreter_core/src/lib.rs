//! # Interpreter Core
//!
//! The session side of the radical interpretation game. This crate drives a
//! playthrough over the content and grader in `interpretation_rules`, and can
//! consult a remote model for fresh scenarios and theory reviews.
//!
//! ## Core Components
//!
//! - **session**: The game state machine, campaign archive and final report
//! - **interpreter**: Fills the loading and evaluation slots with pacing and fallback
//! - **oracle**: Optional remote model (Gemini) behind the `Oracle` trait
//! - **config**: TOML configuration
//!
//! ## Design Philosophy
//!
//! - **State-Driven**: Every player action is a checked transition; refused actions change nothing
//! - **Local First**: Static content and the keyword grader work with no network at all
//! - **Recoverable**: Remote failures fall back silently and never reach the player as errors

pub mod config;
pub mod interpreter;
pub mod oracle;
pub mod session;

pub use config::*;
pub use interpreter::*;
pub use oracle::*;
pub use session::*;
