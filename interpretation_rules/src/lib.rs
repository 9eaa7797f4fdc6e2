//! # Interpretation Rules
//!
//! The "Field Bible" crate - alien languages, their observation logs, the interface
//! locales and the local grader. This crate is the single source of truth for game
//! content and grading, and contains no session or network logic.

pub mod content;
pub mod grader;
pub mod locale;
pub mod selector;
pub mod theory;

pub use content::*;
pub use grader::*;
pub use locale::*;
pub use selector::*;
pub use theory::*;
