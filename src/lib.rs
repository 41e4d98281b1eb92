//! # Exhaustive Cases & Runtime Errors
//!
//! This crate contains the examples for the lesson on exhaustive matching over
//! a closed set of tags, and on the runtime errors that slip through when a
//! module hands back an untyped value.
//!
//! ## Patterns Covered
//!
//! 1. **Closed tag sets** - `closed_tags!` declares an enum whose labels are
//!    exactly its variant names
//! 2. **Exhaustive dispatch** - a total `match` that stops compiling when the
//!    tag set grows
//! 3. **The impossible catch-all** - `Residual` and `assert_never`, a fallback
//!    arm whose argument is uninhabited once every tag is covered
//! 4. **Untyped collaborators** - a duck-typed score report, its defects, and
//!    the typed report that rules them out
//!
//! ## Running Examples
//!
//! ```bash
//! # Lesson 3: every tag has an arm
//! cargo run --bin p3_exhaustive_cases
//!
//! # Lesson 4: `Warning` was added but has no arm (crashes)
//! cargo run --bin p4_exhaustive_cases_warning
//!
//! # Lesson 6: reading a player out of an untyped report
//! cargo run --bin p6_runtime_errors_import
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the crate's error types
//! - `serde_json` - The untyped report value
//! - `tracing` - Diagnostics on stderr, filtered by `RUST_LOG`

pub mod console;
pub mod dispatch;
pub mod error;
pub mod log_line;
pub mod scores;
pub mod tags;

pub use error::{assert_never, Residual, ScoreError, UncoveredTagError};
pub use log_line::LogLine;
