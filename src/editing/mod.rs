//! Buffer-facing transformation pipeline.
//!
//! This module turns a scanned token stream back into a script with
//! normalized keyword casing and applies it to a live editing surface.
//!
//! Modules:
//! - `cursor`    : Caret / selection position captured around an edit.
//! - `document`  : The `TextBuffer` boundary plus an in-process buffer.
//! - `recase`    : Pure classification + reassembly (no buffer access).
//! - `transform` : The one-shot pipeline gluing scan, rewrite and edit.
//!
//! Design Principles:
//! 1. The pure half (`recase`) is synchronous and infallible so it can be
//!    tested without any buffer in sight.
//! 2. The buffer is read once and written at most once per invocation;
//!    a rewrite that changes nothing never touches it.
//! 3. Failures surface as `Result`, never as a half-applied edit.

pub mod cursor;
pub mod document;
pub mod recase;
pub mod transform;

pub use cursor::Cursor;
pub use document::{MemoryBuffer, TextBuffer};
pub use recase::{reassemble, recase, rendered};
pub use transform::{Outcome, transform, transform_with};
