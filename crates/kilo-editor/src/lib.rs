//! # kilo-editor — Editor core for kilo
//!
//! - **[`document`]** — `Row` and `Document`, the lines of the opened file
//! - **[`cursor`]** — viewport-relative cursor with clamped movement
//! - **[`view`]** — frame composition into a single write
//! - **[`editor`]** — the `Editor` state and key handling
//! - **[`error`]** — the fatal error type

pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod view;

pub use error::{Error, Result};
