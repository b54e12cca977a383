//! Prints today's UPTEC canteen menu.
//!
//! The weekly menu is published as a PDF whose path is derived from the
//! Monday and Friday of the current week. [`pipeline::run`] resolves that
//! path, downloads the document, extracts its text and keeps the categorised
//! lines from today's section onwards.

pub mod constants;
pub mod error;
pub mod menu;
pub mod pipeline;
pub mod source;
pub mod week;
