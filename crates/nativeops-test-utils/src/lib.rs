//! Test fixtures for nativeops development.
//!
//! Deterministic integer arrays (including the sorted and reverse-sorted
//! worst cases for the quicksort) and helpers for NUL-terminated C-style
//! byte buffers. No dependency on the crates under test, so every crate
//! in the workspace can use it as a dev-dependency.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ascending, c_buffer, c_str, descending, scrambled, SAMPLE_WORDS};
