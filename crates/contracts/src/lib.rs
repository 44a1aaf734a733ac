//! Shared model of the MYST Lounge site.
//!
//! Everything here is plain Rust without browser dependencies, so the state
//! machines that drive the frontend run under native `cargo test`.

pub mod domain;
pub mod enums;
pub mod shared;
