//! Property-based soundness tests.
//!
//! Run with: `cargo test --test property`

mod encode_bounds;
mod scan_model;
