//! Integration tests for maze-wanderer using the built-in simulator.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maze-wanderer --test integration -- --nocapture
//!
//! # With decision tracing
//! RUST_LOG=trace cargo test -p maze-wanderer --test integration open_maze
//! ```

mod harness;
mod scenarios;
