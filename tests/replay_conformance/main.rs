//! Replay Conformance Test Suite
//!
//! Checks the facade crate against hand-written wire bytes, independent of
//! the encoder, and the zero-value contract of the value-form calls, both on
//! fixed cases and on arbitrary bytes (proptest).
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test replay_conformance
//! cargo test --test replay_conformance wire_format::
//! ```

mod properties;
mod value_fallback;
mod wire_format;
