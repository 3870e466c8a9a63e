//! Integration test crate.
//!
//! The suites live under `tests/`; this library target is intentionally
//! empty.
