//! Platform abstraction layer
//!
//! Browser-facing glue that can still be tested natively.

pub mod keys;

pub use keys::key_from_name;
