//! # Domain Models
//!
//! Pure configuration types for the greeting service.
//! The only dependency is `serde`. No I/O and no file or environment access here;
//! loading lives in `greeter-kernel`, this crate only describes the shape and the merge.

pub mod config;
pub mod overrides;
