//! Core model: the build environment, host detection, and wrapper discovery.

pub mod env;
pub mod host;
pub mod wrappers;
