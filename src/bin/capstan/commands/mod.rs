//! Command implementations

pub mod apply;
pub mod completions;
pub mod show;
