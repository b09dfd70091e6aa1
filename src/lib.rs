//! Capstan - a pre-build toolchain hook for Windows native builds
//!
//! This crate detects whether a project ships its own compiler wrapper
//! scripts under `tools/bin` and, if so, rewires the build environment's
//! compiler variables and search path to use them instead of the system
//! toolchain.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::env::BuildEnv;
pub use crate::core::host::HostOs;
pub use crate::core::wrappers::{find_tools_bin, WrapperSet, WrapperTool};
pub use crate::ops::apply::{apply_hook, ApplyOptions, HookOutcome};
pub use crate::util::config::Config;
pub use crate::util::context::HookContext;
