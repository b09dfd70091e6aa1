//! Host platform detection.

use std::fmt;

/// Host operating-system family, as far as the hook cares.
///
/// The patcher takes the host explicitly so the non-Windows no-op is
/// testable on any CI host; `detect` is applied at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Windows.
    Windows,
    /// Anything with a POSIX-ish toolchain layout (linux, macos, bsd).
    Unix,
}

impl HostOs {
    /// Detect the host family.
    pub fn detect() -> Self {
        // Use Rust's notion of the host OS as approximation.
        match std::env::consts::OS {
            "windows" => HostOs::Windows,
            _ => HostOs::Unix,
        }
    }

    /// Whether this is a Windows host.
    pub fn is_windows(self) -> bool {
        matches!(self, HostOs::Windows)
    }

    /// Separator between entries of a search-path list (`PATH`).
    pub fn path_list_separator(self) -> char {
        match self {
            HostOs::Windows => ';',
            HostOs::Unix => ':',
        }
    }

    /// Get the host family as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            HostOs::Windows => "windows",
            HostOs::Unix => "unix",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
