//! Toolchain wrapper discovery.
//!
//! A project may ship `.cmd` wrapper scripts under a `tools/bin` directory
//! that forward to real compiler/archiver binaries. Discovery walks from the
//! project directory upward through its ancestors and selects the first
//! directory shipping both compiler wrappers. The resulting mapping is
//! all-or-nothing: a directory with only one of the two compiler wrappers
//! never produces a set.

use std::path::{Path, PathBuf};

/// The tools a wrapper directory provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperTool {
    /// C compiler.
    Cc,
    /// C++ compiler.
    Cxx,
    /// Archiver.
    Ar,
    /// Archive indexer.
    Ranlib,
}

impl WrapperTool {
    /// All tools, in the order their variables are conventionally listed.
    pub const ALL: [WrapperTool; 4] = [
        WrapperTool::Cc,
        WrapperTool::Cxx,
        WrapperTool::Ar,
        WrapperTool::Ranlib,
    ];

    /// Build variable the tool is bound to.
    pub fn var_name(self) -> &'static str {
        match self {
            WrapperTool::Cc => "CC",
            WrapperTool::Cxx => "CXX",
            WrapperTool::Ar => "AR",
            WrapperTool::Ranlib => "RANLIB",
        }
    }

    /// Wrapper script file name inside the tools directory.
    pub fn file_name(self) -> &'static str {
        match self {
            WrapperTool::Cc => "gcc.cmd",
            WrapperTool::Cxx => "g++.cmd",
            WrapperTool::Ar => "ar.cmd",
            WrapperTool::Ranlib => "ranlib.cmd",
        }
    }

    /// Whether the tool's wrapper must exist for a directory to qualify.
    ///
    /// `ar.cmd` and `ranlib.cmd` are expected alongside the compilers but
    /// are not part of the gate.
    pub fn required(self) -> bool {
        matches!(self, WrapperTool::Cc | WrapperTool::Cxx)
    }
}

/// The wrapper mapping: every tool resolved to a path inside one qualifying
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSet {
    dir: PathBuf,
}

impl WrapperSet {
    /// Accept `dir` only when both required wrappers exist in it.
    pub fn from_dir(dir: &Path) -> Option<Self> {
        let qualifies = WrapperTool::ALL
            .into_iter()
            .filter(|tool| tool.required())
            .all(|tool| dir.join(tool.file_name()).exists());

        qualifies.then(|| WrapperSet {
            dir: dir.to_path_buf(),
        })
    }

    /// The wrapper directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of one tool's wrapper script.
    pub fn path(&self, tool: WrapperTool) -> PathBuf {
        self.dir.join(tool.file_name())
    }

    /// `(variable name, wrapper path)` for every tool in the set.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, PathBuf)> + '_ {
        WrapperTool::ALL
            .into_iter()
            .map(|tool| (tool.var_name(), self.path(tool)))
    }
}

/// Find the wrapper directory for a project.
///
/// Walks from `start` upward through its ancestors (inclusive) and returns
/// the first `tools/bin` subdirectory shipping both compiler wrappers, or
/// `None` when no ancestor up to the filesystem root qualifies.
pub fn find_tools_bin(start: &Path) -> Option<WrapperSet> {
    for candidate in start.ancestors() {
        let tools_bin = candidate.join("tools").join("bin");
        if let Some(set) = WrapperSet::from_dir(&tools_bin) {
            tracing::debug!("wrapper directory found at {}", tools_bin.display());
            return Some(set);
        }
    }

    tracing::debug!(
        "no wrapper directory at or above {}",
        start.display()
    );
    None
}
