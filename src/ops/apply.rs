//! The pre-build patch operation.
//!
//! Rewires a build environment to use project-shipped compiler wrappers:
//! prepends the wrapper directory to the search path and points the
//! compiler/archiver variables at the wrapper scripts, both in the exported
//! subprocess environment and in the build tool's variable table.
//!
//! Absence of the wrappers is an expected, recoverable condition: the
//! environment is left untouched and the system toolchain stays in effect.
//! Wrapper executability is not validated.

use std::path::{Path, PathBuf};

use crate::core::env::BuildEnv;
use crate::core::host::HostOs;
use crate::core::wrappers::{find_tools_bin, WrapperSet};
use crate::util::config::Config;

/// Variable holding the search path in the exported environment.
const PATH_VAR: &str = "PATH";

/// Flag variable that limits build parallelism for the host tool.
const JOBS_FLAG_VAR: &str = "SCONSFLAGS";

/// What the hook did to the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Host is not Windows; nothing was inspected or changed.
    SkippedHost,
    /// Hook disabled by configuration; nothing changed.
    Disabled,
    /// No wrapper directory found; the system toolchain stays in effect.
    SystemToolchain,
    /// Environment now points at the wrappers in `tools_bin`.
    Wrappers { tools_bin: PathBuf },
}

impl HookOutcome {
    /// Get the outcome as a machine-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookOutcome::SkippedHost => "skipped-host",
            HookOutcome::Disabled => "disabled",
            HookOutcome::SystemToolchain => "system-toolchain",
            HookOutcome::Wrappers { .. } => "wrappers",
        }
    }

    /// The wrapper directory, when one was selected.
    pub fn tools_bin(&self) -> Option<&Path> {
        match self {
            HookOutcome::Wrappers { tools_bin } => Some(tools_bin),
            _ => None,
        }
    }
}

/// Patch options, distilled from configuration and CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Explicit wrapper directory, tried before the ancestor search.
    pub tools_bin: Option<PathBuf>,
    /// Job count for the parallelism default (1 when unset).
    pub jobs: Option<usize>,
    /// Skip the hook entirely.
    pub disabled: bool,
}

impl ApplyOptions {
    /// Build options from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        ApplyOptions {
            tools_bin: config.hook.tools_bin.clone(),
            jobs: config.hook.jobs,
            disabled: config.hook.disabled,
        }
    }
}

/// Rewire `env` to the project's wrapper toolchain.
///
/// No-op on non-Windows hosts, checked before anything else: no filesystem
/// search is performed and no variable is touched. On a Windows host the
/// wrapper directory is located (configured override first, ancestor search
/// from `project_dir` second) and the environment patched in place.
pub fn apply_hook(
    env: &mut BuildEnv,
    host: HostOs,
    project_dir: &Path,
    opts: &ApplyOptions,
) -> HookOutcome {
    if !host.is_windows() {
        tracing::debug!("host is {}, leaving toolchain alone", host);
        return HookOutcome::SkippedHost;
    }

    if opts.disabled {
        tracing::debug!("hook disabled by configuration");
        return HookOutcome::Disabled;
    }

    let wrappers = match locate_wrappers(project_dir, opts) {
        Some(wrappers) => wrappers,
        None => {
            tracing::debug!("tools/bin wrappers not found, using system gcc/g++");
            return HookOutcome::SystemToolchain;
        }
    };

    patch_env(env, host, &wrappers, opts);

    let tools_bin = wrappers.dir().to_path_buf();
    tracing::debug!("using toolchain wrappers from {}", tools_bin.display());
    HookOutcome::Wrappers { tools_bin }
}

/// Configured override first, ancestor search second.
///
/// An override that is missing the compiler wrappers is ignored with a
/// warning rather than trusted blindly.
fn locate_wrappers(project_dir: &Path, opts: &ApplyOptions) -> Option<WrapperSet> {
    if let Some(dir) = &opts.tools_bin {
        match WrapperSet::from_dir(dir) {
            Some(set) => return Some(set),
            None => tracing::warn!(
                "configured tools_bin {} is missing compiler wrappers, searching instead",
                dir.display()
            ),
        }
    }

    find_tools_bin(project_dir)
}

fn patch_env(env: &mut BuildEnv, host: HostOs, wrappers: &WrapperSet, opts: &ApplyOptions) {
    let dir = wrappers.dir().to_string_lossy().into_owned();

    // Prepend; existing entries stay intact and unreordered.
    let path = match env.env(PATH_VAR) {
        Some(old) if !old.is_empty() => {
            format!("{}{}{}", dir, host.path_list_separator(), old)
        }
        _ => dir,
    };
    env.set_env(PATH_VAR, path);

    // The caller's own flag wins.
    let jobs = opts.jobs.unwrap_or(1);
    env.set_env_default(JOBS_FLAG_VAR, format!("-j{}", jobs));

    for (var, wrapper) in wrappers.bindings() {
        let value = wrapper.to_string_lossy().into_owned();
        env.set_env(var, value.clone());
        env.set_var(var, value);
    }
}
