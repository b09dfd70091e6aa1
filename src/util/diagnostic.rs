//! User-facing diagnostic errors.
//!
//! Every error names its root cause and carries a suggested fix. Absence of
//! the wrapper scripts is deliberately not an error anywhere in this crate;
//! the hook falls back to the system toolchain instead.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors the hook surfaces to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum HookError {
    /// The project directory cannot be resolved to an absolute path.
    #[error("project directory {} cannot be resolved", path.display())]
    #[diagnostic(
        code(capstan::project_dir),
        help("pass --project-dir or set PROJECT_DIR to an existing project root")
    )]
    ProjectDirUnresolvable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file exists but cannot be read or parsed.
    #[error("invalid config file {}", path.display())]
    #[diagnostic(
        code(capstan::config),
        help("fix or remove the file; only a [hook] table with tools_bin, jobs and disabled is recognized")
    )]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = HookError::ProjectDirUnresolvable {
            path: PathBuf::from("/does/not/exist"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/does/not/exist"));
    }
}
