//! Invocation context for hook commands.
//!
//! Resolves where the hook runs and which project it configures. The
//! project directory comes from the caller (the CLI feeds both the
//! `--project-dir` flag and the host tool's `PROJECT_DIR` variable through
//! it) and falls back to the current directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config;
use crate::util::diagnostic::HookError;

/// Resolved invocation context.
#[derive(Debug, Clone)]
pub struct HookContext {
    cwd: PathBuf,
    project_dir: PathBuf,
}

impl HookContext {
    /// Resolve the context from an optional explicit project directory.
    ///
    /// The project directory is resolved to an absolute path once, here;
    /// everything downstream works with the resolved path.
    pub fn resolve(project_dir: Option<PathBuf>) -> Result<Self> {
        let cwd =
            std::env::current_dir().context("failed to determine current directory")?;

        let raw = project_dir.unwrap_or_else(|| cwd.clone());
        let project_dir = raw
            .canonicalize()
            .map_err(|source| HookError::ProjectDirUnresolvable {
                path: raw.clone(),
                source,
            })?;

        Ok(HookContext { cwd, project_dir })
    }

    /// The directory the hook was invoked from.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The resolved project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path of the project config file for this project.
    pub fn project_config_path(&self) -> PathBuf {
        config::project_config_path(&self.project_dir)
    }

    /// Path of the global config file, if a home directory exists.
    pub fn global_config_path(&self) -> Option<PathBuf> {
        config::global_config_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_dir() {
        let tmp = TempDir::new().unwrap();
        let ctx = HookContext::resolve(Some(tmp.path().to_path_buf())).unwrap();

        assert!(ctx.project_dir().is_absolute());
        assert_eq!(ctx.project_dir(), tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_defaults_to_cwd() {
        let ctx = HookContext::resolve(None).unwrap();
        assert_eq!(ctx.cwd(), std::env::current_dir().unwrap());
        assert_eq!(
            ctx.project_dir(),
            std::env::current_dir().unwrap().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_resolve_rejects_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let err = HookContext::resolve(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("cannot be resolved"));
    }

    #[test]
    fn test_project_config_path_is_under_project() {
        let tmp = TempDir::new().unwrap();
        let ctx = HookContext::resolve(Some(tmp.path().to_path_buf())).unwrap();

        let path = ctx.project_config_path();
        assert!(path.starts_with(ctx.project_dir()));
        assert!(path.ends_with(Path::new(".capstan").join("config.toml")));
    }
}
