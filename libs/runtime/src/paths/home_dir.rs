use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Platform base directory for per-user application data.
/// Windows: %APPDATA%, everything else: $HOME.
fn platform_base_dir() -> Result<PathBuf> {
    let var = if cfg!(windows) { "APPDATA" } else { "HOME" };
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("environment variable {var} is not set"))
}

fn expand_tilde(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return platform_base_dir();
    }
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(platform_base_dir()?.join(rest));
    }
    Ok(PathBuf::from(raw))
}

/// Resolve the application home directory into an absolute path.
///
/// - `raw = None` selects `<platform base>/<default_subdir>`.
/// - A leading `~` is expanded; relative paths are joined onto the current dir.
/// - With `create = true` the directory is created if missing.
pub fn resolve_home_dir(raw: Option<String>, default_subdir: &str, create: bool) -> Result<PathBuf> {
    let mut path = match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(p) => expand_tilde(p)?,
        None => platform_base_dir()?.join(default_subdir),
    };

    if path.is_relative() {
        path = std::env::current_dir()
            .context("cannot read current directory")?
            .join(path);
    }

    if create {
        ensure_dir(&path)?;
    }
    Ok(path)
}

fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create home dir {}", path.display()))
}
