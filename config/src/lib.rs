//! Environment configuration for agentry binaries.
//!
//! Settings such as `AGENTRY_DB_PATH` or `GITHUB_TOKEN` come from three places, applied
//! to the process environment with priority **existing env > `.env` > XDG `config.toml`**.
//! The XDG file is `$XDG_CONFIG_HOME/<app_name>/config.toml` and only its `[env]` table is read:
//!
//! ```toml
//! [env]
//! AGENTRY_DB_PATH = "/var/lib/agentry/agents.db"
//! GITHUB_TOKEN = "ghp_..."
//! ```

mod dotenv;
mod xdg_toml;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Loads `.env` and the XDG `config.toml` for `app_name`, then sets every key that is
/// **not** already present in the process environment.
///
/// * `app_name`: e.g. `"agentry"`; selects `~/.config/<app_name>/config.toml`.
/// * `override_dir`: look for `.env` here instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let config_home = xdg_toml::config_home()?;
    apply_from(config_home.as_deref(), app_name, override_dir)
}

fn apply_from(
    config_home: Option<&Path>,
    app_name: &str,
    override_dir: Option<&Path>,
) -> Result<(), LoadError> {
    let xdg_map = match config_home {
        Some(home) => xdg_toml::load_env_map(home, app_name)?,
        None => HashMap::new(),
    };
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let keys: HashSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(value) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn write_xdg(home: &Path, app: &str, body: &str) {
        let app_dir = home.join(app);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), body).unwrap();
    }

    #[test]
    fn existing_env_wins() {
        env::set_var("AGENTRY_CFG_TEST_EXISTING", "from_env");
        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "AGENTRY_CFG_TEST_EXISTING=from_dotenv\n",
        )
        .unwrap();

        apply_from(None, "agentry", Some(dotenv_dir.path())).unwrap();
        assert_eq!(
            env::var("AGENTRY_CFG_TEST_EXISTING").as_deref(),
            Ok("from_env")
        );
        env::remove_var("AGENTRY_CFG_TEST_EXISTING");
    }

    #[test]
    fn missing_sources_are_ok() {
        let empty = tempfile::tempdir().unwrap();
        let r = apply_from(Some(empty.path()), "agentry", Some(empty.path()));
        assert!(r.is_ok());
    }

    #[test]
    fn dotenv_overrides_xdg() {
        let xdg_dir = tempfile::tempdir().unwrap();
        write_xdg(
            xdg_dir.path(),
            "agentry",
            "[env]\nAGENTRY_CFG_TEST_PRIORITY = \"from_xdg\"\n",
        );
        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "AGENTRY_CFG_TEST_PRIORITY=from_dotenv\n",
        )
        .unwrap();

        env::remove_var("AGENTRY_CFG_TEST_PRIORITY");
        apply_from(Some(xdg_dir.path()), "agentry", Some(dotenv_dir.path())).unwrap();
        let val = env::var("AGENTRY_CFG_TEST_PRIORITY").unwrap();
        env::remove_var("AGENTRY_CFG_TEST_PRIORITY");

        assert_eq!(val, "from_dotenv");
    }

    #[test]
    fn xdg_applied_when_no_dotenv() {
        let xdg_dir = tempfile::tempdir().unwrap();
        write_xdg(
            xdg_dir.path(),
            "agentry",
            "[env]\nAGENTRY_CFG_TEST_XDG_ONLY = \"from_xdg\"\n",
        );
        let empty_dir = tempfile::tempdir().unwrap();

        env::remove_var("AGENTRY_CFG_TEST_XDG_ONLY");
        apply_from(Some(xdg_dir.path()), "agentry", Some(empty_dir.path())).unwrap();
        let val = env::var("AGENTRY_CFG_TEST_XDG_ONLY").unwrap();
        env::remove_var("AGENTRY_CFG_TEST_XDG_ONLY");

        assert_eq!(val, "from_xdg");
    }

    #[test]
    fn invalid_xdg_toml_fails_with_xdg_parse_error() {
        let xdg_dir = tempfile::tempdir().unwrap();
        write_xdg(xdg_dir.path(), "agentry", "invalid [[[\n");
        let empty_dir = tempfile::tempdir().unwrap();

        let result = apply_from(Some(xdg_dir.path()), "agentry", Some(empty_dir.path()));
        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}
