use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config key and the environment variable that overrides it
const ENV_VARS: [(&str, &str); 3] = [
    ("url", "JIRA_URL"),
    ("username", "JIRA_USERNAME"),
    ("password", "JIRA_PASSWORD"),
];

/// Jira connection settings
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Settings required to build a client
#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Layer defaults, config files and `JIRA_*` environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // Raw strings: numeric usernames and PIN-style passwords keep their digits
        for (key, var) in ENV_VARS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let mut config: Config = figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))?;
        config.trim();

        Ok(config)
    }

    pub fn merge_with_cli(
        &mut self,
        cli_url: Option<String>,
        cli_username: Option<String>,
        cli_password: Option<String>,
    ) {
        if let Some(url) = cli_url {
            self.url = Some(url);
        }
        if let Some(username) = cli_username {
            self.username = Some(username);
        }
        if let Some(password) = cli_password {
            self.password = Some(password);
        }
        self.trim();
    }

    /// Require a URL and username; the password may be empty
    pub fn credentials(&self) -> Result<Credentials> {
        let url = self.url.clone().filter(|url| !url.is_empty()).ok_or_else(|| {
            anyhow!("Jira URL not configured. Set via --url, JIRA_URL env var, or config file")
        })?;
        let username = self
            .username
            .clone()
            .filter(|username| !username.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "Jira username not configured. Set via --username, JIRA_USERNAME env var, or config file"
                )
            })?;

        Ok(Credentials {
            url,
            username,
            password: self.password.clone().unwrap_or_default(),
        })
    }

    fn trim(&mut self) {
        for value in [&mut self.url, &mut self.username, &mut self.password]
            .into_iter()
            .flatten()
        {
            *value = value.trim().to_string();
        }
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "createmeta").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("createmeta").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("createmeta")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "jira.toml",
                r#"
                url = "https://jira.example.com/"
                username = "file-user"
                password = "file-pass"
                "#,
            )?;
            jail.set_env("JIRA_USERNAME", "  env-user\n");

            let config = Config::load(Some(PathBuf::from("jira.toml"))).map_err(|e| e.to_string())?;

            assert_eq!(config.url.as_deref(), Some("https://jira.example.com/"));
            assert_eq!(config.username.as_deref(), Some("env-user"));
            assert_eq!(config.password.as_deref(), Some("file-pass"));
            Ok(())
        });
    }

    #[test]
    fn test_env_values_stay_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("JIRA_URL", "https://jira.example.com");
            jail.set_env("JIRA_USERNAME", "12345");
            jail.set_env("JIRA_PASSWORD", "000123");

            let config = Config::load(None).map_err(|e| e.to_string())?;
            let credentials = config.credentials().map_err(|e| e.to_string())?;

            assert_eq!(credentials.username, "12345");
            assert_eq!(credentials.password, "000123");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|_jail| {
            let err = Config::load(Some(PathBuf::from("absent.toml"))).unwrap_err();
            assert!(err.to_string().contains("Config file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config {
            url: Some("https://old.example.com".to_string()),
            username: Some("old".to_string()),
            password: None,
        };

        config.merge_with_cli(None, Some(" new ".to_string()), Some("secret".to_string()));

        assert_eq!(
            config.credentials().unwrap(),
            Credentials {
                url: "https://old.example.com".to_string(),
                username: "new".to_string(),
                password: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_credentials_require_url_and_username() {
        let err = Config::default().credentials().unwrap_err();
        assert!(err.to_string().contains("URL not configured"));

        let mut config = Config::default();
        config.merge_with_cli(
            Some("https://jira.example.com".to_string()),
            Some("   ".to_string()),
            None,
        );
        let err = config.credentials().unwrap_err();
        assert!(err.to_string().contains("username not configured"));
    }

    #[test]
    fn test_password_defaults_to_empty() {
        let config = Config {
            url: Some("https://jira.example.com".to_string()),
            username: Some("user".to_string()),
            password: None,
        };

        assert_eq!(config.credentials().unwrap().password, "");
    }
}
