//! Shell configuration.

use crate::backend::auth::gate::BuildProfile;
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "STARTER_SHELL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub project_name: String,
    pub company_name: String,
    /// Root of the starter server; GraphQL and `/logout` live under it.
    pub server_url: String,
    pub terms_url: Option<String>,
    pub profile: Option<BuildProfile>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            project_name: "Starter".to_string(),
            company_name: "Starter Corp".to_string(),
            server_url: "http://localhost:5678".to_string(),
            terms_url: None,
            profile: None,
        }
    }
}

impl ShellConfig {
    /// Gets the path to the config file.
    pub fn get_config_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("starter-shell.json"))
    }

    /// Loads the config from disk, falling back to defaults when the file is
    /// missing, then applies environment overrides.
    pub async fn load() -> Result<Self> {
        let config_path = Self::get_config_path();

        let mut config = if config_path.exists() {
            let json = fs::read_to_string(&config_path).await?;
            serde_json::from_str(&json)?
        } else {
            log::info!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(root) = var("ROOT_URL") {
            self.server_url = root;
        }
        if let Some(terms) = var("T_AND_C_URL").filter(|t| !t.is_empty()) {
            self.terms_url = Some(terms);
        }
        if let Some(env) = var("STARTER_ENV") {
            match BuildProfile::parse(&env) {
                Some(profile) => self.profile = Some(profile),
                None => log::warn!("Ignoring unknown STARTER_ENV value {env:?}"),
            }
        }
    }

    pub fn build_profile(&self) -> BuildProfile {
        self.profile.unwrap_or_else(BuildProfile::current)
    }

    fn server_root(&self) -> Result<Url> {
        let mut root = Url::parse(&self.server_url)?;
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        Ok(root)
    }

    pub fn graphql_url(&self) -> Result<Url> {
        Ok(self.server_root()?.join("graphql")?)
    }

    pub fn logout_url(&self) -> Result<Url> {
        Ok(self.server_root()?.join("logout")?)
    }

    pub fn websocket_url(&self) -> Result<Url> {
        let mut url = self.graphql_url()?;
        let scheme = match url.scheme() {
            "https" => "wss",
            _ => "ws",
        };
        url.set_scheme(scheme)
            .map_err(|()| crate::simple_error!("Cannot derive websocket URL from {}", url))?;
        Ok(url)
    }

    /// Window title for a page: `"<title> — <project>"`, or just the project.
    pub fn page_title(&self, title: &str) -> String {
        if title.is_empty() {
            self.project_name.clone()
        } else {
            format!("{title} — {}", self.project_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn derives_endpoints_from_server_url() {
        let config = ShellConfig {
            server_url: "https://example.com/app".to_string(),
            ..ShellConfig::default()
        };

        assert_eq!(
            config.graphql_url().unwrap().as_str(),
            "https://example.com/app/graphql"
        );
        assert_eq!(
            config.logout_url().unwrap().as_str(),
            "https://example.com/app/logout"
        );
        assert_eq!(
            config.websocket_url().unwrap().as_str(),
            "wss://example.com/app/graphql"
        );
    }

    #[test]
    fn plain_http_maps_to_ws() {
        let config = ShellConfig::default();
        assert_eq!(
            config.websocket_url().unwrap().as_str(),
            "ws://localhost:5678/graphql"
        );
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("ROOT_URL", "http://staging:3000"),
            ("T_AND_C_URL", "https://example.com/terms"),
            ("STARTER_ENV", "production"),
        ]
        .into_iter()
        .collect();

        let mut config = ShellConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server_url, "http://staging:3000");
        assert_eq!(config.terms_url.as_deref(), Some("https://example.com/terms"));
        assert_eq!(config.build_profile(), BuildProfile::Production);
    }

    #[test]
    fn empty_terms_url_is_ignored() {
        let mut config = ShellConfig::default();
        config.apply_env(|key| (key == "T_AND_C_URL").then(String::new));
        assert_eq!(config.terms_url, None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{ "project_name": "Acme", "profile": "development" }"#)
                .unwrap();

        assert_eq!(config.project_name, "Acme");
        assert_eq!(config.company_name, ShellConfig::default().company_name);
        assert_eq!(config.profile, Some(BuildProfile::Development));
    }

    #[test]
    fn page_title_falls_back_to_project() {
        let config = ShellConfig::default();
        assert_eq!(config.page_title(""), "Starter");
        assert_eq!(config.page_title("Settings"), "Settings — Starter");
    }
}
