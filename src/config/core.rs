use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

use super::PlanSettings;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct StagecheckConfig {
    figment: Figment,
}

impl StagecheckConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            let extension = std::path::Path::new(custom_path)
                .extension()
                .and_then(|e| e.to_str());
            figment = match extension {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(Self::user_config_path()))
                .merge(Json::file(Self::user_config_path().replace(".toml", ".json")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yaml")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yml")))
                // Repository config - support multiple formats
                .merge(Toml::file("stagecheck.toml"))
                .merge(Json::file("stagecheck.json"))
                .merge(Yaml::file("stagecheck.yaml"))
                .merge(Yaml::file("stagecheck.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("STAGECHECK_"));

        Ok(StagecheckConfig { figment })
    }

    /// Extract the typed planner settings (bucket globs and tool commands)
    pub fn settings(&self) -> Result<PlanSettings> {
        Ok(self.figment.extract()?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/stagecheck/config.toml", home),
            Err(_) => "~/.config/stagecheck/config.toml".to_string(),
        }
    }
}
