use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[guidance]
# Extra directories to scan for guidance entries, each containing
# <entry>/SKILL.md subdirectories.
directories = []
# Scan ~/.skilldock/guidance
personal = true
# Scan ./guidance
project = true

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct GuidanceConfig {
    /// Extra guidance directories, scanned after the builtin ones
    #[serde(default)]
    pub directories: Vec<PathBuf>,
    /// Scan the personal directory (~/.skilldock/guidance)
    #[serde(default = "default_true")]
    pub personal: bool,
    /// Scan the project directory (./guidance)
    #[serde(default = "default_true")]
    pub project: bool,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            personal: true,
            project: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub guidance: GuidanceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Get the global config path: ~/.skilldock/skilldock.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skilldock").join("skilldock.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<Option<PathBuf>> {
        let Some(config_path) = Self::global_config_path() else {
            return Ok(None);
        };
        let config_dir = config_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("config path has no parent directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(Some(config_path))
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skilldock/skilldock.toml (auto-created if missing)
    /// 2. Local override: ./skilldock.toml (workspace, optional)
    /// 3. Environment variables with SKILLDOCK__ prefix (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder();

        if let Some(global_config_path) = Self::ensure_global_config()? {
            config_builder =
                config_builder.add_source(config::File::from(global_config_path).required(false));
        }

        let config = config_builder
            .add_source(config::File::with_name("skilldock").required(false))
            .add_source(config::Environment::with_prefix("SKILLDOCK").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.guidance.personal);
        assert!(config.guidance.project);
        assert!(config.guidance.directories.is_empty());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            [guidance]
            directories = ["/opt/guidance", "team/guidance"]
            personal = false

            [logging]
            level = "debug"
        "#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_eq!(config.guidance.directories.len(), 2);
        assert!(!config.guidance.personal);
        // Unset fields keep their defaults
        assert!(config.guidance.project);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert!(config.guidance.personal);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("Failed to parse template");
        assert!(config.guidance.directories.is_empty());
        assert!(config.guidance.project);
    }
}
