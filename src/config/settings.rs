//! Configuration settings for the console simulation

use crate::game_of_life::RuleKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
    pub rule: RuleKind,
    /// Pause between printed generations
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub grid_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Highlight living cells with ANSI colours
    pub color: bool,
    pub show_initial: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            rule: RuleKind::Standard,
            delay_ms: 100,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: false,
            show_initial: true,
        }
    }
}

impl SimulationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Load settings from `path`, or fall back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        match &self.input.grid_file {
            None => anyhow::bail!("No grid file given"),
            Some(path) if !path.exists() => {
                anyhow::bail!("Grid file does not exist: {}", path.display())
            }
            Some(_) => {}
        }

        if self.simulation.delay_ms > 60_000 {
            anyhow::bail!("Delay of {}ms exceeds one minute per generation", self.simulation.delay_ms);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(rule) = cli_overrides.rule {
            self.simulation.rule = rule;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if let Some(ref grid_file) = cli_overrides.grid_file {
            self.input.grid_file = Some(grid_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.color {
            self.output.color = true;
        }
        if cli_overrides.quiet_initial {
            self.output.show_initial = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub rule: Option<RuleKind>,
    pub delay_ms: Option<u64>,
    pub grid_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: bool,
    pub quiet_initial: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.rule, RuleKind::Standard);
        assert_eq!(settings.simulation.delay(), Duration::from_millis(100));
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.output.show_initial);
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.rule = RuleKind::Alternate;
        settings.simulation.generations = 42;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.rule, RuleKind::Alternate);
        assert_eq!(loaded.simulation.generations, 42);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("simulation:\n  rule: alternate\n").unwrap();
        assert_eq!(settings.simulation.rule, RuleKind::Alternate);
        assert_eq!(settings.simulation.delay_ms, 100);
        assert!(settings.input.grid_file.is_none());
    }

    #[test]
    fn test_missing_config_falls_back() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings::load_or_default(&temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(settings.simulation.generations, 10);
    }

    #[test]
    fn test_validation() {
        let temp_dir = tempdir().unwrap();
        let mut settings = Settings::default();
        assert!(settings.validate().is_err());

        settings.input.grid_file = Some(temp_dir.path().join("missing.txt"));
        assert!(settings.validate().is_err());

        let grid_file = temp_dir.path().join("grid.txt");
        std::fs::write(&grid_file, "1\n1\n.\n").unwrap();
        settings.input.grid_file = Some(grid_file);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            generations: Some(3),
            rule: Some(RuleKind::Alternate),
            delay_ms: Some(0),
            format: Some(OutputFormat::Json),
            quiet_initial: true,
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.generations, 3);
        assert_eq!(settings.simulation.rule, RuleKind::Alternate);
        assert_eq!(settings.simulation.delay_ms, 0);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(!settings.output.show_initial);
        assert!(!settings.output.color);
    }
}
