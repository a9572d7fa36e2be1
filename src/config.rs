use std::collections::HashSet;
use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;

/// A grading period and its weight in the merit score. The order of the
/// periods in the configuration is the order of the grade columns in the
/// students file.
#[derive(Clone, Debug, Deserialize)]
pub struct Period {
    pub name: String,
    pub weight: f64,
}

/// A track as configured. The capacity keeps the sign it had in the file:
/// rejecting a negative capacity is the allocator's job, not the parser's.
#[derive(Clone, Debug, Deserialize)]
pub struct TrackConfig {
    pub name: String,
    pub capacity: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub periods: Vec<Period>,
    pub tracks: Vec<TrackConfig>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration file {}", path.display()))?;
        Config::from_toml(&text).context("cannot load configuration file")
    }

    pub fn from_toml(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text).context("cannot parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.periods.is_empty(), "no grading period is configured");
        ensure!(!self.tracks.is_empty(), "no track is configured");
        let mut names = HashSet::new();
        for period in &self.periods {
            ensure!(
                period.weight.is_finite() && period.weight >= 0.0,
                "period {} has an invalid weight ({})",
                period.name,
                period.weight
            );
            ensure!(
                names.insert(period.name.as_str()),
                "period {} is configured twice",
                period.name
            );
        }
        let mut names = HashSet::new();
        for track in &self.tracks {
            ensure!(
                names.insert(track.name.as_str()),
                "track {} is configured twice",
                track.name
            );
        }
        Ok(())
    }
}
