use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{anyhow, Context, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    pub data_csv: PathBuf,
    #[serde(default)]
    pub columns: ColumnConfig,
}

/// Header names of the CSV columns the loader reads.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnConfig {
    pub title: String,
    pub director: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    pub genres: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            director: "director".to_string(),
            country: "country".to_string(),
            latitude: "latitude".to_string(),
            longitude: "longitude".to_string(),
            genres: "listed_in".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Rows whose director equals this value are dropped.
    pub excluded_director: String,
    pub genre_delimiter: char,
    pub drop_empty_genres: bool,
    pub tie_break: TieBreak,
    pub genre_order: GenreOrder,
    pub radius: RadiusConfig,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            excluded_director: "Not Given".to_string(),
            genre_delimiter: ',',
            drop_empty_genres: false,
            tie_break: TieBreak::default(),
            genre_order: GenreOrder::default(),
            radius: RadiusConfig::default(),
        }
    }
}

/// How the dominant director is chosen when several share the top count.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    Lexicographic,
    FirstSeen,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenreOrder {
    #[default]
    FirstSeen,
    CountDesc,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RadiusConfig {
    pub domain: [f64; 2],
    pub range: [f64; 2],
    pub clamp: bool,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            domain: [1.0, 2500.0],
            range: [50_000.0, 1_000_000.0],
            clamp: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let radius = &self.processing.radius;
        if radius.domain.iter().chain(radius.range.iter()).any(|v| !v.is_finite()) {
            return Err(anyhow!("Radius domain and range bounds must be finite numbers"));
        }
        Ok(())
    }
}
