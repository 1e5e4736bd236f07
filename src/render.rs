use crate::config::AppConfig;
use crate::processing::Summaries;
use crate::types::{GenreFrequency, LocationSummary};
use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const LOCATIONS_FILE: &str = "locations.geojson";
pub const GENRES_FILE: &str = "genres.json";

/// Write the marker layer and the genre table for the renderer.
pub fn write_outputs(config: &AppConfig, summaries: &Summaries) -> Result<(PathBuf, PathBuf)> {
    let dir = &config.output.dir;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let locations_path = dir.join(LOCATIONS_FILE);
    let collection = location_features(&summaries.location_summaries);
    write_json(&locations_path, &collection)?;
    info!("Wrote {} markers to {:?}", summaries.location_summaries.len(), locations_path);

    let genres_path = dir.join(GENRES_FILE);
    write_json(&genres_path, &summaries.genre_frequencies)?;
    info!("Wrote {} genres to {:?}", summaries.genre_frequencies.len(), genres_path);

    Ok((locations_path, genres_path))
}

pub fn location_features(summaries: &[LocationSummary]) -> FeatureCollection {
    let features = summaries.iter().map(location_feature).collect();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn location_feature(summary: &LocationSummary) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("country".to_string(), summary.country.clone().into());
    properties.insert("title_count".to_string(), summary.title_count.into());
    properties.insert("dominant_director".to_string(), summary.dominant_director.clone().into());
    properties.insert("radius".to_string(), summary.visual_radius.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            summary.longitude(),
            summary.latitude(),
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Plain-text genre table, one `count  genre` line per entry.
pub fn format_genre_table(genres: &[GenreFrequency], top: Option<usize>) -> String {
    let limit = top.unwrap_or(genres.len());
    let width = genres.iter().map(|g| g.count.to_string().len()).max().unwrap_or(1);

    genres
        .iter()
        .take(limit)
        .map(|g| format!("{:>width$}  {}\n", g.count, g.genre, width = width))
        .collect()
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {:?}", path))?;
    fs::write(path, body).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}
