use crate::config::{AppConfig, ColumnConfig};
use crate::types::RawRow;
use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use tracing::info;

pub fn load_data(config: &AppConfig) -> Result<Vec<RawRow>> {
    info!("Loading titles from {:?}...", config.input.data_csv);

    let file = File::open(&config.input.data_csv)
        .with_context(|| format!("Failed to open CSV file: {:?}", config.input.data_csv))?;
    let rows = read_rows(file, &config.input.columns)
        .with_context(|| format!("Failed to read CSV file: {:?}", config.input.data_csv))?;

    info!("Loaded {} rows", rows.len());
    Ok(rows)
}

/// Column positions resolved against the header row.
struct ColumnIndices {
    title: usize,
    director: usize,
    country: usize,
    latitude: usize,
    longitude: usize,
    genres: usize,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, columns: &ColumnConfig) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| anyhow!("Column '{}' not found in CSV", name))
        };

        Ok(Self {
            title: find(&columns.title)?,
            director: find(&columns.director)?,
            country: find(&columns.country)?,
            latitude: find(&columns.latitude)?,
            longitude: find(&columns.longitude)?,
            genres: find(&columns.genres)?,
        })
    }

    fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
        RawRow {
            title: cell(self.title),
            director: cell(self.director),
            country: cell(self.country),
            latitude: cell(self.latitude),
            longitude: cell(self.longitude),
            genre_list: cell(self.genres),
        }
    }
}

pub fn read_rows<R: Read>(reader: R, columns: &ColumnConfig) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let indices = ColumnIndices::resolve(&headers, columns)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(indices.row(&record));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, OutputConfig, ProcessingConfig};
    use std::io::Write;
    use std::path::PathBuf;

    const SAMPLE: &str = "\
show_id,type,title,director,country,date_added,listed_in,latitude,longitude
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,United States,9/25/2021,Documentaries,37.09,-95.71
s2,TV Show,Ganglands,Julien Leclercq,France,9/24/2021,\"Crime TV Shows, International TV Shows\",46.23,2.21
s3,TV Show,Midnight Mass,Not Given,United States,9/24/2021,TV Dramas,,
";

    #[test]
    fn test_read_rows_by_header_name() {
        let rows = read_rows(SAMPLE.as_bytes(), &ColumnConfig::default()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].title, "Dick Johnson Is Dead");
        assert_eq!(rows[0].latitude, "37.09");
        assert_eq!(rows[1].genre_list, "Crime TV Shows, International TV Shows");
        assert_eq!(rows[2].director, "Not Given");
        assert_eq!(rows[2].longitude, "");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let columns = ColumnConfig {
            genres: "genre".to_string(),
            ..ColumnConfig::default()
        };
        let err = read_rows(SAMPLE.as_bytes(), &columns).unwrap_err();
        assert!(err.to_string().contains("genre"));
    }

    #[test]
    fn test_short_row_yields_empty_cells() {
        let csv = "title,director,country,latitude,longitude,listed_in\nAlone,Someone,Chile\n";
        let rows = read_rows(csv.as_bytes(), &ColumnConfig::default()).unwrap();

        assert_eq!(rows[0].country, "Chile");
        assert_eq!(rows[0].latitude, "");
        assert_eq!(rows[0].genre_list, "");
    }

    #[test]
    fn test_load_data_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = AppConfig {
            input: InputConfig {
                data_csv: file.path().to_path_buf(),
                columns: ColumnConfig::default(),
            },
            processing: ProcessingConfig::default(),
            output: OutputConfig { dir: PathBuf::from("out") },
        };

        assert_eq!(load_data(&config).unwrap().len(), 3);
    }

    #[test]
    fn test_load_data_missing_file() {
        let config = AppConfig {
            input: InputConfig {
                data_csv: PathBuf::from("/nonexistent/titles.csv"),
                columns: ColumnConfig::default(),
            },
            processing: ProcessingConfig::default(),
            output: OutputConfig { dir: PathBuf::from("out") },
        };

        let err = load_data(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV file"));
    }
}
