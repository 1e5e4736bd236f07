use crate::config::{GenreOrder, ProcessingConfig};
use crate::genres::genre_counts;
use crate::normalize::normalize;
use crate::scale::RadiusScale;
use crate::tally::{count_by, dominant, tally_by_country, CountTable};
use crate::types::{GenreFrequency, LocationSummary, RawRow, Record};
use tracing::{debug, info};

/// Output of one aggregation pass, handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Summaries {
    pub location_summaries: Vec<LocationSummary>,
    pub genre_frequencies: Vec<GenreFrequency>,
    pub country_counts: CountTable,
    pub rows_in: usize,
    pub rows_excluded: usize,
    pub records_unlocated: usize,
}

pub fn build_summaries(config: &ProcessingConfig, rows: Vec<RawRow>) -> Summaries {
    let rows_in = rows.len();
    info!("Aggregating {} rows...", rows_in);

    // 1. Normalize
    let records: Vec<Record> = rows
        .into_iter()
        .filter_map(|row| normalize(row, &config.excluded_director))
        .collect();
    let rows_excluded = rows_in - records.len();
    debug!("Dropped {} rows with director {:?}", rows_excluded, config.excluded_director);

    // 2-3. Country totals and per-country director tallies
    let country_counts = count_by(&records, |r| r.country.as_str());
    let directors = tally_by_country(&records);

    // 4. One marker per located record
    let scale = RadiusScale::from(&config.radius);
    let location_summaries: Vec<LocationSummary> = records
        .iter()
        .filter_map(|record| {
            let location = record.location?;
            let title_count = country_counts.get(&record.country)?;
            let dominant_director = dominant(&directors, &record.country, config.tie_break)?;
            Some(LocationSummary {
                country: record.country.clone(),
                location,
                title_count,
                dominant_director: dominant_director.to_string(),
                visual_radius: scale.scale(title_count as f64),
            })
        })
        .collect();
    let records_unlocated = records.len() - location_summaries.len();

    // 5. Genre distribution over every record, located or not
    let genres = genre_counts(&records, config.genre_delimiter, config.drop_empty_genres);
    let genre_frequencies = genre_table(&genres, config.genre_order);

    info!(
        "Aggregated {} records: countries={}, markers={}, unlocated={}, genres={}",
        records.len(),
        country_counts.len(),
        location_summaries.len(),
        records_unlocated,
        genre_frequencies.len()
    );

    Summaries {
        location_summaries,
        genre_frequencies,
        country_counts,
        rows_in,
        rows_excluded,
        records_unlocated,
    }
}

pub fn genre_table(counts: &CountTable, order: GenreOrder) -> Vec<GenreFrequency> {
    let mut table: Vec<GenreFrequency> = counts
        .iter()
        .map(|(genre, count)| GenreFrequency {
            genre: genre.to_string(),
            count,
        })
        .collect();

    if order == GenreOrder::CountDesc {
        // Stable sort keeps first-seen order among equal counts.
        table.sort_by(|a, b| b.count.cmp(&a.count));
    }
    table
}
