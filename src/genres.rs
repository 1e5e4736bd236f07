use crate::tally::CountTable;
use crate::types::Record;

/// Split a delimited genre listing into trimmed tags. Empty tags are kept.
pub fn split_genres(field: &str, delimiter: char) -> impl Iterator<Item = &str> {
    field.split(delimiter).map(str::trim)
}

/// Pool the genre tags of every record into one table.
pub fn genre_counts(records: &[Record], delimiter: char, drop_empty: bool) -> CountTable {
    records
        .iter()
        .flat_map(|record| split_genres(&record.genres, delimiter))
        .filter(|genre| !(drop_empty && genre.is_empty()))
        .collect()
}
