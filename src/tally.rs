use crate::config::TieBreak;
use crate::types::Record;
use std::collections::HashMap;

/// Key -> count table that remembers the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Key with the highest count, ties resolved by `policy`.
    pub fn max_key(&self, policy: TieBreak) -> Option<&str> {
        let max = self.entries.iter().map(|(_, count)| *count).max()?;
        let mut tied = self
            .entries
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(key, _)| key.as_str());

        match policy {
            TieBreak::FirstSeen => tied.next(),
            TieBreak::Lexicographic => tied.min(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CountTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = CountTable::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

/// Country -> director -> count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedCountTable {
    groups: HashMap<String, CountTable>,
}

impl NestedCountTable {
    pub fn increment(&mut self, outer: &str, inner: &str) {
        // The inner table is created together with its first tally, never empty.
        self.groups
            .entry(outer.to_string())
            .or_default()
            .increment(inner);
    }

    pub fn group(&self, outer: &str) -> Option<&CountTable> {
        self.groups.get(outer)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &CountTable)> {
        self.groups.iter().map(|(key, table)| (key.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn count_by<T, F>(items: &[T], key_fn: F) -> CountTable
where
    F: Fn(&T) -> &str,
{
    items.iter().map(key_fn).collect()
}

pub fn tally_by_country(records: &[Record]) -> NestedCountTable {
    let mut table = NestedCountTable::default();
    for record in records {
        table.increment(&record.country, &record.director);
    }
    table
}

/// Most frequent director for `country`; `None` if the country never appeared.
pub fn dominant<'a>(table: &'a NestedCountTable, country: &str, policy: TieBreak) -> Option<&'a str> {
    table.group(country)?.max_key(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, director: &str) -> Record {
        Record {
            name: format!("{} by {}", country, director),
            director: director.to_string(),
            country: country.to_string(),
            location: None,
            genres: String::new(),
        }
    }

    #[test]
    fn test_count_by_sums_to_input_length() {
        let records = vec![
            record("US", "A"),
            record("US", "B"),
            record("India", "C"),
            record("", "D"),
        ];
        let counts = count_by(&records, |r| r.country.as_str());

        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.get("US"), Some(2));
        assert_eq!(counts.get("India"), Some(1));
        assert_eq!(counts.get(""), Some(1));
        assert_eq!(counts.get("France"), None);
    }

    #[test]
    fn test_count_table_keeps_first_occurrence_order() {
        let table: CountTable = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        let entries: Vec<_> = table.iter().collect();

        assert_eq!(entries, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_nested_tally_matches_country_counts() {
        let records = vec![
            record("US", "A"),
            record("US", "A"),
            record("US", "B"),
            record("Japan", "C"),
            record("Japan", "D"),
        ];
        let countries = count_by(&records, |r| r.country.as_str());
        let nested = tally_by_country(&records);

        assert_eq!(nested.len(), countries.len());
        for (country, directors) in nested.groups() {
            assert!(!directors.is_empty());
            assert_eq!(Some(directors.total()), countries.get(country));
        }
    }

    #[test]
    fn test_dominant_picks_max() {
        let records = vec![record("US", "B"), record("US", "A"), record("US", "A")];
        let nested = tally_by_country(&records);

        assert_eq!(dominant(&nested, "US", TieBreak::Lexicographic), Some("A"));
        assert_eq!(dominant(&nested, "US", TieBreak::FirstSeen), Some("A"));
        assert_eq!(dominant(&nested, "Peru", TieBreak::FirstSeen), None);
    }

    #[test]
    fn test_dominant_tie_break_policies() {
        let records = vec![record("US", "Zed"), record("US", "Amy")];
        let nested = tally_by_country(&records);

        assert_eq!(dominant(&nested, "US", TieBreak::Lexicographic), Some("Amy"));
        assert_eq!(dominant(&nested, "US", TieBreak::FirstSeen), Some("Zed"));
    }

    #[test]
    fn test_max_key_empty_table() {
        assert_eq!(CountTable::new().max_key(TieBreak::Lexicographic), None);
    }
}
