use geo::Point;
use serde::Serialize;

/// One CSV row as read from disk, before any coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub title: String,
    pub director: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    pub genre_list: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub director: String,
    pub country: String,
    // x = longitude, y = latitude; None when either coordinate failed to parse
    pub location: Option<Point<f64>>,
    pub genres: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationSummary {
    pub country: String,
    pub location: Point<f64>,
    pub title_count: usize,
    pub dominant_director: String,
    pub visual_radius: f64,
}

impl LocationSummary {
    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreFrequency {
    pub genre: String,
    pub count: usize,
}
