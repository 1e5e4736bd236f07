use crate::types::{RawRow, Record};
use geo::Point;

/// Parse a coordinate cell. Blank, malformed and non-finite values are absent.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Shape a raw row into a `Record`, or drop it when its director is the
/// excluded sentinel. Everything else passes through untouched.
pub fn normalize(row: RawRow, excluded_director: &str) -> Option<Record> {
    if row.director == excluded_director {
        return None;
    }

    let location = match (parse_coordinate(&row.latitude), parse_coordinate(&row.longitude)) {
        (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
        _ => None,
    };

    Some(Record {
        name: row.title,
        director: row.director,
        country: row.country,
        location,
        genres: row.genre_list,
    })
}
