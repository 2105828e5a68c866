//! Interchange counting over a station sequence.
//!
//! Each station identifier carries its line codes (`"New Delhi~YO"`). A
//! segment between two consecutive stations is an interchange when their
//! line sets have no code in common.

use crate::domain::{LineSet, RouteError, StationId};

/// Indices `i` of the segments `stations[i]` → `stations[i + 1]` whose
/// endpoints share no line.
///
/// Fails if any identifier has no line codes.
pub fn interchange_positions(stations: &[StationId]) -> Result<Vec<usize>, RouteError> {
    let lines = stations
        .iter()
        .map(StationId::lines)
        .collect::<Result<Vec<LineSet>, _>>()?;

    Ok(lines
        .windows(2)
        .enumerate()
        .filter(|(_, w)| !w[0].shares_line(&w[1]))
        .map(|(i, _)| i)
        .collect())
}

/// Number of interchanges along `stations`.
pub fn count_interchanges(stations: &[StationId]) -> Result<usize, RouteError> {
    interchange_positions(stations).map(|p| p.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Vec<StationId> {
        ids.iter().map(|s| StationId::new(*s)).collect()
    }

    #[test]
    fn single_line_has_no_interchanges() {
        let p = path(&["Noida Sector 62~B", "Botanical Garden~B", "Yamuna Bank~B"]);
        assert_eq!(count_interchanges(&p), Ok(0));
    }

    #[test]
    fn segments_through_interchange_stations_share_a_line() {
        // Every consecutive pair has a line in common
        let p = path(&[
            "Yamuna Bank~B",
            "Rajiv Chowk~BY",
            "New Delhi~YO",
            "Shivaji Stadium~O",
        ]);
        assert_eq!(interchange_positions(&p), Ok(vec![]));
        assert_eq!(count_interchanges(&p), Ok(0));
    }

    #[test]
    fn segment_without_common_line() {
        assert_eq!(count_interchanges(&path(&["A~B", "C~Y"])), Ok(1));
    }

    #[test]
    fn positions_are_segment_indices() {
        let p = path(&["Saket~Y", "AIIMS~Y", "Vaishali~B", "Yamuna Bank~B", "IGI Airport~O"]);
        // AIIMS -> Vaishali and Yamuna Bank -> IGI Airport
        assert_eq!(interchange_positions(&p), Ok(vec![1, 3]));
        assert_eq!(count_interchanges(&p), Ok(2));
    }

    #[test]
    fn short_paths() {
        assert_eq!(count_interchanges(&[]), Ok(0));
        assert_eq!(count_interchanges(&path(&["Saket~Y"])), Ok(0));
        assert_eq!(count_interchanges(&path(&["Saket~Y", "AIIMS~Y"])), Ok(0));
    }

    #[test]
    fn malformed_identifier_fails() {
        let p = path(&["Saket~Y", "AIIMS", "Rajiv Chowk~BY"]);
        assert!(matches!(
            count_interchanges(&p),
            Err(RouteError::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn malformed_identifier_fails_even_on_short_paths() {
        assert!(count_interchanges(&path(&["A"])).is_err());
    }
}
