//! Station listing and lookup of user input.
//!
//! Stations are listed alphabetically with a 1-based serial number and a
//! short code derived from the display name (`"Rajiv Chowk~BY"` → `RC`).
//! Users can name a station by serial number, full identifier, display
//! name or code.

use tracing::trace;

use crate::domain::{LineSet, RouteError, StationId};
use crate::graph::Graph;

/// One row of the station listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// 1-based position in the listing.
    pub serial: usize,

    /// Full station identifier.
    pub station: StationId,

    /// Human-readable name.
    pub name: String,

    /// Short code derived from the name.
    pub code: String,

    /// Lines serving the station, if the identifier carries them.
    pub lines: Option<LineSet>,
}

/// Alphabetical station listing with lookup.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    entries: Vec<DirectoryEntry>,
}

impl StationDirectory {
    /// Build the listing for every station in `graph`.
    pub fn new(graph: &Graph) -> Self {
        let mut stations: Vec<&StationId> = graph.stations().map(|(_, id)| id).collect();
        stations.sort();

        let entries = stations
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let name = id.display_name().unwrap_or(id.as_str()).to_string();
                DirectoryEntry {
                    serial: i + 1,
                    station: id.clone(),
                    code: station_code(&name),
                    name,
                    lines: id.lines().ok(),
                }
            })
            .collect();

        Self { entries }
    }

    /// All entries in listing order.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Number of stations listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve user input to a station.
    ///
    /// Tried in order: serial number, exact identifier, display name
    /// (case-insensitive), code (case-insensitive).
    pub fn resolve(&self, input: &str) -> Result<&StationId, RouteError> {
        let input = input.trim();

        if let Ok(serial) = input.parse::<usize>() {
            if let Some(entry) = serial.checked_sub(1).and_then(|i| self.entries.get(i)) {
                trace!(input, station = %entry.station, "resolved by serial");
                return Ok(&entry.station);
            }
        }

        if let Some(entry) = self.entries.iter().find(|e| e.station.as_str() == input) {
            return Ok(&entry.station);
        }

        if let Some(station) = self.unique_match(input, |e| e.name.eq_ignore_ascii_case(input))? {
            trace!(input, station = %station, "resolved by name");
            return Ok(station);
        }

        if let Some(station) = self.unique_match(input, |e| e.code.eq_ignore_ascii_case(input))? {
            trace!(input, station = %station, "resolved by code");
            return Ok(station);
        }

        Err(RouteError::NotFound(input.to_string()))
    }

    fn unique_match<F>(&self, input: &str, pred: F) -> Result<Option<&StationId>, RouteError>
    where
        F: Fn(&DirectoryEntry) -> bool,
    {
        let matches: Vec<&DirectoryEntry> = self.entries.iter().filter(|e| pred(e)).collect();
        match matches.as_slice() {
            [] => Ok(None),
            [entry] => Ok(Some(&entry.station)),
            _ => Err(RouteError::AmbiguousCode {
                code: input.to_string(),
                count: matches.len(),
            }),
        }
    }
}

/// Derive a short code from a station's display name.
///
/// Each word contributes its leading digits if it starts with a digit,
/// otherwise its first character. Codes shorter than two characters get
/// the second letter of the last word, uppercased.
///
/// ```
/// use metro_router::directory::station_code;
///
/// assert_eq!(station_code("Rajiv Chowk"), "RC");
/// assert_eq!(station_code("Noida Sector 62"), "NS62");
/// assert_eq!(station_code("Saket"), "SA");
/// ```
pub fn station_code(name: &str) -> String {
    let mut code = String::new();

    for word in name.split_whitespace() {
        let digits: String = word.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            code.extend(word.chars().next());
        } else {
            code.push_str(&digits);
        }
    }

    if code.chars().count() < 2 {
        if let Some(c) = name.split_whitespace().last().and_then(|w| w.chars().nth(1)) {
            code.extend(c.to_uppercase());
        }
    }

    code
}
