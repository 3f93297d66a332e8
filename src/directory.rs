//! Station and line directory
//!
//! Immutable in-memory directory of transit stations and lines: loaded once
//! (built-in sample data or JSON), read-only afterwards, dropped at process
//! exit. Lookups for unknown station ids return a synthesized placeholder
//! record rather than an absence signal, and the [`StationLookup`] result
//! keeps the two cases distinguishable so callers can log accordingly.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AnsageError, Result};

/// Transport modes serving a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    Bus,
    #[serde(rename = "U-Bahn")]
    UBahn,
    Tram,
    #[serde(rename = "S-Bahn")]
    SBahn,
}

impl TransportMode {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::UBahn => "U-Bahn",
            TransportMode::Tram => "Tram",
            TransportMode::SBahn => "S-Bahn",
        }
    }

    /// Display icon for station listings
    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Bus => "🚌",
            TransportMode::UBahn => "🚇",
            TransportMode::Tram => "🚊",
            TransportMode::SBahn => "🚆",
        }
    }
}

/// One station record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Stable station identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Announcement clip file name, resolved against a base URL
    pub audio: String,
    /// Transport modes serving this station
    #[serde(default)]
    pub modes: Vec<TransportMode>,
}

/// One line with its ordered routes (each route is a list of station ids)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub routes: Vec<Vec<String>>,
}

/// Result of a station lookup
///
/// Unknown ids yield a synthesized placeholder record, never an absence
/// signal; the variant keeps the two cases distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum StationLookup<'a> {
    /// The id matched a directory entry
    Found(&'a Station),
    /// The id was unknown; a stand-in record was synthesized
    Placeholder(Station),
}

impl StationLookup<'_> {
    /// The station record, regardless of how it was obtained
    pub fn station(&self) -> &Station {
        match self {
            StationLookup::Found(station) => station,
            StationLookup::Placeholder(station) => station,
        }
    }

    /// Whether this lookup synthesized a placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, StationLookup::Placeholder(_))
    }
}

/// Immutable directory of stations and lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    pub stations: Vec<Station>,
    pub lines: BTreeMap<String, Line>,
}

impl Directory {
    /// Clip file name used for placeholder station records
    pub const PLACEHOLDER_AUDIO: &'static str = "placeholder.mp3";

    /// Load a directory from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the directory to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Built-in sample directory (Munich demo data)
    pub fn sample() -> Self {
        let stations = vec![
            Station {
                id: "m_hbf".to_string(),
                name: "München Hbf".to_string(),
                audio: "m_hbf.mp3".to_string(),
                modes: vec![
                    TransportMode::SBahn,
                    TransportMode::Tram,
                    TransportMode::UBahn,
                ],
            },
            Station {
                id: "marienplatz".to_string(),
                name: "Marienplatz".to_string(),
                audio: "marienplatz.mp3".to_string(),
                modes: vec![TransportMode::SBahn, TransportMode::UBahn],
            },
            Station {
                id: "sendlinger".to_string(),
                name: "Sendlinger Tor".to_string(),
                audio: "sendlinger_tor.mp3".to_string(),
                modes: vec![TransportMode::UBahn, TransportMode::Tram],
            },
            Station {
                id: "gabelsberger".to_string(),
                name: "Gabelsbergerstr.".to_string(),
                audio: "gabelsberger.mp3".to_string(),
                modes: vec![TransportMode::Bus],
            },
        ];

        let mut lines = BTreeMap::new();
        lines.insert(
            "U1".to_string(),
            Line {
                routes: vec![
                    vec!["marienplatz".to_string(), "sendlinger".to_string()],
                    vec!["sendlinger".to_string(), "marienplatz".to_string()],
                ],
            },
        );
        lines.insert(
            "62".to_string(),
            Line {
                routes: vec![vec!["gabelsberger".to_string(), "m_hbf".to_string()]],
            },
        );

        Directory { stations, lines }
    }

    /// Look up a station by id
    ///
    /// Unknown ids synthesize `{ id: "?", name: <input>, audio: "placeholder.mp3" }`.
    pub fn lookup_station(&self, id: &str) -> StationLookup<'_> {
        match self.stations.iter().find(|s| s.id == id) {
            Some(station) => StationLookup::Found(station),
            None => StationLookup::Placeholder(Station {
                id: "?".to_string(),
                name: id.to_string(),
                audio: Self::PLACEHOLDER_AUDIO.to_string(),
                modes: Vec::new(),
            }),
        }
    }

    /// Get a line by name
    pub fn line(&self, name: &str) -> Result<&Line> {
        self.lines.get(name).ok_or_else(|| AnsageError::UnknownLine {
            line: name.to_string(),
        })
    }

    /// Build the ordered announcement URL list for one route of a line
    ///
    /// Station ids along the route resolve to their clip file names
    /// (placeholder clips for unknown ids) joined onto `base_url`. An
    /// out-of-range route index falls back to the first route.
    pub fn route_audio_urls(&self, line: &str, route: usize, base_url: &str) -> Result<Vec<String>> {
        let line = self.line(line)?;
        let route = line.routes.get(route).or_else(|| line.routes.first());

        let base = base_url.trim_end_matches('/');
        Ok(route
            .map(|station_ids| {
                station_ids
                    .iter()
                    .map(|id| format!("{}/{}", base, self.lookup_station(id).station().audio))
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Global read-only directory, loaded once on first use
pub static DIRECTORY: Lazy<Directory> = Lazy::new(Directory::sample);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_known_station() {
        let dir = Directory::sample();
        let lookup = dir.lookup_station("marienplatz");

        assert!(!lookup.is_placeholder());
        assert_eq!(lookup.station().name, "Marienplatz");
        assert_eq!(lookup.station().audio, "marienplatz.mp3");
    }

    #[test]
    fn test_lookup_unknown_station_synthesizes_placeholder() {
        let dir = Directory::sample();
        let lookup = dir.lookup_station("nirgendwo");

        assert!(lookup.is_placeholder());
        let station = lookup.station();
        assert_eq!(station.id, "?");
        assert_eq!(station.name, "nirgendwo");
        assert_eq!(station.audio, Directory::PLACEHOLDER_AUDIO);
    }

    #[test]
    fn test_line_lookup_errors_on_unknown_line() {
        let dir = Directory::sample();
        let result = dir.line("U99");
        assert!(matches!(result, Err(AnsageError::UnknownLine { .. })));
    }

    #[test]
    fn test_route_audio_urls_in_route_order() {
        let dir = Directory::sample();
        let urls = dir
            .route_audio_urls("U1", 0, "https://clips.example/audio/")
            .unwrap();

        assert_eq!(
            urls,
            vec![
                "https://clips.example/audio/marienplatz.mp3",
                "https://clips.example/audio/sendlinger_tor.mp3",
            ]
        );
    }

    #[test]
    fn test_route_audio_urls_uses_placeholder_for_unknown_id() {
        let mut dir = Directory::sample();
        dir.lines.insert(
            "X1".to_string(),
            Line {
                routes: vec![vec!["m_hbf".to_string(), "geisterbahnhof".to_string()]],
            },
        );

        let urls = dir.route_audio_urls("X1", 0, "http://host/a").unwrap();
        assert_eq!(
            urls,
            vec![
                "http://host/a/m_hbf.mp3",
                "http://host/a/placeholder.mp3",
            ]
        );
    }

    #[test]
    fn test_out_of_range_route_falls_back_to_first() {
        let dir = Directory::sample();
        let first = dir.route_audio_urls("62", 0, "http://h").unwrap();
        let fallback = dir.route_audio_urls("62", 7, "http://h").unwrap();
        assert_eq!(first, fallback);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = Directory::sample();
        let json = dir.to_json_string().unwrap();
        let reloaded = Directory::from_json_str(&json).unwrap();
        assert_eq!(dir, reloaded);
    }

    #[test]
    fn test_transport_mode_icons() {
        assert_eq!(TransportMode::Bus.icon(), "🚌");
        assert_eq!(TransportMode::UBahn.icon(), "🚇");
        assert_eq!(TransportMode::Tram.icon(), "🚊");
        assert_eq!(TransportMode::SBahn.icon(), "🚆");
    }

    #[test]
    fn test_global_directory_is_sample_data() {
        assert_eq!(DIRECTORY.stations.len(), 4);
        assert!(DIRECTORY.lines.contains_key("U1"));
    }
}
