//! Display rendering for routes.
//!
//! Pure formatting helpers that turn a stop sequence (optionally
//! annotated with per-hop line labels) into a display string. Line
//! markers are an explicit configuration value passed in by the caller,
//! so different deployments can label the same lines differently.

use std::collections::HashMap;

use crate::domain::{LineId, StopId};

/// ANSI reset sequence appended after a decorated line label.
const RESET: &str = "\x1b[0m";

/// Display markers for transit lines.
///
/// Maps a line id to the ANSI escape (or any prefix string) used when
/// rendering that line's label. Lines without a configured marker
/// render with a neutral, undecorated label; an unrecognized line is
/// never an error.
#[derive(Debug, Clone, Default)]
pub struct LineMarkers {
    markers: HashMap<LineId, String>,
}

impl LineMarkers {
    /// Create an empty marker set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker for a line.
    pub fn set(&mut self, line: LineId, marker: impl Into<String>) {
        self.markers.insert(line, marker.into());
    }

    /// Get the marker configured for a line, if any.
    pub fn get(&self, line: &LineId) -> Option<&str> {
        self.markers.get(line).map(String::as_str)
    }

    /// Number of configured markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True if no markers are configured.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Builder for line marker sets.
#[derive(Debug, Default)]
pub struct LineMarkersBuilder {
    inner: LineMarkers,
}

impl LineMarkersBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker. Invalid line ids are silently skipped.
    pub fn add(mut self, line: &str, marker: &str) -> Self {
        if let Ok(line) = LineId::parse(line) {
            self.inner.set(line, marker);
        }
        self
    }

    /// Build the marker set.
    pub fn build(self) -> LineMarkers {
        self.inner
    }
}

/// The stock ANSI color markers for the sample network's lines.
pub fn default_markers() -> LineMarkers {
    LineMarkersBuilder::new()
        .add("L1", "\x1b[91m") // red
        .add("L2", "\x1b[96m") // light blue
        .add("L3", "\x1b[90m") // grey
        .add("L4", "\x1b[93m") // yellow
        .add("L5", "\x1b[92m") // green
        .add("L6", "\x1b[33m") // dark yellow
        .build()
}

/// Render a stop sequence as an arrow-joined trace.
///
/// `["A", "D", "F"]` renders as `"A -> D -> F"`.
pub fn format_path(stops: &[StopId]) -> String {
    stops
        .iter()
        .map(StopId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render a stop sequence with per-hop line annotations.
///
/// Each stop from the second onward is labelled with the line of the
/// edge that reached it: `"D(L2) -> F(L2)"`. When a marker is
/// configured for a line, the label is wrapped in the marker and an
/// ANSI reset; otherwise the label is rendered plain.
///
/// If `lines` is shorter than the hop count, the surplus hops are
/// omitted rather than erroring; this is a pure rendering function.
pub fn format_path_with_lines(
    stops: &[StopId],
    lines: &[LineId],
    markers: &LineMarkers,
) -> String {
    stops
        .iter()
        .skip(1)
        .zip(lines)
        .map(|(stop, line)| match markers.get(line) {
            Some(marker) => format!("{stop}({marker}{line}{RESET})"),
            None => format!("{stop}({line})"),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(ids: &[&str]) -> Vec<StopId> {
        ids.iter().map(|s| StopId::parse(s).unwrap()).collect()
    }

    fn lines(ids: &[&str]) -> Vec<LineId> {
        ids.iter().map(|s| LineId::parse(s).unwrap()).collect()
    }

    #[test]
    fn format_path_joins_with_arrows() {
        assert_eq!(format_path(&stops(&["A", "D", "F"])), "A -> D -> F");
    }

    #[test]
    fn format_path_single_stop() {
        assert_eq!(format_path(&stops(&["A"])), "A");
    }

    #[test]
    fn format_path_empty() {
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn with_lines_skips_origin() {
        let rendered = format_path_with_lines(
            &stops(&["A", "D", "F"]),
            &lines(&["L2", "L2"]),
            &LineMarkers::new(),
        );
        assert_eq!(rendered, "D(L2) -> F(L2)");
    }

    #[test]
    fn with_lines_uses_configured_marker() {
        let markers = LineMarkersBuilder::new().add("L2", "\x1b[96m").build();
        let rendered =
            format_path_with_lines(&stops(&["A", "D"]), &lines(&["L2"]), &markers);
        assert_eq!(rendered, "D(\x1b[96mL2\x1b[0m)");
    }

    #[test]
    fn unknown_line_renders_plain() {
        let markers = default_markers();
        let rendered =
            format_path_with_lines(&stops(&["A", "B"]), &lines(&["L99"]), &markers);
        assert_eq!(rendered, "B(L99)");
    }

    #[test]
    fn single_stop_renders_nothing_with_lines() {
        let rendered = format_path_with_lines(&stops(&["A"]), &[], &default_markers());
        assert_eq!(rendered, "");
    }

    #[test]
    fn default_markers_cover_sample_lines() {
        let markers = default_markers();
        assert_eq!(markers.len(), 6);
        for l in ["L1", "L2", "L3", "L4", "L5", "L6"] {
            assert!(markers.get(&LineId::parse(l).unwrap()).is_some());
        }
    }

    #[test]
    fn builder_skips_invalid_line_ids() {
        let markers = LineMarkersBuilder::new()
            .add("not a line", "\x1b[91m")
            .add("L1", "\x1b[91m")
            .build();
        assert_eq!(markers.len(), 1);
    }
}
