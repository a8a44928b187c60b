//! Splits a free-text model response into the three service sections

use analyzer_types::{AnalysisResult, ServiceCategory};

/// Marker-delimited section parser.
///
/// A section starts right after the first case-insensitive occurrence of its
/// marker and ends at the next occurrence of any marker, or at end of text.
/// The markers may appear in any order; a missing marker leaves its field
/// empty.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a model response. Contact fields are left empty for the caller.
    pub fn parse(response: &str) -> AnalysisResult {
        let folded = response.to_ascii_lowercase();
        let markers = folded_markers();

        let mut result = AnalysisResult::default();
        for (category, marker) in &markers {
            if let Some(body) = section_body(response, &folded, marker, &markers) {
                result.set_services(*category, clean_section(body));
            }
        }
        result
    }

    /// Cleaned text of one section, or `None` when its marker is absent
    pub fn section(response: &str, category: ServiceCategory) -> Option<String> {
        let folded = response.to_ascii_lowercase();
        let markers = folded_markers();
        let marker = category.marker().to_ascii_lowercase();
        section_body(response, &folded, &marker, &markers).map(clean_section)
    }
}

fn folded_markers() -> Vec<(ServiceCategory, String)> {
    ServiceCategory::ALL
        .iter()
        .map(|category| (*category, category.marker().to_ascii_lowercase()))
        .collect()
}

/// Raw text between `marker` and the next boundary.
///
/// ASCII lowercasing keeps byte offsets, so positions found in `folded` are
/// valid char boundaries in `response`.
fn section_body<'a>(
    response: &'a str,
    folded: &str,
    marker: &str,
    markers: &[(ServiceCategory, String)],
) -> Option<&'a str> {
    let start = folded.find(marker)? + marker.len();
    let end = markers
        .iter()
        .filter_map(|(_, m)| folded[start..].find(m.as_str()).map(|pos| start + pos))
        .min()
        .unwrap_or(folded.len());
    Some(&response[start..end])
}

/// Trim, drop one pair of list brackets, flatten line breaks to ", "
fn clean_section(raw: &str) -> String {
    let text = raw.trim();
    let text = text.strip_prefix('[').unwrap_or(text);
    let text = text.strip_suffix(']').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\n', ", ")
}
