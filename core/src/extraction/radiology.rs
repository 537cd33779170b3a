use crate::types::{Birads, Density};
use regex::Regex;
use std::sync::OnceLock;

/// Density phrases, densest first
const DENSITY_PHRASES: [(&str, Density); 5] = [
    ("extremely dense", Density::D),
    ("heterogeneously dense", Density::C),
    ("scattered fibroglandular", Density::B),
    ("entirely fatty", Density::A),
    ("predominantly fatty", Density::A),
];

/// Assessment phrases used when no explicit category is given
const ASSESSMENT_FALLBACKS: [(&str, Birads); 3] = [
    (": - benign", Birads::B2),
    (": - probably benign", Birads::B2),
    (": - negative", Birads::B1),
];

/// Extracts the BIRADS category from a radiology report
///
/// Recognises `birads: X`, `category: X` and `category X` mentions and
/// returns the most actionable category mentioned anywhere in the report.
/// Reports without a category fall back to the assessment phrases.
pub fn extract_birads(report: &str) -> Option<Birads> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"(?:birads: |category:? )(4[abc]|[0-6])").expect("Failed to compile regex")
    });

    let lower = report.to_lowercase();
    let explicit = re
        .captures_iter(&lower)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| Birads::from_str(m.as_str()))
        .max();

    explicit.or_else(|| {
        ASSESSMENT_FALLBACKS
            .iter()
            .find(|(phrase, _)| lower.contains(phrase))
            .map(|(_, birads)| *birads)
    })
}

/// Extracts breast density from a radiology report
///
/// Only mammography reports (those containing `marker`) carry a density.
pub fn extract_density(report: &str, marker: &str) -> Option<Density> {
    let lower = report.to_lowercase();
    if !lower.contains(marker) {
        return None;
    }

    DENSITY_PHRASES
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
        .map(|(_, density)| *density)
}
