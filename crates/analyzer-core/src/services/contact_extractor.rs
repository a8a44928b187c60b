//! Contact extraction service

use analyzer_types::ContactInfo;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Rust's regex has no look-behind, so the leading boundary is consumed as a
// non-word prefix and the number itself is captured.
const PHONE_PATTERN: &str = r"(?:^|[^\w+])(?P<phone>(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4})\b";

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

pub struct ContactExtractor {
    phone_regex: &'static Regex,
    email_regex: &'static Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            phone_regex: &PHONE_REGEX,
            email_regex: &EMAIL_REGEX,
        }
    }

    /// Extract unique phone numbers and emails, in first-seen order
    pub fn extract(&self, text: &str) -> ContactInfo {
        if text.trim().is_empty() {
            return ContactInfo::default();
        }

        let phones = dedup(
            self.phone_regex
                .captures_iter(text)
                .filter_map(|caps| caps.name("phone"))
                .map(|m| m.as_str()),
        );

        let emails = dedup(self.email_regex.find_iter(text).map(|m| m.as_str()));

        ContactInfo { phones, emails }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-sensitive dedup keeping the first occurrence
fn dedup<'a>(matches: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .filter(|m| seen.insert(*m))
        .map(str::to_string)
        .collect()
}
