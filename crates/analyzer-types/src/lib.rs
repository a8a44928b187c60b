//! Shared types for the service analyzer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Service tier a model response is split into.
///
/// Declaration order is also the precedence used when scanning for section
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceCategory {
    Primary,
    Secondary,
    Additional,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [
        ServiceCategory::Primary,
        ServiceCategory::Secondary,
        ServiceCategory::Additional,
    ];

    /// Section header the model is asked to emit for this tier
    pub fn marker(&self) -> &'static str {
        match self {
            ServiceCategory::Primary => "Primary Services:",
            ServiceCategory::Secondary => "Secondary Services:",
            ServiceCategory::Additional => "Additional Services:",
        }
    }

    /// Column name used in the output spreadsheet
    pub fn column(&self) -> &'static str {
        match self {
            ServiceCategory::Primary => "Primary_Services",
            ServiceCategory::Secondary => "Secondary_Services",
            ServiceCategory::Additional => "Additional_Services",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceCategory::Primary => "primary",
            ServiceCategory::Secondary => "secondary",
            ServiceCategory::Additional => "additional",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for ServiceCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ServiceCategory::Primary),
            "secondary" => Ok(ServiceCategory::Secondary),
            "additional" => Ok(ServiceCategory::Additional),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Phone numbers and email addresses found in a listing's raw text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty() && self.emails.is_empty()
    }
}

/// Derived fields for a single row.
///
/// Every field is always present; "nothing found" is the empty string.
/// `phones` and `emails` hold comma-joined lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub primary_services: String,
    pub secondary_services: String,
    pub additional_services: String,
    pub phones: String,
    pub emails: String,
}

impl AnalysisResult {
    pub fn services(&self, category: ServiceCategory) -> &str {
        match category {
            ServiceCategory::Primary => &self.primary_services,
            ServiceCategory::Secondary => &self.secondary_services,
            ServiceCategory::Additional => &self.additional_services,
        }
    }

    pub fn set_services(&mut self, category: ServiceCategory, text: String) {
        match category {
            ServiceCategory::Primary => self.primary_services = text,
            ServiceCategory::Secondary => self.secondary_services = text,
            ServiceCategory::Additional => self.additional_services = text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary_services.is_empty()
            && self.secondary_services.is_empty()
            && self.additional_services.is_empty()
            && self.phones.is_empty()
            && self.emails.is_empty()
    }
}

/// One row of the input spreadsheet. Missing columns read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Rating_text")]
    pub rating_text: String,

    #[serde(rename = "Opening_Time")]
    pub opening_time: String,

    #[serde(rename = "Phone_Number")]
    pub phone_number: String,

    #[serde(rename = "GMAP")]
    pub gmap: String,

    #[serde(rename = "Website")]
    pub website: String,

    #[serde(rename = "All_Content")]
    pub all_content: String,
}

/// One row of the output spreadsheet; field order is column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Rating_text")]
    pub rating_text: String,

    #[serde(rename = "Opening_Time")]
    pub opening_time: String,

    #[serde(rename = "Phone_Number")]
    pub phone_number: String,

    #[serde(rename = "GMAP")]
    pub gmap: String,

    #[serde(rename = "Website")]
    pub website: String,

    #[serde(rename = "Primary_Services")]
    pub primary_services: String,

    #[serde(rename = "Secondary_Services")]
    pub secondary_services: String,

    #[serde(rename = "Additional_Services")]
    pub additional_services: String,

    #[serde(rename = "Extracted_Phones")]
    pub extracted_phones: String,

    #[serde(rename = "Extracted_Emails")]
    pub extracted_emails: String,
}

impl OutputRecord {
    pub const COLUMNS: [&'static str; 12] = [
        "Name",
        "Address",
        "Rating_text",
        "Opening_Time",
        "Phone_Number",
        "GMAP",
        "Website",
        "Primary_Services",
        "Secondary_Services",
        "Additional_Services",
        "Extracted_Phones",
        "Extracted_Emails",
    ];

    /// Copy the retained input columns and flatten the analysis next to them
    pub fn from_parts(input: &InputRecord, analysis: AnalysisResult) -> Self {
        Self {
            name: input.name.clone(),
            address: input.address.clone(),
            rating_text: input.rating_text.clone(),
            opening_time: input.opening_time.clone(),
            phone_number: input.phone_number.clone(),
            gmap: input.gmap.clone(),
            website: input.website.clone(),
            primary_services: analysis.primary_services,
            secondary_services: analysis.secondary_services,
            additional_services: analysis.additional_services,
            extracted_phones: analysis.phones,
            extracted_emails: analysis.emails,
        }
    }
}

/// How a row reached its assembled state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowStatus {
    /// Blank content, the model was not called
    ContentEmpty,
    /// Model answered and its response was parsed
    Analyzed,
    /// Model call failed; service fields fell back to empty
    ModelFailed { error: String },
}

impl RowStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, RowStatus::ModelFailed { .. })
    }
}

/// Counters for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total_rows: usize,
    pub analyzed_rows: usize,
    pub empty_rows: usize,
    pub failed_rows: usize,
}

impl BatchSummary {
    /// Start a new run with zeroed counters
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            total_rows: 0,
            analyzed_rows: 0,
            empty_rows: 0,
            failed_rows: 0,
        }
    }

    pub fn record(&mut self, status: &RowStatus) {
        self.total_rows += 1;
        match status {
            RowStatus::ContentEmpty => self.empty_rows += 1,
            RowStatus::Analyzed => self.analyzed_rows += 1,
            RowStatus::ModelFailed { .. } => self.failed_rows += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }
}
