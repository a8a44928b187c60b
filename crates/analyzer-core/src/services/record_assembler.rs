//! Merges parsed service sections with extracted contacts

use crate::constants::CONTACT_SEPARATOR;
use analyzer_types::{AnalysisResult, ContactInfo};

pub struct RecordAssembler;

impl RecordAssembler {
    /// Overwrite the contact fields of `parsed` with the joined contact lists
    pub fn assemble(parsed: AnalysisResult, contacts: ContactInfo) -> AnalysisResult {
        AnalysisResult {
            phones: contacts.phones.join(CONTACT_SEPARATOR),
            emails: contacts.emails.join(CONTACT_SEPARATOR),
            ..parsed
        }
    }
}
