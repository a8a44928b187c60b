//! Prompt sent to the model for every non-empty listing

const ANALYSIS_PROMPT_TEMPLATE: &str = "Thoroughly analyze this car service center description and extract detailed information:

Description: {content}

Categorize services into:
1. Primary Services: Core, main services the center specializes in
2. Secondary Services: Additional, supporting services
3. Additional Services: Supplementary or optional services

Provide the output in this structured format:
Primary Services: [List primary services]
Secondary Services: [List secondary services]
Additional Services: [List additional services]";

/// Render the analysis prompt for one listing description
pub fn build_analysis_prompt(content: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replacen("{content}", content, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_types::ServiceCategory;

    #[test]
    fn test_prompt_embeds_content() {
        let prompt = build_analysis_prompt("Family-run garage, brakes and tyres.");
        assert!(prompt.starts_with("Thoroughly analyze this car service center description"));
        assert!(prompt.contains("\n\nDescription: Family-run garage, brakes and tyres.\n\n"));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_prompt_requests_every_marker() {
        let prompt = build_analysis_prompt("x");
        for category in ServiceCategory::ALL {
            let format_line = format!("{} [List {} services]", category.marker(), category);
            assert!(prompt.contains(&format_line), "missing line: {}", format_line);
        }
    }

    #[test]
    fn test_braces_in_content_are_kept() {
        let prompt = build_analysis_prompt("Promo {content} 10% off");
        assert!(prompt.contains("Description: Promo {content} 10% off"));
    }
}
