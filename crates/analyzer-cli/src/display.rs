//! Console preview of the first processed rows

use analyzer_types::OutputRecord;

const SAMPLE_COLUMNS: [&str; 6] = [
    "Name",
    "Primary_Services",
    "Secondary_Services",
    "Additional_Services",
    "Extracted_Phones",
    "Extracted_Emails",
];

const MAX_CELL_WIDTH: usize = 28;

fn sample_cells(row: &OutputRecord) -> [&str; 6] {
    [
        &row.name,
        &row.primary_services,
        &row.secondary_services,
        &row.additional_services,
        &row.extracted_phones,
        &row.extracted_emails,
    ]
}

/// Shorten to the cell width, marking cut text with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Render up to `limit` rows as an aligned text table
pub fn sample_table(rows: &[OutputRecord], limit: usize) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .take(limit)
        .map(|row| {
            sample_cells(row)
                .iter()
                .map(|cell| truncate(cell, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = SAMPLE_COLUMNS.iter().map(|c| c.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(SAMPLE_COLUMNS.iter().map(|c| c.to_string()).collect())];
    lines.extend(body.into_iter().map(render));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("Engine repair, Diagnostics", 10), "Engine ...");
        assert_eq!(truncate("Réparation rapide", 8), "Répar...");
    }

    #[test]
    fn test_sample_table_limits_rows() {
        let rows: Vec<OutputRecord> = (0..7)
            .map(|i| OutputRecord {
                name: format!("Garage {}", i),
                primary_services: "Brakes".to_string(),
                ..Default::default()
            })
            .collect();

        let table = sample_table(&rows, 5);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6, "header plus five rows");
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].contains("Extracted_Emails"));
        assert!(lines[1].starts_with("Garage 0"));
        assert!(lines[5].starts_with("Garage 4"));
        assert!(!table.contains("Garage 5"));
    }

    #[test]
    fn test_sample_table_aligns_columns() {
        let rows = vec![
            OutputRecord {
                name: "A".to_string(),
                primary_services: "Oil".to_string(),
                ..Default::default()
            },
            OutputRecord {
                name: "Longer Garage Name".to_string(),
                primary_services: "Tyres".to_string(),
                ..Default::default()
            },
        ];

        let table = sample_table(&rows, 5);
        let lines: Vec<&str> = table.lines().collect();
        let column = lines[0].find("Primary_Services").unwrap();
        assert_eq!(lines[1].find("Oil"), Some(column));
        assert_eq!(lines[2].find("Tyres"), Some(column));
    }

    #[test]
    fn test_sample_table_empty() {
        let table = sample_table(&[], 5);
        assert_eq!(table.lines().count(), 1);
    }
}
