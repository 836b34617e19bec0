use std::fs;
use std::path::Path;
use std::string::FromUtf8Error;

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::domain::{format_amount, Entry};

/// Default file name for a JSON export
pub const JSON_EXPORT_FILE: &str = "transactions.json";

/// Default file name for a CSV export
pub const CSV_EXPORT_FILE: &str = "transactions.csv";

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 3] = ["Description", "Amount", "Type"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Render entries as a pretty-printed JSON array, in list order.
/// An empty slice renders as `[]`.
pub fn render_json(entries: &[Entry]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Render entries as CSV, or `None` when there is nothing to export.
///
/// Fields are written verbatim: a description containing a comma or a
/// newline produces a malformed row.
pub fn render_csv(entries: &[Entry]) -> Result<Option<String>, ExportError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut data = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(&mut data);

        writer.write_record(CSV_HEADER)?;
        for entry in entries {
            let amount = format_amount(entry.amount);
            writer.write_record([
                entry.description.as_str(),
                amount.as_str(),
                entry.kind.as_str(),
            ])?;
        }
        writer.flush()?;
    }

    Ok(Some(String::from_utf8(data)?))
}

/// Write a rendered export to `path`.
pub fn write_export(path: impl AsRef<Path>, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::Kind;

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_json_is_pretty_printed() {
        let entries = vec![Entry::new(1, "Salary", 1000.0, Kind::Income)];
        let json = render_json(&entries).unwrap();

        assert!(json.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(json.contains("\n    \"kind\": \"income\"\n"));
        assert!(json.ends_with("\n  }\n]"));
    }

    #[test]
    fn test_render_json_preserves_order() {
        let entries = vec![
            Entry::new(2, "Rent", 800.0, Kind::Expense),
            Entry::new(1, "Salary", 1000.0, Kind::Income),
        ];
        let json = render_json(&entries).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_render_csv_empty_is_none() {
        assert_eq!(render_csv(&[]).unwrap(), None);
    }

    #[test]
    fn test_render_csv_single_entry() {
        let entries = vec![Entry::new(1, "Coffee", 50.0, Kind::Expense)];

        assert_eq!(
            render_csv(&entries).unwrap().as_deref(),
            Some("Description,Amount,Type\nCoffee,50,expense\n")
        );
    }

    #[test]
    fn test_render_csv_keeps_decimal_amounts() {
        let entries = vec![
            Entry::new(1, "Salary", 1000.0, Kind::Income),
            Entry::new(2, "Lunch", 12.5, Kind::Expense),
        ];

        assert_eq!(
            render_csv(&entries).unwrap().as_deref(),
            Some("Description,Amount,Type\nSalary,1000,income\nLunch,12.5,expense\n")
        );
    }

    #[test]
    fn test_render_csv_does_not_escape_delimiters() {
        // Known limitation: embedded commas and quotes are written as-is
        let entries = vec![Entry::new(1, "Beans, \"dark\" roast", 9.0, Kind::Expense)];

        assert_eq!(
            render_csv(&entries).unwrap().as_deref(),
            Some("Description,Amount,Type\nBeans, \"dark\" roast,9,expense\n")
        );
    }

    #[test]
    fn test_write_export() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CSV_EXPORT_FILE);

        write_export(&path, "Description,Amount,Type\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "Description,Amount,Type\n");
    }
}
