use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::model::Guest;
use crate::roster::GuestRoster;

/// Finds the name and group columns in the header row
/// The group column is found first so a header like "Group Name" is not taken for the name.
/// Falls back to columns 0 and 1 when the headers say nothing useful
fn find_columns(headers: &StringRecord) -> (usize, usize) {
    let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    let group_col = lower.iter().position(|h| h.contains("group") || h.contains("tag"));
    let name_col = lower
        .iter()
        .enumerate()
        .position(|(i, h)| Some(i) != group_col && h.contains("name"))
        .unwrap_or(if group_col == Some(0) { 1 } else { 0 });
    let group_col = group_col.unwrap_or(if name_col == 1 { 0 } else { 1 });

    (name_col, group_col)
}

/// Reads a field, treating blank cells as absent
fn cell(record: &StringRecord, col: usize) -> Option<String> {
    record
        .get(col)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Loads a guest list from a CSV file with a header row
pub fn load_guests<P: AsRef<Path>>(csv_path: P) -> Result<GuestRoster, LoadError> {
    let file = std::fs::File::open(csv_path)?;
    read_guests(file)
}

/// Reads a guest list from any CSV source
///
/// Rows without a name and rows repeating a name already loaded are skipped
/// with a warning. A missing group cell means the guest has no group.
pub fn read_guests<R: Read>(source: R) -> Result<GuestRoster, LoadError> {
    let mut reader = ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(source);
    let (name_col, group_col) = find_columns(reader.headers()?);
    debug!(name_col, group_col, "guest list columns");

    let mut roster = GuestRoster::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        // +2: header is line 1 and rows are 0-based
        let line = row + 2;

        let guest = match Guest::from_parts(cell(&record, name_col), cell(&record, group_col)) {
            Ok(guest) => guest,
            Err(e) => {
                warn!(line, error = %e, "skipping guest row");
                continue;
            }
        };

        if roster.contains(guest.name()) {
            warn!(line, name = guest.name(), "skipping duplicate guest");
            continue;
        }

        roster.add(guest);
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &GuestRoster) -> Vec<&str> {
        roster.all_guests().iter().map(|g| g.name()).collect()
    }

    #[test]
    fn test_reads_named_columns_in_any_order() {
        let data = "Group Tag,Guest Name\nfamily,Alice\nfriends,Bob\n";
        let roster = read_guests(data.as_bytes()).unwrap();

        assert_eq!(names(&roster), vec!["Alice", "Bob"]);
        assert_eq!(roster.find("Bob").map(Guest::group_tag), Some("friends"));
    }

    #[test]
    fn test_group_name_header_is_not_the_name_column() {
        let data = "Group Name,Guest\nfamily,Alice\n";
        let roster = read_guests(data.as_bytes()).unwrap();

        assert_eq!(names(&roster), vec!["Alice"]);
        assert_eq!(roster.find("Alice").map(Guest::group_tag), Some("family"));
    }

    #[test]
    fn test_default_columns() {
        let data = "who,with\nAlice,family\n";
        let roster = read_guests(data.as_bytes()).unwrap();
        assert_eq!(roster.find("Alice").map(Guest::group_tag), Some("family"));
    }

    #[test]
    fn test_skips_blank_names_and_duplicates() {
        let data = "name,group\nAlice,family\n,friends\nAlice,coworkers\nBob\n";
        let roster = read_guests(data.as_bytes()).unwrap();

        assert_eq!(names(&roster), vec!["Alice", "Bob"]);
        assert_eq!(roster.find("Alice").map(Guest::group_tag), Some("family"));
        assert!(roster.find("Bob").is_some_and(Guest::is_ungrouped));
    }

    #[test]
    fn test_header_only_is_empty() {
        let roster = read_guests("name,group\n".as_bytes()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = load_guests("definitely/not/here.csv");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
