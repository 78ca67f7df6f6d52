use crate::error::SlideError;
use crate::story::StoryRecord;
use std::collections::HashMap;
use std::path::Path;

/// Columns a story table must provide before a batch run may start.
pub const REQUIRED_STORY_COLUMNS: &[&str] = &["Country", "Story", "Title", "Caption"];

/// An in-memory tabular dataset: ordered headers plus string rows. This is
/// the load/transform/save surface the companion dataset scripts use; the
/// dataset-specific cleaning rules themselves live with those scripts, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Table, SlideError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Table { headers, rows })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SlideError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Check that every required column is present, reporting the full
    /// list of missing names at once. A validation failure is fatal for a
    /// batch run; nothing can proceed without the schema.
    pub fn validate_columns(&self, required: &[&str]) -> Result<(), SlideError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| !self.headers.iter().any(|h| h == *name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SlideError::Validation { missing })
        }
    }

    /// Index of a column by name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a constant-valued column (used to tag concatenated rows with
    /// their source).
    pub fn with_column(mut self, name: &str, value: &str) -> Table {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(value.to_string());
        }
        self
    }

    /// Concatenate tables, preserving the union of all columns in
    /// first-seen order. Cells for columns a source table lacks are left
    /// empty.
    pub fn concat<I: IntoIterator<Item = Table>>(tables: I) -> Table {
        let tables: Vec<Table> = tables.into_iter().collect();

        let mut headers: Vec<String> = Vec::new();
        for table in &tables {
            for header in &table.headers {
                if !headers.contains(header) {
                    headers.push(header.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for table in &tables {
            let positions: HashMap<&String, usize> = table
                .headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h, i))
                .collect();
            for row in &table.rows {
                let combined: Vec<String> = headers
                    .iter()
                    .map(|header| {
                        positions
                            .get(header)
                            .and_then(|&i| row.get(i))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect();
                rows.push(combined);
            }
        }

        Table { headers, rows }
    }
}

/// Load story records from a CSV file, validating the schema up front.
/// Blank title/caption cells become `None` so downstream code can apply
/// its defaults.
pub fn load_stories<P: AsRef<Path>>(path: P) -> Result<Vec<StoryRecord>, SlideError> {
    let table = Table::load(path)?;
    table.validate_columns(REQUIRED_STORY_COLUMNS)?;

    let country = table.column("Country").expect("validated");
    let story = table.column("Story").expect("validated");
    let title = table.column("Title").expect("validated");
    let caption = table.column("Caption").expect("validated");

    let cell =
        |row: &[String], index: usize| -> String { row.get(index).cloned().unwrap_or_default() };
    let optional = |row: &[String], index: usize| -> Option<String> {
        Some(cell(row, index)).filter(|value| !value.trim().is_empty())
    };

    Ok(table
        .rows
        .iter()
        .map(|row| StoryRecord {
            location: cell(row, country),
            narrative: cell(row, story),
            title: optional(row, title),
            caption: optional(row, caption),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn validation_reports_every_missing_column() {
        let table = table(&["Country", "Story"], &[]);
        let err = table.validate_columns(REQUIRED_STORY_COLUMNS).unwrap_err();
        match err {
            SlideError::Validation { missing } => {
                assert_eq!(missing, vec!["Title".to_string(), "Caption".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn concat_unions_columns_in_first_seen_order() {
        let a = table(&["Country", "Value"], &[&["Kenya", "12"]]);
        let b = table(&["Country", "Year"], &[&["Chile", "2019"]]);
        let combined = Table::concat([a, b]);

        assert_eq!(combined.headers, vec!["Country", "Value", "Year"]);
        assert_eq!(combined.rows[0], vec!["Kenya", "12", ""]);
        assert_eq!(combined.rows[1], vec!["Chile", "", "2019"]);
    }

    #[test]
    fn with_column_tags_every_row() {
        let tagged = table(&["Country"], &[&["Kenya"], &["Chile"]])
            .with_column("source_file", "wages.csv");
        assert_eq!(tagged.headers, vec!["Country", "source_file"]);
        assert!(tagged.rows.iter().all(|row| row[1] == "wages.csv"));
    }

    #[test]
    fn tables_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        let original = table(
            &["Country", "Story"],
            &[&["Kenya", "A story."], &["Chile", "Another, with commas."]],
        );
        original.save(&path).unwrap();
        let loaded = Table::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn blank_metadata_cells_become_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stories.csv");
        std::fs::write(
            &path,
            "Country,Story,Title,Caption\nKenya,A story.,,  \nChile,Other story.,My Title,My caption\n",
        )
        .unwrap();

        let records = load_stories(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, None);
        assert_eq!(records[0].caption, None);
        assert_eq!(records[1].title.as_deref(), Some("My Title"));
        assert_eq!(records[1].caption.as_deref(), Some("My caption"));
    }

    #[test]
    fn missing_schema_is_fatal_for_story_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Country,Text\nKenya,hello\n").unwrap();
        assert!(matches!(
            load_stories(&path),
            Err(SlideError::Validation { .. })
        ));
    }
}
