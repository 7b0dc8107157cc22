//! Paged display of unfiltered source rows.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use log::debug;

use crate::data::model::RawTable;
use crate::prompt::Console;

/// Rows shown per affirmative answer.
pub const PAGE_SIZE: usize = 5;

const RAW_PROMPT: &str =
    "\nIf you would like to see raw data, enter yes. Otherwise, enter anything else.\n";

const NO_MORE_ROWS: &str = "No more raw data to display.";

/// Show `PAGE_SIZE` rows per "yes", starting at row 0, until any other
/// answer. Returns the number of rows shown.
pub fn browse<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &RawTable,
) -> Result<usize> {
    let mut cursor = 0;
    let mut shown = 0;

    while console.confirm(RAW_PROMPT)? {
        let rows = table.slice(cursor, PAGE_SIZE);
        if rows.is_empty() {
            writeln!(console.out(), "{NO_MORE_ROWS}")?;
        } else {
            writeln!(console.out(), "{}", render_page(table, cursor)?)?;
            shown += rows.len();
        }
        cursor += PAGE_SIZE;
    }

    debug!("raw viewer stopped at row {cursor}, {shown} rows shown");
    Ok(shown)
}

/// Render rows `[start, start + PAGE_SIZE)` as a text table with a
/// leading row-index column.
pub fn render_page(table: &RawTable, start: usize) -> Result<String, ArrowError> {
    let batch = page_batch(table, start)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

fn page_batch(table: &RawTable, start: usize) -> Result<RecordBatch, ArrowError> {
    let rows = table.slice(start, PAGE_SIZE);

    let mut fields = vec![Field::new("#", DataType::Utf8, false)];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from_iter_values(
        (start..start + rows.len()).map(|i| i.to_string()),
    ))];

    for (idx, name) in table.headers.iter().enumerate() {
        fields.push(Field::new(name.as_str(), DataType::Utf8, true));
        let values: StringArray = rows
            .iter()
            .map(|row| row.get(idx).filter(|v| !v.is_empty()))
            .collect();
        columns.push(Arc::new(values));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table(n: usize) -> RawTable {
        RawTable {
            headers: vec!["Start Station".into(), "Gender".into()],
            rows: (0..n)
                .map(|i| csv::StringRecord::from(vec![format!("Station {i:02}"), String::new()]))
                .collect(),
        }
    }

    fn browse_with(input: &str, table: &RawTable) -> (usize, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let shown = browse(&mut console, table).unwrap();
        (shown, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn pages_advance_by_five() {
        let (shown, out) = browse_with("yes\nyes\nno\nyes\n", &table(12));
        assert_eq!(shown, 10);
        for i in 0..10 {
            assert!(out.contains(&format!("Station {i:02}")), "row {i} missing");
        }
        assert!(!out.contains("Station 10"));
        assert_eq!(out.matches(RAW_PROMPT).count(), 3);
    }

    #[test]
    fn first_non_yes_stops_immediately() {
        let (shown, out) = browse_with("nope\nyes\n", &table(12));
        assert_eq!(shown, 0);
        assert!(!out.contains("Station"));
    }

    #[test]
    fn past_the_end_is_partial_then_empty() {
        let (shown, out) = browse_with("yes\nyes\nyes\n", &table(7));
        assert_eq!(shown, 7);
        assert!(out.contains("Station 06"));
        assert_eq!(out.matches(NO_MORE_ROWS).count(), 1);
    }

    #[test]
    fn page_has_index_and_source_columns() {
        let page = render_page(&table(8), 5).unwrap();
        let header = page.lines().nth(1).unwrap();
        assert!(header.contains('#'));
        assert!(header.contains("Start Station"));
        assert!(header.contains("Gender"));
        assert!(page.contains("| 5 "));
        assert!(page.contains("Station 07"));
        assert!(!page.contains("Station 04"));
    }
}
