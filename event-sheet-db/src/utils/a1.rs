use std::fmt;

use crate::models::schema::ColumnSpan;

/// Spreadsheet letter of a zero-based column index (`0 -> A`, `26 -> AA`).
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Zero-based column index of a spreadsheet letter, `None` for anything but A-Z.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut n = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        n = n * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    Some(n - 1)
}

/// Quote a sheet title for use in A1 notation.
pub fn quote_sheet(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// A rectangular range in A1 notation.
///
/// Row bounds are 1-based physical rows. A missing row bound means "open":
/// `A2:A` runs to the last row, `A:K` covers whole columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Range {
    pub sheet: String,
    pub start_col: usize,
    pub start_row: Option<usize>,
    pub end_col: usize,
    pub end_row: Option<usize>,
}

impl A1Range {
    /// Whole columns of a span, e.g. `'Sheet'!A:K`.
    pub fn columns(sheet: &str, span: ColumnSpan) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col: span.start,
            start_row: None,
            end_col: span.end,
            end_row: None,
        }
    }

    /// A span from `first_row` to the end of the sheet, e.g. `'Sheet'!A2:AO`.
    pub fn from_row(sheet: &str, span: ColumnSpan, first_row: usize) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col: span.start,
            start_row: Some(first_row),
            end_col: span.end,
            end_row: None,
        }
    }

    /// A span within a single row, e.g. `'Sheet'!N5:V5`.
    pub fn row(sheet: &str, span: ColumnSpan, row: usize) -> Self {
        Self {
            sheet: sheet.to_string(),
            start_col: span.start,
            start_row: Some(row),
            end_col: span.end,
            end_row: Some(row),
        }
    }

    /// One cell, e.g. `'Sheet'!X5`.
    pub fn cell(sheet: &str, col: usize, row: usize) -> Self {
        Self::row(sheet, ColumnSpan::new(col, col), row)
    }

    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Parse ranges as reported by the Sheets API (`'Base Mail'!A5:K5`, `Log!X3`).
    pub fn parse(input: &str) -> Option<Self> {
        let (sheet_part, cells) = input.rsplit_once('!')?;
        let sheet = match sheet_part.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
            Some(quoted) => quoted.replace("''", "'"),
            None => sheet_part.to_string(),
        };
        let (start, end) = match cells.split_once(':') {
            Some((start, end)) => (start, Some(end)),
            None => (cells, None),
        };
        let (start_col, start_row) = split_cell(start)?;
        let (end_col, end_row) = match end {
            Some(end) => split_cell(end)?,
            None => (start_col, start_row),
        };
        Some(Self {
            sheet,
            start_col,
            start_row,
            end_col,
            end_row,
        })
    }
}

fn split_cell(cell: &str) -> Option<(usize, Option<usize>)> {
    let digits_at = cell.find(|c: char| c.is_ascii_digit()).unwrap_or(cell.len());
    let (letters, digits) = cell.split_at(digits_at);
    let col = column_index(letters)?;
    let row = if digits.is_empty() {
        None
    } else {
        Some(digits.parse().ok()?)
    };
    Some((col, row))
}

impl fmt::Display for A1Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start_row = self.start_row.map(|r| r.to_string()).unwrap_or_default();
        let end_row = self.end_row.map(|r| r.to_string()).unwrap_or_default();
        write!(f, "{}!{}{}", quote_sheet(&self.sheet), column_letter(self.start_col), start_row)?;
        if self.start_col != self.end_col || self.start_row != self.end_row || self.start_row.is_none() {
            write!(f, ":{}{}", column_letter(self.end_col), end_row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(38), "AM");
        assert_eq!(column_letter(40), "AO");
        assert_eq!(column_index("AO"), Some(40));
        assert_eq!(column_index("a"), Some(0));
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn test_display_forms() {
        let span = ColumnSpan::new(0, 40);
        assert_eq!(A1Range::from_row("Base Mail", span, 2).to_string(), "'Base Mail'!A2:AO");
        assert_eq!(A1Range::row("Base Mail", ColumnSpan::new(13, 21), 5).to_string(), "'Base Mail'!N5:V5");
        assert_eq!(A1Range::cell("Base Mail", 23, 5).to_string(), "'Base Mail'!X5");
        assert_eq!(A1Range::columns("Auditoria", ColumnSpan::new(0, 8)).to_string(), "'Auditoria'!A:I");
        assert_eq!(A1Range::from_row("Base Mail", ColumnSpan::new(0, 0), 2).to_string(), "'Base Mail'!A2:A");
    }

    #[test]
    fn test_parse_reported_ranges() {
        let range = A1Range::parse("'Base Mail'!A5:K5").unwrap();
        assert_eq!(range, A1Range::row("Base Mail", ColumnSpan::new(0, 10), 5));

        let cell = A1Range::parse("Auditoria!X3").unwrap();
        assert_eq!(cell, A1Range::cell("Auditoria", 23, 3));

        let open = A1Range::parse("'O''Brien'!A2:A").unwrap();
        assert_eq!(open.sheet, "O'Brien");
        assert_eq!(open.end_row, None);

        assert!(A1Range::parse("no-bang").is_none());
    }

    #[test]
    fn test_display_then_parse_is_stable() {
        let original = A1Range::from_row("It's", ColumnSpan::new(2, 30), 7);
        assert_eq!(A1Range::parse(&original.to_string()), Some(original));
    }
}
