//! Tabular dataset wrapper and its delimited-text serialization.
//!
//! Every cached reference table (school directory, team lists, season
//! stat tables) travels through [`Dataset`]: an ordered header row plus
//! string rows. Persistence is plain delimited text with a header line,
//! quote-escaped where a field contains the delimiter itself.

/// A named tabular dataset: one header row and zero or more data rows.
///
/// All cells are strings; sport modules own any further typing. Rows are
/// kept in scrape order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Creates an empty dataset with the given column headers.
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Arity mismatches are caught at serialization time
    /// rather than here, so scrape loops can build rows incrementally.
    pub fn push_row<S: Into<String>>(&mut self, row: Vec<S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Serializes the dataset as delimited text with a header line.
    pub fn to_delimited(&self, sep: char) -> String {
        let mut out = String::new();
        write_row(&mut out, &self.headers, sep);
        for row in &self.rows {
            write_row(&mut out, row, sep);
        }
        out
    }

    /// Parses delimited text produced by [`Dataset::to_delimited`].
    ///
    /// Returns a descriptive message on anything the cache must treat as
    /// corruption: empty input, or a data row whose arity does not match
    /// the header row.
    pub fn from_delimited(text: &str, sep: char) -> Result<Self, String> {
        let mut lines = text
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| parse_row(l, sep));

        let headers = lines.next().ok_or_else(|| "empty file".to_string())?;
        if headers.is_empty() {
            return Err("missing header row".to_string());
        }

        let mut rows = Vec::new();
        for (i, row) in lines.enumerate() {
            if row.len() != headers.len() {
                return Err(format!(
                    "ragged row at line {}: expected {} fields, found {}",
                    i + 2,
                    headers.len(),
                    row.len()
                ));
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }
}

fn needs_quoting(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row(out: &mut String, row: &[String], sep: char) {
    for (i, field) in row.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        if needs_quoting(field, sep) {
            out.push('"');
            for c in field.chars() {
                if c == '"' {
                    out.push('"');
                }
                out.push(c);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn parse_row(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == sep {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut ds = Dataset::new(vec!["school_id", "school_name"]);
        ds.push_row(vec!["100", "Test University"]);
        ds.push_row(vec!["101", "Sample College"]);
        ds
    }

    #[test]
    fn test_round_trip() {
        let ds = sample();
        let text = ds.to_delimited(',');
        let parsed = Dataset::from_delimited(&text, ',').unwrap();
        assert_eq!(parsed, ds);
    }

    #[test]
    fn test_header_line_comes_first() {
        let text = sample().to_delimited(',');
        assert!(text.starts_with("school_id,school_name\n"));
    }

    #[test]
    fn test_fields_with_delimiter_are_quoted() {
        let mut ds = Dataset::new(vec!["school_id", "school_name"]);
        ds.push_row(vec!["100", "College of Arts, Sciences"]);
        let text = ds.to_delimited(',');
        assert!(text.contains("\"College of Arts, Sciences\""));

        let parsed = Dataset::from_delimited(&text, ',').unwrap();
        assert_eq!(parsed.rows[0][1], "College of Arts, Sciences");
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let mut ds = Dataset::new(vec!["name"]);
        ds.push_row(vec!["St. \"Johnny\" College"]);
        let text = ds.to_delimited(',');
        let parsed = Dataset::from_delimited(&text, ',').unwrap();
        assert_eq!(parsed.rows[0][0], "St. \"Johnny\" College");
    }

    #[test]
    fn test_empty_input_is_corrupt() {
        assert!(Dataset::from_delimited("", ',').is_err());
    }

    #[test]
    fn test_ragged_row_is_corrupt() {
        let text = "a,b\n1,2\n3\n";
        let err = Dataset::from_delimited(text, ',').unwrap_err();
        assert!(err.contains("ragged row"), "unexpected message: {err}");
    }

    #[test]
    fn test_header_only_file_is_valid_and_empty() {
        let parsed = Dataset::from_delimited("school_id,school_name\n", ',').unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.headers.len(), 2);
    }

    #[test]
    fn test_column_index() {
        let ds = sample();
        assert_eq!(ds.column_index("school_id"), Some(0));
        assert_eq!(ds.column_index("school_name"), Some(1));
        assert_eq!(ds.column_index("conference"), None);
    }

    #[test]
    fn test_empty_fields_survive() {
        let mut ds = Dataset::new(vec!["a", "b", "c"]);
        ds.push_row(vec!["1", "", "3"]);
        let text = ds.to_delimited(',');
        let parsed = Dataset::from_delimited(&text, ',').unwrap();
        assert_eq!(parsed.rows[0], vec!["1", "", "3"]);
    }
}
