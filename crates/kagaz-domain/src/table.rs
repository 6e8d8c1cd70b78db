//! Tabular content and its plain-text linearization

/// A table lifted out of a PDF page or DOCX body.
///
/// Rows are kept in source order. The first row is treated as the header
/// when it has any non-empty cell; an empty or absent first row means no
/// header is synthesized and the remaining rows render as data only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from raw rows of cells.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, header included, in source order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// True when the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a fixed plain-text grid.
    ///
    /// Columns are padded to the widest cell and joined with two spaces.
    /// The header row (when present) is the first line; data rows follow
    /// in original order, one line each.
    ///
    /// # Examples
    ///
    /// ```
    /// use kagaz_domain::Table;
    ///
    /// let table = Table::new(vec![
    ///     vec!["Name".into(), "Age".into()],
    ///     vec!["Asha".into(), "34".into()],
    /// ]);
    /// let grid = table.to_grid();
    /// assert!(grid.lines().next().unwrap().contains("Name"));
    /// ```
    pub fn to_grid(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let has_header = self.rows[0].iter().any(|cell| !cell.trim().is_empty());

        // The first row is consumed either way; it only becomes a printed
        // line when it qualifies as a header.
        let printable: Vec<&Vec<String>> = if has_header {
            self.rows.iter().collect()
        } else {
            self.rows.iter().skip(1).collect()
        };

        if printable.is_empty() {
            return String::new();
        }

        let columns = printable.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &printable {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(printable.len());
        for row in &printable {
            let mut line = String::new();
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                for _ in cell.chars().count()..*width {
                    line.push(' ');
                }
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_header_is_first_line_and_rows_keep_order() {
        let t = table(&[
            &["Name", "District"],
            &["Asha", "Pune"],
            &["Ravi", "Nashik"],
        ]);
        let grid = t.to_grid();
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("Asha"));
        assert!(lines[2].starts_with("Ravi"));
    }

    #[test]
    fn test_n_rows_with_header_render_n_lines() {
        // N source rows, non-empty header: first line is the header and the
        // following N-1 lines are the data rows.
        let t = table(&[&["H1", "H2"], &["a", "b"], &["c", "d"], &["e", "f"]]);
        assert_eq!(t.to_grid().lines().count(), 4);
    }

    #[test]
    fn test_empty_first_row_synthesizes_no_header() {
        let t = table(&[&["", ""], &["a", "b"]]);
        let grid = t.to_grid();
        assert_eq!(grid.lines().count(), 1);
        assert!(grid.starts_with('a'));
    }

    #[test]
    fn test_empty_table_renders_empty() {
        assert_eq!(Table::default().to_grid(), "");
        assert_eq!(table(&[&["", ""]]).to_grid(), "");
    }

    #[test]
    fn test_columns_are_padded_to_widest_cell() {
        let t = table(&[&["Name", "X"], &["Aadhaar", "Y"]]);
        let grid = t.to_grid();
        let lines: Vec<&str> = grid.lines().collect();
        // "Name" padded to the width of "Aadhaar", so both X and Y start at
        // the same column.
        assert_eq!(lines[0].find('X'), lines[1].find('Y'));
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let t = table(&[&["A", "B", "C"], &["only"]]);
        assert_eq!(t.to_grid().lines().count(), 2);
    }
}
