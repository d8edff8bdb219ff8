use webui_core::RenderedTable;

const MIN_COLUMN_WIDTH: usize = 8;
const MAX_COLUMN_WIDTH: usize = 60;

/// Box-drawing formatter for a [`RenderedTable`].
///
/// Column widths fit the widest cell (or header), clamped to a readable
/// range; longer cells are truncated.
pub struct TableFormatter {
    widths: Vec<usize>,
}

impl TableFormatter {
    pub fn new(table: &RenderedTable) -> Self {
        let widths = table
            .headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.cells.get(column))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(MIN_COLUMN_WIDTH)
                    .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
            })
            .collect();

        Self { widths }
    }

    pub fn format(&self, table: &RenderedTable) -> String {
        let mut lines = vec![
            self.border('┌', '┬', '┐'),
            self.line(&table.headers),
            self.border('├', '┼', '┤'),
        ];
        lines.extend(table.rows.iter().map(|row| self.line(&row.cells)));
        lines.push(self.border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn line(&self, cells: &[String]) -> String {
        let columns: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = cells.get(column).map(String::as_str).unwrap_or("");
                format!(" {} ", truncate(cell, *width))
            })
            .collect();
        format!("│{}│", columns.join("│"))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(&middle.to_string()))
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webui_core::view::render_table;
    use webui_core::Instance;

    #[test]
    fn test_truncate_pads_short_values() {
        assert_eq!(truncate("ab", 5), "ab   ");
    }

    #[test]
    fn test_truncate_long_values() {
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_format_empty_table_keeps_header() {
        let table = render_table(&[]);
        let text = TableFormatter::new(&table).format(&table);

        assert_eq!(
            text,
            "┌──────────┐\n│ Instance │\n├──────────┤\n└──────────┘"
        );
    }

    #[test]
    fn test_format_rows_in_order() {
        let table = render_table(&[Instance::new("3"), Instance::new("i-0abc123def")]);
        let text = TableFormatter::new(&table).format(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "│ Instance     │");
        assert_eq!(lines[3], "│ 3            │");
        assert_eq!(lines[4], "│ i-0abc123def │");
    }
}
