//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::visible_width;

pub struct Column {
    pub header: String,
    pub right: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, sep: char) -> Self {
        self.separator = sep;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths in terminal cells; colour escapes do not count.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header, &widths);

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            self.push_line(&mut out, row, &widths);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let mut parts = Vec::with_capacity(self.columns.len());

        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(widths[i].saturating_sub(visible_width(cell)));
            if col.right {
                parts.push(format!("{}{}", pad, cell));
            } else {
                parts.push(format!("{}{}", cell, pad));
            }
        }

        out.push_str(parts.join("  ").trim_end());
        out.push('\n');
    }
}
