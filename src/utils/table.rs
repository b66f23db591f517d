//! Table rendering for value-count listings.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths follow the widest cell (header included), measured in
    /// terminal columns.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let mut push_line = |cells: Vec<&str>| {
            let line: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .zip(cells)
                .map(|((col, w), cell)| {
                    if col.right_align {
                        pad_left(cell, *w)
                    } else {
                        pad_right(cell, *w)
                    }
                })
                .collect();
            out.push_str("  ");
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };

        push_line(self.columns.iter().map(|c| c.header.as_str()).collect());
        for row in &self.rows {
            push_line(row.iter().map(String::as_str).collect());
        }

        out
    }
}
