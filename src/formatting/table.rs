use std::fmt;

use colored::{ColoredString, Colorize};

/// A single table cell: its text plus an optional terminal style.
#[derive(Clone)]
pub struct Cell {
    pub contents: String,
    style: Option<fn(&str) -> ColoredString>,
}

impl Cell {
    pub fn plain(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            style: None,
        }
    }

    pub fn styled(contents: impl Into<String>, style: fn(&str) -> ColoredString) -> Self {
        Self {
            contents: contents.into(),
            style: Some(style),
        }
    }

    fn paint(&self) -> String {
        match self.style {
            Some(style) => style(&self.contents).to_string(),
            None => self.contents.clone(),
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("contents", &self.contents)
            .field("styled", &self.style.is_some())
            .finish()
    }
}

/// Column-aligned table with bold headers.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers
                .iter()
                .map(|header| Cell::styled(*header, |text| text.bold()))
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Render every row, padded to the widest cell of each column. Columns are
    /// separated by two spaces and the last column is never padded.
    pub fn render(&self, print_headers: bool) -> String {
        let mut lines: Vec<&Vec<Cell>> = Vec::with_capacity(self.rows.len() + 1);
        if print_headers {
            lines.push(&self.headers);
        }
        lines.extend(self.rows.iter());

        let columns = lines.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in &lines {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.contents.chars().count());
            }
        }

        let mut output = String::new();
        for row in lines {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(&cell.paint());
                if i + 1 < row.len() {
                    let padding = widths[i] - cell.contents.chars().count();
                    line.push_str(&" ".repeat(padding));
                }
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output
    }
}
