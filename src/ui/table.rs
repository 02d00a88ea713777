//! Column-aligned text tables (three spaces between columns, header optionally bold).

use crate::color::{paint, BOLD};

#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Render to lines. The last column is never padded.
    pub fn render(&self, bold_header: bool) -> Vec<String> {
        let cols = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0);
        let mut widths = vec![0usize; cols];
        for line in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let fmt_line = |cells: &[String]| -> String {
            let mut out = String::new();
            for (i, cell) in cells.iter().enumerate() {
                out.push_str(cell);
                if i + 1 < cells.len() {
                    let pad = widths[i] - cell.chars().count() + 3;
                    out.push_str(&" ".repeat(pad));
                }
            }
            out
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(paint(bold_header, BOLD, &fmt_line(&self.header)));
        lines.extend(self.rows.iter().map(|r| fmt_line(r)));
        lines
    }

    pub fn print(&self) {
        for line in self.render(crate::color_enabled_stdout()) {
            println!("{line}");
        }
    }
}
