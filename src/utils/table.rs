//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::visible_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width of each column: the widest of header and cells.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        push_line(&mut out, &self.columns, &widths, &headers);

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            push_line(&mut out, &self.columns, &widths, &cells);
        }

        out
    }
}

fn push_line(out: &mut String, columns: &[Column], widths: &[usize], cells: &[&str]) {
    let mut parts = Vec::with_capacity(cells.len());

    for ((col, width), cell) in columns.iter().zip(widths).zip(cells) {
        let pad = " ".repeat(width.saturating_sub(visible_width(cell)));
        parts.push(match col.align {
            Align::Left => format!("{cell}{pad}"),
            Align::Right => format!("{pad}{cell}"),
        });
    }

    out.push_str(parts.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_fit_content() {
        let mut t = Table::new(vec![Column::right("ID"), Column::left("Name")], '-');
        t.add_row(vec!["1".into(), "Ann".into()]);
        t.add_row(vec!["12".into(), "Bartholomew".into()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "-".repeat(2 + 2 + 11));
        assert_eq!(lines[2], " 1  Ann");
        assert_eq!(lines[3], "12  Bartholomew");
    }
}
