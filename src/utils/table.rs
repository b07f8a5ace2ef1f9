//! Plain column table for CLI reports (`data --info`).

use super::formatting::{pad_right, visible_width};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths fit the widest cell; missing cells render empty.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&self.headers[i])))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let mut push_line = |cells: &[String]| {
            let line: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };

        push_line(&self.headers[..]);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&rule[..]);
        for row in &self.rows {
            push_line(&row[..]);
        }

        out
    }
}
