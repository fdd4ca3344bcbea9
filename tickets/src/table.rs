//! Text table rendering.
//!
//! Draws the fixed ten-column header and one block per train, in the
//! order given. Station and time cells span two physical lines, departure
//! above arrival. Widths are measured in terminal columns so CJK station
//! names line up.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::domain::Locale;
use crate::trains::{Cell, DisplayRow};

/// How to draw the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStyle {
    /// Highlight departures in green and arrivals in red.
    pub color: bool,
}

impl TableStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Plain,
    Departure,
    Arrival,
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    role: Role,
}

impl<'a> Line<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            role: Role::Plain,
        }
    }

    fn width(&self) -> usize {
        self.text.width()
    }
}

fn lines(cell: Cell<'_>) -> Vec<Line<'_>> {
    match cell {
        Cell::Text(text) => vec![Line::plain(text)],
        Cell::Stops(stops) => vec![
            Line {
                text: &stops.departure,
                role: Role::Departure,
            },
            Line {
                text: &stops.arrival,
                role: Role::Arrival,
            },
        ],
    }
}

/// Render rows under the header for `locale`.
///
/// With no rows the result is a header-only table.
pub fn render(rows: &[DisplayRow], locale: Locale, style: TableStyle) -> String {
    let header: Vec<Vec<Line<'_>>> = locale
        .header()
        .into_iter()
        .map(|title| vec![Line::plain(title)])
        .collect();
    let body: Vec<Vec<Vec<Line<'_>>>> = rows
        .iter()
        .map(|row| row.cells().into_iter().map(lines).collect())
        .collect();

    let mut widths: Vec<usize> = vec![0; DisplayRow::COLUMNS];
    for row in std::iter::once(&header).chain(&body) {
        for (width, cell) in widths.iter_mut().zip(row) {
            for line in cell {
                *width = (*width).max(line.width());
            }
        }
    }

    let rule = border(&widths);
    let mut out = String::new();
    out.push_str(&rule);
    push_block(&mut out, &header, &widths, style);
    out.push_str(&rule);
    for row in &body {
        push_block(&mut out, row, &widths, style);
    }
    if !body.is_empty() {
        out.push_str(&rule);
    }
    out
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

/// Append one logical row, which may span several physical lines.
fn push_block(out: &mut String, cells: &[Vec<Line<'_>>], widths: &[usize], style: TableStyle) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);

    for i in 0..height {
        out.push('|');
        for (cell, &width) in cells.iter().zip(widths) {
            let line = cell.get(i).copied().unwrap_or(Line::plain(""));
            let gap = width - line.width();
            let left = gap / 2;
            out.push(' ');
            out.push_str(&" ".repeat(left));
            out.push_str(&paint(line, style));
            out.push_str(&" ".repeat(gap - left));
            out.push_str(" |");
        }
        out.push('\n');
    }
}

fn paint(line: Line<'_>, style: TableStyle) -> String {
    match (style.color, line.role) {
        (true, Role::Departure) => line.text.green().to_string(),
        (true, Role::Arrival) => line.text.red().to_string(),
        _ => line.text.to_string(),
    }
}
