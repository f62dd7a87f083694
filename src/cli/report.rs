//! Console output formatting.
//!
//! Provides the per-locale merge report table and the shared success and
//! warning line styles. Separate from core logic so lingot can be used as
//! a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::merge::MergeStats;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a green success line.
pub fn success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print a styled warning line to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

const COLUMNS: usize = 4;

/// Per-locale reconciliation report, rendered as a box-drawing table with
/// columns ` `, `Total`, `Missing` and `Unused`.
///
/// The default locale's row comes first with `/` placeholders; target rows
/// are appended in the caller's (lexicographic) enumeration order.
#[derive(Debug, Default)]
pub struct MergeReport {
    rows: Vec<[String; COLUMNS]>,
}

impl MergeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row for the default locale: totals only, no reconciliation counts.
    pub fn push_default(&mut self, locale: &str, total: usize) {
        self.rows.push([
            format!("{} (default)", locale),
            total.to_string(),
            "/".to_string(),
            "/".to_string(),
        ]);
    }

    /// Row for one merged target locale.
    pub fn push(&mut self, locale: &str, total: usize, stats: MergeStats) {
        self.rows.push([
            locale.to_string(),
            total.to_string(),
            stats.missing.to_string(),
            stats.unused.to_string(),
        ]);
    }

    pub fn print(&self) {
        // Writing to a locked stdout cannot fail meaningfully for a report
        let _ = self.render_to(&mut io::stdout().lock());
    }

    pub fn render_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let header = [" ", "Total", "Missing", "Unused"];

        let mut widths = [0usize; COLUMNS];
        for (i, cell) in header.iter().enumerate() {
            widths[i] = cell.width();
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        self.border(writer, &widths, '╔', '═', '╤', '╗')?;
        self.cells(writer, &widths, &header.map(String::from))?;
        self.border(writer, &widths, '╟', '─', '┼', '╢')?;
        for row in &self.rows {
            self.cells(writer, &widths, row)?;
        }
        self.border(writer, &widths, '╚', '═', '╧', '╝')
    }

    fn border<W: Write>(
        &self,
        writer: &mut W,
        widths: &[usize; COLUMNS],
        left: char,
        fill: char,
        mid: char,
        right: char,
    ) -> io::Result<()> {
        let separator = mid.to_string();
        let line: Vec<String> = widths
            .iter()
            .map(|w| fill.to_string().repeat(w + 2))
            .collect();
        writeln!(writer, "{}{}{}", left, line.join(separator.as_str()), right)
    }

    fn cells<W: Write>(
        &self,
        writer: &mut W,
        widths: &[usize; COLUMNS],
        row: &[String; COLUMNS],
    ) -> io::Result<()> {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let padding = width.saturating_sub(cell.width());
                format!(" {}{} ", cell, " ".repeat(padding))
            })
            .collect();
        writeln!(writer, "║{}║", cells.join("│"))
    }
}
