use std::sync::LazyLock;

use regex::Regex;

static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|(.+)\|\s*$").expect("table row regex"));

/// A pipe-table row, kept as literal text.
///
/// Columns and alignment are not modelled; the row is reconstructed with
/// normalised cell padding and emitted as one raw row block.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Parses a trimmed line into its trimmed cells.
    pub fn parse(line: &str) -> Option<Vec<&str>> {
        let inner = TABLE_ROW.captures(line)?.get(1)?.as_str();
        Some(inner.split(Self::PIPE).map(str::trim).collect())
    }

    /// Reconstructs the literal `| cell | cell |` text.
    pub fn render(cells: &[&str]) -> String {
        format!("| {} |", cells.join(" | "))
    }
}
