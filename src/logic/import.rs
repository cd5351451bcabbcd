//! Roster import from pasted spreadsheet text: name plus an optional handicap marker column.

use crate::models::PlayerScore;
use csv::ReaderBuilder;

/// Errors raised while reading a pasted roster.
#[derive(Debug)]
pub enum ImportError {
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "Could not read roster: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Csv(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

/// Any of these separates columns; runs of them count as one.
const COLUMN_SEPARATORS: [char; 3] = ['\t', ';', ','];

/// Marker column: eligible when it contains `k`, `f` or `w` (any case).
fn is_handicap_marker(cell: &str) -> bool {
    let cell = cell.to_lowercase();
    ['k', 'f', 'w'].iter().any(|c| cell.contains(*c))
}

/// Parse one player per line. Blank lines and rows without a name are skipped.
///
/// Lines are read with quoting off, so a stray `"` stays part of a name. Each line is
/// split on tabs, semicolons and commas, mixed freely; empty columns are dropped, so
/// the first non-empty column is the name and the next one the handicap marker.
pub fn parse_roster(text: &str) -> Result<Vec<PlayerScore>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(b'\t')
        .from_reader(text.as_bytes());

    let mut players = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let mut columns = record
            .iter()
            .flat_map(|field| field.split(COLUMN_SEPARATORS))
            .map(str::trim)
            .filter(|cell| !cell.is_empty());

        let Some(name) = columns.next() else {
            log::warn!("Skipping roster row {} without a name", line + 1);
            continue;
        };
        let eligible = columns.next().is_some_and(is_handicap_marker);
        players.push(PlayerScore::new(name).with_handicap(eligible));
    }
    Ok(players)
}
