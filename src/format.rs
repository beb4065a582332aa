//! Tuple-literal output, one line per team.
//!
//! The line shape is an external contract consumed as Python source data:
//!
//! ```text
//! ('<name>', '<divName>', <wins>, <losses>, <ties>, <gamesPlayed>, <points>, <goalsFor>, <goalsAgainst>, <goalDifference>),
//! ```
//!
//! Strings are written verbatim between single quotes, without escaping.

use crate::error::Result;
use crate::standings::TeamRecord;
use std::fmt;
use std::io::Write;

/// Displays one record as a tuple literal, without the line terminator
#[derive(Clone, Copy, Debug)]
pub struct TupleLine<'a>(pub &'a TeamRecord);

impl fmt::Display for TupleLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(
            f,
            "('{}', '{}', {}, {}, {}, {}, {}, {}, {}, {}),",
            r.name,
            r.div_name,
            r.wins,
            r.losses,
            r.ties,
            r.games_played,
            r.points,
            r.goals_for,
            r.goals_against,
            r.goal_difference
        )
    }
}

/// Write one tuple line per record, in order, then flush
pub fn write_records<W: Write>(writer: &mut W, records: &[TeamRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", TupleLine(record))?;
    }
    writer.flush()?;
    Ok(())
}
