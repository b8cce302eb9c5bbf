//! Snapshot of a `Board`, and the plain text format used to persist it.
//!
//! The text format is one side-to-move token on the first line, then one
//! `glyph file rank` triple per line:
//!
//! ```md,ignore
//! white
//! R 0 0
//! N 1 0
//! ...
//! p 7 6
//! ```
//!
//! The case of a glyph encodes the player (uppercase is White), its letter the type of piece.
//! File and rank are zero-based integers. Fields are separated by whitespace.
//!
//! Entries with an unrecognized letter are kept in the `Snapshot` as read and skipped when the
//! snapshot is loaded into a `Board`. Only structural problems (missing side token, missing or
//! non-numeric coordinates) are errors.

use crate::core::sq::SQ;
use crate::core::Player;

use std::fmt;
use std::io::{self, Read, Write};
use std::num::ParseIntError;
use std::str::FromStr;

/// Represents possible errors encountered while reading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("empty snapshot, expected a side to move")]
    MissingTurn,
    #[error("invalid side to move: {turn}, expected 'white' or 'black'")]
    UnrecognizedTurn { turn: String },
    #[error("line {line}: expected 'glyph file rank'")]
    MissingField { line: usize },
    #[error("line {line}: unreadable coordinate")]
    UnreadableCoordinate {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("snapshot i/o failed")]
    Io(#[from] io::Error),
}

/// A single piece as persisted: glyph and zero-based coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SnapshotEntry {
    pub glyph: char,
    pub file: i8,
    pub rank: i8,
}

impl SnapshotEntry {
    pub fn new(glyph: char, file: i8, rank: i8) -> SnapshotEntry {
        SnapshotEntry { glyph, file, rank }
    }

    /// The square this entry refers to. Not necessarily on the board.
    #[inline]
    pub fn sq(&self) -> SQ {
        SQ::new(self.file, self.rank)
    }
}

impl From<(char, i8, i8)> for SnapshotEntry {
    fn from(t: (char, i8, i8)) -> Self {
        SnapshotEntry::new(t.0, t.1, t.2)
    }
}

/// The exported state of a board: side to move and every piece in board order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pub turn: Player,
    pub entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Renders the snapshot in the text format.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::board::snapshot::{Snapshot, SnapshotEntry};
    /// use shahmata::Player;
    ///
    /// let snap = Snapshot {
    ///     turn: Player::Black,
    ///     entries: vec![SnapshotEntry::new('K', 4, 0), SnapshotEntry::new('k', 4, 7)],
    /// };
    /// assert_eq!(snap.to_text(), "black\nK 4 0\nk 4 7\n");
    /// ```
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(8 + self.entries.len() * 6);
        s.push_str(self.turn.name_lower());
        s.push('\n');
        for entry in self.entries.iter() {
            s.push_str(&format!("{} {} {}\n", entry.glyph, entry.file, entry.rank));
        }
        s
    }

    /// Parses the text format.
    pub fn from_text(text: &str) -> Result<Snapshot, SnapshotError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, turn_line) = lines.next().ok_or(SnapshotError::MissingTurn)?;
        let turn = parse_turn(turn_line)?;

        let mut entries = Vec::new();
        for (line, content) in lines {
            entries.push(parse_entry(line, content)?);
        }

        Ok(Snapshot { turn, entries })
    }

    /// Writes the text format to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), SnapshotError> {
        out.write_all(self.to_text().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Reads the text format from `input`.
    pub fn read_from<R: Read>(mut input: R) -> Result<Snapshot, SnapshotError> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        Snapshot::from_text(&text)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Snapshot {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snapshot::from_text(s)
    }
}

fn parse_turn(line: &str) -> Result<Player, SnapshotError> {
    let token = line.split_whitespace().next().unwrap_or("");
    match token.to_ascii_lowercase().as_str() {
        "white" => Ok(Player::White),
        "black" => Ok(Player::Black),
        _ => Err(SnapshotError::UnrecognizedTurn {
            turn: token.to_string(),
        }),
    }
}

fn parse_entry(line: usize, content: &str) -> Result<SnapshotEntry, SnapshotError> {
    let mut fields = content.split_whitespace();
    let glyph_field = fields.next().ok_or(SnapshotError::MissingField { line })?;
    let file_field = fields.next().ok_or(SnapshotError::MissingField { line })?;
    let rank_field = fields.next().ok_or(SnapshotError::MissingField { line })?;

    let glyph = glyph_field
        .chars()
        .next()
        .ok_or(SnapshotError::MissingField { line })?;
    let file = file_field
        .parse::<i8>()
        .map_err(|source| SnapshotError::UnreadableCoordinate { line, source })?;
    let rank = rank_field
        .parse::<i8>()
        .map_err(|source| SnapshotError::UnreadableCoordinate { line, source })?;

    Ok(SnapshotEntry { glyph, file, rank })
}
