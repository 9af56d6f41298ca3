//! Shared identifiers for note windows.
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

/// Stable identity of a logical note window.
///
/// The identifier is the note's numeric id and survives application restarts,
/// so it is used as the key of the persisted position history. Live windows
/// never share an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

impl NoteId {
    /// Construct an identifier from the note's numeric id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Numeric note id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Parses the string-encoded form used as a JSON object key.
impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<NoteId> for u64 {
    fn from(value: NoteId) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_key_round_trips() {
        let id = NoteId::new(1_712_345_678);
        let key = id.to_string();
        assert_eq!(key, "1712345678");
        assert_eq!(key.parse::<NoteId>().unwrap(), id);
    }

    #[test]
    fn rejects_non_numeric_keys() {
        assert!("note-7".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
        assert!("-3".parse::<NoteId>().is_err());
    }
}
