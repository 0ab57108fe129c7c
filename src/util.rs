//! Character routing between the dense and sparse child schemes.

/// Number of slots in the dense child table, one per lowercase Latin letter.
pub(crate) const DENSE_WIDTH: usize = 26;

/// Where a character lives among a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Index into the dense `a..=z` table.
    Dense(usize),
    /// Key into the sparse map (every other code point).
    Sparse(char),
}

impl Slot {
    /// Routes a character to its child scheme.
    #[inline]
    pub fn of(ch: char) -> Self {
        if ch.is_ascii_lowercase() {
            Slot::Dense((ch as u8 - b'a') as usize)
        } else {
            Slot::Sparse(ch)
        }
    }
}

/// Inverse of `Slot::Dense`: the character stored at a dense index.
#[inline]
pub(crate) fn dense_char(index: usize) -> char {
    debug_assert!(index < DENSE_WIDTH);
    (b'a' + index as u8) as char
}

/// Lowercases `ch` when the result is a single dense-table letter.
///
/// Used by the case-insensitive fallback in autocomplete. Characters whose
/// lowercase form expands to several code points, or lands outside `a..=z`,
/// have no dense fallback.
pub(crate) fn dense_fallback(ch: char) -> Option<usize> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => match Slot::of(single) {
            Slot::Dense(index) => Some(index),
            Slot::Sparse(_) => None,
        },
        _ => None,
    }
}
