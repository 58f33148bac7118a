//! Caret placement after a reformat.
//!
//! When a field rewrites its own text (inserting group separators, a `/`,
//! or correcting a month) the caret the widget reported no longer points
//! at the same digit. The tracker anchors the caret to the number of digits
//! in front of it, which survives any reformat, and maps that count back
//! into the formatted text.
//!
//! Positions are char offsets, never byte offsets.

use crate::format::digit_count;

/// What kind of change an edit event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditKind {
    /// The text grew by one character (a typed key).
    Insert,
    /// The text did not grow (deletion, or a same-length replacement).
    Delete,
    /// More than one digit arrived at once.
    Paste,
}

impl EditKind {
    /// Classifies an edit from the text before and after it.
    ///
    /// A gain of more than one digit is a paste; otherwise the edit is an
    /// insert when the text got longer.
    pub fn detect(previous: &str, current: &str) -> Self {
        if digit_count(current) > digit_count(previous) + 1 {
            Self::Paste
        } else if current.chars().count() > previous.chars().count() {
            Self::Insert
        } else {
            Self::Delete
        }
    }
}

/// Counts the digits strictly before char offset `cursor`.
///
/// Offsets past the end count every digit.
pub fn digits_before(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .filter(|c| c.is_ascii_digit())
        .count()
}

/// Returns the char offset just after the `count`-th digit of `formatted`.
///
/// A count of zero is the start of the text; a count larger than the
/// number of digits is the end of the text.
pub fn caret_after_digits(formatted: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let mut seen = 0;
    for (i, c) in formatted.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == count {
                return i + 1;
            }
        }
    }

    formatted.chars().count()
}

/// Tracks where the caret belongs across one reformat.
///
/// # Example
///
/// ```
/// use cc_entry::cursor::CursorTracker;
///
/// // Typing the fifth digit pushes a separator in front of it.
/// let tracker = CursorTracker::new("4111", "41111", 5);
/// assert_eq!(tracker.place("4111 1"), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorTracker {
    kind: EditKind,
    digits_before: usize,
}

impl CursorTracker {
    /// Creates a tracker for an edit from `previous` to `current`.
    ///
    /// `cursor` is the caret the widget reports alongside `current`; it is
    /// clamped into the text before use.
    pub fn new(previous: &str, current: &str, cursor: usize) -> Self {
        let cursor = cursor.min(current.chars().count());
        Self {
            kind: EditKind::detect(previous, current),
            digits_before: digits_before(current, cursor),
        }
    }

    /// Returns the detected edit kind.
    #[inline]
    pub const fn kind(&self) -> EditKind {
        self.kind
    }

    /// Returns the number of digits anchoring the caret.
    #[inline]
    pub const fn digits_before(&self) -> usize {
        self.digits_before
    }

    /// Accounts for digits a correction inserted in front of the caret.
    #[must_use]
    pub const fn shift(self, inserted: usize) -> Self {
        Self {
            kind: self.kind,
            digits_before: self.digits_before + inserted,
        }
    }

    /// Places the caret in grouped text.
    ///
    /// Pastes land at the end; every other edit lands after the anchored
    /// digit.
    pub fn place(&self, formatted: &str) -> usize {
        match self.kind {
            EditKind::Paste => formatted.chars().count(),
            EditKind::Insert | EditKind::Delete => {
                caret_after_digits(formatted, self.digits_before)
            }
        }
    }

    /// Places the caret in `MM/YY` text.
    ///
    /// Typing the second month digit, when it completes a two-digit run,
    /// moves the caret past the separator that follows it.
    pub fn place_expiry(&self, formatted: &str) -> usize {
        let len = formatted.chars().count();
        let mut position = self.place(formatted);
        if self.kind == EditKind::Insert && self.digits_before == 2 && digit_count(formatted) == 2
        {
            position += 1;
        }
        position.min(len)
    }
}
