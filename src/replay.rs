//! Keystroke replay.
//!
//! Drives a [`CardEntry`] the way a text widget would: each key edits a
//! local text buffer, the resulting change event goes through the entry,
//! and the entry's output is written back into the buffer (which the entry
//! then sees as an echo and ignores). Useful for demos, tests and the CLI.
//!
//! # Example
//!
//! ```
//! use cc_entry::replay::{keys, TypingExt};
//! use cc_entry::{CardEntry, Field};
//!
//! let mut entry = CardEntry::new();
//! let steps: Vec<_> = keys("41111").type_into(&mut entry, Field::CardNumber).collect();
//!
//! assert_eq!(steps.last().unwrap().text, "4111 1");
//! assert_eq!(steps.last().unwrap().cursor, 6);
//! assert_eq!(entry.card_number(), "4111 1");
//! ```

use crate::entry::CardEntry;
use crate::validate::Field;

/// One key press on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Types a character at the caret.
    Char(char),
    /// Pastes text at the caret.
    Paste(String),
    /// Deletes the character before the caret.
    Backspace,
    /// Deletes the character after the caret.
    Delete,
    /// Moves the caret one character left.
    Left,
    /// Moves the caret one character right.
    Right,
    /// Moves the caret to the start.
    Home,
    /// Moves the caret to the end.
    End,
}

impl Key {
    /// Parses a key name as used by the CLI (`<bs>`, `<del>`, `<left>`,
    /// `<right>`, `<home>`, `<end>`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "<bs>" | "<backspace>" => Some(Self::Backspace),
            "<del>" | "<delete>" => Some(Self::Delete),
            "<left>" => Some(Self::Left),
            "<right>" => Some(Self::Right),
            "<home>" => Some(Self::Home),
            "<end>" => Some(Self::End),
            _ => None,
        }
    }
}

/// Turns a string into one [`Key::Char`] per character.
pub fn keys(text: &str) -> impl Iterator<Item = Key> + '_ {
    text.chars().map(Key::Char)
}

/// Field text and caret after one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    /// The key that was pressed.
    pub key: Key,
    /// Field text after the entry processed the key.
    pub text: String,
    /// Caret after the entry processed the key.
    pub cursor: usize,
}

/// A text buffer with a caret, in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TextBuffer {
    text: String,
    caret: usize,
}

impl TextBuffer {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            caret: text.chars().count(),
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, caret: usize) -> usize {
        self.text
            .char_indices()
            .nth(caret)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Applies a key, returning true if the text changed.
    fn apply(&mut self, key: &Key) -> bool {
        match key {
            Key::Char(c) => {
                let at = self.byte_offset(self.caret);
                self.text.insert(at, *c);
                self.caret += 1;
                true
            }
            Key::Paste(pasted) => {
                let at = self.byte_offset(self.caret);
                self.text.insert_str(at, pasted);
                self.caret += pasted.chars().count();
                !pasted.is_empty()
            }
            Key::Backspace => {
                if self.caret == 0 {
                    return false;
                }
                self.caret -= 1;
                let at = self.byte_offset(self.caret);
                self.text.remove(at);
                true
            }
            Key::Delete => {
                if self.caret >= self.len() {
                    return false;
                }
                let at = self.byte_offset(self.caret);
                self.text.remove(at);
                true
            }
            Key::Left => {
                self.caret = self.caret.saturating_sub(1);
                false
            }
            Key::Right => {
                self.caret = (self.caret + 1).min(self.len());
                false
            }
            Key::Home => {
                self.caret = 0;
                false
            }
            Key::End => {
                self.caret = self.len();
                false
            }
        }
    }

    fn write_back(&mut self, text: &str, caret: usize) {
        self.text.clear();
        self.text.push_str(text);
        self.caret = caret.min(self.len());
    }
}

/// Iterator adapter feeding keys into one field of a [`CardEntry`].
///
/// Created by [`TypingExt::type_into`].
#[derive(Debug)]
pub struct Typing<'e, I> {
    keys: I,
    entry: &'e mut CardEntry,
    field: Field,
    buffer: TextBuffer,
}

impl<'e, I> Typing<'e, I> {
    /// Starts typing into `field`, with the caret at the end of its text.
    pub fn new(keys: I, entry: &'e mut CardEntry, field: Field) -> Self {
        let buffer = TextBuffer::new(entry.text(field));
        Self {
            keys,
            entry,
            field,
            buffer,
        }
    }

    fn process(&mut self) {
        let text = self.buffer.text.clone();
        let caret = self.buffer.caret;

        let (formatted, new_caret) = match self.field {
            Field::CardNumber => match self.entry.edit_card_number(&text, caret) {
                Some(change) => (
                    change.result.formatted_text,
                    change.result.cursor_position,
                ),
                None => return,
            },
            Field::Expiry => match self.entry.edit_expiry(&text, caret) {
                Some(result) => (result.formatted_text, result.cursor_position),
                None => return,
            },
            Field::Cvc => match self.entry.edit_cvc(&text) {
                Some(digits) if digits != text => {
                    let end = digits.chars().count();
                    (digits, end)
                }
                Some(digits) => (digits, caret),
                None => return,
            },
            Field::Name => match self.entry.edit_name(&text) {
                Some(name) if name != text => {
                    let end = name.chars().count();
                    (name, end)
                }
                Some(name) => (name, caret),
                None => return,
            },
        };

        self.buffer.write_back(&formatted, new_caret);

        // The widget reports its own write-back as another change.
        match self.field {
            Field::CardNumber => {
                self.entry.edit_card_number(&formatted, new_caret);
            }
            Field::Expiry => {
                self.entry.edit_expiry(&formatted, new_caret);
            }
            Field::Cvc => {
                self.entry.edit_cvc(&formatted);
            }
            Field::Name => {
                self.entry.edit_name(&formatted);
            }
        }
    }
}

impl<I> Iterator for Typing<'_, I>
where
    I: Iterator<Item = Key>,
{
    type Item = Keystroke;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        if self.buffer.apply(&key) {
            self.process();
        }

        Some(Keystroke {
            key,
            text: self.buffer.text.clone(),
            cursor: self.buffer.caret,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

/// Extension trait for replaying keys into a [`CardEntry`].
///
/// Automatically implemented for every iterator over [`Key`].
pub trait TypingExt: Iterator<Item = Key> + Sized {
    /// Feeds these keys into `field` of `entry`.
    fn type_into(self, entry: &mut CardEntry, field: Field) -> Typing<'_, Self> {
        Typing::new(self, entry, field)
    }
}

impl<I: Iterator<Item = Key>> TypingExt for I {}

/// Types `text` into `field` and returns the final keystroke, if any.
pub fn type_text(entry: &mut CardEntry, field: Field, text: &str) -> Option<Keystroke> {
    keys(text).type_into(entry, field).last()
}
