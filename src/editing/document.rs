//! The editing-surface boundary consumed by the pipeline.
//!
//! A host owns the real document (an editor view, a form control, a file
//! tab); the pipeline only ever sees this trait. One invocation performs
//! exactly one `snapshot`, at most one `replace_all` and at most one
//! `set_cursor`.

use crate::*;

/// A position-addressed text buffer supporting a whole-content replace.
pub trait TextBuffer {
    /// Full content at the time of the call.
    fn snapshot(&self) -> String;

    /// Current length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current caret / selection.
    fn cursor(&self) -> Cursor;

    /// Replace the entire content `[0, len)` with `new_text` as one
    /// transactional step. Implementations must either apply the full
    /// replacement or reject with [`Error::EditRejected`] leaving the
    /// content untouched; any edit-session resource they hold must be
    /// released on both paths.
    fn replace_all(&mut self, new_text: &str) -> Result;

    /// Move the caret. Offsets past the end are pinned to the end.
    fn set_cursor(&mut self, offset: usize);
}

/// In-process buffer backing the stdin shim and the tests. A real host
/// implements [`TextBuffer`] over its own edit transaction instead.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    text: String,
    cursor: usize,
    read_only: bool,
}

impl MemoryBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            read_only: false,
        }
    }

    pub fn with_cursor(text: impl Into<String>, offset: usize) -> Self {
        let mut buffer = Self::new(text);
        buffer.set_cursor(offset);
        buffer
    }

    /// Mark the buffer read-only; subsequent replacements are rejected.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl TextBuffer for MemoryBuffer {
    fn snapshot(&self) -> String {
        self.text.clone()
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn cursor(&self) -> Cursor {
        Cursor::at(self.cursor)
    }

    fn replace_all(&mut self, new_text: &str) -> Result {
        if self.read_only {
            return Err(Error::EditRejected("buffer is read-only".into()));
        }
        self.text.clear();
        self.text.push_str(new_text);
        Ok(())
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.text.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_swaps_the_whole_content() {
        let mut buffer = MemoryBuffer::new("old text");
        buffer.replace_all("new").unwrap();
        assert_eq!(buffer.snapshot(), "new");
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn read_only_rejects_without_mutating() {
        let mut buffer = MemoryBuffer::new("keep me").read_only();
        let err = buffer.replace_all("clobbered").unwrap_err();
        assert!(matches!(err, Error::EditRejected(_)));
        assert_eq!(buffer.snapshot(), "keep me");
    }

    #[test]
    fn cursor_is_pinned_to_the_content() {
        let mut buffer = MemoryBuffer::with_cursor("abc", 99);
        assert_eq!(buffer.cursor(), Cursor::at(3));
        buffer.set_cursor(1);
        assert_eq!(buffer.cursor(), Cursor::at(1));
    }
}
