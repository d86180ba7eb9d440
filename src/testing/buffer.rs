use crate::*;

/// Scripted [`TextBuffer`] recording every mutation, for asserting how the
/// pipeline drives an editing surface.
#[derive(Debug, Default)]
pub struct SpyBuffer {
    text: String,
    cursor: usize,
    reject_edits: bool,
    pub replacements: Vec<String>,
    pub cursor_moves: Vec<usize>,
}

impl SpyBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Unlike [`MemoryBuffer`], the starting offset is stored unclamped so
    /// tests can exercise the pipeline's own bounds handling.
    pub fn with_cursor(text: impl Into<String>, offset: usize) -> Self {
        Self {
            cursor: offset,
            ..Self::new(text)
        }
    }

    pub fn rejecting_edits(mut self) -> Self {
        self.reject_edits = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextBuffer for SpyBuffer {
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
        if self.reject_edits {
            return Err(Error::EditRejected("scripted rejection".into()));
        }
        self.replacements.push(new_text.to_string());
        self.text = new_text.to_string();
        Ok(())
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.text.len());
        self.cursor_moves.push(self.cursor);
    }
}
