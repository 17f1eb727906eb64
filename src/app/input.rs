//! Search input: single-line text buffer and cursor management

/// State of the search input
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Current text
    pub buffer: String,

    /// Cursor position within `buffer` (byte offset)
    pub cursor: usize,
}

impl InputState {
    /// Create an empty input
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Clear the buffer and reset cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Set the buffer content and move cursor to end
    pub fn set(&mut self, content: String) {
        self.cursor = content.len();
        self.buffer = content;
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the previous word, readline style
    pub fn delete_word(&mut self) {
        let before = &self.buffer[..self.cursor];
        let trimmed = before.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map_or(0, |(i, ch)| i + ch.len_utf8());
        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = self.buffer[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.buffer.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move cursor to the start
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub const fn cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}
