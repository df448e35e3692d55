/// Single-line text input. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Returns whether the text changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.text.remove(prev);
        self.cursor = prev;
        true
    }

    /// Returns whether the text changed
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Text left of the cursor, for placing the terminal cursor
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_respect_multibyte_chars() {
        let mut input = InputState::default();
        for c in "café".chars() {
            input.insert(c);
        }
        assert_eq!(input.cursor, "café".len());

        input.left();
        assert_eq!(input.before_cursor(), "caf");

        assert!(input.delete());
        assert_eq!(input.text, "caf");

        input.home();
        assert!(!input.backspace());
        input.right();
        assert!(input.backspace());
        assert_eq!(input.text, "af");
        assert_eq!(input.cursor, 0);

        input.end();
        input.insert('é');
        assert_eq!(input.text, "afé");
        assert!(!input.delete());
    }
}
