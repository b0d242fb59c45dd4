use tracing::debug;

/// Keys typed on the numeric pad since the last confirm or clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeypadBuffer {
    keys: String,
}

impl KeypadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit or decimal point; any other key is ignored.
    pub fn press(&mut self, key: char) -> bool {
        if key.is_ascii_digit() || key == '.' {
            self.keys.push(key);
            true
        } else {
            debug!(%key, "not a keypad key");
            false
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Hands over the typed keys and empties the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.keys)
    }

    pub fn is_blank(&self) -> bool {
        self.keys.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::KeypadBuffer;

    #[test]
    fn accumulates_digits_and_point() {
        let mut keypad = KeypadBuffer::new();
        for key in "12.5".chars() {
            assert!(keypad.press(key));
        }
        assert!(!keypad.press('x'));
        assert!(!keypad.press('-'));
        assert_eq!(keypad.as_str(), "12.5");
    }

    #[test]
    fn take_empties_the_buffer() {
        let mut keypad = KeypadBuffer::new();
        keypad.press('3');
        assert_eq!(keypad.take(), "3");
        assert!(keypad.is_blank());
        assert_eq!(keypad.take(), "");
    }

    #[test]
    fn clear_discards_keys() {
        let mut keypad = KeypadBuffer::new();
        keypad.press('7');
        keypad.clear();
        assert!(keypad.is_blank());
    }
}
