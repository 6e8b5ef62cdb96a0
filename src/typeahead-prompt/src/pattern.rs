//! The pattern input buffer.

/// Owns the search string the user is typing.
///
/// Pure state: the host decodes keystrokes and calls in; no terminal
/// I/O happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternBuffer {
    value: String,
}

impl PatternBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one typed character.
    pub fn push(&mut self, key: char) {
        self.value.push(key);
    }

    /// Removes the last character; returns false if already empty.
    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Replaces the whole pattern, e.g. when restoring a previous value.
    pub fn set(&mut self, pattern: impl Into<String>) {
        self.value = pattern.into();
    }

    /// Current pattern.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_backspace() {
        let mut buffer = PatternBuffer::new();
        buffer.push('b');
        buffer.push('a');
        buffer.push('r');
        assert_eq!(buffer.as_str(), "bar");

        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "ba");

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.backspace());
    }

    #[test]
    fn test_set_replaces_value() {
        let mut buffer = PatternBuffer::new();
        buffer.push('x');
        buffer.set("restored");
        assert_eq!(buffer.as_str(), "restored");
    }
}
