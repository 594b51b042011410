//! Plain-text document builder
//!
//! Provides a fluent API for composing the fixed-width `.txt` export.

/// Plain-text builder
///
/// Accumulates lines at a fixed column width. Widths are measured in
/// `char`s; the output is plain UTF-8 text.
pub struct TextDocBuilder {
    buf: String,
    width: usize,
}

impl TextDocBuilder {
    /// Create a new builder with the given line width in characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    /// Get the configured line width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Write a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.write_line(&"=".repeat(self.width))
    }

    /// Write a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    // === Layout Helpers ===

    /// Write text centered in the line width
    pub fn text_center(&mut self, s: &str) -> &mut Self {
        let len = s.chars().count();
        if len >= self.width {
            self.write_line(s);
        } else {
            let pad = (self.width - len) / 2;
            self.write(&" ".repeat(pad));
            self.write_line(s);
        }
        self
    }

    /// Write a labeled value ("Label: value")
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        self.write_line(&format!("{}: {}", label, value))
    }

    // === Build ===

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for TextDocBuilder {
    fn default() -> Self {
        Self::new(72)
    }
}
