//! Immutable UTF-8 source buffers with line/column tracking.

/// An immutable source buffer with an optional logical name and a base
/// (line, column) used to offset diagnostics, e.g. when the buffer is a
/// fragment embedded at a known position inside a larger file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    body: String,
    name: String,
    base_line: usize,
    base_column: usize,
    line_starts: Vec<usize>,
}

impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, "<iris>")
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_location_offset(body, name, 1, 1)
    }

    pub fn with_location_offset(
        body: impl Into<String>,
        name: impl Into<String>,
        base_line: usize,
        base_column: usize,
    ) -> Self {
        let body = body.into();
        let line_starts = compute_line_starts(&body);
        Self {
            body,
            name: name.into(),
            base_line: base_line.max(1),
            base_column: base_column.max(1),
            line_starts,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based (line, column) for a byte offset into `body`, after applying
    /// the base offset. Column is a codepoint count from the start of the
    /// line, not a byte count.
    pub fn location(&self, byte_offset: usize) -> Location {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self.body[line_start..byte_offset].chars().count() + 1;
        Location {
            line: self.base_line + line_idx,
            column: if line_idx == 0 {
                self.base_column + column - 1
            } else {
                column
            },
        }
    }

    /// The raw text of the `n`th 1-based physical line, without its
    /// terminator, or `None` if out of range.
    pub fn line_text(&self, line_number: usize) -> Option<&str> {
        let idx = line_number.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| s)
            .unwrap_or(self.body.len());
        Some(self.body[start..end].trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

fn compute_line_starts(body: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                starts.push(i + 1);
                i += 1;
            }
            b'\r' => {
                let next = if bytes.get(i + 1) == Some(&b'\n') { i + 2 } else { i + 1 };
                starts.push(next);
                i = next;
            }
            _ => i += 1,
        }
    }
    starts
}

/// A 1-based (line, column) diagnostic location, already adjusted for a
/// `Source`'s base offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_first_line() {
        let src = Source::new("data Hello = { world: String }");
        assert_eq!(src.location(5), Location { line: 1, column: 6 });
    }

    #[test]
    fn locates_subsequent_lines() {
        let src = Source::new("data Hello =\n  { world: String }");
        let offset = src.body().find("world").unwrap();
        assert_eq!(src.location(offset), Location { line: 2, column: 5 });
    }

    #[test]
    fn handles_crlf() {
        let src = Source::new("a\r\nb\r\nc");
        assert_eq!(src.line_text(1), Some("a"));
        assert_eq!(src.line_text(2), Some("b"));
        assert_eq!(src.line_text(3), Some("c"));
    }

    #[test]
    fn applies_base_offset_on_first_line_only() {
        let src = Source::with_location_offset("abc\ndef", "frag", 10, 5);
        assert_eq!(src.location(1), Location { line: 10, column: 6 });
        let second_line_offset = src.body().find('d').unwrap();
        assert_eq!(src.location(second_line_offset), Location { line: 11, column: 1 });
    }
}
