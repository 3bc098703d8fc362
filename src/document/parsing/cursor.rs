//! Forward-only cursor over the preprocessed lines of a document

/// Position in the filtered line list. Only ever moves forward.
#[derive(Debug, Clone)]
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    /// Split on line breaks, trim each line and keep only non-empty ones
    pub(crate) fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines, position: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// Consume the current line
    pub(crate) fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }

    /// Consume the current line only if `predicate` holds for it
    pub(crate) fn next_if(&mut self, predicate: impl Fn(&str) -> bool) -> Option<&'a str> {
        match self.peek() {
            Some(line) if predicate(line) => self.advance(),
            _ => None,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.position >= self.lines.len()
    }
}
