/// Caller-supplied reference lyrics, split into alignable lines.
///
/// Lines are extracted by splitting the raw blob on newlines, trimming each
/// line, and discarding blanks. Input order is preserved — it defines output
/// order, and nothing else: each line is matched independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LyricSheet {
    lines: Vec<String>,
}

impl LyricSheet {
    pub fn parse(blob: &str) -> Self {
        let lines = blob
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
