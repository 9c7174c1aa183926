//! Character-content rendering

/// Accumulates the text of a captured subtree
///
/// Whitespace-only character runs are dropped. CDATA sections contribute
/// their content trimmed. The final value is trimmed as a whole.
#[derive(Debug, Default)]
pub struct TextCollector {
    text: String,
}

impl TextCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn characters(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.text.push_str(text);
        }
    }

    pub fn cdata(&mut self, content: &str) {
        self.text.push_str(content.trim());
    }

    #[must_use]
    pub fn finish(self) -> String {
        let trimmed = self.text.trim();
        if trimmed.len() == self.text.len() {
            self.text
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_whitespace_runs_and_trims() {
        let mut collector = TextCollector::new();
        collector.characters("\n   ");
        collector.characters("  customerFor-5 ");
        collector.characters("\n");
        assert_eq!(collector.finish(), "customerFor-5");
    }

    #[test]
    fn trims_cdata_content() {
        let mut collector = TextCollector::new();
        collector.cdata("\n  <order id=\"1\"/>\n");
        assert_eq!(collector.finish(), "<order id=\"1\"/>");
    }
}
