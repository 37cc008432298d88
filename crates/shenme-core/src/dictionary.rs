use std::fmt;

use serde::Serialize;

/// Ordered list of sense definitions for one word
///
/// Position is meaningful: the numbering in [`Definitions::to_text`] is derived from it.
/// An empty list means nothing was found and is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Definitions {
    entries: Vec<String>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Numbered plain text, one `"<n>. <text>\n"` line per entry
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Ordered list markup
    ///
    /// Entry text is written verbatim, embedded markup is not escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<ol>");

        for entry in &self.entries {
            html.push_str("<li>");
            html.push_str(entry);
            html.push_str("</li>");
        }

        html.push_str("</ol>");
        html
    }
}

impl fmt::Display for Definitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, entry)?;
        }

        Ok(())
    }
}

impl From<Vec<String>> for Definitions {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<String> for Definitions {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Definitions {
        Definitions::from(vec![
            "first sense gloss".to_string(),
            "second sense".to_string(),
            "third <b>sense</b>".to_string(),
        ])
    }

    #[test]
    fn test_text_numbering() {
        let text = sample().to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{}. ", i + 1)), "bad line: {line}");
        }
        assert_eq!(
            text,
            "1. first sense gloss\n2. second sense\n3. third <b>sense</b>\n"
        );
    }

    #[test]
    fn test_text_empty() {
        let definitions = Definitions::new();

        assert_eq!(definitions.to_text(), "");
        assert_eq!(definitions.len(), 0);
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_html_items() {
        let html = sample().to_html();

        assert_eq!(html.matches("<li>").count(), 3);
        assert_eq!(
            html,
            "<ol><li>first sense gloss</li><li>second sense</li><li>third <b>sense</b></li></ol>"
        );
    }

    #[test]
    fn test_html_empty() {
        assert_eq!(Definitions::new().to_html(), "<ol></ol>");
    }

    #[test]
    fn test_double_digit_numbering() {
        let definitions: Definitions = (1..=12).map(|i| format!("sense {i}")).collect();
        let text = definitions.to_text();

        assert_eq!(text.lines().count(), 12);
        assert_eq!(text.lines().last(), Some("12. sense 12"));
    }

    #[test]
    fn test_serialize_as_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"["first sense gloss","second sense","third <b>sense</b>"]"#
        );
    }
}
