/// Script variant conversion (simplified to traditional characters)
pub trait ScriptConverter: Send + Sync {
    /// Convert text to traditional script. Text already traditional is returned unchanged.
    fn to_traditional(&self, text: &str) -> String;
}

/// Per-character pronunciation lookup
pub trait PhoneticAnnotator: Send + Sync {
    /// All readings of one character, most common first
    fn glosses_for(&self, ch: char) -> Vec<String>;

    /// Gloss a whole word
    ///
    /// A single character renders as `(g1, g2)`, anything longer as one group per character
    /// inside brackets: `[(g1), (g2)]`.
    fn annotate(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();

        if let [ch] = chars.as_slice() {
            return group(&self.glosses_for(*ch));
        }

        let groups: Vec<String> = chars
            .iter()
            .map(|ch| group(&self.glosses_for(*ch)))
            .collect();

        format!("[{}]", groups.join(", "))
    }
}

fn group(glosses: &[String]) -> String {
    format!("({})", glosses.join(", "))
}

/// Language support needed for a lookup
pub trait LanguageProcessor: ScriptConverter + PhoneticAnnotator {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Heading of the language's section in a dictionary article, e.g. "Chinese"
    fn section_name(&self) -> &str;
}
