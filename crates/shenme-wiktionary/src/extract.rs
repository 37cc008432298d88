//! Definition extraction from raw wikitext.
//!
//! A Wiktionary article is a sequence of language sections, each opened by a level-2 heading
//! such as `==Chinese==`. Sense definitions are the lines starting with `# `. Only the first
//! section for the target language is read; the scan stops at the next level-2 heading.

use shenme_core::Definitions;

/// Section extracted by [`DefinitionExtractor::default`].
pub const DEFAULT_SECTION: &str = "Chinese";

const HEADER_DELIMITER: &str = "==";
const DEFINITION_MARKER: &str = "# ";
const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";

/// Extracts the sense definitions of one language section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionExtractor {
    /// The exact heading line that opens the section, e.g. `==Chinese==`
    header: String,
}

impl DefinitionExtractor {
    /// Extractor for the section headed `==<name>==`.
    ///
    /// The heading is matched literally and case-sensitively.
    pub fn for_section(name: &str) -> Self {
        Self {
            header: format!("{HEADER_DELIMITER}{name}{HEADER_DELIMITER}"),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Scan `text` and return the cleaned definitions of the target section, in order.
    ///
    /// Never fails: a missing or empty section gives an empty list.
    pub fn extract(&self, text: &str) -> Definitions {
        let lines: Vec<&str> = text.split('\n').collect();
        tracing::debug!(lines = lines.len(), header = %self.header, "processing raw wiki text");

        let mut definitions = Vec::new();
        let mut reading = false;

        for line in lines {
            if line == self.header {
                reading = true;
                continue;
            }

            if !reading {
                continue;
            }

            // The section is never reopened further down the article
            if is_section_header(line) {
                break;
            }

            if let Some(definition) = line.strip_prefix(DEFINITION_MARKER) {
                definitions.push(clean_definition(definition));
            }
        }

        tracing::debug!(definitions = definitions.len(), "returning definitions");
        Definitions::from(definitions)
    }
}

impl Default for DefinitionExtractor {
    fn default() -> Self {
        Self::for_section(DEFAULT_SECTION)
    }
}

/// Extract the Chinese definitions from raw wikitext.
pub fn extract_definitions(text: &str) -> Definitions {
    DefinitionExtractor::default().extract(text)
}

/// A level-2 heading: `==Title==` where the title is non-empty and does not start or end
/// with `=`. Deeper headings (`===Etymology===`) and bare runs of `=` do not qualify.
fn is_section_header(line: &str) -> bool {
    line.strip_prefix(HEADER_DELIMITER)
        .and_then(|rest| rest.strip_suffix(HEADER_DELIMITER))
        .is_some_and(|title| !title.is_empty() && !title.starts_with('=') && !title.ends_with('='))
}

fn clean_definition(definition: &str) -> String {
    let mut cleaned = strip_link_brackets(definition);

    // Removing a delimiter can join the characters around it into a new one
    loop {
        let next = strip_link_brackets(&cleaned);
        if next.len() == cleaned.len() {
            break;
        }
        cleaned = next;
    }

    cleaned.trim_start_matches(DEFINITION_MARKER).to_string()
}

/// Remove every `[[` and `]]`, left to right, without regard to nesting or balance.
fn strip_link_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if rest.starts_with(LINK_OPEN) || rest.starts_with(LINK_CLOSE) {
            rest = &rest[2..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}
