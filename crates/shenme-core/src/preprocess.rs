use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default word preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), folds full-width forms
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_strips_newlines() {
        assert_eq!(DefaultPreprocessor.process("  中\r\n国 "), "中国");
    }

    #[test]
    fn test_full_width_folded() {
        assert_eq!(DefaultPreprocessor.process("ＡＢＣ"), "ABC");
    }

    #[test]
    fn test_blank() {
        assert_eq!(DefaultPreprocessor.process(" \n "), "");
    }
}
