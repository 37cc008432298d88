use shenme_core::{LanguageProcessor, PhoneticAnnotator, ScriptConverter};

use crate::phonetic::PinyinAnnotator;
use crate::script::TraditionalConverter;

/// Chinese language processor
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseProcessor {
    converter: TraditionalConverter,
    annotator: PinyinAnnotator,
}

impl ChineseProcessor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScriptConverter for ChineseProcessor {
    fn to_traditional(&self, text: &str) -> String {
        self.converter.to_traditional(text)
    }
}

impl PhoneticAnnotator for ChineseProcessor {
    fn glosses_for(&self, ch: char) -> Vec<String> {
        self.annotator.glosses_for(ch)
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn section_name(&self) -> &str {
        "Chinese"
    }
}
