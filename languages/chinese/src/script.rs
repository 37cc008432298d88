use shenme_core::ScriptConverter;
use zhconv::{Variant, zhconv};

/// Simplified to traditional conversion backed by MediaWiki's conversion tables
#[derive(Debug, Clone, Copy, Default)]
pub struct TraditionalConverter;

impl ScriptConverter for TraditionalConverter {
    fn to_traditional(&self, text: &str) -> String {
        let traditional = zhconv(text, Variant::ZhHant);
        tracing::debug!("{text} maps to Traditional Chinese {traditional}");
        traditional
    }
}
