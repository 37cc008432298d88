use pinyin::ToPinyinMulti;
use shenme_core::PhoneticAnnotator;

/// Tone-marked pinyin readings, all heteronyms included
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinAnnotator;

impl PhoneticAnnotator for PinyinAnnotator {
    fn glosses_for(&self, ch: char) -> Vec<String> {
        match ch.to_pinyin_multi() {
            Some(readings) => readings
                .into_iter()
                .map(|reading| reading.with_tone().to_string())
                .collect(),
            // Not a Han character: it stands for itself
            None => vec![ch.to_string()],
        }
    }
}
