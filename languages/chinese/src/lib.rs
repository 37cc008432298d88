pub mod phonetic;
pub mod processor;
pub mod script;

pub use phonetic::PinyinAnnotator;
pub use processor::ChineseProcessor;
pub use script::TraditionalConverter;
