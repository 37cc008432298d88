pub mod dictionary;
pub mod language;
pub mod preprocess;

pub use dictionary::Definitions;
pub use language::{LanguageProcessor, PhoneticAnnotator, ScriptConverter};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
