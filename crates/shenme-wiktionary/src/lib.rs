pub mod address;
pub mod extract;
pub mod fetch;

pub use address::{AddressBuilder, DEFAULT_HOST};
pub use extract::{DefinitionExtractor, extract_definitions};
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
