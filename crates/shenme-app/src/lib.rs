pub mod cli;
pub mod lookup;
pub mod output;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use lookup::{Lookup, LookupError, LookupOutcome};
