use shenme_core::{DefaultPreprocessor, Definitions, LanguageProcessor, Preprocessor};
use shenme_wiktionary::{AddressBuilder, DefinitionExtractor, PageFetcher};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Nothing to look up, the word is empty")]
    EmptyWord,
}

/// Everything shown for one looked-up word
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    /// The normalized input word
    pub word: String,
    pub traditional: String,
    /// Pronunciation of `word`
    pub gloss: String,
    pub address: String,
    pub definitions: Definitions,
}

/// Looks up words: script conversion, fetch, extraction
pub struct Lookup<F, L> {
    fetcher: F,
    language: L,
    addresses: AddressBuilder,
    extractor: DefinitionExtractor,
    /// Emit progress messages
    diagnostics: bool,
}

impl<F, L> Lookup<F, L>
where
    F: PageFetcher,
    L: LanguageProcessor,
{
    pub fn new(fetcher: F, language: L, addresses: AddressBuilder, diagnostics: bool) -> Self {
        let extractor = DefinitionExtractor::for_section(language.section_name());

        Self {
            fetcher,
            language,
            addresses,
            extractor,
            diagnostics,
        }
    }

    /// Look up `input` in either script variant.
    ///
    /// A failed fetch is not an error: it yields an outcome with no definitions.
    pub async fn lookup(&self, input: &str) -> Result<LookupOutcome, LookupError> {
        let word = DefaultPreprocessor.process(input);
        if word.is_empty() {
            return Err(LookupError::EmptyWord);
        }

        let gloss = self.language.annotate(&word);
        let traditional = self.language.to_traditional(&word);
        let address = self.addresses.build(&traditional);

        if self.diagnostics {
            tracing::info!(%word, %traditional, %gloss, %address, "obtaining definitions");
        }

        let definitions = self.fetch_definitions(&address).await;

        Ok(LookupOutcome {
            word,
            traditional,
            gloss,
            address,
            definitions,
        })
    }

    /// Definitions of a word already in traditional script
    pub async fn define(&self, traditional: &str) -> Definitions {
        let address = self.addresses.build(traditional);

        if self.diagnostics {
            tracing::info!(%traditional, %address, "obtaining definitions");
        }

        self.fetch_definitions(&address).await
    }

    async fn fetch_definitions(&self, address: &str) -> Definitions {
        match self.fetcher.fetch(address).await {
            Ok(text) => {
                let definitions = self.extractor.extract(&text);

                if self.diagnostics {
                    tracing::info!(count = definitions.len(), "extracted definitions");
                }

                definitions
            }
            Err(err) => {
                if self.diagnostics {
                    tracing::warn!(%address, "No definitions: {err}");
                }

                Definitions::new()
            }
        }
    }
}
