use url::form_urlencoded;

/// Host serving the English Wiktionary.
pub const DEFAULT_HOST: &str = "en.wiktionary.org";

/// Builds raw-source addresses of Wiktionary articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBuilder {
    host: String,
}

impl AddressBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Address of the raw wikitext for `word`, e.g.
    /// `https://en.wiktionary.org/wiki/%E4%B8%AD%E5%9C%8B?action=raw`.
    ///
    /// The word is escaped as a query component, so `/`, spaces and every non-ASCII byte are
    /// encoded.
    pub fn build(&self, word: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(word.as_bytes()).collect();
        tracing::debug!(%encoded, "url-encoded word");

        let address = format!("https://{}/wiki/{encoded}?action=raw", self.host);
        tracing::debug!(%address, "wiki address");

        address
    }
}

impl Default for AddressBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}
