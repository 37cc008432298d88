use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "en.wiktionary.org".to_string()
}

fn default_user_agent() -> String {
    format!("shenme/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WiktionaryConfig {
    /// Host serving the raw article source
    #[serde(default = "default_host")]
    pub host: String,
    /// Sent with every request, Wikimedia rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for WiktionaryConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user_agent: default_user_agent(),
        }
    }
}
