/// Source of the OMDb API key.
///
/// Providers ask for the key on every search, so implementations decide
/// whether that means a fresh lookup or a value fixed at startup.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialProvider: Send + Sync {
    /// Returns the API key, or `None` when no usable key is configured
    fn api_key(&self) -> Option<String>;
}

/// Default environment variable holding the OMDb key
pub const DEFAULT_API_KEY_VAR: &str = "OMDB_API_KEY";

/// Reads the key from an environment variable on each call
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Key injected once at construction, usually from [`crate::config::Config`]
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    api_key: Option<String>,
}

impl StaticCredentials {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }
}
