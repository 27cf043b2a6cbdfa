use crate::domain::{GlobalStateKey, KeyError};

/// Primary API for global state key resolution
pub trait StateKeyApi: Send + Sync {
    /// Resolve a `(type, hex)` pair into a canonical key.
    fn resolve_key(&self, key_type: &str, hex_value: &str) -> Result<GlobalStateKey, KeyError>;

    /// Resolve a batch, failing on the first invalid pair.
    fn resolve_keys(&self, pairs: &[(&str, &str)]) -> Result<Vec<GlobalStateKey>, KeyError> {
        pairs
            .iter()
            .map(|(key_type, hex_value)| self.resolve_key(key_type, hex_value))
            .collect()
    }
}
