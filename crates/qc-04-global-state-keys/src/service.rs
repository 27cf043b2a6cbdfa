//! Stateless [`StateKeyApi`] implementation.

use crate::domain::{resolve_key, GlobalStateKey, KeyError};
use crate::ports::StateKeyApi;

#[derive(Debug, Clone, Copy, Default)]
pub struct StateKeyResolver;

impl StateKeyResolver {
    pub fn new() -> Self {
        Self
    }
}

impl StateKeyApi for StateKeyResolver {
    fn resolve_key(&self, key_type: &str, hex_value: &str) -> Result<GlobalStateKey, KeyError> {
        let result = resolve_key(key_type, hex_value);

        #[cfg(feature = "tracing-log")]
        match &result {
            Ok(key) => tracing::debug!("[qc-04] Resolved {} key {}", key_type, key),
            Err(e) => tracing::debug!("[qc-04] Rejected {} key: {}", key_type, e),
        }

        result
    }
}
