use crate::codec::{Codec, RleCodec};
use crate::error::{Result, RlecError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Name of the algorithm used when none is given
pub const DEFAULT_ALGORITHM: &str = "rle";

/// Maps algorithm names to shared codec instances.
///
/// New algorithms are added with [`CodecRegistry::register`]; the dispatcher
/// only ever sees the resolved `Arc<dyn Codec>`.
#[derive(Clone)]
pub struct CodecRegistry {
    codecs: BTreeMap<&'static str, Arc<dyn Codec>>,
}

impl CodecRegistry {
    pub fn empty() -> Self {
        Self { codecs: BTreeMap::new() }
    }

    /// Registry with every built-in codec
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(RleCodec::new()));
        registry
    }

    /// Adds `codec` under its own name, replacing any previous entry.
    pub fn register(&mut self, codec: Arc<dyn Codec>) {
        self.codecs.insert(codec.name(), codec);
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Result<Arc<dyn Codec>> {
        let key = name.trim().to_lowercase();
        self.codecs
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| RlecError::UnsupportedAlgorithm(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codecs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Codec for Identity {
        fn name(&self) -> &'static str {
            "identity"
        }
        fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
            Ok(data.to_vec())
        }
        fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
            Ok(data.to_vec())
        }
    }

    #[test]
    fn builtin_has_rle() {
        let registry = CodecRegistry::builtin();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["rle"]);
        assert_eq!(registry.get("rle").unwrap().name(), "rle");
        assert_eq!(registry.get(" RLE ").unwrap().name(), "rle");
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let registry = CodecRegistry::builtin();
        match registry.get("lzw") {
            Err(RlecError::UnsupportedAlgorithm(name)) => assert_eq!(name, "lzw"),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("lzw should not be registered"),
        }
        assert!(!registry.contains(""));
    }

    #[test]
    fn registering_extends_lookup() {
        let mut registry = CodecRegistry::builtin();
        registry.register(Arc::new(Identity));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("identity"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["identity", "rle"]);
    }

    #[test]
    fn empty_registry_rejects_default() {
        let registry = CodecRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get(DEFAULT_ALGORITHM).is_err());
    }
}
