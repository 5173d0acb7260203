use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{MappingError, RestError};
use crate::symbol_registry::{PairMapping, SymbolMappingLoader};

/// Suffix of the key used for exchanges whose REST API has its own symbol
/// namespace.
pub const REST_KEY_SUFFIX: &str = "REST";

#[derive(Debug, Default)]
enum MappingState {
    #[default]
    Unmapped,
    Mapped {
        key: String,
        table: Arc<PairMapping>,
    },
}

/// One-time pair-mapping load for a single client.
///
/// The state check, the load and the transition all happen under one lock,
/// so concurrent first access still loads exactly once.
#[derive(Debug, Default)]
pub struct MappingGate {
    state: Mutex<MappingState>,
}

impl MappingGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MappingState> {
        // State is only written after a successful load, so a poisoned lock
        // still holds a consistent value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_mapped(&self) -> bool {
        matches!(*self.lock(), MappingState::Mapped { .. })
    }

    pub fn mapping(&self) -> Option<Arc<PairMapping>> {
        match &*self.lock() {
            MappingState::Mapped { table, .. } => Some(Arc::clone(table)),
            MappingState::Unmapped => None,
        }
    }

    /// Key the mapping was loaded under, `id + "REST"` or the bare id.
    pub fn key(&self) -> Option<String> {
        match &*self.lock() {
            MappingState::Mapped { key, .. } => Some(key.clone()),
            MappingState::Unmapped => None,
        }
    }

    /// Loads the mapping for `id` unless already loaded.
    ///
    /// Tries `id + "REST"` first and falls back to `id` only when the first
    /// key is missing. Any other failure, or a failed fallback, is returned
    /// and leaves the gate unmapped.
    pub fn ensure_mapped(
        &self,
        id: &str,
        loader: &dyn SymbolMappingLoader,
    ) -> Result<Arc<PairMapping>, RestError> {
        let mut state = self.lock();
        if let MappingState::Mapped { table, .. } = &*state {
            return Ok(Arc::clone(table));
        }

        let rest_key = format!("{}{}", id, REST_KEY_SUFFIX);
        let (key, table) = match loader.load(&rest_key) {
            Ok(table) => (rest_key, table),
            Err(MappingError::MissingKey(_)) => {
                debug!("No {} mapping, falling back to {}", rest_key, id);
                let table = loader.load(id).map_err(|source| RestError::MappingLoad {
                    id: id.to_string(),
                    source,
                })?;
                (id.to_string(), table)
            }
            Err(source) => {
                return Err(RestError::MappingLoad {
                    id: id.to_string(),
                    source,
                });
            }
        };

        debug!("{} mapped via {} ({} pairs)", id, key, table.len());
        *state = MappingState::Mapped {
            key,
            table: Arc::clone(&table),
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Records every key it is asked for and knows only `known` keys.
    struct RecordingLoader {
        known: HashSet<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingLoader {
        fn new(known: &[&'static str]) -> Self {
            Self {
                known: known.iter().copied().collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SymbolMappingLoader for RecordingLoader {
        fn load(&self, key: &str) -> Result<Arc<PairMapping>, MappingError> {
            self.calls.lock().unwrap().push(key.to_string());
            if self.known.contains(key) {
                let mut table = PairMapping::new();
                table.insert("SPOT-BTC-USD".to_string(), format!("{}-BTCUSD", key));
                Ok(Arc::new(table))
            } else {
                Err(MappingError::MissingKey(key.to_string()))
            }
        }
    }

    struct BrokenLoader;

    impl SymbolMappingLoader for BrokenLoader {
        fn load(&self, key: &str) -> Result<Arc<PairMapping>, MappingError> {
            Err(MappingError::Source {
                key: key.to_string(),
                reason: "unreachable".to_string(),
            })
        }
    }

    #[test]
    fn test_rest_key_wins_without_fallback() {
        let loader = RecordingLoader::new(&["XREST", "X"]);
        let gate = MappingGate::new();
        gate.ensure_mapped("X", &loader).unwrap();
        assert_eq!(loader.calls(), vec!["XREST"]);
        assert_eq!(gate.key().as_deref(), Some("XREST"));
    }

    #[test]
    fn test_falls_back_to_bare_id() {
        let loader = RecordingLoader::new(&["X"]);
        let gate = MappingGate::new();
        let table = gate.ensure_mapped("X", &loader).unwrap();
        assert_eq!(loader.calls(), vec!["XREST", "X"]);
        assert_eq!(gate.key().as_deref(), Some("X"));
        assert_eq!(table.native("SPOT-BTC-USD"), Some("X-BTCUSD"));
    }

    #[test]
    fn test_second_call_does_not_reload() {
        let loader = RecordingLoader::new(&["X"]);
        let gate = MappingGate::new();
        let first = gate.ensure_mapped("X", &loader).unwrap();
        let second = gate.ensure_mapped("X", &loader).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(gate.is_mapped());
        assert_eq!(loader.calls(), vec!["XREST", "X"]);
    }

    #[test]
    fn test_exhausted_fallback_propagates_and_stays_unmapped() {
        let loader = RecordingLoader::new(&[]);
        let gate = MappingGate::new();
        let err = gate.ensure_mapped("X", &loader).unwrap_err();
        match err {
            RestError::MappingLoad { id, source } => {
                assert_eq!(id, "X");
                assert_eq!(source, MappingError::MissingKey("X".to_string()));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!gate.is_mapped());
        assert!(gate.mapping().is_none());

        // A failed load is retried on the next access
        gate.ensure_mapped("X", &loader).unwrap_err();
        assert_eq!(loader.calls(), vec!["XREST", "X", "XREST", "X"]);
    }

    #[test]
    fn test_non_missing_failure_skips_fallback() {
        let gate = MappingGate::new();
        let err = gate.ensure_mapped("X", &BrokenLoader).unwrap_err();
        assert!(matches!(
            err,
            RestError::MappingLoad {
                source: MappingError::Source { ref key, .. },
                ..
            } if key == "XREST"
        ));
        assert!(!gate.is_mapped());
    }

    #[test]
    fn test_empty_table_counts_as_mapped() {
        struct EmptyLoader;
        impl SymbolMappingLoader for EmptyLoader {
            fn load(&self, _key: &str) -> Result<Arc<PairMapping>, MappingError> {
                Ok(Arc::new(PairMapping::new()))
            }
        }

        let gate = MappingGate::new();
        let table = gate.ensure_mapped("X", &EmptyLoader).unwrap();
        assert!(table.is_empty());
        assert_eq!(gate.key().as_deref(), Some("XREST"));
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let loader = Arc::new(RecordingLoader::new(&["XREST"]));
        let gate = Arc::new(MappingGate::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let loader = Arc::clone(&loader);
                let gate = Arc::clone(&gate);
                std::thread::spawn(move || {
                    gate.ensure_mapped("X", loader.as_ref()).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(loader.calls(), vec!["XREST"]);
    }
}
