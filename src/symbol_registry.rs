use log::{debug, warn};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::MappingError;
use crate::instrument::canonical;
use crate::mappers::get_mapper;

const DEFAULT_BASE_ASSETS: &[&str] = &["BTC", "ETH", "SOL", "LTC", "XRP", "AVAX", "DOGE"];
const DEFAULT_QUOTE_ASSETS: &[&str] = &["USD", "USDT", "USDC", "EUR", "BTC"];

/// Assets the pair tables are generated for.
#[derive(Debug, Clone, Deserialize)]
pub struct Universe {
    pub base_assets: Vec<String>,
    #[serde(default = "default_quotes")]
    pub quote_assets: Vec<String>,
}

fn default_quotes() -> Vec<String> {
    DEFAULT_QUOTE_ASSETS.iter().map(|q| q.to_string()).collect()
}

impl Default for Universe {
    fn default() -> Self {
        Self {
            base_assets: DEFAULT_BASE_ASSETS.iter().map(|b| b.to_string()).collect(),
            quote_assets: default_quotes(),
        }
    }
}

impl Universe {
    pub fn from_config(path: &str) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse YAML: {}", e))
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.base_assets.iter().flat_map(move |base| {
            self.quote_assets
                .iter()
                .filter(move |quote| *quote != base)
                .map(move |quote| (base.as_str(), quote.as_str()))
        })
    }
}

/// Bidirectional table between canonical pairs and one namespace's native pairs.
#[derive(Debug, Default)]
pub struct PairMapping {
    to_native: FxHashMap<String, String>,
    to_canonical: FxHashMap<String, String>,
}

impl PairMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, canonical: String, native: String) {
        self.to_canonical.insert(native.clone(), canonical.clone());
        self.to_native.insert(canonical, native);
    }

    pub fn native(&self, canonical: &str) -> Option<&str> {
        self.to_native.get(canonical).map(String::as_str)
    }

    pub fn canonical(&self, native: &str) -> Option<&str> {
        self.to_canonical.get(native).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.to_native.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_native.is_empty()
    }

    /// `(canonical, native)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.to_native.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

/// Loads the pair mapping registered under a key.
///
/// `MappingError::MissingKey` must mean "nothing is registered under this
/// key"; callers rely on it to fall back to another key.
pub trait SymbolMappingLoader: Send + Sync {
    fn load(&self, key: &str) -> Result<Arc<PairMapping>, MappingError>;
}

/// Process-wide cache of pair mappings. Each key is populated on first load
/// and never invalidated.
pub struct PairMappingTable {
    universe: Universe,
    tables: RwLock<FxHashMap<String, Arc<PairMapping>>>,
}

impl PairMappingTable {
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            tables: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<PairMapping>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = tables.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn load(&self, key: &str) -> Result<Arc<PairMapping>, MappingError> {
        if let Some(table) = self.get(key) {
            return Ok(table);
        }

        let mapper = get_mapper(key).ok_or_else(|| MappingError::MissingKey(key.to_string()))?;
        let mut mapping = PairMapping::new();

        for &itype in mapper.instrument_types() {
            for (base, quote) in self.universe.pairs() {
                let normalized = canonical(base, quote, itype);
                match mapper.denormalize(&normalized, itype) {
                    Ok(native) => mapping.insert(normalized, native),
                    Err(e) => debug!("{} skips {}: {}", key, normalized, e),
                }
            }
        }

        debug!("Loaded {} pairs for {}", mapping.len(), key);

        // Another caller may have raced us here; keep whichever landed first.
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let table = tables
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(mapping));
        Ok(Arc::clone(table))
    }
}

impl SymbolMappingLoader for PairMappingTable {
    fn load(&self, key: &str) -> Result<Arc<PairMapping>, MappingError> {
        PairMappingTable::load(self, key)
    }
}

// Static table - loads on first access
pub static PAIR_MAPPINGS: Lazy<Arc<PairMappingTable>> = Lazy::new(|| {
    let universe = match std::env::var("SYMBOL_CONFIG") {
        Ok(path) => Universe::from_config(&path).unwrap_or_else(|e| {
            warn!("Falling back to the default universe, {}: {}", path, e);
            Universe::default()
        }),
        Err(_) => Universe::default(),
    };
    Arc::new(PairMappingTable::new(universe))
});

/// Loads `key` into the process-wide table.
pub fn load_exchange_pair_mapping(key: &str) -> Result<Arc<PairMapping>, MappingError> {
    PAIR_MAPPINGS.load(key)
}
