//! The `Rest` facade: one lookup for every supported exchange's REST client.
//!
//! ```no_run
//! use crypto_rest::Rest;
//!
//! let rest = Rest::new(None, false)?;
//! let kraken = rest.get("Kraken")?;
//! println!("{}", kraken.native_pair("SPOT-BTC-USD")?);
//! # Ok::<(), crypto_rest::RestError>(())
//! ```

use log::info;
use rustc_hash::FxHashMap;
use std::ops::Index;
use std::sync::Arc;

use crate::app_config::{Config, load_config};
use crate::error::RestError;
use crate::exchanges::{EXCHANGES, RestExchange};
use crate::logging;
use crate::symbol_registry::{PAIR_MAPPINGS, SymbolMappingLoader};

/// Name the facade logs under.
pub const LOGGER_NAME: &str = "rest";

/// Holds one client per supported exchange, keyed by lowercase name.
///
/// The set of exchanges is fixed at construction. Every client handed out
/// has its pair mapping loaded.
pub struct Rest {
    config: Config,
    lookup: FxHashMap<String, Arc<dyn RestExchange>>,
    loader: Arc<dyn SymbolMappingLoader>,
}

impl Rest {
    /// Loads the config at `config_path` (or the default config), sets up the
    /// `rest` logger from its `restlog` section and builds every client.
    /// `sandbox` is applied to the exchanges that have a sandbox.
    pub fn new(config_path: Option<&str>, sandbox: bool) -> Result<Self, RestError> {
        let config = load_config(config_path)?;

        let (filename, level) = logging::resolve(config.restlog.as_ref())?;
        logging::get_logger(LOGGER_NAME, &filename, level)?;

        let loader: Arc<dyn SymbolMappingLoader> = PAIR_MAPPINGS.clone();
        Ok(Self::from_config(config, sandbox, loader))
    }

    /// Builds every client from an already-loaded config, mapping pairs
    /// through `loader`. Leaves logging untouched.
    pub fn from_config(config: Config, sandbox: bool, loader: Arc<dyn SymbolMappingLoader>) -> Self {
        let lookup: FxHashMap<String, Arc<dyn RestExchange>> = EXCHANGES
            .iter()
            .map(|listing| (listing.name.to_string(), listing.construct(&config, sandbox)))
            .collect();

        info!(
            "Built {} REST clients (sandbox requested: {})",
            lookup.len(),
            sandbox
        );

        Self {
            config,
            lookup,
            loader,
        }
    }

    fn resolve(&self, name: &str) -> Result<&Arc<dyn RestExchange>, RestError> {
        let client = self
            .lookup
            .get(&name.to_lowercase())
            .ok_or_else(|| RestError::UnknownExchange(name.to_string()))?;
        client.ensure_mapped(self.loader.as_ref())?;
        Ok(client)
    }

    /// Case-insensitive lookup. The client's pair mapping is loaded before
    /// this returns.
    pub fn get(&self, name: &str) -> Result<&dyn RestExchange, RestError> {
        self.resolve(name).map(|client| &**client)
    }

    /// Like [`Rest::get`], but hands out an owned handle.
    pub fn shared(&self, name: &str) -> Result<Arc<dyn RestExchange>, RestError> {
        self.resolve(name).map(Arc::clone)
    }

    /// Whether `name` is a supported exchange. Does not load any mapping.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(&name.to_lowercase())
    }

    /// Registry names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lookup.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// `rest["kraken"]`. Panics where [`Rest::get`] would return an error.
impl Index<&str> for Rest {
    type Output = dyn RestExchange;

    fn index(&self, name: &str) -> &Self::Output {
        match self.resolve(name) {
            Ok(client) => &**client,
            Err(e) => panic!("{}", e),
        }
    }
}
