pub mod binance;
pub mod bitfinex;
pub mod bitmex;
pub mod coinbase;
pub mod deribit;
pub mod ftx;
pub mod gemini;
pub mod kraken;
pub mod poloniex;

use std::sync::Arc;

use crate::app_config::{Config, Credentials};
use crate::error::RestError;
use crate::mapping_gate::MappingGate;
use crate::symbol_registry::{PairMapping, SymbolMappingLoader};

pub use binance::{BinanceDelivery, BinanceFutures};
pub use bitfinex::Bitfinex;
pub use bitmex::Bitmex;
pub use coinbase::Coinbase;
pub use deribit::Deribit;
pub use ftx::Ftx;
pub use gemini::Gemini;
pub use kraken::Kraken;
pub use poloniex::Poloniex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Trades,
    Ticker,
    OrderBook,
    Candles,
    Funding,
    PlaceOrder,
    CancelOrder,
    Balances,
    /// The exchange runs a sandbox/testnet that clients can be pointed at.
    Sandbox,
}

/// REST roots for an exchange.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints {
    pub live: &'static str,
    pub sandbox: Option<&'static str>,
}

/// State every client carries: identity, endpoint, credentials and the
/// pair-mapping gate.
#[derive(Debug)]
pub struct RestCore {
    id: &'static str,
    base_url: &'static str,
    sandbox: bool,
    credentials: Option<Credentials>,
    gate: MappingGate,
}

impl RestCore {
    /// `sandbox` is ignored when the exchange has no sandbox endpoint.
    pub fn new(id: &'static str, config: &Config, endpoints: Endpoints, sandbox: bool) -> Self {
        let (base_url, sandbox) = match (sandbox, endpoints.sandbox) {
            (true, Some(url)) => (url, true),
            _ => (endpoints.live, false),
        };
        Self {
            id,
            base_url,
            sandbox,
            credentials: config.credentials(id),
            gate: MappingGate::new(),
        }
    }

    pub fn gate(&self) -> &MappingGate {
        &self.gate
    }
}

/// A REST client for one exchange.
pub trait RestExchange: Send + Sync {
    fn core(&self) -> &RestCore;

    fn capabilities(&self) -> &'static [Capability];

    fn id(&self) -> &'static str {
        self.core().id
    }

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    fn is_sandbox(&self) -> bool {
        self.core().sandbox
    }

    fn base_url(&self) -> &str {
        self.core().base_url
    }

    fn credentials(&self) -> Option<&Credentials> {
        self.core().credentials.as_ref()
    }

    fn has_credentials(&self) -> bool {
        self.credentials().is_some_and(Credentials::is_complete)
    }

    fn is_mapped(&self) -> bool {
        self.core().gate.is_mapped()
    }

    /// Runs the one-time pair-mapping load for this client.
    fn ensure_mapped(&self, loader: &dyn SymbolMappingLoader) -> Result<Arc<PairMapping>, RestError> {
        self.core().gate.ensure_mapped(self.id(), loader)
    }

    /// Exchange-native name of a canonical pair such as `SPOT-BTC-USD`.
    fn native_pair(&self, canonical: &str) -> Result<String, RestError> {
        let table = self.mapping()?;
        table
            .native(canonical)
            .map(str::to_string)
            .ok_or_else(|| RestError::UnknownPair {
                exchange: self.id().to_string(),
                pair: canonical.to_string(),
            })
    }

    fn canonical_pair(&self, native: &str) -> Result<String, RestError> {
        let table = self.mapping()?;
        table
            .canonical(native)
            .map(str::to_string)
            .ok_or_else(|| RestError::UnknownPair {
                exchange: self.id().to_string(),
                pair: native.to_string(),
            })
    }

    fn mapping(&self) -> Result<Arc<PairMapping>, RestError> {
        self.core()
            .gate
            .mapping()
            .ok_or_else(|| RestError::Unmapped(self.id().to_string()))
    }
}

/// Builds a client from the shared config and the (already filtered) sandbox flag.
pub type Constructor = fn(&Config, bool) -> Arc<dyn RestExchange>;

/// One supported exchange: its registry name, its capabilities, and how to build it.
pub struct Listing {
    pub name: &'static str,
    pub capabilities: &'static [Capability],
    pub build: Constructor,
}

impl Listing {
    /// Builds the client, forwarding `sandbox` only if the exchange supports it.
    pub fn construct(&self, config: &Config, sandbox: bool) -> Arc<dyn RestExchange> {
        let sandbox = sandbox && self.capabilities.contains(&Capability::Sandbox);
        (self.build)(config, sandbox)
    }
}

/// Every supported exchange. Adding one is a single entry here.
pub static EXCHANGES: &[Listing] = &[
    Listing {
        name: "bitmex",
        capabilities: bitmex::CAPABILITIES,
        build: |cfg, _| Arc::new(Bitmex::new(cfg)),
    },
    Listing {
        name: "bitfinex",
        capabilities: bitfinex::CAPABILITIES,
        build: |cfg, _| Arc::new(Bitfinex::new(cfg)),
    },
    Listing {
        name: "coinbase",
        capabilities: coinbase::CAPABILITIES,
        build: |cfg, sandbox| Arc::new(Coinbase::new(cfg, sandbox)),
    },
    Listing {
        name: "poloniex",
        capabilities: poloniex::CAPABILITIES,
        build: |cfg, _| Arc::new(Poloniex::new(cfg)),
    },
    Listing {
        name: "gemini",
        capabilities: gemini::CAPABILITIES,
        build: |cfg, sandbox| Arc::new(Gemini::new(cfg, sandbox)),
    },
    Listing {
        name: "kraken",
        capabilities: kraken::CAPABILITIES,
        build: |cfg, _| Arc::new(Kraken::new(cfg)),
    },
    Listing {
        name: "deribit",
        capabilities: deribit::CAPABILITIES,
        build: |cfg, _| Arc::new(Deribit::new(cfg)),
    },
    Listing {
        name: "binance_futures",
        capabilities: binance::FUTURES_CAPABILITIES,
        build: |cfg, _| Arc::new(BinanceFutures::new(cfg)),
    },
    Listing {
        name: "binance_delivery",
        capabilities: binance::DELIVERY_CAPABILITIES,
        build: |cfg, _| Arc::new(BinanceDelivery::new(cfg)),
    },
    Listing {
        name: "ftx",
        capabilities: ftx::CAPABILITIES,
        build: |cfg, _| Arc::new(Ftx::new(cfg)),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_names_are_unique_and_lowercase() {
        let mut names: Vec<&str> = EXCHANGES.iter().map(|l| l.name).collect();
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
        names.sort();
        names.dedup();
        assert_eq!(names.len(), EXCHANGES.len());
    }

    #[test]
    fn test_listing_capabilities_match_clients() {
        let cfg = Config::default();
        for listing in EXCHANGES {
            let client = listing.construct(&cfg, false);
            assert_eq!(client.capabilities(), listing.capabilities, "{}", listing.name);
        }
    }

    #[test]
    fn test_exactly_two_sandboxes() {
        let with_sandbox: Vec<&str> = EXCHANGES
            .iter()
            .filter(|l| l.capabilities.contains(&Capability::Sandbox))
            .map(|l| l.name)
            .collect();
        assert_eq!(with_sandbox, vec!["coinbase", "gemini"]);
    }

    #[test]
    fn test_pairs_unavailable_before_mapping() {
        let client = Kraken::new(&Config::default());
        assert!(!client.is_mapped());
        assert!(matches!(
            client.native_pair("SPOT-BTC-USD"),
            Err(RestError::Unmapped(id)) if id == "KRAKEN"
        ));
    }
}
