use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "KRAKEN";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://api.kraken.com/0",
    sandbox: None,
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::Candles,
    Capability::PlaceOrder,
    Capability::CancelOrder,
    Capability::Balances,
];

/// Kraken's REST API names pairs without the slash its streaming API uses,
/// so this client maps through the `KRAKENREST` table.
pub struct Kraken {
    core: RestCore,
}

impl Kraken {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, false),
        }
    }
}

impl RestExchange for Kraken {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_registry::{PairMappingTable, Universe};

    #[test]
    fn test_maps_through_rest_namespace() {
        let table = PairMappingTable::new(Universe::default());
        let kraken = Kraken::new(&Config::default());
        kraken.ensure_mapped(&table).unwrap();

        assert_eq!(kraken.core().gate().key().as_deref(), Some("KRAKENREST"));
        assert_eq!(kraken.native_pair("SPOT-BTC-USD").unwrap(), "XBTUSD");
        assert_eq!(kraken.canonical_pair("ETHEUR").unwrap(), "SPOT-ETH-EUR");
        assert!(table.get("KRAKEN").is_none());
    }
}
