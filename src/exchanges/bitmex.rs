use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "BITMEX";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://www.bitmex.com/api/v1",
    sandbox: None,
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::Candles,
    Capability::Funding,
    Capability::PlaceOrder,
    Capability::CancelOrder,
    Capability::Balances,
];

/// BitMEX lists derivatives only, so its pair table holds perpetuals.
pub struct Bitmex {
    core: RestCore,
}

impl Bitmex {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, false),
        }
    }
}

impl RestExchange for Bitmex {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }
}
