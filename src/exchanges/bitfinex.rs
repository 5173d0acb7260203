use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "BITFINEX";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://api-pub.bitfinex.com/v2",
    sandbox: None,
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::Candles,
    Capability::Funding,
];

pub struct Bitfinex {
    core: RestCore,
}

impl Bitfinex {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, false),
        }
    }
}

impl RestExchange for Bitfinex {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }
}
