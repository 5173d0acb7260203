use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "FTX";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://ftx.com/api",
    sandbox: None,
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::Candles,
    Capability::Funding,
];

pub struct Ftx {
    core: RestCore,
}

impl Ftx {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, false),
        }
    }
}

impl RestExchange for Ftx {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }
}
