use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "DERIBIT";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://www.deribit.com/api/v2",
    sandbox: None,
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
];

/// Deribit, inverse BTC and ETH perpetuals.
pub struct Deribit {
    core: RestCore,
}

impl Deribit {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, false),
        }
    }
}

impl RestExchange for Deribit {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }
}
