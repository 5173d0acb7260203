use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const FUTURES_ID: &str = "BINANCE_FUTURES";
pub const DELIVERY_ID: &str = "BINANCE_DELIVERY";

// USD-margined ("fapi") and coin-margined ("dapi") futures are separate APIs
const FUTURES_ENDPOINTS: Endpoints = Endpoints {
    live: "https://fapi.binance.com/fapi/v1",
    sandbox: None,
};

const DELIVERY_ENDPOINTS: Endpoints = Endpoints {
    live: "https://dapi.binance.com/dapi/v1",
    sandbox: None,
};

pub const FUTURES_CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::Candles,
    Capability::Funding,
];

pub const DELIVERY_CAPABILITIES: &[Capability] = FUTURES_CAPABILITIES;

pub struct BinanceFutures {
    core: RestCore,
}

impl BinanceFutures {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(FUTURES_ID, config, FUTURES_ENDPOINTS, false),
        }
    }
}

impl RestExchange for BinanceFutures {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        FUTURES_CAPABILITIES
    }
}

pub struct BinanceDelivery {
    core: RestCore,
}

impl BinanceDelivery {
    pub fn new(config: &Config) -> Self {
        Self {
            core: RestCore::new(DELIVERY_ID, config, DELIVERY_ENDPOINTS, false),
        }
    }
}

impl RestExchange for BinanceDelivery {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        DELIVERY_CAPABILITIES
    }
}
