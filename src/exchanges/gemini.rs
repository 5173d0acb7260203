use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "GEMINI";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://api.gemini.com",
    sandbox: Some("https://api.sandbox.gemini.com"),
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::PlaceOrder,
    Capability::CancelOrder,
    Capability::Balances,
    Capability::Sandbox,
];

pub struct Gemini {
    core: RestCore,
}

impl Gemini {
    pub fn new(config: &Config, sandbox: bool) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, sandbox),
        }
    }
}

impl RestExchange for Gemini {
    fn core(&self) -> &RestCore {
        &self.core
    }

    fn capabilities(&self) -> &'static [Capability] {
        CAPABILITIES
    }
}
