use crate::app_config::Config;
use crate::exchanges::{Capability, Endpoints, RestCore, RestExchange};

pub const ID: &str = "COINBASE";

const ENDPOINTS: Endpoints = Endpoints {
    live: "https://api.pro.coinbase.com",
    sandbox: Some("https://api-public.sandbox.pro.coinbase.com"),
};

pub const CAPABILITIES: &[Capability] = &[
    Capability::Trades,
    Capability::Ticker,
    Capability::OrderBook,
    Capability::Candles,
    Capability::PlaceOrder,
    Capability::CancelOrder,
    Capability::Balances,
    Capability::Sandbox,
];

pub struct Coinbase {
    core: RestCore,
}

impl Coinbase {
    pub fn new(config: &Config, sandbox: bool) -> Self {
        Self {
            core: RestCore::new(ID, config, ENDPOINTS, sandbox),
        }
    }
}

impl RestExchange for Coinbase {
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

    #[test]
    fn test_sandbox_switches_endpoint() {
        let live = Coinbase::new(&Config::default(), false);
        assert!(!live.is_sandbox());
        assert_eq!(live.base_url(), "https://api.pro.coinbase.com");

        let sandbox = Coinbase::new(&Config::default(), true);
        assert!(sandbox.is_sandbox());
        assert_eq!(sandbox.base_url(), "https://api-public.sandbox.pro.coinbase.com");
    }
}
