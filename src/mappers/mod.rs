mod binance;
mod bitfinex;
mod bitmex;
mod coinbase;
mod deribit;
mod ftx;
mod gemini;
mod kraken;
mod poloniex;
mod symbol_mapper;

// Re-export the trait
pub use symbol_mapper::{SymbolMapper, parse_normalized};

// Re-export implementations
pub use binance::{BinanceDeliveryMapper, BinanceFuturesMapper};
pub use bitfinex::BitfinexMapper;
pub use bitmex::BitmexMapper;
pub use coinbase::CoinbaseMapper;
pub use deribit::DeribitMapper;
pub use ftx::FtxMapper;
pub use gemini::GeminiMapper;
pub use kraken::{KrakenMapper, KrakenRestMapper};
pub use poloniex::PoloniexMapper;

/// Mapper for a pair-mapping key, or `None` when nothing is registered under
/// it. Keys are exchange ids, optionally suffixed with `REST` for exchanges
/// whose REST API uses its own symbol namespace.
pub fn get_mapper(key: &str) -> Option<Box<dyn SymbolMapper>> {
    match key {
        "BITMEX" => Some(Box::new(BitmexMapper)),
        "BITFINEX" => Some(Box::new(BitfinexMapper)),
        "COINBASE" => Some(Box::new(CoinbaseMapper)),
        "POLONIEX" => Some(Box::new(PoloniexMapper)),
        "GEMINI" => Some(Box::new(GeminiMapper)),
        "KRAKEN" => Some(Box::new(KrakenMapper)),
        "KRAKENREST" => Some(Box::new(KrakenRestMapper)),
        "DERIBIT" => Some(Box::new(DeribitMapper)),
        "BINANCE_FUTURES" => Some(Box::new(BinanceFuturesMapper)),
        "BINANCE_DELIVERY" => Some(Box::new(BinanceDeliveryMapper)),
        "FTX" => Some(Box::new(FtxMapper)),
        _ => None,
    }
}
