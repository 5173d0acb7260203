use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

/// USD-margined futures: `BTCUSDT`.
#[derive(Clone)]
pub struct BinanceFuturesMapper;

impl SymbolMapper for BinanceFuturesMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        match itype {
            InstrumentType::Perp => {
                require_quote(self.exchange(), &quote, &["USDT", "USDC"])?;
                Ok(format!("{}{}", base, quote).to_uppercase())
            }
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Perp]
    }
    fn exchange(&self) -> &str {
        "binance_futures"
    }
}

/// Coin-margined delivery: `BTCUSD_PERP`.
#[derive(Clone)]
pub struct BinanceDeliveryMapper;

impl SymbolMapper for BinanceDeliveryMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        match itype {
            InstrumentType::Perp => {
                require_quote(self.exchange(), &quote, &["USD"])?;
                Ok(format!("{}{}_PERP", base, quote).to_uppercase())
            }
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Perp]
    }
    fn exchange(&self) -> &str {
        "binance_delivery"
    }
}
