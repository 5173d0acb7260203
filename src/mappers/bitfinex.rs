use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

fn bitfinex_asset(asset: &str) -> &str {
    match asset {
        "USDT" => "UST",
        "USDC" => "UDC",
        other => other,
    }
}

#[derive(Clone)]
pub struct BitfinexMapper;

impl SymbolMapper for BitfinexMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        let base = bitfinex_asset(&base).to_uppercase();
        match itype {
            InstrumentType::Spot => {
                require_quote(self.exchange(), &quote, &["USD", "USDT", "EUR", "BTC"])?;
                let quote = bitfinex_asset(&quote);
                // Long tickers need a separator: tAVAX:USD
                if base.len() > 3 {
                    Ok(format!("t{}:{}", base, quote))
                } else {
                    Ok(format!("t{}{}", base, quote))
                }
            }
            InstrumentType::Perp => {
                require_quote(self.exchange(), &quote, &["USDT"])?;
                Ok(format!("t{}F0:USTF0", base))
            }
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Spot, InstrumentType::Perp]
    }
    fn exchange(&self) -> &str {
        "bitfinex"
    }
}
