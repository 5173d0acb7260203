use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

#[derive(Clone)]
pub struct BitmexMapper;

impl SymbolMapper for BitmexMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        match itype {
            InstrumentType::Perp => {
                require_quote(self.exchange(), &quote, &["USD", "USDT"])?;
                // BitMEX still lists bitcoin as XBT
                let base = if base == "BTC" { "XBT" } else { base.as_str() };
                Ok(format!("{}{}", base, quote).to_uppercase())
            }
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Perp]
    }
    fn exchange(&self) -> &str {
        "bitmex"
    }
}
