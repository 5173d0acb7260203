use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

#[derive(Clone)]
pub struct PoloniexMapper;

impl SymbolMapper for PoloniexMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        require_quote(self.exchange(), &quote, &["USDT", "USDC", "BTC"])?;
        match itype {
            // Quote first: USDT_BTC
            InstrumentType::Spot => Ok(format!("{}_{}", quote, base).to_uppercase()),
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Spot]
    }
    fn exchange(&self) -> &str {
        "poloniex"
    }
}
