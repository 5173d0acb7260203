use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

#[derive(Clone)]
pub struct GeminiMapper;

impl SymbolMapper for GeminiMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        require_quote(self.exchange(), &quote, &["USD", "BTC", "ETH"])?;
        match itype {
            InstrumentType::Spot => Ok(format!("{}{}", base, quote).to_lowercase()),
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Spot]
    }
    fn exchange(&self) -> &str {
        "gemini"
    }
}
