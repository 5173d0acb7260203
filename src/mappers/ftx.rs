use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

#[derive(Clone)]
pub struct FtxMapper;

impl SymbolMapper for FtxMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        match itype {
            InstrumentType::Spot => {
                require_quote(self.exchange(), &quote, &["USD", "USDT"])?;
                Ok(format!("{}/{}", base, quote).to_uppercase())
            }
            InstrumentType::Perp => {
                require_quote(self.exchange(), &quote, &["USD"])?;
                Ok(format!("{}-PERP", base).to_uppercase())
            }
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Spot, InstrumentType::Perp]
    }
    fn exchange(&self) -> &str {
        "ftx"
    }
}
