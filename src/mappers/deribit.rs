use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

#[derive(Clone)]
pub struct DeribitMapper;

impl SymbolMapper for DeribitMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        match itype {
            InstrumentType::Perp => {
                // Inverse perpetuals are only listed for the two majors
                require_quote(self.exchange(), &quote, &["USD"])?;
                if base != "BTC" && base != "ETH" {
                    anyhow::bail!("deribit has no {} perpetual", base);
                }
                Ok(format!("{}-PERPETUAL", base))
            }
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Perp]
    }
    fn exchange(&self) -> &str {
        "deribit"
    }
}
