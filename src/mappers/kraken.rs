use crate::instrument::InstrumentType;
use crate::mappers::symbol_mapper::{SymbolMapper, parse_normalized, require_quote};
use anyhow::Result;

const QUOTES: &[&str] = &["USD", "USDT", "USDC", "EUR"];

fn kraken_asset(asset: &str) -> String {
    match asset {
        "BTC" => "XBT".to_string(),
        "DOGE" => "XDG".to_string(),
        other => other.to_string(),
    }
}

/// Streaming namespace: `XBT/USD`.
#[derive(Clone)]
pub struct KrakenMapper;

impl SymbolMapper for KrakenMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        let (base, quote) = parse_normalized(normalized)?;
        require_quote(self.exchange(), &quote, QUOTES)?;
        match itype {
            InstrumentType::Spot => Ok(format!("{}/{}", kraken_asset(&base), quote).to_uppercase()),
            _ => anyhow::bail!("Type not implemented {:?}", itype),
        }
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Spot]
    }
    fn exchange(&self) -> &str {
        "kraken"
    }
}

/// REST namespace: the slashless altname, `XBTUSD`.
#[derive(Clone)]
pub struct KrakenRestMapper;

impl SymbolMapper for KrakenRestMapper {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String> {
        KrakenMapper
            .denormalize(normalized, itype)
            .map(|pair| pair.replace('/', ""))
    }
    fn instrument_types(&self) -> &'static [InstrumentType] {
        &[InstrumentType::Spot]
    }
    fn exchange(&self) -> &str {
        "kraken"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streaming_and_rest_formats_differ() {
        assert_eq!(
            KrakenMapper.denormalize("SPOT-BTC-USD", InstrumentType::Spot).unwrap(),
            "XBT/USD"
        );
        assert_eq!(
            KrakenRestMapper.denormalize("SPOT-BTC-USD", InstrumentType::Spot).unwrap(),
            "XBTUSD"
        );
        assert_eq!(
            KrakenRestMapper.denormalize("ETH-EUR", InstrumentType::Spot).unwrap(),
            "ETHEUR"
        );
        assert!(KrakenMapper.denormalize("PERP-BTC-USD", InstrumentType::Perp).is_err());
    }
}
