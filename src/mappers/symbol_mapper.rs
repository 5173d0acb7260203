use crate::instrument::InstrumentType;
use anyhow::Result;

/// Converts normalized symbols into one exchange namespace's native format
pub trait SymbolMapper: Send + Sync {
    fn denormalize(&self, normalized: &str, itype: InstrumentType) -> Result<String>;
    /// Instrument types this namespace lists at all.
    fn instrument_types(&self) -> &'static [InstrumentType];
    fn exchange(&self) -> &str;
}

/// Helper to parse normalized symbols
pub fn parse_normalized(normalized: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = normalized.split('-').collect();

    match parts.as_slice() {
        [itype, base, quote] if InstrumentType::parse(itype).is_some() => {
            Ok((base.to_string(), quote.to_string()))
        }
        [base, quote] => Ok((base.to_string(), quote.to_string())),
        _ => anyhow::bail!("Invalid normalized symbol format: {}", normalized),
    }
}

/// Rejects any quote outside `allowed`.
pub(crate) fn require_quote(exchange: &str, quote: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&quote) {
        anyhow::bail!("{} does not quote in {}", exchange, quote);
    }
    Ok(())
}
