#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrumentType {
    Spot,
    Perp,
}

impl InstrumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentType::Spot => "SPOT",
            InstrumentType::Perp => "PERP",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SPOT" => Some(InstrumentType::Spot),
            "PERP" => Some(InstrumentType::Perp),
            _ => None,
        }
    }
}

/// Canonical pair name: `SPOT-BTC-USD`, `PERP-ETH-USDT`, etc.
pub fn canonical(base: &str, quote: &str, itype: InstrumentType) -> String {
    format!("{}-{}-{}", itype.as_str(), base, quote)
}
