pub mod app_config;
pub mod error;
pub mod exchanges;
pub mod instrument;
pub mod logging;
pub mod mappers;
pub mod mapping_gate;
pub mod rest;
pub mod symbol_registry;

pub use app_config::{Config, Credentials, load_config};
pub use error::{ConfigError, MappingError, RestError};
pub use exchanges::{Capability, RestExchange};
pub use instrument::InstrumentType;
pub use mapping_gate::MappingGate;
pub use rest::Rest;
pub use symbol_registry::{PAIR_MAPPINGS, PairMapping, PairMappingTable, SymbolMappingLoader, Universe};
