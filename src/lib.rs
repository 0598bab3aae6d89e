//! SML decoding core for smart metering gateways
//!
//! Turns decoded SML messages into named instructions, reading OBIS
//! parameter trees, device lists and value lists on the way.

pub mod config;
pub mod models;
pub mod obis_utils;
pub mod sml;

// Re-export common types for easier access
pub use config::DecoderConfig;
pub use models::{Octets, Value};
pub use obis_utils::ObisCode;
pub use sml::structs::{Envelope, Instruction, MessageType, ParamNode};
pub use sml::{Reader, SmlError};
