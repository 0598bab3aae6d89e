//! OBIS codes and the read-only code registry

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::Value;

pub mod codes;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObisError {
    #[error("OBIS code must have 6 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Invalid OBIS code format: {0}")]
    InvalidFormat(String),
}

/// 6 byte OBIS identifier (A-B:C.D.E.F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObisCode([u8; 6]);

impl ObisCode {
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        ObisCode([a, b, c, d, e, f])
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ObisError> {
        let b: [u8; 6] = bytes.try_into().map_err(|_| ObisError::InvalidLength(bytes.len()))?;
        Ok(ObisCode(b))
    }

    /// Only octet strings carry OBIS codes, everything else has no length at all
    pub fn from_value(value: &Value) -> Result<Self, ObisError> {
        match value {
            Value::OctetString(bytes) => Self::from_bytes(bytes),
            _ => Err(ObisError::InvalidLength(0)),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    pub fn medium(&self) -> u8 { self.0[0] }
    pub fn channel(&self) -> u8 { self.0[1] }
    pub fn indicator(&self) -> u8 { self.0[2] }
    pub fn mode(&self) -> u8 { self.0[3] }
    pub fn quantities(&self) -> u8 { self.0[4] }
    pub fn storage(&self) -> u8 { self.0[5] }

    /// Manufacturer/gateway specific codes live in the 0x80 and 0x81 A groups
    pub fn is_private(&self) -> bool {
        self.0[0] == 0x80 || self.0[0] == 0x81
    }

    pub fn is_abstract(&self) -> bool {
        self.0[0] == 0x00
    }

    pub fn is_profile(&self) -> bool {
        codes::PROFILES.contains(self)
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn name(&self) -> Option<&'static str> {
        get_name(self)
    }
}

impl fmt::Display for ObisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}.{}.{}.{}",
            self.0[0], self.0[1],
            self.0[2], self.0[3],
            self.0[4], self.0[5])
    }
}

lazy_static! {
    static ref OBIS_NAMES: HashMap<ObisCode, &'static str> = codes::DEFINITIONS.iter().cloned().collect();
    static ref OBIS_TEXT: Regex = Regex::new(
        r"^(\d{1,3})-(\d{1,3}):(\d{1,3})\.(\d{1,3})\.(\d{1,3})(?:[.*](\d{1,3}))?$"
    ).unwrap_or_else(|e| panic!("OBIS pattern does not compile: {e}"));
}

impl FromStr for ObisCode {
    type Err = ObisError;

    /// Accepts "1-0:1.8.0.255", "1-0:1.8.0*255", "1-0:1.8.0" and "0100010800ff"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 12 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            let bytes = hex::decode(s).map_err(|_| ObisError::InvalidFormat(s.to_string()))?;
            return ObisCode::from_bytes(&bytes);
        }

        let caps = OBIS_TEXT.captures(s).ok_or(ObisError::InvalidFormat(s.to_string()))?;
        let mut bytes = [0xFFu8; 6];
        for (i, b) in bytes.iter_mut().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                *b = m.as_str().parse::<u8>().map_err(|_| ObisError::InvalidFormat(s.to_string()))?;
            }
        }
        Ok(ObisCode(bytes))
    }
}

impl Serialize for ObisCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Registry lookup: exact codes first, then the indexed code families
pub fn get_name(code: &ObisCode) -> Option<&'static str> {
    if let Some(name) = OBIS_NAMES.get(code) {
        return Some(name);
    }
    codes::FAMILIES.iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, name)| *name)
}

pub fn get_obis_description(obis_code: &str) -> Option<&'static str> {
    ObisCode::from_str(obis_code).ok().and_then(|c| get_name(&c))
}

pub fn validate_obis_code(code: &str) -> bool {
    ObisCode::from_str(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_round_trip() {
        let bytes = [0x81, 0x81, 0xC7, 0x82, 0x04, 0xFF];
        let code = ObisCode::from_bytes(&bytes).unwrap();
        assert_eq!(code.as_bytes(), &bytes);
        assert_eq!(code, codes::SERVER_ID);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(ObisCode::from_bytes(&[1, 2, 3]), Err(ObisError::InvalidLength(3)));
        assert_eq!(ObisCode::from_bytes(&[0; 7]), Err(ObisError::InvalidLength(7)));
        assert!(ObisCode::from_value(&Value::U8(1)).is_err());
    }

    #[test]
    fn test_format_obis_code() {
        let code = ObisCode::new(0x01, 0x00, 0x01, 0x08, 0x00, 0xFF);
        assert_eq!(code.to_string(), "1-0:1.8.0.255");
        assert_eq!(code.to_hex(), "0100010800ff");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""1-0:1.8.0.255""#);
    }

    #[test]
    fn test_parse_obis_code() {
        assert_eq!("1-0:1.8.0.255".parse::<ObisCode>().unwrap(), codes::ACTIVE_ENERGY_PLUS);
        assert_eq!("1-0:1.8.0*255".parse::<ObisCode>().unwrap(), codes::ACTIVE_ENERGY_PLUS);
        assert_eq!("1-0:1.8.0".parse::<ObisCode>().unwrap(), codes::ACTIVE_ENERGY_PLUS);
        assert_eq!("8181c78204ff".parse::<ObisCode>().unwrap(), codes::SERVER_ID);
        assert!("1-0:1.8".parse::<ObisCode>().is_err());
        assert!("1-0:1.8.300".parse::<ObisCode>().is_err());
    }

    #[test]
    fn test_validate_obis_code() {
        assert!(validate_obis_code("1-0:1.8.1"));
        assert!(validate_obis_code("0-0:1.0.0"));
        assert!(!validate_obis_code("invalid"));
        assert!(!validate_obis_code("1:2.3.4"));
    }

    #[test]
    fn test_classification() {
        assert!(codes::SERVER_ID.is_private());
        assert!(!codes::ACTIVE_ENERGY_PLUS.is_private());
        assert!(codes::MBUS_STATE.is_abstract());
        assert!(codes::PROFILE_15_MINUTE.is_profile());
        assert!(!codes::ROOT_SENSOR_PARAMS.is_profile());
        assert!(ObisCode::new(0x81, 0x49, 0x0D, 0x07, 0x00, 0x02).starts_with(&codes::PREFIX_IPT_PARAM));
    }

    #[test]
    fn test_registry() {
        assert_eq!(get_name(&codes::SERVER_ID), Some("server-id"));
        assert_eq!(get_name(&ObisCode::new(0x81, 0x49, 0x1A, 0x07, 0x00, 0x03)), Some("ipt-target-port"));
        assert_eq!(get_name(&ObisCode::new(0x02, 0x02, 0x02, 0x02, 0x02, 0x02)), None);
        assert_eq!(get_obis_description("1-0:1.8.1.255"), Some("active-energy-plus-tariff-1"));
        assert_eq!(get_obis_description("nonexistent"), None);
    }

    #[test]
    fn test_registry_has_unique_codes() {
        assert_eq!(OBIS_NAMES.len(), codes::DEFINITIONS.len());
    }
}
