use chrono::DateTime;

use super::SmlError;
use crate::models::{Octets, Value};
use crate::obis_utils::ObisCode;

/// Renders `value * 10^scaler` as an exact decimal string
pub fn scale_value(value: i128, scaler: i8) -> String {
    if scaler == 0 || (value == 0 && scaler > 0) {
        return value.to_string();
    }

    let digits = value.unsigned_abs().to_string();
    let body = if scaler > 0 {
        format!("{}{}", digits, "0".repeat(scaler as usize))
    } else {
        let shift = scaler.unsigned_abs() as usize;
        if digits.len() > shift {
            let (int, frac) = digits.split_at(digits.len() - shift);
            format!("{int}.{frac}")
        } else {
            format!("0.{}{}", "0".repeat(shift - digits.len()), digits)
        }
    };

    if value < 0 { format!("-{body}") } else { body }
}

/// SML_Time: {1 = secIndex, 2 = timestamp}. Anything else has no value.
pub fn read_time(value: &Value) -> Option<Value> {
    let fields = value.as_tuple()?;
    if fields.len() != 2 {
        return None;
    }

    match fields[0].as_u64()? {
        1 if fields[1].is_integer() => Some(fields[1].clone()),
        2 => {
            /* timestamps are unsigned 32 bit seconds */
            let secs = fields[1].as_u64().and_then(|s| u32::try_from(s).ok())?;
            DateTime::from_timestamp(i64::from(secs), 0).map(Value::TimePoint)
        }
        _ => None,
    }
}

pub fn to_printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Reversed byte order hex, the way meters print their serial numbers
pub fn reversed_hex(bytes: &[u8]) -> String {
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    hex::encode(reversed)
}

// Field readers. Null is an omitted optional field on the wire.

pub fn expect_arity<'a>(value: &'a Value, expected: usize, context: &str) -> Result<&'a [Value], SmlError> {
    let fields = value.as_tuple().ok_or_else(|| SmlError::TypeMismatch {
        context: context.to_string(),
        expected: "tuple",
        actual: value.type_name(),
    })?;

    if fields.len() != expected {
        return Err(SmlError::ArityMismatch {
            context: context.to_string(),
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

pub fn read_octets(value: &Value, context: &str) -> Result<Octets, SmlError> {
    match value {
        Value::OctetString(bytes) => Ok(Octets(bytes.clone())),
        Value::String(s) => Ok(Octets(s.as_bytes().to_vec())),
        Value::Null => Ok(Octets::default()),
        other => Err(type_mismatch(context, "octet string", other)),
    }
}

pub fn read_text(value: &Value, context: &str) -> Result<String, SmlError> {
    match value {
        Value::OctetString(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Err(type_mismatch(context, "octet string", other)),
    }
}

pub fn read_unsigned(value: &Value, context: &str) -> Result<Option<u64>, SmlError> {
    match value {
        Value::Null => Ok(None),
        v => v.as_u64().map(Some).ok_or_else(|| type_mismatch(context, "unsigned", v)),
    }
}

pub fn read_bool(value: &Value, context: &str) -> Result<bool, SmlError> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        v if v.is_integer() => Ok(v.as_i128() != Some(0)),
        other => Err(type_mismatch(context, "bool", other)),
    }
}

pub fn read_scaler(value: &Value, context: &str) -> Result<i8, SmlError> {
    match value {
        Value::Null => Ok(0),
        v => v.as_i128()
            .and_then(|s| i8::try_from(s).ok())
            .ok_or_else(|| type_mismatch(context, "signed 8 bit scaler", v)),
    }
}

/// Unit code 0 means "no unit"
pub fn read_unit(value: &Value, context: &str) -> Result<u8, SmlError> {
    match value {
        Value::Null => Ok(0),
        v => v.as_u64()
            .and_then(|u| u8::try_from(u).ok())
            .ok_or_else(|| type_mismatch(context, "unsigned 8 bit unit", v)),
    }
}

pub fn read_obis(value: &Value, context: &str) -> Result<ObisCode, SmlError> {
    match value {
        Value::OctetString(_) => Ok(ObisCode::from_value(value)?),
        other => Err(type_mismatch(context, "OBIS code", other)),
    }
}

pub fn read_optional_obis(value: &Value, context: &str) -> Result<Option<ObisCode>, SmlError> {
    match value {
        Value::Null => Ok(None),
        v => read_obis(v, context).map(Some),
    }
}

/// SML_TreePath, a sequence of OBIS codes
pub fn read_path(value: &Value, context: &str) -> Result<Vec<ObisCode>, SmlError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Tuple(items) => items.iter().map(|item| read_obis(item, context)).collect(),
        other => Err(type_mismatch(context, "tree path", other)),
    }
}

pub fn type_mismatch(context: &str, expected: &'static str, actual: &Value) -> SmlError {
    SmlError::TypeMismatch {
        context: context.to_string(),
        expected,
        actual: actual.type_name(),
    }
}
