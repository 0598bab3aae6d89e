use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::utils::{read_time, reversed_hex, scale_value, to_printable};
use crate::models::Value;
use crate::obis_utils::{codes, ObisCode};

/// Turns a raw wire value into the type its OBIS code stands for
pub type Coercion = fn(code: &ObisCode, value: Value, scaler: i8) -> Value;

lazy_static! {
    static ref COERCIONS: HashMap<ObisCode, Coercion> = {
        let mut m: HashMap<ObisCode, Coercion> = HashMap::new();

        for code in [
            codes::DATA_MANUFACTURER,
            codes::W_MBUS_ADAPTER_MANUFACTURER,
            codes::PUSH_TARGET,
            codes::PUSH_DETAILS,
            codes::DEVICE_KERNEL,
            codes::FIRMWARE_VERSION,
            codes::W_MBUS_FIRMWARE,
            codes::IF_1107_METER_ID,
            codes::IF_1107_ADDRESS,
        ] {
            m.insert(code, to_text);
        }

        m.insert(codes::CURRENT_UTC, to_current_utc);
        m.insert(codes::ACT_SENSOR_TIME, to_timestamp);

        m.insert(codes::SERIAL_NR, to_serial);
        m.insert(codes::SERIAL_NR_SECOND, to_serial);

        m.insert(codes::MBUS_STATE, to_i32);
        m.insert(codes::PEER_ADDRESS, to_peer_address);
        m.insert(codes::CLASS_EVENT, to_u32);

        for code in [
            codes::LAN_IP_ADDRESS,
            codes::LAN_SUBNET_MASK,
            codes::LAN_GATEWAY,
            codes::LAN_DNS_PRIMARY,
            codes::LAN_DNS_SECONDARY,
            codes::LAN_DNS_TERTIARY,
        ] {
            m.insert(code, to_ip_address);
        }

        m.insert(codes::DEVICE_CLASS, to_u32);
        m.insert(codes::DEVICE_MODEL, to_u32);
        m.insert(codes::IF_1107_BAUDRATE, to_u32);
        m.insert(codes::HARDWARE_VERSION, to_u8);
        m.insert(codes::W_MBUS_HARDWARE, to_u8);
        m
    };
}

/* Indexed families, checked after the exact codes */
const PREFIX_COERCIONS: &[([u8; 5], Coercion)] = &[
    (codes::PREFIX_IPT_TARGET_ADDRESS, to_ip_address),
    (codes::PREFIX_IPT_TARGET_PORT, to_u16),
    (codes::PREFIX_IPT_SOURCE_PORT, to_u16),
];

pub fn get_coercion(code: &ObisCode) -> Option<Coercion> {
    if let Some(f) = COERCIONS.get(code) {
        return Some(*f);
    }
    PREFIX_COERCIONS.iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, f)| *f)
}

pub fn customize_value(code: &ObisCode, value: Value, scaler: i8) -> Value {
    match get_coercion(code) {
        Some(f) => f(code, value, scaler),
        None => default_value(code, value, scaler),
    }
}

fn default_value(_: &ObisCode, value: Value, scaler: i8) -> Value {
    match value.as_i128() {
        Some(v) if scaler != 0 => Value::String(scale_value(v, scaler)),
        _ => value,
    }
}

fn to_text(_: &ObisCode, value: Value, _: i8) -> Value {
    match value {
        Value::OctetString(bytes) => Value::String(to_printable(&bytes)),
        other => other,
    }
}

fn to_timestamp(_: &ObisCode, value: Value, _: i8) -> Value {
    if let Some(tp) = value.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)) {
        return Value::TimePoint(tp);
    }
    match read_time(&value) {
        Some(tp @ Value::TimePoint(_)) => tp,
        _ => value,
    }
}

/* Older gateways report CURRENT_UTC in shapes that carry no usable time at all */
fn to_current_utc(code: &ObisCode, value: Value, scaler: i8) -> Value {
    match to_timestamp(code, value, scaler) {
        tp @ Value::TimePoint(_) => tp,
        _ => Value::TimePoint(Utc::now()),
    }
}

fn to_serial(_: &ObisCode, value: Value, _: i8) -> Value {
    match value {
        Value::OctetString(bytes) => Value::String(reversed_hex(&bytes)),
        other => other,
    }
}

fn to_peer_address(_: &ObisCode, value: Value, _: i8) -> Value {
    match ObisCode::from_value(&value) {
        Ok(code) => Value::String(code.to_string()),
        Err(_) => value,
    }
}

/* Integer addresses are stored little endian by the gateway */
fn to_ip_address(_: &ObisCode, value: Value, _: i8) -> Value {
    if let Some(n) = value.as_u64().and_then(|n| u32::try_from(n).ok()) {
        return Value::String(Ipv4Addr::from(n.to_le_bytes()).to_string());
    }
    let text = value.as_bytes().and_then(|bytes| {
        if let Ok(b) = <[u8; 4]>::try_from(bytes) {
            Some(Ipv4Addr::from(b).to_string())
        } else if let Ok(b) = <[u8; 16]>::try_from(bytes) {
            Some(Ipv6Addr::from(b).to_string())
        } else {
            None
        }
    });
    text.map(Value::String).unwrap_or(value)
}

fn to_i32(_: &ObisCode, value: Value, _: i8) -> Value {
    match value.as_i128().and_then(|v| i32::try_from(v).ok()) {
        Some(v) => Value::I32(v),
        None => value,
    }
}

fn to_u32(_: &ObisCode, value: Value, _: i8) -> Value {
    match value.as_i128().and_then(|v| u32::try_from(v).ok()) {
        Some(v) => Value::U32(v),
        None => value,
    }
}

fn to_u16(_: &ObisCode, value: Value, _: i8) -> Value {
    match value.as_i128().and_then(|v| u16::try_from(v).ok()) {
        Some(v) => Value::U16(v),
        None => value,
    }
}

fn to_u8(_: &ObisCode, value: Value, _: i8) -> Value {
    match value.as_i128().and_then(|v| u8::try_from(v).ok()) {
        Some(v) => Value::U8(v),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipt(prefix: [u8; 5], idx: u8) -> ObisCode {
        ObisCode::new(prefix[0], prefix[1], prefix[2], prefix[3], prefix[4], idx)
    }

    #[test]
    fn test_text_codes() {
        for code in [
            codes::DATA_MANUFACTURER,
            codes::W_MBUS_ADAPTER_MANUFACTURER,
            codes::PUSH_TARGET,
            codes::PUSH_DETAILS,
            codes::DEVICE_KERNEL,
            codes::FIRMWARE_VERSION,
            codes::W_MBUS_FIRMWARE,
            codes::IF_1107_METER_ID,
            codes::IF_1107_ADDRESS,
        ] {
            assert_eq!(
                customize_value(&code, Value::octets(b"EMH\x00"), 0),
                Value::String("EMH".to_string()),
                "{code}"
            );
        }
    }

    #[test]
    fn test_timestamp_codes() {
        let v = customize_value(&codes::ACT_SENSOR_TIME, Value::U32(1_600_000_000), 0);
        assert!(matches!(v, Value::TimePoint(tp) if tp.timestamp() == 1_600_000_000));

        let v = customize_value(&codes::CURRENT_UTC, Value::U32(1_600_000_000), 0);
        assert!(matches!(v, Value::TimePoint(tp) if tp.timestamp() == 1_600_000_000));

        let sml_time = Value::tuple(vec![Value::U8(2), Value::U32(1_500_000_000)]);
        let v = customize_value(&codes::CURRENT_UTC, sml_time, 0);
        assert!(matches!(v, Value::TimePoint(tp) if tp.timestamp() == 1_500_000_000));

        // sensor time keeps what it cannot interpret
        let raw = Value::octets(&[1, 2]);
        assert_eq!(customize_value(&codes::ACT_SENSOR_TIME, raw.clone(), 0), raw);
    }

    #[test]
    fn test_current_utc_falls_back_to_now() {
        let before = Utc::now().timestamp();
        let v = customize_value(&codes::CURRENT_UTC, Value::octets(&[1, 2]), 0);
        match v {
            Value::TimePoint(tp) => assert!(tp.timestamp() >= before),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_serial_codes() {
        for code in [codes::SERIAL_NR, codes::SERIAL_NR_SECOND] {
            assert_eq!(
                customize_value(&code, Value::octets(&[0x01, 0x02, 0x03, 0x04]), 0),
                Value::String("04030201".to_string())
            );
        }
    }

    #[test]
    fn test_status_and_event_codes() {
        assert_eq!(customize_value(&codes::MBUS_STATE, Value::U8(7), 0), Value::I32(7));
        assert_eq!(customize_value(&codes::MBUS_STATE, Value::I64(-2), 0), Value::I32(-2));
        assert_eq!(customize_value(&codes::CLASS_EVENT, Value::U64(0x0010_0023), 0), Value::U32(0x0010_0023));
    }

    #[test]
    fn test_peer_address() {
        let v = customize_value(&codes::PEER_ADDRESS, Value::octets(&[0x81, 0x81, 0xC7, 0x82, 0x04, 0xFF]), 0);
        assert_eq!(v, Value::String("129-129:199.130.4.255".to_string()));

        let raw = Value::octets(&[1, 2, 3]);
        assert_eq!(customize_value(&codes::PEER_ADDRESS, raw.clone(), 0), raw);
    }

    #[test]
    fn test_ip_addresses() {
        for code in [
            codes::LAN_IP_ADDRESS,
            codes::LAN_SUBNET_MASK,
            codes::LAN_GATEWAY,
            codes::LAN_DNS_PRIMARY,
            codes::LAN_DNS_SECONDARY,
            codes::LAN_DNS_TERTIARY,
        ] {
            assert_eq!(
                customize_value(&code, Value::U32(0x0100_A8C0), 0),
                Value::String("192.168.0.1".to_string())
            );
        }

        let target = ipt(codes::PREFIX_IPT_TARGET_ADDRESS, 2);
        assert_eq!(
            customize_value(&target, Value::octets(&[10, 0, 0, 7]), 0),
            Value::String("10.0.0.7".to_string())
        );
        let mut v6 = [0u8; 16];
        v6[15] = 1;
        assert_eq!(customize_value(&target, Value::octets(&v6), 0), Value::String("::1".to_string()));
    }

    #[test]
    fn test_fixed_width_codes() {
        assert_eq!(customize_value(&ipt(codes::PREFIX_IPT_TARGET_PORT, 1), Value::U32(26862), 0), Value::U16(26862));
        assert_eq!(customize_value(&ipt(codes::PREFIX_IPT_SOURCE_PORT, 1), Value::U64(0), 0), Value::U16(0));
        assert_eq!(customize_value(&codes::DEVICE_CLASS, Value::U8(3), 0), Value::U32(3));
        assert_eq!(customize_value(&codes::DEVICE_MODEL, Value::U16(3), 0), Value::U32(3));
        assert_eq!(customize_value(&codes::IF_1107_BAUDRATE, Value::U16(9600), 0), Value::U32(9600));
        assert_eq!(customize_value(&codes::HARDWARE_VERSION, Value::U32(2), 0), Value::U8(2));
        assert_eq!(customize_value(&codes::W_MBUS_HARDWARE, Value::U32(2), 0), Value::U8(2));

        // only integers are narrowed
        let text = Value::octets(b"2D2D2D");
        assert_eq!(customize_value(&codes::DEVICE_CLASS, text.clone(), 0), text);
        assert_eq!(customize_value(&codes::HARDWARE_VERSION, Value::U32(300), 0), Value::U32(300));
    }

    #[test]
    fn test_default_scaling() {
        let code = codes::ACTIVE_ENERGY_PLUS;
        assert_eq!(customize_value(&code, Value::U64(12345), -2), Value::String("123.45".to_string()));
        assert_eq!(customize_value(&code, Value::I32(-5), -3), Value::String("-0.005".to_string()));
        assert_eq!(customize_value(&code, Value::U8(42), 2), Value::String("4200".to_string()));
        assert_eq!(customize_value(&code, Value::U32(12345), 0), Value::U32(12345));
        assert_eq!(customize_value(&code, Value::Bool(true), -1), Value::Bool(true));
    }

    #[test]
    fn test_unlisted_codes_pass_through() {
        assert!(get_coercion(&codes::ROOT_SENSOR_PARAMS).is_none());
        let v = Value::octets(&[0xAA]);
        assert_eq!(customize_value(&codes::ROOT_SENSOR_PARAMS, v.clone(), 0), v);
    }
}
