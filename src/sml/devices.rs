use log::{debug, warn};

use super::structs::*;
use super::tree::{insert_unique, read_proc_par_value, TreeReader};
use super::utils::{expect_arity, read_obis};
use super::SmlError;
use crate::models::{Octets, Value};
use crate::obis_utils::{codes, ObisCode};

pub fn classify_server_id(id: &[u8]) -> ServerIdKind {
    match (id.len(), id.first()) {
        (9, Some(0x01)) => ServerIdKind::MBusWired,
        (9, Some(0x02)) => ServerIdKind::MBusRadio,
        (8, _) => ServerIdKind::WirelessMBus,
        (7, Some(0x05)) => ServerIdKind::Gateway,
        _ => ServerIdKind::Other,
    }
}

/* M-Bus address part of a meter server id: manufacturer, ident, version, medium */
fn address_part(id: &[u8], kind: ServerIdKind) -> Option<&[u8; 8]> {
    let address = match kind {
        ServerIdKind::MBusWired | ServerIdKind::MBusRadio => id.get(1..9)?,
        ServerIdKind::WirelessMBus => id.get(0..8)?,
        _ => return None,
    };
    address.try_into().ok()
}

/// Manufacturer flag id, three letters packed into 15 bits (little endian)
pub fn get_manufacturer(address: &[u8; 8]) -> String {
    let m = u16::from_le_bytes([address[0], address[1]]);
    [(m >> 10) & 0x1F, (m >> 5) & 0x1F, m & 0x1F]
        .iter()
        .map(|c| char::from((c + 64) as u8))
        .collect()
}

/// BCD ident number, printed as on the type plate
pub fn get_ident_no(address: &[u8; 8]) -> String {
    format!("{:02x}{:02x}{:02x}{:02x}", address[5], address[4], address[3], address[2])
}

pub fn get_device_medium(medium: u8) -> &'static str {
    match medium {
        0x02 => "Electricity",
        0x03 => "Gas",
        0x04 => "Heat",
        0x06 => "Water (hot)",
        0x07 => "Water (cold)",
        0x08 => "Heat Cost Allocator",
        0x0A | 0x0B => "Cooling",
        0x0C => "Heat",
        0x0D => "Heat / Cooling Combined",
        0x15 => "Water (hot)",
        0x16 => "Water (cold)",
        0x20 | 0x21 => "Breaker / Valve",
        _ => "unknown",
    }
}

/// `01-e61e-29436587-3c-07` for wired and radio ids, without the leading kind for wireless ones
pub fn format_server_id(id: &[u8], kind: ServerIdKind) -> Option<String> {
    let address = address_part(id, kind)?;
    let tail = format!(
        "{}-{}-{:02x}-{:02x}",
        hex::encode(&address[0..2]),
        hex::encode(&address[2..6]),
        address[6],
        address[7]
    );
    match kind {
        ServerIdKind::WirelessMBus => Some(tail),
        _ => Some(format!("{:02x}-{}", id[0], tail)),
    }
}

pub fn describe_device(code: ObisCode, server_id: &[u8], params: ParamMap) -> DeviceDescriptor {
    let kind = classify_server_id(server_id);
    let mut descriptor = DeviceDescriptor {
        code,
        server_id: Octets(server_id.to_vec()),
        kind,
        manufacturer: String::new(),
        serial: String::new(),
        medium: String::new(),
        metering_code: String::new(),
        params,
    };

    if let Some(address) = address_part(server_id, kind) {
        let version = address[6];
        let medium = address[7];
        descriptor.manufacturer = get_manufacturer(address);
        descriptor.serial = get_ident_no(address);
        descriptor.medium = get_device_medium(medium).to_string();
        /* Metering code following DIN 43863-5 */
        descriptor.metering_code = format!("{:x}{}{:02x}{}", medium, descriptor.manufacturer, version, descriptor.serial);
    }
    descriptor
}

/* The list index sits in the storage byte, some gateways put it one byte earlier */
fn device_nr(code: &ObisCode) -> u8 {
    match code.storage() {
        0xFF => code.quantities(),
        nr => nr,
    }
}

impl DeviceDescriptor {
    pub fn to_param(&self) -> Param {
        let mut map = self.params.clone();
        map.insert(ParamKey::Field("nr"), Param::Leaf(Value::U8(device_nr(&self.code))));
        map.insert(ParamKey::Field("maker"), Param::Leaf(Value::String(self.manufacturer.clone())));

        if let Some(text) = format_server_id(self.server_id.as_slice(), self.kind) {
            map.insert(ParamKey::Obis(codes::SERVER_ID), Param::Leaf(Value::String(text)));
            map.insert(ParamKey::Field("type"), Param::Leaf(Value::String(self.kind.to_string())));
            map.insert(ParamKey::Field("serial"), Param::Leaf(Value::String(self.serial.clone())));
            map.insert(ParamKey::Field("medium"), Param::Leaf(Value::String(self.medium.clone())));
            map.insert(ParamKey::Field("metering-code"), Param::Leaf(Value::String(self.metering_code.clone())));
        }
        Param::Node(map)
    }
}

fn server_id_of(params: &ParamMap) -> Option<Vec<u8>> {
    match params.get(&ParamKey::Obis(codes::SERVER_ID))? {
        Param::Leaf(Value::OctetString(bytes)) => Some(bytes.clone()),
        _ => None,
    }
}

/// Visible/active device lists, nested list levels are flattened into one map
pub fn collect_devices(reader: &TreeReader, children: &[Value], depth: usize) -> Result<Param, SmlError> {
    let mut devices = ParamMap::new();
    collect_into(reader, children, depth, &mut devices)?;
    debug!("Collected {} devices", devices.len());
    Ok(Param::Node(devices))
}

fn collect_into(reader: &TreeReader, children: &[Value], depth: usize, devices: &mut ParamMap) -> Result<(), SmlError> {
    reader.check_depth(depth)?;

    for child in children {
        let (code, sub) = match entry_parts(child) {
            Ok(parts) => parts,
            Err(e) => {
                warn!("Skipping device entry: {e}");
                continue;
            }
        };

        let Some(sub) = sub else {
            match reader.read_node(child, depth) {
                Ok(node) => insert_unique(devices, ParamKey::Obis(node.name), node.payload),
                Err(e @ SmlError::TooDeep(_)) => return Err(e),
                Err(e) => warn!("Skipping device entry {code}: {e}"),
            }
            continue;
        };

        if !has_server_id(sub) && is_device_list(reader, sub, depth + 1) {
            collect_into(reader, sub, depth + 1, devices)?;
            continue;
        }

        let params = reader.read_children(sub, depth + 1)?;
        let server_id = server_id_of(&params).unwrap_or_default();
        let descriptor = describe_device(code, &server_id, params);
        if descriptor.kind.is_meter() {
            debug!("Device {code}: {} {} {}", descriptor.kind, descriptor.manufacturer, descriptor.serial);
        }
        insert_unique(devices, ParamKey::Obis(code), descriptor.to_param());
    }
    Ok(())
}

/* A list level holds only child lists, and at least one of them is a device or a further list level */
fn is_device_list(reader: &TreeReader, children: &[Value], depth: usize) -> bool {
    if children.is_empty() || reader.check_depth(depth).is_err() {
        return false;
    }

    let mut subs = Vec::with_capacity(children.len());
    for child in children {
        match entry_parts(child) {
            Ok((_, Some(sub))) => subs.push(sub),
            _ => return false,
        }
    }
    subs.iter().any(|sub| has_server_id(sub) || is_device_list(reader, sub, depth + 1))
}

fn has_server_id(children: &[Value]) -> bool {
    children.iter().any(|child| {
        matches!(entry_parts(child), Ok((code, _)) if code == codes::SERVER_ID)
    })
}

/* Name of a tree entry and its child list, if the entry carries no value */
fn entry_parts(value: &Value) -> Result<(ObisCode, Option<&[Value]>), SmlError> {
    let fields = expect_arity(value, 3, "SML_Tree")?;
    let code = read_obis(&fields[0], "SML_Tree.parameterName")?;
    let has_value = read_proc_par_value(&fields[1]).is_some();
    Ok((code, if has_value { None } else { fields[2].as_tuple() }))
}

/// IEC 62056-21 meter list, one entry per configured serial meter
pub fn collect_serial_devices(reader: &TreeReader, children: &[Value], depth: usize) -> Result<Param, SmlError> {
    reader.check_depth(depth)?;

    let mut meters = ParamMap::new();
    for child in children {
        let node = match reader.read_node(child, depth) {
            Ok(node) => node,
            Err(e @ SmlError::TooDeep(_)) => return Err(e),
            Err(e) => {
                warn!("Skipping IEC meter entry: {e}");
                continue;
            }
        };

        let payload = match node.payload {
            Param::Node(mut params) => {
                params.insert(ParamKey::Field("nr"), Param::Leaf(Value::U8(node.name.storage())));
                Param::Node(params)
            }
            leaf => leaf,
        };
        insert_unique(&mut meters, ParamKey::Obis(node.name), payload);
    }
    Ok(Param::Node(meters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::sml::tree::tests::{leaf, node};

    const WIRED: [u8; 9] = [0x01, 0xE6, 0x1E, 0x29, 0x43, 0x65, 0x87, 0x3C, 0x07];
    const ADDRESS: [u8; 8] = [0xE6, 0x1E, 0x29, 0x43, 0x65, 0x87, 0x3C, 0x07];

    #[test]
    fn test_classify_server_id() {
        assert_eq!(classify_server_id(&WIRED), ServerIdKind::MBusWired);
        let mut radio = WIRED;
        radio[0] = 0x02;
        assert_eq!(classify_server_id(&radio), ServerIdKind::MBusRadio);
        assert_eq!(classify_server_id(&WIRED[1..]), ServerIdKind::WirelessMBus);
        assert_eq!(classify_server_id(&[0x05, 0, 1, 2, 3, 4, 5]), ServerIdKind::Gateway);
        assert_eq!(classify_server_id(&[0x09, 0x01]), ServerIdKind::Other);
    }

    #[test]
    fn test_decode_address() {
        assert_eq!(get_manufacturer(&ADDRESS), "GWF");
        assert_eq!(get_ident_no(&ADDRESS), "87654329");
        assert_eq!(get_device_medium(0x07), "Water (cold)");
        assert_eq!(format_server_id(&WIRED, ServerIdKind::MBusWired).unwrap(), "01-e61e-29436587-3c-07");
        assert_eq!(format_server_id(&WIRED[1..], ServerIdKind::WirelessMBus).unwrap(), "e61e-29436587-3c-07");
        assert_eq!(format_server_id(&[1, 2], ServerIdKind::Other), None);
    }

    #[test]
    fn test_describe_device() {
        let d = describe_device(ObisCode::new(0x81, 0x81, 0x10, 0x06, 0x01, 0x01), &WIRED, ParamMap::new());
        assert_eq!(d.kind, ServerIdKind::MBusWired);
        assert_eq!(d.manufacturer, "GWF");
        assert_eq!(d.serial, "87654329");
        assert_eq!(d.metering_code, "7GWF3c87654329");
    }

    #[test]
    fn test_device_list_enrichment() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);

        let wired = ObisCode::new(0x81, 0x81, 0x10, 0x06, 0x01, 0x01);
        let unknown = ObisCode::new(0x81, 0x81, 0x10, 0x06, 0x01, 0x02);
        let tree = node(&codes::ROOT_VISIBLE_DEVICES, vec![
            node(&ObisCode::new(0x81, 0x81, 0x10, 0x06, 0x01, 0xFF), vec![
                node(&wired, vec![
                    leaf(&codes::SERVER_ID, Value::octets(&WIRED)),
                    leaf(&codes::DEVICE_CLASS, Value::U8(0)),
                ]),
                node(&unknown, vec![leaf(&codes::SERVER_ID, Value::octets(&[0x09, 0x01, 0x02]))]),
            ]),
        ]);

        let root = reader.read_param_tree(&tree).unwrap();
        let devices = root.payload.as_node().unwrap();
        assert_eq!(devices.len(), 2);

        let dev = root.payload.get(&wired).unwrap();
        assert_eq!(dev.field("maker"), Some(&Param::Leaf(Value::String("GWF".into()))));
        assert_eq!(dev.field("serial"), Some(&Param::Leaf(Value::String("87654329".into()))));
        assert_eq!(dev.field("type"), Some(&Param::Leaf(Value::String("wired M-Bus".into()))));
        assert_eq!(dev.field("nr"), Some(&Param::Leaf(Value::U8(1))));
        assert_eq!(dev.get(&codes::SERVER_ID), Some(&Param::Leaf(Value::String("01-e61e-29436587-3c-07".into()))));
        assert_eq!(dev.get(&codes::DEVICE_CLASS), Some(&Param::Leaf(Value::U32(0))));

        let other = root.payload.get(&unknown).unwrap();
        assert_eq!(other.field("maker"), Some(&Param::Leaf(Value::String(String::new()))));
        assert_eq!(other.field("type"), None);
        assert_eq!(other.field("serial"), None);
        assert_eq!(other.get(&codes::SERVER_ID), Some(&Param::Leaf(Value::octets(&[0x09, 0x01, 0x02]))));
    }

    #[test]
    fn test_device_without_server_id_keeps_its_code() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);

        let level = ObisCode::new(0x81, 0x81, 0x10, 0x06, 0x01, 0xFF);
        let device = ObisCode::new(0x81, 0x81, 0x10, 0x06, 0x01, 0x01);
        let tree = node(&codes::ROOT_VISIBLE_DEVICES, vec![
            node(&level, vec![
                node(&device, vec![leaf(&codes::DEVICE_CLASS, Value::U8(3))]),
            ]),
        ]);

        let root = reader.read_param_tree(&tree).unwrap();
        let devices = root.payload.as_node().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(root.payload.get(&codes::DEVICE_CLASS), None);
        assert_eq!(root.payload.get(&level), None);

        let dev = root.payload.get(&device).unwrap();
        assert_eq!(dev.get(&codes::DEVICE_CLASS), Some(&Param::Leaf(Value::U32(3))));
        assert_eq!(dev.field("nr"), Some(&Param::Leaf(Value::U8(1))));
        assert_eq!(dev.field("maker"), Some(&Param::Leaf(Value::String(String::new()))));
        assert_eq!(dev.field("type"), None);
        assert_eq!(dev.get(&codes::SERVER_ID), None);
    }

    #[test]
    fn test_device_directly_below_root() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);

        let device = ObisCode::new(0x81, 0x81, 0x11, 0x06, 0x01, 0x02);
        let tree = node(&codes::ROOT_ACTIVE_DEVICES, vec![
            node(&device, vec![leaf(&codes::DEVICE_CLASS, Value::U8(1))]),
        ]);

        let root = reader.read_param_tree(&tree).unwrap();
        let dev = root.payload.get(&device).unwrap();
        assert_eq!(dev.field("nr"), Some(&Param::Leaf(Value::U8(2))));
        assert_eq!(dev.get(&codes::DEVICE_CLASS), Some(&Param::Leaf(Value::U32(1))));
    }

    #[test]
    fn test_device_nr_fallback() {
        assert_eq!(device_nr(&ObisCode::new(0x81, 0x81, 0x11, 0x06, 0x03, 0xFF)), 3);
        assert_eq!(device_nr(&ObisCode::new(0x81, 0x81, 0x11, 0x06, 0x03, 0x07)), 7);
    }

    #[test]
    fn test_serial_meter_list() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let entry = ObisCode::new(0x81, 0x81, 0xC7, 0x93, 0x09, 0x01);
        let tree = node(&codes::IF_1107_METER_LIST, vec![
            node(&entry, vec![
                leaf(&codes::IF_1107_METER_ID, Value::octets(b"MA105H2E")),
                leaf(&codes::IF_1107_BAUDRATE, Value::U16(9600)),
                leaf(&codes::IF_1107_ADDRESS, Value::octets(b"1")),
            ]),
        ]);

        let root = reader.read_param_tree(&tree).unwrap();
        let meter = root.payload.get(&entry).unwrap();
        assert_eq!(meter.field("nr"), Some(&Param::Leaf(Value::U8(1))));
        assert_eq!(meter.get(&codes::IF_1107_METER_ID), Some(&Param::Leaf(Value::String("MA105H2E".into()))));
        assert_eq!(meter.get(&codes::IF_1107_BAUDRATE), Some(&Param::Leaf(Value::U32(9600))));
        assert_eq!(meter.get(&codes::IF_1107_ADDRESS), Some(&Param::Leaf(Value::String("1".into()))));
    }
}
