use log::{debug, warn};

use super::customize::customize_value;
use super::devices::{collect_devices, collect_serial_devices};
use super::period::read_period_entry;
use super::structs::*;
use super::utils::{expect_arity, read_obis, read_time};
use super::SmlError;
use crate::config::DecoderConfig;
use crate::models::Value;
use crate::obis_utils::{codes, ObisCode};

/* Families whose entries only differ in the storage byte */
const INDEXED_FAMILIES: [[u8; 5]; 3] = [
    codes::PREFIX_IPT_PARAM,
    codes::PREFIX_ACTUATORS,
    codes::PREFIX_FIRMWARE,
];

const SECRETS: [ObisCode; 5] = [
    codes::DATA_PUBLIC_KEY,
    codes::DATA_AES_KEY,
    codes::ROOT_SENSOR_BITMASK,
    codes::DATA_USER_NAME,
    codes::DATA_USER_PWD,
];

/// SML_ProcParValue choice
#[derive(Debug, Clone, PartialEq)]
pub enum ProcParValue {
    Value(Value),
    Period(PeriodEntry),
    Tuple(Value),
    Time(Value),
}

/// Returns `None` when the choice holds no defined value
pub fn read_proc_par_value(value: &Value) -> Option<ProcParValue> {
    let fields = value.as_tuple()?;
    if fields.len() != 2 {
        return None;
    }

    match fields[0].as_u64()? {
        1 if fields[1].is_null() => None,
        1 => Some(ProcParValue::Value(fields[1].clone())),
        2 => read_period_entry(&fields[1]).ok().map(ProcParValue::Period),
        3 => fields[1].as_tuple().map(|_| ProcParValue::Tuple(fields[1].clone())),
        4 => read_time(&fields[1]).map(ProcParValue::Time),
        _ => None,
    }
}

pub struct TreeReader<'a> {
    config: &'a DecoderConfig,
}

impl<'a> TreeReader<'a> {
    pub fn new(config: &'a DecoderConfig) -> Self {
        Self { config }
    }

    /// Decodes one SML_Tree into `{ name: value }` or `{ name: { child: ... } }`
    pub fn read_param_tree(&self, value: &Value) -> Result<ParamNode, SmlError> {
        self.read_node(value, 0)
    }

    pub fn read_optional_tree(&self, value: &Value) -> Result<Option<ParamNode>, SmlError> {
        match value {
            Value::Null => Ok(None),
            v => self.read_param_tree(v).map(Some),
        }
    }

    pub(super) fn check_depth(&self, depth: usize) -> Result<(), SmlError> {
        if depth > self.config.max_depth {
            return Err(SmlError::TooDeep(self.config.max_depth));
        }
        Ok(())
    }

    pub(super) fn read_node(&self, value: &Value, depth: usize) -> Result<ParamNode, SmlError> {
        self.check_depth(depth)?;

        let fields = expect_arity(value, 3, "SML_Tree")?;
        let code = read_obis(&fields[0], "SML_Tree.parameterName")?;

        if let Some(ppv) = read_proc_par_value(&fields[1]) {
            let leaf = match ppv {
                ProcParValue::Value(v) | ProcParValue::Time(v) => customize_value(&code, v, 0),
                ProcParValue::Period(entry) => customize_value(&code, entry.raw, entry.scaler),
                ProcParValue::Tuple(v) => v,
            };
            return Ok(self.finish(code, Param::Leaf(leaf)));
        }

        let children = fields[2].as_tuple().ok_or(SmlError::EmptyParameter(code))?;
        let payload = if code == codes::ROOT_VISIBLE_DEVICES || code == codes::ROOT_ACTIVE_DEVICES {
            collect_devices(self, children, depth + 1)?
        } else if code == codes::IF_1107_METER_LIST {
            collect_serial_devices(self, children, depth + 1)?
        } else {
            Param::Node(self.read_children(children, depth + 1)?)
        };

        Ok(self.finish(code, payload))
    }

    /// Broken children are skipped, only a depth violation aborts the whole tree
    pub(super) fn read_children(&self, children: &[Value], depth: usize) -> Result<ParamMap, SmlError> {
        let mut map = ParamMap::new();
        for child in children {
            match self.read_node(child, depth) {
                Ok(node) => insert_unique(&mut map, ParamKey::Obis(node.name), node.payload),
                Err(e @ SmlError::TooDeep(_)) => return Err(e),
                Err(e) => warn!("Skipping parameter: {e}"),
            }
        }
        Ok(map)
    }

    fn finish(&self, code: ObisCode, mut payload: Param) -> ParamNode {
        if self.config.redact_secrets && SECRETS.contains(&code) {
            debug!("Blanking secret parameter {code}");
            payload = Param::Leaf(Value::String(String::new()));
        }

        if code.storage() != 0xFF && INDEXED_FAMILIES.iter().any(|p| code.starts_with(p)) {
            if let Param::Node(ref mut children) = payload {
                children.insert(ParamKey::Field("idx"), Param::Leaf(Value::U8(code.storage())));
            }
        }

        ParamNode::new(code, payload)
    }
}

pub(super) fn insert_unique(map: &mut ParamMap, key: ParamKey, payload: Param) {
    if map.contains_key(&key) {
        warn!("Duplicate parameter {key}, keeping the first one");
        return;
    }
    map.insert(key, payload);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn obis(code: &ObisCode) -> Value {
        Value::octets(code.as_bytes())
    }

    pub fn leaf(code: &ObisCode, value: Value) -> Value {
        Value::tuple(vec![obis(code), Value::tuple(vec![Value::U8(1), value]), Value::Null])
    }

    pub fn node(code: &ObisCode, children: Vec<Value>) -> Value {
        Value::tuple(vec![obis(code), Value::Null, Value::tuple(children)])
    }

    #[test]
    fn test_proc_par_value_tags() {
        let v = Value::tuple(vec![Value::U8(1), Value::U16(5)]);
        assert_eq!(read_proc_par_value(&v), Some(ProcParValue::Value(Value::U16(5))));

        let t = Value::tuple(vec![Value::U8(4), Value::tuple(vec![Value::U8(1), Value::U32(9)])]);
        assert_eq!(read_proc_par_value(&t), Some(ProcParValue::Time(Value::U32(9))));

        let tuple = Value::tuple(vec![Value::U8(3), Value::tuple(vec![Value::U8(0)])]);
        assert!(matches!(read_proc_par_value(&tuple), Some(ProcParValue::Tuple(_))));

        assert_eq!(read_proc_par_value(&Value::tuple(vec![Value::U8(1), Value::Null])), None);
        assert_eq!(read_proc_par_value(&Value::tuple(vec![Value::U8(9), Value::U8(1)])), None);
        assert_eq!(read_proc_par_value(&Value::tuple(vec![Value::U8(1)])), None);
        assert_eq!(read_proc_par_value(&Value::Null), None);
    }

    #[test]
    fn test_leaf_ignores_children() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let tree = Value::tuple(vec![
            obis(&codes::SERIAL_NR),
            Value::tuple(vec![Value::U8(1), Value::octets(&[0x01, 0x02, 0x03, 0x04])]),
            Value::tuple(vec![leaf(&codes::DEVICE_MODEL, Value::U8(1))]),
        ]);
        let node = reader.read_param_tree(&tree).unwrap();
        assert_eq!(node.payload, Param::Leaf(Value::String("04030201".to_string())));
    }

    #[test]
    fn test_nested_tree() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let tree = node(&codes::ROOT_DEVICE_IDENT, vec![
            leaf(&codes::DATA_MANUFACTURER, Value::octets(b"EMH")),
            leaf(&codes::DEVICE_MODEL, Value::U16(2)),
            node(&codes::ROOT_FIRMWARE, vec![]),
        ]);

        let node = reader.read_param_tree(&tree).unwrap();
        assert_eq!(node.name, codes::ROOT_DEVICE_IDENT);
        assert_eq!(node.annotation, Some("root-device-ident"));
        let children = node.payload.as_node().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(node.payload.get(&codes::DATA_MANUFACTURER), Some(&Param::Leaf(Value::String("EMH".into()))));
        assert_eq!(node.payload.get(&codes::DEVICE_MODEL), Some(&Param::Leaf(Value::U32(2))));
        assert_eq!(node.payload.get(&codes::ROOT_FIRMWARE), Some(&Param::Node(ParamMap::new())));
    }

    #[test]
    fn test_node_without_children_is_an_error() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let tree = Value::tuple(vec![obis(&codes::ROOT_LAN_DSL), Value::Null, Value::Null]);
        assert!(matches!(reader.read_param_tree(&tree), Err(SmlError::EmptyParameter(c)) if c == codes::ROOT_LAN_DSL));

        let short = Value::tuple(vec![obis(&codes::ROOT_LAN_DSL), Value::Null]);
        assert!(matches!(reader.read_param_tree(&short), Err(SmlError::ArityMismatch { actual: 2, .. })));

        let bad_name = leaf(&codes::ROOT_LAN_DSL, Value::U8(1));
        let mut fields = bad_name.as_tuple().unwrap().to_vec();
        fields[0] = Value::octets(&[1, 2, 3]);
        assert!(matches!(reader.read_param_tree(&Value::tuple(fields)), Err(SmlError::Obis(_))));
    }

    #[test]
    fn test_broken_children_are_skipped() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let tree = node(&codes::ROOT_LAN_DSL, vec![
            leaf(&codes::LAN_IP_ADDRESS, Value::U32(0x0100_A8C0)),
            Value::tuple(vec![Value::U8(1)]),
            leaf(&codes::LAN_IP_ADDRESS, Value::U32(0)),
        ]);
        let node = reader.read_param_tree(&tree).unwrap();
        let children = node.payload.as_node().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(
            node.payload.get(&codes::LAN_IP_ADDRESS),
            Some(&Param::Leaf(Value::String("192.168.0.1".into())))
        );
    }

    #[test]
    fn test_indexed_families_get_idx() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let entry = ObisCode::new(0x81, 0x49, 0x0D, 0x07, 0x00, 0x02);
        let tree = node(&codes::ROOT_IPT_PARAM, vec![
            node(&entry, vec![leaf(&ObisCode::new(0x81, 0x49, 0x17, 0x07, 0x00, 0x02), Value::octets(&[10, 0, 0, 1]))]),
        ]);
        let root = reader.read_param_tree(&tree).unwrap();
        assert_eq!(root.payload.field("idx"), None);

        let child = root.payload.get(&entry).unwrap();
        assert_eq!(child.field("idx"), Some(&Param::Leaf(Value::U8(2))));
        assert_eq!(
            child.get(&ObisCode::new(0x81, 0x49, 0x17, 0x07, 0x00, 0x02)),
            Some(&Param::Leaf(Value::String("10.0.0.1".into())))
        );
    }

    #[test]
    fn test_secrets_are_blanked() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        for code in SECRETS {
            let node = reader.read_param_tree(&leaf(&code, Value::octets(b"secret"))).unwrap();
            assert_eq!(node.payload, Param::Leaf(Value::String(String::new())), "{code}");
        }

        let plain = DecoderConfig { redact_secrets: false, ..DecoderConfig::default() };
        let reader = TreeReader::new(&plain);
        let node = reader.read_param_tree(&leaf(&codes::DATA_AES_KEY, Value::octets(b"k"))).unwrap();
        assert_eq!(node.payload, Param::Leaf(Value::octets(b"k")));
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let tree = node(&codes::ROOT_DEVICE_IDENT, vec![
            leaf(&codes::DEVICE_MODEL, Value::U8(1)),
            leaf(&codes::DEVICE_MODEL, Value::U8(2)),
        ]);
        let node = reader.read_param_tree(&tree).unwrap();
        assert_eq!(node.payload.get(&codes::DEVICE_MODEL), Some(&Param::Leaf(Value::U32(1))));
    }

    #[test]
    fn test_depth_limit() {
        let config = DecoderConfig { max_depth: 3, ..DecoderConfig::default() };
        let reader = TreeReader::new(&config);

        let mut tree = leaf(&codes::DEVICE_MODEL, Value::U8(1));
        for _ in 0..3 {
            tree = node(&codes::ROOT_DEVICE_IDENT, vec![tree]);
        }
        assert!(reader.read_param_tree(&tree).is_ok());

        tree = node(&codes::ROOT_DEVICE_IDENT, vec![tree]);
        assert!(matches!(reader.read_param_tree(&tree), Err(SmlError::TooDeep(3))));
    }

    #[test]
    fn test_every_node_is_leaf_or_children() {
        fn check(p: &Param) {
            match p {
                Param::Leaf(v) => assert!(!matches!(v, Value::Null | Value::Tuple(_)), "{v:?}"),
                Param::Node(children) => {
                    assert!(!children.is_empty());
                    children.values().for_each(check);
                }
            }
        }
        fn check_json(json: &serde_json::Value) {
            let map = json.as_object().unwrap();
            assert!(!map.is_empty());
            for (key, child) in map {
                assert!(crate::obis_utils::validate_obis_code(key), "{key}");
                if child.is_object() {
                    check_json(child);
                } else {
                    assert!(!child.is_null() && !child.is_array(), "{key}: {child}");
                }
            }
        }
        let config = DecoderConfig::default();
        let reader = TreeReader::new(&config);
        let tree = node(&codes::ROOT_SENSOR_PARAMS, vec![
            leaf(&codes::AVERAGE_TIME_MS, Value::U32(1000)),
            node(&codes::ROOT_DATA_COLLECTOR, vec![leaf(&codes::DATA_COLLECTOR_ACTIVE, Value::Bool(true))]),
        ]);
        let node = reader.read_param_tree(&tree).unwrap();
        check(&node.payload);
        let json = serde_json::to_value(&node).unwrap();
        check_json(&json);
        assert!(json["129-129:199.134.0.255"]["129-129:199.134.32.255"].is_object());
        assert_eq!(json["129-129:199.134.0.255"]["129-129:199.134.2.255"], 1000);
        assert_eq!(json["129-129:199.134.0.255"]["129-129:199.134.32.255"]["129-129:199.135.129.255"], true);
    }
}
