use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Octets, Value};
use crate::obis_utils::ObisCode;

// SML message type codes
pub const SML_OPEN_REQUEST: u16 = 0x0100;
pub const SML_OPEN_RESPONSE: u16 = 0x0101;
pub const SML_CLOSE_REQUEST: u16 = 0x0200;
pub const SML_CLOSE_RESPONSE: u16 = 0x0201;
pub const SML_GET_PROFILE_PACK_REQUEST: u16 = 0x0300;
pub const SML_GET_PROFILE_PACK_RESPONSE: u16 = 0x0301;
pub const SML_GET_PROFILE_LIST_REQUEST: u16 = 0x0400;
pub const SML_GET_PROFILE_LIST_RESPONSE: u16 = 0x0401;
pub const SML_GET_PROC_PARAMETER_REQUEST: u16 = 0x0500;
pub const SML_GET_PROC_PARAMETER_RESPONSE: u16 = 0x0501;
pub const SML_SET_PROC_PARAMETER_REQUEST: u16 = 0x0600;
pub const SML_SET_PROC_PARAMETER_RESPONSE: u16 = 0x0601;
pub const SML_GET_LIST_REQUEST: u16 = 0x0700;
pub const SML_GET_LIST_RESPONSE: u16 = 0x0701;
pub const SML_GET_COSEM_REQUEST: u16 = 0x0800;
pub const SML_GET_COSEM_RESPONSE: u16 = 0x0801;
pub const SML_SET_COSEM_REQUEST: u16 = 0x0900;
pub const SML_SET_COSEM_RESPONSE: u16 = 0x0901;
pub const SML_ACTION_COSEM_REQUEST: u16 = 0x0A00;
pub const SML_ACTION_COSEM_RESPONSE: u16 = 0x0A01;
pub const SML_ATTENTION_RESPONSE: u16 = 0xFF01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    OpenRequest,
    OpenResponse,
    CloseRequest,
    CloseResponse,
    GetProfilePackRequest,
    GetProfilePackResponse,
    GetProfileListRequest,
    GetProfileListResponse,
    GetProcParameterRequest,
    GetProcParameterResponse,
    SetProcParameterRequest,
    SetProcParameterResponse,
    GetListRequest,
    GetListResponse,
    GetCosemRequest,
    GetCosemResponse,
    SetCosemRequest,
    SetCosemResponse,
    ActionCosemRequest,
    ActionCosemResponse,
    AttentionResponse,
}

impl MessageType {
    pub fn from_code(code: u32) -> Option<Self> {
        let code = u16::try_from(code).ok()?;
        Some(match code {
            SML_OPEN_REQUEST => MessageType::OpenRequest,
            SML_OPEN_RESPONSE => MessageType::OpenResponse,
            SML_CLOSE_REQUEST => MessageType::CloseRequest,
            SML_CLOSE_RESPONSE => MessageType::CloseResponse,
            SML_GET_PROFILE_PACK_REQUEST => MessageType::GetProfilePackRequest,
            SML_GET_PROFILE_PACK_RESPONSE => MessageType::GetProfilePackResponse,
            SML_GET_PROFILE_LIST_REQUEST => MessageType::GetProfileListRequest,
            SML_GET_PROFILE_LIST_RESPONSE => MessageType::GetProfileListResponse,
            SML_GET_PROC_PARAMETER_REQUEST => MessageType::GetProcParameterRequest,
            SML_GET_PROC_PARAMETER_RESPONSE => MessageType::GetProcParameterResponse,
            SML_SET_PROC_PARAMETER_REQUEST => MessageType::SetProcParameterRequest,
            SML_SET_PROC_PARAMETER_RESPONSE => MessageType::SetProcParameterResponse,
            SML_GET_LIST_REQUEST => MessageType::GetListRequest,
            SML_GET_LIST_RESPONSE => MessageType::GetListResponse,
            SML_GET_COSEM_REQUEST => MessageType::GetCosemRequest,
            SML_GET_COSEM_RESPONSE => MessageType::GetCosemResponse,
            SML_SET_COSEM_REQUEST => MessageType::SetCosemRequest,
            SML_SET_COSEM_RESPONSE => MessageType::SetCosemResponse,
            SML_ACTION_COSEM_REQUEST => MessageType::ActionCosemRequest,
            SML_ACTION_COSEM_RESPONSE => MessageType::ActionCosemResponse,
            SML_ATTENTION_RESPONSE => MessageType::AttentionResponse,
            _ => return None,
        })
    }

    pub fn code(&self) -> u16 {
        match self {
            MessageType::OpenRequest => SML_OPEN_REQUEST,
            MessageType::OpenResponse => SML_OPEN_RESPONSE,
            MessageType::CloseRequest => SML_CLOSE_REQUEST,
            MessageType::CloseResponse => SML_CLOSE_RESPONSE,
            MessageType::GetProfilePackRequest => SML_GET_PROFILE_PACK_REQUEST,
            MessageType::GetProfilePackResponse => SML_GET_PROFILE_PACK_RESPONSE,
            MessageType::GetProfileListRequest => SML_GET_PROFILE_LIST_REQUEST,
            MessageType::GetProfileListResponse => SML_GET_PROFILE_LIST_RESPONSE,
            MessageType::GetProcParameterRequest => SML_GET_PROC_PARAMETER_REQUEST,
            MessageType::GetProcParameterResponse => SML_GET_PROC_PARAMETER_RESPONSE,
            MessageType::SetProcParameterRequest => SML_SET_PROC_PARAMETER_REQUEST,
            MessageType::SetProcParameterResponse => SML_SET_PROC_PARAMETER_RESPONSE,
            MessageType::GetListRequest => SML_GET_LIST_REQUEST,
            MessageType::GetListResponse => SML_GET_LIST_RESPONSE,
            MessageType::GetCosemRequest => SML_GET_COSEM_REQUEST,
            MessageType::GetCosemResponse => SML_GET_COSEM_RESPONSE,
            MessageType::SetCosemRequest => SML_SET_COSEM_REQUEST,
            MessageType::SetCosemResponse => SML_SET_COSEM_RESPONSE,
            MessageType::ActionCosemRequest => SML_ACTION_COSEM_REQUEST,
            MessageType::ActionCosemResponse => SML_ACTION_COSEM_RESPONSE,
            MessageType::AttentionResponse => SML_ATTENTION_RESPONSE,
        }
    }

    /// Number of fields of the message body
    pub fn arity(&self) -> usize {
        match self {
            MessageType::OpenRequest => 7,
            MessageType::OpenResponse => 6,
            MessageType::CloseRequest | MessageType::CloseResponse => 1,
            MessageType::GetProfilePackRequest => 9,
            MessageType::GetProfilePackResponse => 8,
            MessageType::GetProfileListRequest => 9,
            MessageType::GetProfileListResponse => 9,
            MessageType::GetProcParameterRequest => 5,
            MessageType::GetProcParameterResponse => 3,
            MessageType::SetProcParameterRequest => 5,
            MessageType::SetProcParameterResponse => 3,
            MessageType::GetListRequest => 5,
            MessageType::GetListResponse => 7,
            MessageType::GetCosemRequest | MessageType::SetCosemRequest => 8,
            MessageType::GetCosemResponse | MessageType::SetCosemResponse => 6,
            MessageType::ActionCosemRequest => 9,
            MessageType::ActionCosemResponse => 7,
            MessageType::AttentionResponse => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageType::OpenRequest => "OpenRequest",
            MessageType::OpenResponse => "OpenResponse",
            MessageType::CloseRequest => "CloseRequest",
            MessageType::CloseResponse => "CloseResponse",
            MessageType::GetProfilePackRequest => "GetProfilePackRequest",
            MessageType::GetProfilePackResponse => "GetProfilePackResponse",
            MessageType::GetProfileListRequest => "GetProfileListRequest",
            MessageType::GetProfileListResponse => "GetProfileListResponse",
            MessageType::GetProcParameterRequest => "GetProcParameterRequest",
            MessageType::GetProcParameterResponse => "GetProcParameterResponse",
            MessageType::SetProcParameterRequest => "SetProcParameterRequest",
            MessageType::SetProcParameterResponse => "SetProcParameterResponse",
            MessageType::GetListRequest => "GetListRequest",
            MessageType::GetListResponse => "GetListResponse",
            MessageType::GetCosemRequest => "GetCosemRequest",
            MessageType::GetCosemResponse => "GetCosemResponse",
            MessageType::SetCosemRequest => "SetCosemRequest",
            MessageType::SetCosemResponse => "SetCosemResponse",
            MessageType::ActionCosemRequest => "ActionCosemRequest",
            MessageType::ActionCosemResponse => "ActionCosemResponse",
            MessageType::AttentionResponse => "AttentionResponse",
        }
    }
}

// Parameter tree output

/// Key inside a decoded parameter map, either a child code or a synthetic field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKey {
    Obis(ObisCode),
    Field(&'static str),
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Obis(code) => write!(f, "{code}"),
            ParamKey::Field(name) => write!(f, "{name}"),
        }
    }
}

impl Serialize for ParamKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<ObisCode> for ParamKey {
    fn from(code: ObisCode) -> Self {
        ParamKey::Obis(code)
    }
}

pub type ParamMap = BTreeMap<ParamKey, Param>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Leaf(Value),
    Node(ParamMap),
}

impl Param {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Param::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Param::Leaf(v) => Some(v),
            Param::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&ParamMap> {
        match self {
            Param::Node(m) => Some(m),
            Param::Leaf(_) => None,
        }
    }

    pub fn get(&self, code: &ObisCode) -> Option<&Param> {
        self.as_node().and_then(|m| m.get(&ParamKey::Obis(*code)))
    }

    pub fn field(&self, name: &'static str) -> Option<&Param> {
        self.as_node().and_then(|m| m.get(&ParamKey::Field(name)))
    }
}

/// One decoded SML_Tree node, serialized as the record `{ name: payload }`
#[derive(Debug, Clone, PartialEq)]
pub struct ParamNode {
    pub name: ObisCode,
    pub payload: Param,
    /// Registry name of the code, if it has one
    pub annotation: Option<&'static str>,
}

impl ParamNode {
    pub fn new(name: ObisCode, payload: Param) -> Self {
        ParamNode { name, payload, annotation: name.name() }
    }

    pub fn into_record(self) -> ParamMap {
        let mut record = ParamMap::new();
        record.insert(ParamKey::Obis(self.name), self.payload);
        record
    }
}

impl Serialize for ParamNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.payload)?;
        map.end()
    }
}

// Readings

/// Value of a period or list entry after scaling, paired with its unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,
}

pub type Readings = BTreeMap<ObisCode, Reading>;

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodEntry {
    pub name: ObisCode,
    pub unit: u8,
    pub scaler: i8,
    pub raw: Value,
    pub value: Value,
    pub signature: Option<Octets>,
}

impl PeriodEntry {
    pub fn reading(&self) -> Reading {
        Reading {
            value: self.value.clone(),
            unit: get_sml_unit_name(self.unit),
            status: None,
            time: None,
        }
    }
}

/// One row of a profile pack, header codes already applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub time: Option<Value>,
    pub status: Option<u64>,
    pub readings: Readings,
    pub signature: Octets,
}

// Devices

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServerIdKind {
    #[serde(rename = "wired M-Bus")]
    MBusWired,
    #[serde(rename = "radio M-Bus")]
    MBusRadio,
    #[serde(rename = "wireless M-Bus")]
    WirelessMBus,
    #[serde(rename = "gateway")]
    Gateway,
    #[serde(rename = "other")]
    Other,
}

impl ServerIdKind {
    pub fn is_meter(&self) -> bool {
        matches!(self, ServerIdKind::MBusWired | ServerIdKind::MBusRadio | ServerIdKind::WirelessMBus)
    }
}

impl fmt::Display for ServerIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServerIdKind::MBusWired => "wired M-Bus",
            ServerIdKind::MBusRadio => "radio M-Bus",
            ServerIdKind::WirelessMBus => "wireless M-Bus",
            ServerIdKind::Gateway => "gateway",
            ServerIdKind::Other => "other",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDescriptor {
    pub code: ObisCode,
    pub server_id: Octets,
    pub kind: ServerIdKind,
    pub manufacturer: String,
    pub serial: String,
    pub medium: String,
    pub metering_code: String,
    pub params: ParamMap,
}

/// SML_Message header fields, echoed on every instruction of the message.
/// The CRC is carried as received, it covers the reassembled message bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub trx: Octets,
    pub group_no: u8,
    pub abort_on_error: u8,
    pub crc: Option<u16>,
}

// Instructions handed to downstream consumers

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "args")]
pub enum Instruction {
    #[serde(rename = "sml.public.open.request")]
    OpenRequest {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        req_file_id: String,
        user_name: String,
        password: String,
    },
    #[serde(rename = "sml.public.open.response")]
    OpenResponse {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        req_file_id: String,
        ref_time: Option<Value>,
        version: Option<u64>,
    },
    #[serde(rename = "sml.public.close.request")]
    CloseRequest { envelope: Envelope, signature: Octets },
    #[serde(rename = "sml.public.close.response")]
    CloseResponse { envelope: Envelope, signature: Octets },
    #[serde(rename = "sml.get.profile.pack.request")]
    GetProfilePackRequest {
        envelope: Envelope,
        server_id: Octets,
        user_name: String,
        password: String,
        with_rawdata: bool,
        begin: Option<Value>,
        end: Option<Value>,
        path: Vec<ObisCode>,
        objects: Vec<ObisCode>,
        details: Option<ParamNode>,
    },
    #[serde(rename = "sml.get.profile.pack.response")]
    GetProfilePackResponse {
        envelope: Envelope,
        server_id: Octets,
        act_time: Option<Value>,
        reg_period: u64,
        path: Vec<ObisCode>,
        rows: Vec<ProfileRow>,
        raw: Octets,
        signature: Octets,
    },
    #[serde(rename = "sml.get.profile.list.request")]
    GetProfileListRequest {
        envelope: Envelope,
        server_id: Octets,
        user_name: String,
        password: String,
        with_rawdata: bool,
        begin: Option<Value>,
        end: Option<Value>,
        path: Vec<ObisCode>,
        objects: Vec<ObisCode>,
        details: Option<ParamNode>,
    },
    #[serde(rename = "sml.get.profile.list.response")]
    GetProfileListResponse {
        envelope: Envelope,
        server_id: Octets,
        act_time: Option<Value>,
        reg_period: u64,
        path: Vec<ObisCode>,
        val_time: Option<Value>,
        status: u64,
        readings: Readings,
        raw: Octets,
        signature: Octets,
    },
    #[serde(rename = "sml.get.proc.param.request")]
    GetProcParameterRequest {
        envelope: Envelope,
        server_id: Octets,
        user_name: String,
        password: String,
        path: Vec<ObisCode>,
        attribute: Option<ObisCode>,
    },
    #[serde(rename = "sml.get.proc.param.response")]
    GetProcParameterResponse {
        envelope: Envelope,
        server_id: Octets,
        path: Vec<ObisCode>,
        parameter: ParamNode,
    },
    #[serde(rename = "sml.set.proc.param.request")]
    SetProcParameterRequest {
        envelope: Envelope,
        server_id: Octets,
        user_name: String,
        password: String,
        path: Vec<ObisCode>,
        parameter: ParamNode,
    },
    #[serde(rename = "sml.set.proc.param.response")]
    SetProcParameterResponse {
        envelope: Envelope,
        server_id: Octets,
        path: Vec<ObisCode>,
        parameter: ParamNode,
    },
    #[serde(rename = "sml.attention.ack")]
    AttentionAck {
        envelope: Envelope,
        server_id: Octets,
        code: ObisCode,
        message: String,
    },
    #[serde(rename = "sml.get.list.request")]
    GetListRequest {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        user_name: String,
        password: String,
        list_name: Option<ObisCode>,
    },
    #[serde(rename = "sml.get.list.response")]
    GetListResponse {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        list_name: Option<ObisCode>,
        act_sensor_time: Option<Value>,
        readings: Readings,
        signature: Octets,
        act_gateway_time: Option<Value>,
    },
    #[serde(rename = "sml.get.cosem.request")]
    GetCosemRequest {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        user_name: String,
        password: String,
        object: Octets,
        class_id: u64,
        class_version: u64,
        attributes: Value,
    },
    #[serde(rename = "sml.get.cosem.response")]
    GetCosemResponse {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        object: Octets,
        class_id: u64,
        class_version: u64,
        attributes: Value,
    },
    #[serde(rename = "sml.set.cosem.request")]
    SetCosemRequest {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        user_name: String,
        password: String,
        object: Octets,
        class_id: u64,
        class_version: u64,
        attributes: Value,
    },
    #[serde(rename = "sml.set.cosem.response")]
    SetCosemResponse {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        object: Octets,
        class_id: u64,
        class_version: u64,
        attributes: Value,
    },
    #[serde(rename = "sml.action.cosem.request")]
    ActionCosemRequest {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        user_name: String,
        password: String,
        object: Octets,
        class_id: u64,
        class_version: u64,
        method_id: u64,
        parameter: Value,
    },
    #[serde(rename = "sml.action.cosem.response")]
    ActionCosemResponse {
        envelope: Envelope,
        client_id: Octets,
        server_id: Octets,
        object: Octets,
        class_id: u64,
        class_version: u64,
        method_id: u64,
        result: Value,
    },
    #[serde(rename = "sml.attention.msg")]
    AttentionResponse {
        envelope: Envelope,
        server_id: Octets,
        code: ObisCode,
        description: Option<&'static str>,
        message: String,
        details: Option<ParamNode>,
    },
    #[serde(rename = "sml.decode.error")]
    DecodeError {
        envelope: Envelope,
        context: String,
        reason: String,
    },
}

impl Instruction {
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::OpenRequest { .. } => "sml.public.open.request",
            Instruction::OpenResponse { .. } => "sml.public.open.response",
            Instruction::CloseRequest { .. } => "sml.public.close.request",
            Instruction::CloseResponse { .. } => "sml.public.close.response",
            Instruction::GetProfilePackRequest { .. } => "sml.get.profile.pack.request",
            Instruction::GetProfilePackResponse { .. } => "sml.get.profile.pack.response",
            Instruction::GetProfileListRequest { .. } => "sml.get.profile.list.request",
            Instruction::GetProfileListResponse { .. } => "sml.get.profile.list.response",
            Instruction::GetProcParameterRequest { .. } => "sml.get.proc.param.request",
            Instruction::GetProcParameterResponse { .. } => "sml.get.proc.param.response",
            Instruction::SetProcParameterRequest { .. } => "sml.set.proc.param.request",
            Instruction::SetProcParameterResponse { .. } => "sml.set.proc.param.response",
            Instruction::AttentionAck { .. } => "sml.attention.ack",
            Instruction::GetListRequest { .. } => "sml.get.list.request",
            Instruction::GetListResponse { .. } => "sml.get.list.response",
            Instruction::GetCosemRequest { .. } => "sml.get.cosem.request",
            Instruction::GetCosemResponse { .. } => "sml.get.cosem.response",
            Instruction::SetCosemRequest { .. } => "sml.set.cosem.request",
            Instruction::SetCosemResponse { .. } => "sml.set.cosem.response",
            Instruction::ActionCosemRequest { .. } => "sml.action.cosem.request",
            Instruction::ActionCosemResponse { .. } => "sml.action.cosem.response",
            Instruction::AttentionResponse { .. } => "sml.attention.msg",
            Instruction::DecodeError { .. } => "sml.decode.error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Instruction::DecodeError { .. })
    }
}

/// Per message accumulator, owned by a single decode call
#[derive(Debug, Clone, Default)]
pub struct Readout {
    pub envelope: Envelope,
    pub client_id: Octets,
    pub server_id: Octets,
    pub message_type: Option<MessageType>,
}

impl Readout {
    pub fn new() -> Self {
        Self::default()
    }
}

// Unit mappings for SML values (IEC 62056-62)
pub fn get_sml_unit_name(unit_code: u8) -> Option<&'static str> {
    match unit_code {
        1 => Some("a"),      // year
        2 => Some("mo"),     // month
        3 => Some("wk"),     // week
        4 => Some("d"),      // day
        5 => Some("h"),      // hour
        6 => Some("min"),    // minute
        7 => Some("s"),      // second
        8 => Some("°"),      // degree
        9 => Some("°C"),     // degree celsius
        10 => Some("currency"),
        11 => Some("m"),     // meter
        12 => Some("m/s"),   // meter per second
        13 => Some("m³"),    // cubic meter
        14 => Some("m³"),    // corrected cubic meter
        15 => Some("m³/h"),  // cubic meter per hour
        16 => Some("m³/h"),  // corrected cubic meter per hour
        17 => Some("m³/d"),  // cubic meter per day
        18 => Some("m³/d"),  // corrected cubic meter per day
        19 => Some("l"),     // liter
        20 => Some("kg"),    // kilogram
        21 => Some("N"),     // newton
        22 => Some("Nm"),    // newton meter
        23 => Some("Pa"),    // pascal
        24 => Some("bar"),   // bar
        25 => Some("J"),     // joule
        26 => Some("J/h"),   // joule per hour
        27 => Some("W"),     // watt
        28 => Some("VA"),    // volt ampere
        29 => Some("var"),   // volt ampere reactive
        30 => Some("Wh"),    // watt hour
        31 => Some("VAh"),   // volt ampere hour
        32 => Some("varh"),  // volt ampere reactive hour
        33 => Some("A"),     // ampere
        34 => Some("C"),     // coulomb
        35 => Some("V"),     // volt
        36 => Some("V/m"),   // volt per meter
        37 => Some("F"),     // farad
        38 => Some("Ω"),     // ohm
        39 => Some("Ωm²/m"), // resistivity
        40 => Some("Wb"),    // weber
        41 => Some("T"),     // tesla
        42 => Some("A/m"),   // ampere per meter
        43 => Some("H"),     // henry
        44 => Some("Hz"),    // hertz
        45 => Some("1/(Wh)"),
        46 => Some("1/(varh)"),
        47 => Some("1/(VAh)"),
        48 => Some("V²h"),
        49 => Some("A²h"),
        50 => Some("kg/s"),
        51 => Some("S"),     // siemens
        52 => Some("K"),     // kelvin
        53 => Some("1/(V²h)"),
        54 => Some("1/(A²h)"),
        55 => Some("1/m³"),
        56 => Some("%"),     // percentage
        57 => Some("Ah"),    // ampere hour
        60 => Some("Wh/m³"),
        61 => Some("J/m³"),
        62 => Some("Mol %"),
        63 => Some("g/m³"),
        64 => Some("Pa s"),
        65 => Some("J/kg"),
        70 => Some("dBm"),
        71 => Some("dBµV"),
        72 => Some("dB"),
        253 => Some("reserved"),
        254 => Some("other"),
        255 => Some("count"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obis_utils::codes;

    #[test]
    fn test_message_type_codes() {
        assert_eq!(MessageType::from_code(0x0701), Some(MessageType::GetListResponse));
        assert_eq!(MessageType::from_code(0xFF01), Some(MessageType::AttentionResponse));
        assert_eq!(MessageType::from_code(0x0601).map(|t| t.arity()), Some(3));
        assert_eq!(MessageType::from_code(0x1234), None);
        assert_eq!(MessageType::from_code(0x0001_0100), None);
        assert_eq!(MessageType::OpenRequest.code(), 0x0100);
        assert_eq!(MessageType::OpenRequest.arity(), 7);
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(get_sml_unit_name(27), Some("W"));
        assert_eq!(get_sml_unit_name(30), Some("Wh"));
        assert_eq!(get_sml_unit_name(35), Some("V"));
        assert_eq!(get_sml_unit_name(0), None);
    }

    #[test]
    fn test_param_node_record() {
        let mut children = ParamMap::new();
        children.insert(ParamKey::Obis(codes::DATA_MANUFACTURER), Param::Leaf(Value::String("EMH".into())));
        children.insert(ParamKey::Field("idx"), Param::Leaf(Value::U8(1)));
        let node = ParamNode::new(codes::ROOT_DEVICE_IDENT, Param::Node(children));
        assert_eq!(node.annotation, Some("root-device-ident"));

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["129-129:199.130.1.255"]["129-129:199.130.3.255"], "EMH");
        assert_eq!(json["129-129:199.130.1.255"]["idx"], 1);
        assert!(!node.payload.is_leaf());
        assert_eq!(
            node.payload.get(&codes::DATA_MANUFACTURER).and_then(Param::as_leaf),
            Some(&Value::String("EMH".into()))
        );
        assert_eq!(node.into_record().len(), 1);
    }

    #[test]
    fn test_instruction_names_match_serialization() {
        let envelope = Envelope { trx: Octets(vec![0xFF, 0x01]), group_no: 2, abort_on_error: 1, crc: Some(0xBEEF) };
        let ins = Instruction::CloseResponse { envelope, signature: Octets::default() };
        let json = serde_json::to_value(&ins).unwrap();
        assert_eq!(json["name"], ins.name());
        assert_eq!(json["args"]["envelope"]["trx"], "ff01");
        assert_eq!(json["args"]["envelope"]["group_no"], 2);
        assert_eq!(json["args"]["envelope"]["abort_on_error"], 1);
        assert_eq!(json["args"]["envelope"]["crc"], 0xBEEF);
    }
}
