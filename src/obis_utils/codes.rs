use super::ObisCode;

macro_rules! obis {
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr) => {
        ObisCode::new($a, $b, $c, $d, $e, $f)
    };
}

/* Electricity readings */
pub const ACTIVE_ENERGY_PLUS: ObisCode = obis!(0x01, 0x00, 0x01, 0x08, 0x00, 0xFF);
pub const ACTIVE_ENERGY_PLUS_T1: ObisCode = obis!(0x01, 0x00, 0x01, 0x08, 0x01, 0xFF);
pub const ACTIVE_ENERGY_PLUS_T2: ObisCode = obis!(0x01, 0x00, 0x01, 0x08, 0x02, 0xFF);
pub const ACTIVE_ENERGY_MINUS: ObisCode = obis!(0x01, 0x00, 0x02, 0x08, 0x00, 0xFF);
pub const ACTIVE_ENERGY_MINUS_T1: ObisCode = obis!(0x01, 0x00, 0x02, 0x08, 0x01, 0xFF);
pub const ACTIVE_ENERGY_MINUS_T2: ObisCode = obis!(0x01, 0x00, 0x02, 0x08, 0x02, 0xFF);
pub const REACTIVE_ENERGY_PLUS: ObisCode = obis!(0x01, 0x00, 0x03, 0x08, 0x00, 0xFF);
pub const REACTIVE_ENERGY_MINUS: ObisCode = obis!(0x01, 0x00, 0x04, 0x08, 0x00, 0xFF);
pub const ACTIVE_POWER: ObisCode = obis!(0x01, 0x00, 0x10, 0x07, 0x00, 0xFF);
pub const ACTIVE_POWER_L1: ObisCode = obis!(0x01, 0x00, 0x24, 0x07, 0x00, 0xFF);
pub const ACTIVE_POWER_L2: ObisCode = obis!(0x01, 0x00, 0x38, 0x07, 0x00, 0xFF);
pub const ACTIVE_POWER_L3: ObisCode = obis!(0x01, 0x00, 0x4C, 0x07, 0x00, 0xFF);
pub const VOLTAGE_L1: ObisCode = obis!(0x01, 0x00, 0x20, 0x07, 0x00, 0xFF);
pub const VOLTAGE_L2: ObisCode = obis!(0x01, 0x00, 0x34, 0x07, 0x00, 0xFF);
pub const VOLTAGE_L3: ObisCode = obis!(0x01, 0x00, 0x48, 0x07, 0x00, 0xFF);
pub const CURRENT_L1: ObisCode = obis!(0x01, 0x00, 0x1F, 0x07, 0x00, 0xFF);
pub const CURRENT_L2: ObisCode = obis!(0x01, 0x00, 0x33, 0x07, 0x00, 0xFF);
pub const CURRENT_L3: ObisCode = obis!(0x01, 0x00, 0x47, 0x07, 0x00, 0xFF);
pub const FREQUENCY: ObisCode = obis!(0x01, 0x00, 0x0E, 0x07, 0x00, 0xFF);
pub const POWER_FACTOR: ObisCode = obis!(0x01, 0x00, 0x0D, 0x07, 0x00, 0xFF);

/* Time and identification */
pub const CURRENT_UTC: ObisCode = obis!(0x01, 0x00, 0x00, 0x09, 0x0B, 0x00);
pub const ACT_SENSOR_TIME: ObisCode = obis!(0x01, 0x00, 0x00, 0x09, 0x0B, 0xFF);
pub const SERIAL_NR: ObisCode = obis!(0x01, 0x00, 0x00, 0x00, 0x09, 0xFF);
pub const SERIAL_NR_SECOND: ObisCode = obis!(0x01, 0x00, 0x60, 0x01, 0x00, 0xFF);
pub const DEVICE_ID: ObisCode = obis!(0x01, 0x00, 0x00, 0x00, 0x00, 0xFF);
pub const FIRMWARE_VERSION: ObisCode = obis!(0x81, 0x81, 0x00, 0x02, 0x00, 0x00);
pub const FIRMWARE_CHECKSUM: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x0E, 0xFF);

/* Device identification */
pub const ROOT_DEVICE_IDENT: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x01, 0xFF);
pub const DEVICE_CLASS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x02, 0xFF);
pub const DATA_MANUFACTURER: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x03, 0xFF);
pub const SERVER_ID: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x04, 0xFF);
pub const DATA_PUBLIC_KEY: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x05, 0xFF);
pub const ROOT_FIRMWARE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x06, 0xFF);
pub const FIRMWARE_ENTRY: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x07, 0x01);
pub const DEVICE_KERNEL: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x08, 0xFF);
pub const DEVICE_MODEL: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x09, 0xFF);
pub const DATA_USER_NAME: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x0A, 0x01);
pub const DATA_USER_PWD: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x0A, 0x02);
pub const ROOT_FILE_TRANSFER: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x0B, 0xFF);
pub const HARDWARE_VERSION: ObisCode = obis!(0x81, 0x81, 0xC7, 0x82, 0x0C, 0xFF);
pub const ROOT_DEVICE_TIME: ObisCode = obis!(0x81, 0x81, 0xC7, 0x88, 0x01, 0xFF);

/* Device lists */
pub const ROOT_NEW_DEVICES: ObisCode = obis!(0x81, 0x81, 0x0E, 0x06, 0xFF, 0xFF);
pub const ROOT_INVISIBLE_DEVICES: ObisCode = obis!(0x81, 0x81, 0x0F, 0x06, 0xFF, 0xFF);
pub const ROOT_VISIBLE_DEVICES: ObisCode = obis!(0x81, 0x81, 0x10, 0x06, 0xFF, 0xFF);
pub const ROOT_ACTIVE_DEVICES: ObisCode = obis!(0x81, 0x81, 0x11, 0x06, 0xFF, 0xFF);
pub const ROOT_DEVICE_INFO: ObisCode = obis!(0x81, 0x81, 0x12, 0x06, 0xFF, 0xFF);
pub const DEVICE_LAST_SEEN: ObisCode = obis!(0x81, 0x81, 0x00, 0x03, 0x74, 0xFF);

/* Sensor parameters and data collectors */
pub const ROOT_SENSOR_PARAMS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x00, 0xFF);
pub const ROOT_SENSOR_BITMASK: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x01, 0xFF);
pub const AVERAGE_TIME_MS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x02, 0xFF);
pub const DATA_AES_KEY: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x03, 0xFF);
pub const TIME_REFERENCE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x04, 0xFF);
pub const ROOT_DATA_COLLECTOR: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x20, 0xFF);
pub const DATA_COLLECTOR_ACTIVE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x87, 0x81, 0xFF);
pub const DATA_COLLECTOR_SIZE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x87, 0x82, 0xFF);
pub const DATA_REGISTER_PERIOD: ObisCode = obis!(0x81, 0x81, 0xC7, 0x87, 0x83, 0xFF);

/* Load profiles */
pub const PROFILE_1_MINUTE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x10, 0xFF);
pub const PROFILE_15_MINUTE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x11, 0xFF);
pub const PROFILE_60_MINUTE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x12, 0xFF);
pub const PROFILE_24_HOUR: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x13, 0xFF);
pub const PROFILE_LAST_2_HOURS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x14, 0xFF);
pub const PROFILE_LAST_WEEK: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x15, 0xFF);
pub const PROFILE_1_MONTH: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x16, 0xFF);
pub const PROFILE_1_YEAR: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x17, 0xFF);
pub const PROFILE_INITIAL: ObisCode = obis!(0x81, 0x81, 0xC7, 0x86, 0x18, 0xFF);

pub const PROFILES: [ObisCode; 9] = [
    PROFILE_1_MINUTE,
    PROFILE_15_MINUTE,
    PROFILE_60_MINUTE,
    PROFILE_24_HOUR,
    PROFILE_LAST_2_HOURS,
    PROFILE_LAST_WEEK,
    PROFILE_1_MONTH,
    PROFILE_1_YEAR,
    PROFILE_INITIAL,
];

/* Push operations */
pub const ROOT_PUSH_OPERATIONS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x01, 0xFF);
pub const PUSH_INTERVAL: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x02, 0xFF);
pub const PUSH_DELAY: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x03, 0xFF);
pub const PUSH_SOURCE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x04, 0xFF);
pub const PUSH_SERVICE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x21, 0xFF);
pub const PUSH_SERVICE_IPT: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x22, 0xFF);
pub const PUSH_SERVICE_SML: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x23, 0xFF);
pub const PUSH_SOURCE_PROFILE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x42, 0xFF);
pub const PUSH_SOURCE_INSTALL: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x43, 0xFF);
pub const PUSH_SOURCE_VISIBLE_SENSORS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x44, 0xFF);
pub const PUSH_SOURCE_ACTIVE_SENSORS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x45, 0xFF);
pub const PUSH_SERVER_ID: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x81, 0xFF);
pub const PUSH_IDENTIFIERS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x82, 0xFF);
pub const PUSH_DETAILS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x8A, 0x83, 0xFF);
pub const PUSH_TARGET: ObisCode = obis!(0x81, 0x47, 0x17, 0x07, 0x00, 0xFF);

/* Operation log */
pub const CLASS_OP_LOG: ObisCode = obis!(0x81, 0x81, 0xC7, 0x89, 0xE1, 0xFF);
pub const CLASS_EVENT: ObisCode = obis!(0x81, 0x81, 0xC7, 0x89, 0xE2, 0xFF);
pub const PEER_ADDRESS: ObisCode = obis!(0x81, 0x81, 0x00, 0x00, 0x00, 0x01);
pub const OP_LOG_STATUS_WORD: ObisCode = obis!(0x81, 0x00, 0x60, 0x05, 0x00, 0x00);
pub const OP_LOG_FIELD_STRENGTH: ObisCode = obis!(0x81, 0x04, 0x2B, 0x07, 0x00, 0x00);
pub const OP_LOG_CELL: ObisCode = obis!(0x81, 0x04, 0x1A, 0x07, 0x00, 0x00);
pub const OP_LOG_AREA_CODE: ObisCode = obis!(0x81, 0x04, 0x17, 0x07, 0x00, 0x00);
pub const OP_LOG_PROVIDER: ObisCode = obis!(0x81, 0x04, 0x0D, 0x06, 0x00, 0x00);
pub const MBUS_STATE: ObisCode = obis!(0x00, 0xB0, 0x00, 0x02, 0x00, 0xFF);

/* IP-T */
pub const ROOT_IPT_STATE: ObisCode = obis!(0x81, 0x49, 0x0D, 0x06, 0x00, 0xFF);
pub const ROOT_IPT_PARAM: ObisCode = obis!(0x81, 0x49, 0x0D, 0x07, 0x00, 0xFF);
pub const IPT_TARGET_ADDRESS: ObisCode = obis!(0x81, 0x49, 0x17, 0x07, 0x00, 0x00);
pub const IPT_SOURCE_PORT: ObisCode = obis!(0x81, 0x49, 0x19, 0x07, 0x00, 0x00);
pub const IPT_TARGET_PORT: ObisCode = obis!(0x81, 0x49, 0x1A, 0x07, 0x00, 0x00);
pub const IPT_ACCOUNT: ObisCode = obis!(0x81, 0x49, 0x63, 0x3C, 0x01, 0x00);
pub const IPT_PASSWORD: ObisCode = obis!(0x81, 0x49, 0x63, 0x3C, 0x02, 0x00);
pub const TCP_WAIT_TO_RECONNECT: ObisCode = obis!(0x81, 0x48, 0x27, 0x32, 0x06, 0x01);
pub const TCP_CONNECT_RETRIES: ObisCode = obis!(0x81, 0x48, 0x31, 0x32, 0x02, 0x01);

/* LAN / DSL */
pub const ROOT_LAN_DSL: ObisCode = obis!(0x81, 0x48, 0x0D, 0x06, 0x00, 0xFF);
pub const LAN_IP_ADDRESS: ObisCode = obis!(0x81, 0x48, 0x17, 0x07, 0x00, 0x00);
pub const LAN_SUBNET_MASK: ObisCode = obis!(0x81, 0x48, 0x17, 0x07, 0x01, 0x00);
pub const LAN_GATEWAY: ObisCode = obis!(0x81, 0x48, 0x17, 0x07, 0x02, 0x00);
pub const LAN_DNS_PRIMARY: ObisCode = obis!(0x81, 0x48, 0x17, 0x07, 0x04, 0x00);
pub const LAN_DNS_SECONDARY: ObisCode = obis!(0x81, 0x48, 0x17, 0x07, 0x05, 0x00);
pub const LAN_DNS_TERTIARY: ObisCode = obis!(0x81, 0x48, 0x17, 0x07, 0x06, 0x00);

/* Wireless M-Bus adapter */
pub const ROOT_W_MBUS_STATUS: ObisCode = obis!(0x81, 0x06, 0x0F, 0x06, 0x00, 0xFF);
pub const W_MBUS_ADAPTER_MANUFACTURER: ObisCode = obis!(0x81, 0x06, 0x00, 0x00, 0x01, 0x00);
pub const W_MBUS_ADAPTER_ID: ObisCode = obis!(0x81, 0x06, 0x00, 0x00, 0x03, 0x00);
pub const W_MBUS_FIRMWARE: ObisCode = obis!(0x81, 0x06, 0x00, 0x02, 0x00, 0x00);
pub const W_MBUS_HARDWARE: ObisCode = obis!(0x81, 0x06, 0x00, 0x02, 0x03, 0xFF);
pub const W_MBUS_FIELD_STRENGTH: ObisCode = obis!(0x81, 0x06, 0x2B, 0x07, 0x00, 0x00);
pub const W_MBUS_LAST_RECEPTION: ObisCode = obis!(0x81, 0x06, 0x00, 0x03, 0x74, 0x00);
pub const IF_W_MBUS: ObisCode = obis!(0x81, 0x06, 0x19, 0x07, 0x00, 0xFF);
pub const W_MBUS_PROTOCOL: ObisCode = obis!(0x81, 0x06, 0x19, 0x07, 0x01, 0xFF);
pub const W_MBUS_MODE_S: ObisCode = obis!(0x81, 0x06, 0x19, 0x07, 0x02, 0xFF);
pub const W_MBUS_MODE_T: ObisCode = obis!(0x81, 0x06, 0x19, 0x07, 0x03, 0xFF);
pub const W_MBUS_POWER: ObisCode = obis!(0x81, 0x06, 0x19, 0x07, 0x04, 0xFF);
pub const W_MBUS_INSTALL_MODE: ObisCode = obis!(0x81, 0x06, 0x19, 0x07, 0x11, 0xFF);
pub const W_MBUS_REBOOT: ObisCode = obis!(0x81, 0x06, 0x27, 0x32, 0x03, 0x01);

/* Wired M-Bus interface */
pub const IF_MBUS: ObisCode = obis!(0x00, 0xB0, 0x00, 0x00, 0x00, 0xFF);
pub const MBUS_RO_INTERVAL: ObisCode = obis!(0x00, 0xB0, 0x00, 0x02, 0x00, 0x01);
pub const MBUS_SEARCH_INTERVAL: ObisCode = obis!(0x00, 0xB0, 0x00, 0x02, 0x00, 0x02);
pub const MBUS_SEARCH_DEVICE: ObisCode = obis!(0x00, 0xB0, 0x00, 0x02, 0x00, 0x03);

/* IEC 62056-21 (IEC-1107) interface */
pub const ROOT_IF_1107: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x00, 0xFF);
pub const IF_1107_ACTIVE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x01, 0xFF);
pub const IF_1107_LOOP_TIME: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x02, 0xFF);
pub const IF_1107_RETRIES: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x03, 0xFF);
pub const IF_1107_MIN_TIMEOUT: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x04, 0xFF);
pub const IF_1107_MAX_TIMEOUT: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x05, 0xFF);
pub const IF_1107_MAX_DATA_RATE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x06, 0xFF);
pub const IF_1107_RS485: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x07, 0xFF);
pub const IF_1107_PROTOCOL_MODE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x08, 0xFF);
pub const IF_1107_METER_LIST: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x09, 0xFF);
pub const IF_1107_METER_ID: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x0A, 0xFF);
pub const IF_1107_BAUDRATE: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x0B, 0xFF);
pub const IF_1107_ADDRESS: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x0C, 0xFF);
pub const IF_1107_P1: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x0D, 0xFF);
pub const IF_1107_W5: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x0E, 0xFF);
pub const IF_1107_AUTO_ACTIVATION: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x10, 0xFF);
pub const IF_1107_TIME_GRID: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x11, 0xFF);
pub const IF_1107_TIME_SYNC: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x13, 0xFF);
pub const IF_1107_MAX_VARIATION: ObisCode = obis!(0x81, 0x81, 0xC7, 0x93, 0x14, 0xFF);

/* Actuators */
pub const ROOT_ACTUATORS: ObisCode = obis!(0x00, 0x80, 0x80, 0x11, 0x00, 0xFF);
pub const ACTUATOR_ENTRY: ObisCode = obis!(0x00, 0x80, 0x80, 0x11, 0x01, 0x01);

/* Attention codes */
pub const ATTENTION_OK: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFD, 0x00);
pub const ATTENTION_JOB_IS_RUNNING: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFD, 0x01);
pub const ATTENTION_UNKNOWN_ERROR: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x00);
pub const ATTENTION_UNKNOWN_SML_ID: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x01);
pub const ATTENTION_NOT_AUTHORIZED: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x02);
pub const ATTENTION_NO_SERVER_ID: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x03);
pub const ATTENTION_NO_REQ_FIELD: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x04);
pub const ATTENTION_CANNOT_WRITE: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x05);
pub const ATTENTION_CANNOT_READ: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x06);
pub const ATTENTION_COMM_ERROR: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x07);
pub const ATTENTION_PARSER_ERROR: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x08);
pub const ATTENTION_OUT_OF_RANGE: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x09);
pub const ATTENTION_NOT_EXECUTED: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x0A);
pub const ATTENTION_INVALID_CRC: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x0B);
pub const ATTENTION_NO_BROADCAST: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x0C);
pub const ATTENTION_UNEXPECTED_MSG: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x0D);
pub const ATTENTION_UNKNOWN_OBIS_CODE: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x0E);
pub const ATTENTION_UNSUPPORTED_DATA_TYPE: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x0F);
pub const ATTENTION_ELEMENT_NOT_OPTIONAL: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x10);
pub const ATTENTION_NO_ENTRIES: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x11);
pub const ATTENTION_END_LIMIT_BEFORE_START: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x12);
pub const ATTENTION_NO_ENTRIES_IN_RANGE: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x13);
pub const ATTENTION_MISSING_CLOSE_MSG: ObisCode = obis!(0x81, 0x81, 0xC7, 0xC7, 0xFE, 0x14);

/* 5 byte prefixes of indexed code families, the sixth byte counts the entries */
pub const PREFIX_IPT_PARAM: [u8; 5] = [0x81, 0x49, 0x0D, 0x07, 0x00];
pub const PREFIX_IPT_TARGET_ADDRESS: [u8; 5] = [0x81, 0x49, 0x17, 0x07, 0x00];
pub const PREFIX_IPT_SOURCE_PORT: [u8; 5] = [0x81, 0x49, 0x19, 0x07, 0x00];
pub const PREFIX_IPT_TARGET_PORT: [u8; 5] = [0x81, 0x49, 0x1A, 0x07, 0x00];
pub const PREFIX_IPT_ACCOUNT: [u8; 5] = [0x81, 0x49, 0x63, 0x3C, 0x01];
pub const PREFIX_IPT_PASSWORD: [u8; 5] = [0x81, 0x49, 0x63, 0x3C, 0x02];
pub const PREFIX_ACTUATORS: [u8; 5] = [0x00, 0x80, 0x80, 0x11, 0x01];
pub const PREFIX_FIRMWARE: [u8; 5] = [0x81, 0x81, 0xC7, 0x82, 0x07];
pub const PREFIX_PUSH_OPERATIONS: [u8; 5] = [0x81, 0x81, 0xC7, 0x8A, 0x01];
pub const PREFIX_1107_METER: [u8; 5] = [0x81, 0x81, 0xC7, 0x93, 0x09];

pub const FAMILIES: &[([u8; 5], &str)] = &[
    (PREFIX_IPT_PARAM, "ipt-param"),
    (PREFIX_IPT_TARGET_ADDRESS, "ipt-target-address"),
    (PREFIX_IPT_SOURCE_PORT, "ipt-source-port"),
    (PREFIX_IPT_TARGET_PORT, "ipt-target-port"),
    (PREFIX_IPT_ACCOUNT, "ipt-account"),
    (PREFIX_IPT_PASSWORD, "ipt-password"),
    (PREFIX_ACTUATORS, "actuator"),
    (PREFIX_FIRMWARE, "firmware"),
    (PREFIX_PUSH_OPERATIONS, "push-operation"),
    (PREFIX_1107_METER, "iec-1107-meter"),
];

pub const DEFINITIONS: &[(ObisCode, &str)] = &[
    (ACTIVE_ENERGY_PLUS, "active-energy-plus"),
    (ACTIVE_ENERGY_PLUS_T1, "active-energy-plus-tariff-1"),
    (ACTIVE_ENERGY_PLUS_T2, "active-energy-plus-tariff-2"),
    (ACTIVE_ENERGY_MINUS, "active-energy-minus"),
    (ACTIVE_ENERGY_MINUS_T1, "active-energy-minus-tariff-1"),
    (ACTIVE_ENERGY_MINUS_T2, "active-energy-minus-tariff-2"),
    (REACTIVE_ENERGY_PLUS, "reactive-energy-plus"),
    (REACTIVE_ENERGY_MINUS, "reactive-energy-minus"),
    (ACTIVE_POWER, "active-power"),
    (ACTIVE_POWER_L1, "active-power-l1"),
    (ACTIVE_POWER_L2, "active-power-l2"),
    (ACTIVE_POWER_L3, "active-power-l3"),
    (VOLTAGE_L1, "voltage-l1"),
    (VOLTAGE_L2, "voltage-l2"),
    (VOLTAGE_L3, "voltage-l3"),
    (CURRENT_L1, "current-l1"),
    (CURRENT_L2, "current-l2"),
    (CURRENT_L3, "current-l3"),
    (FREQUENCY, "frequency"),
    (POWER_FACTOR, "power-factor"),
    (CURRENT_UTC, "current-utc"),
    (ACT_SENSOR_TIME, "act-sensor-time"),
    (SERIAL_NR, "serial-nr"),
    (SERIAL_NR_SECOND, "serial-nr-second"),
    (DEVICE_ID, "device-id"),
    (FIRMWARE_VERSION, "firmware-version"),
    (FIRMWARE_CHECKSUM, "firmware-checksum"),
    (ROOT_DEVICE_IDENT, "root-device-ident"),
    (DEVICE_CLASS, "device-class"),
    (DATA_MANUFACTURER, "data-manufacturer"),
    (SERVER_ID, "server-id"),
    (DATA_PUBLIC_KEY, "data-public-key"),
    (ROOT_FIRMWARE, "root-firmware"),
    (DEVICE_KERNEL, "device-kernel"),
    (DEVICE_MODEL, "device-model"),
    (DATA_USER_NAME, "data-user-name"),
    (DATA_USER_PWD, "data-user-pwd"),
    (ROOT_FILE_TRANSFER, "root-file-transfer"),
    (HARDWARE_VERSION, "hardware-version"),
    (ROOT_DEVICE_TIME, "root-device-time"),
    (ROOT_NEW_DEVICES, "root-new-devices"),
    (ROOT_INVISIBLE_DEVICES, "root-invisible-devices"),
    (ROOT_VISIBLE_DEVICES, "root-visible-devices"),
    (ROOT_ACTIVE_DEVICES, "root-active-devices"),
    (ROOT_DEVICE_INFO, "root-device-info"),
    (DEVICE_LAST_SEEN, "device-last-seen"),
    (ROOT_SENSOR_PARAMS, "root-sensor-params"),
    (ROOT_SENSOR_BITMASK, "root-sensor-bitmask"),
    (AVERAGE_TIME_MS, "average-time-ms"),
    (DATA_AES_KEY, "data-aes-key"),
    (TIME_REFERENCE, "time-reference"),
    (ROOT_DATA_COLLECTOR, "root-data-collector"),
    (DATA_COLLECTOR_ACTIVE, "data-collector-active"),
    (DATA_COLLECTOR_SIZE, "data-collector-size"),
    (DATA_REGISTER_PERIOD, "data-register-period"),
    (PROFILE_1_MINUTE, "profile-1-minute"),
    (PROFILE_15_MINUTE, "profile-15-minute"),
    (PROFILE_60_MINUTE, "profile-60-minute"),
    (PROFILE_24_HOUR, "profile-24-hour"),
    (PROFILE_LAST_2_HOURS, "profile-last-2-hours"),
    (PROFILE_LAST_WEEK, "profile-last-week"),
    (PROFILE_1_MONTH, "profile-1-month"),
    (PROFILE_1_YEAR, "profile-1-year"),
    (PROFILE_INITIAL, "profile-initial"),
    (ROOT_PUSH_OPERATIONS, "root-push-operations"),
    (PUSH_INTERVAL, "push-interval"),
    (PUSH_DELAY, "push-delay"),
    (PUSH_SOURCE, "push-source"),
    (PUSH_SERVICE, "push-service"),
    (PUSH_SERVICE_IPT, "push-service-ipt"),
    (PUSH_SERVICE_SML, "push-service-sml"),
    (PUSH_SOURCE_PROFILE, "push-source-profile"),
    (PUSH_SOURCE_INSTALL, "push-source-install"),
    (PUSH_SOURCE_VISIBLE_SENSORS, "push-source-visible-sensors"),
    (PUSH_SOURCE_ACTIVE_SENSORS, "push-source-active-sensors"),
    (PUSH_SERVER_ID, "push-server-id"),
    (PUSH_IDENTIFIERS, "push-identifiers"),
    (PUSH_DETAILS, "push-details"),
    (PUSH_TARGET, "push-target"),
    (CLASS_OP_LOG, "class-op-log"),
    (CLASS_EVENT, "class-event"),
    (PEER_ADDRESS, "peer-address"),
    (OP_LOG_STATUS_WORD, "op-log-status-word"),
    (OP_LOG_FIELD_STRENGTH, "op-log-field-strength"),
    (OP_LOG_CELL, "op-log-cell"),
    (OP_LOG_AREA_CODE, "op-log-area-code"),
    (OP_LOG_PROVIDER, "op-log-provider"),
    (MBUS_STATE, "mbus-state"),
    (ROOT_IPT_STATE, "root-ipt-state"),
    (ROOT_IPT_PARAM, "root-ipt-param"),
    (TCP_WAIT_TO_RECONNECT, "tcp-wait-to-reconnect"),
    (TCP_CONNECT_RETRIES, "tcp-connect-retries"),
    (ROOT_LAN_DSL, "root-lan-dsl"),
    (LAN_IP_ADDRESS, "lan-ip-address"),
    (LAN_SUBNET_MASK, "lan-subnet-mask"),
    (LAN_GATEWAY, "lan-gateway"),
    (LAN_DNS_PRIMARY, "lan-dns-primary"),
    (LAN_DNS_SECONDARY, "lan-dns-secondary"),
    (LAN_DNS_TERTIARY, "lan-dns-tertiary"),
    (ROOT_W_MBUS_STATUS, "root-w-mbus-status"),
    (W_MBUS_ADAPTER_MANUFACTURER, "w-mbus-adapter-manufacturer"),
    (W_MBUS_ADAPTER_ID, "w-mbus-adapter-id"),
    (W_MBUS_FIRMWARE, "w-mbus-firmware"),
    (W_MBUS_HARDWARE, "w-mbus-hardware"),
    (W_MBUS_FIELD_STRENGTH, "w-mbus-field-strength"),
    (W_MBUS_LAST_RECEPTION, "w-mbus-last-reception"),
    (IF_W_MBUS, "if-w-mbus"),
    (W_MBUS_PROTOCOL, "w-mbus-protocol"),
    (W_MBUS_MODE_S, "w-mbus-mode-s"),
    (W_MBUS_MODE_T, "w-mbus-mode-t"),
    (W_MBUS_POWER, "w-mbus-power"),
    (W_MBUS_INSTALL_MODE, "w-mbus-install-mode"),
    (W_MBUS_REBOOT, "w-mbus-reboot"),
    (IF_MBUS, "if-mbus"),
    (MBUS_RO_INTERVAL, "mbus-readout-interval"),
    (MBUS_SEARCH_INTERVAL, "mbus-search-interval"),
    (MBUS_SEARCH_DEVICE, "mbus-search-device"),
    (ROOT_IF_1107, "root-if-1107"),
    (IF_1107_ACTIVE, "if-1107-active"),
    (IF_1107_LOOP_TIME, "if-1107-loop-time"),
    (IF_1107_RETRIES, "if-1107-retries"),
    (IF_1107_MIN_TIMEOUT, "if-1107-min-timeout"),
    (IF_1107_MAX_TIMEOUT, "if-1107-max-timeout"),
    (IF_1107_MAX_DATA_RATE, "if-1107-max-data-rate"),
    (IF_1107_RS485, "if-1107-rs485"),
    (IF_1107_PROTOCOL_MODE, "if-1107-protocol-mode"),
    (IF_1107_METER_LIST, "if-1107-meter-list"),
    (IF_1107_METER_ID, "if-1107-meter-id"),
    (IF_1107_BAUDRATE, "if-1107-baudrate"),
    (IF_1107_ADDRESS, "if-1107-address"),
    (IF_1107_P1, "if-1107-p1"),
    (IF_1107_W5, "if-1107-w5"),
    (IF_1107_AUTO_ACTIVATION, "if-1107-auto-activation"),
    (IF_1107_TIME_GRID, "if-1107-time-grid"),
    (IF_1107_TIME_SYNC, "if-1107-time-sync"),
    (IF_1107_MAX_VARIATION, "if-1107-max-variation"),
    (ROOT_ACTUATORS, "root-actuators"),
    (ATTENTION_OK, "attention-ok"),
    (ATTENTION_JOB_IS_RUNNING, "attention-job-is-running"),
    (ATTENTION_UNKNOWN_ERROR, "attention-unknown-error"),
    (ATTENTION_UNKNOWN_SML_ID, "attention-unknown-sml-id"),
    (ATTENTION_NOT_AUTHORIZED, "attention-not-authorized"),
    (ATTENTION_NO_SERVER_ID, "attention-no-server-id"),
    (ATTENTION_NO_REQ_FIELD, "attention-no-req-field"),
    (ATTENTION_CANNOT_WRITE, "attention-cannot-write"),
    (ATTENTION_CANNOT_READ, "attention-cannot-read"),
    (ATTENTION_COMM_ERROR, "attention-comm-error"),
    (ATTENTION_PARSER_ERROR, "attention-parser-error"),
    (ATTENTION_OUT_OF_RANGE, "attention-out-of-range"),
    (ATTENTION_NOT_EXECUTED, "attention-not-executed"),
    (ATTENTION_INVALID_CRC, "attention-invalid-crc"),
    (ATTENTION_NO_BROADCAST, "attention-no-broadcast"),
    (ATTENTION_UNEXPECTED_MSG, "attention-unexpected-msg"),
    (ATTENTION_UNKNOWN_OBIS_CODE, "attention-unknown-obis-code"),
    (ATTENTION_UNSUPPORTED_DATA_TYPE, "attention-unsupported-data-type"),
    (ATTENTION_ELEMENT_NOT_OPTIONAL, "attention-element-not-optional"),
    (ATTENTION_NO_ENTRIES, "attention-no-entries"),
    (ATTENTION_END_LIMIT_BEFORE_START, "attention-end-limit-before-start"),
    (ATTENTION_NO_ENTRIES_IN_RANGE, "attention-no-entries-in-range"),
    (ATTENTION_MISSING_CLOSE_MSG, "attention-missing-close-msg"),
];
