use log::{debug, error, warn};
use thiserror::Error;

use crate::config::DecoderConfig;
use crate::models::Value;
use crate::obis_utils::{codes, ObisCode, ObisError};

pub mod body;
pub mod customize;
pub mod devices;
pub mod parser;
pub mod period;
pub mod structs;
pub mod tree;
pub mod utils;

use structs::*;
use tree::TreeReader;
use utils::{expect_arity, read_octets, read_unsigned, type_mismatch};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmlError {
    #[error("{context}: expected {expected} fields, got {actual}")]
    ArityMismatch { context: String, expected: usize, actual: usize },
    #[error("{context}: expected {expected}, got {actual}")]
    TypeMismatch { context: String, expected: &'static str, actual: &'static str },
    #[error("Unknown SML message type 0x{0:04x}")]
    UnknownMessageType(u32),
    #[error("Parameter {0} has neither a value nor children")]
    EmptyParameter(ObisCode),
    #[error("Parameter tree nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("Unexpected end of data at position {0}")]
    UnexpectedEnd(usize),
    #[error("Invalid type length field 0x{byte:02x} at position {pos}")]
    InvalidTypeLength { byte: u8, pos: usize },
    #[error(transparent)]
    Obis(#[from] ObisError),
}

/// Entry point: turns decoded SML messages into instructions
pub struct Reader {
    config: DecoderConfig,
    ack_code: ObisCode,
}

impl Reader {
    pub fn new(config: DecoderConfig) -> Self {
        let ack_code = match config.attention_code.parse::<ObisCode>() {
            Ok(code) => code,
            Err(e) => {
                warn!("Invalid attention code {:?} in config ({e}), using {}", config.attention_code, codes::ATTENTION_OK);
                codes::ATTENTION_OK
            }
        };
        Self { config, ack_code }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// One SML_Message {transactionId, groupNo, abortOnError, messageBody, crc}.
    /// Never fails, broken input becomes a decode error instruction.
    pub fn read_message(&self, message: &Value) -> Vec<Instruction> {
        let mut readout = Readout::new();
        match self.read_envelope(&mut readout, message) {
            Ok(instructions) => instructions,
            Err(SmlError::UnknownMessageType(code)) => {
                error!("Dropping message {}: unknown SML message type 0x{code:04x}", readout.envelope.trx);
                Vec::new()
            }
            Err(e) => {
                error!("SML_Message: {e}");
                vec![body::decode_error(&readout, "SML_Message", &e)]
            }
        }
    }

    pub fn read_file(&self, messages: &[Value]) -> Vec<Instruction> {
        messages.iter().flat_map(|m| self.read_message(m)).collect()
    }

    /// Raw, unframed SML file body
    pub fn read_bytes(&self, data: &[u8]) -> Result<Vec<Instruction>, SmlError> {
        let messages = parser::parse_sml_file(data)?;
        Ok(self.read_file(&messages))
    }

    fn read_envelope(&self, readout: &mut Readout, message: &Value) -> Result<Vec<Instruction>, SmlError> {
        let fields = expect_arity(message, 5, "SML_Message")?;
        readout.envelope.trx = read_octets(&fields[0], "SML_Message.transactionId")?;
        readout.envelope.group_no = read_header_field(&fields[1], "SML_Message.groupNo")?.unwrap_or_default();
        readout.envelope.abort_on_error = read_header_field(&fields[2], "SML_Message.abortOnError")?.unwrap_or_default();
        /* CRC is passed on unchecked, it covers the reassembled message */
        readout.envelope.crc = match read_header_field(&fields[4], "SML_Message.crc") {
            Ok(crc) => crc,
            Err(e) => {
                warn!("Ignoring CRC of message {}: {e}", readout.envelope.trx);
                None
            }
        };

        let choice = expect_arity(&fields[3], 2, "SML_MessageBody")?;
        let code = choice[0].as_u64()
            .ok_or_else(|| type_mismatch("SML_MessageBody.type", "unsigned", &choice[0]))?;
        let code = u32::try_from(code).unwrap_or(u32::MAX);
        let msg_type = MessageType::from_code(code).ok_or(SmlError::UnknownMessageType(code))?;

        debug!("Message {}: {}", readout.envelope.trx, msg_type.name());
        readout.message_type = Some(msg_type);

        let tree = TreeReader::new(&self.config);
        Ok(body::read_body(&tree, &self.ack_code, readout, msg_type, &choice[1]))
    }
}

fn read_header_field<T: TryFrom<u64>>(value: &Value, context: &str) -> Result<Option<T>, SmlError> {
    match read_unsigned(value, context)? {
        None => Ok(None),
        Some(v) => T::try_from(v)
            .map(Some)
            .map_err(|_| type_mismatch(context, "unsigned field in range", value)),
    }
}
