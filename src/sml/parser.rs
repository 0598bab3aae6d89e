use log::debug;

use super::SmlError;
use crate::models::Value;

// SML type field of the TL byte
const SML_TYPE_OCTET_STRING: u8 = 0b000;
const SML_TYPE_BOOLEAN: u8 = 0b100;
const SML_TYPE_INTEGER: u8 = 0b101;
const SML_TYPE_UNSIGNED: u8 = 0b110;
const SML_TYPE_LIST: u8 = 0b111;

const SML_END_OF_MESSAGE: u8 = 0x00;

/* Lists nest a handful of levels in practice, deeper input is garbage */
const MAX_NESTING: usize = 64;

/// Splits an unframed SML file into messages, each one a 5 element tuple
pub fn parse_sml_file(data: &[u8]) -> Result<Vec<Value>, SmlError> {
    debug!("Parsing SML file of {} bytes", data.len());
    let mut parser = SmlParser::new(data);
    parser.parse_file()
}

struct SmlParser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SmlParser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn parse_file(&mut self) -> Result<Vec<Value>, SmlError> {
        let mut messages = Vec::new();
        loop {
            /* fill bytes between and after messages */
            while self.data.get(self.pos) == Some(&SML_END_OF_MESSAGE) {
                self.pos += 1;
            }
            if self.pos >= self.data.len() {
                break;
            }
            messages.push(self.parse_message()?);
        }
        debug!("Found {} SML messages", messages.len());
        Ok(messages)
    }

    /* The trailing endOfSmlMsg marker is consumed, not returned */
    fn parse_message(&mut self) -> Result<Value, SmlError> {
        let start = self.pos;
        let (type_field, length, _) = self.parse_type_length()?;
        if type_field != SML_TYPE_LIST {
            return Err(SmlError::InvalidTypeLength { byte: self.data[start], pos: start });
        }

        let mut fields = Vec::with_capacity(length.min(8));
        for i in 0..length {
            if i == length - 1 && self.data.get(self.pos) == Some(&SML_END_OF_MESSAGE) {
                self.pos += 1;
                break;
            }
            fields.push(self.parse_value(1)?);
        }
        Ok(Value::Tuple(fields))
    }

    fn read_byte(&mut self) -> Result<u8, SmlError> {
        let byte = *self.data.get(self.pos).ok_or(SmlError::UnexpectedEnd(self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    fn take(&mut self, length: usize) -> Result<&'a [u8], SmlError> {
        let end = self.pos.checked_add(length).ok_or(SmlError::UnexpectedEnd(self.pos))?;
        let bytes = self.data.get(self.pos..end).ok_or(SmlError::UnexpectedEnd(self.data.len()))?;
        self.pos = end;
        Ok(bytes)
    }

    /// Returns (type, length, number of TL bytes)
    fn parse_type_length(&mut self) -> Result<(u8, usize, usize), SmlError> {
        let mut byte = self.read_byte()?;
        let type_field = (byte >> 4) & 0x07;
        let mut length = (byte & 0x0F) as usize;
        let mut count = 1;

        while byte & 0x80 != 0 {
            byte = self.read_byte()?;
            if byte & 0x70 != 0 || count == 4 {
                return Err(SmlError::InvalidTypeLength { byte, pos: self.pos - 1 });
            }
            length = (length << 4) | (byte & 0x0F) as usize;
            count += 1;
        }

        Ok((type_field, length, count))
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, SmlError> {
        if depth > MAX_NESTING {
            return Err(SmlError::TooDeep(MAX_NESTING));
        }

        let start = self.pos;
        let (type_field, length, tl_count) = self.parse_type_length()?;
        let invalid = SmlError::InvalidTypeLength { byte: self.data[start], pos: start };

        if type_field == SML_TYPE_LIST {
            let remaining = self.data.len() - self.pos;
            let mut items = Vec::with_capacity(length.min(remaining));
            for _ in 0..length {
                items.push(self.parse_value(depth + 1)?);
            }
            return Ok(Value::Tuple(items));
        }

        /* for scalars the length counts the TL bytes too */
        let payload_length = length.checked_sub(tl_count).ok_or(invalid.clone())?;
        let payload = self.take(payload_length)?;

        match type_field {
            SML_TYPE_OCTET_STRING if payload.is_empty() => Ok(Value::Null),
            SML_TYPE_OCTET_STRING => Ok(Value::OctetString(payload.to_vec())),
            SML_TYPE_BOOLEAN if payload.len() == 1 => Ok(Value::Bool(payload[0] != 0)),
            SML_TYPE_INTEGER if (1..=8).contains(&payload.len()) => Ok(read_integer(payload, true)),
            SML_TYPE_UNSIGNED if (1..=8).contains(&payload.len()) => Ok(read_integer(payload, false)),
            _ => Err(invalid),
        }
    }
}

/* Big endian, signed values are sign extended from their wire width */
fn read_integer(payload: &[u8], signed: bool) -> Value {
    let raw = payload.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64);

    if signed {
        let shift = 64 - 8 * payload.len() as u32;
        let v = ((raw << shift) as i64) >> shift;
        match payload.len() {
            1 => Value::I8(v as i8),
            2 => Value::I16(v as i16),
            3 | 4 => Value::I32(v as i32),
            _ => Value::I64(v),
        }
    } else {
        match payload.len() {
            1 => Value::U8(raw as u8),
            2 => Value::U16(raw as u16),
            3 | 4 => Value::U32(raw as u32),
            _ => Value::U64(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSE_RESPONSE: [u8; 20] = [
        0x76,                         // message, 6 fields
        0x05, 0x01, 0x02, 0x03, 0x04, // transaction id
        0x62, 0x00,                   // group no
        0x62, 0x00,                   // abort on error
        0x72,                         // body choice
        0x63, 0x02, 0x01,             // close response
        0x71, 0x01,                   // global signature (omitted)
        0x63, 0x12, 0x34,             // crc
        0x00,                         // end of message
    ];

    #[test]
    fn test_parse_type_length() {
        let data = [0x72, 0x05];
        let mut parser = SmlParser::new(&data);
        assert_eq!(parser.parse_type_length().unwrap(), (7, 2, 1));

        let data = [0x81, 0x06];
        let mut parser = SmlParser::new(&data);
        assert_eq!(parser.parse_type_length().unwrap(), (0, 22, 2));

        let data = [0x81, 0x76];
        let mut parser = SmlParser::new(&data);
        assert!(matches!(parser.parse_type_length(), Err(SmlError::InvalidTypeLength { byte: 0x76, pos: 1 })));
    }

    #[test]
    fn test_parse_message() {
        let messages = parse_sml_file(&CLOSE_RESPONSE).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], Value::tuple(vec![
            Value::octets(&[0x01, 0x02, 0x03, 0x04]),
            Value::U8(0),
            Value::U8(0),
            Value::tuple(vec![Value::U16(0x0201), Value::tuple(vec![Value::Null])]),
            Value::U16(0x1234),
        ]));
    }

    #[test]
    fn test_padding_and_multiple_messages() {
        let mut data = CLOSE_RESPONSE.to_vec();
        data.extend_from_slice(&CLOSE_RESPONSE);
        data.extend_from_slice(&[0x00, 0x00]);
        assert_eq!(parse_sml_file(&data).unwrap().len(), 2);
        assert!(parse_sml_file(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_integers() {
        let mut parser = SmlParser::new(&[0x52, 0xFF]);
        assert_eq!(parser.parse_value(1).unwrap(), Value::I8(-1));
        let mut parser = SmlParser::new(&[0x53, 0xFF, 0x38]);
        assert_eq!(parser.parse_value(1).unwrap(), Value::I16(-200));
        let mut parser = SmlParser::new(&[0x54, 0xFF, 0xFF, 0xFE]);
        assert_eq!(parser.parse_value(1).unwrap(), Value::I32(-2));
        let mut parser = SmlParser::new(&[0x64, 0x01, 0x00, 0x00]);
        assert_eq!(parser.parse_value(1).unwrap(), Value::U32(0x010000));
        let mut parser = SmlParser::new(&[0x69, 0, 0, 0, 0, 0, 0, 0x30, 0x39]);
        assert_eq!(parser.parse_value(1).unwrap(), Value::U64(12345));
        let mut parser = SmlParser::new(&[0x42, 0x01]);
        assert_eq!(parser.parse_value(1).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_truncated_input() {
        assert!(matches!(parse_sml_file(&CLOSE_RESPONSE[..9]), Err(SmlError::UnexpectedEnd(_))));
        let mut parser = SmlParser::new(&[0x65, 0x01]);
        assert!(matches!(parser.parse_value(1), Err(SmlError::UnexpectedEnd(_))));
        let mut parser = SmlParser::new(&[0x61]);
        assert!(matches!(parser.parse_value(1), Err(SmlError::InvalidTypeLength { .. })));
    }

    #[test]
    fn test_nesting_limit() {
        let data = vec![0x71; MAX_NESTING + 2];
        assert!(matches!(parse_sml_file(&data), Err(SmlError::TooDeep(_))));
    }
}
