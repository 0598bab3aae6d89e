use log::{debug, error};

use super::period::{read_period_list, read_profile_header, read_profile_rows, read_value_list};
use super::structs::*;
use super::tree::TreeReader;
use super::utils::*;
use super::SmlError;
use crate::models::{Octets, Value};
use crate::obis_utils::ObisCode;

pub(super) fn decode_error(readout: &Readout, context: &str, err: &SmlError) -> Instruction {
    Instruction::DecodeError {
        envelope: readout.envelope.clone(),
        context: context.to_string(),
        reason: err.to_string(),
    }
}

fn attention_ack(readout: &Readout, code: &ObisCode) -> Instruction {
    Instruction::AttentionAck {
        envelope: readout.envelope.clone(),
        server_id: readout.server_id.clone(),
        code: *code,
        message: code.name().unwrap_or_default().to_string(),
    }
}

/// Decodes one message body. Once the arity matched a SetProcParameterRequest is always acknowledged.
pub fn read_body(
    tree: &TreeReader,
    ack_code: &ObisCode,
    readout: &mut Readout,
    msg_type: MessageType,
    body: &Value,
) -> Vec<Instruction> {
    let fields = match expect_arity(body, msg_type.arity(), msg_type.name()) {
        Ok(fields) => fields,
        Err(e) => {
            error!("{}: {e}", msg_type.name());
            return vec![decode_error(readout, msg_type.name(), &e)];
        }
    };

    let result = match msg_type {
        MessageType::OpenRequest => read_open_request(readout, fields),
        MessageType::OpenResponse => read_open_response(readout, fields),
        MessageType::CloseRequest => read_close(readout, fields).map(|(envelope, signature)| Instruction::CloseRequest { envelope, signature }),
        MessageType::CloseResponse => read_close(readout, fields).map(|(envelope, signature)| Instruction::CloseResponse { envelope, signature }),
        MessageType::GetProfilePackRequest | MessageType::GetProfileListRequest => read_profile_request(tree, readout, msg_type, fields),
        MessageType::GetProfilePackResponse => read_profile_pack_response(readout, fields),
        MessageType::GetProfileListResponse => read_profile_list_response(readout, fields),
        MessageType::GetProcParameterRequest => read_get_proc_parameter_request(readout, fields),
        MessageType::GetProcParameterResponse | MessageType::SetProcParameterResponse => read_proc_parameter_response(tree, readout, msg_type, fields),
        MessageType::SetProcParameterRequest => read_set_proc_parameter_request(tree, readout, fields),
        MessageType::GetListRequest => read_get_list_request(readout, fields),
        MessageType::GetListResponse => read_get_list_response(readout, fields),
        MessageType::GetCosemRequest | MessageType::SetCosemRequest => read_cosem_request(readout, msg_type, fields),
        MessageType::GetCosemResponse | MessageType::SetCosemResponse => read_cosem_response(readout, msg_type, fields),
        MessageType::ActionCosemRequest => read_action_cosem_request(readout, fields),
        MessageType::ActionCosemResponse => read_action_cosem_response(readout, fields),
        MessageType::AttentionResponse => read_attention_response(tree, readout, fields),
    };

    let instruction = match result {
        Ok(instruction) => {
            debug!("{} decoded as {}", msg_type.name(), instruction.name());
            instruction
        }
        Err(e) => {
            error!("{}: {e}", msg_type.name());
            decode_error(readout, msg_type.name(), &e)
        }
    };

    let mut instructions = vec![instruction];
    if msg_type == MessageType::SetProcParameterRequest {
        instructions.push(attention_ack(readout, ack_code));
    }
    instructions
}

fn set_client_id(readout: &mut Readout, value: &Value, context: &str) -> Result<Octets, SmlError> {
    readout.client_id = read_octets(value, context)?;
    Ok(readout.client_id.clone())
}

fn set_server_id(readout: &mut Readout, value: &Value, context: &str) -> Result<Octets, SmlError> {
    readout.server_id = read_octets(value, context)?;
    Ok(readout.server_id.clone())
}

/* codepage, clientId, reqFileId, serverId, username, password, smlVersion */
fn read_open_request(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let client_id = set_client_id(readout, &f[1], "OpenRequest.clientId")?;
    let req_file_id = read_text(&f[2], "OpenRequest.reqFileId")?;
    let server_id = set_server_id(readout, &f[3], "OpenRequest.serverId")?;

    Ok(Instruction::OpenRequest {
        envelope: readout.envelope.clone(),
        client_id,
        server_id,
        req_file_id,
        user_name: read_text(&f[4], "OpenRequest.username")?,
        password: read_text(&f[5], "OpenRequest.password")?,
    })
}

/* codepage, clientId, reqFileId, serverId, refTime, smlVersion */
fn read_open_response(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let client_id = set_client_id(readout, &f[1], "OpenResponse.clientId")?;
    let req_file_id = read_text(&f[2], "OpenResponse.reqFileId")?;
    let server_id = set_server_id(readout, &f[3], "OpenResponse.serverId")?;

    Ok(Instruction::OpenResponse {
        envelope: readout.envelope.clone(),
        client_id,
        server_id,
        req_file_id,
        ref_time: read_time(&f[4]),
        version: read_unsigned(&f[5], "OpenResponse.smlVersion")?,
    })
}

fn read_close(readout: &mut Readout, f: &[Value]) -> Result<(Envelope, Octets), SmlError> {
    Ok((readout.envelope.clone(), read_octets(&f[0], "Close.globalSignature")?))
}

/* serverId, username, password, withRawdata, beginTime, endTime, parameterTreePath, object_List, dasDetails */
fn read_profile_request(tree: &TreeReader, readout: &mut Readout, msg_type: MessageType, f: &[Value]) -> Result<Instruction, SmlError> {
    let ctx = msg_type.name();
    let server_id = set_server_id(readout, &f[0], ctx)?;
    let user_name = read_text(&f[1], ctx)?;
    let password = read_text(&f[2], ctx)?;
    let with_rawdata = read_bool(&f[3], ctx)?;
    let begin = read_time(&f[4]);
    let end = read_time(&f[5]);
    let path = read_path(&f[6], ctx)?;
    let objects = read_path(&f[7], ctx)?;
    let details = tree.read_optional_tree(&f[8])?;
    let envelope = readout.envelope.clone();

    Ok(match msg_type {
        MessageType::GetProfilePackRequest => Instruction::GetProfilePackRequest {
            envelope, server_id, user_name, password, with_rawdata, begin, end, path, objects, details,
        },
        _ => Instruction::GetProfileListRequest {
            envelope, server_id, user_name, password, with_rawdata, begin, end, path, objects, details,
        },
    })
}

/* serverId, actTime, regPeriod, parameterTreePath, header_List, period_List, rawdata, profileSignature */
fn read_profile_pack_response(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let server_id = set_server_id(readout, &f[0], "GetProfilePackResponse.serverId")?;
    let header = read_profile_header(&f[4], "GetProfilePackResponse.header_List")?;

    Ok(Instruction::GetProfilePackResponse {
        envelope: readout.envelope.clone(),
        server_id,
        act_time: read_time(&f[1]),
        reg_period: read_unsigned(&f[2], "GetProfilePackResponse.regPeriod")?.unwrap_or_default(),
        path: read_path(&f[3], "GetProfilePackResponse.parameterTreePath")?,
        rows: read_profile_rows(&header, &f[5], "GetProfilePackResponse.period_List")?,
        raw: read_octets(&f[6], "GetProfilePackResponse.rawdata")?,
        signature: read_octets(&f[7], "GetProfilePackResponse.profileSignature")?,
    })
}

/* serverId, actTime, regPeriod, parameterTreePath, valTime, status, period_List, rawdata, periodSignature */
fn read_profile_list_response(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let server_id = set_server_id(readout, &f[0], "GetProfileListResponse.serverId")?;

    Ok(Instruction::GetProfileListResponse {
        envelope: readout.envelope.clone(),
        server_id,
        act_time: read_time(&f[1]),
        reg_period: read_unsigned(&f[2], "GetProfileListResponse.regPeriod")?.unwrap_or_default(),
        path: read_path(&f[3], "GetProfileListResponse.parameterTreePath")?,
        val_time: read_time(&f[4]),
        status: read_unsigned(&f[5], "GetProfileListResponse.status")?.unwrap_or_default(),
        readings: read_period_list(&f[6], "GetProfileListResponse.period_List")?,
        raw: read_octets(&f[7], "GetProfileListResponse.rawdata")?,
        signature: read_octets(&f[8], "GetProfileListResponse.periodSignature")?,
    })
}

/* serverId, username, password, parameterTreePath, attribute */
fn read_get_proc_parameter_request(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let server_id = set_server_id(readout, &f[0], "GetProcParameterRequest.serverId")?;

    Ok(Instruction::GetProcParameterRequest {
        envelope: readout.envelope.clone(),
        server_id,
        user_name: read_text(&f[1], "GetProcParameterRequest.username")?,
        password: read_text(&f[2], "GetProcParameterRequest.password")?,
        path: read_path(&f[3], "GetProcParameterRequest.parameterTreePath")?,
        attribute: read_optional_obis(&f[4], "GetProcParameterRequest.attribute")?,
    })
}

/* serverId, parameterTreePath, parameterTree */
fn read_proc_parameter_response(tree: &TreeReader, readout: &mut Readout, msg_type: MessageType, f: &[Value]) -> Result<Instruction, SmlError> {
    let ctx = msg_type.name();
    let server_id = set_server_id(readout, &f[0], ctx)?;
    let path = read_path(&f[1], ctx)?;
    let parameter = tree.read_param_tree(&f[2])?;
    let envelope = readout.envelope.clone();

    Ok(match msg_type {
        MessageType::GetProcParameterResponse => Instruction::GetProcParameterResponse { envelope, server_id, path, parameter },
        _ => Instruction::SetProcParameterResponse { envelope, server_id, path, parameter },
    })
}

/* serverId, username, password, parameterTreePath, parameterTree */
fn read_set_proc_parameter_request(tree: &TreeReader, readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let server_id = set_server_id(readout, &f[0], "SetProcParameterRequest.serverId")?;

    Ok(Instruction::SetProcParameterRequest {
        envelope: readout.envelope.clone(),
        server_id,
        user_name: read_text(&f[1], "SetProcParameterRequest.username")?,
        password: read_text(&f[2], "SetProcParameterRequest.password")?,
        path: read_path(&f[3], "SetProcParameterRequest.parameterTreePath")?,
        parameter: tree.read_param_tree(&f[4])?,
    })
}

/* clientId, serverId, username, password, listName */
fn read_get_list_request(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let client_id = set_client_id(readout, &f[0], "GetListRequest.clientId")?;
    let server_id = set_server_id(readout, &f[1], "GetListRequest.serverId")?;

    Ok(Instruction::GetListRequest {
        envelope: readout.envelope.clone(),
        client_id,
        server_id,
        user_name: read_text(&f[2], "GetListRequest.username")?,
        password: read_text(&f[3], "GetListRequest.password")?,
        list_name: read_optional_obis(&f[4], "GetListRequest.listName")?,
    })
}

/* clientId, serverId, listName, actSensorTime, valList, listSignature, actGatewayTime */
fn read_get_list_response(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let client_id = set_client_id(readout, &f[0], "GetListResponse.clientId")?;
    let server_id = set_server_id(readout, &f[1], "GetListResponse.serverId")?;

    Ok(Instruction::GetListResponse {
        envelope: readout.envelope.clone(),
        client_id,
        server_id,
        list_name: read_optional_obis(&f[2], "GetListResponse.listName")?,
        act_sensor_time: read_time(&f[3]),
        readings: read_value_list(&f[4], "GetListResponse.valList")?,
        signature: read_octets(&f[5], "GetListResponse.listSignature")?,
        act_gateway_time: read_time(&f[6]),
    })
}

fn read_class(f: &[Value], ctx: &str) -> Result<(u64, u64), SmlError> {
    Ok((
        read_unsigned(&f[0], ctx)?.unwrap_or_default(),
        read_unsigned(&f[1], ctx)?.unwrap_or_default(),
    ))
}

/* clientId, serverId, username, password, objName, classId, classVersion, attributeList */
fn read_cosem_request(readout: &mut Readout, msg_type: MessageType, f: &[Value]) -> Result<Instruction, SmlError> {
    let ctx = msg_type.name();
    let client_id = set_client_id(readout, &f[0], ctx)?;
    let server_id = set_server_id(readout, &f[1], ctx)?;
    let user_name = read_text(&f[2], ctx)?;
    let password = read_text(&f[3], ctx)?;
    let object = read_octets(&f[4], ctx)?;
    let (class_id, class_version) = read_class(&f[5..7], ctx)?;
    let attributes = f[7].clone();
    let envelope = readout.envelope.clone();

    Ok(match msg_type {
        MessageType::GetCosemRequest => Instruction::GetCosemRequest {
            envelope, client_id, server_id, user_name, password, object, class_id, class_version, attributes,
        },
        _ => Instruction::SetCosemRequest {
            envelope, client_id, server_id, user_name, password, object, class_id, class_version, attributes,
        },
    })
}

/* clientId, serverId, objName, classId, classVersion, attributeList */
fn read_cosem_response(readout: &mut Readout, msg_type: MessageType, f: &[Value]) -> Result<Instruction, SmlError> {
    let ctx = msg_type.name();
    let client_id = set_client_id(readout, &f[0], ctx)?;
    let server_id = set_server_id(readout, &f[1], ctx)?;
    let object = read_octets(&f[2], ctx)?;
    let (class_id, class_version) = read_class(&f[3..5], ctx)?;
    let attributes = f[5].clone();
    let envelope = readout.envelope.clone();

    Ok(match msg_type {
        MessageType::GetCosemResponse => Instruction::GetCosemResponse {
            envelope, client_id, server_id, object, class_id, class_version, attributes,
        },
        _ => Instruction::SetCosemResponse {
            envelope, client_id, server_id, object, class_id, class_version, attributes,
        },
    })
}

/* clientId, serverId, username, password, objName, classId, classVersion, serviceIndex, serviceParameter */
fn read_action_cosem_request(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let ctx = "ActionCosemRequest";
    let client_id = set_client_id(readout, &f[0], ctx)?;
    let server_id = set_server_id(readout, &f[1], ctx)?;
    let (class_id, class_version) = read_class(&f[5..7], ctx)?;

    Ok(Instruction::ActionCosemRequest {
        envelope: readout.envelope.clone(),
        client_id,
        server_id,
        user_name: read_text(&f[2], ctx)?,
        password: read_text(&f[3], ctx)?,
        object: read_octets(&f[4], ctx)?,
        class_id,
        class_version,
        method_id: read_unsigned(&f[7], ctx)?.unwrap_or_default(),
        parameter: f[8].clone(),
    })
}

/* clientId, serverId, objName, classId, classVersion, serviceIndex, serviceResult */
fn read_action_cosem_response(readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let ctx = "ActionCosemResponse";
    let client_id = set_client_id(readout, &f[0], ctx)?;
    let server_id = set_server_id(readout, &f[1], ctx)?;
    let (class_id, class_version) = read_class(&f[3..5], ctx)?;

    Ok(Instruction::ActionCosemResponse {
        envelope: readout.envelope.clone(),
        client_id,
        server_id,
        object: read_octets(&f[2], ctx)?,
        class_id,
        class_version,
        method_id: read_unsigned(&f[5], ctx)?.unwrap_or_default(),
        result: f[6].clone(),
    })
}

/* serverId, attentionNo, attentionMsg, attentionDetails */
fn read_attention_response(tree: &TreeReader, readout: &mut Readout, f: &[Value]) -> Result<Instruction, SmlError> {
    let server_id = set_server_id(readout, &f[0], "AttentionResponse.serverId")?;
    let code = read_obis(&f[1], "AttentionResponse.attentionNo")?;

    Ok(Instruction::AttentionResponse {
        envelope: readout.envelope.clone(),
        server_id,
        code,
        description: code.name(),
        message: read_text(&f[2], "AttentionResponse.attentionMsg")?,
        details: tree.read_optional_tree(&f[3])?,
    })
}
