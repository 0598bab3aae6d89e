use log::warn;

use super::customize::customize_value;
use super::structs::*;
use super::utils::*;
use super::SmlError;
use crate::models::{Octets, Value};
use crate::obis_utils::ObisCode;

fn read_signature(value: &Value, context: &str) -> Result<Option<Octets>, SmlError> {
    match value {
        Value::Null => Ok(None),
        v => read_octets(v, context).map(Some),
    }
}

/// SML_PeriodEntry {objName, unit, scaler, value, valueSignature}
pub fn read_period_entry(value: &Value) -> Result<PeriodEntry, SmlError> {
    let fields = expect_arity(value, 5, "SML_PeriodEntry")?;
    let name = read_obis(&fields[0], "SML_PeriodEntry.objName")?;
    let unit = read_unit(&fields[1], "SML_PeriodEntry.unit")?;
    let scaler = read_scaler(&fields[2], "SML_PeriodEntry.scaler")?;
    let raw = fields[3].clone();

    Ok(PeriodEntry {
        name,
        unit,
        scaler,
        value: customize_value(&name, raw.clone(), scaler),
        raw,
        signature: read_signature(&fields[4], "SML_PeriodEntry.valueSignature")?,
    })
}

/// Flat list of period entries keyed by their OBIS code
pub fn read_period_list(value: &Value, context: &str) -> Result<Readings, SmlError> {
    let mut readings = Readings::new();
    for item in read_list(value, context)? {
        match read_period_entry(item) {
            Ok(entry) => insert_reading(&mut readings, entry.name, entry.reading()),
            Err(e) => warn!("{context}: skipping period entry: {e}"),
        }
    }
    Ok(readings)
}

/// SML_ListEntry {objName, status, valTime, unit, scaler, value, valueSignature}
pub fn read_list_entry(value: &Value) -> Result<(ObisCode, Reading), SmlError> {
    let fields = expect_arity(value, 7, "SML_ListEntry")?;
    let name = read_obis(&fields[0], "SML_ListEntry.objName")?;
    let status = read_unsigned(&fields[1], "SML_ListEntry.status")?;
    let unit = read_unit(&fields[3], "SML_ListEntry.unit")?;
    let scaler = read_scaler(&fields[4], "SML_ListEntry.scaler")?;
    read_signature(&fields[6], "SML_ListEntry.valueSignature")?;

    Ok((name, Reading {
        value: customize_value(&name, fields[5].clone(), scaler),
        unit: get_sml_unit_name(unit),
        status,
        time: read_time(&fields[2]),
    }))
}

pub fn read_value_list(value: &Value, context: &str) -> Result<Readings, SmlError> {
    let mut readings = Readings::new();
    for item in read_list(value, context)? {
        match read_list_entry(item) {
            Ok((name, reading)) => insert_reading(&mut readings, name, reading),
            Err(e) => warn!("{context}: skipping list entry: {e}"),
        }
    }
    Ok(readings)
}

/// SML_ProfObjHeaderEntry {headerObjName, headerUnit, headerScaler}
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    pub name: ObisCode,
    pub unit: u8,
    pub scaler: i8,
}

pub fn read_profile_header(value: &Value, context: &str) -> Result<Vec<ProfileHeader>, SmlError> {
    read_list(value, context)?
        .iter()
        .map(|item| {
            let fields = expect_arity(item, 3, "SML_ProfObjHeaderEntry")?;
            Ok(ProfileHeader {
                name: read_obis(&fields[0], "SML_ProfObjHeaderEntry.headerObjName")?,
                unit: read_unit(&fields[1], "SML_ProfObjHeaderEntry.headerUnit")?,
                scaler: read_scaler(&fields[2], "SML_ProfObjHeaderEntry.headerScaler")?,
            })
        })
        .collect()
}

/// SML_ProfObjPeriodEntry rows, values are matched to the header by position
pub fn read_profile_rows(header: &[ProfileHeader], value: &Value, context: &str) -> Result<Vec<ProfileRow>, SmlError> {
    let mut rows = Vec::new();
    for item in read_list(value, context)? {
        let fields = expect_arity(item, 4, "SML_ProfObjPeriodEntry")?;
        let status = read_unsigned(&fields[1], "SML_ProfObjPeriodEntry.status")?;
        let values = read_list(&fields[2], "SML_ProfObjPeriodEntry.value_List")?;
        if values.len() != header.len() {
            warn!("{context}: {} values for {} header entries", values.len(), header.len());
        }

        let mut readings = Readings::new();
        for (head, entry) in header.iter().zip(values) {
            let entry = expect_arity(entry, 2, "SML_ValueEntry")?;
            let reading = Reading {
                value: customize_value(&head.name, entry[0].clone(), head.scaler),
                unit: get_sml_unit_name(head.unit),
                status: None,
                time: None,
            };
            insert_reading(&mut readings, head.name, reading);
        }

        rows.push(ProfileRow {
            time: read_time(&fields[0]),
            status,
            readings,
            signature: read_octets(&fields[3], "SML_ProfObjPeriodEntry.periodSignature")?,
        });
    }
    Ok(rows)
}

fn read_list<'a>(value: &'a Value, context: &str) -> Result<&'a [Value], SmlError> {
    match value {
        Value::Null => Ok(&[][..]),
        Value::Tuple(items) => Ok(items),
        other => Err(type_mismatch(context, "list", other)),
    }
}

fn insert_reading(readings: &mut Readings, name: ObisCode, reading: Reading) {
    if readings.contains_key(&name) {
        warn!("Duplicate reading {name}, keeping the first one");
        return;
    }
    readings.insert(name, reading);
}
