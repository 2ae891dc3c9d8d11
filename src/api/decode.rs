//! Converts raw API payloads into domain records.
//!
//! List endpoints answer with an object keyed by id, or with `[]` when there
//! is nothing to list. Lists are returned sorted by name so output is stable.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CliError;
use crate::models::bandwidth::{DATE, INCOMING, OUTGOING};
use crate::models::lenient::value_to_text;
use crate::models::{AccountInfo, BandwidthSample, OsItem, Server};

pub fn server_list(payload: Value) -> Result<Vec<Server>, CliError> {
    let mut servers: Vec<Server> = keyed_list(payload)?;
    servers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Ok(servers)
}

/// A single server, or the empty-id sentinel when the payload holds none.
pub fn server(payload: Value) -> Result<Server, CliError> {
    match payload {
        Value::Object(map) if map.contains_key("SUBID") => Ok(serde_json::from_value(Value::Object(map))?),
        // Some responses wrap the record in a map keyed by its id.
        Value::Object(map) if map.len() == 1 => match map.into_iter().next() {
            Some((_, inner @ Value::Object(_))) => server(inner),
            _ => Ok(Server::default()),
        },
        Value::Object(_) | Value::Array(_) | Value::Null => Ok(Server::default()),
        other => Err(CliError::UnexpectedResponse(format!("expected a server object, got {}", other))),
    }
}

pub fn os_list(payload: Value) -> Result<Vec<OsItem>, CliError> {
    let mut os: Vec<OsItem> = keyed_list(payload)?;
    os.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Ok(os)
}

/// Merges the `incoming_bytes` and `outgoing_bytes` series by date.
///
/// Dates only present in the outgoing series are appended at the end.
pub fn bandwidth(payload: Value) -> Result<Vec<BandwidthSample>, CliError> {
    let map = match payload {
        Value::Object(map) => map,
        Value::Array(arr) if arr.is_empty() => return Ok(Vec::new()),
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(CliError::UnexpectedResponse(format!(
                "expected a bandwidth object, got {}",
                other
            )))
        }
    };

    let mut samples: Vec<BandwidthSample> = Vec::new();
    for (date, amount) in series(map.get("incoming_bytes"))? {
        let mut sample = BandwidthSample::new();
        sample.insert(DATE.to_string(), date);
        sample.insert(INCOMING.to_string(), amount);
        sample.insert(OUTGOING.to_string(), String::new());
        samples.push(sample);
    }
    for (date, amount) in series(map.get("outgoing_bytes"))? {
        let existing = samples
            .iter_mut()
            .find(|s| s.get(DATE).map(String::as_str) == Some(date.as_str()));
        match existing {
            Some(sample) => {
                sample.insert(OUTGOING.to_string(), amount);
            }
            None => {
                let mut sample = BandwidthSample::new();
                sample.insert(DATE.to_string(), date);
                sample.insert(INCOMING.to_string(), String::new());
                sample.insert(OUTGOING.to_string(), amount);
                samples.push(sample);
            }
        }
    }
    Ok(samples)
}

/// Id of a freshly created server.
pub fn created_id(payload: &Value) -> Result<String, CliError> {
    payload
        .get("SUBID")
        .map(value_to_text)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CliError::UnexpectedResponse(format!("no SUBID in create response: {}", payload)))
}

pub fn account_info(payload: Value) -> Result<AccountInfo, CliError> {
    match payload {
        Value::Object(_) => Ok(serde_json::from_value(payload)?),
        other => Err(CliError::UnexpectedResponse(format!(
            "expected an account object, got {}",
            other
        ))),
    }
}

fn keyed_list<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, CliError> {
    match payload {
        Value::Object(map) => map
            .into_iter()
            .map(|(_, v)| serde_json::from_value(v).map_err(CliError::from))
            .collect(),
        Value::Array(arr) => arr
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(CliError::from))
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(CliError::UnexpectedResponse(format!("expected a list, got {}", other))),
    }
}

// `[["2014-06-10", "81072581"], ...]`
fn series(value: Option<&Value>) -> Result<Vec<(String, String)>, CliError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };
    let Some(points) = value.as_array() else {
        return Err(CliError::UnexpectedResponse(format!("expected a bandwidth series, got {}", value)));
    };
    points
        .iter()
        .map(|point| match point.as_array().map(Vec::as_slice) {
            Some([date, amount, ..]) => Ok((value_to_text(date), value_to_text(amount))),
            _ => Err(CliError::UnexpectedResponse(format!("malformed bandwidth entry: {}", point))),
        })
        .collect()
}
