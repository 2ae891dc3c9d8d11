//! Virtual machine commands.
//!
//! Each handler makes exactly one API call and returns the text to print.
//! Errors are returned untouched so nothing is printed for a failed call.

use crate::api::VultrApi;
use crate::error::CliError;
use crate::models::bandwidth::{sample_field, DATE, INCOMING, OUTGOING};
use crate::models::ServerOptions;
use crate::utils::{render_rows, render_table};

/// Width of the value column in `show`.
pub const SHOW_VALUE_WIDTH: usize = 64;
/// Width of the value column in `show --full`.
pub const SHOW_VALUE_WIDTH_FULL: usize = 1024;

const CREATE_WIDTHS: [usize; 5] = [12, 32, 8, 12, 8];
const LIST_OS_WIDTHS: [usize; 6] = [8, 32, 8, 16, 8, 12];
const BANDWIDTH_WIDTHS: [usize; 3] = [24, 24, 24];
const LIST_WIDTHS: [usize; 11] = [12, 16, 24, 32, 32, 32, 8, 8, 24, 12, 8];
const SHOW_LABEL_WIDTH: usize = 24;

/// Printed when a list has no entries.
const EMPTY_LIST: &str = "\n";

pub async fn create<C: VultrApi>(
    api: &C,
    name: &str,
    region_id: u32,
    plan_id: u32,
    os_id: u32,
    options: &ServerOptions,
) -> Result<String, CliError> {
    let server = api.create_server(name, region_id, plan_id, os_id, options).await?;

    let mut out = String::from("Virtual machine created\n\n");
    out.push_str(&render_table(
        &["SUBID", "NAME", "DCID", "VPSPLANID", "OSID"],
        &[vec![
            server.id,
            server.name,
            server.region_id.to_string(),
            server.plan_id.to_string(),
            os_id.to_string(),
        ]],
        &CREATE_WIDTHS,
    ));
    Ok(out)
}

pub async fn rename<C: VultrApi>(api: &C, id: &str, name: &str) -> Result<String, CliError> {
    api.rename_server(id, name).await?;
    Ok(format!("Virtual machine renamed to: {}\n", name))
}

pub async fn start<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    api.start_server(id).await?;
    Ok("Virtual machine (re)started\n".to_string())
}

pub async fn halt<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    api.halt_server(id).await?;
    Ok("Virtual machine halted\n".to_string())
}

pub async fn reboot<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    api.reboot_server(id).await?;
    Ok("Virtual machine rebooted\n".to_string())
}

pub async fn reinstall<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    api.reinstall_server(id).await?;
    Ok("Virtual machine reinstalled\n".to_string())
}

pub async fn change_os<C: VultrApi>(api: &C, id: &str, os_id: u32) -> Result<String, CliError> {
    api.change_os_of_server(id, os_id).await?;
    Ok(format!("Virtual machine operating system changed to: {}\n", os_id))
}

pub async fn list_os<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    let os = api.list_os_for_server(id).await?;
    if os.is_empty() {
        return Ok(EMPTY_LIST.to_string());
    }

    let rows: Vec<Vec<String>> = os
        .into_iter()
        .map(|os| {
            vec![
                os.id.to_string(),
                os.name,
                os.arch,
                os.family,
                os.windows.to_string(),
                os.surcharge,
            ]
        })
        .collect();
    Ok(render_table(
        &["OSID", "NAME", "ARCH", "FAMILY", "WINDOWS", "SURCHARGE"],
        &rows,
        &LIST_OS_WIDTHS,
    ))
}

pub async fn delete<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    api.delete_server(id).await?;
    Ok("Virtual machine deleted\n".to_string())
}

pub async fn bandwidth<C: VultrApi>(api: &C, id: &str) -> Result<String, CliError> {
    let samples = api.bandwidth_of_server(id).await?;
    if samples.is_empty() {
        return Ok(EMPTY_LIST.to_string());
    }

    let rows: Vec<Vec<String>> = samples
        .iter()
        .map(|s| {
            [DATE, INCOMING, OUTGOING]
                .iter()
                .map(|key| sample_field(s, key).to_string())
                .collect()
        })
        .collect();
    Ok(render_table(&["DATE", "INCOMING", "OUTGOING"], &rows, &BANDWIDTH_WIDTHS))
}

pub async fn list<C: VultrApi>(api: &C) -> Result<String, CliError> {
    let servers = api.get_servers().await?;
    if servers.is_empty() {
        return Ok(EMPTY_LIST.to_string());
    }

    let rows: Vec<Vec<String>> = servers
        .into_iter()
        .map(|s| {
            vec![
                s.id,
                s.status,
                s.main_ip,
                s.name,
                s.os,
                s.location,
                s.vcpus.to_string(),
                s.ram,
                s.disk,
                s.allowed_bandwidth.to_string(),
                s.cost,
            ]
        })
        .collect();
    Ok(render_table(
        &[
            "SUBID",
            "STATUS",
            "IP",
            "NAME",
            "OS",
            "LOCATION",
            "VCPU",
            "RAM",
            "DISK",
            "BANDWIDTH",
            "COST",
        ],
        &rows,
        &LIST_WIDTHS,
    ))
}

/// Prints every attribute of one server as label/value rows.
///
/// `full` widens the value column so the KVM URL is not cut off.
pub async fn show<C: VultrApi>(api: &C, id: &str, full: bool) -> Result<String, CliError> {
    let server = api.get_server(id).await?;
    // TODO: revisit once it is known whether the API ever returns an empty SUBID for an existing server.
    if !server.is_found() {
        return Ok(format!("No virtual machine with SUBID {} found!\n", id));
    }

    let value_width = if full { SHOW_VALUE_WIDTH_FULL } else { SHOW_VALUE_WIDTH };
    let rows: Vec<Vec<String>> = [
        ("Id (SUBID):", server.id),
        ("Name:", server.name),
        ("Operating system:", server.os),
        ("Status:", server.status),
        ("Power status:", server.power_status),
        ("Location:", server.location),
        ("Region (DCID):", server.region_id.to_string()),
        ("VCPU count:", server.vcpus.to_string()),
        ("RAM:", server.ram),
        ("Disk:", server.disk),
        ("Allowed bandwidth:", server.allowed_bandwidth.to_string()),
        ("Current bandwidth:", server.current_bandwidth.to_string()),
        ("Cost per month:", server.cost),
        ("Pending charges:", server.pending_charges),
        ("Plan (VPSPLANID):", server.plan_id.to_string()),
        ("IP:", server.main_ip),
        ("Netmask:", server.netmask_v4),
        ("Gateway:", server.gateway_v4),
        ("Internal IP:", server.internal_ip),
        ("IPv6 IP:", server.main_ipv6),
        ("IPv6 Network:", server.network_v6),
        ("IPv6 Network Size:", server.network_size_v6),
        ("Created date:", server.created),
        ("Default password:", server.default_password),
        ("Auto backups:", server.auto_backups),
        ("KVM URL:", server.kvm_url),
    ]
    .into_iter()
    .map(|(label, value)| vec![label.to_string(), value])
    .collect();

    Ok(render_rows(&rows, &[SHOW_LABEL_WIDTH, value_width]))
}
