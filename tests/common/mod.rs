//! In-memory stand-in for the Vultr API used by handler tests.
#![allow(dead_code)]

use std::cell::RefCell;

use vultr::api::VultrApi;
use vultr::error::CliError;
use vultr::models::{AccountInfo, BandwidthSample, OsItem, Server, ServerOptions};

#[derive(Default)]
pub struct FakeApi {
    pub servers: Vec<Server>,
    pub server: Server,
    pub os: Vec<OsItem>,
    pub bandwidth: Vec<BandwidthSample>,
    pub account: AccountInfo,
    pub created_id: String,
    /// When set, every call fails with this status and message.
    pub failure: Option<(u16, String)>,
    pub calls: RefCell<Vec<String>>,
    pub last_options: RefCell<Option<ServerOptions>>,
}

impl FakeApi {
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), CliError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some((status, message)) => Err(CliError::api(*status, message)),
            None => Ok(()),
        }
    }
}

impl VultrApi for FakeApi {
    async fn create_server(
        &self,
        name: &str,
        region_id: u32,
        plan_id: u32,
        os_id: u32,
        options: &ServerOptions,
    ) -> Result<Server, CliError> {
        self.record(format!("create {} {} {} {}", name, region_id, plan_id, os_id))?;
        *self.last_options.borrow_mut() = Some(options.clone());
        Ok(Server {
            id: self.created_id.clone(),
            name: name.to_string(),
            region_id,
            plan_id,
            ..Server::default()
        })
    }

    async fn rename_server(&self, id: &str, name: &str) -> Result<(), CliError> {
        self.record(format!("rename {} {}", id, name))
    }

    async fn start_server(&self, id: &str) -> Result<(), CliError> {
        self.record(format!("start {}", id))
    }

    async fn halt_server(&self, id: &str) -> Result<(), CliError> {
        self.record(format!("halt {}", id))
    }

    async fn reboot_server(&self, id: &str) -> Result<(), CliError> {
        self.record(format!("reboot {}", id))
    }

    async fn reinstall_server(&self, id: &str) -> Result<(), CliError> {
        self.record(format!("reinstall {}", id))
    }

    async fn change_os_of_server(&self, id: &str, os_id: u32) -> Result<(), CliError> {
        self.record(format!("change-os {} {}", id, os_id))
    }

    async fn list_os_for_server(&self, id: &str) -> Result<Vec<OsItem>, CliError> {
        self.record(format!("list-os {}", id))?;
        Ok(self.os.clone())
    }

    async fn delete_server(&self, id: &str) -> Result<(), CliError> {
        self.record(format!("delete {}", id))
    }

    async fn bandwidth_of_server(&self, id: &str) -> Result<Vec<BandwidthSample>, CliError> {
        self.record(format!("bandwidth {}", id))?;
        Ok(self.bandwidth.clone())
    }

    async fn get_servers(&self) -> Result<Vec<Server>, CliError> {
        self.record("list".to_string())?;
        Ok(self.servers.clone())
    }

    async fn get_server(&self, id: &str) -> Result<Server, CliError> {
        self.record(format!("show {}", id))?;
        Ok(self.server.clone())
    }

    async fn account_info(&self) -> Result<AccountInfo, CliError> {
        self.record("account".to_string())?;
        Ok(self.account.clone())
    }
}

pub fn server(id: &str, name: &str) -> Server {
    Server {
        id: id.to_string(),
        name: name.to_string(),
        status: "active".to_string(),
        power_status: "running".to_string(),
        main_ip: "203.0.113.10".to_string(),
        os: "Ubuntu_22.04".to_string(),
        location: "Frankfurt".to_string(),
        region_id: 9,
        plan_id: 201,
        vcpus: 1,
        ram: "1024MB".to_string(),
        disk: "Virtual_25GB".to_string(),
        allowed_bandwidth: 1000.0,
        current_bandwidth: 0.5,
        cost: "5.00".to_string(),
        ..Server::default()
    }
}
