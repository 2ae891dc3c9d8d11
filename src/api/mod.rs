// API client and the operations the command handlers depend on
pub mod client;
pub mod decode;
pub mod servers;

pub use client::VultrClient;

use crate::error::CliError;
use crate::models::{AccountInfo, BandwidthSample, OsItem, Server, ServerOptions};

/// Server operations offered by the cloud provider.
///
/// Handlers are generic over this trait so they can run against an
/// in-memory implementation in tests.
#[allow(async_fn_in_trait)]
pub trait VultrApi {
    /// Creates a server and returns its id together with the requested name, region and plan.
    async fn create_server(
        &self,
        name: &str,
        region_id: u32,
        plan_id: u32,
        os_id: u32,
        options: &ServerOptions,
    ) -> Result<Server, CliError>;

    async fn rename_server(&self, id: &str, name: &str) -> Result<(), CliError>;

    async fn start_server(&self, id: &str) -> Result<(), CliError>;

    async fn halt_server(&self, id: &str) -> Result<(), CliError>;

    async fn reboot_server(&self, id: &str) -> Result<(), CliError>;

    async fn reinstall_server(&self, id: &str) -> Result<(), CliError>;

    async fn change_os_of_server(&self, id: &str, os_id: u32) -> Result<(), CliError>;

    /// Operating systems the server may be switched to.
    async fn list_os_for_server(&self, id: &str) -> Result<Vec<OsItem>, CliError>;

    async fn delete_server(&self, id: &str) -> Result<(), CliError>;

    async fn bandwidth_of_server(&self, id: &str) -> Result<Vec<BandwidthSample>, CliError>;

    async fn get_servers(&self) -> Result<Vec<Server>, CliError>;

    /// Returns a server with an empty id when the API does not know `id`.
    async fn get_server(&self, id: &str) -> Result<Server, CliError>;

    async fn account_info(&self) -> Result<AccountInfo, CliError>;
}
