use super::client::VultrClient;
use super::{decode, VultrApi};
use crate::error::CliError;
use crate::models::{AccountInfo, BandwidthSample, OsItem, Server, ServerOptions};

impl VultrClient {
    async fn server_action(&self, action: &str, id: &str) -> Result<(), CliError> {
        let endpoint = format!("server/{}", action);
        self.post(&endpoint, &[("SUBID", id.to_string())]).await?;
        Ok(())
    }
}

impl VultrApi for VultrClient {
    async fn create_server(
        &self,
        name: &str,
        region_id: u32,
        plan_id: u32,
        os_id: u32,
        options: &ServerOptions,
    ) -> Result<Server, CliError> {
        let mut form = vec![
            ("DCID", region_id.to_string()),
            ("VPSPLANID", plan_id.to_string()),
            ("OSID", os_id.to_string()),
            ("label", name.to_string()),
        ];
        form.extend(options.form_fields());

        let payload = self.post("server/create", &form).await?;
        let id = decode::created_id(&payload)?;
        tracing::info!(%id, name, "server created");
        Ok(Server {
            id,
            name: name.to_string(),
            region_id,
            plan_id,
            os_id: os_id.to_string(),
            ..Server::default()
        })
    }

    async fn rename_server(&self, id: &str, name: &str) -> Result<(), CliError> {
        self.post("server/label_set", &[("SUBID", id.to_string()), ("label", name.to_string())])
            .await?;
        Ok(())
    }

    async fn start_server(&self, id: &str) -> Result<(), CliError> {
        self.server_action("start", id).await
    }

    async fn halt_server(&self, id: &str) -> Result<(), CliError> {
        self.server_action("halt", id).await
    }

    async fn reboot_server(&self, id: &str) -> Result<(), CliError> {
        self.server_action("reboot", id).await
    }

    async fn reinstall_server(&self, id: &str) -> Result<(), CliError> {
        self.server_action("reinstall", id).await
    }

    async fn change_os_of_server(&self, id: &str, os_id: u32) -> Result<(), CliError> {
        self.post("server/os_change", &[("SUBID", id.to_string()), ("OSID", os_id.to_string())])
            .await?;
        Ok(())
    }

    async fn list_os_for_server(&self, id: &str) -> Result<Vec<OsItem>, CliError> {
        let payload = self.get("server/os_change_list", &[("SUBID", id.to_string())]).await?;
        decode::os_list(payload)
    }

    async fn delete_server(&self, id: &str) -> Result<(), CliError> {
        self.server_action("destroy", id).await
    }

    async fn bandwidth_of_server(&self, id: &str) -> Result<Vec<BandwidthSample>, CliError> {
        let payload = self.get("server/bandwidth", &[("SUBID", id.to_string())]).await?;
        decode::bandwidth(payload)
    }

    async fn get_servers(&self) -> Result<Vec<Server>, CliError> {
        let payload = self.get("server/list", &[]).await?;
        decode::server_list(payload)
    }

    async fn get_server(&self, id: &str) -> Result<Server, CliError> {
        let payload = self.get("server/list", &[("SUBID", id.to_string())]).await?;
        decode::server(payload)
    }

    async fn account_info(&self) -> Result<AccountInfo, CliError> {
        let payload = self.get("auth/info", &[]).await?;
        decode::account_info(payload)
    }
}
