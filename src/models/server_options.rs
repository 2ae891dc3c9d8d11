/// Optional modifiers for server creation. Zero values mean "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerOptions {
    pub ipxe_chain_url: String,
    pub iso: u32,
    pub script: u32,
    pub snapshot: String,
    pub ssh_key: String,
    pub ipv6: bool,
    pub private_networking: bool,
    pub auto_backups: bool,
}

impl ServerOptions {
    /// Form fields for the set options, in the names the create endpoint expects.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if !self.ipxe_chain_url.is_empty() {
            fields.push(("ipxe_chain_url", self.ipxe_chain_url.clone()));
        }
        if self.iso != 0 {
            fields.push(("ISOID", self.iso.to_string()));
        }
        if self.script != 0 {
            fields.push(("SCRIPTID", self.script.to_string()));
        }
        if !self.snapshot.is_empty() {
            fields.push(("SNAPSHOTID", self.snapshot.clone()));
        }
        if !self.ssh_key.is_empty() {
            fields.push(("SSHKEYID", self.ssh_key.clone()));
        }
        if self.ipv6 {
            fields.push(("enable_ipv6", "yes".to_string()));
        }
        if self.private_networking {
            fields.push(("enable_private_network", "yes".to_string()));
        }
        if self.auto_backups {
            fields.push(("auto_backups", "yes".to_string()));
        }
        fields
    }
}
