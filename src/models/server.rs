use serde::Deserialize;

use super::lenient;

/// A virtual machine as reported by the API.
///
/// An empty `id` means the API did not know the requested server.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Server {
    #[serde(rename = "SUBID", default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "label", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "DCID", default, deserialize_with = "lenient::unsigned")]
    pub region_id: u32,
    #[serde(rename = "VPSPLANID", default, deserialize_with = "lenient::unsigned")]
    pub plan_id: u32,
    #[serde(rename = "OSID", default, deserialize_with = "lenient::string")]
    pub os_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub os: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub power_status: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(rename = "vcpu_count", default, deserialize_with = "lenient::unsigned")]
    pub vcpus: u32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ram: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub disk: String,
    #[serde(rename = "allowed_bandwidth_gb", default, deserialize_with = "lenient::float")]
    pub allowed_bandwidth: f64,
    #[serde(rename = "current_bandwidth_gb", default, deserialize_with = "lenient::float")]
    pub current_bandwidth: f64,
    #[serde(rename = "cost_per_month", default, deserialize_with = "lenient::string")]
    pub cost: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pending_charges: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub main_ip: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub netmask_v4: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub gateway_v4: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub internal_ip: String,
    #[serde(rename = "v6_main_ip", default, deserialize_with = "lenient::string")]
    pub main_ipv6: String,
    #[serde(rename = "v6_network", default, deserialize_with = "lenient::string")]
    pub network_v6: String,
    #[serde(rename = "v6_network_size", default, deserialize_with = "lenient::string")]
    pub network_size_v6: String,
    #[serde(rename = "date_created", default, deserialize_with = "lenient::string")]
    pub created: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub default_password: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub auto_backups: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub kvm_url: String,
}

impl Server {
    pub fn is_found(&self) -> bool {
        !self.id.is_empty()
    }
}
