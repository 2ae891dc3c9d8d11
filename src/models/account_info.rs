use serde::Deserialize;

use super::lenient;

/// Owner of the API key, as returned by the auth info endpoint.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccountInfo {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default)]
    pub acls: Vec<String>,
}
