use serde::Deserialize;

use super::lenient;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OsItem {
    #[serde(rename = "OSID", default, deserialize_with = "lenient::unsigned")]
    pub id: u32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub arch: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub family: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub windows: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub surcharge: String,
}
