use std::collections::BTreeMap;

pub const DATE: &str = "date";
pub const INCOMING: &str = "incoming";
pub const OUTGOING: &str = "outgoing";

/// One reporting interval, keyed by `date`, `incoming` and `outgoing`.
pub type BandwidthSample = BTreeMap<String, String>;

/// Value for `key`, or an empty string when the sample lacks it.
pub fn sample_field<'a>(sample: &'a BandwidthSample, key: &str) -> &'a str {
    sample.get(key).map(String::as_str).unwrap_or("")
}
