use crate::api::VultrApi;
use crate::error::CliError;

/// Confirms the configured API key by fetching the account it belongs to.
pub async fn check_config<C: VultrApi>(api: &C) -> Result<String, CliError> {
    let account = api.account_info().await?;
    let owner = match (account.name.trim(), account.email.trim()) {
        ("", "") => "unknown".to_string(),
        (name, "") => name.to_string(),
        ("", email) => format!("<{}>", email),
        (name, email) => format!("{} <{}>", name, email),
    };
    Ok(format!("API key is valid (account: {})\n", owner))
}
