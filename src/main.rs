use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use vultr::api::VultrClient;
use vultr::cli::{dispatch, Cli};
use vultr::config::{self, Settings};
use vultr::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so table output on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // Usage errors exit here, before any API call
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());
    let settings = Settings::resolve(cli.api_key, cli.endpoint, cli.verbose);

    let client = match VultrClient::new(&settings) {
        Ok(client) => client,
        Err(e) => fail(e),
    };
    tracing::debug!(endpoint = client.api_base_url(), "API client ready");

    match dispatch(&client, cli.command).await {
        Ok(output) => print!("{}", output),
        Err(e) => fail(e),
    }
}

fn fail(e: CliError) -> ! {
    tracing::debug!(error = ?e, "command failed");
    eprintln!("{}: {}", yansi::Paint::new("Error").red().bold(), e);
    process::exit(1);
}
