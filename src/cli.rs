use clap::{Parser, Subcommand};

use crate::api::VultrApi;
use crate::error::CliError;
use crate::handlers;
use crate::models::ServerOptions;

#[derive(Parser, Debug)]
#[command(
    name = "vultr",
    author,
    version,
    about = "Manage Vultr virtual machines from the command line",
    long_about = r#"Manage Vultr virtual machines from the command line.

Credentials are read from VULTR_API_KEY (or a .env file) unless --api-key is given.

Examples:
  vultr servers
  vultr server show 576965 --full
  vultr server create -n web1 -r 1 -p 201 -o 215 --ipv6
"#,
    after_help = "Use `vultr <subcommand> --help` to get subcommand specific options."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// API key (overrides VULTR_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,
    /// API base URL (overrides VULTR_API_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Path to .env file
    #[arg(long, global = true)]
    pub env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Print a curl-equivalent line for every API request on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Manage virtual machines (create, show, power, delete, etc.)")]
    Server {
        #[command(subcommand)]
        sub: ServerCommands,
    },
    /// List all virtual machines
    Servers,
    #[command(about = "Validate configuration", long_about = "Check that an API key is configured and accepted by the API.")]
    CheckConfig,
}

#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Create a new virtual machine
    Create {
        /// Name of new virtual machine
        #[arg(short, long)]
        name: String,
        /// Region (DCID)
        #[arg(short, long)]
        region: u32,
        /// Plan (VPSPLANID)
        #[arg(short, long)]
        plan: u32,
        /// Operating system (OSID)
        #[arg(short, long)]
        os: u32,
        /// Chainload the specified URL on bootup, via iPXE, for custom OS
        #[arg(long, default_value = "")]
        ipxe: String,
        /// ISOID of a specific ISO to mount during the deployment, for custom OS
        #[arg(long, default_value_t = 0)]
        iso: u32,
        /// SCRIPTID of a startup script to execute on boot
        #[arg(short, long, default_value_t = 0)]
        script: u32,
        /// SNAPSHOTID to restore for the initial installation
        #[arg(long, default_value = "")]
        snapshot: String,
        /// SSHKEYID of SSH key to apply to this server on install
        #[arg(short = 'k', long, default_value = "")]
        sshkey: String,
        /// Assign an IPv6 subnet to this virtual machine (where available)
        #[arg(long)]
        ipv6: bool,
        /// Add private networking support for this virtual machine
        #[arg(long)]
        private_networking: bool,
        /// Enable automatic backups for this virtual machine
        #[arg(long)]
        autobackups: bool,
    },
    /// Rename a virtual machine
    Rename {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
        /// New name of virtual machine
        #[arg(short, long)]
        name: String,
    },
    /// Start a virtual machine (restarts it if already running)
    Start {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// Halt a virtual machine (hard power off)
    Halt {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// Reboot a virtual machine (hard reboot)
    Reboot {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// Reinstall the operating system of a virtual machine
    Reinstall {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// Change the operating system of a virtual machine
    ChangeOs {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
        /// Operating system (OSID)
        #[arg(short, long)]
        os: u32,
    },
    /// List operating systems a virtual machine can be changed to
    ListOs {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// Delete a virtual machine
    Delete {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// Show bandwidth usage of a virtual machine
    Bandwidth {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
    },
    /// List all virtual machines
    List,
    /// Show all details of a virtual machine
    Show {
        /// SUBID of virtual machine (see `vultr servers`)
        subid: String,
        /// Display full length of KVM URL
        #[arg(short, long)]
        full: bool,
    },
}

/// Runs one command against `api` and returns the text to print.
pub async fn dispatch<C: VultrApi>(api: &C, command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Servers => handlers::servers::list(api).await,
        Commands::CheckConfig => handlers::system::check_config(api).await,
        Commands::Server { sub } => match sub {
            ServerCommands::Create {
                name,
                region,
                plan,
                os,
                ipxe,
                iso,
                script,
                snapshot,
                sshkey,
                ipv6,
                private_networking,
                autobackups,
            } => {
                let options = ServerOptions {
                    ipxe_chain_url: ipxe,
                    iso,
                    script,
                    snapshot,
                    ssh_key: sshkey,
                    ipv6,
                    private_networking,
                    auto_backups: autobackups,
                };
                handlers::servers::create(api, &name, region, plan, os, &options).await
            }
            ServerCommands::Rename { subid, name } => handlers::servers::rename(api, &subid, &name).await,
            ServerCommands::Start { subid } => handlers::servers::start(api, &subid).await,
            ServerCommands::Halt { subid } => handlers::servers::halt(api, &subid).await,
            ServerCommands::Reboot { subid } => handlers::servers::reboot(api, &subid).await,
            ServerCommands::Reinstall { subid } => handlers::servers::reinstall(api, &subid).await,
            ServerCommands::ChangeOs { subid, os } => handlers::servers::change_os(api, &subid, os).await,
            ServerCommands::ListOs { subid } => handlers::servers::list_os(api, &subid).await,
            ServerCommands::Delete { subid } => handlers::servers::delete(api, &subid).await,
            ServerCommands::Bandwidth { subid } => handlers::servers::bandwidth(api, &subid).await,
            ServerCommands::List => handlers::servers::list(api).await,
            ServerCommands::Show { subid, full } => handlers::servers::show(api, &subid, full).await,
        },
    }
}
