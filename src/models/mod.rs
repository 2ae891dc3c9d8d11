pub mod account_info;
pub mod bandwidth;
pub mod lenient;
pub mod os_item;
pub mod server;
pub mod server_options;

pub use account_info::AccountInfo;
pub use bandwidth::BandwidthSample;
pub use os_item::OsItem;
pub use server::Server;
pub use server_options::ServerOptions;
