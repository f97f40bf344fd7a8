/// Network adapters for the administration servers
mod connection;
mod iq_http_client;
mod rm_http_client;

pub use connection::ConnectionSettings;
pub use iq_http_client::IqHttpClient;
pub use rm_http_client::RmHttpClient;
