use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Launch options for the activity sign-up server.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mergington-backend",
    version,
    about = "Mergington High School activity sign-up server"
)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "MERGINGTON_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short, env = "MERGINGTON_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "MERGINGTON_STATIC_DIR", default_value = crate::DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
