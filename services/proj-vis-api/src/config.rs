//! Server configuration.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use proj_common::DEFAULT_CRS;
use projection::build_transform;

/// Listen address of the original service.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:7765";

/// Startup configuration, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,

    /// CRS used for `projFrom`/`projTo` when a request omits them.
    pub default_crs: String,
}

impl ServerConfig {
    /// Validate raw settings into a config.
    ///
    /// The default CRS is resolved once here so a typo fails at startup
    /// rather than on every request that relies on it.
    pub fn new(listen: &str, default_crs: &str) -> Result<Self> {
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", listen))?;

        build_transform(default_crs, default_crs)
            .with_context(|| format!("Invalid default CRS: {}", default_crs))?;

        Ok(Self {
            listen_addr,
            default_crs: default_crs.trim().to_string(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 7765)),
            default_crs: DEFAULT_CRS.to_string(),
        }
    }
}
