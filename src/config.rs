use std::{env, net::IpAddr, net::Ipv4Addr, net::SocketAddr};

const DEFAULT_PORT: u16 = 8080;

/// Listener settings taken from `PORT` and `BIND_ADDR`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("BIND_ADDR").ok(), env::var("PORT").ok())
    }

    fn from_vars(bind_addr: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: bind_addr
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.bind_addr),
            port: port
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
