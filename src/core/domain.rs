use std::env;
use std::net::SocketAddr;

// Configuration abstracts runtime options for the catalog server
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub port: u16,
    pub public_dir: String,
}

impl Configuration {
    pub fn new(port: u16) -> Self {
        Configuration {
            port,
            public_dir: "public".to_string(),
        }
    }

    // PORT and PUBLIC_DIR override the defaults; unparsable ports fall
    // back to 3000
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(3000);
        let mut config = Configuration::new(port);
        if let Ok(public_dir) = env::var("PUBLIC_DIR") {
            config.public_dir = public_dir;
        }
        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
