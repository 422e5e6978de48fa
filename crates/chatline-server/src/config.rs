//! Server configuration.

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (default `0.0.0.0`).
    pub bind: String,
    /// Port to listen on (default `5000`).
    pub listen_port: u16,
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable        | Default   | Description       |
    /// |-----------------|-----------|-------------------|
    /// | `CHATLINE_BIND` | `0.0.0.0` | Listen interface  |
    /// | `CHATLINE_PORT` | `5000`    | HTTP listen port  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unparsable ports fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_port = lookup("CHATLINE_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);
        let bind = lookup("CHATLINE_BIND").unwrap_or_else(|| "0.0.0.0".to_string());

        Self { bind, listen_port }
    }

    /// `host:port` string for [`tokio::net::TcpListener::bind`].
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.listen_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert_eq!(cfg.listen_port, 5000);
        assert_eq!(cfg.address(), "0.0.0.0:5000");
    }

    #[test]
    fn port_and_bind_from_lookup() {
        let cfg = ServerConfig::from_lookup(|k| match k {
            "CHATLINE_PORT" => Some("8080".into()),
            "CHATLINE_BIND" => Some("127.0.0.1".into()),
            _ => None,
        });
        assert_eq!(cfg.address(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_port_uses_default() {
        let cfg = ServerConfig::from_lookup(|k| (k == "CHATLINE_PORT").then(|| "http".into()));
        assert_eq!(cfg.listen_port, 5000);
    }
}
