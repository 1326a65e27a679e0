use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_on_start: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("TICKTOCK_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("TICKTOCK_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("TICKTOCK_PORT is not a port number: {raw}"))?,
            None => 8080,
        };
        let seed_on_start = match lookup("TICKTOCK_SEED_ON_START").as_deref() {
            Some("false") | Some("0") => false,
            _ => true,
        };
        Ok(Self {
            host,
            port,
            seed_on_start,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
