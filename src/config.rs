pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::fixed()
    }
}

impl Config {
    /// Every service listens on all interfaces, port 5000. Nothing from the
    /// environment, the command line or a config file is consulted.
    pub fn fixed() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
