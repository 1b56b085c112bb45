//! Server Configuration
//!
//! Command-line flags with environment variable fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ideo-server", version, about = "List service for the Idea & Feature Tracker")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "IDEO_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// SQLite database file (`:memory:` for a throwaway database)
    #[arg(long, env = "IDEO_DB", default_value = "ideo.db")]
    pub db: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["ideo-server"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db, PathBuf::from("ideo.db"));
    }

    #[test]
    fn test_flags() {
        let config =
            Config::try_parse_from(["ideo-server", "--bind", "0.0.0.0:8080", "--db", ":memory:"])
                .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.db, PathBuf::from(":memory:"));
    }
}
