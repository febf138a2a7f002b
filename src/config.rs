//! Runtime configuration
//!
//! All process-wide settings are read once at startup into an explicit
//! `Config` handed to the request handlers, instead of ad-hoc environment
//! lookups scattered through handler code.

use clap::Parser;

/// dealfinder service configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "dealfinder")]
#[command(about = "Google Shopping deal search and ranking service", long_about = None)]
#[command(version)]
pub struct Config {
    /// SerpApi key for outbound shopping searches
    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    pub serpapi_key: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Phone number returned by the /validate endpoint
    #[arg(long, env = "VALIDATE_NUMBER", default_value = "+919876543210")]
    pub validate_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "dealfinder",
            "--serpapi-key",
            "test-key",
            "--port",
            "9090",
            "--validate-number",
            "+10000000000",
        ])
        .unwrap();

        assert_eq!(config.serpapi_key.as_deref(), Some("test-key"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.validate_number, "+10000000000");
    }

    #[test]
    fn test_port_rejects_non_numeric() {
        let result = Config::try_parse_from(["dealfinder", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}
