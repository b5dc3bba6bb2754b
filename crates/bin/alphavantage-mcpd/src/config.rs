use clap::{ArgAction, Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use alphavantage_core::upstream::{DEFAULT_BASE_URL, HttpClientConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "alphavantage-mcpd", version, about = "Alpha Vantage MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "ALPHAVANTAGE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "ALPHAVANTAGE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(
        long,
        env = "AVMCP_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(
        long = "stdio",
        env = "AVMCP_ENABLE_STDIO",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "AVMCP_HTTP_SERVE",
        default_value_t = false,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "AVMCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(long, env = "AVMCP_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub log_filter: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("enable_stdio", &self.enable_stdio)
            .field("http_serve", &self.http_serve)
            .field("mcp_http_addr", &self.mcp_http_addr)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl GatewayConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.request_timeout)
    }
}

impl TryFrom<CliArgs> for GatewayConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingSetting("ALPHAVANTAGE_API_KEY"))?;

        let base_url = args.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidSetting {
                name: "ALPHAVANTAGE_BASE_URL",
                value: args.base_url,
            });
        }

        if args.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "AVMCP_REQUEST_TIMEOUT_SECS",
                value: args.request_timeout_secs.to_string(),
            });
        }

        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::InvalidSetting {
                name: "AVMCP_ENABLE_STDIO",
                value: "false while AVMCP_HTTP_SERVE is also false".to_string(),
            });
        }

        if EnvFilter::try_new(&args.log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "AVMCP_LOG",
                value: args.log_filter,
            });
        }

        Ok(Self {
            api_key,
            base_url,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            mcp_http_addr: args.mcp_http_addr,
            log_filter: args.log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            api_key: Some("demo-key".to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            enable_stdio: true,
            http_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn defaults_parse() {
        let config = GatewayConfig::try_from(base_args()).expect("config should parse");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.enable_stdio);
        assert!(!config.http_serve);
        assert_eq!(config.http_client_config().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_api_key_is_missing() {
        let mut args = base_args();
        args.api_key = Some("   ".to_string());
        assert!(matches!(
            GatewayConfig::try_from(args),
            Err(ConfigError::MissingSetting("ALPHAVANTAGE_API_KEY"))
        ));

        let mut args = base_args();
        args.api_key = None;
        assert!(GatewayConfig::try_from(args).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut args = base_args();
        args.request_timeout_secs = 0;
        assert!(matches!(
            GatewayConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "AVMCP_REQUEST_TIMEOUT_SECS", .. })
        ));
    }

    #[test]
    fn at_least_one_transport() {
        let mut args = base_args();
        args.enable_stdio = false;
        assert!(GatewayConfig::try_from(args).is_err());

        let mut args = base_args();
        args.enable_stdio = false;
        args.http_serve = true;
        assert!(GatewayConfig::try_from(args).is_ok());
    }

    #[test]
    fn base_url_needs_a_scheme() {
        let mut args = base_args();
        args.base_url = "www.alphavantage.co/query".to_string();
        assert!(matches!(
            GatewayConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "ALPHAVANTAGE_BASE_URL", .. })
        ));
    }

    #[test]
    fn debug_hides_api_key() {
        let config = GatewayConfig::try_from(base_args()).expect("config should parse");
        assert!(!format!("{config:?}").contains("demo-key"));
    }

    #[test]
    fn cli_flags_parse() {
        let args = CliArgs::try_parse_from([
            "alphavantage-mcpd",
            "--api-key",
            "k",
            "--stdio",
            "false",
            "--http",
            "true",
            "--mcp-http-addr",
            "0.0.0.0:9000",
        ])
        .expect("flags should parse");
        let config = GatewayConfig::try_from(args).expect("config should parse");
        assert!(config.http_serve);
        assert!(!config.enable_stdio);
        assert_eq!(config.mcp_http_addr.port(), 9000);
    }

    #[test]
    fn bare_transport_flag_means_true() {
        let args = CliArgs::try_parse_from(["alphavantage-mcpd", "--api-key", "k", "--http"])
            .expect("flags should parse");
        assert!(args.http_serve);
        assert!(args.enable_stdio);

        let args = CliArgs::try_parse_from([
            "alphavantage-mcpd",
            "--api-key",
            "k",
            "--stdio=off",
            "--http",
        ])
        .expect("flags should parse");
        assert!(!args.enable_stdio);
        assert!(args.http_serve);
    }

    #[test]
    fn disabling_the_only_transport_is_rejected() {
        let args =
            CliArgs::try_parse_from(["alphavantage-mcpd", "--api-key", "k", "--stdio", "no"])
                .expect("flags should parse");
        assert!(matches!(
            GatewayConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "AVMCP_ENABLE_STDIO", .. })
        ));
    }
}
