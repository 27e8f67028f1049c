//! Server configuration.
//!
//! Flags are parsed with `clap` and each has an environment-variable
//! fallback, so the binary can be configured from a `.env` file, the
//! environment, or the command line. [`ServerConfig`] is the validated form
//! consumed by the rest of the server.

use anyhow::Context;
use clap::Parser;

/// Command-line arguments for the todo server.
#[derive(Debug, Parser)]
#[command(name = "todo-tonic-server", version, about = "gRPC todo service")]
pub struct CliArgs {
    /// Address to bind: `host:port` for TCP, or a filesystem path with
    /// `--uds`.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:50051")]
    pub server_addr: String,

    /// Bind a Unix domain socket instead of TCP.
    #[arg(long, env = "SERVER_UDS", default_value_t = false)]
    pub uds: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address; a socket address for TCP or a path for UDS.
    pub server_addr: String,
    /// Whether `server_addr` names a Unix domain socket path.
    pub uds: bool,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.server_addr.is_empty() {
            anyhow::bail!("server address must not be empty");
        }
        // UDS paths are validated by bind(); TCP addresses can be checked
        // up front for a clearer startup error.
        if !args.uds {
            args.server_addr
                .parse::<std::net::SocketAddr>()
                .with_context(|| format!("invalid TCP address `{}`", args.server_addr))?;
        }

        Ok(Self {
            server_addr: args.server_addr,
            uds: args.uds,
        })
    }
}
