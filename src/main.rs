use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};
use weather_mcp::config::{default_bind_addr, DEFAULT_HTTP_PATH};
use weather_mcp::transport::{http, stdio};
use weather_mcp::{HttpConfig, ServerConfig, TransportKind};

/// Demo MCP server with a weather tool and prompt
///
/// Answers from a fixed table of cities (Delhi, Mumbai, Kolkata, Chennai).
#[derive(Parser, Debug)]
#[command(name = "weather-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transport to serve on
    #[arg(short, long, value_enum, default_value_t = TransportKind::Stdio)]
    transport: TransportKind,

    /// Address to listen on (http transport)
    #[arg(short, long, default_value_t = default_bind_addr())]
    bind: SocketAddr,

    /// Endpoint path (http transport)
    #[arg(short, long, default_value = DEFAULT_HTTP_PATH)]
    path: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    // stdout carries the stdio protocol, so logs never go there
    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_ansi(false).with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file)?;

    info!("Starting weather-mcp v{}", env!("CARGO_PKG_VERSION"));

    let server_config = ServerConfig::default();

    match args.transport {
        TransportKind::Stdio => {
            let server = weather_mcp::weather_server(server_config);

            // Failures are logged, not turned into an error exit
            match stdio::run(&server).await {
                Ok(()) => info!("MCP server stopped normally"),
                Err(e) => error!("Error starting server: {}", e),
            }
        }
        TransportKind::Http => {
            let http_config = HttpConfig::new(args.bind, args.path);
            http::run(http_config, server_config).await?;
        }
    }

    Ok(())
}
