use anyhow::Result;
use clap::Parser;
use quicklink::config::Config;
use quicklink::server;
use tracing_subscriber::EnvFilter;

/// URL shortener service.
///
/// Settings come from the environment (and `.env`); flags override them for
/// a single run.
#[derive(Parser)]
#[command(name = "quicklink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, e.g. 0.0.0.0:3000 (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Public base address of short links (overrides BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
