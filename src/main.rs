use tracing::debug;
use tracing_subscriber::EnvFilter;
use xtranslate::mt::{GoogleTranslateProvider, MtResult};
use xtranslate::{Config, Request};

mod cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the translation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();
    let Some(request) = cli::request_from_matches(&matches) else {
        eprintln!("{}", cli::build_cli().render_help());
        std::process::exit(1);
    };

    if let Err(e) = run(&request).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(request: &Request) -> MtResult<()> {
    let config = Config::from_env()?;
    debug!(?config, "Loaded configuration");

    let provider = GoogleTranslateProvider::new(config.clone())?;
    xtranslate::run(request, &config, &provider, &mut std::io::stdout()).await
}
