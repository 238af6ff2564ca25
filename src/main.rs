use clap::Parser;
use critterpedia::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CRITTERPEDIA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = critterpedia::commands::run(cli, stdin.lock(), &mut stdout) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
