mod config;

use clap::Parser;
use config::{Config, usage};
use ecrlogin_aws::EcrTokenSource;
use ecrlogin_core::ProcessLogin;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docker-login-ecr", disable_help_flag = true)]
struct Cli {
    /// 使い方を表示
    #[arg(short, long)]
    help: bool,

    /// 受け付けるが使用しない
    #[arg(hide = true, trailing_var_arg = true)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let program = config::program_name();

    if cli.help {
        eprintln!("{}", usage(&program));
        return Ok(());
    }

    // ログはstderrへ。通常は warn 以上のみ
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if !cli.rest.is_empty() {
        tracing::debug!("Ignoring arguments: {:?}", cli.rest);
    }

    let config = Config::from_env(program);
    run(&config).await
}

async fn run(config: &Config) -> anyhow::Result<()> {
    tracing::debug!("{}: logging in with {}", config.program, config.client);

    let source = EcrTokenSource::from_environment().await?;
    ecrlogin_core::login(&source, &ProcessLogin::new(), &config.client).await?;
    Ok(())
}
