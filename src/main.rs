use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rowkeeper::{
    cli::{Cli, Command},
    db::{self, schema},
    stub::StubExecutor,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(std::io::stderr)
        .init();

    if cli.stub {
        tracing::info!("using stub executor");
        return cli.command.run(&StubExecutor::default()).await;
    }

    let conn = db::open(&cli.db).await?;
    match cli.command {
        Command::Init => schema::install(&conn).await,
        cmd => cmd.run(&conn).await,
    }
}
