use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    commands::{AddCustomer, AddUser},
    operations::ExecuteQuery,
};

#[derive(Parser, Debug)]
#[clap(name = "rowkeeper", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(long, env = "ROWKEEPER_DB", default_value = "records.sqlite3")]
    pub db: String,

    /// Use an in-memory stub instead of the database
    #[clap(long)]
    pub stub: bool,

    /// Log filter, e.g. `debug` or `rowkeeper=trace`
    #[clap(long, env = "ROWKEEPER_LOG", default_value = "info")]
    pub log: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the schema
    #[clap(name = "init")]
    Init,
    #[clap(name = "add-user")]
    AddUser(AddUser),
    #[clap(name = "add-customer")]
    AddCustomer(AddCustomer),
}

impl Command {
    /// Run an insert command against `executor`
    pub async fn run<E>(&self, executor: &E) -> Result<()>
    where
        E: ExecuteQuery + ?Sized,
    {
        match self {
            Command::Init => anyhow::bail!("init needs a database"),
            Command::AddUser(cmd) => cmd.run(executor).await,
            Command::AddCustomer(cmd) => cmd.run(executor).await,
        }
    }
}
