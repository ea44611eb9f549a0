use crate::prelude::*;
use clap::Parser;

mod error;
mod prelude;
mod routes;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "REST API backing the Jordi Kongolo portfolio website"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Start the HTTP server
    Serve(crate::server::ServeOptions),

    /// List the endpoints the server exposes
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Routes => crate::routes::run(app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
