#![deny(warnings)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use xptui::{
    app::App,
    cli::Cli,
    infrastructure::{config::Config, tui::real::RealTui},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut app = App::new(config);
    app.run(tui).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
