use std::{error::Error, io};

use fitdash_app::{config::Config, console::Console, dashboard::Dashboard, logging};
use fitdash_pdf::PdfExporter;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!("Starting dashboard, exporting to {}", config.export_dir.display());

    let dashboard = Dashboard::new(Box::new(PdfExporter::new()));
    let mut console = Console::new(io::stdin().lock(), io::stdout(), dashboard, config.export_dir);
    console.run()?;

    Ok(())
}
