mod cli;

use crate::cli::app::App;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Line-oriented front end for the TaskSort stores
#[derive(Parser)]
#[command(name = "tasksort", version, about)]
struct Args {
    /// Directory holding the device key-value store
    #[arg(long, default_value = "tasksort-data")]
    data_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut app = App::open(&args.data_dir)?;
    app.run()?;
    Ok(())
}
