//! nucamp - campsite details and comments in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use nucamp::RunOptions;
use nucamp_core::prelude::*;
use nucamp_core::CampsiteId;

/// Browse a campsite, its comments and your favorites
#[derive(Parser, Debug)]
#[command(name = "nucamp")]
#[command(about = "Campsite details, comments and favorites in the terminal", long_about = None)]
struct Args {
    /// JSON file with campsites, comments and favorites
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Id of the campsite to open (defaults to the first one)
    #[arg(long, value_name = "ID")]
    campsite: Option<CampsiteId>,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Print the available campsites and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        let store = nucamp::load_store(args.data.as_deref())?;
        let stdout = std::io::stdout();
        return nucamp::list_campsites(&store, &mut stdout.lock());
    }

    nucamp::run(RunOptions {
        data: args.data,
        campsite: args.campsite,
        config_dir: args.config_dir,
    })
    .await
}
