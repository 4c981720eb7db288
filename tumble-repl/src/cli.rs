use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const TUMBLE_AUTHOR: &str = crate_authors!();
const TUMBLE_VERSION: &str = crate_version!();
const TUMBLE_ABOUT: &str = crate_description!();
const TUMBLE_FLAG_D_SHORT: char = 'd';
const TUMBLE_FLAG_D_HELP: &str = "Enable Debug logging";
const TUMBLE_FLAG_C_SHORT: char = 'c';
const TUMBLE_FLAG_C_HELP: &str = "Configuration file, defaults to `$TUMBLE_CONFIG` or `.tumble/config.ron`";
const TUMBLE_FLAG_J_HELP: &str = "Print rolls as JSON";

#[derive(Parser, Debug)]
#[command(author = TUMBLE_AUTHOR, version = TUMBLE_VERSION, about = TUMBLE_ABOUT)]
pub struct Args {
    #[arg(short = TUMBLE_FLAG_D_SHORT, long, help = TUMBLE_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = TUMBLE_FLAG_C_SHORT, long, help = TUMBLE_FLAG_C_HELP)]
    pub config: Option<PathBuf>,
    #[arg(long, help = TUMBLE_FLAG_J_HELP, action)]
    pub json: bool,
}
