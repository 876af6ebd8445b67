use crate::domain::models::Category;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "http-rabbits",
    version,
    about = "HTTP status code catalog and rabbit image fetcher"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Settings file (defaults to ./http-rabbits.toml when present)"
    )]
    pub config: Option<PathBuf>,
    // `fetch` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download one image per status code, or write placeholder URLs when
    /// PEXELS_API_KEY is not set.
    Fetch(FetchArgs),
    /// List the status catalog.
    List {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        #[arg(long, default_value_t = false, help = "Only vendor/unofficial codes")]
        unofficial: bool,
    },
    /// Show one status code.
    Show { code: u16 },
    /// Print the image search plan for a status code without searching.
    Query { code: u16 },
    /// Count catalog entries per category.
    Categories,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FetchArgs {
    #[arg(long, help = "Directory receiving <code>.jpg files")]
    pub images_dir: Option<PathBuf>,
    #[arg(long, help = "Image mapping JSON file")]
    pub mapping: Option<PathBuf>,
    #[arg(long, help = "Delay between network-bound entries, in milliseconds")]
    pub delay_ms: Option<u64>,
}

/// Accepts the same spelling the JSON output uses (`client_error`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum CategoryArg {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Informational => Category::Informational,
            CategoryArg::Success => Category::Success,
            CategoryArg::Redirection => Category::Redirection,
            CategoryArg::ClientError => Category::ClientError,
            CategoryArg::ServerError => Category::ServerError,
        }
    }
}
