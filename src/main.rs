use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

use listing_normalizer::{run, Config, ErrorPolicy, NullStyle};

#[derive(Parser)]
#[command(name = "listing-normalizer")]
#[command(about = "Flatten JSON auction listings into pipe-delimited .dat files for bulk loading")]
#[command(version)]
struct Cli {
    /// Input files; paths not ending in .json are ignored
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory for Item.dat, Category.dat, Belong.dat, Bid.dat, User.dat
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Abort the batch on the first bad file/listing, or skip it
    #[arg(long, value_enum, default_value_t = ErrorPolicyArg::Abort)]
    on_error: ErrorPolicyArg,

    /// Render absent values as bare NULL, or as "NULL" inside quoted columns
    #[arg(long, value_enum, default_value_t = NullStyleArg::Bare)]
    null_style: NullStyleArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ErrorPolicyArg {
    Abort,
    Skip,
}

impl From<ErrorPolicyArg> for ErrorPolicy {
    fn from(arg: ErrorPolicyArg) -> Self {
        match arg {
            ErrorPolicyArg::Abort => ErrorPolicy::Abort,
            ErrorPolicyArg::Skip => ErrorPolicy::Skip,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NullStyleArg {
    Bare,
    Quoted,
}

impl From<NullStyleArg> for NullStyle {
    fn from(arg: NullStyleArg) -> Self {
        match arg {
            NullStyleArg::Bare => NullStyle::Bare,
            NullStyleArg::Quoted => NullStyle::Quoted,
        }
    }
}

fn main() -> Result<()> {
    // Usage errors exit non-zero here, before any file is touched
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::new()
        .with_output_dir(&cli.output_dir)
        .with_error_policy(cli.on_error.into())
        .with_null_style(cli.null_style.into());

    if let Err(e) = run(config, &cli.files) {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
