//! Command-line and environment options.
//!
//! ```text
//! carbon-calculator [--query] [--regions <path>]
//! ```
//!
//! `--regions` falls back to the `CARBON_REGIONS_FILE` environment variable.

use std::path::PathBuf;

use thiserror::Error;

use footprint::constants::REGIONS_FILE_ENV;

pub const USAGE: &str = "usage: carbon-calculator [--query] [--regions <path>]\n\
    \n\
    --query            read JSON commands from stdin, write JSON responses to stdout\n\
    --regions <path>   load extra regions from a JSON file (or set CARBON_REGIONS_FILE)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Run headless, answering queries on stdin/stdout.
    pub query_mode: bool,
    /// Extra region file layered over the built-in table.
    pub regions_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

impl LaunchOptions {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::parse(
            std::env::args().skip(1),
            std::env::var_os(REGIONS_FILE_ENV).map(PathBuf::from),
        )
    }

    /// Parses `args` (without the program name). An explicit `--regions`
    /// wins over `env_regions`.
    pub fn parse<I>(args: I, env_regions: Option<PathBuf>) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = LaunchOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--query" => options.query_mode = true,
                "--regions" => {
                    let path = args.next().ok_or(CliError::MissingValue("--regions"))?;
                    options.regions_file = Some(PathBuf::from(path));
                }
                _ => return Err(CliError::UnknownArgument(arg)),
            }
        }
        if options.regions_file.is_none() {
            options.regions_file = env_regions.filter(|p| !p.as_os_str().is_empty());
        }
        Ok(options)
    }
}
