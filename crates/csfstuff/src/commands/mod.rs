pub mod decode;
pub mod encode;
pub mod merge;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Convert a CSF file into a STR file
    Decode(decode::DecodeArgs),
    /// Convert a STR file into a CSF file
    Encode(encode::EncodeArgs),
    /// Merge STR files into one, later files taking priority
    Merge(merge::MergeArgs),
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Decode(decode) => decode.handle(),
            Commands::Encode(encode) => encode.handle(),
            Commands::Merge(merge) => merge.handle(),
        }
    }
}

use miette::{Context, IntoDiagnostic, Result};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(
        File::open(path)
            .into_diagnostic()
            .context(format!("path: {}", path.display()))?,
    ))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(
        File::create(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))?,
    ))
}
