use clap::Args;
use csfstuff_csf::{embed_metadata, CsfReader};
use csfstuff_str::{write_entries, EscapeMode};
use miette::{Context, IntoDiagnostic, Result};
use std::{io::Cursor, path::PathBuf};
use tracing::info;

use super::create;
use crate::error::ensure_distinct;

#[derive(Args)]
pub struct DecodeArgs {
    /// An input CSF file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// A target STR file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Where to store the extra data attached to labels, written only if there is any
    #[arg(long, value_name = "FILE", default_value = "extra_data.json")]
    extra_data: PathBuf,

    /// Also store the CSF metadata in this file
    #[arg(long, value_name = "FILE")]
    metadata: Option<PathBuf>,
}

impl DecodeArgs {
    pub fn handle(&self) -> Result<()> {
        let mut files = vec![
            ("input", self.input.as_path()),
            ("output", self.output.as_path()),
            ("extra data", self.extra_data.as_path()),
        ];
        if let Some(metadata) = &self.metadata {
            files.push(("metadata", metadata.as_path()));
        }
        ensure_distinct(&files)?;

        let data = std::fs::read(&self.input)
            .into_diagnostic()
            .context(format!("path: {}", &self.input.display()))?;
        let csf = CsfReader::new(Cursor::new(data))
            .context(format!("decoding {}", &self.input.display()))?;

        let metadata = csf.metadata();
        let extra_data = csf.extra_data();
        info!(
            "read {} entries from {} ({})",
            csf.len(),
            &self.input.display(),
            metadata
        );

        let entries = embed_metadata(&metadata, csf.into_entries())?;
        write_entries(create(&self.output)?, EscapeMode::Escape, &entries)
            .context(format!("writing {}", &self.output.display()))?;
        info!("wrote {}", &self.output.display());

        if !extra_data.is_empty() {
            extra_data.to_writer(create(&self.extra_data)?)?;
            info!(
                "wrote extra data of {} labels to {}",
                extra_data.len(),
                &self.extra_data.display()
            );
        }

        if let Some(path) = &self.metadata {
            metadata.to_writer(create(path)?)?;
            info!("wrote metadata to {}", path.display());
        }

        Ok(())
    }
}
