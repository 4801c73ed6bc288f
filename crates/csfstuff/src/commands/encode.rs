use clap::Args;
use csfstuff_csf::{
    split_metadata, write_entries, ExtraData, Metadata, MetadataSource, METADATA_LABEL,
};
use csfstuff_str::StrReader;
use miette::{Context, IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use super::{create, open};
use crate::error::ensure_distinct;

#[derive(Args)]
pub struct EncodeArgs {
    /// An input STR file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// A target CSF file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Extra data to attach to labels, as stored by decode
    #[arg(long, value_name = "FILE")]
    extra_data: Option<PathBuf>,

    /// Read the CSF metadata from this file instead of the STR file
    #[arg(long, value_name = "FILE")]
    metadata: Option<PathBuf>,
}

impl EncodeArgs {
    fn metadata(&self, source: MetadataSource) -> Result<Metadata> {
        let Some(path) = &self.metadata else {
            if source.is_default() {
                warn!(
                    "{} must exist and appear as the first item, falling back to default metadata ({})",
                    METADATA_LABEL,
                    source.metadata()
                );
            }
            return Ok(source.metadata());
        };

        let metadata = Metadata::from_reader(open(path)?)
            .context(format!("reading metadata from {}", path.display()))?;
        if let MetadataSource::Embedded(embedded) = source {
            if embedded != metadata {
                warn!(
                    "{} ({}) is overridden by {} ({})",
                    METADATA_LABEL,
                    embedded,
                    path.display(),
                    metadata
                );
            }
        }
        Ok(metadata)
    }

    pub fn handle(&self) -> Result<()> {
        let mut files = vec![
            ("input", self.input.as_path()),
            ("output", self.output.as_path()),
        ];
        if let Some(extra_data) = &self.extra_data {
            files.push(("extra data", extra_data.as_path()));
        }
        if let Some(metadata) = &self.metadata {
            files.push(("metadata", metadata.as_path()));
        }
        ensure_distinct(&files)?;

        let text = std::fs::read_to_string(&self.input)
            .into_diagnostic()
            .context(format!("path: {}", &self.input.display()))?;
        let entries = StrReader::default()
            .parse(&text)
            .context(format!("reading {}", &self.input.display()))?;

        let (source, mut entries) = split_metadata(entries)?;
        let metadata = self.metadata(source)?;

        if let Some(path) = &self.extra_data {
            let extra_data = ExtraData::from_reader(open(path)?)
                .context(format!("reading extra data from {}", path.display()))?;
            info!("attaching extra data of {} labels", extra_data.len());
            extra_data.attach(&mut entries);
        }

        write_entries(create(&self.output)?, metadata, &entries)
            .context(format!("writing {}", &self.output.display()))?;
        info!(
            "wrote {} entries to {} ({})",
            entries.len(),
            &self.output.display(),
            metadata
        );

        Ok(())
    }
}
