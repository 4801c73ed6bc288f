use clap::Args;
use csfstuff_str::{write_entries, EscapeMode, StrMerger, StrReader};
use itertools::Itertools;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

use super::create;
use crate::error::ensure_distinct;

#[derive(Args)]
pub struct MergeArgs {
    /// Input STR files from lowest to highest priority, followed by the target STR file
    #[arg(value_name = "FILE", required = true, num_args = 2..)]
    files: Vec<PathBuf>,
}

impl MergeArgs {
    pub fn handle(&self) -> Result<()> {
        let (output, inputs) = self
            .files
            .split_last()
            .ok_or(miette!("no files given"))?;
        if inputs.is_empty() {
            return Err(miette!("no input files given"));
        }
        for input in inputs {
            ensure_distinct(&[("input", input.as_path()), ("output", output.as_path())])?;
        }

        info!("primary file is {}", inputs[0].display());
        if inputs.len() == 1 {
            info!("only one input file given, nothing to merge");
        }

        // Strings are copied exactly as they were written
        let reader = StrReader::new(EscapeMode::PassThrough);
        let mut merger = StrMerger::new();
        for input in inputs {
            info!("merging {}", input.display());

            let text = std::fs::read_to_string(input)
                .into_diagnostic()
                .context(format!("path: {}", input.display()))?;
            let entries = reader
                .parse(&text)
                .context(format!("reading {}", input.display()))?;
            merger
                .merge(entries)
                .context(format!("merging {}", input.display()))?;
        }

        let entries = merger.finish();
        write_entries(create(output)?, EscapeMode::PassThrough, &entries)
            .context(format!("writing {}", output.display()))?;
        info!(
            "merged {} as {} with {} entries",
            inputs.iter().map(|p| p.display()).join(", "),
            output.display(),
            entries.len()
        );

        Ok(())
    }
}
