//! The `extract` command: run the full pipeline and write both outputs.

use crate::{builder, discover, output};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct ExtractConfig {
    pub root: Option<PathBuf>,
    pub json_output: PathBuf,
    pub rust_output: PathBuf,
    pub no_prompt: bool,
}

pub fn handle_extract(config: ExtractConfig) -> Result<()> {
    let root = resolve_root(&config)?;
    log::info!("scanning {}", root.display());

    let maps = builder::collect_maps(&root)?;

    // Both outputs render from the same finalized collection; nothing is
    // written until collection succeeds.
    let document = output::json::to_document(&maps)?;
    fs::write(&config.json_output, document)
        .with_context(|| format!("writing {}", config.json_output.display()))?;
    log::info!("wrote {}", config.json_output.display());

    let fragment = output::rust_gen::generate(&maps);
    fs::write(&config.rust_output, fragment)
        .with_context(|| format!("writing {}", config.rust_output.display()))?;
    log::info!("wrote {}", config.rust_output.display());

    output::summary::print_summary(&maps);
    Ok(())
}

fn resolve_root(config: &ExtractConfig) -> Result<PathBuf> {
    if let Some(root) = &config.root {
        if !root.is_dir() {
            bail!("installation path does not exist: {}", root.display());
        }
        return Ok(root.clone());
    }

    if let Some(found) = discover::find_installation() {
        log::info!("found installation at {}", found.display());
        return Ok(found);
    }

    if config.no_prompt {
        bail!("no War Thunder installation found; pass a path or set WT_DIR");
    }

    let entered = discover::prompt_for_path().context("reading path from stdin")?;
    if !entered.is_dir() {
        bail!("installation path does not exist: {}", entered.display());
    }
    Ok(entered)
}
