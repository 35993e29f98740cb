mod args;

use anyhow::{Context, Result, bail};
use args::Cli;
use clap::Parser;
use quoth_config::Config;
use quoth_engine::{
    LoadedDocument, Subpath, content_span, io, resolve_heading, resolve_subpath,
    synthesize_subpath,
};
use std::process;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring unreadable config: {e}");
            Config::default()
        }
    };

    let doc = load(&cli.file, &config)?;
    match (cli.resolve, cli.range) {
        (Some(subpath), _) => {
            let text = owned_text(&doc, &subpath, config.include_heading_line)
                .with_context(|| format!("{subpath} not found in {}", doc.path.display()))?;
            println!("{text}");
        }
        (None, Some(range)) => match synthesize_subpath(&doc.metadata, &range) {
            Some(subpath) => println!("{subpath}"),
            None => {
                eprintln!(
                    "No unique subpath for lines {}-{} of {}",
                    range.min_line() + 1,
                    range.max_line() + 1,
                    doc.path.display()
                );
                process::exit(1);
            }
        },
        (None, None) => bail!("either a range or --resolve is required"),
    }

    Ok(())
}

fn load(file: &str, config: &Config) -> Result<LoadedDocument> {
    if let Some(root) = config.notes_path.as_deref()
        && let Err(e) = io::validate_notes_dir(root)
    {
        log::warn!("Configured notes path '{}' is invalid: {e}", root.display());
    }
    let path = io::locate(file, config.notes_path.as_deref());
    let doc = io::load_document(&path).with_context(|| format!("failed to load {file}"))?;
    log::info!(
        "{}: {} heading(s), {} block anchor(s)",
        doc.path.display(),
        doc.metadata.headings.len(),
        doc.metadata.blocks.len()
    );
    Ok(doc)
}

/// Text addressed by `subpath`, optionally without the heading's own line.
fn owned_text<'a>(
    doc: &'a LoadedDocument,
    subpath: &Subpath,
    include_heading_line: bool,
) -> Option<&'a str> {
    let meta = &doc.metadata;
    if include_heading_line {
        return resolve_subpath(meta, subpath, meta.doc_len).map(|span| span.slice(&doc.text));
    }

    match subpath {
        Subpath::Block(_) => {
            resolve_subpath(meta, subpath, meta.doc_len).map(|span| span.slice(&doc.text))
        }
        Subpath::Headings(_) => {
            let heading = resolve_heading(meta, subpath)?;
            let mut span = content_span(heading, &meta.headings, meta.doc_len);
            span.start = heading.loc.end.offset.min(span.end);
            Some(span.slice(&doc.text).trim_start_matches(['\r', '\n']))
        }
    }
}
