//! CLI command implementations

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use scn_core::{CodeGraph, GraphProvider, SnapshotFile};

use crate::config::ScnConfig;

fn load(input: &Path) -> anyhow::Result<CodeGraph> {
    let graph = SnapshotFile::new(input)
        .provide()
        .with_context(|| format!("cannot load graph from {}", input.display()))?;
    tracing::info!(
        "Loaded {} nodes ({} files), {} edges from {}",
        graph.node_count(),
        graph.file_count(),
        graph.edge_count(),
        input.display()
    );
    Ok(graph)
}

pub fn render(input: &Path, output: Option<&Path>, config: &ScnConfig) -> anyhow::Result<()> {
    let graph = load(input)?;
    let (document, stats) = scn_render::render_with_stats(&graph, &config.render);
    tracing::info!(
        "Rendered {} files, {} entities, {} bytes (~{} tokens)",
        stats.files,
        stats.entities,
        stats.bytes,
        stats.estimated_tokens
    );

    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn stats(input: &Path, config: &ScnConfig) -> anyhow::Result<()> {
    let graph = load(input)?;
    let (_, stats) = scn_render::render_with_stats(&graph, &config.render);
    println!("{stats}");
    Ok(())
}

pub fn check(input: &Path) -> anyhow::Result<()> {
    let graph = load(input)?;
    println!(
        "ok: {} nodes, {} files, {} edges",
        graph.node_count(),
        graph.file_count(),
        graph.edge_count()
    );
    Ok(())
}
