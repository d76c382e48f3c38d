use std::fs;
use std::path::Path;

use anyhow::Result;
use mindloom_core::{render, ExtractionPipeline, MindMap};

use super::{read_note, OutputFormat};

pub fn run(
    input: Option<&Path>,
    max_nodes: usize,
    topic: Option<&str>,
    format: OutputFormat,
    out: Option<&Path>,
    show_text: bool,
) -> Result<()> {
    let note = read_note(input)?;
    let pipeline = ExtractionPipeline::new().with_max_nodes(max_nodes);
    let mut extraction = pipeline.extract_note(&note);

    if show_text {
        eprintln!("{}", extraction.cleaned);
    }

    // the detected topic is an editable default
    if let Some(topic) = topic {
        extraction.main_topic = topic.to_string();
    }

    let map = MindMap::from_extraction(&extraction);

    let rendered = match format {
        OutputFormat::Dot => render::to_dot(&map),
        OutputFormat::Html => render::to_html(&map)?,
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "main_topic": extraction.main_topic,
            "topic_tier": extraction.tier,
            "keywords": extraction.keywords,
            "nodes": map.nodes(),
            "edges": map.edges(),
            "stats": extraction.stats,
        }))?,
    };

    match out {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
