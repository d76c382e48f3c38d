use std::path::Path;

use anyhow::Result;
use mindloom_core::ExtractionPipeline;

use super::read_note;

pub fn run(input: Option<&Path>, max_nodes: usize, counts: bool) -> Result<()> {
    let note = read_note(input)?;
    let extraction = ExtractionPipeline::new()
        .with_max_nodes(max_nodes)
        .extract_note(&note);

    for phrase in &extraction.keywords {
        if counts {
            println!("{:>5}  {}", phrase.count, phrase.text);
        } else {
            println!("{}", phrase.text);
        }
    }

    Ok(())
}
