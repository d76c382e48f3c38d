use std::path::Path;

use anyhow::Result;
use mindloom_core::ExtractionPipeline;

use super::read_note;

pub fn run(input: Option<&Path>) -> Result<()> {
    let note = read_note(input)?;
    let extraction = ExtractionPipeline::new().extract_note(&note);

    println!("{}", extraction.main_topic);

    Ok(())
}
