//! Single-title classification, with the rule that decided it.

use std::io::Write;

use anyhow::Result;
use ea_core::{Classifier, Verdict};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ClassifyOutput<'a> {
    title: &'a str,
    attendees: u32,
    #[serde(flatten)]
    verdict: Verdict,
}

pub fn run<W: Write>(
    writer: &mut W,
    classifier: &Classifier,
    title: &str,
    attendees: u32,
    json: bool,
) -> Result<()> {
    let verdict = classifier.explain(title, attendees);

    if json {
        let output = ClassifyOutput {
            title,
            attendees,
            verdict,
        };
        serde_json::to_writer(&mut *writer, &output)?;
        writeln!(writer)?;
        return Ok(());
    }

    match &verdict.keyword {
        Some(keyword) => writeln!(
            writer,
            "{} (rule: {}, keyword: \"{keyword}\")",
            verdict.kind, verdict.rule
        )?,
        None => writeln!(writer, "{} (no rule matched)", verdict.kind)?,
    }
    Ok(())
}
