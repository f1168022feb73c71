//! The sequential processing loop: read a line, synthesize the phrase,
//! write the audio file, append the log record.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::phrase::LineParser;
use crate::SynthesisEngine;

/// Name of the tab-separated phrase/translation log, created in the output
/// directory and truncated on every run.
pub const OUTPUT_LOG: &str = "output.txt";

/// Process every line of `input` with `engine`, writing audio files and the
/// log into `dir`.
///
/// Strictly sequential and blocking: each line is parsed, synthesized, and
/// written before the next is read. The first error of any kind (input read,
/// synthesis, file write) aborts the loop and is returned; files already
/// written stay in place, and no log record is appended for the failed line.
/// Phrases whose sanitized names collide silently overwrite each other.
pub fn run<R, E>(input: R, engine: &E, dir: &Path) -> Result<(), Box<dyn Error>>
where
    R: BufRead,
    E: SynthesisEngine,
{
    let parser = LineParser::new();
    let mut log_file = File::create(dir.join(OUTPUT_LOG))?;

    for line in input.lines() {
        let line = line?;
        let entry = parser.parse(&line);

        let result = engine.synthesize(&entry.phrase)?;
        let filename = format!(
            "{}.{}",
            parser.file_stem(&entry.phrase),
            result.encoding.extension()
        );
        result.write_to(&dir.join(&filename))?;

        writeln!(log_file, "{}\t{}", entry.phrase, entry.translation)?;
        log::info!(
            "{:?} -> {} ({} bytes)",
            entry.phrase,
            filename,
            result.audio.len()
        );
    }

    Ok(())
}
