use std::io;
use std::path::Path;
use std::process::ExitCode;

use phrasebook_tts::engines::google::{GoogleEngine, VoiceConfig};
use phrasebook_tts::run::run;

fn main() -> ExitCode {
    env_logger::init();

    // Voice is fixed: German, female, MP3 output.
    let engine = match GoogleEngine::new(VoiceConfig::default()) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    if let Err(e) = run(stdin.lock(), &engine, Path::new(".")) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
