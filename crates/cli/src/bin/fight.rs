//! Fight detection entry point
//!
//! `fight-predict <video-path>` prints `Fight` or `NonFight` on success, or
//! a fixed message and exits 1 when the video is missing, unreadable, or
//! empty.

use cli::{fight_error_message, init_logging, load_config};
use fight_detection::{FightConfig, FightDetector, FightError, VideoAnalysis};
use tracing::error;

fn main() {
    init_logging();

    // Extra arguments are ignored; only the video path is read.
    let Some(path) = std::env::args().nth(1) else {
        println!("❌ Chemin de la vidéo manquant.");
        std::process::exit(1);
    };

    match run(&path) {
        Ok(analysis) => println!("{}", analysis.verdict.as_str()),
        Err(e) => {
            error!(error = %e, "fight detection failed");
            println!("{}", fight_error_message(&e));
            std::process::exit(1);
        }
    }
}

fn run(path: &str) -> Result<VideoAnalysis, FightError> {
    let config: FightConfig = load_config("fight");
    let detector = FightDetector::new(config)?;
    detector.analyze(path)
}
