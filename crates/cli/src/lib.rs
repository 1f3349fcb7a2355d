//! Prediction CLI support
//!
//! Shared plumbing for the one-shot prediction binaries: logging to stderr
//! (stdout carries the machine-readable result), optional config files, and
//! the fixed wire messages.

use fight_detection::FightError;
use serde::de::DeserializeOwned;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;
use triage::TriageError;

/// Initialize logging. The subscriber writes to stderr so stdout stays
/// machine-parseable.
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load an optional config file from the working directory, falling back to
/// defaults when the file is absent.
pub fn load_config<T>(name: &str) -> T
where
    T: Default + DeserializeOwned,
{
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .build();

    match settings.and_then(|s| s.try_deserialize()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(config = name, error = %e, "falling back to default configuration");
            T::default()
        }
    }
}

/// The single positional argument, or None when the count is wrong.
pub fn single_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(arg), None) => Some(arg),
        _ => None,
    }
}

/// Print the `{"error": ...}` object the triage wire contract specifies.
pub fn print_error_json(message: &str) {
    println!("{}", serde_json::json!({ "error": message }));
}

/// Fixed wire message for a triage failure stage. The underlying detail
/// stays in the logs; the wire message is deliberately generic.
pub fn triage_error_message(err: &TriageError) -> &'static str {
    match err {
        TriageError::Parse(_) => "JSON invalide",
        TriageError::ModelLoad(_) => "Impossible de charger le modèle",
        TriageError::Encode(_) => "Erreur d'encodage des caractéristiques",
        TriageError::Inference(_) => "Erreur lors de la prédiction",
    }
}

/// Fixed message for a fight-detection failure stage.
pub fn fight_error_message(err: &FightError) -> &'static str {
    match err {
        FightError::ModelLoad(_) => "❌ Impossible de charger le modèle.",
        FightError::VideoOpen(_) => "❌ Impossible d'ouvrir la vidéo.",
        FightError::EmptyVideo => "❌ Vidéo vide ou corrompue.",
        FightError::Inference(_) | FightError::ImageProcessing(_) => {
            "❌ Erreur lors de la prédiction."
        }
    }
}
