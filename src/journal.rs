// src/journal.rs
//
// Abonné `tracing` du binaire : tout part sur stderr.
// stdout reste réservé au protocole "= …" / "! …".

use tracing_subscriber::filter::LevelFilter;

/// -v répétés : warn (0) -> info -> debug -> trace.
pub fn niveau_depuis_verbosite(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installe l’abonné global (une seule fois par processus).
pub fn installer(niveau: LevelFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(niveau)
        .with_ansi(false)
        .without_time()
        .try_init()
}
