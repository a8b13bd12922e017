//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber. `RUST_LOG` wins when
//! set; otherwise [`Settings::log_level`] applies.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # JSON lines for log shippers
//! GESTION_LOG_JSON=true cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo prints lines such as:
//!
//! ```text
//! INFO Actor started
//! INFO Created entity_type=Empresa id=empresa_1 size=1
//! WARN create: Unauthenticated mutation rejected entity_type=Servicio caller=anonymous
//! INFO Deleted entity_type=Empresa id=empresa_1 cascaded=1 size=0
//! ```
//!
//! Store-side lines carry `entity_type` and `id`; controller spans
//! (`create`, `marcar`, ...) show the request path inline.

use crate::config::Settings;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn setup_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type already names the source

    // try_init: a second subscriber (e.g. in tests) is not an error
    let _ = if settings.log_json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
