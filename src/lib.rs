// CycleCare Core Library
// Cycle and pregnancy tracking: date projections, daily symptom log,
// remote profile store, and the Sangini advisory client.

pub mod app;
pub mod commands;
pub mod error;
pub mod profile;
pub mod services;
pub mod settings;
pub mod store;

pub use app::App;
pub use error::{Error, Result};
pub use profile::{Craving, Gender, LogEntry, Mood, UserProfile};
pub use services::cycle::{CycleProjection, FertilityLevel};
pub use services::pregnancy::PregnancyProjection;
pub use settings::AppSettings;

/// Initialize logging. Call once at front-end startup; respects RUST_LOG.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
