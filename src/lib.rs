// Library surface for the binary, headless runs and integration tests.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod error;
pub mod keys;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod text_source;
pub mod typing_policy;
pub mod ui;

pub use app::App;
pub use error::{Error, Result};
pub use session::{CharState, Session, SessionPhase};
pub use typing_policy::ScoringMode;
