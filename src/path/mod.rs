// collector module
mod collector;
// config module
mod config;
// error module
mod error;
// explorer module
mod explorer;
// finder module
mod finder;
// scope module
mod scope;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use collector::{collect_exits, Collected, Emission};
pub use config::{SearchConfig, Strategy};
pub use error::SearchError;
pub use finder::{PathFinder, SearchReport};
pub use scope::ExitScope;
