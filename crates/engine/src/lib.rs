//! Faerun Engine library.
//!
//! Command-line side of the sheet-update tools.
//!
//! ## Structure
//!
//! - `use_cases/` - form -> calculator -> rendered message
//! - `infrastructure/` - snapshot storage, clock and configuration (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
