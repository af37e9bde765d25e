//! Localization side-table for the lunar engine.
//!
//! The engine emits canonical phase tags; this crate maps them, plus month,
//! weekday and full-moon names, to display strings in eight languages.

pub mod language;
pub mod names;
pub mod phases;

pub use language::{ALL_LANGUAGES, Language, detect_language};
pub use names::{full_moon_name, month_name, weekday_abbrev};
pub use phases::{phase_name, translate_phase_tag};
