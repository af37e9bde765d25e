//! Application layer around the selene lunar engine.
//!
//! The engine itself is stateless; this crate owns everything that is
//! persisted or user-selected:
//! - `KeyValueStore` with in-memory and JSON-file backends
//! - The location catalog and the saved selection
//! - Subscription/trial entitlement
//! - The display-language preference
//! - `AppContext`, which bundles the above for a session
//! - Dashboard and day-detail snapshots for a presentation layer
//!
//! # Quick start
//!
//! ```rust,no_run
//! use selene_app::{AppContext, JsonFileStore};
//! use selene_phase::LocalDateTime;
//!
//! let store = JsonFileStore::new("selene-store.json");
//! let ctx = AppContext::load(store, "en-US", chrono::Utc::now());
//! let dash = ctx.dashboard(&LocalDateTime::now());
//! println!("{} {} ({}%)", dash.phase.symbol(), dash.phase_label, dash.phase.illumination_percent);
//! ```

pub mod context;
pub mod dashboard;
pub mod entitlement;
pub mod error;
pub mod location;
pub mod preferences;
pub mod store;

pub use context::AppContext;
pub use dashboard::{DayDetails, MoonDashboard, TREND_PREVIEW_POINTS, TrendView};
pub use entitlement::{
    PaidPlan, Plan, SubscriptionRecord, SubscriptionStatus, TrialRecord,
    cancel_subscription, start_free_trial, subscribe, subscription_status,
};
pub use error::{AppError, StoreError};
pub use location::{
    AVAILABLE_LOCATIONS, Location, default_location, find_location, load_location,
    save_location, search_locations,
};
pub use preferences::{load_language, save_language};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
