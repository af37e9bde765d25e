//! Application context: the loaded preferences and entitlement, passed
//! explicitly to whatever renders them.
//!
//! Built once at startup from a store. Every setter persists first and only
//! then updates the in-memory value, so a failed write leaves the context
//! unchanged.

use chrono::{DateTime, Utc};
use selene_locale::Language;
use selene_phase::{DayMoonData, LocalDateTime, calculate_phase, illumination_trend_at};
use tracing::debug;

use crate::dashboard::{DayDetails, MoonDashboard, TrendView};
use crate::entitlement::{
    PaidPlan, SubscriptionStatus, cancel_subscription, start_free_trial, subscribe,
    subscription_status,
};
use crate::error::AppError;
use crate::location::{Location, find_location, load_location, save_location};
use crate::preferences::{load_language, save_language};
use crate::store::KeyValueStore;

/// Session state over a key-value store.
#[derive(Debug)]
pub struct AppContext<S: KeyValueStore> {
    store: S,
    language: Language,
    location: &'static Location,
    subscription: SubscriptionStatus,
}

impl<S: KeyValueStore> AppContext<S> {
    /// Load language, location and entitlement from `store`.
    ///
    /// Never fails; anything unreadable falls back to its default.
    pub fn load(mut store: S, device_locale: &str, now: DateTime<Utc>) -> Self {
        let language = load_language(&mut store, device_locale);
        let location = load_location(&store);
        let subscription = subscription_status(&store, now);
        debug!(
            language = language.code(),
            location = location.city,
            pro = subscription.has_pro_access(),
            "context loaded"
        );
        Self {
            store,
            language,
            location,
            subscription,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn location(&self) -> &'static Location {
        self.location
    }

    pub fn subscription(&self) -> &SubscriptionStatus {
        &self.subscription
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), AppError> {
        save_language(&mut self.store, language)?;
        self.language = language;
        Ok(())
    }

    /// Like `set_language`, from an ISO 639-1 code such as `"es"`.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, AppError> {
        let language =
            Language::from_code(code).ok_or_else(|| AppError::UnknownLanguage(code.to_string()))?;
        self.set_language(language)?;
        Ok(language)
    }

    /// Select a catalog location by id.
    pub fn set_location(&mut self, id: &str) -> Result<&'static Location, AppError> {
        let location = find_location(id).ok_or_else(|| AppError::UnknownLocation(id.to_string()))?;
        save_location(&mut self.store, location)?;
        self.location = location;
        Ok(location)
    }

    /// Re-evaluate entitlement at `now`, e.g. after a trial may have lapsed.
    pub fn refresh_subscription(&mut self, now: DateTime<Utc>) -> &SubscriptionStatus {
        self.subscription = subscription_status(&self.store, now);
        &self.subscription
    }

    pub fn start_trial(&mut self, now: DateTime<Utc>) -> Result<&SubscriptionStatus, AppError> {
        start_free_trial(&mut self.store, now)?;
        Ok(self.refresh_subscription(now))
    }

    pub fn subscribe(
        &mut self,
        plan: PaidPlan,
        now: DateTime<Utc>,
    ) -> Result<&SubscriptionStatus, AppError> {
        subscribe(&mut self.store, plan, now)?;
        Ok(self.refresh_subscription(now))
    }

    pub fn cancel_subscription(&mut self, now: DateTime<Utc>) -> Result<&SubscriptionStatus, AppError> {
        cancel_subscription(&mut self.store)?;
        Ok(self.refresh_subscription(now))
    }

    /// Home-screen snapshot in the context's language.
    pub fn dashboard(&self, at: &LocalDateTime) -> MoonDashboard {
        MoonDashboard::compute(at, self.language)
    }

    /// Calendar month, `month_index` zero-based.
    pub fn month(&self, year: i32, month_index: u32) -> Result<Vec<DayMoonData>, AppError> {
        Ok(selene_phase::month_moon_data(year, month_index)?)
    }

    /// Detail card for the calendar day containing `date`.
    pub fn day_details(&self, date: &LocalDateTime) -> Result<DayDetails, AppError> {
        date.validate()?;
        let midnight = date.start_of_day();
        let phase = calculate_phase(&midnight);
        let day = DayMoonData {
            date: midnight,
            phase: phase.phase,
            illumination_percent: phase.illumination_percent,
        };
        Ok(DayDetails::for_day(&day, self.language))
    }

    /// 31-day illumination trend ending at `now`. Without premium access
    /// only the oldest [`TREND_PREVIEW_POINTS`](crate::TREND_PREVIEW_POINTS)
    /// points are returned, marked locked.
    pub fn illumination_trend(&self, now: &LocalDateTime) -> TrendView {
        TrendView::new(illumination_trend_at(now), self.subscription.has_pro_access())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone};
    use selene_time::TimeError;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn fresh_store_defaults() {
        let ctx = AppContext::load(MemoryStore::new(), "en-US", now());
        assert_eq!(ctx.language(), Language::En);
        assert_eq!(ctx.location().city, "New York");
        assert!(!ctx.subscription().has_pro_access());
    }

    #[test]
    fn settings_survive_reload() {
        let mut ctx = AppContext::load(MemoryStore::new(), "en-US", now());
        ctx.set_language(Language::Fr).unwrap();
        ctx.set_location("6").unwrap();
        ctx.subscribe(PaidPlan::Monthly, now()).unwrap();

        let reloaded = AppContext::load(ctx.into_store(), "de-DE", now());
        assert_eq!(reloaded.language(), Language::Fr);
        assert_eq!(reloaded.location().city, "Tokyo");
        assert!(reloaded.subscription().is_pro);
    }

    #[test]
    fn unknown_location_leaves_context_unchanged() {
        let mut ctx = AppContext::load(MemoryStore::new(), "en", now());
        let err = ctx.set_location("42").unwrap_err();
        assert_eq!(err, AppError::UnknownLocation("42".into()));
        assert_eq!(ctx.location().id, "1");
    }

    #[test]
    fn language_code_is_validated() {
        let mut ctx = AppContext::load(MemoryStore::new(), "en", now());
        assert_eq!(ctx.set_language_code("JA").unwrap(), Language::Ja);
        assert_eq!(
            ctx.set_language_code("xx"),
            Err(AppError::UnknownLanguage("xx".into()))
        );
        assert_eq!(ctx.language(), Language::Ja);
    }

    #[test]
    fn free_tier_sees_trend_preview() {
        let mut ctx = AppContext::load(MemoryStore::new(), "en", now());
        let today = LocalDateTime::new(2024, 6, 1, 10, 0, 0.0);
        let preview = ctx.illumination_trend(&today);
        assert!(preview.locked);
        assert_eq!(preview.points.len(), 10);
        assert_eq!(preview.points[0].label, "30d");

        ctx.start_trial(now()).unwrap();
        let full = ctx.illumination_trend(&today);
        assert!(!full.locked);
        assert_eq!(full.points.len(), 31);
        assert_eq!(full.points[..10], preview.points[..]);
        assert_eq!(full.points[30].label, "Today");

        ctx.refresh_subscription(now() + Duration::days(8));
        let lapsed = ctx.illumination_trend(&today);
        assert!(lapsed.locked);
        assert_eq!(lapsed.points.len(), 10);
    }

    #[test]
    fn cancel_returns_to_free() {
        let mut ctx = AppContext::load(MemoryStore::new(), "en", now());
        ctx.subscribe(PaidPlan::Yearly, now()).unwrap();
        let status = ctx.cancel_subscription(now()).unwrap();
        assert_eq!(*status, SubscriptionStatus::free());
    }

    #[test]
    fn day_details_use_midnight() {
        let ctx = AppContext::load(MemoryStore::new(), "it", now());
        let details = ctx
            .day_details(&LocalDateTime::new(2024, 1, 25, 23, 0, 0.0))
            .unwrap();
        assert_eq!(details.day.date, LocalDateTime::date(2024, 1, 25));
        assert_eq!(details.full_moon_name, Some("Luna del Lupo"));
    }

    #[test]
    fn day_details_reject_impossible_date() {
        let ctx = AppContext::load(MemoryStore::new(), "en", now());
        let err = ctx.day_details(&LocalDateTime::date(2023, 2, 29)).unwrap_err();
        assert!(matches!(err, AppError::Time(TimeError::InvalidDate(_))), "{err:?}");
    }

    #[test]
    fn month_rejects_bad_index() {
        let ctx = AppContext::load(MemoryStore::new(), "en", now());
        assert!(matches!(ctx.month(2024, 12), Err(AppError::Phase(_))));
        assert_eq!(ctx.month(2024, 1).unwrap().len(), 29);
    }
}
