//! Subscription and free-trial state.
//!
//! Entitlement is a pure expiry check over two stored JSON records, one for
//! the trial and one for the paid subscription. An unexpired trial takes
//! precedence. Any failure to read either record degrades to the free tier.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Store key of the paid subscription record.
pub const SUBSCRIPTION_KEY: &str = "selene.subscription";

/// Store key of the free-trial record.
pub const TRIAL_KEY: &str = "selene.trial";

/// Length of the free trial.
pub const TRIAL_DAYS: i64 = 7;

/// Tier shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Monthly,
    Yearly,
}

impl Plan {
    pub fn name(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// A plan that can be purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaidPlan {
    Monthly,
    Yearly,
}

impl PaidPlan {
    /// Calendar months one purchase covers.
    pub const fn term_months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 12,
        }
    }

    /// Parse `"monthly"` or `"yearly"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl From<PaidPlan> for Plan {
    fn from(p: PaidPlan) -> Self {
        match p {
            PaidPlan::Monthly => Self::Monthly,
            PaidPlan::Yearly => Self::Yearly,
        }
    }
}

/// Stored free-trial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialRecord {
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Stored paid-subscription record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub plan: Plan,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Effective entitlement at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriptionStatus {
    pub is_pro: bool,
    pub plan: Plan,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_trial_active: bool,
    pub trial_ends_at: Option<DateTime<Utc>>,
}

impl SubscriptionStatus {
    /// The free tier.
    pub fn free() -> Self {
        Self::default()
    }

    /// Whether premium features are unlocked.
    pub fn has_pro_access(&self) -> bool {
        self.is_pro || self.is_trial_active
    }
}

fn read_record<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore,
    T: for<'de> Deserialize<'de>,
{
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn try_status<S: KeyValueStore>(
    store: &S,
    now: DateTime<Utc>,
) -> Result<SubscriptionStatus, StoreError> {
    if let Some(trial) = read_record::<_, TrialRecord>(store, TRIAL_KEY)? {
        if trial.ends_at > now {
            return Ok(SubscriptionStatus {
                is_pro: true,
                is_trial_active: true,
                trial_ends_at: Some(trial.ends_at),
                ..SubscriptionStatus::free()
            });
        }
    }

    if let Some(sub) = read_record::<_, SubscriptionRecord>(store, SUBSCRIPTION_KEY)? {
        if sub.expires_at > now {
            return Ok(SubscriptionStatus {
                is_pro: true,
                plan: sub.plan,
                expires_at: Some(sub.expires_at),
                ..SubscriptionStatus::free()
            });
        }
    }

    Ok(SubscriptionStatus::free())
}

/// Effective entitlement at `now`.
///
/// Never fails: unreadable or malformed records yield the free tier.
pub fn subscription_status<S: KeyValueStore>(store: &S, now: DateTime<Utc>) -> SubscriptionStatus {
    try_status(store, now).unwrap_or_else(|e| {
        warn!(error = %e, "failed to read subscription state, treating as free");
        SubscriptionStatus::free()
    })
}

/// Start a 7-day free trial beginning at `now`.
pub fn start_free_trial<S: KeyValueStore>(
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<TrialRecord, StoreError> {
    let record = TrialRecord {
        started_at: now,
        ends_at: now + Duration::days(TRIAL_DAYS),
    };
    store.set(TRIAL_KEY, &serde_json::to_string(&record)?)?;
    info!(ends_at = %record.ends_at, "free trial started");
    Ok(record)
}

/// Record a purchase of `plan` at `now`. Any running trial is cleared.
pub fn subscribe<S: KeyValueStore>(
    store: &mut S,
    plan: PaidPlan,
    now: DateTime<Utc>,
) -> Result<SubscriptionRecord, StoreError> {
    let expires_at = now
        .checked_add_months(Months::new(plan.term_months()))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let record = SubscriptionRecord {
        plan: plan.into(),
        started_at: now,
        expires_at,
    };
    store.set(SUBSCRIPTION_KEY, &serde_json::to_string(&record)?)?;
    store.remove(TRIAL_KEY)?;
    info!(plan = record.plan.name(), expires_at = %record.expires_at, "subscribed");
    Ok(record)
}

/// Drop both the subscription and any trial.
pub fn cancel_subscription<S: KeyValueStore>(store: &mut S) -> Result<(), StoreError> {
    store.remove(SUBSCRIPTION_KEY)?;
    store.remove(TRIAL_KEY)?;
    info!("subscription cancelled");
    Ok(())
}
