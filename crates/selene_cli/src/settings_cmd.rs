//! Commands that change or list persisted settings.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use selene_app::{
    AVAILABLE_LOCATIONS, AppContext, KeyValueStore, Location, SubscriptionStatus,
    search_locations,
};
use selene_locale::ALL_LANGUAGES;

use crate::cli::SubscriptionAction;

pub fn locations<S: KeyValueStore>(ctx: &AppContext<S>, search: Option<&str>) -> Result<()> {
    let hits: Vec<&Location> = match search {
        Some(q) => search_locations(q),
        None => AVAILABLE_LOCATIONS.iter().collect(),
    };
    if hits.is_empty() {
        println!("No locations match");
    }
    for loc in hits {
        let marker = if loc.id == ctx.location().id { '*' } else { ' ' };
        println!("{marker} {:>2}  {:<28} {}", loc.id, loc.label(), loc.timezone);
    }
    Ok(())
}

pub fn set_location<S: KeyValueStore>(ctx: &mut AppContext<S>, id: &str) -> Result<()> {
    let loc = ctx
        .set_location(id)
        .with_context(|| format!("failed to select location '{id}'"))?;
    info!(id = loc.id, city = loc.city, "location selected");
    println!("Location set to {}", loc.label());
    Ok(())
}

pub fn languages<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<()> {
    for lang in ALL_LANGUAGES {
        let marker = if lang == ctx.language() { '*' } else { ' ' };
        println!("{marker} {}  {:<10} {}", lang.code(), lang.name(), lang.native_name());
    }
    Ok(())
}

pub fn set_language<S: KeyValueStore>(ctx: &mut AppContext<S>, code: &str) -> Result<()> {
    let lang = ctx
        .set_language_code(code)
        .with_context(|| format!("failed to select language '{code}'"))?;
    println!("Language set to {} ({})", lang.native_name(), lang.code());
    Ok(())
}

pub fn subscription<S: KeyValueStore>(
    ctx: &mut AppContext<S>,
    action: SubscriptionAction,
    now: DateTime<Utc>,
) -> Result<()> {
    let status = match action {
        SubscriptionAction::Status => *ctx.subscription(),
        SubscriptionAction::Trial => *ctx.start_trial(now).context("failed to start trial")?,
        SubscriptionAction::Subscribe { plan } => *ctx
            .subscribe(plan.into(), now)
            .context("failed to record subscription")?,
        SubscriptionAction::Cancel => *ctx
            .cancel_subscription(now)
            .context("failed to cancel subscription")?,
    };
    for line in describe_status(&status) {
        println!("{line}");
    }
    Ok(())
}

fn describe_status(status: &SubscriptionStatus) -> Vec<String> {
    let mut lines = vec![format!(
        "Plan: {}{}",
        status.plan.name(),
        if status.has_pro_access() { " (premium)" } else { "" }
    )];
    if let Some(expires) = status.expires_at {
        lines.push(format!("  Renews/expires: {}", expires.to_rfc3339()));
    }
    if let Some(ends) = status.trial_ends_at.filter(|_| status.is_trial_active) {
        lines.push(format!("  Trial ends:     {}", ends.to_rfc3339()));
    }
    lines
}
