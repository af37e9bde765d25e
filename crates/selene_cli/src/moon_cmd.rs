//! Read-only lunar reports: phase, times, month, trend, countdown, day.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime};
use tracing::info_span;

use selene_app::{AppContext, KeyValueStore};
use selene_locale::{Language, month_name, phase_name, weekday_abbrev};
use selene_phase::{
    DayMoonData, LocalDateTime, PhaseName, TrendPoint, calculate_phase,
    days_until_next_full_moon_at, days_until_next_new_moon_at, next_phase_event_at,
};

pub fn phase<S: KeyValueStore>(ctx: &AppContext<S>, date: Option<LocalDateTime>) -> Result<()> {
    let at = date.unwrap_or_else(LocalDateTime::now);
    let _cmd = info_span!("phase", %at).entered();
    let dash = ctx.dashboard(&at);
    let p = &dash.phase;

    println!("{}  {}", p.symbol(), dash.phase_label);
    println!("  Date:           {at}");
    println!("  Illumination:   {}%", p.illumination_percent);
    println!("  Age:            {:.2} days", p.age_days);
    println!("  Cycle position: {:.4}", p.cycle_position);
    Ok(())
}

pub fn times<S: KeyValueStore>(ctx: &AppContext<S>, date: Option<LocalDateTime>) -> Result<()> {
    let at = date.unwrap_or_else(LocalDateTime::now);
    let dash = ctx.dashboard(&at);

    println!("{}  ({})", day_stamp(&at), ctx.location().label());
    println!("  Moonrise: {}", clock(&dash.moon_times.moonrise));
    println!("  Moonset:  {}", clock(&dash.moon_times.moonset));
    println!("  Sunrise:  {}", clock(&dash.sun_times.sunrise));
    println!("  Sunset:   {}", clock(&dash.sun_times.sunset));
    Ok(())
}

/// `month` is the 1-based month number from the command line.
pub fn month<S: KeyValueStore>(ctx: &AppContext<S>, year: i32, month: u32) -> Result<()> {
    let _cmd = info_span!("month", year, month).entered();
    let days = ctx
        .month(year, month - 1)
        .with_context(|| format!("failed to build calendar for {year}-{month:02}"))?;

    let language = ctx.language();
    let title = month_name(language, month - 1).unwrap_or("?");
    println!("{title} {year}");
    for day in &days {
        println!("{}", month_row(day, language)?);
    }
    Ok(())
}

pub fn trend<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<()> {
    let view = ctx.illumination_trend(&LocalDateTime::now());
    for point in &view.points {
        println!("{}", trend_row(point));
    }
    if view.locked {
        println!("🔒 Preview only. Unlock the full 31-day trend with `selene subscription trial`.");
    }
    Ok(())
}

pub fn countdown<S: KeyValueStore>(ctx: &AppContext<S>, date: Option<LocalDateTime>) -> Result<()> {
    let now = date.unwrap_or_else(LocalDateTime::now);
    let language = ctx.language();

    for (phase, days) in [
        (PhaseName::NewMoon, days_until_next_new_moon_at(&now)),
        (PhaseName::FullMoon, days_until_next_full_moon_at(&now)),
    ] {
        let eta = next_phase_event_at(&now, phase);
        println!(
            "{} {:<16} in {days} days (about {} {})",
            phase.symbol(),
            phase_name(phase, language),
            day_stamp(&eta),
            clock(&eta)
        );
    }
    Ok(())
}

pub fn day<S: KeyValueStore>(ctx: &AppContext<S>, date: LocalDateTime) -> Result<()> {
    let details = ctx
        .day_details(&date)
        .with_context(|| format!("no details for {date}"))?;
    let phase = calculate_phase(&details.day.date);

    println!("{}  {}", details.day.symbol(), details.title());
    println!("  Date:         {}", day_stamp(&details.day.date));
    if details.full_moon_name.is_some() {
        println!("  Phase:        {}", details.phase_label);
    }
    println!("  Illumination: {}%", details.day.illumination_percent);
    println!("  Age:          {:.2} days", phase.age_days);
    println!(
        "  Best viewing: {} - {}",
        clock(&details.viewing.moonrise),
        clock(&details.viewing.moonset)
    );
    Ok(())
}

fn clock(t: &LocalDateTime) -> String {
    format!("{:02}:{:02}", t.hour, t.minute)
}

fn day_stamp(t: &LocalDateTime) -> String {
    format!("{:04}-{:02}-{:02}", t.year, t.month, t.day)
}

fn month_row(day: &DayMoonData, language: Language) -> Result<String> {
    let weekday = NaiveDateTime::try_from(day.date)?
        .weekday()
        .num_days_from_sunday();
    Ok(format!(
        "{} {:>2}  {}  {:>3}%  {}",
        weekday_abbrev(language, weekday).unwrap_or("?"),
        day.date.day,
        day.symbol(),
        day.illumination_percent,
        phase_name(day.phase, language)
    ))
}

fn trend_row(point: &TrendPoint) -> String {
    let bar = "#".repeat(usize::from(point.value / 5));
    format!("{:>5} {:>3}% {bar}", point.label, point.value)
}
