use anyhow::Context;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use urania::western::{summarize, ChartSummary};
use urania::{
    scan_transits, AspectConfig, Chart, ChartAssembler, ChartSettings, GeoLocation, Instant,
    TransitSnapshot,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a tropical natal chart and print it as JSON")]
struct Args {
    /// Local calendar date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local clock time, HH:MM or HH:MM:SS.
    #[arg(long, default_value = "12:00")]
    time: String,

    /// Offset of local time from UTC in minutes (east positive, e.g. -300 for EST).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    utc_offset: i32,

    /// Geographic latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Geographic longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// House system override (placidus, koch, equal).
    #[arg(long)]
    house_system: Option<String>,

    /// Chart settings file (default: configs/chart.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include the minor aspects in the aspect table.
    #[arg(long)]
    minor_aspects: bool,

    /// Also scan this many days of transits, starting at the chart instant.
    #[arg(long)]
    transit_days: Option<u32>,

    /// Add element/modality balance and distribution pattern.
    #[arg(long)]
    summary: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    chart: &'a Chart,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ChartSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transits: Option<Vec<TransitSnapshot>>,
}

fn parse_instant(date: &str, time: &str, utc_offset: i32) -> anyhow::Result<Instant> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid --date '{}' (expected YYYY-MM-DD)", date))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .with_context(|| format!("Invalid --time '{}' (expected HH:MM or HH:MM:SS)", time))?;

    Instant::from_calendar(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
        time.second(),
        utc_offset,
    )
    .context("Invalid chart instant")
}

fn load_settings(args: &Args) -> anyhow::Result<ChartSettings> {
    let mut settings = match &args.config {
        Some(path) => urania_config::load_chart_settings(Some(path.as_path()))?,
        None => match urania_config::read_chart_toml_text() {
            Ok(text) => urania_config::parse_chart_settings(&text)?,
            Err(err) => {
                log::debug!("{err}; using built-in chart settings");
                ChartSettings::default()
            }
        },
    };

    if let Some(system) = &args.house_system {
        settings.house_system = system.clone();
    }
    if args.minor_aspects {
        settings.aspects = AspectConfig::with_minor();
    }
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let instant = parse_instant(&args.date, &args.time, args.utc_offset)?;
    let location = GeoLocation::new(args.lat, args.lon).context("Invalid --lat/--lon")?;
    let settings = load_settings(&args)?;
    log::info!(
        "Computing chart for JD {} at ({}, {}) with {} houses",
        instant.julian_day(),
        location.latitude(),
        location.longitude(),
        settings.house_system
    );

    let chart = ChartAssembler::new(settings.clone())
        .compute(instant, location)
        .context("Chart computation failed")?;
    for warning in chart.warnings() {
        log::warn!("chart warning: {}", warning.as_str());
    }

    let transits = match args.transit_days {
        Some(days) => Some(
            scan_transits(&chart, instant, days, &settings).context("Transit scan failed")?,
        ),
        None => None,
    };

    let output = Output {
        chart: &chart,
        summary: args.summary.then(|| summarize(&chart)),
        transits,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}
