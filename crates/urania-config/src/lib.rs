use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use urania::aspects::{AspectConfig, AspectDefinition, AspectKind};
use urania::{Body, ChartSettings, EphemerisTier, PolarPolicy};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    bodies: Option<Vec<String>>,
    #[serde(default)]
    polar_policy: Option<String>,
    #[serde(default)]
    ephemeris: Option<Vec<String>>,
    #[serde(default)]
    include_minor_aspects: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct AspectToml {
    name: String,
    /// Defaults to the aspect's standard angle
    #[serde(default)]
    angle: Option<f64>,
    orb: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    aspects: Option<Vec<AspectToml>>,
}

/// Try the usual relative locations of `configs/chart.toml`, from the repo
/// root and from a crate directory.
pub fn read_chart_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/chart.toml", "../../configs/chart.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load chart.toml from {:?}", paths);
}

/// Load settings from `path`, or from the default locations when `None`.
pub fn load_chart_settings(path: Option<&Path>) -> anyhow::Result<ChartSettings> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart config {}", path.display()))?,
        None => read_chart_toml_text()?,
    };
    parse_chart_settings(&text)
}

pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;
    let RootConfigToml { chart, aspects } = root;
    let defaults = ChartSettings::default();

    let bodies = match chart.bodies {
        Some(names) => names
            .iter()
            .map(|name| name.parse::<Body>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid chart.bodies")?,
        None => defaults.bodies,
    };

    let polar_policy = match chart.polar_policy {
        Some(name) => name
            .parse::<PolarPolicy>()
            .map_err(|e| anyhow::anyhow!("Invalid chart.polar_policy: {e}"))?,
        None => defaults.polar_policy,
    };

    let ephemeris = match chart.ephemeris {
        Some(names) => names
            .iter()
            .map(|name| name.parse::<EphemerisTier>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid chart.ephemeris: {e}"))?,
        None => defaults.ephemeris,
    };
    if ephemeris.is_empty() {
        anyhow::bail!("chart.ephemeris must name at least one tier");
    }

    let aspects = match aspects {
        Some(rows) => {
            if chart.include_minor_aspects {
                log::warn!("[[aspects]] table given; ignoring chart.include_minor_aspects");
            }
            aspect_config(rows)?
        }
        None if chart.include_minor_aspects => AspectConfig::with_minor(),
        None => defaults.aspects,
    };

    Ok(ChartSettings {
        house_system: chart.house_system.unwrap_or(defaults.house_system),
        bodies,
        polar_policy,
        ephemeris,
        aspects,
    })
}

fn aspect_config(rows: Vec<AspectToml>) -> anyhow::Result<AspectConfig> {
    let mut definitions = Vec::with_capacity(rows.len());
    for row in rows {
        let kind: AspectKind = row
            .name
            .parse()
            .with_context(|| format!("Invalid [[aspects]] entry '{}'", row.name))?;
        let mut definition = AspectDefinition::new(kind, row.orb);
        if let Some(angle) = row.angle {
            definition.angle = angle;
        }
        definitions.push(definition);
    }
    AspectConfig::new(definitions).context("Invalid [[aspects]] table")
}
