use crate::aspects::{AspectCalculator, AspectConfig};
use crate::chart::data::{BodyPosition, Chart};
use crate::chart::settings::{ChartSettings, EphemerisTier, PolarPolicy};
use crate::ephemeris::{
    Body, EphemerisChain, EphemerisSource, GeoLocation, KeplerianEphemeris, MeanMotionEphemeris,
};
use crate::error::{push_warning, ChartError, Warning};
use crate::houses::{
    compute_angles, compute_angles_clamped, compute_house_cusps, ChartAngles, HouseCusps,
    HouseSystem,
};
use crate::sidereal::SiderealTime;
use crate::time::Instant;
use crate::western::placement::house_of;
use crate::western::signs::{degree_in_sign, sign_of};

/// Compute a natal chart with default settings for everything except the
/// house system and aspect table.
pub fn compute_chart(
    instant: Instant,
    location: GeoLocation,
    house_system: &str,
    aspect_config: AspectConfig,
) -> Result<Chart, ChartError> {
    let settings = ChartSettings {
        house_system: house_system.to_string(),
        aspects: aspect_config,
        ..ChartSettings::default()
    };
    ChartAssembler::new(settings).compute(instant, location)
}

/// Build the ephemeris chain for a list of tiers, in order.
pub fn chain_for_tiers(tiers: &[EphemerisTier]) -> EphemerisChain {
    let sources = tiers
        .iter()
        .map(|tier| -> Box<dyn EphemerisSource> {
            match tier {
                EphemerisTier::Keplerian => Box::new(KeplerianEphemeris::new()),
                EphemerisTier::MeanMotion => Box::new(MeanMotionEphemeris::new()),
            }
        })
        .collect();
    EphemerisChain::new(sources)
}

/// Runs the chart pipeline: positions, sidereal time, angles, cusps,
/// placement and aspects.
pub struct ChartAssembler {
    settings: ChartSettings,
    chain: EphemerisChain,
    calculator: AspectCalculator,
}

impl ChartAssembler {
    pub fn new(settings: ChartSettings) -> Self {
        let chain = chain_for_tiers(&settings.ephemeris);
        Self::with_chain(settings, chain)
    }

    /// Use a caller-supplied list of ephemeris sources instead of the
    /// configured tiers.
    pub fn with_chain(settings: ChartSettings, chain: EphemerisChain) -> Self {
        let calculator = AspectCalculator::new(settings.aspects.clone());
        Self {
            settings,
            chain,
            calculator,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn chain(&self) -> &EphemerisChain {
        &self.chain
    }

    pub fn calculator(&self) -> &AspectCalculator {
        &self.calculator
    }

    pub fn compute(&self, instant: Instant, location: GeoLocation) -> Result<Chart, ChartError> {
        let mut warnings = Vec::new();

        let (system, defaulted) = HouseSystem::resolve(&self.settings.house_system);
        if defaulted {
            log::warn!(
                "Unknown house system '{}', using {}",
                self.settings.house_system,
                system
            );
            push_warning(&mut warnings, Warning::DefaultedHouseSystem);
        }

        let julian_day = instant.julian_day();
        let resolved = self.resolve_bodies(julian_day, &mut warnings)?;
        log::debug!("Placed {} bodies at JD {}", resolved.len(), julian_day);

        let sidereal = SiderealTime::compute(julian_day, location.longitude());
        log::debug!(
            "LST {:.6}, true obliquity {:.6}",
            sidereal.lst,
            sidereal.true_obliquity
        );

        let angles = self.angles(&sidereal, location.latitude(), &mut warnings)?;
        let houses = self.houses(system, &angles, location.latitude(), &mut warnings)?;

        let positions = place(resolved, &houses);
        let aspects = self.calculator.compute_aspects(&positions);
        log::debug!("Found {} aspects", aspects.len());

        Ok(Chart::new(
            instant,
            location,
            houses,
            angles,
            positions,
            aspects,
            warnings,
            sidereal.lst,
            sidereal.true_obliquity,
        ))
    }

    /// Positions of the configured bodies, placed in the given cusps.
    pub(crate) fn positions_in(
        &self,
        julian_day: f64,
        houses: &HouseCusps,
        warnings: &mut Vec<Warning>,
    ) -> Result<Vec<BodyPosition>, ChartError> {
        let resolved = self.resolve_bodies(julian_day, warnings)?;
        Ok(place(resolved, houses))
    }

    fn resolve_bodies(
        &self,
        julian_day: f64,
        warnings: &mut Vec<Warning>,
    ) -> Result<Vec<UnplacedBody>, ChartError> {
        if self.chain.is_empty() {
            return Err(ChartError::NoEphemerisSource);
        }

        let mut seen = Vec::with_capacity(self.settings.bodies.len());
        let mut resolved = Vec::with_capacity(self.settings.bodies.len());
        for &body in &self.settings.bodies {
            if seen.contains(&body) {
                continue;
            }
            seen.push(body);

            let result = self.chain.resolve(body, julian_day)?;
            if result.is_fallback() {
                push_warning(warnings, Warning::FallbackEphemeris);
            }
            if result.position.low_precision {
                log::warn!("Low precision position for {} at JD {}", body, julian_day);
                push_warning(warnings, Warning::LowPrecision);
            }
            resolved.push(UnplacedBody {
                body,
                longitude: result.position.longitude,
                latitude: result.position.latitude,
                distance: result.position.distance,
                speed: result.speed,
            });
        }
        Ok(resolved)
    }

    fn angles(
        &self,
        sidereal: &SiderealTime,
        latitude: f64,
        warnings: &mut Vec<Warning>,
    ) -> Result<ChartAngles, ChartError> {
        match compute_angles(sidereal.lst, sidereal.true_obliquity, latitude) {
            Ok(angles) => Ok(angles),
            Err(err) => match self.settings.polar_policy {
                PolarPolicy::Strict => Err(err),
                PolarPolicy::FallbackToEqual => {
                    log::warn!("{}; evaluating angles at a clamped latitude", err);
                    push_warning(warnings, Warning::PolarFallback);
                    Ok(compute_angles_clamped(
                        sidereal.lst,
                        sidereal.true_obliquity,
                        latitude,
                    ))
                }
            },
        }
    }

    fn houses(
        &self,
        system: HouseSystem,
        angles: &ChartAngles,
        latitude: f64,
        warnings: &mut Vec<Warning>,
    ) -> Result<HouseCusps, ChartError> {
        if warnings.contains(&Warning::PolarFallback) {
            return compute_house_cusps(HouseSystem::Equal, angles.ascendant, angles.midheaven, latitude);
        }
        match compute_house_cusps(system, angles.ascendant, angles.midheaven, latitude) {
            Ok(houses) => Ok(houses),
            Err(ChartError::PolarLatitude { latitude })
                if self.settings.polar_policy == PolarPolicy::FallbackToEqual =>
            {
                log::warn!(
                    "{} houses undefined at latitude {}, using equal houses",
                    system,
                    latitude
                );
                push_warning(warnings, Warning::PolarFallback);
                compute_house_cusps(HouseSystem::Equal, angles.ascendant, angles.midheaven, latitude)
            }
            Err(err) => Err(err),
        }
    }
}

/// A resolved body before house placement.
struct UnplacedBody {
    body: Body,
    longitude: f64,
    latitude: f64,
    distance: f64,
    speed: Option<f64>,
}

fn place(bodies: Vec<UnplacedBody>, houses: &HouseCusps) -> Vec<BodyPosition> {
    bodies
        .into_iter()
        .map(|b| BodyPosition {
            body: b.body,
            longitude: b.longitude,
            latitude: b.latitude,
            distance: b.distance,
            speed: b.speed,
            retrograde: b.speed.map_or(false, |s| s < 0.0),
            sign: sign_of(b.longitude),
            degree: degree_in_sign(b.longitude),
            house: house_of(b.longitude, &houses.cusps),
        })
        .collect()
}
