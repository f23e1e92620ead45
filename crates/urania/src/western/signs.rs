//! Zodiac signs and their static correspondences.
//!
//! Elements, modalities and rulers are table data indexed by sign.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angle::normalize_degrees;
use crate::ephemeris::types::Body;

/// Serialized by name, e.g. `"Aries"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];
}

const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

const NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

const TRADITIONAL_RULERS: [Body; 12] = [
    Body::Mars,    // Aries
    Body::Venus,   // Taurus
    Body::Mercury, // Gemini
    Body::Moon,    // Cancer
    Body::Sun,     // Leo
    Body::Mercury, // Virgo
    Body::Venus,   // Libra
    Body::Mars,    // Scorpio
    Body::Jupiter, // Sagittarius
    Body::Saturn,  // Capricorn
    Body::Saturn,  // Aquarius
    Body::Jupiter, // Pisces
];

const MODERN_RULERS: [Body; 12] = [
    Body::Mars,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Pluto,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = SIGNS;

    /// Sign for a 0-based index; wraps modulo 12.
    pub fn from_index(index: usize) -> Self {
        SIGNS[index % 12]
    }

    /// 0 = Aries ... 11 = Pisces
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        NAMES[self.index()]
    }

    /// Fire, earth, air, water repeating from Aries.
    pub fn element(&self) -> Element {
        Element::ALL[self.index() % 4]
    }

    /// Cardinal, fixed, mutable repeating from Aries.
    pub fn modality(&self) -> Modality {
        Modality::ALL[self.index() % 3]
    }

    pub fn ruler(&self, modern: bool) -> Body {
        if modern {
            MODERN_RULERS[self.index()]
        } else {
            TRADITIONAL_RULERS[self.index()]
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign index (0-11) of an ecliptic longitude.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / 30.0).floor() as usize).min(11)
}

pub fn sign_of(longitude: f64) -> ZodiacSign {
    ZodiacSign::from_index(sign_index(longitude))
}

/// Degrees into the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let degree = normalize_degrees(longitude) - 30.0 * sign_index(longitude) as f64;
    if degree >= 30.0 {
        0.0
    } else {
        degree.max(0.0)
    }
}
