//! Speed unit family (vehicle and flow speeds). Canonical unit: kph.
use super::factors::{KILOMETERS_PER_MILE, KPH_PER_MPS};
use super::UnitConverter;
use core::fmt;

/// Speed family: kph / mps / mph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedUnit {
    /// Canonical unit, kilometers per hour.
    Kph,
    /// Meters per second. One m/s is 3.6 kph.
    Mps,
    /// Miles per hour. One mph is one mile per hour, i.e. 1.609344 kph.
    Mph,
}

impl UnitConverter for SpeedUnit {
    const FAMILY: &'static str = "speed";
    const ALL: &'static [Self] = &[Self::Kph, Self::Mps, Self::Mph];

    fn id(&self) -> &'static str {
        match self {
            Self::Kph => "kph",
            Self::Mps => "mps",
            Self::Mph => "mph",
        }
    }

    fn scale(&self) -> f64 {
        match self {
            Self::Kph => 1.0,
            Self::Mps => KPH_PER_MPS,
            Self::Mph => KILOMETERS_PER_MILE,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
