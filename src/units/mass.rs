//! Mass unit family (axle loads, vehicle weights). Canonical unit: kilogram.
use super::factors::KILOGRAMS_PER_POUND;
use super::UnitConverter;
use core::fmt;

/// Mass family: kilogram / pound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MassUnit {
    /// Canonical unit, keyed `"kg"`.
    Kilogram,
    /// Avoirdupois pound, keyed `"lb"`.
    Pound,
}

impl UnitConverter for MassUnit {
    const FAMILY: &'static str = "mass";
    const ALL: &'static [Self] = &[Self::Kilogram, Self::Pound];

    fn id(&self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Pound => "lb",
        }
    }

    fn scale(&self) -> f64 {
        match self {
            Self::Kilogram => 1.0,
            Self::Pound => KILOGRAMS_PER_POUND,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
