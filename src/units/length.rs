//! Length unit families.
//!
//! Two independent families coexist: short lengths (vehicle dimensions,
//! sensor heights) canonicalized to meters, and long lengths (road
//! distances) canonicalized to kilometers.
use super::factors::{KILOMETERS_PER_MILE, METERS_PER_FOOT, METERS_PER_INCH};
use super::UnitConverter;
use core::fmt;

/// Short-length family: meter / foot / inch. Canonical unit: meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShortLength {
    /// Canonical unit. Also matches the spelling `"metre"`.
    Meter,
    /// International foot. Also matches the abbreviation `"ft"`.
    Foot,
    /// International inch.
    Inch,
}

impl UnitConverter for ShortLength {
    const FAMILY: &'static str = "short length";
    const ALL: &'static [Self] = &[Self::Meter, Self::Foot, Self::Inch];

    fn id(&self) -> &'static str {
        match self {
            Self::Meter => "meter",
            Self::Foot => "foot",
            Self::Inch => "inch",
        }
    }

    fn scale(&self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Foot => METERS_PER_FOOT,
            Self::Inch => METERS_PER_INCH,
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Meter => &["metre"],
            Self::Foot => &["ft"],
            Self::Inch => &[],
        }
    }
}

impl fmt::Display for ShortLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

//==================================================================================LONG_LENGTH

/// Long-length family: kilometer / mile. Canonical unit: kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LongLength {
    /// Canonical unit.
    Kilometer,
    /// Statute mile.
    Mile,
}

impl UnitConverter for LongLength {
    const FAMILY: &'static str = "long length";
    const ALL: &'static [Self] = &[Self::Kilometer, Self::Mile];

    fn id(&self) -> &'static str {
        match self {
            Self::Kilometer => "kilometer",
            Self::Mile => "mile",
        }
    }

    fn scale(&self) -> f64 {
        match self {
            Self::Kilometer => 1.0,
            Self::Mile => KILOMETERS_PER_MILE,
        }
    }
}

impl fmt::Display for LongLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
