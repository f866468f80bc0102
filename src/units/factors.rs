//! Physical conversion factors parameterizing the unit families.
//! Values follow the international yard and pound agreement definitions.

/// Kilometers in one statute mile.
pub const KILOMETERS_PER_MILE: f64 = 1.609_344;

/// Meters in one international foot.
pub const METERS_PER_FOOT: f64 = 0.304_8;

/// Inches in one meter (exactly `1 / 0.0254`).
pub const INCHES_PER_METER: f64 = 39.370_078_740_157_48;

/// Avoirdupois pounds in one kilogram (exactly `1 / 0.45359237`).
pub const POUNDS_PER_KILOGRAM: f64 = 2.204_622_621_848_776;

/// Kilometers-per-hour in one meter-per-second.
pub const KPH_PER_MPS: f64 = 3.6;

/// Meters in one inch, derived for the short-length scale table.
pub const METERS_PER_INCH: f64 = 1.0 / INCHES_PER_METER;

/// Kilograms in one pound, derived for the mass scale table.
pub const KILOGRAMS_PER_POUND: f64 = 1.0 / POUNDS_PER_KILOGRAM;
