//! Unit conversion capability shared by the four unit families.
//!
//! Every family is a fieldless enum whose variants carry a multiplicative
//! scale factor to the family's canonical metric unit (meter, kilometer,
//! kilogram, kph). Conversion is pure arithmetic over process-wide constants;
//! variants are `Copy` and never mutated, so they are safe to share across
//! any number of callers without synchronization.
use crate::error::UnitError;

/// Physical conversion factors shared by the unit families.
pub mod factors;
/// Length families: short (meter/foot/inch) and long (kilometer/mile).
pub mod length;
/// Mass family: kilogram/pound.
pub mod mass;
/// Speed family: kph/mps/mph.
pub mod speed;

//==================================================================================UNIT_CONVERTER
/// Implemented by every unit family enum.
///
/// Within a family exactly one variant has a scale factor of `1.0` (the
/// canonical unit itself) and every `id` string is unique. `to_metric` and
/// `to_native` are exact mathematical inverses up to floating-point rounding.
///
/// # Example
///
/// ```
/// use trafmt_units::units::speed::SpeedUnit;
/// use trafmt_units::units::UnitConverter;
///
/// let mph = SpeedUnit::resolve("mph").unwrap();
/// let kph = mph.to_metric(60.0);
/// assert!((kph - 96.56064).abs() < 1e-9);
/// ```
pub trait UnitConverter: Sized + Copy + 'static {
    /// Family name used in resolution errors.
    const FAMILY: &'static str;

    /// Every variant of the family, in declaration order.
    const ALL: &'static [Self];

    /// Canonical name of the variant.
    fn id(&self) -> &'static str;

    /// Multiplicative factor converting one native unit to the canonical unit.
    fn scale(&self) -> f64;

    /// Historical alias strings accepted in addition to the canonical name.
    ///
    /// Most variants have none; the default covers them.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Convert a native value to the family's canonical metric unit.
    #[inline]
    fn to_metric(&self, native: f64) -> f64 {
        native * self.scale()
    }

    /// Convert a canonical metric value back to this native unit.
    #[inline]
    fn to_native(&self, canonical: f64) -> f64 {
        canonical / self.scale()
    }

    /// Check whether `candidate` names this variant (canonical name or alias).
    fn matches(&self, candidate: &str) -> bool {
        self.id() == candidate || self.aliases().iter().any(|alias| *alias == candidate)
    }

    /// Scan the family's variants in declaration order and return the first
    /// whose `matches(key)` is true.
    ///
    /// `matches` already covers the canonical name, so no separate exact-name
    /// lookup is needed after the scan.
    fn resolve(key: &str) -> Result<Self, UnitError> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.matches(key))
            .ok_or(UnitError::UnknownUnit {
                family: Self::FAMILY,
            })
    }
}
