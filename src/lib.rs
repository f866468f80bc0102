//! `trafmt-units` library: unit conversion and address/coordinate parsing
//! primitives required by traffic telemetry formatters in a `no_std`
//! environment. The crate exposes the unit families (length, mass, speed),
//! the MAC address codecs, and the GPS coordinate codec.
#![no_std]
//==================================================================================
/// Hardware address (MAC) representation and its textual codecs.
pub mod address;
/// Domain errors (unit key resolution, textual decoding, codec issues).
pub mod error;
/// Coordinate record and the GPS position codec family.
pub mod position;
/// Unit conversion capability and the four unit families.
pub mod units;
//==================================================================================
