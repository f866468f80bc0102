//! Coordinate record and the GPS position codec family.
//!
//! Parsers write into a caller-supplied [`LatLong`]; formatters read from one
//! and emit bounded strings, since the crate carries no allocator.
use crate::error::{CodecError, ParseError, UnitError};
use core::fmt::Write;

/// Bounded string for one formatted coordinate field.
///
/// 48 bytes covers the decimal rendering of any coordinate or height a
/// traffic station reports; exhaustion surfaces as
/// [`CodecError::FieldOverflow`], never as truncation.
pub type CoordField = heapless::String<48>;

/// Geographic position: latitude/longitude in degrees, height in the
/// reporting station's length unit.
///
/// `height` is `None` until a parser or the caller sets it; the `llh` codec
/// leaves it untouched when the input carries no third field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
    pub height: Option<f64>,
}

impl LatLong {
    /// Origin position with unset height.
    pub const fn new() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            height: None,
        }
    }
}

//==================================================================================GEO_CODEC

/// Position encodings, selectable by key string.
///
/// Keys: `"llh"` (latitude/longitude/height triple) and `"olc"` (Open
/// Location Code).
///
/// The Open Location Code variant has no implemented behavior: both
/// operations fail with [`CodecError::Unsupported`] instead of silently
/// producing zeroed output. Known limitation until the grid decoding lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeoCodec {
    /// Latitude/longitude/height passthrough.
    LatLongHeight,
    /// Open Location Code ("Plus Code"). Unsupported.
    OpenLocationCode,
}

impl GeoCodec {
    /// Select a codec variant from its key string.
    pub fn from_key(key: &str) -> Result<Self, UnitError> {
        match key {
            "llh" => Ok(Self::LatLongHeight),
            "olc" => Ok(Self::OpenLocationCode),
            _ => Err(UnitError::UnknownUnit { family: "position" }),
        }
    }

    /// Decode textual fields into `point`.
    ///
    /// `llh` semantics: `fields[0]` is the latitude and `fields[1]` the
    /// longitude, each defaulting to `0.0` when the element is absent or
    /// `None`. The height is only assigned when a third element exists
    /// (`0.0` when present-but-`None`); shorter inputs leave `point.height`
    /// untouched.
    pub fn parse(&self, fields: &[Option<&str>], point: &mut LatLong) -> Result<(), CodecError> {
        match self {
            Self::LatLongHeight => {
                point.latitude = decode_field(fields.first())?;
                point.longitude = decode_field(fields.get(1))?;
                if fields.len() >= 3 {
                    point.height = Some(decode_field(fields.get(2))?);
                }
                Ok(())
            }
            Self::OpenLocationCode => Err(CodecError::Unsupported {
                what: "open location code decoding",
            }),
        }
    }

    /// Encode `point` as textual fields.
    ///
    /// `llh` emits exactly three fields (latitude, longitude, height) in the
    /// canonical decimal rendering of `f64`; an unset height is emitted as
    /// `0`.
    pub fn format(&self, point: &LatLong) -> Result<[CoordField; 3], CodecError> {
        match self {
            Self::LatLongHeight => Ok([
                render_field(point.latitude)?,
                render_field(point.longitude)?,
                render_field(point.height.unwrap_or(0.0))?,
            ]),
            Self::OpenLocationCode => Err(CodecError::Unsupported {
                what: "open location code encoding",
            }),
        }
    }
}

/// Decode one optional textual field; absent and `None` both mean `0.0`.
fn decode_field(field: Option<&Option<&str>>) -> Result<f64, ParseError> {
    match field {
        Some(Some(text)) => text.parse::<f64>().map_err(|_| ParseError::MalformedNumber),
        _ => Ok(0.0),
    }
}

/// Render one `f64` into a bounded field.
fn render_field(value: f64) -> Result<CoordField, CodecError> {
    let mut field = CoordField::new();
    write!(field, "{value}").map_err(|_| CodecError::FieldOverflow)?;
    Ok(field)
}
