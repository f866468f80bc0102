//! Hardware (MAC) address representation and its textual codecs.
//! Sensor stations report their identity in one of three encodings; the
//! module provides a typed wrapper around the raw `u64` plus the parsers.
//!
//! # Bit layout of the 48 significant bits
//!
//! ```text
//! Bits  0-23 (24 bits) : NIC-specific serial
//! Bits 24-47 (24 bits) : Organizationally Unique Identifier (OUI)
//! Bit  40              : I/G flag (multicast when set)
//! Bit  41              : U/L flag (locally administered when set)
//! ```
use crate::error::{ParseError, UnitError};
use core::fmt;

/// Wrapper around a MAC address stored in the low 48 bits of a `u64`.
///
/// # Example
///
/// ```
/// use trafmt_units::address::MacAddress;
///
/// let mac = MacAddress::from_hex17("00:11:22:33:44:AA").unwrap();
/// assert_eq!(mac.raw(), 0x0011_2233_44AA);
/// assert_eq!(mac.oui(), 0x001122);
/// assert!(!mac.is_multicast());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress(u64);

impl MacAddress {
    /// Build a `MacAddress` from the raw value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Organizationally Unique Identifier (bits 24-47, 24 bits).
    #[inline]
    pub const fn oui(&self) -> u32 {
        ((self.0 >> 24) & 0xFF_FFFF) as u32
    }

    /// NIC-specific serial (bits 0-23, 24 bits).
    #[inline]
    pub const fn nic(&self) -> u32 {
        (self.0 & 0xFF_FFFF) as u32
    }

    /// I/G flag: least significant bit of the first octet.
    #[inline]
    pub const fn is_multicast(&self) -> bool {
        ((self.0 >> 40) & 0x01) != 0
    }

    /// U/L flag: second least significant bit of the first octet.
    #[inline]
    pub const fn is_locally_administered(&self) -> bool {
        ((self.0 >> 41) & 0x01) != 0
    }

    /// Parse the 12-hex-digit encoding without separators, e.g.
    /// `"0011223344AA"`. Upper and lower case digits are accepted.
    pub fn from_hex12(text: &str) -> Result<Self, ParseError> {
        let bytes = text.as_bytes();
        if bytes.len() != 12 {
            return Err(ParseError::InvalidLength {
                expected: 12,
                found: bytes.len(),
            });
        }

        let mut value: u64 = 0;
        for (position, byte) in bytes.iter().enumerate() {
            let digit = hex_value(*byte).ok_or(ParseError::InvalidHexDigit { position })?;
            value = (value << 4) | u64::from(digit);
        }
        Ok(Self(value))
    }

    /// Parse the 17-character 6-octet encoding with `:` or `-` separators at
    /// positions 2, 5, 8, 11 and 14, e.g. `"00:11:22:33:44:AA"`.
    pub fn from_hex17(text: &str) -> Result<Self, ParseError> {
        let bytes = text.as_bytes();
        if bytes.len() != 17 {
            return Err(ParseError::InvalidLength {
                expected: 17,
                found: bytes.len(),
            });
        }

        let mut value: u64 = 0;
        for (position, byte) in bytes.iter().enumerate() {
            // Every third character is a separator.
            if position % 3 == 2 {
                if *byte != b':' && *byte != b'-' {
                    return Err(ParseError::InvalidSeparator { position });
                }
            } else {
                let digit = hex_value(*byte).ok_or(ParseError::InvalidHexDigit { position })?;
                value = (value << 4) | u64::from(digit);
            }
        }
        Ok(Self(value))
    }

    /// Parse a plain base-10 integer encoding of the address.
    pub fn from_decimal(text: &str) -> Result<Self, ParseError> {
        text.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseError::MalformedNumber)
    }
}

/// Value of a single ASCII hex digit, or `None` when the byte is not one.
#[inline]
const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl From<u64> for MacAddress {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MacAddress> for u64 {
    #[inline]
    fn from(mac: MacAddress) -> Self {
        mac.raw()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            (self.0 >> 40) & 0xFF,
            (self.0 >> 32) & 0xFF,
            (self.0 >> 24) & 0xFF,
            (self.0 >> 16) & 0xFF,
            (self.0 >> 8) & 0xFF,
            self.0 & 0xFF
        )
    }
}

//==================================================================================MAC_CODEC

/// Textual MAC encodings, selectable by key string.
///
/// Keys: `"mac12"` (12 hex digits), `"mac17"` (separator form), `"maclong"`
/// (base-10 integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacCodec {
    /// 12 hex digits, no separators.
    Hex12,
    /// 17 characters, colon- or hyphen-delimited octets.
    Hex17,
    /// Plain base-10 integer.
    Decimal,
}

impl MacCodec {
    /// Select a codec variant from its key string.
    pub fn from_key(key: &str) -> Result<Self, UnitError> {
        match key {
            "mac12" => Ok(Self::Hex12),
            "mac17" => Ok(Self::Hex17),
            "maclong" => Ok(Self::Decimal),
            _ => Err(UnitError::UnknownUnit {
                family: "mac address",
            }),
        }
    }

    /// Decode `text` according to the selected encoding.
    pub fn parse(&self, text: &str) -> Result<MacAddress, ParseError> {
        match self {
            Self::Hex12 => MacAddress::from_hex12(text),
            Self::Hex17 => MacAddress::from_hex17(text),
            Self::Decimal => MacAddress::from_decimal(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex12_parse() {
        let mac = MacAddress::from_hex12("0011223344AA").unwrap();
        assert_eq!(mac.raw(), 0x0011_2233_44AA);
    }

    #[test]
    fn test_hex12_lower_case() {
        let mac = MacAddress::from_hex12("deadbeef0102").unwrap();
        assert_eq!(mac.raw(), 0xDEAD_BEEF_0102);
    }

    #[test]
    /// Same address through two encodings yields the same integer.
    fn test_hex12_hex17_agreement() {
        let from_12 = MacAddress::from_hex12("0011223344AA").unwrap();
        let from_17 = MacAddress::from_hex17("00:11:22:33:44:AA").unwrap();
        assert_eq!(from_12, from_17);
    }

    #[test]
    fn test_hex17_hyphen_separators() {
        let mac = MacAddress::from_hex17("00-11-22-33-44-AA").unwrap();
        assert_eq!(mac.raw(), 0x0011_2233_44AA);
    }

    #[test]
    fn test_hex12_wrong_length() {
        assert!(matches!(
            MacAddress::from_hex12("0011223344"),
            Err(ParseError::InvalidLength {
                expected: 12,
                found: 10
            })
        ));
    }

    #[test]
    fn test_hex12_bad_digit_position() {
        assert!(matches!(
            MacAddress::from_hex12("00112233G4AA"),
            Err(ParseError::InvalidHexDigit { position: 8 })
        ));
    }

    #[test]
    fn test_hex17_wrong_length() {
        assert!(matches!(
            MacAddress::from_hex17("00:11:22:33:44"),
            Err(ParseError::InvalidLength {
                expected: 17,
                found: 14
            })
        ));
    }

    #[test]
    fn test_hex17_bad_separator() {
        assert!(matches!(
            MacAddress::from_hex17("00:11.22:33:44:AA"),
            Err(ParseError::InvalidSeparator { position: 5 })
        ));
    }

    #[test]
    fn test_decimal_parse() {
        let mac = MacAddress::from_decimal("73588229290").unwrap();
        assert_eq!(mac.raw(), 73_588_229_290);
    }

    #[test]
    fn test_decimal_rejects_non_numeric() {
        assert!(matches!(
            MacAddress::from_decimal("0x11223344AA"),
            Err(ParseError::MalformedNumber)
        ));
        assert!(matches!(
            MacAddress::from_decimal(""),
            Err(ParseError::MalformedNumber)
        ));
    }

    #[test]
    fn test_oui_and_nic_split() {
        let mac = MacAddress::from_hex12("0011223344AA").unwrap();
        assert_eq!(mac.oui(), 0x001122);
        assert_eq!(mac.nic(), 0x3344AA);
    }

    #[test]
    fn test_multicast_flag() {
        // 01:00:5e:... is the IPv4 multicast OUI
        let multicast = MacAddress::from_hex17("01:00:5e:00:00:01").unwrap();
        assert!(multicast.is_multicast());

        let unicast = MacAddress::from_hex12("0011223344AA").unwrap();
        assert!(!unicast.is_multicast());
    }

    #[test]
    fn test_locally_administered_flag() {
        let local = MacAddress::from_hex17("02:00:00:00:00:01").unwrap();
        assert!(local.is_locally_administered());

        let universal = MacAddress::from_hex12("0011223344AA").unwrap();
        assert!(!universal.is_locally_administered());
    }

    #[test]
    fn test_raw_conversion() {
        let raw_value = 0x0011_2233_44AAu64;
        let mac = MacAddress::from_raw(raw_value);
        assert_eq!(mac.raw(), raw_value);

        let converted: u64 = mac.into();
        assert_eq!(converted, raw_value);
    }

    #[test]
    fn test_codec_key_selection() {
        assert_eq!(MacCodec::from_key("mac12").unwrap(), MacCodec::Hex12);
        assert_eq!(MacCodec::from_key("mac17").unwrap(), MacCodec::Hex17);
        assert_eq!(MacCodec::from_key("maclong").unwrap(), MacCodec::Decimal);
        assert!(matches!(
            MacCodec::from_key("mac16"),
            Err(UnitError::UnknownUnit {
                family: "mac address"
            })
        ));
    }

    #[test]
    /// The three codecs decode the same station identity consistently.
    fn test_codec_parse_dispatch() {
        let raw = 0x0011_2233_44AAu64;
        assert_eq!(
            MacCodec::Hex12.parse("0011223344AA").unwrap().raw(),
            raw
        );
        assert_eq!(
            MacCodec::Hex17.parse("00:11:22:33:44:AA").unwrap().raw(),
            raw
        );
        assert_eq!(MacCodec::Decimal.parse("73588229290").unwrap().raw(), raw);
    }
}
