//! XML codec for the two feed envelopes.
//!
//! Decode and encode are symmetric, stateless transformations over complete
//! in-memory documents. The decoder is event-based ([`quick_xml::Reader`])
//! rather than serde-derived so that attribute-valued and text-valued fields
//! can coexist on one entity and so conversion failures can report the exact
//! field path. Unrecognized elements and attributes are skipped, not
//! rejected, for forward compatibility with protocol additions.

mod decode;
mod encode;

use std::str::FromStr;

use crate::error::FeedError;
use crate::schema::{BookmakerStatus, LiveOddsFeed};

impl LiveOddsFeed {
    /// Decodes a complete `BetradarLiveOdds` document.
    ///
    /// # Errors
    ///
    /// [`FeedError::MalformedDocument`] if the input is not well-formed
    /// XML or lacks the `BetradarLiveOdds` root element;
    /// [`FeedError::TypeConversion`] if an attribute or text value cannot
    /// convert to its declared scalar type. No partial structure is ever
    /// returned.
    pub fn from_xml(xml: &str) -> Result<Self, FeedError> {
        decode::live_odds_feed(xml)
    }

    /// Encodes this envelope back to its wire form.
    ///
    /// Optional scalar fields holding their default value are omitted from
    /// attribute output; re-decoding the result yields the same default.
    pub fn to_xml(&self) -> Result<String, FeedError> {
        encode::live_odds_feed(self)
    }
}

impl BookmakerStatus {
    /// Decodes a complete `BookMakerStatus` document.
    ///
    /// The caller is responsible for dispatching between the two envelope
    /// shapes; this does not fall back to `BetradarLiveOdds`.
    pub fn from_xml(xml: &str) -> Result<Self, FeedError> {
        decode::bookmaker_status(xml)
    }

    /// Encodes this status report to its wire form. The `Match` sequence
    /// is omitted entirely when empty.
    pub fn to_xml(&self) -> Result<String, FeedError> {
        encode::bookmaker_status(self)
    }
}

/// Parses an attribute or text value into its declared scalar type,
/// reporting the field path on failure.
pub(crate) fn parse_scalar<T: FromStr>(
    path: &'static str,
    raw: &str,
    target: &'static str,
) -> Result<T, FeedError> {
    raw.parse()
        .map_err(|_| FeedError::conversion(path, raw, target))
}

/// The wire uses both word and digit boolean tokens.
pub(crate) fn parse_bool(path: &'static str, raw: &str) -> Result<bool, FeedError> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(FeedError::conversion(path, raw, "bool")),
    }
}

pub(crate) fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_conversion_reports_path_and_raw_text() {
        let err = parse_scalar::<u16>("Match/@msgnr", "abc", "u16").unwrap_err();
        match err {
            FeedError::TypeConversion { path, raw, target } => {
                assert_eq!(path, "Match/@msgnr");
                assert_eq!(raw, "abc");
                assert_eq!(target, "u16");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn scalar_conversion_rejects_overflow() {
        assert!(parse_scalar::<u8>("Match/@matchtime", "256", "u8").is_err());
        assert!(parse_scalar::<u8>("Match/@matchtime", "255", "u8").is_ok());
    }

    #[test]
    fn bool_accepts_word_and_digit_tokens() {
        assert!(parse_bool("Match/@active", "true").unwrap());
        assert!(parse_bool("Match/@active", "1").unwrap());
        assert!(!parse_bool("Match/@active", "false").unwrap());
        assert!(!parse_bool("Match/@active", "0").unwrap());
        assert!(parse_bool("Match/@active", "yes").is_err());
    }
}
