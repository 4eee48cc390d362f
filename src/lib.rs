//! Schema and XML codec for the BetRadar "LiveOdds" in-play sports feed.
//!
//! This crate models the two top-level message shapes of the protocol and
//! converts them to and from their wire form:
//!
//! - [`LiveOddsFeed`] — the inbound `BetradarLiveOdds` envelope carrying
//!   live match state, betting markets, score and card events, and (for
//!   `translation` messages) multilingual odds-type dictionaries.
//! - [`BookmakerStatus`] — the outbound `BookMakerStatus` health report.
//!
//! The caller dispatches between the two envelopes; nothing here sniffs a
//! buffer to decide which one it contains. Decode and encode are pure,
//! stateless transformations over complete in-memory documents — transport,
//! subscription handling, and any stateful merging of successive `change`
//! messages belong to the components consuming this crate.
//!
//! # Example
//!
//! ```
//! use liveodds::LiveOddsFeed;
//!
//! let xml = r#"<BetradarLiveOdds status="alive" timestamp="1386950190000"
//!                  xmlns="http://www.betradar.com/BetradarLiveOdds"/>"#;
//! let feed = LiveOddsFeed::from_xml(xml).unwrap();
//! assert_eq!(feed.status, "alive");
//! assert_eq!(feed.epoch().unwrap().timestamp(), 1386950190);
//! ```

mod codec;
mod error;
mod schema;

pub use error::FeedError;
pub use schema::{
    BookmakerStatus, Card, LiveOddsFeed, LocalizedName, Match, Odd, OddsField, OddsType, Score,
    TranslationOddsField,
};

/// Default XML namespace of the `BetradarLiveOdds` envelope. Captured on
/// decode but never validated.
pub const LIVEODDS_XMLNS: &str = "http://www.betradar.com/BetradarLiveOdds";
