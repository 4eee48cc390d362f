use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The inbound `BetradarLiveOdds` envelope: one complete feed message.
///
/// A message's kind is carried by [`status`](Self::status) (`alive`,
/// `change`, `score`, `translation`, ...) together with which of the
/// optional groups are populated. `status` is an open string — unknown
/// future values decode unchanged rather than failing closed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiveOddsFeed {
    /// Message kind discriminator (`alive`, `change`, `translation`,
    /// `score`, or any future value).
    pub status: String,
    /// Milliseconds since the Unix epoch. NOT seconds — the upstream feed
    /// does not follow the usual epoch convention. See [`epoch`](Self::epoch).
    pub timestamp: i64,
    /// The document's default namespace, captured verbatim. Expected to be
    /// [`LIVEODDS_XMLNS`](crate::LIVEODDS_XMLNS) but never validated.
    pub xmlns: String,
    /// Live match state, in document order. Empty for `translation`
    /// messages.
    pub matches: Vec<Match>,
    /// Odds-type dictionary entries. Populated only for `translation`
    /// messages.
    pub odds_types: Vec<OddsType>,
}

impl LiveOddsFeed {
    /// Message timestamp as a local point in time.
    ///
    /// The wire carries milliseconds; upstream's contract is whole seconds
    /// obtained by truncating division, so sub-second precision is
    /// discarded here on purpose and must stay that way. Returns `None`
    /// only when the seconds value falls outside chrono's representable
    /// range.
    pub fn epoch(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp(self.timestamp / 1000, 0).map(|dt| dt.with_timezone(&Local))
    }
}

/// One match and its current betting state.
///
/// Optional attributes absent on the wire decode to the field's default
/// value, never an error. `msgnr` is an ordering hint for this match
/// within the feed stream; detecting gaps or reordering from it is the
/// consumer's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Match {
    pub active: bool,
    pub bet_status: String,
    /// Identifies the match. Unique within a feed's lifetime, but not
    /// enforced unique within one message.
    pub match_id: u32,
    /// Minute marker.
    pub match_time: u8,
    /// Per-match message sequence number (`msgnr` on the wire).
    pub msgnr: u16,
    /// Free-form per-sport score encodings, e.g. `"-:-"`, `"0:1"`.
    pub game_score: String,
    pub score: String,
    /// Match phase, e.g. `not_started`, `1p`, `ended`.
    pub status: String,
    pub set_scores: String,
    /// Betting markets, in document order.
    pub odds: Vec<Odd>,
    pub cards: Vec<Card>,
    pub scores: Vec<Score>,
}

/// A betting market instance (`Odds` element on the wire).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Odd {
    /// Wire attribute `id`.
    pub odds_id: u32,
    pub active: bool,
    /// Boolean-like flag kept as its exact wire text; the format does not
    /// use a canonical boolean token here.
    pub changed: String,
    pub combination: u8,
    /// Human-readable market description.
    pub free_text: String,
    /// Market parameter, e.g. a handicap line `"2.5"` or score trigger
    /// `"0:0"`.
    pub special_odds_value: String,
    pub sub_type: u16,
    /// Market-type code (`ft3w`, `to`, `ft2w`, ...). Wire attribute `type`.
    pub kind: String,
    pub type_id: u16,
    /// Priced outcomes. Order is positionally meaningful (e.g. home, draw,
    /// away) and preserved exactly.
    pub odds_fields: Vec<OddsField>,
}

/// One priced outcome within a market.
///
/// `value` is the element's text content while `active` and `kind` are
/// attributes of the same element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsField {
    /// Decimal odds price.
    pub value: f32,
    /// Absent on the wire means active.
    pub active: bool,
    /// Outcome code (`"1"`, `"x"`, `"2"`, `"o"`, `"u"`, ...). Wire
    /// attribute `type`.
    pub kind: String,
}

impl Default for OddsField {
    fn default() -> Self {
        OddsField {
            value: 0.0,
            active: true,
            kind: String::new(),
        }
    }
}

/// Dictionary entry from a `translation` message: human labels for a
/// market-type code. Not live state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OddsType {
    /// Market-type code. Wire attribute `type`.
    pub kind: String,
    pub free_text: String,
    pub type_id: u16,
    pub odds_fields: Vec<TranslationOddsField>,
    /// Labels for the market type itself, one per language.
    pub names: Vec<LocalizedName>,
}

/// Per-outcome labels within a dictionary entry (`OddsField` element on
/// the wire, without a price).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationOddsField {
    /// Outcome code. Wire attribute `type`.
    pub kind: String,
    pub names: Vec<LocalizedName>,
}

/// A translated label (`Name` element): the text is element content, the
/// language code an attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedName {
    pub value: String,
    /// Language code, e.g. `"en"`.
    pub lang: String,
}

/// A card event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    /// Wire attribute `id`.
    pub card_id: u32,
    pub player: String,
    /// `home` or `away` by convention; not enforced.
    pub team: String,
    /// Match minute. Unsigned — a negative wire value is a conversion
    /// error, unlike [`Score::time`].
    pub time: u8,
    /// Card colour, e.g. `yellow`, `red`. Wire attribute `type`.
    pub kind: String,
}

/// A score event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Wire attribute `id`.
    pub score_id: u32,
    /// `away` and `home` are independent flags; the schema never checks
    /// them for exclusivity.
    pub away: bool,
    pub home: bool,
    pub player: String,
    pub scoring_team: String,
    /// Signed match minute; `-1` means not applicable / pre-match.
    pub time: i8,
    /// e.g. `live`. Wire attribute `type`.
    pub kind: String,
}

/// The outbound `BookMakerStatus` envelope, used for status reporting
/// rather than inbound odds.
///
/// Unlike [`LiveOddsFeed`], its timestamp is whole Unix seconds — the two
/// envelopes are not timestamp-compatible.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookmakerStatus {
    /// Whole seconds since the Unix epoch.
    pub timestamp: i64,
    /// Status code, e.g. `error`. Wire attribute `type`.
    pub kind: String,
    pub bookmaker_id: u16,
    /// Omitted entirely from the wire form when empty.
    pub matches: Vec<Match>,
}
