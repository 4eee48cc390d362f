use std::fmt::Display;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{parse_bool, parse_scalar};
use crate::error::FeedError;
use crate::schema::{
    BookmakerStatus, Card, LiveOddsFeed, LocalizedName, Match, Odd, OddsField, OddsType, Score,
    TranslationOddsField,
};

type XmlReader<'a> = Reader<&'a [u8]>;

fn malformed<E: Display>(err: E) -> FeedError {
    FeedError::MalformedDocument(err.to_string())
}

fn new_reader(xml: &str) -> XmlReader<'_> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader
}

/// Consumes an unrecognized element and everything inside it. Protocol
/// additions must decode as no-ops, not errors.
fn skip_element(reader: &mut XmlReader, start: &BytesStart) -> Result<(), FeedError> {
    tracing::debug!(
        element = %String::from_utf8_lossy(start.name().as_ref()),
        "ignoring unrecognized element"
    );
    let mut skip = Vec::new();
    reader
        .read_to_end_into(start.name(), &mut skip)
        .map_err(malformed)?;
    Ok(())
}

fn ignore_attr(element: &'static str, key: &[u8]) {
    tracing::debug!(
        element,
        attribute = %String::from_utf8_lossy(key),
        "ignoring unrecognized attribute"
    );
}

/// Runs `visit` over the decoded attributes of `start`.
fn each_attr<F>(reader: &XmlReader, start: &BytesStart, mut visit: F) -> Result<(), FeedError>
where
    F: FnMut(&[u8], &str) -> Result<(), FeedError>,
{
    let decoder = reader.decoder();
    for attr in start.attributes() {
        let attr = attr.map_err(malformed)?;
        let value = attr.decode_and_unescape_value(decoder).map_err(malformed)?;
        visit(attr.key.as_ref(), &value)?;
    }
    Ok(())
}

pub(super) fn live_odds_feed(xml: &str) -> Result<LiveOddsFeed, FeedError> {
    let mut reader = new_reader(xml);
    let mut buf = Vec::new();
    let mut feed = None;

    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) if e.name().as_ref() == b"BetradarLiveOdds" => {
                let envelope = feed_from_attrs(&reader, &e)?;
                feed = Some(parse_feed_children(&mut reader, envelope)?);
            }
            Event::Empty(e) if e.name().as_ref() == b"BetradarLiveOdds" => {
                feed = Some(feed_from_attrs(&reader, &e)?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    feed.ok_or_else(|| FeedError::MalformedDocument("missing BetradarLiveOdds root element".into()))
}

pub(super) fn bookmaker_status(xml: &str) -> Result<BookmakerStatus, FeedError> {
    let mut reader = new_reader(xml);
    let mut buf = Vec::new();
    let mut status = None;

    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) if e.name().as_ref() == b"BookMakerStatus" => {
                let envelope = status_from_attrs(&reader, &e)?;
                status = Some(parse_status_children(&mut reader, envelope)?);
            }
            Event::Empty(e) if e.name().as_ref() == b"BookMakerStatus" => {
                status = Some(status_from_attrs(&reader, &e)?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    status.ok_or_else(|| FeedError::MalformedDocument("missing BookMakerStatus root element".into()))
}

fn feed_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<LiveOddsFeed, FeedError> {
    let mut feed = LiveOddsFeed::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"status" => feed.status = value.to_string(),
            b"timestamp" => {
                feed.timestamp = parse_scalar("BetradarLiveOdds/@timestamp", value, "i64")?
            }
            b"xmlns" => feed.xmlns = value.to_string(),
            other => ignore_attr("BetradarLiveOdds", other),
        }
        Ok(())
    })?;
    Ok(feed)
}

fn parse_feed_children(
    reader: &mut XmlReader,
    mut feed: LiveOddsFeed,
) -> Result<LiveOddsFeed, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Match" => {
                    let envelope = match_from_attrs(reader, &e)?;
                    feed.matches.push(parse_match_children(reader, envelope)?);
                }
                b"OddsType" => {
                    let entry = odds_type_from_attrs(reader, &e)?;
                    feed.odds_types
                        .push(parse_odds_type_children(reader, entry)?);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"Match" => feed.matches.push(match_from_attrs(reader, &e)?),
                b"OddsType" => feed.odds_types.push(odds_type_from_attrs(reader, &e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside BetradarLiveOdds".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(feed)
}

fn status_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<BookmakerStatus, FeedError> {
    let mut status = BookmakerStatus::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"timestamp" => {
                status.timestamp = parse_scalar("BookMakerStatus/@timestamp", value, "i64")?
            }
            b"type" => status.kind = value.to_string(),
            b"bookmakerid" => {
                status.bookmaker_id = parse_scalar("BookMakerStatus/@bookmakerid", value, "u16")?
            }
            other => ignore_attr("BookMakerStatus", other),
        }
        Ok(())
    })?;
    Ok(status)
}

fn parse_status_children(
    reader: &mut XmlReader,
    mut status: BookmakerStatus,
) -> Result<BookmakerStatus, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Match" => {
                    let envelope = match_from_attrs(reader, &e)?;
                    status.matches.push(parse_match_children(reader, envelope)?);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => {
                if e.name().as_ref() == b"Match" {
                    status.matches.push(match_from_attrs(reader, &e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside BookMakerStatus".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(status)
}

fn match_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<Match, FeedError> {
    let mut m = Match::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"active" => m.active = parse_bool("Match/@active", value)?,
            b"betstatus" => m.bet_status = value.to_string(),
            b"matchid" => m.match_id = parse_scalar("Match/@matchid", value, "u32")?,
            b"matchtime" => m.match_time = parse_scalar("Match/@matchtime", value, "u8")?,
            b"msgnr" => m.msgnr = parse_scalar("Match/@msgnr", value, "u16")?,
            b"gamescore" => m.game_score = value.to_string(),
            b"score" => m.score = value.to_string(),
            b"status" => m.status = value.to_string(),
            b"setscores" => m.set_scores = value.to_string(),
            other => ignore_attr("Match", other),
        }
        Ok(())
    })?;
    Ok(m)
}

fn parse_match_children(reader: &mut XmlReader, mut m: Match) -> Result<Match, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Odds" => {
                    let odd = odd_from_attrs(reader, &e)?;
                    m.odds.push(parse_odd_children(reader, odd)?);
                }
                b"Card" => {
                    let card = card_from_attrs(reader, &e)?;
                    let mut skip = Vec::new();
                    reader
                        .read_to_end_into(e.name(), &mut skip)
                        .map_err(malformed)?;
                    m.cards.push(card);
                }
                b"Score" => {
                    let score = score_from_attrs(reader, &e)?;
                    let mut skip = Vec::new();
                    reader
                        .read_to_end_into(e.name(), &mut skip)
                        .map_err(malformed)?;
                    m.scores.push(score);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"Odds" => m.odds.push(odd_from_attrs(reader, &e)?),
                b"Card" => m.cards.push(card_from_attrs(reader, &e)?),
                b"Score" => m.scores.push(score_from_attrs(reader, &e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside Match".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(m)
}

fn odd_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<Odd, FeedError> {
    let mut odd = Odd::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"id" => odd.odds_id = parse_scalar("Match/Odds/@id", value, "u32")?,
            b"active" => odd.active = parse_bool("Match/Odds/@active", value)?,
            b"changed" => odd.changed = value.to_string(),
            b"combination" => {
                odd.combination = parse_scalar("Match/Odds/@combination", value, "u8")?
            }
            b"freetext" => odd.free_text = value.to_string(),
            b"specialoddsvalue" => odd.special_odds_value = value.to_string(),
            b"subtype" => odd.sub_type = parse_scalar("Match/Odds/@subtype", value, "u16")?,
            b"type" => odd.kind = value.to_string(),
            b"typeid" => odd.type_id = parse_scalar("Match/Odds/@typeid", value, "u16")?,
            other => ignore_attr("Odds", other),
        }
        Ok(())
    })?;
    Ok(odd)
}

fn parse_odd_children(reader: &mut XmlReader, mut odd: Odd) -> Result<Odd, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) => match e.name().as_ref() {
                b"OddsField" => {
                    let field = odds_field_from_attrs(reader, &e)?;
                    odd.odds_fields.push(parse_odds_field_text(reader, field)?);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => {
                // No text content: the price stays at its zero default.
                if e.name().as_ref() == b"OddsField" {
                    odd.odds_fields.push(odds_field_from_attrs(reader, &e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside Odds".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(odd)
}

fn odds_field_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<OddsField, FeedError> {
    let mut field = OddsField::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"active" => field.active = parse_bool("Match/Odds/OddsField/@active", value)?,
            b"type" => field.kind = value.to_string(),
            other => ignore_attr("OddsField", other),
        }
        Ok(())
    })?;
    Ok(field)
}

/// The price is the element's own character data, alongside the
/// attribute-valued fields already read from the start tag.
fn parse_odds_field_text(
    reader: &mut XmlReader,
    mut field: OddsField,
) -> Result<OddsField, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Text(t) => {
                let text = t.unescape().map_err(malformed)?;
                field.value = parse_scalar("Match/Odds/OddsField/text()", &text, "f32")?;
            }
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside OddsField".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(field)
}

fn card_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<Card, FeedError> {
    let mut card = Card::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"id" => card.card_id = parse_scalar("Match/Card/@id", value, "u32")?,
            b"player" => card.player = value.to_string(),
            b"team" => card.team = value.to_string(),
            // Unsigned, unlike Score/@time.
            b"time" => card.time = parse_scalar("Match/Card/@time", value, "u8")?,
            b"type" => card.kind = value.to_string(),
            other => ignore_attr("Card", other),
        }
        Ok(())
    })?;
    Ok(card)
}

fn score_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<Score, FeedError> {
    let mut score = Score::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"id" => score.score_id = parse_scalar("Match/Score/@id", value, "u32")?,
            b"away" => score.away = parse_bool("Match/Score/@away", value)?,
            b"home" => score.home = parse_bool("Match/Score/@home", value)?,
            b"player" => score.player = value.to_string(),
            b"scoringteam" => score.scoring_team = value.to_string(),
            // Signed: -1 marks "not applicable" / pre-match.
            b"time" => score.time = parse_scalar("Match/Score/@time", value, "i8")?,
            b"type" => score.kind = value.to_string(),
            other => ignore_attr("Score", other),
        }
        Ok(())
    })?;
    Ok(score)
}

fn odds_type_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<OddsType, FeedError> {
    let mut entry = OddsType::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"type" => entry.kind = value.to_string(),
            b"freetext" => entry.free_text = value.to_string(),
            b"typeid" => entry.type_id = parse_scalar("OddsType/@typeid", value, "u16")?,
            other => ignore_attr("OddsType", other),
        }
        Ok(())
    })?;
    Ok(entry)
}

fn parse_odds_type_children(
    reader: &mut XmlReader,
    mut entry: OddsType,
) -> Result<OddsType, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) => match e.name().as_ref() {
                b"OddsField" => {
                    let field = translation_field_from_attrs(reader, &e)?;
                    entry
                        .odds_fields
                        .push(parse_translation_field_children(reader, field)?);
                }
                b"Name" => {
                    let name = name_from_attrs(reader, &e)?;
                    entry.names.push(parse_name_text(reader, name)?);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"OddsField" => entry
                    .odds_fields
                    .push(translation_field_from_attrs(reader, &e)?),
                b"Name" => entry.names.push(name_from_attrs(reader, &e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside OddsType".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(entry)
}

fn translation_field_from_attrs(
    reader: &XmlReader,
    start: &BytesStart,
) -> Result<TranslationOddsField, FeedError> {
    let mut field = TranslationOddsField::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"type" => field.kind = value.to_string(),
            other => ignore_attr("OddsField", other),
        }
        Ok(())
    })?;
    Ok(field)
}

fn parse_translation_field_children(
    reader: &mut XmlReader,
    mut field: TranslationOddsField,
) -> Result<TranslationOddsField, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Name" => {
                    let name = name_from_attrs(reader, &e)?;
                    field.names.push(parse_name_text(reader, name)?);
                }
                _ => skip_element(reader, &e)?,
            },
            Event::Empty(e) => {
                if e.name().as_ref() == b"Name" {
                    field.names.push(name_from_attrs(reader, &e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside OddsField".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(field)
}

fn name_from_attrs(reader: &XmlReader, start: &BytesStart) -> Result<LocalizedName, FeedError> {
    let mut name = LocalizedName::default();
    each_attr(reader, start, |key, value| {
        match key {
            b"lang" => name.lang = value.to_string(),
            other => ignore_attr("Name", other),
        }
        Ok(())
    })?;
    Ok(name)
}

fn parse_name_text(
    reader: &mut XmlReader,
    mut name: LocalizedName,
) -> Result<LocalizedName, FeedError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Text(t) => {
                name.value = t.unescape().map_err(malformed)?.to_string();
            }
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(_) => break,
            Event::Eof => {
                return Err(FeedError::MalformedDocument(
                    "unexpected end of input inside Name".into(),
                ))
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_optional_attribute_decodes_to_default() {
        let xml = r#"<BetradarLiveOdds status="change" timestamp="1386950190000"
                         xmlns="http://www.betradar.com/BetradarLiveOdds">
                       <Match active="1" matchid="867278"/>
                     </BetradarLiveOdds>"#;
        let feed = LiveOddsFeed::from_xml(xml).unwrap();
        assert_eq!(feed.matches.len(), 1);
        assert_eq!(feed.matches[0].msgnr, 0);
        assert_eq!(feed.matches[0].bet_status, "");
        assert_eq!(feed.matches[0].match_time, 0);
    }

    #[test]
    fn odds_field_consumes_attribute_and_text_content() {
        let xml = r#"<BetradarLiveOdds status="change" timestamp="0">
                       <Match active="true" matchid="1">
                         <Odds id="9" active="true" changed="false" combination="0"
                               freetext="" specialoddsvalue="" subtype="0" type="to" typeid="5">
                           <OddsField active="true" type="x">7.0</OddsField>
                         </Odds>
                       </Match>
                     </BetradarLiveOdds>"#;
        let feed = LiveOddsFeed::from_xml(xml).unwrap();
        let field = &feed.matches[0].odds[0].odds_fields[0];
        assert_eq!(field.kind, "x");
        assert_eq!(field.value, 7.0);
        assert!(field.active);
    }

    #[test]
    fn odds_field_without_active_defaults_to_active() {
        let xml = r#"<BetradarLiveOdds status="change" timestamp="0">
                       <Match active="true" matchid="1">
                         <Odds id="9" active="true" changed="false" type="ft2w">
                           <OddsField type="1">1.8</OddsField>
                         </Odds>
                       </Match>
                     </BetradarLiveOdds>"#;
        let feed = LiveOddsFeed::from_xml(xml).unwrap();
        assert!(feed.matches[0].odds[0].odds_fields[0].active);
    }

    #[test]
    fn outcome_order_is_preserved() {
        let xml = r#"<BetradarLiveOdds status="change" timestamp="0">
                       <Match active="true" matchid="1">
                         <Odds id="9" active="true" changed="false" type="ft3w">
                           <OddsField type="1">1.4</OddsField>
                           <OddsField type="x">7.0</OddsField>
                           <OddsField type="2">4.05</OddsField>
                         </Odds>
                       </Match>
                     </BetradarLiveOdds>"#;
        let feed = LiveOddsFeed::from_xml(xml).unwrap();
        let kinds: Vec<&str> = feed.matches[0].odds[0]
            .odds_fields
            .iter()
            .map(|f| f.kind.as_str())
            .collect();
        assert_eq!(kinds, vec!["1", "x", "2"]);
    }

    #[test]
    fn score_time_is_signed_card_time_is_not() {
        let score_xml = r#"<BetradarLiveOdds status="score" timestamp="0">
                             <Match active="true" matchid="1">
                               <Score id="66664" away="true" home="false"
                                      scoringteam="away" time="-1" type="live"/>
                             </Match>
                           </BetradarLiveOdds>"#;
        let feed = LiveOddsFeed::from_xml(score_xml).unwrap();
        assert_eq!(feed.matches[0].scores[0].time, -1);

        let card_xml = r#"<BetradarLiveOdds status="score" timestamp="0">
                            <Match active="true" matchid="1">
                              <Card id="111556" player="Ramires" team="home"
                                    time="-1" type="yellow"/>
                            </Match>
                          </BetradarLiveOdds>"#;
        let err = LiveOddsFeed::from_xml(card_xml).unwrap_err();
        match err {
            FeedError::TypeConversion { path, raw, .. } => {
                assert_eq!(path, "Match/Card/@time");
                assert_eq!(raw, "-1");
            }
            other => panic!("expected TypeConversion, got {other:?}"),
        }
    }

    #[test]
    fn unknown_status_value_passes_through() {
        let xml = r#"<BetradarLiveOdds status="betcancel" timestamp="0"/>"#;
        let feed = LiveOddsFeed::from_xml(xml).unwrap();
        assert_eq!(feed.status, "betcancel");
    }

    #[test]
    fn unrecognized_elements_and_attributes_are_skipped() {
        let xml = r#"<BetradarLiveOdds status="change" timestamp="0" futureattr="1">
                       <FutureElement><Nested a="b">text</Nested></FutureElement>
                       <Match active="true" matchid="42" futureattr="x">
                         <FutureChild/>
                       </Match>
                     </BetradarLiveOdds>"#;
        let feed = LiveOddsFeed::from_xml(xml).unwrap();
        assert_eq!(feed.matches.len(), 1);
        assert_eq!(feed.matches[0].match_id, 42);
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(matches!(
            LiveOddsFeed::from_xml("<BetradarLiveOdds status=\"alive\""),
            Err(FeedError::MalformedDocument(_))
        ));
        assert!(matches!(
            LiveOddsFeed::from_xml("<NotTheFeed/>"),
            Err(FeedError::MalformedDocument(_))
        ));
    }

    #[test]
    fn non_numeric_attribute_reports_field_path() {
        let xml = r#"<BetradarLiveOdds status="change" timestamp="0">
                       <Match active="true" matchid="1" msgnr="soon"/>
                     </BetradarLiveOdds>"#;
        let err = LiveOddsFeed::from_xml(xml).unwrap_err();
        match err {
            FeedError::TypeConversion { path, raw, target } => {
                assert_eq!(path, "Match/@msgnr");
                assert_eq!(raw, "soon");
                assert_eq!(target, "u16");
            }
            other => panic!("expected TypeConversion, got {other:?}"),
        }
    }

    #[test]
    fn bookmaker_status_decodes_seconds_timestamp() {
        let xml = r#"<BookMakerStatus timestamp="1386950190" type="error" bookmakerid="1234">
                       <Match active="true" matchid="12345678"/>
                     </BookMakerStatus>"#;
        let status = BookmakerStatus::from_xml(xml).unwrap();
        assert_eq!(status.timestamp, 1386950190);
        assert_eq!(status.kind, "error");
        assert_eq!(status.bookmaker_id, 1234);
        assert_eq!(status.matches.len(), 1);
        assert_eq!(status.matches[0].match_id, 12345678);
    }

    #[test]
    fn envelopes_are_not_auto_detected() {
        let xml = r#"<BookMakerStatus timestamp="0" type="error" bookmakerid="1"/>"#;
        assert!(LiveOddsFeed::from_xml(xml).is_err());
    }

    #[test]
    fn entity_declarations_are_not_expanded() {
        // quick-xml (0.37) never parses <!ENTITY> declarations, so an XXE
        // payload either errors or leaves the reference unexpanded.
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE BetradarLiveOdds [<!ENTITY xxe SYSTEM "file:///etc/passwd">]>
<BetradarLiveOdds status="change" timestamp="0">
  <Match active="true" matchid="1" score="&xxe;"/>
</BetradarLiveOdds>"#;
        if let Ok(feed) = LiveOddsFeed::from_xml(xml) {
            assert!(!feed.matches[0].score.contains("root:"));
        }
    }
}
