use std::fmt::Display;
use std::io::Cursor;

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::bool_str;
use crate::error::FeedError;
use crate::schema::{
    BookmakerStatus, Card, LiveOddsFeed, LocalizedName, Match, Odd, OddsField, OddsType, Score,
    TranslationOddsField,
};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn write_err<E: Display>(err: E) -> FeedError {
    FeedError::Write(err.to_string())
}

fn finish(writer: XmlWriter) -> Result<String, FeedError> {
    String::from_utf8(writer.into_inner().into_inner()).map_err(write_err)
}

/// Writes `start` as self-closing when it has no children, otherwise runs
/// `children` between the start and end tags.
fn write_element<F>(writer: &mut XmlWriter, start: BytesStart, children: Option<F>) -> Result<(), FeedError>
where
    F: FnOnce(&mut XmlWriter) -> Result<(), FeedError>,
{
    match children {
        None => writer.write_event(Event::Empty(start)).map_err(write_err),
        Some(f) => {
            let end = start.to_end().into_owned();
            writer.write_event(Event::Start(start)).map_err(write_err)?;
            f(writer)?;
            writer.write_event(Event::End(end)).map_err(write_err)
        }
    }
}

pub(super) fn live_odds_feed(feed: &LiveOddsFeed) -> Result<String, FeedError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut root = BytesStart::new("BetradarLiveOdds");
    root.push_attribute(("status", feed.status.as_str()));
    root.push_attribute(("timestamp", feed.timestamp.to_string().as_str()));
    root.push_attribute(("xmlns", feed.xmlns.as_str()));

    let has_children = !feed.matches.is_empty() || !feed.odds_types.is_empty();
    write_element(
        &mut writer,
        root,
        has_children.then_some(|w: &mut XmlWriter| {
            for m in &feed.matches {
                write_match(w, m)?;
            }
            for entry in &feed.odds_types {
                write_odds_type(w, entry)?;
            }
            Ok(())
        }),
    )?;

    finish(writer)
}

pub(super) fn bookmaker_status(status: &BookmakerStatus) -> Result<String, FeedError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut root = BytesStart::new("BookMakerStatus");
    root.push_attribute(("timestamp", status.timestamp.to_string().as_str()));
    root.push_attribute(("type", status.kind.as_str()));
    root.push_attribute(("bookmakerid", status.bookmaker_id.to_string().as_str()));

    // The Match sequence is omitted entirely when empty.
    let has_children = !status.matches.is_empty();
    write_element(
        &mut writer,
        root,
        has_children.then_some(|w: &mut XmlWriter| {
            for m in &status.matches {
                write_match(w, m)?;
            }
            Ok(())
        }),
    )?;

    finish(writer)
}

fn write_match(writer: &mut XmlWriter, m: &Match) -> Result<(), FeedError> {
    let mut el = BytesStart::new("Match");
    el.push_attribute(("active", bool_str(m.active)));
    if !m.bet_status.is_empty() {
        el.push_attribute(("betstatus", m.bet_status.as_str()));
    }
    el.push_attribute(("matchid", m.match_id.to_string().as_str()));
    if m.match_time != 0 {
        el.push_attribute(("matchtime", m.match_time.to_string().as_str()));
    }
    if m.msgnr != 0 {
        el.push_attribute(("msgnr", m.msgnr.to_string().as_str()));
    }
    if !m.game_score.is_empty() {
        el.push_attribute(("gamescore", m.game_score.as_str()));
    }
    if !m.score.is_empty() {
        el.push_attribute(("score", m.score.as_str()));
    }
    if !m.status.is_empty() {
        el.push_attribute(("status", m.status.as_str()));
    }
    if !m.set_scores.is_empty() {
        el.push_attribute(("setscores", m.set_scores.as_str()));
    }

    let has_children = !m.odds.is_empty() || !m.cards.is_empty() || !m.scores.is_empty();
    write_element(
        writer,
        el,
        has_children.then_some(|w: &mut XmlWriter| {
            for odd in &m.odds {
                write_odd(w, odd)?;
            }
            for card in &m.cards {
                write_card(w, card)?;
            }
            for score in &m.scores {
                write_score(w, score)?;
            }
            Ok(())
        }),
    )
}

fn write_odd(writer: &mut XmlWriter, odd: &Odd) -> Result<(), FeedError> {
    let mut el = BytesStart::new("Odds");
    el.push_attribute(("id", odd.odds_id.to_string().as_str()));
    el.push_attribute(("active", bool_str(odd.active)));
    el.push_attribute(("changed", odd.changed.as_str()));
    el.push_attribute(("combination", odd.combination.to_string().as_str()));
    el.push_attribute(("freetext", odd.free_text.as_str()));
    el.push_attribute(("specialoddsvalue", odd.special_odds_value.as_str()));
    el.push_attribute(("subtype", odd.sub_type.to_string().as_str()));
    el.push_attribute(("type", odd.kind.as_str()));
    el.push_attribute(("typeid", odd.type_id.to_string().as_str()));

    let has_children = !odd.odds_fields.is_empty();
    write_element(
        writer,
        el,
        has_children.then_some(|w: &mut XmlWriter| {
            for field in &odd.odds_fields {
                write_odds_field(w, field)?;
            }
            Ok(())
        }),
    )
}

fn write_odds_field(writer: &mut XmlWriter, field: &OddsField) -> Result<(), FeedError> {
    let mut el = BytesStart::new("OddsField");
    el.push_attribute(("active", bool_str(field.active)));
    el.push_attribute(("type", field.kind.as_str()));

    let price = field.value.to_string();
    write_element(
        writer,
        el,
        Some(|w: &mut XmlWriter| {
            w.write_event(Event::Text(BytesText::new(&price)))
                .map_err(write_err)
        }),
    )
}

fn write_card(writer: &mut XmlWriter, card: &Card) -> Result<(), FeedError> {
    let mut el = BytesStart::new("Card");
    el.push_attribute(("id", card.card_id.to_string().as_str()));
    el.push_attribute(("player", card.player.as_str()));
    el.push_attribute(("team", card.team.as_str()));
    el.push_attribute(("time", card.time.to_string().as_str()));
    el.push_attribute(("type", card.kind.as_str()));
    writer.write_event(Event::Empty(el)).map_err(write_err)
}

fn write_score(writer: &mut XmlWriter, score: &Score) -> Result<(), FeedError> {
    let mut el = BytesStart::new("Score");
    el.push_attribute(("id", score.score_id.to_string().as_str()));
    el.push_attribute(("away", bool_str(score.away)));
    el.push_attribute(("home", bool_str(score.home)));
    if !score.player.is_empty() {
        el.push_attribute(("player", score.player.as_str()));
    }
    el.push_attribute(("scoringteam", score.scoring_team.as_str()));
    el.push_attribute(("time", score.time.to_string().as_str()));
    el.push_attribute(("type", score.kind.as_str()));
    writer.write_event(Event::Empty(el)).map_err(write_err)
}

fn write_odds_type(writer: &mut XmlWriter, entry: &OddsType) -> Result<(), FeedError> {
    let mut el = BytesStart::new("OddsType");
    el.push_attribute(("type", entry.kind.as_str()));
    if !entry.free_text.is_empty() {
        el.push_attribute(("freetext", entry.free_text.as_str()));
    }
    el.push_attribute(("typeid", entry.type_id.to_string().as_str()));

    let has_children = !entry.odds_fields.is_empty() || !entry.names.is_empty();
    write_element(
        writer,
        el,
        has_children.then_some(|w: &mut XmlWriter| {
            for field in &entry.odds_fields {
                write_translation_field(w, field)?;
            }
            for name in &entry.names {
                write_name(w, name)?;
            }
            Ok(())
        }),
    )
}

fn write_translation_field(
    writer: &mut XmlWriter,
    field: &TranslationOddsField,
) -> Result<(), FeedError> {
    let mut el = BytesStart::new("OddsField");
    el.push_attribute(("type", field.kind.as_str()));

    let has_children = !field.names.is_empty();
    write_element(
        writer,
        el,
        has_children.then_some(|w: &mut XmlWriter| {
            for name in &field.names {
                write_name(w, name)?;
            }
            Ok(())
        }),
    )
}

fn write_name(writer: &mut XmlWriter, name: &LocalizedName) -> Result<(), FeedError> {
    let mut el = BytesStart::new("Name");
    el.push_attribute(("lang", name.lang.as_str()));
    write_element(
        writer,
        el,
        Some(|w: &mut XmlWriter| {
            w.write_event(Event::Text(BytesText::new(&name.value)))
                .map_err(write_err)
        }),
    )
}
