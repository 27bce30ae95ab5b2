//! Tracking commands: `TL`, `TM`, `TQ`, `TS`, `T+`, `T-`.
//!
//! The setters family's `ST+`/`ST-`/`STA+`/`STA-`/`STZ+`/`STZ-` are PEC
//! training toggles and are handled there; `T+`/`T-` here are the
//! unrelated manual tracking-rate nudge, kept without an `ST+`/`ST-`
//! alias to avoid colliding with the PEC mnemonics.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_lunar(input: &str) -> Option<FieldMap> {
    full_match(tag("TL"), input).map(|_| FieldMap::new())
}

fn parse_custom(input: &str) -> Option<FieldMap> {
    full_match(tag("TM"), input).map(|_| FieldMap::new())
}

fn parse_sidereal(input: &str) -> Option<FieldMap> {
    full_match(tag("TQ"), input).map(|_| FieldMap::new())
}

fn parse_solar(input: &str) -> Option<FieldMap> {
    full_match(tag("TS"), input).map(|_| FieldMap::new())
}

fn parse_rate_increase(input: &str) -> Option<FieldMap> {
    full_match(tag("T+"), input)
        .map(|_| FieldMap::from([("direction".to_string(), Field::Str("+".to_string()))]))
}

fn parse_rate_decrease(input: &str) -> Option<FieldMap> {
    full_match(tag("T-"), input)
        .map(|_| FieldMap::from([("direction".to_string(), Field::Str("-".to_string()))]))
}

fn value_lunar(_fields: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("lunar".to_string()))])
}

fn value_custom(_fields: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("custom".to_string()))])
}

fn value_sidereal(_fields: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("sidereal".to_string()))])
}

fn value_solar(_fields: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("solar".to_string()))])
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SetLunarTracking, parse_lunar)
            .store("mount.tracking.mode")
            .value(value_lunar),
        CatalogEntry::new(CommandId::SelectCustomTrackingRate, parse_custom)
            .store("mount.tracking.mode")
            .value(value_custom),
        CatalogEntry::new(CommandId::SelectSiderealTrackingRate, parse_sidereal)
            .store("mount.tracking.mode")
            .value(value_sidereal),
        CatalogEntry::new(CommandId::SelectSolarTrackingRate, parse_solar)
            .store("mount.tracking.mode")
            .value(value_solar),
        CatalogEntry::new(CommandId::AdjustTrackingRate, parse_rate_increase)
            .store("mount.tracking.rate_nudge"),
        CatalogEntry::new(CommandId::AdjustTrackingRate, parse_rate_decrease)
            .store("mount.tracking.rate_nudge"),
    ]
}
