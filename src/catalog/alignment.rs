//! Alignment mode commands: `Aa`, `AL`, `AP`, `AA`.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_automatic_alignment(input: &str) -> Option<FieldMap> {
    full_match(tag("Aa"), input).map(|_| FieldMap::new())
}

fn parse_land_alignment(input: &str) -> Option<FieldMap> {
    full_match(tag("AL"), input).map(|_| FieldMap::new())
}

fn parse_polar_alignment(input: &str) -> Option<FieldMap> {
    full_match(tag("AP"), input).map(|_| FieldMap::new())
}

fn parse_altaz_alignment(input: &str) -> Option<FieldMap> {
    full_match(tag("AA"), input).map(|_| FieldMap::new())
}

fn value_land(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("L".into()))])
}

fn value_polar(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("P".into()))])
}

fn value_altaz(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("A".into()))])
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::AutomaticAlignment, parse_automatic_alignment)
            .store("mount.alignment_mode"),
        CatalogEntry::new(CommandId::LandAlignment, parse_land_alignment)
            .store("mount.alignment_mode")
            .value(value_land),
        CatalogEntry::new(CommandId::PolarAlignment, parse_polar_alignment)
            .store("mount.alignment_mode")
            .value(value_polar),
        CatalogEntry::new(CommandId::AltAzAlignment, parse_altaz_alignment)
            .store("mount.alignment_mode")
            .value(value_altaz),
    ]
}
