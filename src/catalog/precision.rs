//! Precision and format toggles: `P`, `U`, `H`, `I`.
//!
//! `H` (time format) and `I` (initialize) have no family of their own in
//! the wire protocol big enough to warrant a module; they are single
//! no-argument toggles in the same spirit as `P`/`U`, so they live here.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::FieldMap;

fn parse_toggle_precision(input: &str) -> Option<FieldMap> {
    full_match(tag("P"), input).map(|_| FieldMap::new())
}

fn parse_toggle_precision_position(input: &str) -> Option<FieldMap> {
    full_match(tag("U"), input).map(|_| FieldMap::new())
}

fn parse_toggle_time_format(input: &str) -> Option<FieldMap> {
    full_match(tag("H"), input).map(|_| FieldMap::new())
}

fn parse_initialize(input: &str) -> Option<FieldMap> {
    full_match(tag("I"), input).map(|_| FieldMap::new())
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::HighPrecisionToggle, parse_toggle_precision)
            .store("mount.high_precision")
            .toggle(),
        CatalogEntry::new(
            CommandId::PrecisionPositionToggle,
            parse_toggle_precision_position,
        ),
        CatalogEntry::new(CommandId::ToggleTimeFormat, parse_toggle_time_format)
            .store("site.clock_format_24h")
            .toggle(),
        CatalogEntry::new(CommandId::Initialize, parse_initialize),
    ]
}
