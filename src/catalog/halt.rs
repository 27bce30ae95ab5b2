//! Halt commands: `Q`, `Qe`, `Qn`, `Qs`, `Qw`.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::FieldMap;

fn parse_halt_all(input: &str) -> Option<FieldMap> {
    full_match(tag("Q"), input).map(|_| FieldMap::new())
}

fn parse_halt_eastward(input: &str) -> Option<FieldMap> {
    full_match(tag("Qe"), input).map(|_| FieldMap::new())
}

fn parse_halt_northward(input: &str) -> Option<FieldMap> {
    full_match(tag("Qn"), input).map(|_| FieldMap::new())
}

fn parse_halt_southward(input: &str) -> Option<FieldMap> {
    full_match(tag("Qs"), input).map(|_| FieldMap::new())
}

fn parse_halt_westward(input: &str) -> Option<FieldMap> {
    full_match(tag("Qw"), input).map(|_| FieldMap::new())
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        // The directional halts (`Qe`/`Qn`/`Qs`/`Qw`) must be tried before
        // the bare `Q` (halt-all), which would otherwise also decline on
        // the trailing direction letter but only by luck of `full_match`
        // requiring total consumption; declaring them first keeps the
        // ordering obviously correct rather than incidental.
        CatalogEntry::new(CommandId::HaltEastward, parse_halt_eastward),
        CatalogEntry::new(CommandId::HaltNorthward, parse_halt_northward),
        CatalogEntry::new(CommandId::HaltSouthward, parse_halt_southward),
        CatalogEntry::new(CommandId::HaltWestward, parse_halt_westward),
        CatalogEntry::new(CommandId::HaltAll, parse_halt_all),
    ]
}
