//! Movement commands: `MA`, `Mg{n,s,e,w}<NNNN>`, `M{e,n,s,w}`, `MS`.

use nom::bytes::complete::tag;
use nom::sequence::preceded;

use super::common::{full_match, uint_n};
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_slew_to_target_altaz(input: &str) -> Option<FieldMap> {
    full_match(tag("MA"), input).map(|_| FieldMap::new())
}

fn guide(mnemonic: &'static str, input: &str) -> Option<FieldMap> {
    let duration = full_match(preceded(tag(mnemonic), uint_n(4)), input)?;
    Some(FieldMap::from([(
        "duration_ms".to_string(),
        Field::Int(duration),
    )]))
}

fn parse_guide_north(input: &str) -> Option<FieldMap> {
    guide("Mgn", input)
}

fn parse_guide_south(input: &str) -> Option<FieldMap> {
    guide("Mgs", input)
}

fn parse_guide_east(input: &str) -> Option<FieldMap> {
    guide("Mge", input)
}

fn parse_guide_west(input: &str) -> Option<FieldMap> {
    guide("Mgw", input)
}

fn parse_move_east(input: &str) -> Option<FieldMap> {
    full_match(tag("Me"), input).map(|_| FieldMap::new())
}

fn parse_move_north(input: &str) -> Option<FieldMap> {
    full_match(tag("Mn"), input).map(|_| FieldMap::new())
}

fn parse_move_south(input: &str) -> Option<FieldMap> {
    full_match(tag("Ms"), input).map(|_| FieldMap::new())
}

fn parse_move_west(input: &str) -> Option<FieldMap> {
    full_match(tag("Mw"), input).map(|_| FieldMap::new())
}

fn parse_slew_to_target(input: &str) -> Option<FieldMap> {
    full_match(tag("MS"), input).map(|_| FieldMap::new())
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SlewToTargetAltAz, parse_slew_to_target_altaz),
        CatalogEntry::new(CommandId::GuideNorth, parse_guide_north).store("mount.guide.north"),
        CatalogEntry::new(CommandId::GuideSouth, parse_guide_south).store("mount.guide.south"),
        CatalogEntry::new(CommandId::GuideEast, parse_guide_east).store("mount.guide.east"),
        CatalogEntry::new(CommandId::GuideWest, parse_guide_west).store("mount.guide.west"),
        CatalogEntry::new(CommandId::MoveEast, parse_move_east),
        CatalogEntry::new(CommandId::MoveNorth, parse_move_north),
        CatalogEntry::new(CommandId::MoveSouth, parse_move_south),
        CatalogEntry::new(CommandId::MoveWest, parse_move_west),
        // `SlewToTarget` is documented twice under the names
        // `SlewToTargetObject`/`SlewToTarget`; both are the same wire
        // shape, so one catalog row covers the alias.
        CatalogEntry::new(CommandId::SlewToTarget, parse_slew_to_target),
    ]
}
