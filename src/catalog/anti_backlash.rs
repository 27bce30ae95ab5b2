//! Anti-backlash commands: `$BA<nn>`, `$BZ<nn>`.
//!
//! The wire mnemonic is shared between mount types: on an alt-az mount
//! `$BA` tunes altitude backlash, on an equatorial mount the very same
//! command tunes declination backlash (`SetDeclinationAntiBacklash` in the
//! reference source is a subclass of `SetAltitudeAntiBacklash` with an
//! identical pattern, i.e. a true alias, not a distinct wire shape).
//! Likewise `$BZ` covers azimuth/right-ascension.

use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::map_res;
use nom::sequence::preceded;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_altitude(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(tag("$BA"), map_res(digit1, |s: &str| s.parse::<i64>())),
        input,
    )?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

fn parse_azimuth(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(tag("$BZ"), map_res(digit1, |s: &str| s.parse::<i64>())),
        input,
    )?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SetAltitudeAntiBacklash, parse_altitude)
            .store("mount.backlash.altitude"),
        CatalogEntry::new(CommandId::SetAzimuthAntiBacklash, parse_azimuth)
            .store("mount.backlash.azimuth"),
    ]
}
