//! Home-position commands: `hC`, `hF`, `hI<YYMMDDHHMMSS>`, `hN`, `hP`, `hS`,
//! `hW`, `h?`.

use nom::bytes::complete::tag;
use nom::sequence::preceded;

use super::common::{full_match, uint_n};
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_calibrate(input: &str) -> Option<FieldMap> {
    full_match(tag("hC"), input).map(|_| FieldMap::new())
}

fn parse_seek(input: &str) -> Option<FieldMap> {
    full_match(tag("hF"), input).map(|_| FieldMap::new())
}

fn parse_bypass_dst_entry(input: &str) -> Option<FieldMap> {
    full_match(
        preceded(
            tag("hI"),
            nom::sequence::tuple((
                uint_n(2),
                uint_n(2),
                uint_n(2),
                uint_n(2),
                uint_n(2),
                uint_n(2),
            )),
        ),
        input,
    )
    .map(|(year, month, day, hours, minutes, seconds)| {
        FieldMap::from([
            ("year".to_string(), Field::Int(year)),
            ("month".to_string(), Field::Int(month)),
            ("day".to_string(), Field::Int(day)),
            ("hours".to_string(), Field::Int(hours)),
            ("minutes".to_string(), Field::Int(minutes)),
            ("seconds".to_string(), Field::Int(seconds)),
        ])
    })
}

fn parse_sleep(input: &str) -> Option<FieldMap> {
    full_match(tag("hN"), input).map(|_| FieldMap::new())
}

fn parse_park(input: &str) -> Option<FieldMap> {
    full_match(tag("hP"), input).map(|_| FieldMap::new())
}

fn parse_set_park_position(input: &str) -> Option<FieldMap> {
    full_match(tag("hS"), input).map(|_| FieldMap::new())
}

fn parse_wake_up(input: &str) -> Option<FieldMap> {
    full_match(tag("hW"), input).map(|_| FieldMap::new())
}

fn parse_query_home_status(input: &str) -> Option<FieldMap> {
    full_match(tag("h?"), input).map(|_| FieldMap::new())
}

fn value_sleeping(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("sleeping".into()))])
}

fn value_parked(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("parked".into()))])
}

fn value_awake(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("awake".into()))])
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::CalibrateHomePosition, parse_calibrate),
        CatalogEntry::new(CommandId::SeekHomePosition, parse_seek),
        CatalogEntry::new(CommandId::BypassDSTEntry, parse_bypass_dst_entry)
            .store("site.bypass_dst_entry"),
        CatalogEntry::new(CommandId::Sleep, parse_sleep)
            .store("mount.power_state")
            .value(value_sleeping),
        CatalogEntry::new(CommandId::Park, parse_park)
            .store("mount.power_state")
            .value(value_parked),
        CatalogEntry::new(CommandId::SetParkPosition, parse_set_park_position)
            .store("mount.park_position"),
        CatalogEntry::new(CommandId::WakeUp, parse_wake_up)
            .store("mount.power_state")
            .value(value_awake),
        CatalogEntry::new(CommandId::QueryHomeStatus, parse_query_home_status)
            .load("mount.home_status"),
    ]
}
