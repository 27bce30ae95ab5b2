//! Reticle commands: `B+`, `B-`, `$B<n>`, `$BD<nn>`.

use nom::bytes::complete::tag;
use nom::character::complete::{digit1, satisfy};
use nom::combinator::{map, map_res};
use nom::sequence::preceded;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_increase(input: &str) -> Option<FieldMap> {
    full_match(tag("B+"), input).map(|_| FieldMap::new())
}

fn parse_decrease(input: &str) -> Option<FieldMap> {
    full_match(tag("B-"), input).map(|_| FieldMap::new())
}

fn parse_flash_rate(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(tag("$B"), map(satisfy(|c: char| c.is_ascii_digit()), |c| {
            c.to_digit(10).unwrap() as i64
        })),
        input,
    )?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

fn parse_flash_duty_cycle(input: &str) -> Option<FieldMap> {
    let value = full_match(
        preceded(tag("$BD"), map_res(digit1, |s: &str| s.parse::<i64>())),
        input,
    )?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

fn value_increase(_: &FieldMap) -> FieldMap {
    FieldMap::from([("direction".to_string(), Field::Str("increase".into()))])
}

fn value_decrease(_: &FieldMap) -> FieldMap {
    FieldMap::from([("direction".to_string(), Field::Str("decrease".into()))])
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SetReticleFlashDutyCycle, parse_flash_duty_cycle)
            .store("mount.reticle.flash_duty_cycle"),
        CatalogEntry::new(CommandId::SetReticleFlashRate, parse_flash_rate)
            .store("mount.reticle.flash_rate"),
        CatalogEntry::new(CommandId::IncreaseReticleBrightness, parse_increase)
            .store("mount.reticle.brightness")
            .value(value_increase),
        CatalogEntry::new(CommandId::DecreaseReticleBrightness, parse_decrease)
            .store("mount.reticle.brightness")
            .value(value_decrease),
    ]
}
