//! Slew rate commands: `RC`, `RG`, `RM`, `RS`, `RA<NN.N>`, `Re<NN.N>`, `Rg<NN.N>`.

use nom::bytes::complete::tag;
use nom::sequence::preceded;

use super::common::{float_nn_n, full_match};
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_centering(input: &str) -> Option<FieldMap> {
    full_match(tag("RC"), input).map(|_| FieldMap::new())
}

fn parse_guiding(input: &str) -> Option<FieldMap> {
    full_match(tag("RG"), input).map(|_| FieldMap::new())
}

fn parse_finding(input: &str) -> Option<FieldMap> {
    full_match(tag("RM"), input).map(|_| FieldMap::new())
}

fn parse_max(input: &str) -> Option<FieldMap> {
    full_match(tag("RS"), input).map(|_| FieldMap::new())
}

fn parse_ra_rate(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("RA"), float_nn_n), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Float(value))]))
}

fn parse_dec_rate(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("Re"), float_nn_n), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Float(value))]))
}

fn parse_guide_rate(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("Rg"), float_nn_n), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Float(value))]))
}

fn value_centering(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("centering".into()))])
}

fn value_guiding(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("guiding".into()))])
}

fn value_finding(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("finding".into()))])
}

fn value_max(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("max".into()))])
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SetSlewRateToCentering, parse_centering)
            .store("mount.slew_rate_mode")
            .value(value_centering),
        CatalogEntry::new(CommandId::SetSlewRateToGuiding, parse_guiding)
            .store("mount.slew_rate_mode")
            .value(value_guiding),
        CatalogEntry::new(CommandId::SetSlewRateToFinding, parse_finding)
            .store("mount.slew_rate_mode")
            .value(value_finding),
        CatalogEntry::new(CommandId::SetSlewRateToMax, parse_max)
            .store("mount.slew_rate_mode")
            .value(value_max),
        CatalogEntry::new(CommandId::SetRightAscensionSlewRate, parse_ra_rate)
            .store("mount.slew_rate.right_ascension"),
        CatalogEntry::new(CommandId::SetDeclinationSlewRate, parse_dec_rate)
            .store("mount.slew_rate.declination"),
        CatalogEntry::new(CommandId::SetGuideRate, parse_guide_rate).store("mount.guide_rate"),
    ]
}
