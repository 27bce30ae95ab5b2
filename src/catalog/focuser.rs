//! Focuser commands: `F+`, `F-`, `FP<signed-nn>`, `FC<nsew>`, `FQ`,
//! `FLD<1-9>`, `FLN<1-9><name>`, `FLS<1-9>`, `FF`, `FS`, `F1`..`F4`, `FB`.

use nom::bytes::complete::tag;
use nom::sequence::preceded;

use super::common::{direction_nsew, full_match, name_string, preset_idx, signed_int_n};
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_move_in(input: &str) -> Option<FieldMap> {
    full_match(tag("F+"), input).map(|_| FieldMap::new())
}

fn parse_move_out(input: &str) -> Option<FieldMap> {
    full_match(tag("F-"), input).map(|_| FieldMap::new())
}

fn parse_slew_to_position(input: &str) -> Option<FieldMap> {
    let value = full_match(preceded(tag("FP"), signed_int_n(2)), input)?;
    Some(FieldMap::from([("value".to_string(), Field::Int(value))]))
}

fn parse_move_direction(input: &str) -> Option<FieldMap> {
    let dir = full_match(preceded(tag("FC"), direction_nsew), input)?;
    Some(FieldMap::from([(
        "direction".to_string(),
        Field::Str(dir.to_string()),
    )]))
}

fn parse_halt(input: &str) -> Option<FieldMap> {
    full_match(tag("FQ"), input).map(|_| FieldMap::new())
}

fn parse_delete_preset(input: &str) -> Option<FieldMap> {
    let idx = full_match(preceded(tag("FLD"), preset_idx), input)?;
    Some(FieldMap::from([("idx".to_string(), Field::Int(idx))]))
}

fn parse_set_preset_name(input: &str) -> Option<FieldMap> {
    let (idx, name) = full_match(
        preceded(tag("FLN"), nom::sequence::pair(preset_idx, name_string)),
        input,
    )?;
    Some(FieldMap::from([
        ("idx".to_string(), Field::Int(idx)),
        ("name".to_string(), Field::Str(name)),
    ]))
}

fn parse_select_preset(input: &str) -> Option<FieldMap> {
    let idx = full_match(preceded(tag("FLS"), preset_idx), input)?;
    Some(FieldMap::from([("idx".to_string(), Field::Int(idx))]))
}

fn parse_set_fast(input: &str) -> Option<FieldMap> {
    full_match(tag("FF"), input).map(|_| FieldMap::new())
}

fn parse_set_slow(input: &str) -> Option<FieldMap> {
    full_match(tag("FS"), input).map(|_| FieldMap::new())
}

fn select_rate(mnemonic: &'static str, input: &str) -> Option<FieldMap> {
    full_match(tag(mnemonic), input).map(|_| FieldMap::new())
}

fn parse_select_rate_1(input: &str) -> Option<FieldMap> {
    select_rate("F1", input)
}

fn parse_select_rate_2(input: &str) -> Option<FieldMap> {
    select_rate("F2", input)
}

fn parse_select_rate_3(input: &str) -> Option<FieldMap> {
    select_rate("F3", input)
}

fn parse_select_rate_4(input: &str) -> Option<FieldMap> {
    select_rate("F4", input)
}

fn parse_query_busy(input: &str) -> Option<FieldMap> {
    full_match(tag("FB"), input).map(|_| FieldMap::new())
}

fn value_rate(level: i64) -> impl Fn(&FieldMap) -> FieldMap {
    move |_fields| FieldMap::from([("value".to_string(), Field::Int(level))])
}

fn value_rate_1(_fields: &FieldMap) -> FieldMap {
    value_rate(1)(_fields)
}

fn value_rate_2(_fields: &FieldMap) -> FieldMap {
    value_rate(2)(_fields)
}

fn value_rate_3(_fields: &FieldMap) -> FieldMap {
    value_rate(3)(_fields)
}

fn value_rate_4(_fields: &FieldMap) -> FieldMap {
    value_rate(4)(_fields)
}

fn value_fast(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("fast".into()))])
}

fn value_slow(_: &FieldMap) -> FieldMap {
    FieldMap::from([("value".to_string(), Field::Str("slow".into()))])
}

fn value_empty_name(fields: &FieldMap) -> FieldMap {
    let mut out = FieldMap::new();
    if let Some(idx) = fields.get("idx") {
        out.insert("idx".to_string(), idx.clone());
    }
    out.insert("name".to_string(), Field::Str(String::new()));
    out
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::FocuserMoveIn, parse_move_in),
        CatalogEntry::new(CommandId::FocuserMoveOut, parse_move_out),
        CatalogEntry::new(CommandId::FocuserSlewToPosition, parse_slew_to_position)
            .store("focuser.position"),
        CatalogEntry::new(CommandId::FocuserMoveDirection, parse_move_direction)
            .store("focuser.move_direction"),
        CatalogEntry::new(CommandId::FocuserHalt, parse_halt),
        CatalogEntry::new(CommandId::FocuserDeletePreset, parse_delete_preset)
            .store("focuser.presets.name_{idx}")
            .value(value_empty_name),
        CatalogEntry::new(CommandId::FocuserSetPresetName, parse_set_preset_name)
            .store("focuser.presets.name_{idx}"),
        CatalogEntry::new(CommandId::FocuserSelectPreset, parse_select_preset)
            .store("focuser.presets.selected"),
        CatalogEntry::new(CommandId::FocuserSetFast, parse_set_fast)
            .store("focuser.rate_mode")
            .value(value_fast),
        CatalogEntry::new(CommandId::FocuserSetSlow, parse_set_slow)
            .store("focuser.rate_mode")
            .value(value_slow),
        CatalogEntry::new(CommandId::FocuserSelectRate, parse_select_rate_1)
            .store("focuser.rate_mode")
            .value(value_rate_1),
        CatalogEntry::new(CommandId::FocuserSelectRate, parse_select_rate_2)
            .store("focuser.rate_mode")
            .value(value_rate_2),
        CatalogEntry::new(CommandId::FocuserSelectRate, parse_select_rate_3)
            .store("focuser.rate_mode")
            .value(value_rate_3),
        CatalogEntry::new(CommandId::FocuserSelectRate, parse_select_rate_4)
            .store("focuser.rate_mode")
            .value(value_rate_4),
        CatalogEntry::new(CommandId::QueryFocuserBusyStatus, parse_query_busy)
            .load("focuser.busy"),
    ]
}
