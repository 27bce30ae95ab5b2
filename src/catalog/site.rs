//! Site selection: `W<n>`.

use nom::bytes::complete::tag;
use nom::sequence::preceded;

use super::common::{full_match, preset_idx};
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::{Field, FieldMap};

fn parse_select_site(input: &str) -> Option<FieldMap> {
    let idx = full_match(preceded(tag("W"), preset_idx), input)?;
    Some(FieldMap::from([("idx".to_string(), Field::Int(idx))]))
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![CatalogEntry::new(CommandId::SelectSite, parse_select_site).store("site.selected_idx")]
}
