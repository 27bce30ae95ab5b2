//! Sync commands: `CL`, `CM`.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::FieldMap;

fn parse_sync_selenographic(input: &str) -> Option<FieldMap> {
    full_match(tag("CL"), input).map(|_| FieldMap::new())
}

fn parse_sync_database(input: &str) -> Option<FieldMap> {
    full_match(tag("CM"), input).map(|_| FieldMap::new())
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(CommandId::SyncSelenographic, parse_sync_selenographic),
        CatalogEntry::new(CommandId::SyncDatabase, parse_sync_database),
    ]
}
