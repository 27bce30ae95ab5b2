//! Distance bars: `D`.
//!
//! No client command ever writes `mount.slew.distance_bars`; it models
//! server-side slew progress that only the simulator's own driving code
//! (not the wire protocol) would mutate via the `Store` directly. The
//! catalog entry therefore declares only a `load_path`.

use nom::bytes::complete::tag;

use super::common::full_match;
use super::CatalogEntry;
use crate::command::CommandId;
use crate::field::FieldMap;

fn parse_distance_bars(input: &str) -> Option<FieldMap> {
    full_match(tag("D"), input).map(|_| FieldMap::new())
}

pub fn entries() -> Vec<CatalogEntry> {
    vec![CatalogEntry::new(CommandId::DistanceBars, parse_distance_bars)
        .load("mount.slew.distance_bars")]
}
