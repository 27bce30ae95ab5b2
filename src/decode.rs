//! The Command Decoder (§4.3): matches a framed payload against the
//! Command Catalog.

use crate::catalog;
use crate::command::Command;

/// Tries every catalog entry's parser in declaration order; the first
/// full match wins. Falls back to [`crate::command::CommandId::Unknown`]
/// carrying the raw payload, never an error — an unrecognized payload is
/// expected traffic (old firmware, a command this build doesn't model),
/// not a decode failure.
pub fn decode(payload: &str) -> Command {
    for entry in catalog::catalog() {
        if let Some(fields) = (entry.parse)(payload) {
            log::trace!("decoded {payload:?} as {:?}", entry.id);
            return Command::new(entry.id, fields);
        }
    }
    log::debug!("no catalog entry matched payload {payload:?}");
    Command::unknown(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandId;

    #[test]
    fn decodes_a_known_payload() {
        let command = decode("GA");
        assert_eq!(command.id, CommandId::GetAltitude);
    }

    #[test]
    fn falls_back_to_unknown() {
        let command = decode("not a real command");
        assert_eq!(command.id, CommandId::Unknown);
        assert_eq!(command.fields.get("value").unwrap().as_str(), "not a real command");
    }

    #[test]
    fn more_specific_prefix_wins_over_shorter_one() {
        // `GVD` (firmware date) must not be shadowed by a hypothetical
        // bare `G` getter; this exercises catalog declaration order.
        let command = decode("GVD");
        assert_eq!(command.id, CommandId::GetFirmwareDate);
    }
}
