//! The path-addressed State Store (§4.4): the only mutable shared state in
//! the system, linking setter commands to the getters and responses that
//! read back what they set.

use std::collections::HashMap;

use crate::catalog;
use crate::command::Command;
use crate::error::StoreError;
use crate::field::{Field, FieldMap};
use crate::response::Response;

/// Runtime-tunable store behavior. Currently just whether high-precision
/// formatting is active by default; `Store::commit` of `HighPrecisionToggle`
/// flips it at runtime regardless of this default.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    pub high_precision_default: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            high_precision_default: true,
        }
    }
}

/// A fixed per-command default seeded into the store at construction,
/// matching the reference implementation's two-pass seeding (command
/// defaults, then response defaults).
struct Seed {
    path: &'static str,
    fields: &'static [(&'static str, SeedValue)],
}

#[derive(Clone, Copy)]
enum SeedValue {
    Int(i64),
    Float(f64),
    Str(&'static str),
    Bool(bool),
}

impl From<SeedValue> for Field {
    fn from(v: SeedValue) -> Self {
        match v {
            SeedValue::Int(i) => Field::Int(i),
            SeedValue::Float(f) => Field::Float(f),
            SeedValue::Str(s) => Field::Str(s.to_string()),
            SeedValue::Bool(b) => Field::Bool(b),
        }
    }
}

const SEEDS: &[Seed] = &[
    Seed {
        path: "mount.tracking.rate",
        fields: &[("value", SeedValue::Float(60.0))],
    },
    Seed {
        path: "site.clock_format_24h",
        fields: &[("value", SeedValue::Bool(true))],
    },
    Seed {
        path: "site.names.site_1",
        fields: &[("value", SeedValue::Str("SI1"))],
    },
    Seed {
        path: "site.names.site_2",
        fields: &[("value", SeedValue::Str("SI2"))],
    },
    Seed {
        path: "site.names.site_3",
        fields: &[("value", SeedValue::Str("SI3"))],
    },
    Seed {
        path: "site.names.site_4",
        fields: &[("value", SeedValue::Str("SI4"))],
    },
    Seed {
        path: "mount.limits.high",
        fields: &[("value", SeedValue::Int(110))],
    },
    Seed {
        path: "mount.limits.low",
        fields: &[("value", SeedValue::Int(5))],
    },
    Seed {
        path: "find.object_selection_string",
        fields: &[("value", SeedValue::Str("GPDCO"))],
    },
    Seed {
        path: "find.minimum_quality",
        fields: &[("value", SeedValue::Str("GD"))],
    },
    Seed {
        path: "firmware.product_name",
        fields: &[("value", SeedValue::Str("LX200 Protocol Simulator"))],
    },
    Seed {
        path: "firmware.number",
        fields: &[("major", SeedValue::Int(1)), ("minor", SeedValue::Int(0))],
    },
    Seed {
        path: "firmware.date",
        fields: &[
            ("month", SeedValue::Int(1)),
            ("day", SeedValue::Int(1)),
            ("year", SeedValue::Int(2024)),
        ],
    },
];

/// Path-addressed mutable state: `HashMap<path, field-map>` (§3). Every
/// path any catalog entry references exists from construction with at
/// least an empty field-map; fixed command defaults and `store_value`
/// payloads are layered on top afterward.
#[derive(Debug)]
pub struct Store {
    cells: HashMap<String, FieldMap>,
    config: StoreConfig,
}

impl Store {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let mut cells = HashMap::new();

        for entry in catalog::catalog() {
            if let Some(path) = entry.store_path {
                cells.entry(path.to_string()).or_insert_with(FieldMap::new);
            }
            if let Some(path) = entry.load_path {
                cells.entry(path.to_string()).or_insert_with(FieldMap::new);
            }
        }

        for seed in SEEDS {
            let cell = cells.entry(seed.path.to_string()).or_insert_with(FieldMap::new);
            for (key, value) in seed.fields {
                cell.insert(key.to_string(), Field::from(*value));
            }
        }

        cells
            .entry("mount.high_precision".to_string())
            .or_insert_with(FieldMap::new)
            .insert("value".to_string(), Field::Bool(config.high_precision_default));

        Self { cells, config }
    }

    /// Writes a command's store-bound fields into its resolved store path.
    /// No-op if the command has no store binding. A declared `store_value`
    /// is applied after the parsed fields, so it always wins. A catalog
    /// entry marked `toggle` flips the existing `value` bool instead of
    /// overwriting it, since the command itself carries no field saying
    /// which state to go to.
    pub fn commit(&mut self, command: &Command) -> Result<(), StoreError> {
        let Some(path) = command.store_path() else {
            return Ok(());
        };
        let path = path.into_owned();
        let cell = self.cells.entry(path).or_insert_with(FieldMap::new);

        if command.is_toggle() {
            let current = matches!(cell.get("value"), Some(Field::Bool(true)));
            cell.insert("value".to_string(), Field::Bool(!current));
            return Ok(());
        }

        for (key, value) in command.store_fields() {
            cell.insert(key, value);
        }
        Ok(())
    }

    /// Copies the fields at a command's resolved load path (falling back
    /// to its store path) onto a response before formatting. Also always
    /// overlays the global high-precision flag, which `SignedDms`/`Hms`
    /// formatters read regardless of the command that produced them.
    pub fn fill(&self, response: &mut Response, command: &Command) -> Result<(), StoreError> {
        if let Some(path) = command.load_path() {
            if let Some(cell) = self.cells.get(path.as_ref()) {
                for (key, value) in cell {
                    response.fields.insert(key.clone(), value.clone());
                }
            }
        }

        if let Some(precision) = self.cells.get("mount.high_precision") {
            if let Some(value) = precision.get("value") {
                response
                    .fields
                    .insert("high_precision".to_string(), value.clone());
            }
        }

        Ok(())
    }

    /// Directly mutates a store path, for transports (the Axum demo) or
    /// test setup that need to seed state outside the command flow.
    pub fn set(&mut self, path: &str, fields: FieldMap) {
        self.cells.insert(path.to_string(), fields);
    }

    pub fn get(&self, path: &str) -> Option<&FieldMap> {
        self.cells.get(path)
    }

    /// A snapshot of every path currently tracked, for the read-only JSON
    /// demo (§9).
    pub fn snapshot(&self) -> &HashMap<String, FieldMap> {
        &self.cells
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandId;

    #[test]
    fn commit_then_fill_round_trips_target_right_ascension() {
        let mut store = Store::new();
        let mut fields = FieldMap::new();
        fields.insert("hours".into(), Field::Int(12));
        fields.insert("minutes".into(), Field::Int(34));
        fields.insert("seconds".into(), Field::Int(56));
        let set_command = Command::new(CommandId::SetTargetRightAscension, fields);
        store.commit(&set_command).unwrap();

        let get_command = Command::new(CommandId::GetSelectedObjectRightAscension, FieldMap::new());
        let mut response = Response::new(crate::response::ResponseKind::Hms, FieldMap::new());
        store.fill(&mut response, &get_command).unwrap();

        assert_eq!(response.fields.get("hours"), Some(&Field::Int(12)));
        assert_eq!(response.fields.get("minutes"), Some(&Field::Int(34)));
        assert_eq!(response.fields.get("seconds"), Some(&Field::Int(56)));
    }

    #[test]
    fn commands_with_no_store_binding_are_a_no_op() {
        let mut store = Store::new();
        let command = Command::new(CommandId::FocuserMoveIn, FieldMap::new());
        assert!(store.commit(&command).is_ok());
    }

    #[test]
    fn tracking_rate_is_seeded_to_sixty() {
        let store = Store::new();
        let cell = store.get("mount.tracking.rate").unwrap();
        assert_eq!(cell.get("value"), Some(&Field::Float(60.0)));
    }

    #[test]
    fn high_precision_toggle_flips_on_each_commit() {
        let mut store = Store::new();
        let toggle = Command::new(CommandId::HighPrecisionToggle, FieldMap::new());

        assert_eq!(
            store.get("mount.high_precision").unwrap().get("value"),
            Some(&Field::Bool(true))
        );
        store.commit(&toggle).unwrap();
        assert_eq!(
            store.get("mount.high_precision").unwrap().get("value"),
            Some(&Field::Bool(false))
        );
        store.commit(&toggle).unwrap();
        assert_eq!(
            store.get("mount.high_precision").unwrap().get("value"),
            Some(&Field::Bool(true))
        );
    }
}
