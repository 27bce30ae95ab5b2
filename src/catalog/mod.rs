//! The Command Catalog: a declarative, ordered table mapping wire payloads
//! to [`CommandId`]s, plus each command's store binding.
//!
//! This is the system's ground truth (§4.1). Each family of commands
//! (alignment, focuser, getters, ...) lives in its own module, mirroring
//! the teacher crate's one-module-per-grammar-section layout. A
//! [`CatalogEntry`]'s `parse` function is a small nom-based parser that
//! either fully consumes a payload and returns its fields, or declines.

pub mod common;

mod alignment;
mod anti_backlash;
mod distance;
mod focuser;
mod getters;
mod halt;
mod home;
mod movement;
mod precision;
mod reticle;
mod setters;
mod site;
mod slew_rate;
mod sync;
mod tracking;

use once_cell::sync::Lazy;

use crate::command::CommandId;
use crate::field::FieldMap;

/// One row of the Command Catalog.
#[derive(Debug)]
pub struct CatalogEntry {
    pub id: CommandId,
    pub parse: fn(&str) -> Option<FieldMap>,
    pub store_path: Option<&'static str>,
    pub load_path: Option<&'static str>,
    pub store_value: Option<fn(&FieldMap) -> FieldMap>,
    /// Marks a no-argument command whose store effect is to flip the
    /// existing `bool` at its store path's `value` field, rather than
    /// overwrite it with a fixed or parsed one. Read by `Store::commit`.
    pub toggle: bool,
}

impl CatalogEntry {
    const fn new(id: CommandId, parse: fn(&str) -> Option<FieldMap>) -> Self {
        Self {
            id,
            parse,
            store_path: None,
            load_path: None,
            store_value: None,
            toggle: false,
        }
    }

    const fn store(mut self, path: &'static str) -> Self {
        self.store_path = Some(path);
        self
    }

    const fn load(mut self, path: &'static str) -> Self {
        self.load_path = Some(path);
        self
    }

    const fn value(mut self, make: fn(&FieldMap) -> FieldMap) -> Self {
        self.store_value = Some(make);
        self
    }

    const fn toggle(mut self) -> Self {
        self.toggle = true;
        self
    }
}

/// The full catalog, in decode-priority order: entries earlier in this
/// slice are tried first, so more specific prefixes (`GVD`, `STA+`) must be
/// declared before the less specific ones they could be confused with
/// (`G*`, `ST+`). Built once and shared; the catalog is read-only for the
/// life of the process.
static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    let mut entries = Vec::new();
    entries.extend(alignment::entries());
    entries.extend(anti_backlash::entries());
    entries.extend(reticle::entries());
    entries.extend(sync::entries());
    entries.extend(distance::entries());
    entries.extend(focuser::entries());
    entries.extend(home::entries());
    entries.extend(movement::entries());
    entries.extend(precision::entries());
    entries.extend(halt::entries());
    entries.extend(slew_rate::entries());
    entries.extend(setters::entries());
    entries.extend(tracking::entries());
    entries.extend(site::entries());
    // Getters are tried last: most setter/action mnemonics are
    // unambiguous two- or three-letter prefixes, but the `G*` family is
    // large enough that ordering within it (GVD before a bare G-getter
    // that could shadow it) matters more than its position relative to
    // the other families.
    entries.extend(getters::entries());
    entries
});

/// The full catalog, in decode-priority order. See [`CATALOG`].
pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Looks up a catalog entry by [`CommandId`].
///
/// `Unknown` and the unframed `Ack`/`Eot` commands have no catalog row
/// (they are recognized directly by the frame parser, not by payload
/// matching), so this returns `None` for them.
pub fn entry_for(id: CommandId) -> Option<&'static CatalogEntry> {
    catalog().iter().find(|e| e.id == id)
}

/// A self-check issue surfaced by [`self_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfCheckIssue {
    UnmappedCommand(CommandId),
    BadDefaultResponse(CommandId, String),
}

/// Validates that every catalog command has a mapped response, and that
/// every mapped response's built-in defaults format without error (§4.7).
///
/// Run once at crate-consumer startup (or, as here, from the crate's own
/// test suite) rather than discovered piecemeal at runtime.
pub fn self_check() -> Result<(), Vec<SelfCheckIssue>> {
    use crate::response;

    let mut issues = Vec::new();

    for entry in catalog() {
        if entry.id == CommandId::Unknown {
            continue;
        }
        match response::constructor_for(entry.id) {
            None => issues.push(SelfCheckIssue::UnmappedCommand(entry.id)),
            Some(kind) => {
                let response = response::Response::new(kind, FieldMap::new());
                if let Err(e) = response.format() {
                    issues.push(SelfCheckIssue::BadDefaultResponse(entry.id, e.to_string()));
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
