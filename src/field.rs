//! The value type carried by parsed commands and stored in the [`crate::store::Store`].
//!
//! LX200 payloads only ever produce four shapes of data: signed integers,
//! floats, short strings, and booleans (for enumerated setters). Rather than
//! giving every command its own bespoke struct, the catalog represents a
//! command's parsed arguments (and a store cell's remembered state) as a
//! small dynamically-keyed map, mirroring the `attr`-based `serialize()` /
//! `setattr` pattern of the reference Python implementation.

use std::collections::BTreeMap;
use std::fmt;

/// A single parsed or stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Field {
    pub fn as_i64(&self) -> i64 {
        match self {
            Field::Int(v) => *v,
            Field::Float(v) => *v as i64,
            Field::Bool(v) => *v as i64,
            Field::Str(_) => 0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Field::Int(v) => *v as f64,
            Field::Float(v) => *v,
            Field::Bool(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
            Field::Str(_) => 0.0,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Field::Bool(v) => *v,
            Field::Int(v) => *v != 0,
            Field::Float(v) => *v != 0.0,
            Field::Str(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Field::Str(s) => s.as_str(),
            _ => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(v) => write!(f, "{v}"),
            Field::Float(v) => write!(f, "{v}"),
            Field::Str(v) => write!(f, "{v}"),
            Field::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Int(v)
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Float(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Field::Str(v.to_string())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Field::Str(v)
    }
}

impl From<bool> for Field {
    fn from(v: bool) -> Self {
        Field::Bool(v)
    }
}

/// A named bag of parsed fields: a command's arguments, or a store cell's
/// remembered state.
///
/// `BTreeMap` keeps iteration order stable, which matters for deterministic
/// `fill` semantics and for tests that serialize a whole cell.
pub type FieldMap = BTreeMap<String, Field>;

/// Substitutes `{name}` placeholders in a path template from a field-map,
/// e.g. `focuser.presets.name_{idx}` with `idx = 3` becomes
/// `focuser.presets.name_3`.
///
/// Returns `None` if a placeholder has no matching field, which the caller
/// (`Store::commit`/`Store::fill`) treats as a resolution error rather than
/// silently using the literal template text.
pub fn resolve_path(template: &str, fields: &FieldMap) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(end) = rest[start..].find('}') else {
            // Unbalanced brace: not a placeholder, copy the rest verbatim.
            out.push_str(rest);
            return Some(out);
        };
        let end = start + end;

        out.push_str(&rest[..start]);
        let name = &rest[start + 1..end];
        let value = fields.get(name)?;
        out.push_str(&value.to_string());

        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_single_placeholder() {
        let mut fields = FieldMap::new();
        fields.insert("idx".into(), Field::Int(3));
        assert_eq!(
            resolve_path("focuser.presets.name_{idx}", &fields).as_deref(),
            Some("focuser.presets.name_3")
        );
    }

    #[test]
    fn path_without_placeholder_is_passthrough() {
        let fields = FieldMap::new();
        assert_eq!(
            resolve_path("mount.target.right_ascension", &fields).as_deref(),
            Some("mount.target.right_ascension")
        );
    }

    #[test]
    fn unresolved_placeholder_is_none() {
        let fields = FieldMap::new();
        assert_eq!(resolve_path("focuser.presets.name_{idx}", &fields), None);
    }
}
