//! Renders a [`Response`] to the bytes that go out on the wire.

use super::{Response, ResponseKind};
use crate::error::FormatError;
use crate::field::FieldMap;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn int(fields: &FieldMap, key: &str) -> i64 {
    fields.get(key).map(|f| f.as_i64()).unwrap_or(0)
}

fn float(fields: &FieldMap, key: &str) -> f64 {
    fields.get(key).map(|f| f.as_f64()).unwrap_or(0.0)
}

fn boolean(fields: &FieldMap, key: &str) -> bool {
    fields.get(key).map(|f| f.as_bool()).unwrap_or(false)
}

fn text(fields: &FieldMap, key: &str) -> &str {
    fields.get(key).map(|f| f.as_str()).unwrap_or("")
}

fn format_dms(fields: &FieldMap) -> String {
    let degrees = int(fields, "degrees");
    let minutes = int(fields, "minutes");
    let seconds = int(fields, "seconds");
    let negative = if degrees != 0 {
        degrees < 0
    } else if minutes != 0 {
        minutes < 0
    } else {
        seconds < 0
    };
    let sign = if negative { '-' } else { '+' };
    let high_precision = boolean(fields, "high_precision");
    if high_precision {
        format!(
            "{sign}{:02}*{:02}'{:02}#",
            degrees.abs(),
            minutes.abs(),
            seconds.abs()
        )
    } else {
        format!("{sign}{:02}*{:02}#", degrees.abs(), minutes.abs())
    }
}

fn format_hms(fields: &FieldMap) -> String {
    let hours = int(fields, "hours");
    let minutes = int(fields, "minutes");
    let seconds = int(fields, "seconds");
    if boolean(fields, "high_precision") {
        format!("+{hours:02}:{minutes:02}:{seconds:02}#")
    } else {
        let fractional_minutes = minutes as f64 + seconds as f64 / 60.0;
        format!("+{hours:02}:{fractional_minutes:04.1}#")
    }
}

fn format_signed_float(fields: &FieldMap) -> String {
    let value = float(fields, "value");
    let sign = if value < 0.0 { '-' } else { '+' };
    format!("{sign}{:04.1}", value.abs())
}

impl Response {
    /// Renders this response to bytes. The only failures are domain range
    /// violations (`DistanceBars` outside `0..=6`, an alignment star
    /// count outside `0..=3`); every other shape always formats.
    pub fn format(&self) -> Result<Vec<u8>, FormatError> {
        let fields = &self.fields;
        let bytes = match self.kind {
            ResponseKind::Empty => Vec::new(),
            ResponseKind::Boolean {
                invert,
                true_override,
            } => {
                // Unset defaults to success: every `Boolean`-shaped
                // command here is an acknowledgement, and a simulator
                // with no reason to refuse should not refuse by default.
                let value = fields.get("value").map(|f| f.as_bool()).unwrap_or(true) ^ invert;
                if value {
                    true_override.unwrap_or("1").as_bytes().to_vec()
                } else {
                    b"0".to_vec()
                }
            }
            ResponseKind::Ack => {
                let letter = text(fields, "value").chars().next().unwrap_or('A');
                vec![letter as u8]
            }
            ResponseKind::SignedDms => format_dms(fields).into_bytes(),
            ResponseKind::Hms => format_hms(fields).into_bytes(),
            ResponseKind::SignedFloat => format!("{}#", format_signed_float(fields)).into_bytes(),
            ResponseKind::Date => format!(
                "{:02}/{:02}/{:02}#",
                int(fields, "month"),
                int(fields, "day"),
                int(fields, "year").rem_euclid(100)
            )
            .into_bytes(),
            ResponseKind::LocalTime => format!(
                "{:02}:{:02}:{:02}#",
                int(fields, "hours"),
                int(fields, "minutes"),
                int(fields, "seconds")
            )
            .into_bytes(),
            ResponseKind::FirmwareDate => {
                let month_idx = int(fields, "month").clamp(1, 12) as usize - 1;
                format!(
                    "{} {:02} {}#",
                    MONTH_NAMES[month_idx],
                    int(fields, "day"),
                    int(fields, "year")
                )
                .into_bytes()
            }
            ResponseKind::FirmwareNumber => {
                format!("{}.{}#", int(fields, "major"), int(fields, "minor")).into_bytes()
            }
            ResponseKind::DistanceBars => {
                let value = int(fields, "value");
                if !(0..=6).contains(&value) {
                    return Err(FormatError::DistanceBarsOutOfRange(value));
                }
                let mut s = "|".repeat(value as usize);
                s.push('#');
                s.into_bytes()
            }
            ResponseKind::AlignmentStatus => {
                let star_count = int(fields, "star_count");
                if !(0..=3).contains(&star_count) {
                    return Err(FormatError::AlignmentStarCountOutOfRange(star_count));
                }
                let mount = text(fields, "mount").chars().next().unwrap_or('A');
                let tracking = text(fields, "tracking").chars().next().unwrap_or('T');
                format!("{mount}{tracking}{star_count}#").into_bytes()
            }
            ResponseKind::ClockFormat => {
                if boolean(fields, "value") {
                    b"24#".to_vec()
                } else {
                    b"12#".to_vec()
                }
            }
            ResponseKind::Text => format!("{}#", text(fields, "value")).into_bytes(),
            ResponseKind::Number => format!("{}#", int(fields, "value")).into_bytes(),
            ResponseKind::SlewPossibility => {
                let possible = fields.get("possible").map(|f| f.as_bool()).unwrap_or(true);
                if possible {
                    b"0".to_vec()
                } else {
                    let reason = {
                        let r = text(fields, "reason");
                        if r.is_empty() {
                            "Below horizon"
                        } else {
                            r
                        }
                    };
                    format!("1{reason}#").into_bytes()
                }
            }
        };
        Ok(bytes)
    }
}
