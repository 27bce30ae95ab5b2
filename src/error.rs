//! Crate-wide error types.
//!
//! Split the way the teacher crate splits `DecodeError` from validation
//! errors: one enum for "the bytes on the wire don't parse", a separate one
//! for "a formatter was asked to render something outside its domain", and
//! a third for store-level path resolution failures.

use thiserror::Error;

/// Decoding-level failure.
///
/// Framing never fails (malformed frames are silently dropped per the
/// frame parser's own rules), so this only covers command decoding, which
/// in practice never fails either: unmatched payloads become
/// [`crate::command::CommandId::Unknown`] rather than an error. The type
/// exists so `Command::decode` has an honest `Result` signature instead of
/// an `Infallible`-flavored panic path, matching the teacher's preference
/// for `?`-propagated `Result`s over unwrap-and-hope.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DecodeError {
    #[error("payload exceeds maximum frame length")]
    PayloadTooLong,
}

/// Response-formatting failure: a response was asked to render a value
/// outside the range its wire shape can represent.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    #[error("distance bars value {0} is out of range 0..=6")]
    DistanceBarsOutOfRange(i64),

    #[error("alignment star count {0} is out of range 0..=3")]
    AlignmentStarCountOutOfRange(i64),
}

/// Store-level failure: a templated path referenced a field the command
/// didn't carry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StoreError {
    #[error("path template {template:?} has an unresolved placeholder")]
    UnresolvedPath { template: String },
}
