//! Ordered shape tables for union-typed fields.
//!
//! A union field lists its candidate shapes in priority order. Decoding picks
//! the first candidate whose predicate accepts the incoming value and commits
//! to it: a failure inside the selected candidate is reported as-is rather
//! than retried against later candidates, so the outcome never depends on
//! how far a wrong guess got before failing.

use serde_json::Value;
use tracing::{debug, trace};

use super::JsonKind;
use crate::ModelError;

/// Structural predicate over a JSON value.
pub type ShapePredicate = fn(&Value) -> bool;

/// Constructor run once a candidate is selected.
pub type ShapeDecoder<T> = fn(&Value) -> Result<T, ModelError>;

/// One (predicate, constructor) pair of a [`ShapeTable`].
pub struct Candidate<T> {
    label: &'static str,
    accepts: ShapePredicate,
    decode: ShapeDecoder<T>,
}

impl<T> Candidate<T> {
    pub const fn new(
        label: &'static str,
        accepts: ShapePredicate,
        decode: ShapeDecoder<T>,
    ) -> Self {
        Self {
            label,
            accepts,
            decode,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn accepts(&self, value: &Value) -> bool {
        (self.accepts)(value)
    }

    pub fn decode(&self, value: &Value) -> Result<T, ModelError> {
        (self.decode)(value)
    }
}

/// Candidate shapes of a union field, in declaration order.
pub struct ShapeTable<'a, T> {
    candidates: &'a [Candidate<T>],
}

impl<'a, T> ShapeTable<'a, T> {
    pub const fn new(candidates: &'a [Candidate<T>]) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &'a [Candidate<T>] {
        self.candidates
    }

    /// The first candidate accepting `value`. Earlier declarations win ties.
    pub fn select(&self, value: &Value) -> Option<&'a Candidate<T>> {
        self.candidates.iter().find(|c| c.accepts(value))
    }

    pub fn accepts(&self, value: &Value) -> bool {
        self.select(value).is_some()
    }

    pub fn decode(&self, value: &Value) -> Result<T, ModelError> {
        let kind = JsonKind::of(value);
        match self.select(value) {
            Some(candidate) => {
                trace!(candidate = candidate.label, %kind, "selected union candidate");
                candidate.decode(value)
            }
            None => {
                debug!(
                    %kind,
                    candidates = self.candidates.len(),
                    "no union candidate accepts value"
                );
                Err(ModelError::unrecognized_shape(kind))
            }
        }
    }
}
