//! Codec impls for the tagged unions.
//!
//! The candidate order of a generic union is its type-parameter order:
//! `Either<L, R>` tries `L` then `R`, `Either3<A, B, C>` tries `A`, `B`, `C`.

use std::any::type_name;

use lsp_model_either::{Either, Either3};
use serde_json::Value;

use super::{Candidate, FromJson, ShapeTable, ToJson};
use crate::ModelError;

fn decode_left<L: FromJson, R>(value: &Value) -> Result<Either<L, R>, ModelError> {
    L::from_json(value).map(Either::Left)
}

fn decode_right<L, R: FromJson>(value: &Value) -> Result<Either<L, R>, ModelError> {
    R::from_json(value).map(Either::Right)
}

impl<L: FromJson, R: FromJson> FromJson for Either<L, R> {
    fn accepts(value: &Value) -> bool {
        L::accepts(value) || R::accepts(value)
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let candidates = [
            Candidate::new(type_name::<L>(), L::accepts, decode_left::<L, R>),
            Candidate::new(type_name::<R>(), R::accepts, decode_right::<L, R>),
        ];
        ShapeTable::new(&candidates).decode(value)
    }
}

impl<L: ToJson, R: ToJson> ToJson for Either<L, R> {
    fn to_json(&self) -> Value {
        self.map(ToJson::to_json, ToJson::to_json)
    }
}

fn decode_first<A: FromJson, B, C>(value: &Value) -> Result<Either3<A, B, C>, ModelError> {
    A::from_json(value).map(Either3::for_first)
}

fn decode_second<A, B: FromJson, C>(value: &Value) -> Result<Either3<A, B, C>, ModelError> {
    B::from_json(value).map(Either3::for_second)
}

fn decode_third<A, B, C: FromJson>(value: &Value) -> Result<Either3<A, B, C>, ModelError> {
    C::from_json(value).map(Either3::for_third)
}

impl<A: FromJson, B: FromJson, C: FromJson> FromJson for Either3<A, B, C> {
    fn accepts(value: &Value) -> bool {
        A::accepts(value) || B::accepts(value) || C::accepts(value)
    }

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let candidates = [
            Candidate::new(type_name::<A>(), A::accepts, decode_first::<A, B, C>),
            Candidate::new(type_name::<B>(), B::accepts, decode_second::<A, B, C>),
            Candidate::new(type_name::<C>(), C::accepts, decode_third::<A, B, C>),
        ];
        ShapeTable::new(&candidates).decode(value)
    }
}

impl<A: ToJson, B: ToJson, C: ToJson> ToJson for Either3<A, B, C> {
    fn to_json(&self) -> Value {
        self.map(ToJson::to_json, ToJson::to_json, ToJson::to_json)
    }
}
