//! Property tests for the tagged-union exclusivity and equality laws.

use lsp_model_either::{Either, Either3, EitherError, Side};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i64>> {
    prop_oneof![
        any::<String>().prop_map(Either::for_left),
        any::<i64>().prop_map(Either::for_right),
    ]
}

proptest! {
    #[test]
    fn exactly_one_side_is_occupied(e in either_strategy()) {
        prop_assert_ne!(e.is_left(), e.is_right());
        match e.side() {
            Side::Left => {
                prop_assert!(e.get_left().is_ok());
                let is_wrong_variant =
                    matches!(e.get_right(), Err(EitherError::WrongVariant { .. }));
                prop_assert!(is_wrong_variant);
            }
            Side::Right => {
                prop_assert!(e.get_right().is_ok());
                let is_wrong_variant =
                    matches!(e.get_left(), Err(EitherError::WrongVariant { .. }));
                prop_assert!(is_wrong_variant);
            }
        }
    }

    #[test]
    fn equal_only_on_same_side(a in either_strategy(), b in either_strategy()) {
        if a == b {
            prop_assert_eq!(a.side(), b.side());
        }
        if a.side() != b.side() {
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn flip_twice_is_identity(e in either_strategy()) {
        prop_assert_eq!(e.clone().flip().flip(), e);
    }

    #[test]
    fn either3_has_one_occupant(n in 0u8..3, v in any::<i32>()) {
        let e: Either3<i32, i32, i32> = match n {
            0 => Either3::for_first(v),
            1 => Either3::for_second(v),
            _ => Either3::for_third(v),
        };
        let count = [e.is_first(), e.is_second(), e.is_third()]
            .iter()
            .filter(|f| **f)
            .count();
        prop_assert_eq!(count, 1);
        prop_assert_eq!(e.map(|x| *x, |x| *x, |x| *x), v);
    }
}
