//! Algebraic laws for `RemoteData`, checked against generated values.
use proptest::prelude::*;
use remotedata::{MappableFrame, RemoteData};
use std::fmt::Debug;

/// Generate all four variants, with payloads drawn from `error` and `data`.
pub fn arb_remote_data<E, A>(
    error: impl Strategy<Value = E>,
    data: impl Strategy<Value = A>,
) -> impl Strategy<Value = RemoteData<E, A>>
where
    E: Clone + Debug,
    A: Clone + Debug,
{
    prop_oneof![
        Just(RemoteData::NotAsked),
        Just(RemoteData::Loading),
        data.prop_map(RemoteData::Success),
        error.prop_map(RemoteData::Failure),
    ]
}

pub fn arb_int_remote_data() -> impl Strategy<Value = RemoteData<String, i32>> {
    arb_remote_data("[a-z]{1,8}", any::<i32>())
}

/// `map_frame(x, id) == x`
pub fn identity_law<F, A>(input: F::Frame<A>) -> bool
where
    F: MappableFrame,
    F::Frame<A>: Clone + PartialEq,
{
    F::map_frame(input.clone(), |a| a) == input
}

/// mapping `f` then `g` equals mapping their composition once
pub fn composition_law<F, A, B, C>(
    input: F::Frame<A>,
    f: impl Fn(A) -> B,
    g: impl Fn(B) -> C,
) -> bool
where
    F: MappableFrame,
    F::Frame<A>: Clone,
    F::Frame<C>: PartialEq,
{
    let stepwise = F::map_frame(F::map_frame(input.clone(), &f), &g);
    let fused = F::map_frame(input, |a| g(f(a)));
    stepwise == fused
}

// reaches every variant depending on the input, so chained laws see mixed states
pub fn classify(x: i32) -> RemoteData<String, i32> {
    match x.rem_euclid(4) {
        0 => RemoteData::Success(x.wrapping_mul(2)),
        1 => RemoteData::Failure(format!("{} rejected", x)),
        2 => RemoteData::Loading,
        _ => RemoteData::NotAsked,
    }
}

pub fn halve_if_even(x: i32) -> RemoteData<String, i32> {
    if x % 2 == 0 {
        RemoteData::Success(x / 2)
    } else {
        RemoteData::Failure(format!("{} is odd", x))
    }
}

#[cfg(test)]
proptest! {
    #[test]
    fn map_identity(r in arb_int_remote_data()) {
        use remotedata::PartiallyApplied;

        prop_assert!(identity_law::<RemoteData<String, PartiallyApplied>, _>(r.clone()));
        prop_assert_eq!(r.clone().map(|x| x), r);
    }

    #[test]
    fn map_composition(r in arb_int_remote_data()) {
        use remotedata::PartiallyApplied;

        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| format!("<{}>", x);

        prop_assert!(composition_law::<RemoteData<String, PartiallyApplied>, _, _, _>(r.clone(), f, g));
        prop_assert_eq!(r.clone().map(f).map(g), r.map(|x| g(f(x))));
    }

    #[test]
    fn map_err_identity_and_composition(r in arb_int_remote_data()) {
        let f = |e: String| e.len();
        let g = |n: usize| n * 10;

        prop_assert_eq!(r.clone().map_err(|e| e), r.clone());
        prop_assert_eq!(r.clone().map_err(f).map_err(g), r.clone().map_err(|e| g(f(e))));

        // never touches the other variants
        if !r.is_failure() {
            prop_assert_eq!(r.clone().map_err(f).get_or_none(), r.get_or_none());
        }
    }

    #[test]
    fn map_and_map_err_agree_with_map_both(r in arb_int_remote_data()) {
        let f = |x: i32| x.wrapping_sub(1);
        let h = |e: String| e.to_uppercase();

        prop_assert_eq!(r.clone().map(f), r.clone().map_both(|e| e, f));
        prop_assert_eq!(r.clone().map_err(h), r.clone().map_both(h, |x| x));
        prop_assert_eq!(r.clone().map(f).map_err(h), r.map_both(h, f));
    }

    #[test]
    fn flat_map_left_identity(x in any::<i32>()) {
        let success: RemoteData<String, i32> = RemoteData::Success(x);
        prop_assert_eq!(success.flat_map(classify), classify(x));
    }

    #[test]
    fn flat_map_right_identity(r in arb_int_remote_data()) {
        prop_assert_eq!(r.clone().flat_map(RemoteData::Success), r);
    }

    #[test]
    fn flat_map_associativity(r in arb_int_remote_data()) {
        let nested = r.clone().flat_map(classify).flat_map(halve_if_even);
        let inner = r.flat_map(|v| classify(v).flat_map(halve_if_even));
        prop_assert_eq!(nested, inner);
    }

    #[test]
    fn and_map_identity(r in arb_int_remote_data()) {
        let id: RemoteData<String, _> = RemoteData::Success(|x: i32| x);
        prop_assert_eq!(id.and_map(r.clone()), r);
    }

    #[test]
    fn and_map_homomorphism(x in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(7);
        let applied: RemoteData<String, i32> = RemoteData::Success(f).and_map(RemoteData::Success(x));
        prop_assert_eq!(applied, RemoteData::Success(f(x)));
    }

    #[test]
    fn and_map_left_precedence(left in arb_int_remote_data(), right in arb_int_remote_data()) {
        let expected = match left.clone() {
            RemoteData::Success(k) => right.clone().map(|x| x.wrapping_add(k)),
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::NotAsked => RemoteData::NotAsked,
        };

        let adder = left.map(|k| move |x: i32| x.wrapping_add(k));
        prop_assert_eq!(adder.and_map(right), expected);
    }

    #[test]
    fn map2_matches_and_map(left in arb_int_remote_data(), right in arb_int_remote_data()) {
        let via_map2 = RemoteData::map2(left.clone(), right.clone(), |a, b| (a, b));
        let via_and_map = left.map(|a| move |b: i32| (a, b)).and_map(right);
        prop_assert_eq!(via_map2, via_and_map);
    }

    #[test]
    fn get_or_else_with_invocations(r in arb_int_remote_data(), fallback in any::<i32>()) {
        let mut calls = 0;
        let got = r.clone().get_or_else_with(|| {
            calls += 1;
            fallback
        });

        match r {
            RemoteData::Success(x) => {
                prop_assert_eq!(calls, 0);
                prop_assert_eq!(got, x);
            }
            _ => {
                prop_assert_eq!(calls, 1);
                prop_assert_eq!(got, fallback);
            }
        }
    }

    #[test]
    fn get_or_none_and_get_or_else(r in arb_int_remote_data(), fallback in any::<i32>()) {
        let expected = match &r {
            RemoteData::Success(x) => Some(*x),
            _ => None,
        };

        prop_assert_eq!(r.clone().get_or_none(), expected);
        prop_assert_eq!(r.get_or_else(fallback), expected.unwrap_or(fallback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reaches_every_variant() {
        let seen: Vec<_> = (0..4).map(classify).collect();

        assert!(seen[0].is_success());
        assert!(seen[1].is_failure());
        assert!(seen[2].is_loading());
        assert!(seen[3].is_not_asked());
    }

    #[test]
    fn associativity_with_mixed_states() {
        // 8 -> Success(16) -> Success(8); 5 -> Failure from classify; 6 -> Loading
        for (x, expected) in [
            (8, RemoteData::Success(8)),
            (5, RemoteData::Failure("5 rejected".to_string())),
            (6, RemoteData::Loading),
        ] {
            let r: RemoteData<String, i32> = RemoteData::Success(x);
            assert_eq!(
                r.clone().flat_map(classify).flat_map(halve_if_even),
                expected
            );
            assert_eq!(
                r.flat_map(|v| classify(v).flat_map(halve_if_even)),
                expected
            );
        }
    }
}
