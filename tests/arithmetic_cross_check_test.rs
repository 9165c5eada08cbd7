// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The pure and general encodings agree wherever the pure one applies.

use field_quotient::field::{Arithmetic, Elem, Field};
use field_quotient::group::MatrixGroup;
use field_quotient::solver::{solve, SolverConfig};
use field_quotient::TilingShape;
use proptest::prelude::*;

const PRIMES: [u32; 5] = [5, 7, 11, 13, 43];

fn general(prime: u32) -> Field {
    Field::quadratic(prime, Arithmetic::General).unwrap().unwrap()
}

fn pure(prime: u32) -> Field {
    Field::quadratic(prime, Arithmetic::Pure).unwrap().unwrap()
}

#[test]
fn test_solutions_agree_across_encodings() {
    for (rotations, valence, prime) in [(5, 4, 11), (7, 4, 13), (7, 3, 43)] {
        let shape = TilingShape::planar(rotations, valence);
        let config = SolverConfig::default();
        let a = solve(prime, shape, &config.clone().with_arithmetic(Arithmetic::Pure)).unwrap();
        let b = solve(prime, shape, &config.with_arithmetic(Arithmetic::General)).unwrap();
        assert_eq!(a.params.cs, b.params.cs, "{} over {}", shape, prime);
        assert_eq!(a.params.ch, b.params.ch, "{} over {}", shape, prime);
        assert_eq!(a.params.dual, b.params.dual, "{} over {}", shape, prime);
        assert_eq!(a.params.wsquare, b.params.wsquare, "{} over {}", shape, prime);
        assert_eq!(a.field.is_extended(), b.field.is_extended());

        let none: [&str; 0] = [];
        let pure_group = MatrixGroup::close(&a, &none).unwrap();
        let general_group = MatrixGroup::close(&b, &none).unwrap();
        assert_eq!(pure_group.len(), general_group.len(), "{} over {}", shape, prime);
        assert_eq!(general_group.mixed_entry_count(), 0);
    }
}

#[test]
fn test_general_w_squares_to_non_residue() {
    for prime in PRIMES {
        let field = general(prime);
        let w = prime as Elem;
        assert_eq!(field.mul(w, w), field.wsquare());
        assert_eq!(field.to_general(w), w);
    }
}

fn prime_and_elements() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (prop::sample::select(PRIMES.to_vec()), any::<u32>(), any::<u32>(), any::<u32>())
}

proptest! {
    #[test]
    fn prop_general_extension_is_a_field((prime, a, b, c) in prime_and_elements()) {
        let field = general(prime);
        let order = field.order();
        let (a, b, c) = ((a % order) as Elem, (b % order) as Elem, (c % order) as Elem);

        prop_assert_eq!(field.add(a, b), field.add(b, a));
        prop_assert_eq!(field.mul(a, b), field.mul(b, a));
        prop_assert_eq!(field.mul(field.mul(a, b), c), field.mul(a, field.mul(b, c)));
        prop_assert_eq!(
            field.mul(a, field.add(b, c)),
            field.add(field.mul(a, b), field.mul(a, c))
        );
        prop_assert_eq!(field.add(field.sub(a, b), b), a);
        prop_assert_eq!(field.add(a, field.neg(a)), 0);
        prop_assert_eq!(field.mul(a, 1), a);
    }

    #[test]
    fn prop_pure_plain_field((prime, a, b, c) in prime_and_elements()) {
        let field = Field::plain(prime, Arithmetic::Pure).unwrap();
        let (a, b, c) = ((a % prime) as Elem, (b % prime) as Elem, (c % prime) as Elem);

        prop_assert_eq!(field.mul(field.mul(a, b), c), field.mul(a, field.mul(b, c)));
        prop_assert_eq!(
            field.mul(a, field.add(b, c)),
            field.add(field.mul(a, b), field.mul(a, c))
        );
        prop_assert_eq!(field.add(field.sub(a, b), b), a);
        prop_assert_eq!(field.dot([(a, b), (c, 1)].into_iter()), field.add(field.mul(a, b), c));
    }

    #[test]
    fn prop_pure_extension_matches_general(
        (prime, m, n, _) in prime_and_elements(),
        a_twisted in any::<bool>(),
        b_twisted in any::<bool>(),
    ) {
        let (pure, general) = (pure(prime), general(prime));
        let encode = |k: u32, twisted: bool| {
            let k = (k % prime) as Elem;
            if twisted { -k } else { k }
        };
        let (a, b) = (encode(m, a_twisted), encode(n, b_twisted));
        let (ga, gb) = (pure.to_general(a), pure.to_general(b));

        prop_assert_eq!(pure.to_general(pure.mul(a, b)), general.mul(ga, gb));
        if a_twisted == b_twisted {
            prop_assert_eq!(pure.to_general(pure.add(a, b)), general.add(ga, gb));
            prop_assert_eq!(pure.to_general(pure.sub(a, b)), general.sub(ga, gb));
        }
    }
}
