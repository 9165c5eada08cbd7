// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arithmetic over Z_p and its quadratic extension Z_p[w].
//!
//! An element is a plain `i32`. Two encodings exist, selected by
//! [`Arithmetic`]:
//!
//! - **Pure**: a value in `[0, p)` is an ordinary residue; a negative value
//!   `-m` stands for `m·w`. Only "pure" elements (no mixed `a + b·w`) can be
//!   represented. Sums of a residue and a `w`-multiple are not tracked, which
//!   is exact for every generator the planar solver produces.
//! - **General**: `re + p·im` encodes `re + im·w`, so every element of the
//!   extension has a code in `[0, p²)`.
//!
//! `w² = wsquare`, the smallest quadratic non-residue. A field with
//! `wsquare == 0` is the plain prime field.

pub mod matrix;
pub mod roots;

use std::fmt;

use crate::error::{QuotientError, Result};

pub use matrix::Matrix;
pub use roots::SquareRoots;

/// A field element in one of the two encodings.
pub type Elem = i32;

/// Element encoding used by a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arithmetic {
    #[default]
    Pure,
    General,
}

/// Trial division; adequate for the primes a tiling search visits.
pub fn is_prime(n: u32) -> bool {
    n >= 2 && (2..).take_while(|&k| k <= n / k).all(|k| n % k != 0)
}

/// Smallest quadratic non-residue modulo `prime`, if there is one.
///
/// There is none modulo 2, where every element is a square.
pub fn smallest_non_residue(prime: u32) -> Option<Elem> {
    let p = prime as u64;
    (2..p).find(|&k| (1..p).all(|x| x * x % p != k)).map(|k| k as Elem)
}

/// Z_p or Z_p[w] with a fixed element encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    prime: Elem,
    wsquare: Elem,
    arithmetic: Arithmetic,
}

impl Field {
    /// The prime field Z_p.
    pub fn plain(prime: u32, arithmetic: Arithmetic) -> Result<Self> {
        if !is_prime(prime) {
            return Err(QuotientError::NotPrime(prime));
        }
        Ok(Field {
            prime: prime as Elem,
            wsquare: 0,
            arithmetic,
        })
    }

    /// The quadratic extension Z_p[w], or `None` when `p` has no non-residue.
    pub fn quadratic(prime: u32, arithmetic: Arithmetic) -> Result<Option<Self>> {
        let plain = Field::plain(prime, arithmetic)?;
        Ok(smallest_non_residue(prime).map(|wsquare| Field { wsquare, ..plain }))
    }

    pub fn prime(&self) -> u32 {
        self.prime as u32
    }

    /// `w²`, or 0 for the plain field.
    pub fn wsquare(&self) -> Elem {
        self.wsquare
    }

    pub fn arithmetic(&self) -> Arithmetic {
        self.arithmetic
    }

    pub fn is_extended(&self) -> bool {
        self.wsquare != 0
    }

    /// Number of elements: `p` or `p²`.
    pub fn order(&self) -> u32 {
        if self.is_extended() {
            self.prime() * self.prime()
        } else {
            self.prime()
        }
    }

    /// `-1`, which is `p - 1` in both encodings.
    pub fn minus_one(&self) -> Elem {
        self.prime - 1
    }

    /// Every representable element, in the order the solvers enumerate them.
    ///
    /// Pure extensions run over `(1-p)..p`: the `w`-multiples first (most
    /// negative first), then the residues. General extensions run over all
    /// `p²` codes.
    pub fn elements(&self) -> std::ops::Range<Elem> {
        match (self.arithmetic, self.is_extended()) {
            (_, false) => 0..self.prime,
            (Arithmetic::Pure, true) => (1 - self.prime)..self.prime,
            (Arithmetic::General, true) => 0..self.prime * self.prime,
        }
    }

    /// The residues `0..p`, valid in both encodings.
    pub fn residues(&self) -> std::ops::Range<Elem> {
        0..self.prime
    }

    /// Split an element into `(re, im)` with `e = re + im·w`.
    pub fn components(&self, e: Elem) -> (Elem, Elem) {
        match self.arithmetic {
            Arithmetic::Pure if e < 0 => (0, -e),
            Arithmetic::Pure => (e, 0),
            Arithmetic::General => (e % self.prime, e / self.prime),
        }
    }

    /// True unless the element has both a residue and a `w` component.
    pub fn is_pure(&self, e: Elem) -> bool {
        let (re, im) = self.components(e);
        re == 0 || im == 0
    }

    fn compose(&self, re: i64, im: i64) -> Elem {
        let p = self.prime as i64;
        (re.rem_euclid(p) + p * im.rem_euclid(p)) as Elem
    }

    pub fn add(&self, a: Elem, b: Elem) -> Elem {
        match self.arithmetic {
            Arithmetic::Pure => (a + b) % self.prime,
            Arithmetic::General => {
                let (ar, ai) = self.components(a);
                let (br, bi) = self.components(b);
                self.compose(ar as i64 + br as i64, ai as i64 + bi as i64)
            }
        }
    }

    pub fn sub(&self, a: Elem, b: Elem) -> Elem {
        match self.arithmetic {
            Arithmetic::Pure => ((a as i64 + b as i64 * (self.prime as i64 - 1)) % self.prime as i64) as Elem,
            Arithmetic::General => {
                let (ar, ai) = self.components(a);
                let (br, bi) = self.components(b);
                self.compose(ar as i64 - br as i64, ai as i64 - bi as i64)
            }
        }
    }

    pub fn neg(&self, a: Elem) -> Elem {
        self.sub(0, a)
    }

    pub fn mul(&self, a: Elem, b: Elem) -> Elem {
        match self.arithmetic {
            Arithmetic::Pure => {
                let twist = if a < 0 && b < 0 { self.wsquare as i64 } else { 1 };
                (a as i64 * b as i64 * twist % self.prime as i64) as Elem
            }
            Arithmetic::General => {
                let (ar, ai) = self.components(a);
                let (br, bi) = self.components(b);
                let (ar, ai, br, bi) = (ar as i64, ai as i64, br as i64, bi as i64);
                self.compose(ar * br + ai * bi * self.wsquare as i64, ar * bi + ai * br)
            }
        }
    }

    pub fn sqr(&self, a: Elem) -> Elem {
        self.mul(a, a)
    }

    /// Sum of products, reduced once at the end in the pure encoding.
    pub fn dot(&self, terms: impl Iterator<Item = (Elem, Elem)>) -> Elem {
        match self.arithmetic {
            Arithmetic::Pure => {
                let total: i64 = terms.map(|(a, b)| self.mul(a, b) as i64).sum();
                (total % self.prime as i64) as Elem
            }
            Arithmetic::General => terms.fold(0, |acc, (a, b)| self.add(acc, self.mul(a, b))),
        }
    }

    /// Re-encode an element of this field in the general encoding.
    pub fn to_general(&self, e: Elem) -> Elem {
        let (re, im) = self.components(e);
        re + self.prime * im
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extended() {
            write!(f, "Z_{}[w], w^2 = {}", self.prime, self.wsquare)
        } else {
            write!(f, "Z_{}", self.prime)
        }
    }
}
