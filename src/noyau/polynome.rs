// src/noyau/polynome.rs
//
// Polynôme immuable à coefficients rationnels :
//   P(x) = a0 + a1*x + ... + an*x^n, stocké [a0, a1, ..., an]
//
// Invariant : jamais de zéro en tête (an ≠ 0), donc le degré est bien défini.
// Le polynôme nul a une liste vide et un degré -1.

use std::ops::{Add, Mul};

use super::rationnel::Rational;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<Rational>,
}

impl Polynomial {
    /// Coefficients a0..an ; les zéros de tête sont retirés.
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        while coeffs.last().is_some_and(Rational::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(c: Rational) -> Self {
        Self::new(vec![c])
    }

    /// x - a
    pub fn linear_factor(a: &Rational) -> Self {
        Self::new(vec![a.negate(), Rational::one()])
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// -1 pour le polynôme nul.
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<Rational> {
        self.coeffs
    }

    /// a_i, ou 0 au-delà du degré.
    pub fn coeff(&self, i: usize) -> Rational {
        self.coeffs.get(i).cloned().unwrap_or_else(Rational::zero)
    }

    /// P + Q (re-normalisé : la somme peut faire baisser le degré).
    pub fn add(&self, other: &Self) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        let out = (0..n)
            .map(|i| self.coeff(i).add(&other.coeff(i)))
            .collect();
        Self::new(out)
    }

    /// P * Q (convolution).
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut out = vec![Rational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].add(&a.mul(b));
            }
        }
        Self::new(out)
    }

    /// P(x) par Horner : y <- y*x + a_i, du plus haut degré vers a0.
    pub fn evaluate(&self, x: &Rational) -> Rational {
        let mut y = Rational::zero();
        for a in self.coeffs.iter().rev() {
            y = y.mul(x).add(a);
        }
        y
    }
}

impl From<Vec<Rational>> for Polynomial {
    fn from(coeffs: Vec<Rational>) -> Self {
        Self::new(coeffs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}
