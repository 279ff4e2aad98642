// src/noyau/rationnel.rs
//
// Rationnel exact, toujours sous forme canonique :
// - dénominateur > 0 (le signe vit sur le numérateur)
// - pgcd(|num|, den) = 1
//
// Donc égalité structurelle == égalité mathématique (derive PartialEq/Hash suffit).
// Valeur immuable : chaque opération renvoie un nouveau rationnel.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ArithError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// p/q réduit. Échoue si q = 0.
    pub fn new(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Result<Self, ArithError> {
        let q = q.into();
        if q.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        Ok(Self::canonique(p.into(), q))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            num: n.into(),
            den: BigInt::one(),
        }
    }

    /// Précondition : q ≠ 0.
    fn canonique(mut p: BigInt, mut q: BigInt) -> Self {
        debug_assert!(!q.is_zero());
        if q.is_negative() {
            p = -p;
            q = -q;
        }
        let d = p.gcd(&q);
        Self {
            num: p / &d,
            den: q / d,
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// -1, 0 ou +1.
    pub fn signum(&self) -> i32 {
        if self.num.is_negative() {
            -1
        } else if self.num.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            num: -&self.num,
            den: self.den.clone(),
        }
    }

    /// 1/a. Échoue si a = 0.
    pub fn invert(&self) -> Result<Self, ArithError> {
        Self::new(self.den.clone(), self.num.clone())
    }

    /// a + b, au ppcm des dénominateurs (pas le produit naïf).
    pub fn add(&self, x: &Self) -> Self {
        let q = self.den.lcm(&x.den);
        let p = &self.num * (&q / &self.den) + &x.num * (&q / &x.den);
        Self::canonique(p, q)
    }

    pub fn sub(&self, x: &Self) -> Self {
        self.add(&x.negate())
    }

    /// a * b, réduction croisée avant de multiplier.
    pub fn mul(&self, x: &Self) -> Self {
        let d1 = self.num.gcd(&x.den);
        let d2 = x.num.gcd(&self.den);
        let p = (&self.num / &d1) * (&x.num / &d2);
        let q = (&self.den / &d2) * (&x.den / &d1);
        Self::canonique(p, q)
    }

    pub fn div(&self, x: &Self) -> Result<Self, ArithError> {
        Ok(self.mul(&x.invert()?))
    }

    /// Vue flottante approchée (présentation seulement).
    pub fn to_f64(&self) -> Option<f64> {
        BigRational::from(self.clone()).to_f64()
    }
}

/* ------------------------ Ordre total ------------------------ */

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // dénominateurs > 0 : le produit croisé garde le sens
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<BigRational> for Rational {
    fn from(r: BigRational) -> Self {
        let (p, q) = r.into_raw();
        Self::canonique(p, q)
    }
}

impl From<Rational> for BigRational {
    fn from(r: Rational) -> Self {
        BigRational::new_raw(r.num, r.den)
    }
}

/* ------------------------ Opérateurs (infaillibles) ------------------------ */
//
// Seulement sur des références : une impl par valeur masquerait les méthodes
// inhérentes add/sub/mul lors de l’appel `a.add(&b)`.

impl Add for &Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        Rational::add(self, rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;
    fn sub(self, rhs: &Rational) -> Rational {
        Rational::sub(self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        Rational::mul(self, rhs)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}
