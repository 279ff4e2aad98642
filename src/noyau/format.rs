// src/noyau/format.rs
//
// Affichage EXACT (jamais d’arrondi).
//
// Rationnel, par ordre de préférence :
//   1. entier          "13"
//   2. décimal fini    "-0.375", "1.0003"   (dénominateur = 2^i * 5^j)
//   3. fraction        "-5/7"               (|N| < D)
//   4. nombre mixte    "-1 2/3"             (|N| >= D)
//
// Polynôme : termes du plus haut degré au plus bas, "-x^3 + (1/2)x^2 - 4".

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use super::point::Point;
use super::polynome::Polynomial;
use super::rationnel::Rational;

/* ------------------------ Rationnel ------------------------ */

/// Retire tous les facteurs `p` de `q`, renvoie (reste, nombre de facteurs).
fn retire_facteur(mut q: BigInt, p: u32) -> (BigInt, usize) {
    let p = BigInt::from(p);
    let mut k = 0;
    while q.is_multiple_of(&p) {
        q /= &p;
        k += 1;
    }
    (q, k)
}

/// Forme décimale finie si elle existe, sinon None (pas d’approximation).
pub fn format_decimal(r: &Rational) -> Option<String> {
    let den = r.denom();
    let (reste, i) = retire_facteur(den.clone(), 2);
    let (reste, j) = retire_facteur(reste, 5);
    if !reste.is_one() {
        return None;
    }

    let digits = i.max(j);
    if digits == 0 {
        return Some(r.numer().to_string());
    }

    // den divise 10^digits
    let scale = BigInt::from(10).pow(digits as u32);
    let scaled = r.numer().abs() * (&scale / den);
    let (int_part, frac_part) = scaled.div_rem(&scale);

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    // "-" explicite : "-0.5" n’a pas de partie entière négative
    let signe = if r.numer().is_negative() { "-" } else { "" };
    Some(format!("{signe}{int_part}.{frac}"))
}

pub fn format_rational(r: &Rational) -> String {
    let n = r.numer();
    let d = r.denom();

    if d.is_one() {
        return n.to_string();
    }
    if let Some(dec) = format_decimal(r) {
        return dec;
    }
    if n.abs() < *d {
        return format!("{n}/{d}");
    }

    // quotient tronqué (garde le signe), reste en valeur absolue
    let q = n / d;
    let reste = n.abs() % d;
    format!("{q} {reste}/{d}")
}

impl Rational {
    pub fn to_decimal(&self) -> Option<String> {
        format_decimal(self)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rational(self))
    }
}

/* ------------------------ Polynôme ------------------------ */

/// Coefficient devant x : parenthèses si le texte contient "/" ou " ".
fn format_coeff_x(a: &Rational) -> String {
    let s = format_rational(a);
    if s.contains('/') || s.contains(' ') {
        format!("({s})")
    } else {
        s
    }
}

pub fn format_polynomial(p: &Polynomial) -> String {
    let coeffs = p.coeffs();
    if coeffs.is_empty() {
        return "0".to_string();
    }

    let mut out = String::new();
    for (i, a) in coeffs.iter().enumerate().rev() {
        if a.is_zero() {
            continue;
        }

        // signe : "-" nu pour le premier terme, " + " / " - " ensuite
        let negatif = a.signum() < 0;
        if out.is_empty() {
            if negatif {
                out.push('-');
            }
        } else {
            out.push_str(if negatif { " - " } else { " + " });
        }

        let abs = a.abs();
        if i == 0 {
            out.push_str(&format_rational(&abs));
            continue;
        }
        if !(abs.is_integer() && abs.numer().is_one()) {
            out.push_str(&format_coeff_x(&abs));
        }
        out.push('x');
        if i > 1 {
            out.push('^');
            out.push_str(&i.to_string());
        }
    }
    out
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_polynomial(self))
    }
}

/* ------------------------ Point ------------------------ */

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
