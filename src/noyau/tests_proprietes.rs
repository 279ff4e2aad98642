//! Tests de propriétés (proptest) : invariants du noyau exact.
//!
//! - forme canonique après construction
//! - lecture(affichage(r)) == r pour les quatre formes
//! - lois de groupe (somme, produit)
//! - interpolation : passe par chaque point, degré < n, indépendante de l’ordre
//! - abscisse répétée : échec, jamais un polynôme faux
//!
//! Tailles bornées : au plus 8 points, entiers de l’ordre du millier.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use proptest::prelude::*;

use super::{interpolate, Point, Polynomial, Rational};

fn petit_entier() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_nul() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

/// Dénominateurs variés : 2^i*5^j (décimal), premiers (fraction / mixte), quelconques.
fn denominateur() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(1i64),
        Just(8),
        Just(20),
        Just(10_000),
        Just(3),
        Just(7),
        Just(12),
        1i64..=1000i64,
    ]
}

fn rationnel() -> impl Strategy<Value = Rational> {
    (petit_entier(), denominateur()).prop_map(|(p, q)| Rational::new(p, q).unwrap())
}

fn rationnel_non_nul() -> impl Strategy<Value = Rational> {
    (non_nul(), denominateur()).prop_map(|(p, q)| Rational::new(p, q).unwrap())
}

/// Points d’abscisses distinctes (k/d), dans un ordre quelconque.
fn points_distincts() -> impl Strategy<Value = Vec<Point>> {
    (
        prop::collection::btree_set(-50i64..50i64, 0..8),
        1i64..5i64,
    )
        .prop_flat_map(|(xs, d)| {
            let n = xs.len();
            let xs: Vec<Rational> = xs
                .into_iter()
                .map(|k| Rational::new(k, d).unwrap())
                .collect();
            (Just(xs), prop::collection::vec(rationnel(), n))
        })
        .prop_map(|(xs, ys)| {
            xs.into_iter()
                .zip(ys)
                .map(|(x, y)| Point::new(x, y))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    // Forme canonique

    #[test]
    fn construction_canonique(p in petit_entier(), q in non_nul()) {
        let r = Rational::new(p, q).unwrap();
        prop_assert!(r.denom().is_positive());
        prop_assert!(r.numer().gcd(r.denom()).is_one());
        // p/q == num/den
        prop_assert_eq!(BigInt::from(p) * r.denom(), r.numer() * BigInt::from(q));
    }

    // Lecture / affichage

    #[test]
    fn aller_retour_texte(r in rationnel()) {
        let texte = r.to_string();
        let relu = Rational::parse(&texte);
        prop_assert_eq!(relu, Ok(r), "texte = {:?}", texte);
    }

    #[test]
    fn decimal_exact_ou_absent(r in rationnel()) {
        if let Some(dec) = r.to_decimal() {
            prop_assert_eq!(Rational::parse(&dec), Ok(r));
        }
    }

    // Lois de groupe

    #[test]
    fn somme_puis_difference(a in rationnel(), b in rationnel()) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn produit_puis_quotient(a in rationnel(), b in rationnel_non_nul()) {
        prop_assert_eq!(a.mul(&b).div(&b).unwrap(), a);
    }

    #[test]
    fn double_oppose(a in rationnel()) {
        prop_assert_eq!(a.negate().negate(), a);
    }

    #[test]
    fn ordre_coherent(a in rationnel(), b in rationnel()) {
        prop_assert_eq!(a.cmp(&b), (a.sub(&b).signum()).cmp(&0));
    }

    // Polynômes

    #[test]
    fn evaluation_du_produit(
        a in prop::collection::vec(rationnel(), 0..5),
        b in prop::collection::vec(rationnel(), 0..5),
        x in rationnel(),
    ) {
        let pa = Polynomial::new(a);
        let pb = Polynomial::new(b);
        prop_assert_eq!(pa.mul(&pb).evaluate(&x), pa.evaluate(&x).mul(&pb.evaluate(&x)));
        prop_assert_eq!(pa.add(&pb).evaluate(&x), pa.evaluate(&x).add(&pb.evaluate(&x)));
    }

    // Interpolation

    #[test]
    fn interpolation_passe_par_les_points(points in points_distincts()) {
        let poly = interpolate(&points).unwrap();
        prop_assert!(poly.degree() < points.len() as isize);
        for p in &points {
            prop_assert_eq!(poly.evaluate(&p.x), p.y.clone());
        }
    }

    #[test]
    fn interpolation_independante_de_l_ordre(points in points_distincts()) {
        let mut tries = points.clone();
        tries.sort_by(|a, b| a.x.cmp(&b.x));
        prop_assert_eq!(interpolate(&points).unwrap(), interpolate(&tries).unwrap());
    }

    #[test]
    fn abscisse_repetee_refusee(
        points in points_distincts().prop_filter("au moins un point", |v| !v.is_empty()),
        y in rationnel(),
        choix in any::<prop::sample::Index>(),
    ) {
        let mut points = points;
        let x = points[choix.index(points.len())].x.clone();
        points.push(Point::new(x, y));
        prop_assert!(interpolate(&points).is_err());
    }
}
