//! Interpolation de Newton (différences divisées), en arithmétique exacte.
//!
//! Pour n points d’abscisses distinctes, produit l’unique polynôme de degré < n
//! passant par tous les points :
//! - table des différences divisées f[x_i, ..., x_{i+k}] (O(n²) opérations)
//! - b_k = f[x_0, ..., x_k]
//! - forme de Newton dépliée par Horner : P <- P*(x - x_i) + b_i
//!
//! Une abscisse répétée annule x_{i+k} - x_i : la division échoue et l’échec
//! remonte en `DuplicateNode`. Aucun tri n’est supposé sur l’entrée.

use super::erreur::InterpolationError;
use super::point::Point;
use super::polynome::Polynomial;
use super::rationnel::Rational;

/// Coefficients de Newton b_0..b_{n-1}.
fn differences_divisees(points: &[Point]) -> Result<Vec<Rational>, InterpolationError> {
    let n = points.len();
    let mut d: Vec<Rational> = points.iter().map(|p| p.y.clone()).collect();
    let mut b = Vec::with_capacity(n);
    if let Some(b0) = d.first() {
        b.push(b0.clone());
    }

    for k in 1..n {
        // en place, i croissant : d[i+1] est encore d’ordre k-1 quand on lit
        for i in 0..n - k {
            let dy = d[i + 1].sub(&d[i]);
            let dx = points[i + k].x.sub(&points[i].x);
            d[i] = dy
                .div(&dx)
                .map_err(|_| InterpolationError::DuplicateNode {
                    first: i,
                    second: i + k,
                    x: points[i].x.clone(),
                })?;
        }
        b.push(d[0].clone());
    }

    Ok(b)
}

/// Polynôme d’interpolation des points (polynôme nul si aucun point).
pub fn interpolate(points: &[Point]) -> Result<Polynomial, InterpolationError> {
    let b = differences_divisees(points)?;

    let mut p = Polynomial::zero();
    for (point, b_i) in points.iter().zip(&b).rev() {
        p = p
            .mul(&Polynomial::linear_factor(&point.x))
            .add(&Polynomial::constant(b_i.clone()));
    }
    Ok(p)
}

/// Résultat figé : copie des points + polynôme calculé.
/// Un nouvel ensemble de points donne toujours une nouvelle `Interpolation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpolation {
    points: Vec<Point>,
    result: Polynomial,
}

impl Interpolation {
    pub fn new(points: &[Point]) -> Result<Self, InterpolationError> {
        let result = interpolate(points)?;
        Ok(Self {
            points: points.to_vec(),
            result,
        })
    }

    /// Points d’origine, dans l’ordre fourni.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn result(&self) -> &Polynomial {
        &self.result
    }

    pub fn into_result(self) -> Polynomial {
        self.result
    }
}
