//! Noyau exact : interpolation polynomiale sur les rationnels
//!
//! Organisation interne :
//! - erreur.rs        : erreurs typées (division par zéro, lecture, nœud dupliqué)
//! - rationnel.rs     : rationnel canonique (big int) + arithmétique
//! - lecture.rs       : texte -> rationnel (entier, décimal, fraction, mixte)
//! - format.rs        : affichage EXACT (rationnel, polynôme, point)
//! - polynome.rs      : polynôme immuable, somme, produit, Horner
//! - point.rs         : nœud (x, y)
//! - interpolation.rs : différences divisées de Newton
//!
//! Aucune entrée/sortie, aucune journalisation : fonctions pures sur des valeurs.

pub mod erreur;
pub mod format;
pub mod interpolation;
pub mod lecture;
pub mod point;
pub mod polynome;
pub mod rationnel;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{ArithError, InterpolationError, ParseError, ParseErrorKind, PointParseError};
pub use interpolation::{interpolate, Interpolation};
pub use point::Point;
pub use polynome::Polynomial;
pub use rationnel::Rational;
