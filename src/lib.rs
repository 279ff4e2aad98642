//! Interpolation Q-pur : polynôme d’interpolation exact (rationnels, sans flottants).
//!
//! Le noyau est embarquable derrière n’importe quelle interface ;
//! le binaire `interpolation` n’en est qu’un client.

pub mod noyau;

pub use noyau::{
    interpolate, ArithError, Interpolation, InterpolationError, ParseError, ParseErrorKind, Point,
    PointParseError, Polynomial, Rational,
};
