// src/noyau/erreur.rs
//
// Erreurs du noyau exact.
// - ArithError         : division par zéro (construction, inversion, division)
// - ParseError         : texte mal formé (position + entrée d’origine)
// - InterpolationError : nœuds dupliqués (détectés par la division)
// - PointParseError    : "x,y" mal formé
//
// Aucune erreur n’est absorbée : pas de valeur par défaut, pas d’arrondi.

use std::fmt;

use thiserror::Error;

use super::rationnel::Rational;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    #[error("division par zéro")]
    DivisionByZero,
}

/// Ce que le lecteur attendait au moment de l’échec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    ExpectedDigit,
    Expected(char),
    ExpectedEnd,
    ZeroDenominator,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::ExpectedDigit => write!(f, "chiffre attendu"),
            ParseErrorKind::Expected(c) => write!(f, "'{c}' attendu"),
            ParseErrorKind::ExpectedEnd => write!(f, "fin attendue"),
            ParseErrorKind::ZeroDenominator => write!(f, "dénominateur nul"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("rationnel invalide : {kind} à la position {position} dans `{input}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index (en caractères) dans `input`.
    pub position: usize,
    pub input: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("nœud dupliqué : les points {first} et {second} ont la même abscisse {x}")]
    DuplicateNode {
        first: usize,
        second: usize,
        x: Rational,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointParseError {
    #[error("point invalide `{0}` (forme attendue : x,y)")]
    MissingComma(String),
    #[error(transparent)]
    Coordinate(#[from] ParseError),
}
