// src/noyau/point.rs
//
// Nœud d’interpolation (x, y). Donnée simple, aucune contrainte d’ordre.

use std::str::FromStr;

use super::erreur::PointParseError;
use super::rationnel::Rational;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Rational,
    pub y: Rational,
}

impl Point {
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &Rational {
        &self.x
    }

    pub fn y(&self) -> &Rational {
        &self.y
    }
}

/// "x,y" : une seule virgule, chaque côté suit la grammaire des rationnels.
impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .filter(|(_, y)| !y.contains(','))
            .ok_or_else(|| PointParseError::MissingComma(s.to_string()))?;
        Ok(Self::new(x.parse()?, y.parse()?))
    }
}
