// src/noyau/lecture.rs
//
// Lecture d’un rationnel depuis du texte.
//
// Formes acceptées :
// - entier         : "12"
// - décimal        : "12.15"        (15 centièmes)
// - fraction       : "1/3"
// - nombre mixte   : "1 2/3", "1_2/3", "1+2/3"
// - "-" en tête    : négation appliquée à la valeur complète
//
// Espaces permis autour de chaque jeton, sauf à l’intérieur d’un décimal.
// Position des erreurs = index en caractères dans l’entrée.

use std::str::FromStr;

use num_bigint::BigInt;

use super::erreur::{ParseError, ParseErrorKind};
use super::rationnel::Rational;

struct Lecteur<'a> {
    input: &'a str,
    chars: Vec<char>,
    i: usize,
}

impl<'a> Lecteur<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            i: 0,
        }
    }

    fn eof(&self) -> bool {
        self.i >= self.chars.len()
    }

    fn courant(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    fn erreur_en(&self, kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError {
            kind,
            position,
            input: self.input.to_string(),
        }
    }

    fn erreur(&self, kind: ParseErrorKind) -> ParseError {
        self.erreur_en(kind, self.i)
    }

    fn attempt(&mut self, c: char) -> bool {
        if self.courant() == Some(c) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    fn require(&mut self, c: char) -> Result<(), ParseError> {
        if self.attempt(c) {
            Ok(())
        } else {
            Err(self.erreur(ParseErrorKind::Expected(c)))
        }
    }

    fn skip_space(&mut self) {
        while self.courant().is_some_and(char::is_whitespace) {
            self.i += 1;
        }
    }

    /// 123 (au moins un chiffre). Renvoie aussi le nombre de chiffres lus.
    fn natural(&mut self) -> Result<(BigInt, usize), ParseError> {
        let start = self.i;
        while self.courant().is_some_and(|c| c.is_ascii_digit()) {
            self.i += 1;
        }
        if self.i == start {
            return Err(self.erreur(ParseErrorKind::ExpectedDigit));
        }
        let digits: String = self.chars[start..self.i].iter().collect();
        let n = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| self.erreur_en(ParseErrorKind::ExpectedDigit, start))?;
        Ok((n, self.i - start))
    }

    /// p / (naturel lu ici). Un dénominateur nul est une erreur de lecture.
    fn over_denominator(&mut self, p: BigInt) -> Result<Rational, ParseError> {
        let start = self.i;
        let (q, _) = self.natural()?;
        Rational::new(p, q).map_err(|_| self.erreur_en(ParseErrorKind::ZeroDenominator, start))
    }

    /// 1234 après le point : 1234/10^4.
    fn decimals(&mut self) -> Result<Rational, ParseError> {
        let start = self.i;
        let (p, width) = self.natural()?;
        let q = BigInt::from(10).pow(width as u32);
        Rational::new(p, q).map_err(|_| self.erreur_en(ParseErrorKind::ZeroDenominator, start))
    }

    /// 12 / 34
    fn simple_fraction(&mut self) -> Result<Rational, ParseError> {
        let (p, _) = self.natural()?;
        self.skip_space();
        self.require('/')?;
        self.skip_space();
        self.over_denominator(p)
    }

    fn parse(mut self) -> Result<Rational, ParseError> {
        self.skip_space();
        let negatif = self.attempt('-');
        if negatif {
            self.skip_space();
        }

        let (n, _) = self.natural()?;
        let mut out = Rational::from_integer(n);

        if self.attempt('.') {
            out = out.add(&self.decimals()?);
        } else {
            self.skip_space();
            if self.attempt('/') {
                self.skip_space();
                out = self.over_denominator(out.numer().clone())?;
            } else if !self.eof() {
                // nombre mixte, séparateur optionnel
                if self.attempt('_') || self.attempt('+') {
                    self.skip_space();
                }
                out = out.add(&self.simple_fraction()?);
            }
        }

        self.skip_space();
        if !self.eof() {
            return Err(self.erreur(ParseErrorKind::ExpectedEnd));
        }

        Ok(if negatif { -out } else { out })
    }
}

/// Lit un rationnel (voir formes acceptées en tête de module).
pub fn parse_rational(input: &str) -> Result<Rational, ParseError> {
    Lecteur::new(input).parse()
}

impl Rational {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_rational(input)
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rational(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(p: i64, q: i64) -> Rational {
        Rational::new(p, q).unwrap()
    }

    fn assert_parse(attendu: Rational, input: &str) {
        let lu = Rational::parse(input)
            .unwrap_or_else(|e| panic!("parse({input:?}) erreur: {e}"));
        assert_eq!(lu, attendu, "parse `{input}`");
    }

    fn assert_echec(input: &str, kind: ParseErrorKind, position: usize) {
        let e = Rational::parse(input).expect_err(input);
        assert_eq!(e.kind, kind, "type d’erreur pour {input:?}");
        assert_eq!(e.position, position, "position pour {input:?}");
        assert_eq!(e.input, input);
    }

    #[test]
    fn entier() {
        assert_parse(Rational::from_integer(12), "12");
        assert_parse(Rational::zero(), "0");
        assert_parse(Rational::zero(), "-0");
    }

    #[test]
    fn decimal() {
        assert_parse(r(-243, 20), "-12.15");
        assert_parse(r(-243, 20), "- 12.15 ");
        assert_parse(r(10003, 10000), "1.0003");
        assert_parse(r(1, 2), "0.50");
    }

    #[test]
    fn fraction_simple() {
        assert_parse(r(-12, 34), "  -12 /34");
        assert_parse(r(1, 3), "1/3");
    }

    #[test]
    fn nombre_mixte() {
        assert_parse(r(7, 4), "1 3 / 4");
        assert_parse(r(7, 4), " 1_3/4  ");
        assert_parse(r(7, 4), "1 +3/ 4");
        assert_parse(r(5, 3), "1_2/3");
        assert_parse(r(-5, 3), "-1 2/3");
    }

    #[test]
    fn grand_nombre() {
        let p = BigInt::parse_bytes(b"-922337203685477580700001234", 10).unwrap();
        let attendu = Rational::new(p, 10000).unwrap();
        assert_parse(attendu, "-92233720368547758070000.1234");
    }

    #[test]
    fn via_from_str() {
        let x: Rational = "3/6".parse().unwrap();
        assert_eq!(x, r(1, 2));
    }

    #[test]
    fn echecs() {
        assert_echec("12 a", ParseErrorKind::ExpectedDigit, 3);
        assert_echec("-12.", ParseErrorKind::ExpectedDigit, 4);
        assert_echec("/4", ParseErrorKind::ExpectedDigit, 0);
        assert_echec("- 1 3/", ParseErrorKind::ExpectedDigit, 6);
        assert_echec("1 3", ParseErrorKind::Expected('/'), 3);
        assert_echec("1.5 2", ParseErrorKind::ExpectedEnd, 4);
        assert_echec("", ParseErrorKind::ExpectedDigit, 0);
        assert_echec("1/2/3", ParseErrorKind::ExpectedEnd, 3);
    }

    #[test]
    fn denominateur_nul() {
        assert_echec("1/0", ParseErrorKind::ZeroDenominator, 2);
        assert_echec("1 2/00", ParseErrorKind::ZeroDenominator, 4);
    }

    #[test]
    fn message_lisible() {
        let e = Rational::parse("/4").unwrap_err();
        assert_eq!(
            e.to_string(),
            "rationnel invalide : chiffre attendu à la position 0 dans `/4`"
        );
    }
}
