// src/generateur/expression.rs
//
// Expression acceptée : texte d’affichage + solution exacte.
// Immuable après construction ; seul generate() en crée.

use num_rational::BigRational;

use std::fmt;

use super::operateur::Operateur;
use crate::noyau::decimal::{decimal128, Decimal128};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionGeneree {
    texte: String,
    solution: BigRational,
}

impl ExpressionGeneree {
    pub(crate) fn new(texte: String, solution: BigRational) -> Self {
        Self { texte, solution }
    }

    /// Texte d’affichage (× et ÷).
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Texte canonique (* et /), évaluable par le noyau.
    pub fn texte_canonique(&self) -> String {
        vers_canonique(&self.texte)
    }

    /// Solution exacte.
    pub fn solution(&self) -> &BigRational {
        &self.solution
    }

    /// Lecture DECIMAL128 de la solution (34 chiffres significatifs).
    pub fn solution_decimale(&self) -> Decimal128 {
        decimal128(&self.solution)
    }

    /// Solution en double. Peut être imprécise.
    pub fn solution_f64(&self) -> f64 {
        self.solution_decimale()
            .to_string()
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Décimales de la solution, zéros de queue retirés.
    pub fn decimales(&self) -> usize {
        self.solution_decimale().decimales()
    }
}

impl fmt::Display for ExpressionGeneree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texte)
    }
}

/// Affichage -> canonique : substitution des glyphes, rien d’autre.
pub fn vers_canonique(texte: &str) -> String {
    Operateur::TOUS
        .into_iter()
        .fold(texte.trim().to_string(), |t, op| {
            t.replace(op.symbole(), op.symbole_canonique())
        })
}

/// Canonique -> affichage.
pub fn vers_affichage(texte: &str) -> String {
    Operateur::TOUS
        .into_iter()
        .fold(texte.trim().to_string(), |t, op| {
            t.replace(op.symbole_canonique(), op.symbole())
        })
}
