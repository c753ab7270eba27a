// src/generateur/operateur.rs
//
// Jeu d’opérateurs binaires (fixe).
// Affichage : + - × ÷     Canonique : + - * /

use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Glyphe du texte d’affichage.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }

    /// Glyphe ASCII du texte canonique (évaluable).
    pub fn symbole_canonique(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "*",
            Operateur::Division => "/",
        }
    }

    /// Faux seulement pour une division par zéro.
    pub fn operande_droite_sure(self, valeur: f64) -> bool {
        !(self == Operateur::Division && valeur == 0.0)
    }

    /// Opérateur dont le glyphe (affichage ou canonique) est `s`.
    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        Operateur::TOUS
            .into_iter()
            .find(|op| op.symbole() == s || op.symbole_canonique() == s)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}
