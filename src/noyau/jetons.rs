// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : produit par to_rpn, jamais par tokenize.
    Neg,

    LPar,
    RPar,
}

/// Tokenize un texte canonique en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux à point (ex: 12.75) -> Num(51/4), exact
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Les glyphes d'affichage (× ÷) sont refusés : convertir d'abord en canonique.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : partie entière, puis fraction décimale optionnelle
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();

            let mut frac_str = String::new();
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let start_f = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if start_f == i {
                    // "12." : point sans chiffre derrière
                    let brut: String = chars[start..i].iter().collect();
                    return Err(ErreurEval::NombreInvalide(brut));
                }
                frac_str = chars[start_f..i].iter().collect();
            }

            out.push(Tok::Num(litteral_decimal(&int_str, &frac_str)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// "12" + "75" -> 1275/100 (réduit par BigRational::new).
fn litteral_decimal(int_str: &str, frac_str: &str) -> Result<BigRational, ErreurEval> {
    let brut = format!("{int_str}{frac_str}");
    let n = BigInt::parse_bytes(brut.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::NombreInvalide(brut.clone()))?;
    let d = BigInt::from(10).pow(frac_str.len() as u32);
    Ok(BigRational::new(n, d))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
