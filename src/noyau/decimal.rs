// src/noyau/decimal.rs
//
// Lecture décimale d’un rationnel exact.
// - DECIMAL128 : 34 chiffres significatifs, arrondi au pair (half-even)
// - exacte si le développement se termine dans ces 34 chiffres
// - zéros de queue toujours retirés (forme canonique)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use std::fmt;

/// Précision du contexte DECIMAL128.
pub const CHIFFRES_DECIMAL128: usize = 34;

/* ------------------------ Entiers scalés ------------------------ */

pub fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/* ------------------------ Décimal arrondi ------------------------ */

/// Valeur décimale `mantisse × 10^-echelle`, sans zéro de queue.
/// Une échelle négative signifie un entier se terminant par des zéros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal128 {
    pub mantisse: BigInt,
    pub echelle: i64,
}

impl Decimal128 {
    /// Chiffres après la virgule (0 pour un entier).
    pub fn decimales(&self) -> usize {
        self.echelle.max(0) as usize
    }
}

impl fmt::Display for Decimal128 {
    /// Notation simple, jamais scientifique.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.echelle <= 0 {
            let entier = &self.mantisse * pow10((-self.echelle) as usize);
            write!(f, "{entier}")
        } else {
            let txt = scaled_to_decimal(self.mantisse.clone(), self.echelle as usize);
            write!(f, "{txt}")
        }
    }
}

/// Nombre de chiffres décimaux de |n| (n > 0).
fn nb_chiffres(n: &BigInt) -> i64 {
    n.magnitude().to_str_radix(10).len() as i64
}

/// floor(log10(n/d)) pour n, d > 0.
fn exposant10(n: &BigInt, d: &BigInt) -> i64 {
    let e = nb_chiffres(n) - nb_chiffres(d);
    // n/d ∈ (10^(e-1), 10^(e+1)) : on teste 10^e <= n/d
    let atteint = if e >= 0 {
        *n >= d * pow10(e as usize)
    } else {
        n * pow10((-e) as usize) >= *d
    };
    if atteint {
        e
    } else {
        e - 1
    }
}

/// Arrondit r à `chiffres` chiffres significatifs (half-even).
pub fn arrondi_significatif(r: &BigRational, chiffres: usize) -> Decimal128 {
    if r.is_zero() {
        return Decimal128 {
            mantisse: BigInt::zero(),
            echelle: 0,
        };
    }

    let neg = r.is_negative();
    let n = r.numer().abs();
    let d = r.denom().abs();

    let e = exposant10(&n, &d);
    let mut echelle = chiffres as i64 - 1 - e;

    // |r| × 10^echelle, en division entière
    let (num, den) = if echelle >= 0 {
        (n * pow10(echelle as usize), d)
    } else {
        (n, d * pow10((-echelle) as usize))
    };
    let mut q = &num / &den;
    let reste: BigInt = &num % &den;

    let double_reste = &reste * 2;
    let impair = (&q % 2u32) == BigInt::from(1);
    if double_reste > den || (double_reste == den && impair) {
        q += 1u32;
    }

    // 9.99…9 arrondi vers le haut : un chiffre de trop
    if q == pow10(chiffres) {
        q /= 10u32;
        echelle -= 1;
    }

    // zéros de queue
    let dix = BigInt::from(10);
    while !q.is_zero() && (&q % &dix).is_zero() {
        q /= 10u32;
        echelle -= 1;
    }

    Decimal128 {
        mantisse: if neg { -q } else { q },
        echelle,
    }
}

/// Lecture DECIMAL128 d’un rationnel.
pub fn decimal128(r: &BigRational) -> Decimal128 {
    arrondi_significatif(r, CHIFFRES_DECIMAL128)
}

/// Chiffres après la virgule de la lecture DECIMAL128, zéros de queue retirés.
pub fn decimales(r: &BigRational) -> usize {
    decimal128(r).decimales()
}
