// src/generateur/alea.rs
//
// Moteur aléatoire borné (reproductible).
// - FluxLineaire : LCG 48 bits, mêmes constantes et mêmes tirages que java.util.Random
// - mix32        : mélange 64 -> 32 bits (deux tours xor-shift-multiply)
// - MoteurAlea   : deux flux indépendants
//     * nombres   : entiers bornés (opérandes, nombre de décimales)
//     * structure : opérateur, parenthèses, mantisse des décimaux, longueur aléatoire
//
// Contrat : même graine + même suite d’appels => mêmes valeurs, bit pour bit.

use num_bigint::BigInt;

use crate::noyau::decimal::scaled_to_decimal;

const MULTIPLICATEUR: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASQUE_48: u64 = (1 << 48) - 1;

/// 2^-53 : pas d’un double tiré sur 53 bits.
const PAS_53: f64 = 1.0 / (1u64 << 53) as f64;

/* ------------------------ Flux linéaire ------------------------ */

#[derive(Clone, Debug)]
pub struct FluxLineaire {
    etat: u64,
}

impl FluxLineaire {
    pub fn new(graine: i64) -> Self {
        Self {
            etat: (graine as u64 ^ MULTIPLICATEUR) & MASQUE_48,
        }
    }

    /// Graine tirée de l’entropie du système (mode non reproductible).
    pub fn depuis_entropie() -> Self {
        Self::new(rand::random::<i64>())
    }

    /// Les `bits` de poids fort de l’état suivant.
    fn suivant(&mut self, bits: u32) -> i32 {
        self.etat = self
            .etat
            .wrapping_mul(MULTIPLICATEUR)
            .wrapping_add(INCREMENT)
            & MASQUE_48;
        (self.etat >> (48 - bits)) as i32
    }

    pub fn next_i32(&mut self) -> i32 {
        self.suivant(32)
    }

    pub fn next_i64(&mut self) -> i64 {
        let haut = self.suivant(32) as i64;
        let bas = self.suivant(32) as i64;
        (haut << 32).wrapping_add(bas)
    }

    pub fn next_bool(&mut self) -> bool {
        self.suivant(1) != 0
    }

    /// Entier uniforme dans [0, borne), borne > 0.
    pub fn next_i32_borne(&mut self, borne: i32) -> i32 {
        let mut r = self.suivant(31);
        let m = borne - 1;

        if borne & m == 0 {
            // puissance de deux : bits de poids fort
            return ((borne as i64 * r as i64) >> 31) as i32;
        }

        let mut u = r;
        loop {
            r = u % borne;
            if u.wrapping_sub(r).wrapping_add(m) < 0 {
                u = self.suivant(31);
            } else {
                return r;
            }
        }
    }
}

/// Mélange avalanche 64 -> 32 bits.
pub fn mix32(z: i64) -> i32 {
    let mut z = z as u64;
    z = (z ^ (z >> 33)).wrapping_mul(0xff51_afd7_ed55_8ccd);
    ((z ^ (z >> 33)).wrapping_mul(0xc4ce_b9fe_1a85_ec53) >> 32) as i32
}

/* ------------------------ Arrondis ------------------------ */

/// Plus grand double strictement inférieur à `borne`.
fn juste_sous(borne: f64) -> f64 {
    if borne > 0.0 {
        f64::from_bits(borne.to_bits() - 1)
    } else if borne == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(borne.to_bits() + 1)
    }
}

/// Arrondi à l’entier, demi vers +∞.
fn arrondi_demi_haut(r: f64) -> f64 {
    let f = r.floor();
    if r - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/// Arrondi vers +∞ à `places` décimales, appliqué à la plus courte
/// écriture décimale de `r` (celle que Display produit).
fn arrondi_plafond(r: f64, places: usize) -> f64 {
    let txt = format!("{r}");
    let (negatif, corps) = match txt.strip_prefix('-') {
        Some(c) => (true, c),
        None => (false, txt.as_str()),
    };
    let (entier, frac) = corps.split_once('.').unwrap_or((corps, ""));

    if frac.len() <= places {
        return r;
    }
    let (garde, reste) = frac.split_at(places);

    let Some(mut scaled) = BigInt::parse_bytes(format!("{entier}{garde}").as_bytes(), 10) else {
        return r;
    };
    // vers +∞ : on monte les positifs tronqués, les négatifs tronqués sont déjà au plafond
    if !negatif && reste.bytes().any(|b| b != b'0') {
        scaled += 1u32;
    }
    if negatif {
        scaled = -scaled;
    }

    scaled_to_decimal(scaled, places).parse().unwrap_or(r)
}

/* ------------------------ Moteur à deux flux ------------------------ */

#[derive(Clone, Debug)]
pub struct MoteurAlea {
    nombres: FluxLineaire,
    structure: FluxLineaire,
}

impl MoteurAlea {
    /// Les deux flux partent de la même graine.
    pub fn new(graine: i64) -> Self {
        Self {
            nombres: FluxLineaire::new(graine),
            structure: FluxLineaire::new(graine),
        }
    }

    pub fn depuis_entropie() -> Self {
        Self {
            nombres: FluxLineaire::depuis_entropie(),
            structure: FluxLineaire::depuis_entropie(),
        }
    }

    /// Entier uniforme dans [origine, max] (inclus), sans biais de modulo.
    pub fn next_int(&mut self, origine: i32, max: i32) -> i32 {
        let mut r = mix32(self.nombres.next_i64());
        let borne = max.wrapping_add(1);

        if origine < borne {
            let n = borne.wrapping_sub(origine);
            let m = n.wrapping_sub(1);

            if n & m == 0 {
                r = (r & m).wrapping_add(origine);
            } else if n > 0 {
                let mut u = ((r as u32) >> 1) as i32;
                loop {
                    r = u % n;
                    // zone biaisée du dernier intervalle : on retire
                    if u.wrapping_add(m).wrapping_sub(r) < 0 {
                        u = ((mix32(self.nombres.next_i64()) as u32) >> 1) as i32;
                    } else {
                        break;
                    }
                }
                r = r.wrapping_add(origine);
            } else {
                // intervalle plus large que i32 : rejet simple
                while r < origine || r >= borne {
                    r = mix32(self.nombres.next_i64());
                }
            }
        }
        r
    }

    /// Décimal uniforme dans [origine, borne), arrondi vers +∞ à `places` décimales.
    /// - places == -1 : pas d’arrondi
    /// - places == 0  : entier le plus proche (demi vers +∞)
    /// - origine == borne : renvoie origine
    pub fn next_decimal(&mut self, origine: f64, borne: f64, places: i32) -> f64 {
        let mut r = ((self.structure.next_i64() as u64) >> 11) as f64 * PAS_53;

        if origine < borne {
            r = r * (borne - origine) + origine;
            if r >= borne {
                r = juste_sous(borne);
            }
        } else {
            r = origine;
        }

        let v = match places {
            p if p < 0 => r,
            0 => arrondi_demi_haut(r),
            p => arrondi_plafond(r, p as usize),
        };
        // pas de zéro négatif
        v + 0.0
    }

    /// Index uniforme dans [0, n), 0 < n <= i32::MAX.
    /// Au-delà, n est ramené à i32::MAX : les appelants bornent n en amont
    /// (liste d’opérateurs, écart de longueur vérifié par la config).
    pub fn choix(&mut self, n: usize) -> usize {
        let borne = n.min(i32::MAX as usize) as i32;
        self.structure.next_i32_borne(borne) as usize
    }

    pub fn pile_ou_face(&mut self) -> bool {
        self.structure.next_bool()
    }
}
