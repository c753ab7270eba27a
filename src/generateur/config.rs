//! src/generateur/config.rs
//!
//! Réglages du générateur (sans aléa, sans génération).
//!
//! Rôle : porter les réglages, leurs valeurs par défaut et leur vérification.
//! Chaque contrôle est une fonction libre, réutilisée par les setters du générateur
//! et par `valider()` pour un enregistrement chargé depuis un fichier.

use serde::{Deserialize, Serialize};

use super::operateur::Operateur;
use crate::erreur::ErreurConfig;

pub const LONGUEUR_DEFAUT: u32 = 3;

pub const MIN_NOMBRE_DEFAUT: i32 = 1;
pub const MAX_NOMBRE_DEFAUT: i32 = 100;

pub const MIN_DECIMALES_DEFAUT: i32 = 1;
pub const MAX_DECIMALES_DEFAUT: i32 = 2;

/// -1 : aucune contrainte sur les décimales du résultat.
pub const SANS_LIMITE: i32 = -1;

/// Garde-fou : tentatives avant d’abandonner (None = boucle non bornée).
pub const TENTATIVES_MAX_DEFAUT: u64 = 100_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigGenerateur {
    /// Tirage uniforme sur la liste : un doublon double le poids.
    pub operateurs: Vec<Operateur>,
    /// Nombre d’opérations après le premier opérande.
    pub longueur: u32,

    pub min_nombre: i32,
    pub max_nombre: i32,

    // -1/-1 : pas d’arrondi des opérandes décimaux
    pub min_decimales: i32,
    pub max_decimales: i32,

    pub nombres_decimaux: bool,
    pub max_decimales_resultat: i32,
    pub parentheses: bool,

    pub graine: Option<i64>,
    pub tentatives_max: Option<u64>,
}

impl Default for ConfigGenerateur {
    fn default() -> Self {
        Self {
            operateurs: Operateur::TOUS.to_vec(),
            longueur: LONGUEUR_DEFAUT,
            min_nombre: MIN_NOMBRE_DEFAUT,
            max_nombre: MAX_NOMBRE_DEFAUT,
            min_decimales: MIN_DECIMALES_DEFAUT,
            max_decimales: MAX_DECIMALES_DEFAUT,
            nombres_decimaux: false,
            max_decimales_resultat: SANS_LIMITE,
            parentheses: true,
            graine: None,
            tentatives_max: Some(TENTATIVES_MAX_DEFAUT),
        }
    }
}

impl ConfigGenerateur {
    /// Vérifie tous les réglages, dans l’ordre des setters.
    pub fn valider(&self) -> Result<(), ErreurConfig> {
        verifier_operateurs(&self.operateurs)?;
        verifier_bornes(self.min_nombre, self.max_nombre)?;
        verifier_bornes_decimales(self.min_decimales, self.max_decimales)?;
        verifier_max_decimales_resultat(self.max_decimales_resultat)?;
        verifier_tentatives_max(self.tentatives_max)
    }

    /// Division seule + bornes réduites à {0} : aucune opérande droite sûre.
    pub fn est_infaisable(&self) -> bool {
        self.operateurs.iter().all(|op| *op == Operateur::Division)
            && self.min_nombre == 0
            && self.max_nombre == 0
    }
}

/* ------------------------ Contrôles ------------------------ */

pub fn verifier_operateurs(operateurs: &[Operateur]) -> Result<(), ErreurConfig> {
    if operateurs.is_empty() {
        return Err(ErreurConfig::OperateursVides);
    }
    Ok(())
}

pub fn verifier_bornes(min: i32, max: i32) -> Result<(), ErreurConfig> {
    if max < min {
        return Err(ErreurConfig::BornesInversees { min, max });
    }
    Ok(())
}

pub fn verifier_bornes_decimales(min: i32, max: i32) -> Result<(), ErreurConfig> {
    if max < min {
        return Err(ErreurConfig::BornesDecimalesInversees { min, max });
    }
    if (min == -1) != (max == -1) {
        return Err(ErreurConfig::BornesDecimalesMelangees { min, max });
    }
    if min < -1 || max < -1 {
        return Err(ErreurConfig::BornesDecimalesHorsDomaine { min, max });
    }
    Ok(())
}

pub fn verifier_max_decimales_resultat(max: i32) -> Result<(), ErreurConfig> {
    if max < SANS_LIMITE {
        return Err(ErreurConfig::MaxDecimalesResultatInvalide(max));
    }
    Ok(())
}

pub fn verifier_longueur_aleatoire(min: u32, max: u32) -> Result<(), ErreurConfig> {
    if max < min {
        return Err(ErreurConfig::LongueurAleatoireInversee { min, max });
    }
    if min < 1 {
        return Err(ErreurConfig::LongueurAleatoireTropPetite { min, max });
    }
    // tirage sur [0, max - min] par un flux 31 bits
    if max - min >= i32::MAX as u32 {
        return Err(ErreurConfig::LongueurAleatoireTropLarge { min, max });
    }
    Ok(())
}

pub fn verifier_tentatives_max(tentatives: Option<u64>) -> Result<(), ErreurConfig> {
    if tentatives == Some(0) {
        return Err(ErreurConfig::TentativesMaxNulle);
    }
    Ok(())
}
