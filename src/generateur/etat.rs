//! src/generateur/etat.rs
//!
//! État du générateur : réglages + moteur aléatoire.
//!
//! Rôle : porter la configuration et les deux flux, et offrir les réglages
//! chaînables. Aucune génération ici (voir generateur.rs).
//!
//! Contrats :
//! - Chaque setter vérifie immédiatement ; un réglage refusé ne modifie rien.
//! - La graine réamorce les deux flux ; generate() ne réamorce jamais.
//! - Une instance n’est pas partageable entre threads sans verrou externe (`&mut self`).

use tracing::debug;

use super::alea::MoteurAlea;
use super::config::{
    verifier_bornes, verifier_bornes_decimales, verifier_longueur_aleatoire,
    verifier_max_decimales_resultat, verifier_operateurs, verifier_tentatives_max,
    ConfigGenerateur,
};
use super::operateur::Operateur;
use crate::erreur::ErreurConfig;

#[derive(Clone, Debug)]
pub struct GenerateurExpressions {
    pub(super) config: ConfigGenerateur,
    pub(super) alea: MoteurAlea,
}

impl Default for GenerateurExpressions {
    fn default() -> Self {
        Self {
            config: ConfigGenerateur::default(),
            alea: MoteurAlea::depuis_entropie(),
        }
    }
}

impl GenerateurExpressions {
    /// Réglages par défaut, graine aléatoire.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reprend un enregistrement complet (ex: chargé depuis un fichier).
    pub fn avec_config(config: ConfigGenerateur) -> Result<Self, ErreurConfig> {
        config.valider()?;
        let alea = match config.graine {
            Some(g) => MoteurAlea::new(g),
            None => MoteurAlea::depuis_entropie(),
        };
        Ok(Self { config, alea })
    }

    pub fn config(&self) -> &ConfigGenerateur {
        &self.config
    }

    /* ------------------------ Réglages ------------------------ */

    /// Opérateurs tirés uniformément ; un doublon augmente le poids.
    pub fn set_operateurs(&mut self, operateurs: Vec<Operateur>) -> Result<&mut Self, ErreurConfig> {
        verifier_operateurs(&operateurs)?;
        self.config.operateurs = operateurs;
        Ok(self)
    }

    /// Bornes inclusives des opérandes.
    pub fn set_bornes(&mut self, min: i32, max: i32) -> Result<&mut Self, ErreurConfig> {
        verifier_bornes(min, max)?;
        self.config.min_nombre = min;
        self.config.max_nombre = max;
        Ok(self)
    }

    /// Nombre d’opérations (0 : une seule opérande).
    pub fn set_longueur(&mut self, longueur: u32) -> &mut Self {
        self.config.longueur = longueur;
        self
    }

    /// Tire une longueur dans [min, max] maintenant, sur le flux de structure.
    pub fn set_longueur_aleatoire(&mut self, min: u32, max: u32) -> Result<&mut Self, ErreurConfig> {
        verifier_longueur_aleatoire(min, max)?;
        let longueur = min + self.alea.choix((max - min) as usize + 1) as u32;
        debug!(min, max, longueur, "longueur tirée");
        Ok(self.set_longueur(longueur))
    }

    /// Graine fixe : les deux flux deviennent reproductibles.
    pub fn set_graine(&mut self, graine: i64) -> &mut Self {
        self.config.graine = Some(graine);
        self.alea = MoteurAlea::new(graine);
        self
    }

    /// Retour à une graine aléatoire.
    pub fn retirer_graine(&mut self) -> &mut Self {
        self.config.graine = None;
        self.alea = MoteurAlea::depuis_entropie();
        self
    }

    pub fn utiliser_nombres_decimaux(&mut self, oui: bool) -> &mut Self {
        self.config.nombres_decimaux = oui;
        self
    }

    /// Sans effet si les nombres décimaux sont désactivés. (-1, -1) : pas d’arrondi.
    pub fn set_bornes_decimales(&mut self, min: i32, max: i32) -> Result<&mut Self, ErreurConfig> {
        verifier_bornes_decimales(min, max)?;
        self.config.min_decimales = min;
        self.config.max_decimales = max;
        Ok(self)
    }

    /// Décimales maximales du résultat final, -1 pour aucune limite.
    /// Plus la limite est basse, plus il faut de tentatives.
    pub fn set_max_decimales_resultat(&mut self, max: i32) -> Result<&mut Self, ErreurConfig> {
        verifier_max_decimales_resultat(max)?;
        self.config.max_decimales_resultat = max;
        Ok(self)
    }

    pub fn autoriser_parentheses(&mut self, oui: bool) -> &mut Self {
        self.config.parentheses = oui;
        self
    }

    /// None : boucle de rejet non bornée.
    pub fn set_tentatives_max(&mut self, max: Option<u64>) -> Result<&mut Self, ErreurConfig> {
        verifier_tentatives_max(max)?;
        self.config.tentatives_max = max;
        Ok(self)
    }
}
