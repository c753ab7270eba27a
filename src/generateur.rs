// src/generateur.rs
//
// Générateur d’expressions, module racine
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (aléa, opérateurs, config, construction, expression, état)
// - Ré-exporter GenerateurExpressions et ses types
// - Fournir generate() : boucle de rejet construction -> évaluation -> contrôle
//
// Important:
// - Une erreur d’évaluation d’un candidat n’est jamais remontée : on retire.
// - Le budget de tentatives (config.tentatives_max) borne la boucle ; None = non bornée.

pub mod alea;
pub mod config;
pub mod construction;
pub mod etat;
pub mod expression;
pub mod operateur;

#[cfg(test)]
mod tests_proprietes;

pub use config::ConfigGenerateur;
pub use etat::GenerateurExpressions;
pub use expression::{vers_affichage, vers_canonique, ExpressionGeneree};
pub use operateur::Operateur;

use tracing::{debug, warn};

use crate::erreur::ErreurGeneration;
use crate::noyau::{decimales, eval_expression};
use construction::construire;

impl GenerateurExpressions {
    /// Génère une expression selon les réglages courants.
    ///
    /// Erreurs :
    /// - `Infaisable` avant toute tentative (division seule, bornes {0})
    /// - `TentativesEpuisees` si le budget est atteint sans candidat acceptable
    pub fn generate(&mut self) -> Result<ExpressionGeneree, ErreurGeneration> {
        if self.config.est_infaisable() {
            return Err(ErreurGeneration::Infaisable);
        }

        let max_decimales = usize::try_from(self.config.max_decimales_resultat).ok();
        let mut tentative: u64 = 0;

        loop {
            if let Some(max) = self.config.tentatives_max {
                if tentative >= max {
                    warn!(tentatives = max, "aucun candidat acceptable");
                    return Err(ErreurGeneration::TentativesEpuisees { tentatives: max });
                }
            }
            tentative += 1;

            let texte = construire(&self.config, &mut self.alea);

            let solution = match eval_expression(&vers_canonique(&texte)) {
                Ok(v) => v,
                Err(e) => {
                    debug!(tentative, %texte, erreur = %e, "candidat rejeté");
                    continue;
                }
            };

            // -1 => None : pas de contrainte
            if let Some(max) = max_decimales {
                let n = decimales(&solution);
                if n > max {
                    debug!(tentative, %texte, decimales = n, max, "trop de décimales");
                    continue;
                }
            }

            return Ok(ExpressionGeneree::new(texte, solution));
        }
    }
}
