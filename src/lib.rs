//! Générateur d’expressions arithmétiques
//!
//! Produit des expressions aléatoires (+, -, ×, ÷) sur des opérandes bornées,
//! avec parenthèses facultatives, et les évalue en rationnels exacts.
//!
//! Organisation :
//! - erreur.rs    : erreurs typées (config, génération, évaluation)
//! - generateur/  : réglages, flux aléatoires, construction, boucle de rejet
//! - noyau/       : évaluateur exact + lecture DECIMAL128
//!
//! Exemple :
//! ```
//! use generateur_expressions::GenerateurExpressions;
//!
//! let mut g = GenerateurExpressions::new();
//! g.set_graine(42);
//! let e = g.generate().unwrap();
//! assert_eq!(e.texte(), "89 × 77 × 99 - 50");
//! assert_eq!(e.solution_decimale().to_string(), "678397");
//! ```

pub mod erreur;
pub mod generateur;
pub mod noyau;

pub use erreur::{ErreurConfig, ErreurEval, ErreurGeneration};
pub use generateur::{ConfigGenerateur, ExpressionGeneree, GenerateurExpressions, Operateur};
pub use noyau::eval_expression;
