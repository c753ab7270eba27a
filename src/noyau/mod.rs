//! Noyau exact Q-pur
//!
//! Évaluateur arithmétique des expressions générées.
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (littéraux décimaux exacts)
//! - rpn.rs      : shunting-yard + évaluation itérative de la RPN
//! - decimal.rs  : lecture DECIMAL128 + comptage des décimales
//! - eval.rs     : pipeline complet

pub mod decimal;
pub mod eval;
pub mod jetons;
pub mod rpn;


// API publique minimale
pub use decimal::{decimal128, decimales, Decimal128};
pub use eval::eval_expression;
