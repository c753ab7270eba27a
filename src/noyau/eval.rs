//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> valeur exacte (pile de rationnels)
//!
//! Le texte attendu est la forme canonique (`*` et `/` ASCII).

use num_rational::BigRational;
use tracing::trace;

use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use crate::erreur::ErreurEval;

/// API publique : évalue une expression canonique en rationnel exact.
pub fn eval_expression(expr_str: &str) -> Result<BigRational, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "expression lue"
    );

    // 3) Valeur
    eval_rpn(&rpn)
}
