// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer sur une pile de rationnels (sans arbre, sans récursion)
//
// Règles:
// - + - * / binaires, associatifs à gauche, * / avant + -
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, il devient Neg (préfixe)
//    - Neg lie plus fort que tout opérateur binaire : "2 * -3" => "2 3 neg *"

use num_rational::BigRational;
use num_traits::Zero;

use super::jetons::Tok;
use crate::erreur::ErreurEval;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Minus, Num(3), RPar]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' ; une pile vidée sans '(' = parenthèse orpheline
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::ParentheseInattendue);
                }
                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler, il n’a pas d’opérande gauche
                ops.push(Tok::Neg);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < p_tok {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de valeurs exactes.
/// Itératif : la profondeur d’imbrication ne consomme pas la pile d’appel.
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurEval> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn.iter() {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ParentheseInattendue),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
