//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> f64
//!
//! Sans état : tout est créé puis jeté à chaque appel (réentrant, appelable
//! depuis plusieurs threads sans synchronisation).

use num_traits::Zero;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize_avec, Lexique, Operateur, Tok};
use super::rpn::to_rpn;

/// Trace d’une évaluation réussie (jetons, RPN, valeur).
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub valeur: f64,
}

/// API publique : évalue une expression (lexique permissif).
pub fn evaluate(expression: &str) -> Result<f64, ErreurCalcul> {
    evaluate_detail(expression, Lexique::Permissif).map(|d| d.valeur)
}

/// Comme `evaluate`, en gardant la démarche (texte des jetons et de la RPN).
pub fn evaluate_detail(expression: &str, lexique: Lexique) -> Result<Demarche, ErreurCalcul> {
    let resultat = pipeline(expression, lexique);
    if let Err(e) = &resultat {
        log::warn!("évaluation de {expression:?} impossible: {e}");
    }
    resultat
}

fn pipeline(expression: &str, lexique: Lexique) -> Result<Demarche, ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize_avec(expression, lexique)?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    log::debug!("rpn: {rpn_txt}");

    // 3) Valeur
    let valeur = eval_rpn(&rpn)?;

    Ok(Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        valeur,
    })
}

/// Évalue une suite RPN avec une pile de valeurs.
///
/// - opérande droit dépilé en premier, gauche ensuite
/// - moins de deux valeurs pour un opérateur => expression invalide
/// - pile finale != 1 valeur (vide comprise) => expression invalide
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(op) => {
                let b = pile.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let r = appliquer(op, a, b)?;
                log::trace!("{a} {} {b} = {r}", op.symbole());
                pile.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Minus => a - b,
        Operateur::Star => a * b,
        Operateur::Slash => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        // powf : 0^-1 => inf, (-8)^(1/3) => NaN ; pas d’erreur
        Operateur::Caret => a.powf(b),
    })
}
