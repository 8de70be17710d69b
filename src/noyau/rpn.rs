// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans parenthèses
//
// Règles:
// - Num : sortie directe
// - '(' : empilée ; ')' : dépile jusqu’à '(' (qui est jetée)
// - Opérateur : dépile tant que précédence(sommet) >= précédence(op)
//
// NOTE:
// - Le `>=` rend TOUS les opérateurs associatifs à gauche, '^' compris :
//   "2^3^2" => (2^3)^2 = 64. C’est le comportement historique, conservé tel quel.

use super::erreur::ErreurCalcul;
use super::jetons::{Operateur, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(top) => out.push(top),
                    // pile épuisée sans '(' : on arrête tout de suite
                    None => return Err(ErreurCalcul::ParenthesesNonAppariees),
                }
            },

            Tok::Op(op) => {
                while let Some(&Tok::Op(top)) = ops.last() {
                    if !doit_depiler(top, op) {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(ErreurCalcul::ParenthesesNonAppariees);
        }
        out.push(top);
    }

    Ok(out)
}

/// Égalité de précédence => on dépile (gauche d’abord).
fn doit_depiler(sommet: Operateur, entrant: Operateur) -> bool {
    sommet.precedence() >= entrant.precedence()
}
