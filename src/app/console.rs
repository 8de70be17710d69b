// src/app/console.rs
//
// Console (terminal) — remplace l’ancienne vue graphique
// -----------------------------------------------------
// Une ligne = une action :
// - commande connue (c, back, sin/cos/tan/sqrt, m+/m-/mr/mc, hist, rpn, quit)
// - sinon : texte saisi touche par touche, puis "="
// Après chaque ligne, l’affichage courant est écrit.
// Une ligne qui commence par un opérateur ('-' compris) continue le résultat précédent :
// "-5+3" après "14" donne "14-5+3". Faire "c" avant pour repartir de zéro.

use std::io::{self, BufRead, Write};

use crate::noyau::FonctionScientifique;

use super::etat::{Calculatrice, OperationMemoire};

/// Ce qu’une ligne demande à la boucle.
#[derive(Debug, PartialEq, Eq)]
pub enum Suite {
    Continuer(Vec<String>),
    Quitter,
}

/// Interprète une ligne et renvoie les lignes à écrire.
pub fn interpreter_ligne(calc: &mut Calculatrice, ligne: &str) -> Suite {
    let ligne = ligne.trim();
    let commande = ligne.to_ascii_lowercase();

    match commande.as_str() {
        "" => return Suite::Continuer(Vec::new()),
        "quit" | "exit" | "q" => return Suite::Quitter,
        "c" => calc.effacer(),
        "back" => calc.effacer_dernier(),
        "=" => {
            // erreur déjà visible à l’affichage
            let _ = calc.calculer();
        }
        "hist" => {
            let mut out: Vec<String> = calc.historique().to_vec();
            if out.is_empty() {
                out.push("(historique vide)".to_string());
            }
            return Suite::Continuer(out);
        }
        "hist clear" => {
            calc.vider_historique();
            return Suite::Continuer(vec!["(historique vidé)".to_string()]);
        }
        "rpn" => {
            let out = match calc.derniere_demarche() {
                Some(d) => vec![format!("jetons: {}", d.jetons), format!("rpn:    {}", d.rpn)],
                None => vec!["(aucun calcul)".to_string()],
            };
            return Suite::Continuer(out);
        }
        _ => {
            if let Ok(f) = commande.parse::<FonctionScientifique>() {
                let _ = calc.fonction(f);
            } else if let Ok(op) = commande.parse::<OperationMemoire>() {
                let _ = calc.operation_memoire(op);
            } else {
                calc.saisir_texte(ligne);
                let _ = calc.calculer();
            }
        }
    }

    Suite::Continuer(vec![calc.affichage().to_string()])
}

/// Boucle principale : lit `entree` jusqu’à EOF ou "quit".
pub fn executer<R: BufRead, W: Write>(
    calc: &mut Calculatrice,
    entree: R,
    mut sortie: W,
) -> io::Result<()> {
    for ligne in entree.lines() {
        let ligne = ligne?;
        match interpreter_ligne(calc, &ligne) {
            Suite::Quitter => break,
            Suite::Continuer(lignes) => {
                for l in lignes {
                    writeln!(sortie, "{l}")?;
                }
            }
        }
        sortie.flush()?;
    }
    Ok(())
}
