//! Noyau d’évaluation (flottants 64 bits, sans état)
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (permissive ou stricte)
//! - rpn.rs       : shunting-yard -> RPN
//! - eval.rs      : pipeline complet + évaluation RPN
//! - format.rs    : affichage entier / décimal d’un résultat
//! - fonctions.rs : sin/cos/tan (degrés) + sqrt, pour la couche appelante
//! - erreur.rs    : taxonomie d’erreurs

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, evaluate_detail, Demarche};
pub use fonctions::{lire_nombre, FonctionScientifique};
pub use format::format_resultat;
pub use jetons::Lexique;
