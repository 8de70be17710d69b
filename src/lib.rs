//! Calculatrice RPN
//!
//! - `noyau` : évaluation sans état (jetons -> shunting-yard -> RPN -> f64)
//! - `app`   : couche appelante (affichage, mémoire, historique, console)

pub mod app;
pub mod noyau;

// API publique minimale
pub use noyau::{evaluate, format_resultat, ErreurCalcul};
