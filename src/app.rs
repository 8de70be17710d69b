// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (état, réglages, console, journal)
// - Ré-exporter Calculatrice (pour main.rs: use calculatrice_rpn::app::Calculatrice;)
//
// Important:
// - Aucun calcul ici : tout passe par crate::noyau.

pub mod console;
pub mod etat;
pub mod journal;
pub mod reglages;

// Ré-export pratique
pub use etat::{Calculatrice, OperationMemoire};
pub use reglages::Reglages;
