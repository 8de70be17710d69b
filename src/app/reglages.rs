//! src/app/reglages.rs
//!
//! Réglages de la calculatrice (lexique + taille de l’historique).
//! Valeurs par défaut ici ; la ligne de commande (main.rs) peut les surcharger.

use crate::noyau::Lexique;

/// Taille d’historique par défaut.
pub const HISTORIQUE_MAX_DEFAUT: usize = 1000;

/// Garde-fou : on borne l’historique (anti-abus mémoire).
pub const HISTORIQUE_MAX_BORNE: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub lexique: Lexique,
    historique_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            lexique: Lexique::Permissif,
            historique_max: HISTORIQUE_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn historique_max(&self) -> usize {
        self.historique_max
    }

    /// Borné à [1, HISTORIQUE_MAX_BORNE].
    pub fn set_historique_max(&mut self, n: usize) {
        self.historique_max = n.clamp(1, HISTORIQUE_MAX_BORNE);
    }
}
