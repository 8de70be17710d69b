// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau (et des fonctions appelantes).
// Une erreur = une valeur, jamais un panic.

use thiserror::Error;

use super::fonctions::FonctionScientifique;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// `)` sans `(` correspondante, ou `(` jamais refermée.
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("division par zéro")]
    DivisionParZero,

    /// Opérandes manquants, ou pile finale qui ne contient pas exactement une valeur.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Uniquement en lexique strict.
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// L’affichage ne se lit pas comme un nombre (fonctions / mémoire).
    #[error("entrée numérique invalide: {0:?}")]
    EntreeNumeriqueInvalide(String),

    #[error("argument hors domaine pour {0}")]
    HorsDomaine(FonctionScientifique),
}
