// src/noyau/fonctions.rs
//
// Fonctions scientifiques à un argument (sin, cos, tan en degrés ; sqrt).
// Appliquées par la couche appelante sur la valeur affichée, jamais par le parseur.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionScientifique {
    Sinus,
    Cosinus,
    Tangente,
    RacineCarree,
}

impl FonctionScientifique {
    pub const TOUTES: [Self; 4] = [Self::Sinus, Self::Cosinus, Self::Tangente, Self::RacineCarree];

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sinus => "sin",
            Self::Cosinus => "cos",
            Self::Tangente => "tan",
            Self::RacineCarree => "sqrt",
        }
    }

    /// Applique la fonction.
    /// - sin/cos/tan : `x` en degrés ; x infini => hors domaine
    /// - sqrt : x < 0 => hors domaine
    ///
    /// NaN traverse sans erreur (comme en virgule flottante).
    pub fn appliquer(self, x: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Self::RacineCarree => {
                if x < 0.0 {
                    return Err(ErreurCalcul::HorsDomaine(self));
                }
                Ok(x.sqrt())
            }
            Self::Sinus | Self::Cosinus | Self::Tangente => {
                if x.is_infinite() {
                    return Err(ErreurCalcul::HorsDomaine(self));
                }
                let rad = x.to_radians();
                Ok(match self {
                    Self::Sinus => rad.sin(),
                    Self::Cosinus => rad.cos(),
                    _ => rad.tan(),
                })
            }
        }
    }
}

impl fmt::Display for FonctionScientifique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// Lecture d’un nom de fonction (console seulement ; la dispatch reste un `match`).
impl FromStr for FonctionScientifique {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::TOUTES
            .into_iter()
            .find(|f| f.nom().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Lit le texte affiché comme un nombre (espaces autour tolérés).
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurCalcul> {
    texte
        .trim()
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::EntreeNumeriqueInvalide(texte.to_string()))
}
