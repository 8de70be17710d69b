//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue).
//!
//! Rôle : contenir l’affichage, le registre mémoire, l’historique, et offrir
//! les actions des touches (chiffres, =, C, ←, sin/cos/tan/sqrt, M+/M-/MR/MC).
//!
//! Contrats :
//! - L’évaluation passe TOUJOURS par le noyau (sans état) ; l’état vit ici.
//! - Une erreur n’entre jamais dans l’historique.
//! - Après une erreur, la touche suivante repart d’un affichage propre.

use std::str::FromStr;

use crate::noyau::{
    evaluate_detail, format_resultat, lire_nombre, Demarche, ErreurCalcul, FonctionScientifique,
};

use super::reglages::Reglages;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMemoire {
    /// M+
    Ajouter,
    /// M-
    Soustraire,
    /// MR
    Rappeler,
    /// MC
    Effacer,
}

impl FromStr for OperationMemoire {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M+" => Ok(Self::Ajouter),
            "M-" => Ok(Self::Soustraire),
            "MR" => Ok(Self::Rappeler),
            "MC" => Ok(Self::Effacer),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    // --- affichage ---
    affichage: String,
    en_erreur: bool,
    // vrai juste après "=" : un chiffre démarre une nouvelle saisie
    dernier_egal: bool,

    // --- registres ---
    memoire: f64,
    historique: Vec<String>,
    derniere_demarche: Option<Demarche>,

    reglages: Reglages,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl Calculatrice {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            affichage: "0".to_string(),
            en_erreur: false,
            dernier_egal: false,
            memoire: 0.0,
            historique: Vec::new(),
            derniere_demarche: None,
            reglages,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn en_erreur(&self) -> bool {
        self.en_erreur
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Démarche du dernier "=" réussi.
    pub fn derniere_demarche(&self) -> Option<&Demarche> {
        self.derniere_demarche.as_ref()
    }

    /* ------------------------ Saisie ------------------------ */

    /// Une touche : chiffre(s), ".", "00", opérateur ou parenthèse.
    pub fn saisir(&mut self, touche: &str) {
        let nouvelle_saisie = touche == "." || touche == "(" || est_nombre(touche);

        if self.dernier_egal && nouvelle_saisie {
            self.affichage = "0".to_string();
            self.dernier_egal = false;
        }
        // un opérateur continue à partir du résultat
        if touche.chars().all(|c| "+-*/^".contains(c)) {
            self.dernier_egal = false;
        }

        if self.en_erreur {
            self.affichage = touche.to_string();
            self.en_erreur = false;
        } else if self.affichage == "0" && (touche == "(" || est_nombre(touche)) {
            // "00" sur "0" reste "0"
            if touche.bytes().all(|b| b == b'0') {
                return;
            }
            self.affichage = touche.to_string();
        } else {
            self.affichage.push_str(touche);
        }
    }

    /// Saisie caractère par caractère (espaces ignorés).
    pub fn saisir_texte(&mut self, texte: &str) {
        let mut buf = [0u8; 4];
        for c in texte.chars().filter(|c| !c.is_whitespace()) {
            self.saisir(c.encode_utf8(&mut buf));
        }
    }

    /// ← : retire le dernier caractère ; plus rien => "0".
    pub fn effacer_dernier(&mut self) {
        self.dernier_egal = false;
        if self.en_erreur || self.affichage.chars().count() <= 1 {
            self.effacer();
            return;
        }
        self.affichage.pop();
    }

    /// C : remet l’affichage à "0" (mémoire et historique intacts).
    pub fn effacer(&mut self) {
        self.affichage = "0".to_string();
        self.en_erreur = false;
        self.dernier_egal = false;
    }

    /* ------------------------ Calcul ------------------------ */

    /// "=" : évalue l’affichage. Succès => résultat affiché + ligne d’historique.
    /// Sur un affichage en erreur : rien n’est évalué, l’erreur reste affichée.
    pub fn calculer(&mut self) -> Result<f64, ErreurCalcul> {
        if self.en_erreur {
            self.dernier_egal = true;
            return Err(ErreurCalcul::ExpressionInvalide);
        }
        let expression = self.affichage.clone();

        let resultat = match evaluate_detail(&expression, self.reglages.lexique) {
            Ok(demarche) => {
                let v = demarche.valeur;
                let texte = format_resultat(v);
                self.ajouter_historique(format!("{expression} = {texte}"));
                self.affichage = texte;
                self.en_erreur = false;
                self.derniere_demarche = Some(demarche);
                Ok(v)
            }
            Err(e) => {
                self.set_erreur(&e);
                Err(e)
            }
        };

        self.dernier_egal = true;
        resultat
    }

    /// sin/cos/tan (degrés) ou sqrt appliquée à la valeur affichée.
    pub fn fonction(&mut self, f: FonctionScientifique) -> Result<f64, ErreurCalcul> {
        self.dernier_egal = false;
        if self.en_erreur {
            return Err(ErreurCalcul::ExpressionInvalide);
        }
        let texte = self.affichage.clone();

        let resultat = lire_nombre(&texte).and_then(|x| f.appliquer(x));
        match &resultat {
            Ok(v) => {
                let sortie = format_resultat(*v);
                self.ajouter_historique(format!("{}({texte}) = {sortie}", f.nom()));
                self.affichage = sortie;
                self.en_erreur = false;
            }
            Err(e) => self.set_erreur(e),
        }
        resultat
    }

    pub fn operation_memoire(&mut self, op: OperationMemoire) -> Result<(), ErreurCalcul> {
        self.dernier_egal = false;
        match op {
            OperationMemoire::Ajouter | OperationMemoire::Soustraire => {
                if self.en_erreur {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                let x = match lire_nombre(&self.affichage) {
                    Ok(x) => x,
                    Err(e) => {
                        self.set_erreur(&e);
                        return Err(e);
                    }
                };
                if op == OperationMemoire::Ajouter {
                    self.memoire += x;
                } else {
                    self.memoire -= x;
                }
            }
            OperationMemoire::Rappeler => {
                self.affichage = format_resultat(self.memoire);
                self.en_erreur = false;
            }
            OperationMemoire::Effacer => self.memoire = 0.0,
        }
        log::debug!("mémoire: {}", self.memoire);
        Ok(())
    }

    /* ------------------------ Historique ------------------------ */

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    /// Une entrée (pour "Copier").
    pub fn entree_historique(&self, index: usize) -> Option<&str> {
        self.historique.get(index).map(String::as_str)
    }

    /// Tout l’historique, une ligne par entrée (pour "Tout copier").
    pub fn historique_texte(&self) -> String {
        self.historique.join("\n")
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    fn ajouter_historique(&mut self, ligne: String) {
        log::info!("{ligne}");
        self.historique.push(ligne);
        let max = self.reglages.historique_max();
        if self.historique.len() > max {
            let surplus = self.historique.len() - max;
            self.historique.drain(..surplus);
        }
    }

    /// Utilitaire : placer une erreur à l’affichage.
    fn set_erreur(&mut self, e: &ErreurCalcul) {
        self.affichage = format!("Erreur : {e}");
        self.en_erreur = true;
    }
}

/// Chiffres ASCII seulement (couvre "00").
fn est_nombre(touche: &str) -> bool {
    !touche.is_empty() && touche.bytes().all(|b| b.is_ascii_digit())
}
