// src/noyau/programme.rs
//
// Journal du programme : suite ordonnée d’entrées (nombre | symbole).
// Seul état rejouable de l’évaluateur. Forme JSON : [3.0, "+", "M", "="].

use serde::{Deserialize, Serialize};

use super::erreurs::ErreurProgramme;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entree {
    Operande(f64),
    /// Opération, variable, ou symbole inconnu (conservé tel quel).
    Symbole(String),
}

impl From<f64> for Entree {
    fn from(v: f64) -> Self {
        Entree::Operande(v)
    }
}

impl From<&str> for Entree {
    fn from(s: &str) -> Self {
        Entree::Symbole(s.to_string())
    }
}

pub fn programme_vers_json(programme: &[Entree]) -> Result<String, ErreurProgramme> {
    // serde_json écrirait `null` pour NaN/∞ : illisible au retour, on refuse tôt.
    for (position, entree) in programme.iter().enumerate() {
        if let Entree::Operande(valeur) = entree {
            if !valeur.is_finite() {
                return Err(ErreurProgramme::OperandeNonFini {
                    position,
                    valeur: *valeur,
                });
            }
        }
    }
    Ok(serde_json::to_string(programme)?)
}

pub fn programme_depuis_json(json: &str) -> Result<Vec<Entree>, ErreurProgramme> {
    Ok(serde_json::from_str(json)?)
}
