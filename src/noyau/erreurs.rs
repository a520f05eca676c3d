// src/noyau/erreurs.rs
//
// Erreurs du noyau.
// - ErreurCalcul : consultative (jamais fatale), posée par un validateur
// - ErreurProgramme : (dé)sérialisation du journal

use thiserror::Error;

/// Erreur consultative attachée au résultat.
///
/// Le noyau calcule toujours l’accumulateur (il peut devenir NaN ou infini) ;
/// l’erreur sert seulement à l’affichage. Le texte est celui montré à l’écran.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("Division par zéro")]
    DivisionParZero,

    #[error("Hors domaine")]
    HorsDomaine,

    #[error("Argument négatif")]
    ArgumentNegatif,
}

#[derive(Error, Debug)]
pub enum ErreurProgramme {
    /// JSON mal formé ou entrée ni nombre ni texte.
    #[error("programme illisible: {0}")]
    Json(#[from] serde_json::Error),

    /// NaN / ±∞ : pas de représentation JSON.
    #[error("opérande non fini à la position {position}: {valeur}")]
    OperandeNonFini { position: usize, valeur: f64 },
}
