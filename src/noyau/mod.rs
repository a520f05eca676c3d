//! Noyau de la calculatrice à programme
//!
//! Organisation interne :
//! - operations.rs : table symbole -> opération (constante, unaire, binaire…)
//! - evaluateur.rs : machine à états (accumulateur, attente, journal, variables)
//! - programme.rs  : journal du programme + forme JSON
//! - format.rs     : affichage décimal des nombres (arrondi exact)
//! - erreurs.rs    : erreurs consultatives + erreurs de programme

pub mod erreurs;
pub mod evaluateur;
pub mod format;
pub mod operations;
pub mod programme;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use evaluateur::Evaluateur;
pub use format::FormatNombre;
