//! Noyau flottant des nombres mixtes
//!
//! Organisation interne :
//! - erreur.rs   : taxonomie des échecs (une variante par étape)
//! - jetons.rs   : tokenisation + validation des opérandes
//! - rpn.rs      : shunting-yard (infixe -> postfixe)
//! - paire.rs    : paire rationnelle f64 + opérations
//! - format.rs   : affichage canonique en nombre mixte
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod paire;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, Resultat};
pub use eval::{calculer, calculer_avec_demarche, normaliser_operande, Demarche};
