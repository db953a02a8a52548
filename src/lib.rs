//! Calculatrice de nombres mixtes — bibliothèque
//!
//! Évalue des expressions infixes (+ - * /) sur des nombres, fractions `a/b`
//! et nombres mixtes `i_a/b`, et rend le résultat en forme mixte canonique.

pub mod app;
pub mod noyau;

pub use noyau::{calculer, calculer_avec_demarche, normaliser_operande, Demarche, ErreurCalcul};
