// src/app.rs
//
// Calculatrice mixte — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter SessionCalc
//
// La boucle ligne à ligne (vue.rs) est générique sur BufRead/Write :
// stdin/stdout dans le binaire, Cursor/Vec<u8> dans les tests.

pub mod etat;
pub mod vue;

pub use etat::SessionCalc;
