//! src/app/etat.rs
//!
//! État de session REPL (sans I/O).
//!
//! Rôle : contenir les réglages de la session (invite, démarche) et les
//! compteurs, et traduire le résultat du noyau en lignes de sortie.
//! Aucune lecture/écriture ici.

use crate::noyau::{calculer_avec_demarche, Demarche};

/// Invite par défaut, réaffichée après chaque réponse.
pub const INVITE_DEFAUT: &str = "? ";

#[derive(Clone, Debug)]
pub struct SessionCalc {
    // --- réglages ---
    pub invite: String,
    pub avec_demarche: bool,

    // --- compteurs ---
    pub evaluations: usize,
    pub echecs: usize,
}

impl Default for SessionCalc {
    fn default() -> Self {
        Self {
            invite: INVITE_DEFAUT.to_string(),
            avec_demarche: false,
            evaluations: 0,
            echecs: 0,
        }
    }
}

impl SessionCalc {
    pub fn new(invite: impl Into<String>, avec_demarche: bool) -> Self {
        Self {
            invite: invite.into(),
            avec_demarche,
            ..Default::default()
        }
    }

    /// Évalue une ligne (déjà lue) et retourne les lignes à afficher.
    /// - succès : "= <résultat>" (+ démarche si demandée)
    /// - échec  : "! <message>"
    pub fn evaluer_ligne(&mut self, ligne: &str) -> Vec<String> {
        let expr = ligne.trim();
        self.evaluations += 1;

        match calculer_avec_demarche(expr) {
            Ok((resultat, d)) => {
                let mut out = vec![format!("= {resultat}")];
                if self.avec_demarche {
                    out.extend(lignes_demarche(&d));
                }
                out
            }
            Err(e) => {
                self.echecs += 1;
                tracing::debug!("échec sur {expr:?}: {e:?}");
                vec![format!("! {e}")]
            }
        }
    }

    /// Au moins un échec depuis le début de la session (code de sortie du mode direct).
    pub fn a_echoue(&self) -> bool {
        self.echecs > 0
    }
}

fn lignes_demarche(d: &Demarche) -> [String; 2] {
    [format!("  jetons : {}", d.jetons), format!("  rpn    : {}", d.rpn)]
}
