// src/app/vue.rs
//
// Vue texte (REPL) — une ligne lue, une réponse écrite
// ----------------------------------------------------
// Protocole :
// - affiche l’invite ("? " par défaut)
// - lit une ligne, l’évalue
// - écrit "= <résultat>" ou "! <message>", puis réaffiche l’invite
// - s’arrête proprement en fin de flux
//
// Note :
// - flush après l’invite : sans retour à la ligne, stdout ne se vide pas seul

use std::io::{self, BufRead, Write};

use super::etat::SessionCalc;

impl SessionCalc {
    /// Boucle REPL complète jusqu’à la fin de `entree`.
    pub fn boucle<R: BufRead, W: Write>(&mut self, mut entree: R, mut sortie: W) -> io::Result<()> {
        let mut ligne = String::new();

        loop {
            write!(sortie, "{}", self.invite)?;
            sortie.flush()?;

            ligne.clear();
            if entree.read_line(&mut ligne)? == 0 {
                // fin de flux : on termine la ligne d’invite
                writeln!(sortie)?;
                break;
            }

            for l in self.evaluer_ligne(&ligne) {
                writeln!(sortie, "{l}")?;
            }
        }

        tracing::info!(
            "session terminée : {} évaluation(s), {} échec(s)",
            self.evaluations,
            self.echecs
        );
        Ok(())
    }

    /// Évaluation directe (hors boucle) : écrit la réponse sans invite.
    pub fn une_fois<W: Write>(&mut self, expr: &str, mut sortie: W) -> io::Result<()> {
        for l in self.evaluer_ligne(expr) {
            writeln!(sortie, "{l}")?;
        }
        Ok(())
    }
}
