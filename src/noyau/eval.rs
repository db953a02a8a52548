//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> réduction postfixe (paires flottantes) -> nombre mixte
//!
//! Chaque appel alloue ses propres piles : aucun état partagé entre deux calculs.

use super::erreur::{ErreurCalcul, Resultat};
use super::format::format_mixte;
use super::jetons::{classer_operande, format_tokens, tokenize, Forme, Operande, Tok};
use super::paire::PaireRationnelle;
use super::rpn::to_rpn;

/// Valeur sur la pile d’évaluation.
/// Une opérande reste brute tant qu’aucun opérateur ne l’a consommée :
/// c’est ce qui permet de rendre "2.5" tel quel.
#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Brut(Operande),
    Paire(PaireRationnelle),
}

impl Valeur {
    /// Normalise en paire (au premier usage par un opérateur).
    pub fn en_paire(&self) -> Resultat<PaireRationnelle> {
        match self {
            Valeur::Brut(o) => PaireRationnelle::depuis_operande(o),
            Valeur::Paire(p) => Ok(*p),
        }
    }

    /// Affichage final d’une valeur seule.
    /// Un nombre brut est rendu par son texte d’origine ; le reste passe par le format mixte.
    pub fn rendu(&self) -> Resultat<String> {
        match self {
            Valeur::Brut(Operande {
                texte,
                forme: Forme::Nombre(v),
            }) => {
                if !v.is_finite() {
                    return Err(ErreurCalcul::Depassement);
                }
                Ok(texte.clone())
            }
            _ => format_mixte(self.en_paire()?),
        }
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Réduit une suite postfixe à exactement une valeur.
pub fn evaluer_postfixe(rpn: &[Tok]) -> Resultat<Valeur> {
    let mut pile: Vec<Valeur> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Operande(o) => pile.push(Valeur::Brut(o.clone())),

            Tok::Op(op) => {
                let droite = pile.pop().ok_or(ErreurCalcul::EvaluationArithmetique)?;
                let gauche = pile.pop().ok_or(ErreurCalcul::EvaluationArithmetique)?;

                let r = gauche.en_paire()?.combiner(*op, droite.en_paire()?)?;
                pile.push(Valeur::Paire(r));
            }
        }
    }

    // vide (expression vide) ou plusieurs valeurs restantes
    if pile.len() != 1 {
        return Err(ErreurCalcul::SyntaxePostfixe);
    }
    pile.pop().ok_or(ErreurCalcul::SyntaxePostfixe)
}

/// API publique : évalue une expression infixe et retourne sa forme canonique.
pub fn calculer(expr_str: &str) -> Resultat<String> {
    calculer_avec_demarche(expr_str).map(|(resultat, _d)| resultat)
}

/// Comme `calculer`, avec en plus la démarche (jetons, RPN).
pub fn calculer_avec_demarche(expr_str: &str) -> Resultat<(String, Demarche)> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Réduction postfixe
    let valeur = evaluer_postfixe(&rpn)?;
    tracing::debug!("{expr_str:?} -> {valeur:?}");

    // 4) Rendu
    let resultat = valeur.rendu()?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((resultat, d))
}

/// Forme canonique d’une opérande isolée ("2/4" -> "1/2", "1_3/2" -> "2_1/2").
pub fn normaliser_operande(texte: &str) -> Resultat<String> {
    let o = classer_operande(texte.trim())?;
    Valeur::Brut(o).rendu()
}
