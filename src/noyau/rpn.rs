// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - pas de parenthèses, pas de moins unaire
// - opérande : sortie directe ; interdit juste après une autre opérande
// - opérateur : doit suivre une opérande ; dépile tant que la précédence du
//   sommet est >= (associativité à gauche : on dépile aussi à égalité)
// - fin : le dernier jeton doit être une opérande (sauf entrée vide)

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{format_tokens, Operateur, Tok};

/// Convertit une suite de jetons infixes en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [1, +, 2, *, 3]
///   rpn:    [1, 2, 3, *, +]
///
/// Une entrée vide donne une RPN vide ; c’est l’évaluation qui la refuse.
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    // “valeur” = le jeton précédent était une opérande
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Operande(_) => {
                if prev_was_value {
                    return Err(ErreurCalcul::SyntaxeArithmetique);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Op(op) => {
                if !prev_was_value {
                    return Err(ErreurCalcul::SyntaxeArithmetique);
                }

                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(Tok::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(op);
                prev_was_value = false;
            }
        }
    }

    // "1 +" : opérateur sans opérande à droite
    if !tokens.is_empty() && !prev_was_value {
        return Err(ErreurCalcul::SyntaxeArithmetique);
    }

    // vide la pile ops (sommet d’abord)
    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    tracing::trace!("rpn: {}", format_tokens(&out));
    Ok(out)
}
