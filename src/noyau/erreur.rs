// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// Chaque étape du pipeline (jetons -> RPN -> évaluation -> format) échoue
// avec UNE de ces variantes, jamais avec une String libre.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Jeton non opérateur qui n’est ni nombre, ni fraction, ni nombre mixte.
    #[error("opérande invalide: {0}")]
    OperandeInvalide(String),

    /// Jeton purement symbolique qui n’est pas un de + - * /.
    #[error("opérateur inconnu: {0}")]
    OperateurInconnu(String),

    /// Grammaire infixe violée (deux opérandes ou deux opérateurs de suite, etc.).
    #[error("erreur de syntaxe arithmétique")]
    SyntaxeArithmetique,

    /// Opérateur rencontré en postfixe avec moins de deux valeurs sur la pile.
    #[error("erreur d’évaluation arithmétique")]
    EvaluationArithmetique,

    /// Après réduction, la pile ne contient pas exactement une valeur.
    #[error("erreur de syntaxe postfixe")]
    SyntaxePostfixe,

    #[error("division par zéro")]
    DivisionParZero,

    /// Numérateur ou dénominateur non fini (débordement f64).
    #[error("dépassement de capacité")]
    Depassement,
}

pub type Resultat<T> = Result<T, ErreurCalcul>;
