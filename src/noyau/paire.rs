// src/noyau/paire.rs
//
// Paire rationnelle flottante (numérateur, dénominateur).
//
// Contrats:
// - f64 ordinaires, ni réduits ni forcément entiers ("2.0_2.0/3.0" est valide)
// - aucune réduction/arrondi pendant le calcul : les artefacts IEEE-754 font
//   partie du résultat observable
// - le dénominateur n’est vérifié qu’aux bords : conversion d’une opérande,
//   division par un numérateur nul, et format final

use num_traits::{One, Zero};

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::{Forme, Operande, Operateur};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaireRationnelle {
    pub num: f64,
    pub den: f64,
}

impl PaireRationnelle {
    pub fn new(num: f64, den: f64) -> Self {
        Self { num, den }
    }

    pub fn entier(v: f64) -> Self {
        Self::new(v, f64::one())
    }

    /// Opérande -> paire :
    /// - nombre        v     => (v, 1)
    /// - fraction      a/b   => (a, b)
    /// - nombre mixte  i_a/b => (signe(i) * (|i|*b + a), b)
    pub fn depuis_forme(forme: Forme) -> Resultat<Self> {
        let paire = match forme {
            Forme::Nombre(v) => Self::entier(v),
            Forme::Fraction { num, den } => Self::new(num, den),
            Forme::Mixte { entier, num, den } => {
                let signe = if entier < 0.0 { -1.0 } else { 1.0 };
                Self::new((entier.abs() * den + num) * signe, den)
            }
        };

        // 1/0 comme littéral : on refuse tout de suite (sinon inf/NaN en cascade)
        if paire.den.is_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(paire)
    }

    pub fn depuis_operande(o: &Operande) -> Resultat<Self> {
        Self::depuis_forme(o.forme)
    }

    /// Applique un opérateur binaire : self (gauche) op droite.
    pub fn combiner(self, op: Operateur, droite: Self) -> Resultat<Self> {
        let g = self;
        let d = droite;

        let r = match op {
            Operateur::Plus => plus_moins(g, d, |a, b| a + b),
            Operateur::Moins => plus_moins(g, d, |a, b| a - b),
            Operateur::Fois => Self::new(g.num * d.num, g.den * d.den),
            Operateur::Divise => {
                if d.num.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Self::new(g.num * d.den, g.den * d.num)
            }
        };

        tracing::trace!(
            "({}, {}) {} ({}, {}) = ({}, {})",
            g.num,
            g.den,
            op.symbole(),
            d.num,
            d.den,
            r.num,
            r.den
        );
        Ok(r)
    }
}

/// + / - sur dénominateur commun.
/// - mêmes dénominateurs : on combine les numérateurs tels quels
/// - sinon : les deux numérateurs sont ramenés au PLUS GRAND dénominateur
///   (facteur d/den, pas forcément entier : 29/6 - 63/8 donne un numérateur décimal)
fn plus_moins(
    g: PaireRationnelle,
    d: PaireRationnelle,
    f: impl Fn(f64, f64) -> f64,
) -> PaireRationnelle {
    if g.den == d.den {
        return PaireRationnelle::new(f(g.num, d.num), g.den);
    }

    let commun = g.den.max(d.den);
    PaireRationnelle::new(
        f(g.num * (commun / g.den), d.num * (commun / d.den)),
        commun,
    )
}
