// src/noyau/format.rs
//
// Affichage canonique d’une paire (dividende, diviseur) en nombre mixte:
//   "0" | "-a/b" | "a/b" | "i" | "-i" | "i_a/b" | "-i_a/b"
//
// Le bruit flottant des parties réduites est affiché tel quel
// ("-2_130.70000000000005/132" est une sortie normale).

use num_traits::{One, Zero};

use super::erreur::{ErreurCalcul, Resultat};
use super::paire::PaireRationnelle;

/* ------------------------ PGCD flottant ------------------------ */

/// Euclide par restes successifs, directement sur les magnitudes f64.
pub fn pgcd(a: f64, b: f64) -> f64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Diviseur effectivement appliqué.
/// Sous l’unité, Euclide ne tombe sur un pgcd plus fin que sqrt(EPSILON) * max(a, b)
/// qu’à cause du bruit d’arrondi : la paire est alors affichée telle quelle.
fn diviseur_reduction(a: f64, b: f64) -> f64 {
    let g = pgcd(a, b);
    let bruit = a.max(b) * f64::EPSILON.sqrt();
    if g >= f64::one() || g > bruit {
        g
    } else {
        f64::one()
    }
}

/// Rendu texte d’une magnitude (jamais "-0", jamais d’exposant).
fn nombre(x: f64) -> String {
    format!("{x}")
}

/* ------------------------ Nombre mixte ------------------------ */

pub fn format_mixte(paire: PaireRationnelle) -> Resultat<String> {
    let PaireRationnelle {
        num: dividende,
        den: diviseur,
    } = paire;

    if diviseur.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    if !dividende.is_finite() || !diviseur.is_finite() {
        return Err(ErreurCalcul::Depassement);
    }
    if dividende.is_zero() {
        return Ok("0".to_string());
    }

    let signe = if dividende / diviseur < 0.0 { "-" } else { "" };
    let abs_dividende = dividende.abs();
    let abs_diviseur = diviseur.abs();

    // fraction propre : pas de partie entière
    if abs_dividende < abs_diviseur {
        let g = diviseur_reduction(abs_dividende, abs_diviseur);
        return Ok(format!(
            "{signe}{}/{}",
            nombre(abs_dividende / g),
            nombre(abs_diviseur / g)
        ));
    }

    let partie_entiere = (abs_dividende / abs_diviseur).floor();
    let reste = abs_dividende % abs_diviseur;
    if reste.is_zero() {
        return Ok(format!("{signe}{}", nombre(partie_entiere)));
    }

    let g = diviseur_reduction(reste, abs_diviseur);
    Ok(format!(
        "{signe}{}_{}/{}",
        nombre(partie_entiere),
        nombre(reste / g),
        nombre(abs_diviseur / g)
    ))
}
