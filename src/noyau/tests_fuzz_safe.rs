//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - chaque échec doit être une variante attendue pour la forme générée
//! - invariant clé : tout succès avec opérateur a une forme mixte canonique

use std::time::{Duration, Instant};

use super::{calculer, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_operande(rng: &mut Rng) -> String {
    // petits entiers, zéro compris (utile pour la division par zéro)
    let a = rng.pick(10);
    let b = rng.pick(9) + 1;
    let i = rng.pick(5) as i32 - 2;

    match rng.pick(6) {
        0 | 1 => format!("{a}"),
        2 => format!("{a}/{b}"),
        3 => format!("{i}_{a}/{b}"),
        4 => format!("{a}.5"),
        _ => format!("-{a}"),
    }
}

fn gen_operateur(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "*",
        _ => "/",
    }
}

/// Expression bien formée : opérande (op opérande)*
fn gen_expr(rng: &mut Rng, longueur: usize) -> String {
    let mut mots = vec![gen_operande(rng)];
    for _ in 0..longueur {
        mots.push(gen_operateur(rng).to_string());
        mots.push(gen_operande(rng));
    }
    mots.join(" ")
}

/// Suite de mots quelconque (grammaire souvent violée).
fn gen_desordre(rng: &mut Rng, n: usize) -> String {
    (0..n)
        .map(|_| {
            if rng.coin() {
                gen_operande(rng)
            } else {
                gen_operateur(rng).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/* ------------------------ Invariants ------------------------ */

fn est_magnitude(s: &str) -> bool {
    !s.is_empty() && !s.starts_with('-') && s.parse::<f64>().is_ok_and(|v| v >= 0.0)
}

/// "-"? ( entier | a/b | i_a/b )
fn est_forme_mixte(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (entier, frac) = match s.split_once('_') {
        Some((i, f)) => (Some(i), Some(f)),
        None if s.contains('/') => (None, Some(s)),
        None => (Some(s), None),
    };

    entier.map_or(true, est_magnitude)
        && frac.map_or(true, |f| match f.split_once('/') {
            Some((a, b)) => est_magnitude(a) && est_magnitude(b),
            None => false,
        })
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let longueur = rng.pick(6) as usize + 1;
        let expr = gen_expr(&mut rng, longueur);

        match calculer(&expr) {
            Ok(r) => {
                assert!(est_forme_mixte(&r), "forme non canonique: expr={expr:?} r={r:?}");
                seen_ok += 1;
            }
            Err(e) => {
                // grammaire garantie : seul l’arithmétique peut échouer
                assert!(
                    matches!(e, ErreurCalcul::DivisionParZero | ErreurCalcul::Depassement),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_desordre_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_syntaxe = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let n = rng.pick(6) as usize;
        let expr = gen_desordre(&mut rng, n);

        match calculer(&expr) {
            Ok(r) => assert!(!r.is_empty(), "résultat vide: expr={expr:?}"),
            Err(ErreurCalcul::SyntaxeArithmetique) => seen_syntaxe += 1,
            Err(ErreurCalcul::SyntaxePostfixe) => assert!(expr.is_empty(), "expr={expr:?}"),
            Err(ErreurCalcul::DivisionParZero) | Err(ErreurCalcul::Depassement) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_syntaxe > 50, "trop peu d’erreurs de grammaire: {seen_syntaxe}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..100 {
        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(calculer(&ea), calculer(&eb), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["1/2"; 800].join(" + ");
    let r = calculer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(r, "400");
}
