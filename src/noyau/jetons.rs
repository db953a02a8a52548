// src/noyau/jetons.rs
//
// Tokenisation + validation des opérandes.
//
// Règles:
// - découpe sur les blancs (les suites de blancs ne produisent pas de jeton vide)
// - "+", "-", "*", "/" seuls => opérateur
// - sinon le jeton est une opérande, classée par simple lecture:
//    - nombre      : 12, -2, 2.5, +.5, 1e3
//    - fraction    : a/b   (a et b nombres, signes libres)
//    - nombre mixte: i_a/b (i nombre signé, a et b nombres >= 0)
// - "-2" collé reste une opérande : il n’y a pas de moins unaire.

use super::erreur::{ErreurCalcul, Resultat};

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_texte(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Moins),
            "*" => Some(Operateur::Fois),
            "/" => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Table de précédence (constante) : * / lient plus fort que + -.
    /// Tous les opérateurs sont binaires et associatifs à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 0,
            Operateur::Fois | Operateur::Divise => 1,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
        }
    }
}

/* ------------------------ Opérandes ------------------------ */

/// Forme syntaxique d’une opérande, avec ses parties déjà lues.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Forme {
    Nombre(f64),
    Fraction { num: f64, den: f64 },
    Mixte { entier: f64, num: f64, den: f64 },
}

/// Opérande validée : le texte d’origine est conservé (écho d’un nombre seul).
#[derive(Clone, Debug, PartialEq)]
pub struct Operande {
    pub texte: String,
    pub forme: Forme,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Operande(Operande),
    Op(Operateur),
}

impl Tok {
    pub fn texte(&self) -> &str {
        match self {
            Tok::Operande(o) => &o.texte,
            Tok::Op(op) => op.symbole(),
        }
    }
}

/// Tokenize une expression infixe en jetons validés.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();

    for mot in s.split_whitespace() {
        // un nombre signé ("-2") n’est jamais un opérateur : seul le mot exact compte
        if let Some(op) = Operateur::depuis_texte(mot) {
            out.push(Tok::Op(op));
            continue;
        }

        if est_symbolique(mot) {
            return Err(ErreurCalcul::OperateurInconnu(mot.to_string()));
        }

        out.push(Tok::Operande(classer_operande(mot)?));
    }

    tracing::trace!("jetons: {}", format_tokens(&out));
    Ok(out)
}

/// Classe une opérande (nombre -> mixte -> fraction), ou échoue.
pub fn classer_operande(texte: &str) -> Resultat<Operande> {
    let invalide = || ErreurCalcul::OperandeInvalide(texte.to_string());

    let forme = if let Some(v) = lire_nombre(texte) {
        Forme::Nombre(v)
    } else if let Some((entier, frac)) = texte.split_once('_') {
        if frac.contains('_') {
            return Err(invalide());
        }
        let entier = lire_nombre(entier).ok_or_else(invalide)?;
        let (num, den) = lire_fraction(frac).ok_or_else(invalide)?;

        // 1_-2/3 et 1_2/-3 : le signe n’appartient qu’à la partie entière
        if num < 0.0 || den < 0.0 {
            return Err(invalide());
        }
        Forme::Mixte { entier, num, den }
    } else {
        let (num, den) = lire_fraction(texte).ok_or_else(invalide)?;
        Forme::Fraction { num, den }
    };

    Ok(Operande {
        texte: texte.to_string(),
        forme,
    })
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::texte).collect::<Vec<_>>().join(" ")
}

/* ------------------------ Lecture bas niveau ------------------------ */

/// "a/b" avec exactement un '/', a et b nombres.
fn lire_fraction(s: &str) -> Option<(f64, f64)> {
    let (a, b) = s.split_once('/')?;
    if b.contains('/') {
        return None;
    }
    Some((lire_nombre(a)?, lire_nombre(b)?))
}

/// Littéral décimal : [+-]? (chiffres [. chiffres?] | . chiffres) ([eE] [+-]? chiffres)?
/// Refuse inf/nan (que `f64::from_str` accepterait).
fn lire_nombre(s: &str) -> Option<f64> {
    if !est_litteral_decimal(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn est_litteral_decimal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let mut chiffres = compte_chiffres(b, &mut i);
    if i < b.len() && b[i] == b'.' {
        i += 1;
        chiffres += compte_chiffres(b, &mut i);
    }
    if chiffres == 0 {
        return false;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        if compte_chiffres(b, &mut i) == 0 {
            return false;
        }
    }

    i == b.len()
}

fn compte_chiffres(b: &[u8], i: &mut usize) -> usize {
    let debut = *i;
    while *i < b.len() && b[*i].is_ascii_digit() {
        *i += 1;
    }
    *i - debut
}

/// Mot fait uniquement de symboles (ni chiffre, ni lettre, ni '.', ni '_') :
/// c’est une tentative d’opérateur, pas une opérande ratée.
fn est_symbolique(mot: &str) -> bool {
    mot.chars().all(|c| !c.is_alphanumeric() && c != '.' && c != '_')
}
