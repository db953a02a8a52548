// src/main.rs
//
// Calculatrice mixte — point d’entrée (terminal)
// ----------------------------------------------
// Deux modes :
// - sans argument : REPL sur stdin/stdout ("? " / "= …" / "! …")
// - avec EXPRESSION : une seule évaluation, code de sortie 1 en cas d’échec
//
// Journal sur stderr (-v, -vv, -vvv).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use calculatrice_mixte::app::etat::INVITE_DEFAUT;
use calculatrice_mixte::app::SessionCalc;

mod journal;

#[derive(Parser, Debug)]
#[command(author, version, about = "Calculatrice de fractions et nombres mixtes", long_about = None)]
struct Cli {
    /// Expression à évaluer une seule fois (ex: 1/2 * 3_3/4). Sans elle : REPL.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Affiche les jetons et la RPN après chaque résultat
    #[arg(short, long)]
    demarche: bool,

    /// Texte de l’invite du REPL
    #[arg(long, default_value = INVITE_DEFAUT)]
    invite: String,

    /// Verbosité du journal (stderr), répétable
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 0 si tout va bien ; 1 sur erreur d’E/S, ou sur échec de calcul en mode direct.
fn statut(res: &io::Result<()>, direct: bool, echec: bool) -> u8 {
    match res {
        Err(e) => {
            tracing::error!("entrée/sortie: {e}");
            1
        }
        Ok(()) if direct && echec => 1,
        Ok(()) => 0,
    }
}

/// Mode direct si une expression est donnée, REPL sur `entree` sinon.
fn executer<R: BufRead, W: Write>(cli: Cli, entree: R, sortie: W) -> u8 {
    let direct = !cli.expression.is_empty();
    let mut session = SessionCalc::new(cli.invite, cli.demarche);

    let res = if direct {
        session.une_fois(&cli.expression.join(" "), sortie)
    } else {
        session.boucle(entree, sortie)
    };

    statut(&res, direct, session.a_echoue())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = journal::installer(journal::niveau_depuis_verbosite(cli.verbose)) {
        eprintln!("journal indisponible: {e}");
    }

    let stdin = io::stdin();
    ExitCode::from(executer(cli, stdin.lock(), io::stdout().lock()))
}
