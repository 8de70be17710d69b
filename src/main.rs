// src/main.rs
//
// Calculatrice RPN — point d’entrée console
// ----------------------------------------
// - sans argument : boucle interactive sur stdin/stdout (voir app::console)
// - avec expressions : évalue chacune sur une calculatrice neuve, code retour 1 si une échoue

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use calculatrice_rpn::app::{console, journal, Calculatrice, Reglages};
use calculatrice_rpn::noyau::Lexique;

/// Calculatrice en ligne : + - * / ^ et parenthèses, mémoire, historique.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Refuse les caractères inconnus au lieu de les ignorer.
    #[arg(long)]
    strict: bool,

    /// Nombre maximal de lignes d’historique.
    #[arg(long, default_value_t = calculatrice_rpn::app::reglages::HISTORIQUE_MAX_DEFAUT)]
    historique_max: usize,

    /// Journal sur stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions à évaluer (mode non interactif).
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

impl Args {
    fn reglages(&self) -> Reglages {
        let mut r = Reglages::default();
        if self.strict {
            r.lexique = Lexique::Strict;
        }
        r.set_historique_max(self.historique_max);
        r
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = journal::installer(journal::niveau_depuis_verbosite(args.verbose)) {
        eprintln!("journal indisponible: {e}");
    }

    let reglages = args.reglages();

    if args.expressions.is_empty() {
        let mut calc = Calculatrice::avec_reglages(reglages);
        let stdin = io::stdin();
        if let Err(e) = console::executer(&mut calc, stdin.lock(), io::stdout()) {
            eprintln!("erreur d’entrée/sortie: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let mut code = ExitCode::SUCCESS;
    let mut stdout = io::stdout().lock();
    for expr in &args.expressions {
        let mut calc = Calculatrice::avec_reglages(reglages);
        calc.saisir_texte(expr);
        if calc.calculer().is_err() {
            code = ExitCode::FAILURE;
        }
        if writeln!(stdout, "{}", calc.affichage()).is_err() {
            return ExitCode::FAILURE;
        }
    }
    code
}
