// src/main.rs
//
// Interpolation Q-pur — point d’entrée CLI
// ----------------------------------------
// Usage:
//   interpolation [-v]... [-e X]... [POINT]...
//   POINT = "x,y" (rationnels exacts)
//
// Sortie: le polynôme d’interpolation sur stdout.
// Échec (point illisible, abscisse répétée) : message sur stderr, statut non nul.

use std::process::ExitCode;

use clap::Parser;

mod app;

use app::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    app::installer_journal(cli.verbose);

    match app::execute(&cli) {
        Ok(sortie) => {
            print!("{sortie}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
