// src/app.rs
//
// Interpolation Q-pur — client ligne de commande du noyau
// -------------------------------------------------------
// Rôle:
// - Lire les points "x,y" et les abscisses --eval (clap, via FromStr du noyau)
// - Appeler le noyau (Interpolation) et produire le texte de sortie
// - Installer le journal (stderr) : le noyau, lui, ne journalise jamais
//
// Important:
// - `execute` est pure (pas d’E/S) : main.rs imprime, les tests comparent des chaînes.
// - Les options passent AVANT les points : après le premier point, tout argument
//   commençant par '-' est lu comme un point (ex: "-1/2,3").

use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use interpolation_qpur::noyau::{Interpolation, InterpolationError, Point, Rational};

#[derive(Parser, Debug)]
#[command(
    name = "interpolation",
    version,
    about = "Polynôme d’interpolation exact (rationnels, différences divisées de Newton)"
)]
pub struct Cli {
    /// Verbosité du journal sur stderr (-v info, -vv debug ; RUST_LOG prioritaire)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Évalue aussi le polynôme en X (répétable)
    #[arg(short, long = "eval", value_name = "X", allow_hyphen_values = true)]
    pub eval: Vec<Rational>,

    /// Points "x,y" ; x et y : 12, -12.15, 1/3, "1 2/3", 1_2/3 ou 1+2/3
    #[arg(value_name = "POINT", allow_hyphen_values = true)]
    pub points: Vec<Point>,
}

/* ------------------------ Journal ------------------------ */

pub fn installer_journal(verbose: u8) {
    let defaut = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    // try_init : un second appel (tests) ne doit pas paniquer
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}

/* ------------------------ Exécution ------------------------ */

/// Garantie du noyau : P(x_i) = y_i et degré < n.
fn resultat_coherent(interp: &Interpolation) -> bool {
    let poly = interp.result();
    let points = interp.points();
    poly.degree() < points.len() as isize && points.iter().all(|p| poly.evaluate(&p.x) == p.y)
}

/// Texte de sortie : le polynôme, puis une ligne "P(x) = y" par abscisse demandée.
pub fn execute(cli: &Cli) -> Result<String, InterpolationError> {
    info!(points = cli.points.len(), "interpolation");
    for p in &cli.points {
        debug!(point = %p, "nœud");
    }

    let interp = Interpolation::new(&cli.points)?;
    debug_assert!(resultat_coherent(&interp));

    let poly = interp.result();
    info!(degre = poly.degree(), "polynôme calculé");

    let mut out = format!("{poly}\n");
    for x in &cli.eval {
        let y = poly.evaluate(x);
        debug!(%x, %y, "évaluation");
        out.push_str(&format!("P({x}) = {y}\n"));
    }
    Ok(out)
}
