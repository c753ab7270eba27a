// src/main.rs
//
// Démo console : quelques expressions par réglage, avec leur solution.
//
// Journalisation : RUST_LOG (ex: RUST_LOG=generateur_expressions=debug pour voir les rejets).

use tracing::info;
use tracing_subscriber::EnvFilter;

use generateur_expressions::{GenerateurExpressions, Operateur};

/// Nombre d’expressions par démo.
const PAR_DEMO: usize = 5;

fn afficher(titre: &str, g: &mut GenerateurExpressions) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- {titre} ---");
    for _ in 0..PAR_DEMO {
        let e = g.generate()?;
        println!("{e} = {}", e.solution_decimale());
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut g = GenerateurExpressions::new();
    info!(config = ?g.config(), "démarrage");
    afficher("réglages par défaut", &mut g)?;

    g.utiliser_nombres_decimaux(true)
        .set_bornes(-20, 20)?
        .set_max_decimales_resultat(2)?;
    afficher("décimaux, au plus 2 décimales au résultat", &mut g)?;

    let mut g = GenerateurExpressions::new();
    g.set_operateurs(vec![Operateur::Multiplication, Operateur::Division])?
        .set_longueur_aleatoire(2, 5)?
        .set_max_decimales_resultat(0)?
        .autoriser_parentheses(false);
    afficher("× et ÷, résultat entier", &mut g)?;

    Ok(())
}
