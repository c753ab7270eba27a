// src/generateur/construction.rs
//
// Construction d’UNE tentative : texte d’affichage, parenthèses équilibrées.
//
// Ordre des tirages par itération (reproductibilité) :
//   opérande -> opérateur -> [rejet si opérande droite non sûre]
//   -> pile_ou_face pour '(' -> opérande -> pile_ou_face pour ')' (si une est ouverte)

use tracing::trace;

use super::alea::MoteurAlea;
use super::config::ConfigGenerateur;

/// Opérande selon la config : entier, ou décimal avec un nombre de décimales tiré.
fn nombre_aleatoire(config: &ConfigGenerateur, alea: &mut MoteurAlea) -> f64 {
    if config.nombres_decimaux {
        let places = alea.next_int(config.min_decimales, config.max_decimales);
        return alea.next_decimal(config.min_nombre as f64, config.max_nombre as f64, places);
    }
    alea.next_int(config.min_nombre, config.max_nombre) as f64
}

/// Texte d’une opérande.
/// Display de f64 : plus courte écriture, jamais scientifique, sans « .0 » pour un entier.
/// Un négatif est toujours entre parenthèses (moins unaire sans ambiguïté).
pub fn format_operande(v: f64) -> String {
    let v = v + 0.0;
    if v < 0.0 {
        format!("({v})")
    } else {
        format!("{v}")
    }
}

/// Construit un texte d’expression (glyphes d’affichage).
pub fn construire(config: &ConfigGenerateur, alea: &mut MoteurAlea) -> String {
    let mut sb = String::new();

    let premier = nombre_aleatoire(config, alea);
    sb.push_str(&format_operande(premier));

    let mut ouvertes: u32 = 0;
    let mut i: u32 = 0;

    while i < config.longueur {
        let nombre = nombre_aleatoire(config, alea);
        let op = config.operateurs[alea.choix(config.operateurs.len())];

        // on retire la paire (opérande, opérateur), sans avancer i
        if !op.operande_droite_sure(nombre) {
            trace!(%op, nombre, "opérande droite refusée, nouveau tirage");
            continue;
        }

        sb.push(' ');
        sb.push_str(op.symbole());
        sb.push(' ');

        // jamais de '(' devant la dernière opérande : groupe trivial
        let mut ouverte_ici = false;
        if alea.pile_ou_face() && i != config.longueur - 1 && config.parentheses {
            sb.push('(');
            ouverte_ici = true;
            ouvertes += 1;
        }

        sb.push_str(&format_operande(nombre));

        if ouvertes > 0 && !ouverte_ici && alea.pile_ou_face() {
            sb.push(')');
            ouvertes -= 1;
        }

        i += 1;
    }

    for _ in 0..ouvertes {
        sb.push(')');
    }

    sb.trim().to_string()
}
