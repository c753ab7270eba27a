//! Tests de propriétés : invariants du générateur sur de nombreuses graines.
//!
//! But : vérifier les contrats de sortie sans dépendre d’un tirage particulier.
//! - graines fixes (reproductible)
//! - budget temps global
//! - références historiques : textes attendus pour quelques graines connues

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{ConfigGenerateur, ExpressionGeneree, GenerateurExpressions, Operateur};
use crate::erreur::{ErreurConfig, ErreurGeneration};
use crate::noyau::eval_expression;

/* ------------------------ Helpers ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn entier(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn generateur(graine: i64) -> GenerateurExpressions {
    let mut g = GenerateurExpressions::new();
    g.set_graine(graine);
    g
}

/// Mots du texte d’affichage : opérateurs isolés, opérandes collées à leurs parenthèses.
fn mots(e: &ExpressionGeneree) -> Vec<&str> {
    e.texte().split(' ').collect()
}

fn operateurs(e: &ExpressionGeneree) -> Vec<Operateur> {
    mots(e)
        .into_iter()
        .filter_map(Operateur::depuis_symbole)
        .collect()
}

/// Opérandes sans parenthèses, signe conservé (ex: "((-3)" -> "-3").
fn operandes(e: &ExpressionGeneree) -> Vec<String> {
    mots(e)
        .into_iter()
        .filter(|m| Operateur::depuis_symbole(m).is_none())
        .map(|m| m.trim_matches(|c| c == '(' || c == ')').to_string())
        .collect()
}

/// Contrats communs à toute expression générée.
fn verifier_contrats(e: &ExpressionGeneree, longueur: u32) {
    let t = e.texte();

    // texte -> valeur : cohérent avec la solution stockée
    let v = eval_expression(&e.texte_canonique()).unwrap_or_else(|err| panic!("t={t:?} {err}"));
    assert_eq!(&v, e.solution(), "t={t:?}");

    // nombre d’opérations / opérandes
    assert_eq!(operateurs(e).len(), longueur as usize, "t={t:?}");
    assert_eq!(operandes(e).len(), longueur as usize + 1, "t={t:?}");

    // parenthèses équilibrées, jamais vides, jamais fermées avant d’être ouvertes
    let mut profondeur: i64 = 0;
    for c in t.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => profondeur -= 1,
            _ => {}
        }
        assert!(profondeur >= 0, "t={t:?}");
    }
    assert_eq!(profondeur, 0, "t={t:?}");
    assert!(!t.contains("()"), "t={t:?}");

    // jamais de division par une opérande nulle
    let ms = mots(e);
    for paire in ms.windows(2) {
        if paire[0] == "÷" {
            let droite = paire[1].trim_matches(|c| c == '(' || c == ')');
            let v: f64 = droite.parse().unwrap_or_else(|_| panic!("t={t:?}"));
            assert!(v != 0.0, "t={t:?}");
        }
    }
}

/* ------------------------ Références historiques ------------------------ */

#[test]
fn reference_graine_42() {
    let mut g = generateur(42);

    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "89 × 77 × 99 - 50");
    assert_eq!(e.solution(), &entier(678_397));

    // les flux continuent : pas de réamorçage entre deux appels
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "85 - (85 × 29) - 13");
    assert_eq!(e.solution(), &entier(-2393));
}

#[test]
fn reference_autres_graines() {
    let mut g = generateur(1);
    assert_eq!(g.generate().unwrap().texte(), "57 × 15 - 15 + 1");
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "38 - (15 ÷ (61 + 47))");
    assert_eq!(e.decimales(), 32);

    let mut g = generateur(2024);
    assert_eq!(g.generate().unwrap().texte(), "74 × (77 + (82 ÷ 7))");
    assert_eq!(g.generate().unwrap().texte(), "27 × (96 ÷ 98) + 2");
}

#[test]
fn reference_decimaux() {
    let mut g = generateur(42);
    g.utiliser_nombres_decimaux(true);
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "73.1 - (68.64 × 28.44) - 45.7");
    assert_eq!(e.solution_decimale().to_string(), "-1924.7216");

    let mut g = generateur(7);
    g.utiliser_nombres_decimaux(true);
    assert_eq!(g.generate().unwrap().texte(), "73.4 - 75.2 × (89.9 + 35.84)");
}

#[test]
fn reference_negatifs() {
    let mut g = generateur(99);
    g.set_bornes(-10, 10).unwrap().set_longueur(5);
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "(-7) × 0 - ((-9) ÷ 1) × ((-10) + (-2))");
    assert_eq!(e.solution(), &entier(-108));
}

#[test]
fn meme_graine_meme_sortie() {
    let mut g = GenerateurExpressions::new();
    g.set_bornes(-50, 50)
        .unwrap()
        .utiliser_nombres_decimaux(true)
        .set_longueur(6);

    g.set_graine(0x5EED);
    let a = g.generate().unwrap();
    g.set_graine(0x5EED);
    let b = g.generate().unwrap();

    assert_eq!(a, b);
    assert_eq!(a.texte(), b.texte());
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn soustraction_seule_bornes_unitaires() {
    let mut g = generateur(0);
    g.set_operateurs(vec![Operateur::Soustraction])
        .unwrap()
        .set_bornes(1, 1)
        .unwrap()
        .set_longueur(2)
        .autoriser_parentheses(false);

    for _ in 0..5 {
        let e = g.generate().unwrap();
        assert_eq!(e.texte(), "1 - 1 - 1");
        assert_eq!(e.solution(), &entier(-1));
    }
}

#[test]
fn division_seule_et_zero_infaisable() {
    let mut g = generateur(0);
    g.set_operateurs(vec![Operateur::Division])
        .unwrap()
        .set_bornes(0, 0)
        .unwrap();
    assert_eq!(g.generate(), Err(ErreurGeneration::Infaisable));

    // un autre opérateur rend la config faisable
    g.set_operateurs(vec![Operateur::Division, Operateur::Multiplication])
        .unwrap();
    let e = g.generate().unwrap();
    assert!(!e.texte().contains('÷'), "t={:?}", e.texte());
}

#[test]
fn setters_refusent_les_valeurs_invalides() {
    let mut g = GenerateurExpressions::new();
    assert!(matches!(
        g.set_bornes(5, 1),
        Err(ErreurConfig::BornesInversees { min: 5, max: 1 })
    ));
    assert!(matches!(g.set_operateurs(vec![]), Err(ErreurConfig::OperateursVides)));
    assert!(g.set_max_decimales_resultat(-2).is_err());
    assert!(g.set_bornes_decimales(2, -1).is_err());
    assert!(g.set_tentatives_max(Some(0)).is_err());
}

#[test]
fn division_par_zero_imbriquee_retiree() {
    // 1er candidat : "2 × (0 ÷ (1 × 0))" => division par zéro => nouveau tirage
    let mut g = generateur(122);
    g.set_bornes(0, 2).unwrap();
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "1 × 1 × 1 × 0");
    assert_eq!(e.solution(), &entier(0));
}

#[test]
fn rejet_sur_decimales_du_resultat() {
    // candidats rejetés : 30 × (91 ÷ (77 ÷ 34)), 93 - 22 - 99 ÷ 54, ...
    let mut g = generateur(4);
    g.set_max_decimales_resultat(0).unwrap();
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "97 - (56 + 43) - 6");
    assert_eq!(e.solution(), &entier(-8));

    // même chemin, budget trop court
    let mut g = generateur(4);
    g.set_max_decimales_resultat(0)
        .unwrap()
        .set_tentatives_max(Some(4))
        .unwrap();
    assert_eq!(
        g.generate(),
        Err(ErreurGeneration::TentativesEpuisees { tentatives: 4 })
    );

    // une décimale autorisée : 20 × 45 ÷ 8 - 4 = 108.5 passe du premier coup
    let mut g = generateur(2);
    g.set_max_decimales_resultat(1).unwrap();
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "20 × 45 ÷ 8 - 4");
    assert_eq!(e.solution_decimale().to_string(), "108.5");
}

#[test]
fn contrainte_impossible_budget_epuise() {
    // une seule opérande en pleine précision dans [1, 2) : jamais entière
    let mut g = generateur(31);
    g.set_longueur(0)
        .utiliser_nombres_decimaux(true)
        .set_bornes(1, 2)
        .unwrap()
        .set_bornes_decimales(-1, -1)
        .unwrap()
        .set_max_decimales_resultat(0)
        .unwrap()
        .set_tentatives_max(Some(50))
        .unwrap();

    assert_eq!(
        g.generate(),
        Err(ErreurGeneration::TentativesEpuisees { tentatives: 50 })
    );
}

#[test]
fn config_chargee_depuis_json() {
    let json = r#"{ "operateurs": ["division"], "min_nombre": 0, "max_nombre": 0, "graine": 1 }"#;
    let config: ConfigGenerateur = serde_json::from_str(json).unwrap();
    assert_eq!(config.longueur, 3);
    assert_eq!(config.tentatives_max, Some(100_000));

    let mut g = GenerateurExpressions::avec_config(config).unwrap();
    assert_eq!(g.generate(), Err(ErreurGeneration::Infaisable));

    let json = r#"{ "min_decimales": -1, "max_decimales": 2 }"#;
    let config: ConfigGenerateur = serde_json::from_str(json).unwrap();
    assert!(GenerateurExpressions::avec_config(config).is_err());

    // null : boucle non bornée
    let json = r#"{ "tentatives_max": null, "graine": 42 }"#;
    let config: ConfigGenerateur = serde_json::from_str(json).unwrap();
    let mut g = GenerateurExpressions::avec_config(config).unwrap();
    assert_eq!(g.generate().unwrap().texte(), "89 × 77 × 99 - 50");
}

/* ------------------------ Propriétés (campagne) ------------------------ */

#[test]
fn proprietes_entiers_avec_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    for graine in 0..150 {
        budget(t0, max);

        let mut g = generateur(graine);
        g.set_bornes(-20, 20).unwrap().set_longueur(1 + (graine as u32 % 6));
        let longueur = g.config().longueur;

        let e = g.generate().unwrap();
        verifier_contrats(&e, longueur);

        // entiers seulement
        for o in operandes(&e) {
            assert!(o.parse::<i64>().is_ok(), "o={o:?} t={:?}", e.texte());
        }
    }
}

#[test]
fn proprietes_decimaux_sans_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    for graine in 0..150 {
        budget(t0, max);

        let mut g = generateur(graine);
        g.set_bornes(-5, 30)
            .unwrap()
            .set_bornes_decimales(0, 3)
            .unwrap()
            .utiliser_nombres_decimaux(true)
            .autoriser_parentheses(false)
            .set_longueur(4);

        let e = g.generate().unwrap();
        verifier_contrats(&e, 4);

        // au plus 3 décimales par opérande
        for o in operandes(&e) {
            let frac = o.split_once('.').map_or(0, |(_, f)| f.len());
            assert!(frac <= 3, "o={o:?} t={:?}", e.texte());
        }

        // seules parenthèses : celles d’un négatif isolé "(-x)"
        let t = e.texte();
        for (i, c) in t.char_indices() {
            if c == '(' {
                assert_eq!(t[i + 1..].chars().next(), Some('-'), "t={t:?}");
            }
        }
    }
}

#[test]
fn proprietes_max_decimales_resultat() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for graine in 0..60 {
        budget(t0, max);

        let mut g = generateur(graine);
        g.set_bornes_decimales(1, 1)
            .unwrap()
            .utiliser_nombres_decimaux(true)
            .set_bornes(1, 20)
            .unwrap()
            .set_max_decimales_resultat(2)
            .unwrap()
            .set_longueur(2);

        let e = g.generate().unwrap();
        verifier_contrats(&e, 2);
        assert!(e.decimales() <= 2, "t={:?}", e.texte());
    }
}

#[test]
fn longueur_zero_une_operande() {
    let mut g = generateur(42);
    g.set_longueur(0);
    let e = g.generate().unwrap();
    assert_eq!(e.texte(), "89");
    verifier_contrats(&e, 0);
}

/// Valeur recalculée mot à mot (sans parenthèses) : termes × ÷ cumulés, puis + -.
fn valeur_sans_parentheses(e: &ExpressionGeneree) -> BigRational {
    let lire = |m: &str| -> BigRational {
        let m = m.trim_matches(|c| c == '(' || c == ')');
        eval_expression(m).unwrap_or_else(|err| panic!("m={m:?} {err}"))
    };

    let ms = mots(e);
    let mut total = entier(0);
    let mut signe = entier(1);
    let mut terme = lire(ms[0]);

    for paire in ms[1..].chunks(2) {
        let n = lire(paire[1]);
        match Operateur::depuis_symbole(paire[0]) {
            Some(Operateur::Multiplication) => terme *= n,
            Some(Operateur::Division) => terme /= n,
            Some(op) => {
                total += &signe * &terme;
                signe = if op == Operateur::Soustraction { entier(-1) } else { entier(1) };
                terme = n;
            }
            None => panic!("opérateur attendu: {:?}", paire[0]),
        }
    }
    total + signe * terme
}

#[test]
fn tres_longue_expression_sans_debordement() {
    let mut g = generateur(3);
    g.set_longueur(100_000).autoriser_parentheses(false);

    let e = g.generate().unwrap();
    assert_eq!(operateurs(&e).len(), 100_000);
    assert_eq!(operandes(&e).len(), 100_001);
    assert_eq!(e.solution(), &valeur_sans_parentheses(&e));
}

#[test]
fn longue_expression_parenthesee() {
    // + et - seulement : aucun groupe nul sous un ÷, donc aucun rejet
    let mut g = generateur(17);
    g.set_operateurs(vec![Operateur::Addition, Operateur::Soustraction])
        .unwrap()
        .set_longueur(20_000);

    let e = g.generate().unwrap();
    assert_eq!(operateurs(&e).len(), 20_000);
    verifier_contrats(&e, 20_000);
}
