// src/erreur.rs
//
// Erreurs typées du crate.
// - ErreurConfig     : réglage refusé (vérification immédiate, jamais différée)
// - ErreurGeneration : génération impossible ou budget de tentatives épuisé
// - ErreurEval       : texte canonique illisible / non évaluable (transitoire pour le générateur)

/// Réglage refusé par la configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurConfig {
    #[error("la liste d'opérateurs ne peut pas être vide")]
    OperateursVides,

    #[error("bornes inversées : min={min} > max={max}")]
    BornesInversees { min: i32, max: i32 },

    #[error("bornes de décimales inversées : min={min} > max={max}")]
    BornesDecimalesInversees { min: i32, max: i32 },

    /// -1 désactive l'arrondi, mais seulement si les deux bornes valent -1.
    #[error("bornes de décimales ({min}, {max}) : -1 doit être donné pour les deux bornes")]
    BornesDecimalesMelangees { min: i32, max: i32 },

    #[error("bornes de décimales ({min}, {max}) : la valeur minimale est -1")]
    BornesDecimalesHorsDomaine { min: i32, max: i32 },

    #[error("maximum de décimales du résultat invalide : {0} (minimum -1)")]
    MaxDecimalesResultatInvalide(i32),

    #[error("longueur aléatoire inversée : min={min} > max={max}")]
    LongueurAleatoireInversee { min: u32, max: u32 },

    #[error("longueur aléatoire ({min}, {max}) : les deux bornes doivent valoir au moins 1")]
    LongueurAleatoireTropPetite { min: u32, max: u32 },

    #[error("longueur aléatoire ({min}, {max}) : au plus {} valeurs possibles", i32::MAX)]
    LongueurAleatoireTropLarge { min: u32, max: u32 },

    #[error("le nombre maximal de tentatives doit valoir au moins 1")]
    TentativesMaxNulle,
}

/// Échec d'un appel à `generate()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurGeneration {
    #[error("configuration invalide : {0}")]
    Config(#[from] ErreurConfig),

    #[error(
        "expression insoluble : le seul opérateur disponible est la division \
         et le seul nombre dans les bornes est 0"
    )]
    Infaisable,

    #[error("contraintes non satisfaites après {tentatives} tentatives")]
    TentativesEpuisees { tentatives: u64 },
}

/// Erreur du noyau d'évaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante inattendue")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,
}
