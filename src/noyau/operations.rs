// src/noyau/operations.rs
//
// Table des opérations (symbole -> variante fermée).
// Chaque variante porte ses fonctions comme données : calcul, description,
// précédence (binaire seulement) et validateur optionnel.

use std::collections::HashMap;
use std::f64::consts::{E, PI};

use super::erreurs::ErreurCalcul;

pub type Validation1 = fn(f64) -> Option<ErreurCalcul>;
pub type Validation2 = fn(f64, f64) -> Option<ErreurCalcul>;

/// Précédence “non bornée” : aucune opération binaire appliquée.
pub const PRECEDENCE_MAX: u8 = u8::MAX;

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Constante(f64),
    Nullaire(fn() -> f64, &'static str),
    Unaire {
        calcul: fn(f64) -> f64,
        description: fn(&str) -> String,
        validation: Option<Validation1>,
    },
    Binaire {
        calcul: fn(f64, f64) -> f64,
        description: fn(&str, &str) -> String,
        precedence: u8,
        validation: Option<Validation2>,
    },
    Egal,
    /// Référence de variable : la valeur est lue au moment de l’exécution.
    Variable,
}

/* ------------------------ Validateurs ------------------------ */

fn diviseur_nul(_a: f64, b: f64) -> Option<ErreurCalcul> {
    (b == 0.0).then_some(ErreurCalcul::DivisionParZero)
}

fn inverse_de_zero(x: f64) -> Option<ErreurCalcul> {
    (x == 0.0).then_some(ErreurCalcul::DivisionParZero)
}

fn hors_intervalle_unite(x: f64) -> Option<ErreurCalcul> {
    (!(-1.0..=1.0).contains(&x)).then_some(ErreurCalcul::HorsDomaine)
}

fn negatif(x: f64) -> Option<ErreurCalcul> {
    (x < 0.0).then_some(ErreurCalcul::ArgumentNegatif)
}

/* ------------------------ Constructeurs ------------------------ */

fn unaire(calcul: fn(f64) -> f64, description: fn(&str) -> String) -> Operation {
    Operation::Unaire {
        calcul,
        description,
        validation: None,
    }
}

fn unaire_valide(
    calcul: fn(f64) -> f64,
    description: fn(&str) -> String,
    validation: Validation1,
) -> Operation {
    Operation::Unaire {
        calcul,
        description,
        validation: Some(validation),
    }
}

fn binaire(
    calcul: fn(f64, f64) -> f64,
    description: fn(&str, &str) -> String,
    precedence: u8,
) -> Operation {
    Operation::Binaire {
        calcul,
        description,
        precedence,
        validation: None,
    }
}

fn aleatoire() -> f64 {
    rand::random::<f64>()
}

/// Table standard de la calculatrice.
///
/// Les symboles sont ceux des touches : recherche exacte, pas de normalisation.
pub fn operations_standard() -> HashMap<String, Operation> {
    let table: [(&str, Operation); 20] = [
        ("π", Operation::Constante(PI)),
        ("e", Operation::Constante(E)),
        ("+", binaire(|a, b| a + b, |a, b| format!("{a} + {b}"), 0)),
        ("−", binaire(|a, b| a - b, |a, b| format!("{a} - {b}"), 0)),
        ("×", binaire(|a, b| a * b, |a, b| format!("{a} × {b}"), 1)),
        (
            "÷",
            Operation::Binaire {
                calcul: |a, b| a / b,
                description: |a, b| format!("{a} ÷ {b}"),
                precedence: 1,
                validation: Some(diviseur_nul),
            },
        ),
        ("xʸ", binaire(f64::powf, |a, b| format!("({a})^({b})"), 2)),
        ("±", unaire(|x| -x, |x| format!("-({x})"))),
        ("rand", Operation::Nullaire(aleatoire, "rand()")),
        ("cos", unaire(f64::cos, |x| format!("cos({x})"))),
        ("sin", unaire(f64::sin, |x| format!("sin({x})"))),
        ("tan", unaire(f64::tan, |x| format!("tan({x})"))),
        (
            "sin⁻¹",
            unaire_valide(f64::asin, |x| format!("sin⁻¹({x})"), hors_intervalle_unite),
        ),
        (
            "cos⁻¹",
            unaire_valide(f64::acos, |x| format!("cos⁻¹({x})"), hors_intervalle_unite),
        ),
        ("tan⁻¹", unaire(f64::atan, |x| format!("tan⁻¹({x})"))),
        (
            "x⁻¹",
            unaire_valide(|x| 1.0 / x, |x| format!("({x})⁻¹"), inverse_de_zero),
        ),
        ("x²", unaire(|x| x * x, |x| format!("({x})²"))),
        ("ln", unaire_valide(f64::ln, |x| format!("ln({x})"), negatif)),
        ("√", unaire_valide(f64::sqrt, |x| format!("√({x})"), negatif)),
        ("=", Operation::Egal),
    ];

    table
        .into_iter()
        .map(|(symbole, op)| (symbole.to_string(), op))
        .collect()
}
