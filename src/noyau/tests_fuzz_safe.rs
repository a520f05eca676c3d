//! Tests fuzz safe : propriétés de rejeu (proptest).
//!
//! - programmes bornés (longueur ≤ 40)
//! - "rand" exclu : seule source non déterministe
//! - comparaison des f64 par bits (NaN compris)

use proptest::prelude::*;

use super::erreurs::ErreurCalcul;
use super::programme::Entree;
use super::Evaluateur;

const SYMBOLES: &[&str] = &[
    "π", "e", "+", "−", "×", "÷", "xʸ", "±", "cos", "sin", "tan", "sin⁻¹", "cos⁻¹", "tan⁻¹",
    "x⁻¹", "x²", "ln", "√", "=", "M", "?",
];

fn entree() -> impl Strategy<Value = Entree> {
    prop_oneof![
        3 => (-20i32..20).prop_map(|n| Entree::Operande(n as f64)),
        1 => (-1.0e6f64..1.0e6).prop_map(Entree::Operande),
        5 => prop::sample::select(SYMBOLES).prop_map(Entree::from),
    ]
}

fn programme() -> impl Strategy<Value = Vec<Entree>> {
    prop::collection::vec(entree(), 0..40)
}

/// Instantané comparable (bits pour NaN/∞).
fn instantane(ev: &Evaluateur) -> (u64, Option<ErreurCalcul>, String, bool) {
    let (v, e) = ev.result();
    (v.to_bits(), e, ev.description(), ev.is_partial_result())
}

fn tape(ev: &mut Evaluateur, programme: &[Entree]) {
    for entree in programme {
        match entree {
            Entree::Operande(v) => ev.set_operand(*v),
            Entree::Symbole(s) if s == "M" => ev.set_operand_variable(s),
            Entree::Symbole(s) => ev.perform_operation(s),
        }
    }
}

proptest! {
    #[test]
    fn fuzz_rejeu_deterministe(prog in programme(), m in -10.0f64..10.0) {
        let mut direct = Evaluateur::default();
        direct.set_variable("M", m);
        tape(&mut direct, &prog);

        prop_assert_eq!(direct.program(), prog.as_slice());

        let mut rejoue = direct.clone();
        rejoue.set_program(direct.program().to_vec());
        prop_assert_eq!(instantane(&rejoue), instantane(&direct));
    }

    #[test]
    fn fuzz_undo_equivaut_au_rejeu(prog in programme()) {
        let mut ev = Evaluateur::default();
        ev.set_operand_variable("M");
        ev.clear();
        tape(&mut ev, &prog);

        let mut attendu = ev.clone();
        let mut raccourci = prog.clone();
        raccourci.pop();
        attendu.clear();
        attendu.set_program(raccourci.clone());

        ev.undo_last();
        prop_assert_eq!(ev.program(), raccourci.as_slice());
        prop_assert_eq!(instantane(&ev), instantane(&attendu));
    }

    #[test]
    fn fuzz_jamais_de_panique(prog in programme()) {
        let mut ev = Evaluateur::default();
        tape(&mut ev, &prog);
        for _ in 0..=prog.len() {
            ev.undo_last();
        }
        prop_assert!(ev.program().is_empty());
        prop_assert_eq!(ev.result(), (0.0, None));
    }
}
