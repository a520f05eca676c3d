//! Tests scientifiques (campagne) : propriétés observables de l’évaluateur.
//!
//! Notes :
//! - L’évaluation est gauche-à-droite : "3 + 4 × 5 =" vaut 35, pas 23.
//!   La précédence ne change que les parenthèses de la description.
//! - Le rejeu est déterministe sauf pour "rand" (libellé seulement).

use pretty_assertions::assert_eq;

use super::evaluateur::DESCRIPTION_VIDE;
use super::erreurs::ErreurCalcul;
use super::programme::Entree;
use super::Evaluateur;

fn evalue(touches: &[Entree]) -> Evaluateur {
    let mut ev = Evaluateur::default();
    ev.set_program(touches.to_vec());
    ev
}

fn p(touches: &[&str]) -> Vec<Entree> {
    touches
        .iter()
        .map(|t| match t.parse::<f64>() {
            Ok(v) => Entree::Operande(v),
            Err(_) => Entree::from(*t),
        })
        .collect()
}

fn assert_erreur(touches: &[&str], attendue: ErreurCalcul) {
    let ev = evalue(&p(touches));
    assert_eq!(ev.result().1, Some(attendue), "touches={touches:?}");
}

/* ------------------------ Erreurs consultatives ------------------------ */

#[test]
fn sci_erreurs() {
    assert_erreur(&["1", "÷", "0", "="], ErreurCalcul::DivisionParZero);
    assert_erreur(&["0", "x⁻¹"], ErreurCalcul::DivisionParZero);
    assert_erreur(&["-4", "√"], ErreurCalcul::ArgumentNegatif);
    assert_erreur(&["-1", "ln"], ErreurCalcul::ArgumentNegatif);
    assert_erreur(&["2", "sin⁻¹"], ErreurCalcul::HorsDomaine);
    assert_erreur(&["-1.5", "cos⁻¹"], ErreurCalcul::HorsDomaine);
}

#[test]
fn sci_erreur_ne_bloque_pas_le_calcul() {
    let ev = evalue(&p(&["1", "÷", "0", "="]));
    assert_eq!(ev.result().0, f64::INFINITY);

    let ev = evalue(&p(&["2", "sin⁻¹"]));
    assert!(ev.result().0.is_nan());
    assert_eq!(ev.description(), "sin⁻¹(2)");
}

#[test]
fn sci_bornes_valides_sans_erreur() {
    for touches in [
        &["1", "sin⁻¹"][..],
        &["-1", "cos⁻¹"],
        &["0", "√"],
        &["0", "ln"],
        &["0", "÷", "5", "="],
    ] {
        let ev = evalue(&p(touches));
        assert_eq!(ev.result().1, None, "touches={touches:?}");
    }
}

/* ------------------------ Binaires : a op b = ------------------------ */

#[test]
fn sci_binaires_combinent() {
    let cas: [(&str, f64, f64, f64); 5] = [
        ("+", 2.5, 4.0, 6.5),
        ("−", 2.5, 4.0, -1.5),
        ("×", 2.5, 4.0, 10.0),
        ("÷", 10.0, 4.0, 2.5),
        ("xʸ", 2.0, 10.0, 1024.0),
    ];
    for (op, a, b, attendu) in cas {
        let ev = evalue(&[a.into(), op.into(), b.into(), "=".into()]);
        assert_eq!(ev.result(), (attendu, None), "op={op}");
    }
}

#[test]
fn sci_gauche_a_droite() {
    let ev = evalue(&p(&["3", "+", "4", "×", "5", "="]));
    assert_eq!(ev.result().0, 35.0);
    assert_eq!(ev.description(), "(3 + 4) × 5");
}

#[test]
fn sci_egal_sans_attente_est_neutre() {
    let ev = evalue(&p(&["8", "=", "="]));
    assert_eq!(ev.result(), (8.0, None));
    assert_eq!(ev.description(), "8");
}

#[test]
fn sci_binaire_remplace_par_binaire() {
    // "+" puis "×" sans opérande : 3 + 3, puis × en attente
    let ev = evalue(&p(&["3", "+", "×", "2", "="]));
    assert_eq!(ev.result().0, 12.0);
}

/* ------------------------ clear / description ------------------------ */

#[test]
fn sci_clear_etat_neutre() {
    let mut ev = evalue(&p(&["9", "×", "√"]));
    ev.clear();
    assert_eq!(ev.result(), (0.0, None));
    assert_eq!(ev.description(), DESCRIPTION_VIDE);
    assert!(!ev.is_partial_result());
}

#[test]
fn sci_description_partielle() {
    let ev = evalue(&p(&["6", "÷"]));
    assert!(ev.is_partial_result());
    assert_eq!(ev.description(), "6 ÷ ");

    let ev = evalue(&p(&["6", "÷", "π"]));
    assert_eq!(ev.description(), "6 ÷ π");
}

#[test]
fn sci_unaires_descriptions() {
    let ev = evalue(&p(&["2", "x²", "±", "cos"]));
    assert_eq!(ev.description(), "cos(-((2)²))");
    assert_eq!(ev.result().0, (-4.0f64).cos());
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_variable_liee_puis_deliee() {
    let mut ev = Evaluateur::default();
    ev.set_variable("M", 5.0);
    ev.set_operand_variable("M");
    ev.perform_operation("+");
    ev.set_operand(3.0);
    ev.perform_operation("=");
    assert_eq!(ev.result().0, 8.0);

    ev.clear_variables();
    assert_eq!(ev.result().0, 3.0);
}

#[test]
fn sci_programme_avec_variable_dans_evaluateur_neuf() {
    // "M" jamais posé ici : le programme restauré le reconnaît via les variables liées.
    let mut ev = Evaluateur::default();
    ev.set_variable("M", 5.0);
    ev.set_program(p(&["M", "+", "3", "="]));
    assert_eq!(ev.result(), (8.0, None));
    assert_eq!(ev.description(), "M + 3");

    ev.clear_variables();
    assert_eq!(ev.result().0, 3.0);
    assert_eq!(ev.description(), "M + 3");
}

#[test]
fn sci_symbole_ni_operation_ni_variable_reste_inconnu() {
    let mut ev = Evaluateur::default();
    ev.set_program(p(&["2", "Z"]));
    assert_eq!(ev.result().0, 2.0);
    assert_eq!(ev.program().len(), 2);
}
