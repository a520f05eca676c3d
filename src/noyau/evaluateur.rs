//! Noyau — machine à états d’évaluation
//!
//! accumulateur + description + opération binaire en attente + journal du programme.
//!
//! Contrats :
//! - Évaluation immédiate, gauche-à-droite : un opérateur binaire résout d’abord
//!   celui en attente (pas d’arbre, pas de précédence mathématique).
//! - La précédence ne sert qu’aux parenthèses de la description.
//! - Le journal est la seule source de vérité : annuler ou changer une variable
//!   efface puis rejoue tout le journal (O(n)).
//! - Jamais de panique : les erreurs sont consultatives (voir `ErreurCalcul`).

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::erreurs::{ErreurCalcul, ErreurProgramme};
use super::format::FormatNombre;
use super::operations::{operations_standard, Operation, Validation2, PRECEDENCE_MAX};
use super::programme::{programme_depuis_json, programme_vers_json, Entree};

/// Description “neutre” après `clear`.
pub const DESCRIPTION_VIDE: &str = " ";

#[derive(Clone, Debug)]
struct OperationEnAttente {
    calcul: fn(f64, f64) -> f64,
    premier_operande: f64,
    description: fn(&str, &str) -> String,
    texte_premier_operande: String,
    validation: Option<Validation2>,
}

#[derive(Clone, Debug)]
pub struct Evaluateur {
    accumulateur: f64,
    description: String,
    precedence_courante: u8,
    attente: Option<OperationEnAttente>,
    erreur: Option<ErreurCalcul>,

    operations: HashMap<String, Operation>,
    programme: Vec<Entree>,
    variables: HashMap<String, f64>,

    format: FormatNombre,
}

impl Default for Evaluateur {
    fn default() -> Self {
        Self::new(FormatNombre::default())
    }
}

impl Evaluateur {
    pub fn new(format: FormatNombre) -> Self {
        Self {
            accumulateur: 0.0,
            description: DESCRIPTION_VIDE.to_string(),
            precedence_courante: PRECEDENCE_MAX,
            attente: None,
            erreur: None,
            operations: operations_standard(),
            programme: Vec::new(),
            variables: HashMap::new(),
            format,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// (accumulateur, erreur du dernier validateur exécuté)
    pub fn result(&self) -> (f64, Option<ErreurCalcul>) {
        (self.accumulateur, self.erreur)
    }

    pub fn description(&self) -> String {
        match &self.attente {
            None => self.description.clone(),
            Some(a) => {
                // Ne pas répéter le premier terme contre lui-même (ex: "3 + " et non "3 + 3").
                let second = if a.texte_premier_operande != self.description {
                    self.description.as_str()
                } else {
                    ""
                };
                (a.description)(&a.texte_premier_operande, second)
            }
        }
    }

    pub fn is_partial_result(&self) -> bool {
        self.attente.is_some()
    }

    pub fn program(&self) -> &[Entree] {
        &self.programme
    }

    pub fn variable_values(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    pub fn format(&self) -> &FormatNombre {
        &self.format
    }

    /* ------------------------ Entrées ------------------------ */

    pub fn set_operand(&mut self, valeur: f64) {
        debug!(valeur, "opérande");
        self.accumulateur = valeur;
        let texte = self.format.formater(valeur);
        self.set_description(texte);
        self.programme.push(Entree::Operande(valeur));
    }

    /// Pose une référence de variable (enregistrée une fois, puis exécutée).
    pub fn set_operand_variable(&mut self, nom: &str) {
        self.operations
            .entry(nom.to_string())
            .or_insert(Operation::Variable);
        self.perform_operation(nom);
    }

    pub fn perform_operation(&mut self, symbole: &str) {
        // Journalisé même si inconnu : undo_last reste symétrique.
        self.programme.push(Entree::Symbole(symbole.to_string()));

        let Some(operation) = self.operations.get(symbole).copied() else {
            warn!(symbole, "symbole inconnu: ignoré (conservé dans le programme)");
            return;
        };
        debug!(symbole, "opération");

        match operation {
            Operation::Constante(valeur) => {
                self.accumulateur = valeur;
                self.set_description(symbole.to_string());
            }
            Operation::Nullaire(producteur, texte) => {
                self.accumulateur = producteur();
                self.set_description(texte.to_string());
            }
            Operation::Variable => {
                self.accumulateur = self.variables.get(symbole).copied().unwrap_or(0.0);
                self.set_description(symbole.to_string());
            }
            Operation::Unaire {
                calcul,
                description,
                validation,
            } => {
                self.erreur = validation.and_then(|v| v(self.accumulateur));
                self.accumulateur = calcul(self.accumulateur);
                let texte = description(&self.description);
                self.set_description(texte);
            }
            Operation::Binaire {
                calcul,
                description,
                precedence,
                validation,
            } => {
                self.resoudre_attente();

                if self.precedence_courante < precedence {
                    let texte = format!("({})", self.description);
                    self.set_description(texte);
                }
                self.precedence_courante = precedence;

                self.attente = Some(OperationEnAttente {
                    calcul,
                    premier_operande: self.accumulateur,
                    description,
                    texte_premier_operande: self.description.clone(),
                    validation,
                });
            }
            Operation::Egal => self.resoudre_attente(),
        }
    }

    /* ------------------------ Annulation / remise à zéro ------------------------ */

    pub fn undo_last(&mut self) {
        if self.programme.pop().is_none() {
            self.clear();
            return;
        }
        self.rejouer();
    }

    /// Remise à zéro (variables et noms de variables conservés).
    pub fn clear(&mut self) {
        self.accumulateur = 0.0;
        self.attente = None;
        self.erreur = None;
        self.set_description(DESCRIPTION_VIDE.to_string());
        self.precedence_courante = PRECEDENCE_MAX;
        self.programme.clear();
    }

    /* ------------------------ Programme / variables ------------------------ */

    /// Remplace le journal puis le rejoue depuis un état effacé.
    ///
    /// Un symbole absent de la table mais lié dans les variables est enregistré
    /// comme variable : le programme se rejoue pareil dans un évaluateur neuf.
    pub fn set_program(&mut self, programme: Vec<Entree>) {
        for entree in &programme {
            if let Entree::Symbole(s) = entree {
                if !self.operations.contains_key(s) && self.variables.contains_key(s) {
                    self.operations.insert(s.clone(), Operation::Variable);
                }
            }
        }
        self.programme = programme;
        self.rejouer();
    }

    pub fn program_json(&self) -> Result<String, ErreurProgramme> {
        programme_vers_json(&self.programme)
    }

    pub fn set_program_json(&mut self, json: &str) -> Result<(), ErreurProgramme> {
        let programme = programme_depuis_json(json)?;
        self.set_program(programme);
        Ok(())
    }

    pub fn set_variable(&mut self, nom: &str, valeur: f64) {
        debug!(nom, valeur, "variable");
        self.variables.insert(nom.to_string(), valeur);
        self.rejouer();
    }

    pub fn remove_variable(&mut self, nom: &str) {
        if self.variables.remove(nom).is_some() {
            self.rejouer();
        }
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
        self.rejouer();
    }

    /* ------------------------ Interne ------------------------ */

    /// Toute description posée hors attente remet la précédence à “non bornée”.
    fn set_description(&mut self, texte: String) {
        self.description = texte;
        if self.attente.is_none() {
            self.precedence_courante = PRECEDENCE_MAX;
        }
    }

    /// Le dernier validateur gagne : écrase l’erreur du second opérande.
    fn resoudre_attente(&mut self) {
        let Some(a) = self.attente.clone() else {
            return;
        };

        self.erreur = a
            .validation
            .and_then(|v| v(a.premier_operande, self.accumulateur));
        self.accumulateur = (a.calcul)(a.premier_operande, self.accumulateur);
        // description posée pendant l’attente : la précédence courante survit
        let texte = (a.description)(&a.texte_premier_operande, &self.description);
        self.set_description(texte);
        self.attente = None;
    }

    fn rejouer(&mut self) {
        let programme = std::mem::take(&mut self.programme);
        trace!(entrees = programme.len(), "rejeu du programme");

        self.clear();
        for entree in programme {
            match entree {
                Entree::Operande(v) => self.set_operand(v),
                Entree::Symbole(s) => self.perform_operation(&s),
            }
        }
    }
}
