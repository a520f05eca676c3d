//! src/app/etat.rs
//!
//! État UI (sans vue) : écran, historique, saisie en cours + l’évaluateur.
//!
//! Rôle : traduire les touches en appels au noyau (opérande ou symbole),
//! puis relire `result` / `description` pour remplir l’écran et l’historique.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Evaluateur`.
//! - Une erreur consultative remplace l’écran par son message.
//! - Historique : description + "..." si résultat partiel, sinon " =".

use tracing::{info, warn};

use crate::noyau::{Evaluateur, FormatNombre};

/// Nom de la variable mémoire (touches “→M” / “M”).
pub const MEMOIRE: &str = "M";

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub evaluateur: Evaluateur,

    // --- affichage ---
    pub ecran: String,
    pub historique: String,
    pub saisie_en_cours: bool,

    // --- instantané du programme (JSON) ---
    pub instantane: Option<String>,
    pub message: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(FormatNombre::default())
    }
}

impl AppCalc {
    pub fn new(format: FormatNombre) -> Self {
        Self {
            evaluateur: Evaluateur::new(format),
            ecran: "0".into(),
            historique: " ".into(),
            saisie_en_cours: false,
            instantane: None,
            message: String::new(),
        }
    }

    fn format(&self) -> &FormatNombre {
        self.evaluateur.format()
    }

    fn valeur_ecran(&self) -> Option<f64> {
        self.format().lire(&self.ecran)
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou séparateur décimal (un seul séparateur par nombre).
    pub fn touche_chiffre(&mut self, chiffre: &str) {
        let sep = self.format().separateur_decimal.clone();

        if self.saisie_en_cours {
            if chiffre != sep || !self.ecran.contains(sep.as_str()) {
                self.ecran.push_str(chiffre);
            }
        } else if chiffre == sep {
            self.ecran = format!("0{sep}");
        } else {
            self.ecran = chiffre.to_string();
        }
        self.saisie_en_cours = true;
    }

    pub fn touche_operation(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            if let Some(v) = self.valeur_ecran() {
                self.evaluateur.set_operand(v);
            }
            self.saisie_en_cours = false;
        }
        self.evaluateur.perform_operation(symbole);
        self.rafraichir();
    }

    /// “→M” : la valeur affichée devient celle de la mémoire (rejeu du programme).
    pub fn stocker_memoire(&mut self) {
        self.saisie_en_cours = false;
        if let Some(v) = self.valeur_ecran() {
            self.evaluateur.set_variable(MEMOIRE, v);
            self.rafraichir();
        }
    }

    /// “M” : insère la variable dans le programme.
    pub fn rappeler_memoire(&mut self) {
        self.saisie_en_cours = false;
        self.evaluateur.set_operand_variable(MEMOIRE);
        self.rafraichir();
    }

    /// “MC” : délie la mémoire (elle vaut de nouveau 0 dans le programme).
    pub fn effacer_memoire(&mut self) {
        self.saisie_en_cours = false;
        self.evaluateur.remove_variable(MEMOIRE);
        self.rafraichir();
    }

    /// Texte de la mémoire pour la vue ("M = 5", ou "M vide").
    pub fn texte_memoire(&self) -> String {
        match self.evaluateur.variable_values().get(MEMOIRE) {
            Some(v) => format!("{MEMOIRE} = {}", self.format().formater(*v)),
            None => format!("{MEMOIRE} vide"),
        }
    }

    /// Pendant la saisie : efface un caractère. Sinon : annule la dernière entrée.
    pub fn retour_arriere(&mut self) {
        if self.saisie_en_cours {
            self.ecran.pop();
            if self.ecran.is_empty() {
                self.saisie_en_cours = false;
                self.rafraichir();
            }
        } else {
            self.evaluateur.undo_last();
            self.rafraichir();
        }
    }

    /// C : programme + variables + écran.
    pub fn tout_effacer(&mut self) {
        self.evaluateur.clear();
        self.evaluateur.clear_variables();
        self.saisie_en_cours = false;
        self.ecran = "0".into();
        self.historique = " ".into();
        self.message.clear();
    }

    /* ------------------------ Instantané ------------------------ */

    pub fn sauver_programme(&mut self) {
        match self.evaluateur.program_json() {
            Ok(json) => {
                info!(octets = json.len(), "programme sauvé");
                self.message = format!("Programme sauvé ({} entrées)", self.evaluateur.program().len());
                self.instantane = Some(json);
            }
            Err(e) => {
                warn!(erreur = %e, "sauvegarde impossible");
                self.message = e.to_string();
            }
        }
    }

    pub fn restaurer_programme(&mut self) {
        let Some(json) = self.instantane.clone() else {
            self.message = "Aucun programme sauvé".into();
            return;
        };
        match self.evaluateur.set_program_json(&json) {
            Ok(()) => {
                self.saisie_en_cours = false;
                self.message = "Programme restauré".into();
                self.rafraichir();
            }
            Err(e) => {
                warn!(erreur = %e, "restauration impossible");
                self.message = e.to_string();
            }
        }
    }

    /* ------------------------ Rendu texte ------------------------ */

    fn rafraichir(&mut self) {
        let (valeur, erreur) = self.evaluateur.result();
        self.ecran = match erreur {
            Some(e) => e.to_string(),
            None => self.format().formater(valeur),
        };
        let suffixe = if self.evaluateur.is_partial_result() {
            "..."
        } else {
            " ="
        };
        self.historique = format!("{}{suffixe}", self.evaluateur.description());
    }
}
