// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran (historique + valeur) puis pavé de touches
// - Chaque bouton appelle une action de etat.rs (aucun calcul ici)
// - Clavier : Enter = "=", Backspace = retour arrière (voir app.rs)

use eframe::egui;

use super::etat::AppCalc;

/// Touches scientifiques, ligne par ligne (symboles exacts de la table du noyau).
const FONCTIONS: [[&str; 5]; 3] = [
    ["sin", "cos", "tan", "x²", "xʸ"],
    ["sin⁻¹", "cos⁻¹", "tan⁻¹", "x⁻¹", "√"],
    ["ln", "π", "e", "rand", "±"],
];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(&'static str),
    Operation(&'static str),
    StockerMemoire,
    RappelerMemoire,
    EffacerMemoire,
    RetourArriere,
    ToutEffacer,
}

/// Pavé principal (4 colonnes).
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::ToutEffacer,
        Touche::RetourArriere,
        Touche::StockerMemoire,
        Touche::RappelerMemoire,
    ],
    [
        Touche::Chiffre("7"),
        Touche::Chiffre("8"),
        Touche::Chiffre("9"),
        Touche::Operation("÷"),
    ],
    [
        Touche::Chiffre("4"),
        Touche::Chiffre("5"),
        Touche::Chiffre("6"),
        Touche::Operation("×"),
    ],
    [
        Touche::Chiffre("1"),
        Touche::Chiffre("2"),
        Touche::Chiffre("3"),
        Touche::Operation("−"),
    ],
    [
        Touche::Chiffre("0"),
        Touche::Chiffre("."),
        Touche::Operation("="),
        Touche::Operation("+"),
    ],
];

impl Touche {
    fn libelle(self) -> &'static str {
        match self {
            Touche::Chiffre(s) | Touche::Operation(s) => s,
            Touche::StockerMemoire => "→M",
            Touche::RappelerMemoire => "M",
            Touche::EffacerMemoire => "MC",
            Touche::RetourArriere => "⌫",
            Touche::ToutEffacer => "C",
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_fonctions(ui);
        ui.add_space(6.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_programme(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    self.bouton(ui, Touche::EffacerMemoire, [36.0, 20.0]);
                    ui.monospace(self.texte_memoire());
                });
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(&self.historique);
                    let taille = egui::TextStyle::Heading.resolve(ui.style()).size * 1.4;
                    ui.label(egui::RichText::new(&self.ecran).monospace().size(taille));
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in FONCTIONS {
                    for symbole in ligne {
                        self.bouton(ui, Touche::Operation(symbole), [56.0, 30.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche, [72.0, 40.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_programme(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button("Sauver")
                .on_hover_text("Copie le programme (JSON)")
                .clicked()
            {
                self.sauver_programme();
            }
            if ui
                .add_enabled(self.instantane.is_some(), egui::Button::new("Restaurer"))
                .on_hover_text("Rejoue le programme sauvé")
                .clicked()
            {
                self.restaurer_programme();
            }
            if !self.message.is_empty() {
                ui.label(&self.message);
            }
        });

        if let Some(json) = &self.instantane {
            ui.add_space(4.0);
            ui.monospace(json);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) {
        if !ui
            .add_sized(taille, egui::Button::new(touche.libelle()))
            .clicked()
        {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.touche_chiffre(c),
            Touche::Operation(s) => self.touche_operation(s),
            Touche::StockerMemoire => self.stocker_memoire(),
            Touche::RappelerMemoire => self.rappeler_memoire(),
            Touche::EffacerMemoire => self.effacer_memoire(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::ToutEffacer => self.tout_effacer(),
        }
    }
}
