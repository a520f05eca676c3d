// src/noyau/format.rs
//
// Formatage décimal des nombres (description des opérandes + écran).
// Arrondi exact : f64 -> BigRational -> entier “scalé” (×10^chiffres) -> texte.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Garde-fou : au-delà, l’arrondi rationnel devient coûteux pour rien (f64 ≈ 17 chiffres).
pub const CHIFFRES_MAX: usize = 20;

/// Réglages d’affichage d’un nombre.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatNombre {
    /// Nombre maximal de décimales (zéros finaux retirés).
    pub chiffres_max: usize,
    pub separateur_milliers: String,
    pub separateur_decimal: String,
    pub symbole_nan: String,
}

impl Default for FormatNombre {
    fn default() -> Self {
        Self {
            chiffres_max: 6,
            separateur_milliers: " ".into(),
            separateur_decimal: ".".into(),
            symbole_nan: "ERROR".into(),
        }
    }
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Groupe les chiffres par 3 depuis la droite.
fn grouper(entier: &str, sep: &str) -> String {
    let n = entier.len();
    let mut out = String::with_capacity(n + n / 3 * sep.len());
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

impl FormatNombre {
    /// Nombre -> texte (ex: 1234.5 -> "1 234.5", 1/3 -> "0.333333").
    pub fn formater(&self, x: f64) -> String {
        if x.is_nan() {
            return self.symbole_nan.clone();
        }
        if x.is_infinite() {
            return if x > 0.0 { "∞".into() } else { "-∞".into() };
        }

        // f64 fini => conversion rationnelle exacte toujours possible.
        let Some(r) = BigRational::from_float(x) else {
            return self.symbole_nan.clone();
        };

        let chiffres = self.chiffres_max.min(CHIFFRES_MAX);
        let scale = pow10(chiffres);

        // arrondi demi loin de zéro
        let scaled = (r * BigRational::from_integer(scale.clone()))
            .round()
            .to_integer();

        if scaled.is_zero() {
            return "0".into();
        }

        let neg = scaled.is_negative();
        let abs = scaled.abs();
        let int_part = &abs / &scale;
        let frac_part = &abs % &scale;

        let mut out = String::new();
        if neg {
            out.push('-');
        }
        out.push_str(&grouper(&int_part.to_str_radix(10), &self.separateur_milliers));

        if chiffres > 0 && !frac_part.is_zero() {
            let mut frac = frac_part.to_str_radix(10);
            while frac.len() < chiffres {
                frac.insert(0, '0');
            }
            let frac = frac.trim_end_matches('0');
            out.push_str(&self.separateur_decimal);
            out.push_str(frac);
        }

        out
    }

    /// Texte d’écran -> nombre. None si illisible (ex: "ERROR", message d’erreur).
    pub fn lire(&self, texte: &str) -> Option<f64> {
        let t = texte.trim();
        if t.is_empty() || t == self.symbole_nan {
            return None;
        }

        let mut brut = if self.separateur_milliers.is_empty() {
            t.to_string()
        } else {
            t.replace(self.separateur_milliers.as_str(), "")
        };
        if self.separateur_decimal != "." {
            brut = brut.replace(self.separateur_decimal.as_str(), ".");
        }

        match brut.as_str() {
            "∞" => Some(f64::INFINITY),
            "-∞" => Some(f64::NEG_INFINITY),
            // "3." pendant la saisie reste lisible
            s => s.parse::<f64>().ok(),
        }
    }
}
