//! Currency amounts written out in Brazilian Portuguese
//!
//! Covers the range the money mask admits (below R$ 1.000.000,00).
//! Output starts with a capital letter, ready for the document's
//! "Valor ... – <extenso>" line.

use rust_decimal::prelude::*;

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

/// 10..=19 are irregular
const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

/// Index 1 is "cento"; bare 100 is the special case "cem"
const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Write a non-negative amount (2 decimal places max) out in full.
///
/// Zero is "Zero"; otherwise reais and centavos clauses, joined with
/// "e" when both are present.
pub fn to_words(amount: Decimal) -> String {
    let reais = amount.trunc().to_u64().unwrap_or(0);
    let centavos = ((amount - amount.trunc()) * Decimal::from(100))
        .round()
        .to_u64()
        .unwrap_or(0);

    if reais == 0 && centavos == 0 {
        return "Zero".to_string();
    }

    let mut out = String::new();
    if reais > 0 {
        out.push_str(&number_words(reais));
        out.push_str(if reais == 1 { " real" } else { " reais" });
    }
    if centavos > 0 {
        if reais > 0 {
            out.push_str(" e ");
        }
        out.push_str(&number_words(centavos));
        out.push_str(if centavos == 1 { " centavo" } else { " centavos" });
    }

    capitalize(out)
}

/// Spell out 1..=999_999.
fn number_words(n: u64) -> String {
    if n >= 1000 {
        let thousands = (n / 1000) as u32;
        let rest = (n % 1000) as u32;

        let mut out = if thousands == 1 {
            "mil".to_string()
        } else {
            format!("{} mil", under_thousand(thousands))
        };

        if rest > 0 {
            // "mil e vinte" / "dois mil e quinhentos", but plain
            // "mil duzentos e trinta" for the remaining shapes
            if rest < 100 || rest % 100 == 0 {
                out.push_str(" e ");
            } else {
                out.push(' ');
            }
            out.push_str(&under_thousand(rest));
        }
        out
    } else {
        under_thousand(n as u32)
    }
}

/// Spell out 1..=999.
fn under_thousand(n: u32) -> String {
    if n == 100 {
        return "cem".to_string();
    }

    let hundreds = (n / 100) as usize;
    let rest = n % 100;

    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(HUNDREDS[hundreds]);
        if rest > 0 {
            out.push_str(" e ");
        }
    }

    if rest > 0 {
        if (10..=19).contains(&rest) {
            out.push_str(TEENS[(rest - 10) as usize]);
        } else {
            let tens = (rest / 10) as usize;
            let units = (rest % 10) as usize;
            if tens > 0 {
                out.push_str(TENS[tens]);
                if units > 0 {
                    out.push_str(" e ");
                }
            }
            if units > 0 {
                out.push_str(UNITS[units]);
            }
        }
    }

    out
}

fn capitalize(s: String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => s,
    }
}
