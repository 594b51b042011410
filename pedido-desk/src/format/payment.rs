//! Payment plan descriptions
//!
//! Turns the selected plan and the current total into the "Forma de
//! pagamento" line. Computed plans never leave a stale description
//! behind; the custom plan's free text is owned by the session and not
//! produced here.

use rust_decimal::prelude::*;
use shared::PaymentPlan;

use super::fields::format_brl;

/// Counts outside this range yield an empty description.
pub const MIN_INSTALLMENTS: u32 = 2;
pub const MAX_INSTALLMENTS: u32 = 12;

/// Describe the plan for the given total.
///
/// A missing or non-positive total yields an empty string, as does an
/// installment count below [`MIN_INSTALLMENTS`]. The custom plan always
/// yields an empty string here: its text comes from the user.
pub fn describe(plan: PaymentPlan, installment_count: u32, total: Option<Decimal>) -> String {
    let Some(total) = total else {
        return String::new();
    };
    if total <= Decimal::ZERO {
        return String::new();
    }

    match plan {
        PaymentPlan::LumpSum => {
            let half = (total / Decimal::from(2))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!(
                "Sinal de {} no ato do pedido e {} na entrega",
                format_brl(half),
                format_brl(half)
            )
        }
        PaymentPlan::Installments => {
            if installment_count < MIN_INSTALLMENTS {
                return String::new();
            }
            // No remainder redistribution: the last installment is not
            // adjusted to absorb cent drift.
            let per = (total / Decimal::from(installment_count))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("Parcelado em {}x de {}", installment_count, format_brl(per))
        }
        PaymentPlan::Custom => String::new(),
    }
}

/// Per-installment amount, rounded to cents. Exposed for tests and for
/// shells that preview the split.
pub fn installment_amount(total: Decimal, count: u32) -> Decimal {
    (total / Decimal::from(count))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(cents: i64) -> Option<Decimal> {
        Some(Decimal::new(cents, 2))
    }

    #[test]
    fn test_lump_sum_halves_sum_to_total() {
        let total = Decimal::new(200_000, 2);
        let description = describe(PaymentPlan::LumpSum, 2, Some(total));

        assert_eq!(
            description,
            "Sinal de R$ 1.000,00 no ato do pedido e R$ 1.000,00 na entrega"
        );

        let half = total / Decimal::from(2);
        assert_eq!(half + half, total);
    }

    #[test]
    fn test_installments_description() {
        assert_eq!(
            describe(PaymentPlan::Installments, 3, amount(100_000)),
            "Parcelado em 3x de R$ 333,33"
        );
        assert_eq!(
            describe(PaymentPlan::Installments, 4, amount(200_000)),
            "Parcelado em 4x de R$ 500,00"
        );
    }

    #[test]
    fn test_installment_drift_stays_within_one_cent() {
        let total = Decimal::new(100_000, 2);
        let per = installment_amount(total, 3);

        let drift = (total - per * Decimal::from(3)).abs();
        assert!(drift <= Decimal::new(1, 2), "drift was {}", drift);
        assert_ne!(per * Decimal::from(3), total);
    }

    #[test]
    fn test_invalid_inputs_empty_description() {
        assert_eq!(describe(PaymentPlan::LumpSum, 2, None), "");
        assert_eq!(describe(PaymentPlan::LumpSum, 2, amount(0)), "");
        assert_eq!(describe(PaymentPlan::LumpSum, 2, amount(-500)), "");
        assert_eq!(describe(PaymentPlan::Installments, 1, amount(100_000)), "");
        assert_eq!(describe(PaymentPlan::Installments, 0, amount(100_000)), "");
    }

    #[test]
    fn test_custom_is_never_computed() {
        assert_eq!(describe(PaymentPlan::Custom, 2, amount(100_000)), "");
    }
}
