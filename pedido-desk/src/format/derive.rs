//! Derived-field refresh pass
//!
//! Applied by the session after every raw edit so that
//! `total_value_words` and `payment_description` are never observably
//! stale. The pass is pure over the record; nothing else in the system
//! writes derived fields.

use shared::{OrderRecord, PaymentPlan};

use super::{fields, payment, words};

/// Recompute all derived fields in place.
///
/// The custom payment plan keeps its user-typed description untouched.
pub fn refresh(record: &mut OrderRecord) {
    let total = fields::parse_brl(&record.total_value);

    record.total_value_words = match total {
        Some(amount) => words::to_words(amount),
        None => String::new(),
    };

    if record.payment_plan != PaymentPlan::Custom {
        record.payment_description =
            payment::describe(record.payment_plan, record.installment_count, total);
    }
}
