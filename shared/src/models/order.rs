//! Purchase order model

use serde::{Deserialize, Serialize};

/// Payment description strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentPlan {
    /// Half as a signal payment, half on delivery
    #[default]
    LumpSum,
    /// Equal installments, count in 2..=12
    Installments,
    /// Free text typed by the user
    Custom,
}

/// Delivery time representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryKind {
    /// "N dias" counted from the order date
    #[default]
    RelativeDays,
    /// Absolute date, DD/MM/YYYY
    FixedDate,
}

/// One product line within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductLine {
    pub item: String,
    /// Structure and finishing
    pub structure: String,
    /// Cover material (lona)
    pub material: String,
    pub accessories: String,
    /// Free form, e.g. "5,60X1,40"
    pub measure: String,
}

/// Purchase order record
///
/// Every field holds its display form. Derived fields
/// (`total_value_words`, `payment_description` outside the custom plan)
/// are recomputed by `pedido-desk::format::derive` after each edit and
/// must never be written independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRecord {
    /// Assigned at first save; `None` while the draft is unsaved
    pub id: Option<String>,
    /// Order date, DD/MM/YYYY
    pub date: String,
    pub client_name: String,
    pub client_address: String,
    pub client_neighborhood: String,
    pub client_city: String,
    /// CEP, masked XXXXX-XXX
    pub client_postal_code: String,
    pub client_phone: String,
    /// CPF, masked XXX.XXX.XXX-XX
    pub client_tax_id: String,
    /// RG, free form
    pub client_id_number: String,
    /// Never empty; entries are numbered in document order
    pub products: Vec<ProductLine>,
    /// Currency display form, e.g. "R$ 2.000,00"
    pub total_value: String,
    /// Written-out form of `total_value`
    pub total_value_words: String,
    pub payment_plan: PaymentPlan,
    /// Only meaningful under `Installments`
    pub installment_count: u32,
    /// Derived under LumpSum/Installments, free text under Custom
    pub payment_description: String,
    pub delivery_kind: DeliveryKind,
    /// "N dias" or DD/MM/YYYY, matching `delivery_kind`
    pub delivery_time: String,
}

impl OrderRecord {
    /// Fresh draft: everything blank except a single empty product line.
    pub fn new() -> Self {
        Self {
            id: None,
            date: String::new(),
            client_name: String::new(),
            client_address: String::new(),
            client_neighborhood: String::new(),
            client_city: String::new(),
            client_postal_code: String::new(),
            client_phone: String::new(),
            client_tax_id: String::new(),
            client_id_number: String::new(),
            products: vec![ProductLine::default()],
            total_value: String::new(),
            total_value_words: String::new(),
            payment_plan: PaymentPlan::default(),
            installment_count: 2,
            payment_description: String::new(),
            delivery_kind: DeliveryKind::default(),
            delivery_time: String::new(),
        }
    }
}

impl Default for OrderRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Listing row for the saved-orders picker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub id: String,
    pub client_name: String,
    pub date: String,
}

/// Address data returned by the postal-code lookup service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter state code (UF)
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_blank_product_line() {
        let record = OrderRecord::new();
        assert!(record.id.is_none());
        assert_eq!(record.products.len(), 1);
        assert_eq!(record.products[0], ProductLine::default());
        assert_eq!(record.installment_count, 2);
    }

    #[test]
    fn test_enums_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&PaymentPlan::LumpSum).unwrap();
        assert_eq!(json, "\"LUMP_SUM\"");
        let json = serde_json::to_string(&DeliveryKind::RelativeDays).unwrap();
        assert_eq!(json, "\"RELATIVE_DAYS\"");
    }
}
