//! Form session
//!
//! Owns the draft order, the session-only logo and the saved-order
//! store. Every mutating entry point applies the field's input mask,
//! assigns, and runs the derived-field refresh, so the state the shell
//! reads back is never stale.

use pedido_doc::{Document, DocumentAssembler};
use shared::{DeliveryKind, OrderRecord, OrderSummary, PaymentPlan, ResolvedAddress};

use crate::format::fields::{
    digit_stream, format_field, from_picker_date, money_input, to_picker_date, FieldKind,
};
use crate::format::{derive, payment};
use crate::logo::LogoImage;
use crate::lookup::AddressLookup;
use crate::store::{OrderStore, StoreResult};

/// Editable fields of one product line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Item,
    Structure,
    Material,
    Accessories,
    Measure,
}

/// The form-session owner: draft lifecycle, store orchestration,
/// logo, and document projection.
pub struct FormSession {
    draft: OrderRecord,
    logo: Option<LogoImage>,
    store: OrderStore,
    assembler: DocumentAssembler,
}

impl FormSession {
    pub fn new(store: OrderStore) -> Self {
        Self {
            draft: OrderRecord::new(),
            logo: None,
            store,
            assembler: DocumentAssembler::default(),
        }
    }

    /// The draft as the shell renders it.
    pub fn draft(&self) -> &OrderRecord {
        &self.draft
    }

    // === Field edits ===

    pub fn set_order_date(&mut self, raw: &str) {
        self.draft.date = format_field(FieldKind::Date, raw);
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_name(&mut self, raw: &str) {
        self.draft.client_name = raw.to_string();
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_address(&mut self, raw: &str) {
        self.draft.client_address = raw.to_string();
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_neighborhood(&mut self, raw: &str) {
        self.draft.client_neighborhood = raw.to_string();
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_city(&mut self, raw: &str) {
        self.draft.client_city = raw.to_string();
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_postal_code(&mut self, raw: &str) {
        self.draft.client_postal_code = format_field(FieldKind::PostalCode, raw);
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_phone(&mut self, raw: &str) {
        self.draft.client_phone = format_field(FieldKind::Phone, raw);
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_tax_id(&mut self, raw: &str) {
        self.draft.client_tax_id = format_field(FieldKind::TaxId, raw);
        derive::refresh(&mut self.draft);
    }

    pub fn set_client_id_number(&mut self, raw: &str) {
        self.draft.client_id_number = raw.to_string();
        derive::refresh(&mut self.draft);
    }

    /// Money edit: display form and written-out form always change
    /// together.
    pub fn set_total_value(&mut self, raw: &str) {
        let money = money_input(raw);
        self.draft.total_value = money.display;
        self.draft.total_value_words = money.words;
        derive::refresh(&mut self.draft);
    }

    // === Payment plan ===

    /// Switch the payment plan. Entering the custom plan drops the
    /// previously computed description; leaving it drops the free text.
    pub fn set_payment_plan(&mut self, plan: PaymentPlan) {
        if self.draft.payment_plan == plan {
            return;
        }
        self.draft.payment_plan = plan;
        self.draft.payment_description.clear();
        derive::refresh(&mut self.draft);
    }

    /// Free-text description; only the custom plan accepts edits.
    pub fn set_custom_payment_text(&mut self, raw: &str) {
        if self.draft.payment_plan == PaymentPlan::Custom {
            self.draft.payment_description = raw.to_string();
        }
    }

    /// Clamped to the exposed 2..=12 range.
    pub fn set_installment_count(&mut self, count: u32) {
        self.draft.installment_count =
            count.clamp(payment::MIN_INSTALLMENTS, payment::MAX_INSTALLMENTS);
        derive::refresh(&mut self.draft);
    }

    // === Delivery ===

    /// Switching the kind clears the stored value instead of
    /// reinterpreting it.
    pub fn set_delivery_kind(&mut self, kind: DeliveryKind) {
        if self.draft.delivery_kind == kind {
            return;
        }
        self.draft.delivery_kind = kind;
        self.draft.delivery_time.clear();
    }

    /// Relative delivery, "N dias". Ignored under the fixed-date kind.
    pub fn set_delivery_days(&mut self, raw: &str) {
        if self.draft.delivery_kind == DeliveryKind::RelativeDays {
            self.draft.delivery_time = format_field(FieldKind::DeliveryDays, raw);
        }
    }

    /// Fixed delivery date from the picker (YYYY-MM-DD). Ignored under
    /// the relative kind.
    pub fn set_delivery_date(&mut self, picker_value: &str) {
        if self.draft.delivery_kind == DeliveryKind::FixedDate {
            self.draft.delivery_time = from_picker_date(picker_value);
        }
    }

    /// Round-trip value for the date picker; empty unless the stored
    /// value has the exact DD/MM/YYYY shape.
    pub fn delivery_date_picker_value(&self) -> String {
        to_picker_date(&self.draft.delivery_time)
    }

    // === Product lines ===

    pub fn edit_product(&mut self, index: usize, field: ProductField, raw: &str) {
        let Some(product) = self.draft.products.get_mut(index) else {
            return;
        };
        let slot = match field {
            ProductField::Item => &mut product.item,
            ProductField::Structure => &mut product.structure,
            ProductField::Material => &mut product.material,
            ProductField::Accessories => &mut product.accessories,
            ProductField::Measure => &mut product.measure,
        };
        *slot = raw.to_string();
    }

    pub fn add_product_line(&mut self) {
        self.draft.products.push(Default::default());
    }

    /// Removing the last remaining line is a no-op: an order always has
    /// at least one product.
    pub fn remove_product_line(&mut self, index: usize) {
        if self.draft.products.len() <= 1 || index >= self.draft.products.len() {
            return;
        }
        self.draft.products.remove(index);
    }

    // === Store ===

    /// Persist the draft, assigning its ID on first save.
    pub fn save(&mut self) -> StoreResult<String> {
        self.store.save(&mut self.draft)
    }

    /// Replace the draft with a stored order. Returns false (draft
    /// untouched) when the ID is unknown.
    pub fn load(&mut self, id: &str) -> bool {
        match self.store.load(id) {
            Some(record) => {
                self.draft = record;
                true
            }
            None => false,
        }
    }

    /// Delete a stored order. Deleting the order behind the active
    /// draft resets the draft to empty.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        self.store.delete(id)?;
        if self.draft.id.as_deref() == Some(id) {
            self.draft = OrderRecord::new();
        }
        Ok(())
    }

    pub fn saved_orders(&self) -> Vec<OrderSummary> {
        self.store.list()
    }

    // === Logo ===

    pub fn set_logo(&mut self, logo: LogoImage) {
        self.logo = Some(logo);
    }

    pub fn clear_logo(&mut self) {
        self.logo = None;
    }

    pub fn logo(&self) -> Option<&LogoImage> {
        self.logo.as_ref()
    }

    // === Address lookup ===

    /// The 8-digit stream of the draft's postal code, once complete.
    pub fn lookup_ready(&self) -> Option<String> {
        let stream = digit_stream(&self.draft.client_postal_code);
        (stream.len() == 8).then_some(stream)
    }

    /// Resolve and apply the postal code if it is complete. Unknown
    /// codes and transport failures leave the draft untouched; failures
    /// are logged and never surfaced.
    pub async fn resolve_address(&mut self, lookup: &dyn AddressLookup) {
        let Some(cep) = self.lookup_ready() else {
            return;
        };
        match lookup.resolve(&cep).await {
            Ok(Some(address)) => self.apply_resolved_address(&address),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(cep = %cep, error = %err, "postal code lookup failed");
            }
        }
    }

    /// Overwrite street, neighborhood and city from a resolved address.
    /// The combined city field takes the "Cidade/UF" form.
    pub fn apply_resolved_address(&mut self, address: &ResolvedAddress) {
        self.draft.client_address = address.street.clone();
        self.draft.client_neighborhood = address.neighborhood.clone();
        self.draft.client_city = format!("{}/{}", address.city, address.region);
    }

    // === Projection ===

    /// The render tree for the preview shell.
    pub fn document(&self) -> Document {
        self.assembler
            .assemble(&self.draft, self.logo.as_ref().map(LogoImage::to_node))
    }

    /// The `.txt` export payload.
    pub fn plain_text(&self) -> String {
        self.assembler.plain_text(&self.draft)
    }

    /// Suggested name for the `.txt` export.
    pub fn text_file_name(&self) -> String {
        crate::export::text_file_name(&self.draft.client_name, &self.draft.date)
    }

    // === Reset ===

    /// Fresh draft and no logo, as if the session had just started.
    pub fn reset(&mut self) {
        self.draft = OrderRecord::new();
        self.logo = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, LookupResult};
    use async_trait::async_trait;

    fn session() -> FormSession {
        FormSession::new(OrderStore::open_in_memory().unwrap())
    }

    fn svg_logo() -> LogoImage {
        LogoImage::from_bytes(b"<svg xmlns='http://www.w3.org/2000/svg'/>".to_vec(), "image/svg+xml")
            .unwrap()
    }

    #[test]
    fn test_field_edits_apply_masks_and_derive() {
        let mut s = session();
        s.set_client_tax_id("30412109832");
        s.set_client_phone("11944332782");
        s.set_total_value("200000");

        assert_eq!(s.draft().client_tax_id, "304.121.098-32");
        assert_eq!(s.draft().client_phone, "(11) 94433-2782");
        assert_eq!(s.draft().total_value, "R$ 2.000,00");
        assert_eq!(s.draft().total_value_words, "Dois mil reais");
        assert_eq!(
            s.draft().payment_description,
            "Sinal de R$ 1.000,00 no ato do pedido e R$ 1.000,00 na entrega"
        );
    }

    #[test]
    fn test_payment_plan_switches_clear_descriptions() {
        let mut s = session();
        s.set_total_value("100000");
        assert!(s.draft().payment_description.starts_with("Sinal"));

        s.set_payment_plan(PaymentPlan::Custom);
        assert_eq!(s.draft().payment_description, "");

        s.set_custom_payment_text("Pix na entrega");
        assert_eq!(s.draft().payment_description, "Pix na entrega");

        s.set_payment_plan(PaymentPlan::Installments);
        assert_eq!(s.draft().payment_description, "Parcelado em 2x de R$ 500,00");
    }

    #[test]
    fn test_custom_text_ignored_outside_custom_plan() {
        let mut s = session();
        s.set_total_value("100000");
        let computed = s.draft().payment_description.clone();

        s.set_custom_payment_text("livre");

        assert_eq!(s.draft().payment_description, computed);
    }

    #[test]
    fn test_installment_count_is_clamped() {
        let mut s = session();
        s.set_installment_count(1);
        assert_eq!(s.draft().installment_count, 2);
        s.set_installment_count(30);
        assert_eq!(s.draft().installment_count, 12);
        s.set_installment_count(6);
        assert_eq!(s.draft().installment_count, 6);
    }

    #[test]
    fn test_delivery_kind_switch_clears_value() {
        let mut s = session();
        s.set_delivery_days("20");
        assert_eq!(s.draft().delivery_time, "20 dias");

        s.set_delivery_kind(DeliveryKind::FixedDate);
        assert_eq!(s.draft().delivery_time, "");

        s.set_delivery_date("2025-05-12");
        assert_eq!(s.draft().delivery_time, "12/05/2025");
        assert_eq!(s.delivery_date_picker_value(), "2025-05-12");

        s.set_delivery_kind(DeliveryKind::RelativeDays);
        assert_eq!(s.draft().delivery_time, "");
        assert_eq!(s.delivery_date_picker_value(), "");
    }

    #[test]
    fn test_delivery_setters_respect_active_kind() {
        let mut s = session();
        s.set_delivery_date("2025-05-12");
        assert_eq!(s.draft().delivery_time, "");

        s.set_delivery_kind(DeliveryKind::FixedDate);
        s.set_delivery_days("20");
        assert_eq!(s.draft().delivery_time, "");
    }

    #[test]
    fn test_product_line_guards() {
        let mut s = session();
        s.edit_product(0, ProductField::Item, "Cobertura");
        s.remove_product_line(0);
        assert_eq!(s.draft().products.len(), 1);
        assert_eq!(s.draft().products[0].item, "Cobertura");

        s.add_product_line();
        s.edit_product(1, ProductField::Measure, "5,60X1,40");
        assert_eq!(s.draft().products.len(), 2);

        s.remove_product_line(0);
        assert_eq!(s.draft().products.len(), 1);
        assert_eq!(s.draft().products[0].measure, "5,60X1,40");

        // out of range: no-op
        s.edit_product(9, ProductField::Item, "x");
        s.remove_product_line(9);
        assert_eq!(s.draft().products.len(), 1);
    }

    #[test]
    fn test_save_load_delete_lifecycle() {
        let mut s = session();
        s.set_client_name("Lygia");
        s.set_order_date("12052025");

        let id = s.save().unwrap();
        assert_eq!(s.draft().id.as_deref(), Some(id.as_str()));

        s.reset();
        assert!(s.draft().id.is_none());

        assert!(s.load(&id));
        assert_eq!(s.draft().client_name, "Lygia");
        assert_eq!(s.draft().date, "12/05/2025");

        s.delete(&id).unwrap();
        assert!(s.draft().id.is_none());
        assert!(s.draft().client_name.is_empty());
        assert!(!s.load(&id));
    }

    #[test]
    fn test_load_unknown_id_keeps_draft() {
        let mut s = session();
        s.set_client_name("Lygia");

        assert!(!s.load("nope"));
        assert_eq!(s.draft().client_name, "Lygia");
    }

    #[test]
    fn test_saved_orders_listing() {
        let mut s = session();
        s.set_client_name("Ana");
        s.save().unwrap();
        s.reset();
        s.set_client_name("Bruno");
        s.save().unwrap();

        let names: Vec<String> = s
            .saved_orders()
            .into_iter()
            .map(|o| o.client_name)
            .collect();
        assert_eq!(names, ["Ana", "Bruno"]);
    }

    #[test]
    fn test_reset_clears_draft_and_logo() {
        let mut s = session();
        s.set_client_name("Lygia");
        s.set_logo(svg_logo());
        assert!(s.logo().is_some());

        s.reset();

        assert!(s.draft().client_name.is_empty());
        assert!(s.logo().is_none());
    }

    #[test]
    fn test_document_projection_includes_logo() {
        let mut s = session();
        s.set_logo(svg_logo());
        let doc = s.document();
        let logo = doc.header.logo.unwrap();
        assert!(logo.data_url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_lookup_ready_requires_full_stream() {
        let mut s = session();
        s.set_client_postal_code("09251");
        assert!(s.lookup_ready().is_none());

        s.set_client_postal_code("09251040");
        assert_eq!(s.lookup_ready().as_deref(), Some("09251040"));
    }

    struct FixedLookup(Option<ResolvedAddress>);

    #[async_trait]
    impl AddressLookup for FixedLookup {
        async fn resolve(&self, _cep: &str) -> LookupResult<Option<ResolvedAddress>> {
            Ok(self.0.clone())
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl AddressLookup for FailingLookup {
        async fn resolve(&self, _cep: &str) -> LookupResult<Option<ResolvedAddress>> {
            Err(LookupError::InvalidPostalCode("x".into()))
        }
    }

    #[tokio::test]
    async fn test_resolve_address_applies_fields() {
        let mut s = session();
        s.set_client_postal_code("09251040");

        let lookup = FixedLookup(Some(ResolvedAddress {
            street: "Avenida Araucária".to_string(),
            neighborhood: "Parque Novo Oratório".to_string(),
            city: "Santo André".to_string(),
            region: "SP".to_string(),
        }));
        s.resolve_address(&lookup).await;

        assert_eq!(s.draft().client_address, "Avenida Araucária");
        assert_eq!(s.draft().client_neighborhood, "Parque Novo Oratório");
        assert_eq!(s.draft().client_city, "Santo André/SP");
    }

    #[tokio::test]
    async fn test_resolve_address_not_found_and_failure_leave_draft() {
        let mut s = session();
        s.set_client_postal_code("09251040");
        s.set_client_address("Rua Aquário, 259");

        s.resolve_address(&FixedLookup(None)).await;
        assert_eq!(s.draft().client_address, "Rua Aquário, 259");

        s.resolve_address(&FailingLookup).await;
        assert_eq!(s.draft().client_address, "Rua Aquário, 259");
    }

    #[tokio::test]
    async fn test_resolve_address_skips_incomplete_code() {
        let mut s = session();
        s.set_client_postal_code("0925");
        s.set_client_address("manter");

        // would apply if called; the incomplete code prevents it
        let lookup = FixedLookup(Some(ResolvedAddress {
            street: "não".to_string(),
            neighborhood: String::new(),
            city: String::new(),
            region: String::new(),
        }));
        s.resolve_address(&lookup).await;

        assert_eq!(s.draft().client_address, "manter");
    }
}
