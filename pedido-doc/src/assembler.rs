//! Purchase order assembler
//!
//! Projects an `OrderRecord` into the renderable document tree and into
//! the plain-text export. Both projections share the same line
//! templates so preview and `.txt` never drift apart.

use shared::{OrderRecord, ProductLine};

use crate::builder::TextDocBuilder;
use crate::document::{Document, Header, LogoNode, ProductEntry, Section};
use crate::letterhead::{
    BANK_DETAILS_LINE, CONTRACTOR_LINES, DELIVERY_LABEL, DOC_TITLE, FOOTER_LINES, ISSUER_NAME,
    ISSUER_TAGLINE, PRODUCT_LABELS, SECTION_CLIENT, SECTION_CONTRACTOR, SECTION_PRODUCTS,
    WARRANTY_LINE,
};

/// Purchase order assembler
///
/// Read-only over the record: assembling never mutates or re-derives
/// field values.
pub struct DocumentAssembler {
    width: usize,
}

impl DocumentAssembler {
    /// Create an assembler with the given plain-text line width
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Build the render tree for the preview shell
    pub fn assemble(&self, record: &OrderRecord, logo: Option<LogoNode>) -> Document {
        Document {
            header: Header {
                logo,
                issuer: ISSUER_NAME.to_string(),
                tagline: ISSUER_TAGLINE.to_string(),
                title: DOC_TITLE.to_string(),
            },
            date_line: format!("Data: {}", record.date),
            contractor: Section {
                title: SECTION_CONTRACTOR.to_string(),
                lines: CONTRACTOR_LINES.iter().map(|s| s.to_string()).collect(),
            },
            client: Section {
                title: SECTION_CLIENT.to_string(),
                lines: client_lines(record),
            },
            products_title: SECTION_PRODUCTS.to_string(),
            products: record
                .products
                .iter()
                .enumerate()
                .map(|(idx, product)| ProductEntry {
                    lines: product_lines(idx, product),
                })
                .collect(),
            boxed_lines: summary_lines(record),
            closing_lines: closing_lines(record),
            footer_lines: FOOTER_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Flatten the record into the `.txt` export string
    pub fn plain_text(&self, record: &OrderRecord) -> String {
        let mut b = TextDocBuilder::new(self.width);

        self.render_title(&mut b);
        b.blank();
        b.write_line(&format!("Data: {}", record.date));
        b.blank();

        self.render_section(&mut b, SECTION_CONTRACTOR, &CONTRACTOR_LINES);
        let client = client_lines(record);
        self.render_section(&mut b, SECTION_CLIENT, &client);
        self.render_products(&mut b, record);

        for line in summary_lines(record) {
            b.write_line(&line);
        }
        b.blank();
        for line in closing_lines(record) {
            b.write_line(&line);
        }
        b.blank();

        self.render_footer(&mut b);

        b.finalize()
    }

    fn render_title(&self, b: &mut TextDocBuilder) {
        b.eq_sep();
        b.text_center(ISSUER_NAME);
        b.text_center(ISSUER_TAGLINE);
        b.blank();
        b.text_center(DOC_TITLE);
        b.eq_sep();
    }

    fn render_section<S: AsRef<str>>(&self, b: &mut TextDocBuilder, title: &str, lines: &[S]) {
        b.write_line(&title.to_uppercase());
        b.dash_sep();
        for line in lines {
            b.write_line(line.as_ref());
        }
        b.blank();
    }

    fn render_products(&self, b: &mut TextDocBuilder, record: &OrderRecord) {
        b.write_line(&SECTION_PRODUCTS.to_uppercase());
        b.dash_sep();
        for (idx, product) in record.products.iter().enumerate() {
            if idx > 0 {
                b.dash_sep();
            }
            for line in product_lines(idx, product) {
                b.write_line(&line);
            }
        }
        b.blank();
    }

    fn render_footer(&self, b: &mut TextDocBuilder) {
        b.dash_sep();
        for line in FOOTER_LINES {
            b.write_line(line);
        }
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(72)
    }
}

/// Contratante block, one template line per field
fn client_lines(record: &OrderRecord) -> Vec<String> {
    vec![
        format!("Nome: {}", record.client_name),
        format!("Endereço: {}", record.client_address),
        format!("Bairro: {}", record.client_neighborhood),
        format!("Cidade: {}", record.client_city),
        format!("CEP: {}", record.client_postal_code),
        format!("Telefone: {}", record.client_phone),
        format!(
            "CPF: {} / RG: {}",
            record.client_tax_id, record.client_id_number
        ),
    ]
}

/// Numbered product block ("Item 1: ...", then the remaining labels)
fn product_lines(idx: usize, product: &ProductLine) -> Vec<String> {
    let [item, structure, material, accessories, measure] = PRODUCT_LABELS;
    vec![
        format!("{} {}: {}", item, idx + 1, product.item),
        format!("{}: {}", structure, product.structure),
        format!("{}: {}", material, product.material),
        format!("{}: {}", accessories, product.accessories),
        format!("{}: {}", measure, product.measure),
    ]
}

/// The three bordered emphasis lines
fn summary_lines(record: &OrderRecord) -> Vec<String> {
    vec![
        format!(
            "Valor {} – {}",
            record.total_value, record.total_value_words
        ),
        format!("Forma de pagamento: {}", record.payment_description),
        BANK_DETAILS_LINE.to_string(),
    ]
}

fn closing_lines(record: &OrderRecord) -> Vec<String> {
    vec![
        format!("{}: {}", DELIVERY_LABEL, record.delivery_time),
        WARRANTY_LINE.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProductLine;

    fn sample_record() -> OrderRecord {
        let mut record = OrderRecord::new();
        record.date = "12/05/2025".to_string();
        record.client_name = "Lygia Barros Fagundes".to_string();
        record.total_value = "R$ 2.000,00".to_string();
        record.total_value_words = "Dois mil reais".to_string();
        record.payment_description =
            "Sinal de R$ 1.000,00 no ato do pedido e R$ 1.000,00 na entrega".to_string();
        record.delivery_time = "20 dias".to_string();
        record.products[0].item = "Cobertura em policarbonato".to_string();
        record.products[0].measure = "5,60X1,40".to_string();
        record
    }

    #[test]
    fn test_plain_text_numbers_products_in_order() {
        let mut record = sample_record();
        record.products.push(ProductLine {
            item: "Toldo retrátil".to_string(),
            ..Default::default()
        });

        let txt = DocumentAssembler::default().plain_text(&record);

        let first = txt.find("Item 1: Cobertura em policarbonato").unwrap();
        let second = txt.find("Item 2: Toldo retrátil").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_plain_text_sections_and_letterhead() {
        let txt = DocumentAssembler::default().plain_text(&sample_record());

        assert!(txt.contains("PEDIDO DE COMPRA"));
        assert!(txt.contains("CONTRATADO"));
        assert!(txt.contains("CONTRATANTE"));
        assert!(txt.contains("PRODUTO(S)"));
        assert!(txt.contains(BANK_DETAILS_LINE));
        assert!(txt.contains("Garantia: 1 ano"));
        assert!(txt.contains("Valor R$ 2.000,00 – Dois mil reais"));
    }

    #[test]
    fn test_empty_fields_render_as_empty_not_placeholder() {
        let txt = DocumentAssembler::default().plain_text(&OrderRecord::new());

        assert!(txt.contains("Nome: \n"));
        assert!(txt.contains("Prazo de Entrega: \n"));
        assert!(!txt.contains("N/A"));
        assert!(!txt.contains("null"));
    }

    #[test]
    fn test_assemble_carries_logo_and_product_count() {
        let mut record = sample_record();
        record.products.push(ProductLine::default());
        let logo = LogoNode::new("image/png", b"fake");

        let doc = DocumentAssembler::default().assemble(&record, Some(logo.clone()));

        assert_eq!(doc.header.logo, Some(logo));
        assert_eq!(doc.products.len(), 2);
        assert!(doc.products[1].lines[0].starts_with("Item 2:"));
        assert_eq!(doc.boxed_lines.len(), 3);
    }

    #[test]
    fn test_single_product_has_no_inner_separator() {
        let assembler = DocumentAssembler::new(40);
        let txt = assembler.plain_text(&sample_record());

        // One dash line under each of the three section headers plus the
        // footer rule; none between product entries.
        let dash_lines = txt
            .lines()
            .filter(|l| *l == "-".repeat(40))
            .count();
        assert_eq!(dash_lines, 4);
    }
}
