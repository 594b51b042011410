//! Fixed letterhead content
//!
//! Issuer identity, bank data and legal boilerplate printed on every
//! document. None of this comes from the order record.

pub const ISSUER_NAME: &str = "Toldos Fortaleza";
pub const ISSUER_TAGLINE: &str = "Coberturas em Policarbonato";
pub const DOC_TITLE: &str = "PEDIDO DE COMPRA";

/// Contratado block, printed line by line under its section header
pub const CONTRACTOR_LINES: [&str; 6] = [
    "Leandro Gobbo Menezes - ME",
    "Endereço: Avenida Araucária, 997",
    "Bairro: Parque Novo Oratório – Santo André/SP CEP: 09251-040",
    "Telefone: 11 2036-0010 / Fixo e WhatsApp",
    "CNPJ: 07.173.998/0001-75 / Inscrição Estadual: 626.107.689.114",
    "Site: www.toldosfortaleza.com / E-mail: toldosfortaleza@gmail.com",
];

pub const BANK_DETAILS_LINE: &str =
    "Dados Bancários: Banco Itaú – Agência 4446 Conta 00047-5 / Pix: 07.173.998/0001-75";

pub const DELIVERY_LABEL: &str = "Prazo de Entrega";

pub const WARRANTY_LINE: &str = "Garantia: 1 ano para comprovados defeitos de fabricação / placas \
     / estrutura / fixação / calha e rufos / vedação";

/// Footer block, smallest type on the page
pub const FOOTER_LINES: [&str; 6] = [
    "Razão Social: Leandro Gobbo Menezes Me / Nome Fantasia: Toldos Fortaleza",
    "CNPJ: 07.173.998/0001-75 / Inscrição Estadual: 626.107.689.114",
    "Endereço: Av. Araucária, 997 Parque Novo Oratório - Santo André/SP – CEP: 09251-040",
    "Telefone e WhatsApp: 11 2036-0010",
    "Redes Sociais: Facebook @toldosfortalezaabc / Instagram: @toldosfortalezacoberturas",
    "Site: www.toldosfortaleza.com",
];

/// Section headers, document (mixed) case; the plain-text export
/// uppercases them.
pub const SECTION_CONTRACTOR: &str = "Contratado";
pub const SECTION_CLIENT: &str = "Contratante";
pub const SECTION_PRODUCTS: &str = "Produto(s)";

/// Product entry field labels, in print order
pub const PRODUCT_LABELS: [&str; 5] = ["Item", "Estrutura", "Lona", "Acessórios", "Medida"];
