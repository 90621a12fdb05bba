//! Alternate tag spellings for each Section C field, highest priority first.

use crate::xml::TagQuery;

pub const DEPARTMENT: &[TagQuery] = &[
    TagQuery::tag("departamento"),
    TagQuery::tag("Departamento"),
    TagQuery::tag("department"),
];

pub const TEXT: &[TagQuery] = &[
    TagQuery::tag("texto"),
    TagQuery::tag("Texto"),
    TagQuery::tag("announcement_text"),
];

pub const BULLETIN_NUMBER: &[TagQuery] = &[
    TagQuery::tag("diario_numero"),
    TagQuery::tag("DiarioNumero"),
    TagQuery::tag("nbo"),
];

pub const ANNOUNCEMENT_NUMBER: &[TagQuery] = &[
    TagQuery::tag("numero_anuncio"),
    TagQuery::tag("NumeroAnuncio"),
    TagQuery::tag("num"),
];

pub const ANNOUNCEMENT_ID: &[TagQuery] = &[
    TagQuery::tag("id_anuncio"),
    TagQuery::tag("IdAnuncio"),
    TagQuery::tag("id"),
];

pub const CVE: &[TagQuery] = &[
    TagQuery::tag("cve"),
    TagQuery::tag("CVE"),
    TagQuery::tag("verificacion"),
];

pub const TITLE: &[TagQuery] = &[
    TagQuery::tag("titulo"),
    TagQuery::tag("Titulo"),
    TagQuery::tag("title"),
];

pub const COMPANY: &[TagQuery] = &[
    TagQuery::tag("empresa"),
    TagQuery::tag("Empresa"),
    TagQuery::tag("company"),
];

pub const TAX_IDS: &[TagQuery] = &[
    TagQuery::tag("cif"),
    TagQuery::tag("CIF"),
    TagQuery::tag("nif"),
];

pub const RELATED_COMPANIES: &[TagQuery] = &[
    TagQuery::tag("empresas_relacionadas"),
    TagQuery::tag("relacionada"),
    TagQuery::tag("related_company"),
];

pub const START_PAGE: &[TagQuery] = &[
    TagQuery::tag("pagina_inicial"),
    TagQuery::tag("PaginaInicial"),
    TagQuery::tag("pagina"),
];

pub const END_PAGE: &[TagQuery] = &[
    TagQuery::tag("pagina_final"),
    TagQuery::tag("PaginaFinal"),
];

pub const DATE: &[TagQuery] = &[
    TagQuery::tag("fecha"),
    TagQuery::tag("Fecha"),
    TagQuery::tag("date"),
];

/// Container of one announcement in multi-announcement documents.
pub const ANNOUNCEMENT_NODE: &[TagQuery] = &[
    TagQuery::tag("anuncio"),
    TagQuery::tag("Anuncio"),
    TagQuery::tag("announcement"),
];

pub const HTML_TITLE: &[TagQuery] = &[
    TagQuery::tag("h1"),
    TagQuery::tag("h2"),
    TagQuery::tag("h3"),
    TagQuery::tag("title"),
];

pub const HTML_TEXT: &[TagQuery] = &[TagQuery::tag("p"), TagQuery::with_class("div", "texto")];

pub const HTML_COMPANY: &[TagQuery] = &[
    TagQuery::tag("strong"),
    TagQuery::tag("b"),
    TagQuery::with_class("span", "empresa"),
];
