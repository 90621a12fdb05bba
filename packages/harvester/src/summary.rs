//! Daily summary (sumario) parsing.
//!
//! The BOE publishes one summary XML per bulletin day listing every
//! province edition and its PDF. Two layouts are accepted: the current one
//! (`<diario nbo="..">` with `<item id="..">` entries) and the older one
//! (`<nbo>` element with `<empresa>` entries).

use borme_core::xml::{find_child, get_attribute, get_tag_name, get_text};
use borme_core::{Province, Section};
use roxmltree::{Document, Node};

use crate::config::BOE_BASE_URL;
use crate::error::Result;

/// One document listed in the daily summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryItem {
    /// Document id, e.g. `BORME-A-2015-204-28`.
    pub id: String,
    /// Section letter of the enclosing `<seccion>`.
    pub section: Option<String>,
    pub title: Option<String>,
    pub pdf_url: Option<String>,
    pub cve_url: Option<String>,
}

/// Parsed daily summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailySummary {
    /// Bulletin number of the day.
    pub number: Option<u32>,
    pub items: Vec<SummaryItem>,
}

impl DailySummary {
    /// Item for a section's province edition, matched by document id.
    pub fn find_item(&self, section: Section, province: &Province) -> Option<&SummaryItem> {
        let prefix = format!("BORME-{section}-");
        let suffix = format!("-{}", province.code_str());
        self.items
            .iter()
            .find(|item| item.id.starts_with(&prefix) && item.id.ends_with(&suffix))
    }

    /// Verification URLs of every listed item.
    pub fn cve_urls(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| item.cve_url.as_deref())
            .collect()
    }
}

/// Parse a daily summary document.
///
/// # Errors
/// Returns `SummaryParse` if the XML is not well-formed.
pub fn parse_summary(xml: &str) -> Result<DailySummary> {
    let doc = Document::parse(xml)?;

    let number = doc
        .descendants()
        .find(|n| n.is_element() && get_tag_name(*n) == "diario")
        .and_then(|diario| get_attribute(diario, "nbo"))
        .and_then(|nbo| nbo.trim().parse().ok())
        .or_else(|| {
            doc.descendants()
                .find(|n| n.is_element() && get_tag_name(*n) == "nbo")
                .and_then(|nbo| get_text(nbo).parse().ok())
        });

    let items = doc
        .descendants()
        .filter(|n| n.is_element() && matches!(get_tag_name(*n), "item" | "empresa"))
        .filter_map(parse_item)
        .collect();

    Ok(DailySummary { number, items })
}

fn parse_item(node: Node<'_, '_>) -> Option<SummaryItem> {
    let id = get_attribute(node, "id")
        .map(str::to_string)
        .or_else(|| child_text(node, &["id"]))?;

    let section = node
        .ancestors()
        .find(|a| a.is_element() && get_tag_name(*a) == "seccion")
        .and_then(|s| get_attribute(s, "num").or_else(|| get_attribute(s, "letra")))
        .map(str::to_string);

    Some(SummaryItem {
        id,
        section,
        title: child_text(node, &["titulo", "provincia"]),
        pdf_url: child_text(node, &["urlPdf", "urlpdf"]).map(|u| absolute_url(&u)),
        cve_url: child_text(node, &["urlCve", "urlcve"]).map(|u| absolute_url(&u)),
    })
}

fn child_text(node: Node<'_, '_>, tags: &[&str]) -> Option<String> {
    tags.iter()
        .find_map(|tag| find_child(node, tag))
        .map(get_text)
        .filter(|text| !text.is_empty())
}

/// Summary links are site-relative (`/borme/dias/...`).
fn absolute_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{BOE_BASE_URL}{url}")
    }
}
