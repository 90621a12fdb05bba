//! Record types produced by the extractors.
//!
//! Serialized field names follow the BORME output scheme (`empresa`,
//! `actos`, `anuncios_rango`, ...) so JSON produced here stays comparable
//! with results from other BORME tools.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::province::Province;

/// Bulletin section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Registered acts (first section, part A).
    A,
    /// Other registered acts (first section, part B).
    B,
    /// Second section: announcements published by companies.
    C,
}

impl Section {
    /// Section letter as printed in file names and codes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(ParseError::UnsupportedSection(s.to_string())),
        }
    }
}

/// Borrowed view of an act's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActValue<'a> {
    None,
    Text(&'a str),
    Roles(&'a BTreeMap<String, Vec<String>>),
}

/// A single legal fact recorded in an announcement.
///
/// Serializes as `{"name": ..., "value": ...}` where `value` is a string for
/// text acts and an object mapping role to persons for cargo acts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Act {
    Text {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Cargo {
        name: String,
        #[serde(rename = "value")]
        roles: BTreeMap<String, Vec<String>>,
    },
}

impl Act {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::Cargo { name, .. } => name,
        }
    }

    pub fn value(&self) -> ActValue<'_> {
        match self {
            Self::Text { value: Some(v), .. } => ActValue::Text(v),
            Self::Text { value: None, .. } => ActValue::None,
            Self::Cargo { roles, .. } => ActValue::Roles(roles),
        }
    }

    pub fn is_cargo(&self) -> bool {
        matches!(self, Self::Cargo { .. })
    }
}

/// One company's entry within a bulletin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,

    #[serde(rename = "empresa")]
    pub company: String,

    #[serde(rename = "registro", default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,

    /// Spanish branch of a foreign company.
    #[serde(rename = "sucursal", default, skip_serializing_if = "is_false")]
    pub branch: bool,

    #[serde(rename = "liquidacion", default, skip_serializing_if = "is_false")]
    pub liquidation: bool,

    #[serde(
        rename = "datos_registrales",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registral_data: Option<String>,

    /// Acts in source order.
    #[serde(rename = "actos", default)]
    pub acts: Vec<Act>,
}

impl Announcement {
    pub fn new(id: u32, company: impl Into<String>) -> Self {
        Self {
            id,
            company: company.into(),
            ..Self::default()
        }
    }
}

/// A parsed Section A or B bulletin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulletin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "seccion")]
    pub section: Section,

    #[serde(rename = "provincia", default, skip_serializing_if = "Option::is_none")]
    pub province: Option<Province>,

    #[serde(rename = "num", default)]
    pub number: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(rename = "anuncios", default)]
    pub announcements: BTreeMap<u32, Announcement>,

    /// `(min id, max id)`, unset while the bulletin has no announcements.
    #[serde(rename = "anuncios_rango", default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(u32, u32)>,
}

impl Bulletin {
    pub fn new(section: Section) -> Self {
        Self {
            date: None,
            section,
            province: None,
            number: 0,
            cve: None,
            filename: None,
            announcements: BTreeMap::new(),
            range: None,
        }
    }

    /// Insert an announcement keyed by its id, replacing any previous one.
    pub fn add_announcement(&mut self, announcement: Announcement) {
        self.announcements.insert(announcement.id, announcement);
    }

    /// Recompute [`Bulletin::range`] from the ids present.
    pub fn compute_range(&mut self) {
        let min = self.announcements.keys().next().copied();
        let max = self.announcements.keys().next_back().copied();
        self.range = min.zip(max);
    }

    /// Announcements in ascending id order.
    pub fn announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.announcements.values()
    }
}

/// A Section C announcement extracted from XML or HTML.
///
/// Fields missing from the source keep their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCAnnouncement {
    #[serde(rename = "departamento", default)]
    pub department: String,

    #[serde(rename = "texto", default)]
    pub text: String,

    #[serde(rename = "diario_numero", default)]
    pub bulletin_number: u32,

    #[serde(rename = "numero_anuncio", default)]
    pub announcement_number: String,

    #[serde(rename = "id_anuncio", default)]
    pub announcement_id: String,

    #[serde(rename = "pagina_inicial", default)]
    pub start_page: u32,

    #[serde(rename = "pagina_final", default)]
    pub end_page: u32,

    #[serde(rename = "fecha", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "titulo", default)]
    pub title: String,

    #[serde(rename = "empresa", default)]
    pub company: String,

    #[serde(
        rename = "empresas_relacionadas",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_companies: Vec<String>,

    #[serde(rename = "cifs", default, skip_serializing_if = "Vec::is_empty")]
    pub tax_ids: Vec<String>,

    #[serde(default)]
    pub cve: String,

    #[serde(rename = "seccion")]
    pub section: Section,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Default for SectionCAnnouncement {
    fn default() -> Self {
        Self {
            department: String::new(),
            text: String::new(),
            bulletin_number: 0,
            announcement_number: String::new(),
            announcement_id: String::new(),
            start_page: 0,
            end_page: 0,
            date: None,
            title: String::new(),
            company: String::new(),
            related_companies: Vec::new(),
            tax_ids: Vec::new(),
            cve: String::new(),
            section: Section::C,
            filename: None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_from_str() {
        assert_eq!("A".parse::<Section>().unwrap(), Section::A);
        assert_eq!(" b ".parse::<Section>().unwrap(), Section::B);
        assert_eq!("c".parse::<Section>().unwrap(), Section::C);
        assert!(matches!(
            "D".parse::<Section>(),
            Err(ParseError::UnsupportedSection(s)) if s == "D"
        ));
    }

    #[test]
    fn test_range_over_present_ids() {
        let mut bulletin = Bulletin::new(Section::A);
        for id in [3, 1, 7] {
            bulletin.add_announcement(Announcement::new(id, format!("EMPRESA {id} SL")));
        }
        bulletin.compute_range();
        assert_eq!(bulletin.range, Some((1, 7)));
    }

    #[test]
    fn test_range_unset_without_announcements() {
        let mut bulletin = Bulletin::new(Section::B);
        bulletin.compute_range();
        assert_eq!(bulletin.range, None);
    }

    #[test]
    fn test_act_accessors() {
        let text = Act::Text {
            name: "Capital".to_string(),
            value: Some("3.000,00 Euros".to_string()),
        };
        assert_eq!(text.name(), "Capital");
        assert_eq!(text.value(), ActValue::Text("3.000,00 Euros"));
        assert!(!text.is_cargo());

        let roles = BTreeMap::from([("Adm. Unico".to_string(), vec!["JUAN".to_string()])]);
        let cargo = Act::Cargo {
            name: "Nombramientos".to_string(),
            roles: roles.clone(),
        };
        assert_eq!(cargo.name(), "Nombramientos");
        assert_eq!(cargo.value(), ActValue::Roles(&roles));
    }

    #[test]
    fn test_announcement_json_keys() {
        let mut announcement = Announcement::new(1, "ACME SL");
        announcement.acts.push(Act::Text {
            name: "Extinción".to_string(),
            value: None,
        });
        let json = serde_json::to_value(&announcement).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "empresa": "ACME SL",
                "actos": [{"name": "Extinción"}]
            })
        );
    }

    #[test]
    fn test_act_deserializes_both_variants() {
        let acts: Vec<Act> = serde_json::from_str(
            r#"[{"name":"Capital","value":"3.000"},{"name":"Ceses/Dimisiones","value":{"Apoderado":["ANA"]}}]"#,
        )
        .unwrap();
        assert!(!acts[0].is_cargo());
        assert!(acts[1].is_cargo());
    }

    #[test]
    fn test_bulletin_json_omits_unset() {
        let bulletin = Bulletin::new(Section::A);
        let json = serde_json::to_value(&bulletin).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"seccion": "A", "num": 0, "anuncios": {}})
        );
    }
}
