//! Spanish provinces keyed by INE code.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::patterns::fold;

/// A Spanish province.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Province {
    /// Two-digit INE code (1..=52).
    pub code: u32,
    pub name: String,
}

/// `(INE code, display name, accepted spellings)`
const PROVINCES: &[(u32, &str, &[&str])] = &[
    (1, "Araba/Álava", &["ARABA", "ÁLAVA"]),
    (2, "Albacete", &["ALBACETE"]),
    (3, "Alicante/Alacant", &["ALICANTE", "ALACANT"]),
    (4, "Almería", &["ALMERÍA"]),
    (5, "Ávila", &["ÁVILA"]),
    (6, "Badajoz", &["BADAJOZ"]),
    (7, "Illes Balears", &["ILLES BALEARS", "ISLAS BALEARES", "BALEARES"]),
    (8, "Barcelona", &["BARCELONA"]),
    (9, "Burgos", &["BURGOS"]),
    (10, "Cáceres", &["CÁCERES"]),
    (11, "Cádiz", &["CÁDIZ"]),
    (12, "Castellón/Castelló", &["CASTELLÓN", "CASTELLÓ"]),
    (13, "Ciudad Real", &["CIUDAD REAL"]),
    (14, "Córdoba", &["CÓRDOBA"]),
    (15, "A Coruña", &["A CORUÑA", "LA CORUÑA"]),
    (16, "Cuenca", &["CUENCA"]),
    (17, "Girona", &["GIRONA", "GERONA"]),
    (18, "Granada", &["GRANADA"]),
    (19, "Guadalajara", &["GUADALAJARA"]),
    (20, "Gipuzkoa", &["GIPUZKOA", "GUIPÚZCOA"]),
    (21, "Huelva", &["HUELVA"]),
    (22, "Huesca", &["HUESCA"]),
    (23, "Jaén", &["JAÉN"]),
    (24, "León", &["LEÓN"]),
    (25, "Lleida", &["LLEIDA", "LÉRIDA"]),
    (26, "La Rioja", &["LA RIOJA"]),
    (27, "Lugo", &["LUGO"]),
    (28, "Madrid", &["MADRID"]),
    (29, "Málaga", &["MÁLAGA"]),
    (30, "Murcia", &["MURCIA"]),
    (31, "Navarra", &["NAVARRA"]),
    (32, "Ourense", &["OURENSE", "ORENSE"]),
    (33, "Asturias", &["ASTURIAS"]),
    (34, "Palencia", &["PALENCIA"]),
    (35, "Las Palmas", &["LAS PALMAS"]),
    (36, "Pontevedra", &["PONTEVEDRA"]),
    (37, "Salamanca", &["SALAMANCA"]),
    (38, "Santa Cruz de Tenerife", &["SANTA CRUZ DE TENERIFE"]),
    (39, "Cantabria", &["CANTABRIA"]),
    (40, "Segovia", &["SEGOVIA"]),
    (41, "Sevilla", &["SEVILLA"]),
    (42, "Soria", &["SORIA"]),
    (43, "Tarragona", &["TARRAGONA"]),
    (44, "Teruel", &["TERUEL"]),
    (45, "Toledo", &["TOLEDO"]),
    (46, "Valencia/València", &["VALENCIA"]),
    (47, "Valladolid", &["VALLADOLID"]),
    (48, "Bizkaia", &["BIZKAIA", "VIZCAYA"]),
    (49, "Zamora", &["ZAMORA"]),
    (50, "Zaragoza", &["ZARAGOZA"]),
    (51, "Ceuta", &["CEUTA"]),
    (52, "Melilla", &["MELILLA"]),
];

/// Folded spellings with their table index, longest first and ties broken
/// alphabetically.
static SPELLINGS: LazyLock<Vec<(String, usize)>> = LazyLock::new(|| {
    let mut spellings: Vec<(String, usize)> = PROVINCES
        .iter()
        .enumerate()
        .flat_map(|(index, (_, _, names))| names.iter().map(move |n| (fold(n), index)))
        .collect();
    spellings.sort_by(|(a, _), (b, _)| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    spellings
});

impl Province {
    fn from_index(index: usize) -> Option<Self> {
        PROVINCES.get(index).map(|(code, name, _)| Self {
            code: *code,
            name: (*name).to_string(),
        })
    }

    /// Province whose name appears in `title`.
    ///
    /// Matching is substring containment, ignoring case and accents. Longer
    /// spellings are tried before shorter ones so the result does not depend
    /// on table order.
    ///
    /// # Examples
    /// ```
    /// use borme_core::Province;
    ///
    /// let province = Province::from_title("SECCIÓN PRIMERA - LA CORUÑA").unwrap();
    /// assert_eq!(province.code, 15);
    /// assert!(Province::from_title("SECCIÓN PRIMERA").is_none());
    /// ```
    pub fn from_title(title: &str) -> Option<Self> {
        let folded = fold(title);
        SPELLINGS
            .iter()
            .find(|(spelling, _)| folded.contains(spelling.as_str()))
            .and_then(|(_, index)| Self::from_index(*index))
    }

    /// Resolve a province given as an INE code (`"28"`, `"08"`) or a name.
    ///
    /// Names must match one of the accepted spellings or the display name
    /// exactly, ignoring case and accents.
    pub fn lookup(query: &str) -> Option<Self> {
        let query = query.trim();
        if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
            let code: u32 = query.parse().ok()?;
            return PROVINCES
                .iter()
                .position(|(c, _, _)| *c == code)
                .and_then(Self::from_index);
        }

        let folded = fold(query);
        PROVINCES
            .iter()
            .position(|(_, name, spellings)| {
                fold(name) == folded || spellings.iter().any(|s| fold(s) == folded)
            })
            .and_then(Self::from_index)
    }

    /// Code zero-padded to two digits, as used in bulletin file names.
    pub fn code_str(&self) -> String {
        format!("{:02}", self.code)
    }

    /// All provinces in code order.
    pub fn all() -> impl Iterator<Item = Province> {
        (0..PROVINCES.len()).filter_map(Self::from_index)
    }
}
