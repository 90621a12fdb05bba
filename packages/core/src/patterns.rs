//! Pattern library: act-name classification sets and string grammars.
//!
//! Every function in this module is total. A grammar that does not match
//! returns `None`, an empty map or the input unchanged, and callers treat
//! that as "no data" rather than as an error.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// `57344 - ALDARA CATERING SL`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMPANY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) - (.*?)\.?$").expect("valid regex"));

/// `57344 - ALDARA CATERING SL(R.M. Madrid)`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMPANY_REGISTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) - (.*)\(R\.M\. (.*)\)\.?$").expect("valid regex"));

/// Raw PDF show-text operator: `(...)Tj`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PDF_TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*)\)Tj$").expect("valid regex"));

/// `Núm. 204`, tolerating the unaccented and the mis-decoded spelling.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BULLETIN_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Núm|Num|NÃºm)\.\s*(\d+)").expect("valid regex"));

/// `Martes 27 de octubre de 2015`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPANISH_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\w+),? (\d{1,2}) de (\w+) de (\d{4})").expect("valid regex"));

/// `cve: BORME-A-2015-204-28`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^cve:\s*(.*)$").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARG_COLON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*):\s*(.*)$").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOLD_ACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?):\s*(.+)$").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PERSON_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// Classification of an act name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActClass {
    /// Value is a list of `<role>: <person>;<person>` groups.
    Cargo,
    /// Act carries no argument.
    NoArg,
    /// Value follows a colon (`Capital: 3.000,00 Euros`).
    Colon,
    /// Printed entirely in bold.
    Bold,
}

/// Acts whose value assigns persons to corporate roles.
pub const CARGO_ACTS: &[&str] = &[
    "Nombramientos",
    "Nombramiento",
    "Revocaciones",
    "Ceses/Dimisiones",
    "Reelecciones",
    "Cancelaciones de oficio de nombramientos",
    "Socio único",
    "Socio profesional",
    "Otro cargo",
];

/// Acts that carry no argument.
pub const NO_ARG_ACTS: &[&str] = &[
    "Crédito incobrable",
    "Sociedad unipersonal",
    "Extinción",
    "Cuadro de cargos",
    "Cambio de objeto social",
    "Otro acto",
];

/// Acts whose argument follows a colon.
pub const COLON_ACTS: &[&str] = &[
    "Modificación de duración",
    "Fe de erratas",
    "Domicilio",
    "Objeto",
    "Capital",
    "Estatutos",
    "Denominación",
    "Cambio de domicilio social",
    "Cambio de denominación social",
    "Ampliación de capital",
    "Reducción de capital",
    "Constitución",
];

/// Acts printed entirely in bold.
pub const BOLD_ACTS: &[&str] = &[
    "Declaración de unipersonalidad",
    "Escisión total",
    "Fusión",
    "Fusión por absorción",
    "Disolución",
];

static ACT_CLASSES: LazyLock<HashMap<String, ActClass>> = LazyLock::new(|| {
    let groups = [
        (CARGO_ACTS, ActClass::Cargo),
        (NO_ARG_ACTS, ActClass::NoArg),
        (COLON_ACTS, ActClass::Colon),
        (BOLD_ACTS, ActClass::Bold),
    ];
    let mut classes = HashMap::new();
    for (names, class) in groups {
        for name in names {
            let previous = classes.insert(fold(name), class);
            debug_assert!(previous.is_none(), "act name sets must be disjoint: {name}");
        }
    }
    classes
});

/// Legal-entity suffixes recognised by [`is_company`].
const COMPANY_SUFFIXES: &[&str] = &[
    " SL", ", SL", " S.L.", " SA", ", SA", " S.A.", " S.L.L.", " S.A.L.", " SLU", " S.L.U.",
    " SAU", " S.A.U.", " SLL", " SAL", " SCOOP", " S.COOP.",
];

const WEEKDAYS: &[&str] = &[
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
];

const MONTHS: &[(&str, u32)] = &[
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Fold text for accent- and case-insensitive comparison.
///
/// # Examples
/// ```
/// use borme_core::patterns::fold;
///
/// assert_eq!(fold("Disolución"), "disolucion");
/// assert_eq!(fold("LA CORUÑA"), "la coruna");
/// ```
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Classify an act name into one of the four static sets.
///
/// Membership ignores case and accents, so `Disolucion` and `DISOLUCIÓN`
/// both resolve to [`ActClass::Bold`].
pub fn act_class(name: &str) -> Option<ActClass> {
    ACT_CLASSES.get(&fold(name.trim())).copied()
}

/// Whether the act assigns persons to roles.
pub fn is_cargo_act(name: &str) -> bool {
    act_class(name) == Some(ActClass::Cargo)
}

/// Whether the act carries no argument.
pub fn is_no_arg_act(name: &str) -> bool {
    act_class(name) == Some(ActClass::NoArg)
}

/// Whether the act's argument follows a colon.
pub fn is_colon_act(name: &str) -> bool {
    act_class(name) == Some(ActClass::Colon)
}

/// Whether the act is printed entirely in bold.
pub fn is_bold_act(name: &str) -> bool {
    act_class(name) == Some(ActClass::Bold)
}

/// A company header line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyLine {
    /// Numeric identifier as printed.
    pub id: String,
    /// Company name.
    pub name: String,
    /// Mercantile registry (`R.M.`), when printed.
    pub registry: Option<String>,
}

/// Split a company header line.
///
/// The registry-qualified form is tried first, the bare form second.
///
/// # Examples
/// ```
/// use borme_core::patterns::parse_company;
///
/// let line = parse_company("57344 - ALDARA CATERING SL(R.M. Madrid)").unwrap();
/// assert_eq!(line.id, "57344");
/// assert_eq!(line.name, "ALDARA CATERING SL");
/// assert_eq!(line.registry.as_deref(), Some("Madrid"));
///
/// assert!(parse_company("no header here").is_none());
/// ```
pub fn parse_company(line: &str) -> Option<CompanyLine> {
    let line = line.trim();

    if let Some(caps) = COMPANY_REGISTRY_PATTERN.captures(line) {
        return Some(CompanyLine {
            id: caps[1].to_string(),
            name: caps[2].trim().to_string(),
            registry: Some(caps[3].trim().to_string()),
        });
    }

    COMPANY_PATTERN.captures(line).map(|caps| CompanyLine {
        id: caps[1].to_string(),
        name: caps[2].trim().to_string(),
        registry: None,
    })
}

/// Split a cargo value into `role -> persons`.
///
/// The value is a sequence of `<role>: <person>;<person>…` groups. Person
/// lists are trimmed, blank entries dropped, and roles left without persons
/// are omitted. A role printed twice accumulates into one list.
///
/// # Examples
/// ```
/// use borme_core::patterns::parse_cargos;
///
/// let cargos = parse_cargos("Adm. Solid.: JUAN PEREZ;MARIA GARCIA");
/// assert_eq!(cargos["Adm. Solid."], vec!["JUAN PEREZ", "MARIA GARCIA"]);
/// ```
pub fn parse_cargos(value: &str) -> BTreeMap<String, Vec<String>> {
    let mut result: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let colons: Vec<usize> = value.match_indices(':').map(|(i, _)| i).collect();
    if colons.is_empty() {
        return result;
    }

    // role_starts[i] is where the role owning colons[i] begins.
    let mut role_starts = Vec::with_capacity(colons.len());
    role_starts.push(0);
    for pair in colons.windows(2) {
        let segment_start = pair[0] + 1;
        let segment = &value[segment_start..pair[1]];
        role_starts.push(segment_start + role_offset(segment));
    }

    for (i, &colon) in colons.iter().enumerate() {
        let role = value[role_starts[i]..colon]
            .trim()
            .trim_start_matches(['.', ';'])
            .trim();
        if role.is_empty() {
            continue;
        }

        let persons_end = role_starts.get(i + 1).copied().unwrap_or(value.len());
        let persons: Vec<String> = PERSON_SEPARATOR
            .split(&value[colon + 1..persons_end])
            .map(|p| strip_list_terminator(p.trim()).trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if !persons.is_empty() {
            result.entry(role.to_string()).or_default().extend(persons);
        }
    }

    result
}

/// Offset inside the text between two colons at which the next role starts.
///
/// Roles are capitalised words (`Apoderado`, `Adm. Unico`) while person names
/// are printed in capitals, so the role begins after the first `. ` that is
/// followed by an uppercase-then-lowercase pair. Falls back to the position
/// after the last `;`, then to the last word.
fn role_offset(segment: &str) -> usize {
    let boundary = segment.rfind(';').map_or(0, |i| i + 1);
    let tail = &segment[boundary..];

    for (i, _) in tail.match_indices(". ") {
        let rest = &tail[i + 2..];
        let start = i + 2 + (rest.len() - rest.trim_start().len());
        let mut chars = tail[start..].chars();
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            if a.is_uppercase() && b.is_lowercase() {
                return boundary + start;
            }
        }
    }

    if boundary > 0 {
        return boundary;
    }

    let trimmed = segment.trim_end();
    trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Drop the full stop that closes a person list, keeping abbreviations
/// such as `S.L.` intact.
fn strip_list_terminator(person: &str) -> &str {
    let Some(stripped) = person.strip_suffix('.') else {
        return person;
    };
    let mut rev = stripped.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(_), Some('.')) => person,
        _ => stripped,
    }
}

/// Parse a bold act of the form `<name>: <value>`.
///
/// Returns `None` when no colon separates a non-empty value.
pub fn parse_bold_act(text: &str) -> Option<(String, String)> {
    BOLD_ACT_PATTERN
        .captures(text)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
}

/// Parse an act with a colon argument.
///
/// Names from the no-argument set never take a colon argument and yield
/// `None`.
pub fn parse_arg_colon(text: &str) -> Option<(String, String)> {
    let caps = ARG_COLON_PATTERN.captures(text)?;
    let name = caps[1].trim();
    if is_no_arg_act(name) {
        return None;
    }
    Some((name.to_string(), caps[2].trim().to_string()))
}

/// Parse an act without arguments: the trimmed text itself.
pub fn parse_no_arg(text: &str) -> String {
    text.trim().to_string()
}

/// Parse a Spanish long date such as `Martes 27 de octubre de 2015`.
///
/// Weekday and month are matched case- and accent-insensitively. An unknown
/// weekday or month, or an impossible calendar date, yields `None`.
///
/// # Examples
/// ```
/// use borme_core::patterns::parse_spanish_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_spanish_date("Martes 27 de octubre de 2015"),
///     NaiveDate::from_ymd_opt(2015, 10, 27)
/// );
/// assert_eq!(parse_spanish_date("Martes 27 de brumario de 2015"), None);
/// ```
pub fn parse_spanish_date(text: &str) -> Option<NaiveDate> {
    let caps = SPANISH_DATE_PATTERN.captures(text.trim())?;

    let weekday = fold(&caps[1]);
    if !WEEKDAYS.contains(&weekday.as_str()) {
        return None;
    }

    let month_name = fold(&caps[3]);
    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, number)| *number)?;

    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[4].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Bulletin number from a `Núm. <n>` line.
pub fn parse_bulletin_number(line: &str) -> Option<u32> {
    BULLETIN_NUMBER_PATTERN
        .captures(line.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Verification code from a `cve: <code>` line.
///
/// Returns `Some("")` when the marker is present but the code is printed on
/// a following line.
pub fn parse_cve(line: &str) -> Option<String> {
    CVE_PATTERN
        .captures(line.trim())
        .map(|caps| caps[1].trim().to_string())
}

/// Remove PDF text-extraction artifacts.
///
/// Unwraps `(...)Tj` operators, unescapes `\(`, `\)` and `\ `, collapses
/// repeated spaces and trims. The result is a fixed point, so cleaning
/// clean text is a no-op.
///
/// # Examples
/// ```
/// use borme_core::patterns::clean_pdf_text;
///
/// let cleaned = clean_pdf_text(r"Constitucion \(Sociedad  Limitada\)");
/// assert_eq!(cleaned, "Constitucion (Sociedad Limitada)");
/// assert_eq!(clean_pdf_text(&cleaned), cleaned);
/// ```
pub fn clean_pdf_text(text: &str) -> String {
    let mut current = clean_pdf_text_once(text);
    loop {
        let next = clean_pdf_text_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pdf_text_once(text: &str) -> String {
    let text = PDF_TEXT_PATTERN
        .captures(text)
        .map_or_else(|| text.to_string(), |caps| caps[1].to_string());
    let text = text
        .replace("\\(", "(")
        .replace("\\)", ")")
        .replace("\\ ", " ");
    REPEATED_SPACES.replace_all(&text, " ").trim().to_string()
}

/// Whether a name ends in a legal-entity suffix (`SL`, `S.A.`, ...).
pub fn is_company(name: &str) -> bool {
    let upper = name.trim().to_uppercase();
    COMPANY_SUFFIXES
        .iter()
        .any(|suffix| upper.ends_with(suffix))
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize_sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_company_bare() {
        let line = parse_company("57344 - ALDARA CATERING SL").unwrap();
        assert_eq!(line.id, "57344");
        assert_eq!(line.name, "ALDARA CATERING SL");
        assert_eq!(line.registry, None);
    }

    #[test]
    fn test_parse_company_with_registry() {
        let line = parse_company("57344 - ALDARA CATERING SL(R.M. Madrid)").unwrap();
        assert_eq!(line.id, "57344");
        assert_eq!(line.name, "ALDARA CATERING SL");
        assert_eq!(line.registry.as_deref(), Some("Madrid"));
    }

    #[test]
    fn test_parse_company_strips_final_period() {
        let line = parse_company("1 - INVERSIONES LOPEZ SA.").unwrap();
        assert_eq!(line.name, "INVERSIONES LOPEZ SA");
    }

    #[test]
    fn test_parse_company_no_match() {
        assert!(parse_company("ALDARA CATERING SL").is_none());
        assert!(parse_company("").is_none());
    }

    #[test]
    fn test_parse_cargos_two_persons() {
        let cargos = parse_cargos("Adm. Solid.: JUAN PEREZ;MARIA GARCIA");
        assert_eq!(cargos.len(), 1);
        assert_eq!(cargos["Adm. Solid."], vec!["JUAN PEREZ", "MARIA GARCIA"]);
    }

    #[test]
    fn test_parse_cargos_drops_blank_segments() {
        let cargos = parse_cargos("Adm. Solid.: JUAN PEREZ; ;MARIA GARCIA;");
        assert_eq!(cargos["Adm. Solid."], vec!["JUAN PEREZ", "MARIA GARCIA"]);
    }

    #[test]
    fn test_parse_cargos_multiple_roles() {
        let cargos = parse_cargos(
            "Adm. Unico: GARCIA PEREZ JUAN. Apoderado: LOPEZ RUIZ ANA;MARTIN SANZ LUIS.",
        );
        assert_eq!(cargos["Adm. Unico"], vec!["GARCIA PEREZ JUAN"]);
        assert_eq!(
            cargos["Apoderado"],
            vec!["LOPEZ RUIZ ANA", "MARTIN SANZ LUIS"]
        );
    }

    #[test]
    fn test_parse_cargos_role_after_semicolon_list() {
        let cargos = parse_cargos("Adm. Mancom.: A B C;D E F. Adm. Solid.: G H I");
        assert_eq!(cargos["Adm. Mancom."], vec!["A B C", "D E F"]);
        assert_eq!(cargos["Adm. Solid."], vec!["G H I"]);
    }

    #[test]
    fn test_parse_cargos_keeps_company_abbreviation() {
        let cargos = parse_cargos("Auditor: DELOITTE S.L.. Adm. Unico: PEREZ JUAN");
        assert_eq!(cargos["Auditor"], vec!["DELOITTE S.L."]);
        assert_eq!(cargos["Adm. Unico"], vec!["PEREZ JUAN"]);
    }

    #[test]
    fn test_parse_cargos_omits_empty_role() {
        let cargos = parse_cargos("Liquidador: ; ");
        assert!(cargos.is_empty());
    }

    #[test]
    fn test_parse_cargos_repeated_role_accumulates() {
        let cargos = parse_cargos("Apoderado: A. Apoderado: B");
        assert_eq!(cargos["Apoderado"], vec!["A", "B"]);
    }

    #[test]
    fn test_parse_cargos_multibyte_separator() {
        let result = parse_cargos("Adm. Unico: PEREZ JUAN\u{a0}Apoderado: LOPEZ ANA");
        assert_eq!(result["Adm. Unico"], vec!["PEREZ JUAN"]);
        assert_eq!(result["Apoderado"], vec!["LOPEZ ANA"]);
    }

    #[test]
    fn test_parse_cargos_no_colon() {
        assert!(parse_cargos("JUAN PEREZ").is_empty());
        assert!(parse_cargos("").is_empty());
    }

    #[test]
    fn test_parse_spanish_date() {
        assert_eq!(
            parse_spanish_date("Martes 27 de octubre de 2015"),
            NaiveDate::from_ymd_opt(2015, 10, 27)
        );
        assert_eq!(
            parse_spanish_date("lunes 2 de junio de 2015"),
            NaiveDate::from_ymd_opt(2015, 6, 2)
        );
        assert_eq!(
            parse_spanish_date("Viernes 15 de enero de 2021"),
            NaiveDate::from_ymd_opt(2021, 1, 15)
        );
    }

    #[test]
    fn test_parse_spanish_date_case_and_accents() {
        assert_eq!(
            parse_spanish_date("MIÉRCOLES 1 DE JULIO DE 2020"),
            NaiveDate::from_ymd_opt(2020, 7, 1)
        );
        assert_eq!(
            parse_spanish_date("Sábado 3 de setiembre de 2016"),
            NaiveDate::from_ymd_opt(2016, 9, 3)
        );
    }

    #[test]
    fn test_parse_spanish_date_rejects_unknown_parts() {
        assert_eq!(parse_spanish_date("Funday 2 de junio de 2015"), None);
        assert_eq!(parse_spanish_date("Lunes 2 de juin de 2015"), None);
        assert_eq!(parse_spanish_date("Lunes 31 de febrero de 2015"), None);
        assert_eq!(parse_spanish_date("BOLETÍN OFICIAL"), None);
    }

    #[test]
    fn test_parse_bulletin_number() {
        assert_eq!(parse_bulletin_number("Núm. 204"), Some(204));
        assert_eq!(parse_bulletin_number("Num. 12 Pág. 3"), Some(12));
        assert_eq!(parse_bulletin_number("NÃºm. 7"), Some(7));
        assert_eq!(parse_bulletin_number("Número"), None);
    }

    #[test]
    fn test_parse_cve() {
        assert_eq!(
            parse_cve("cve: BORME-A-2015-204-28").as_deref(),
            Some("BORME-A-2015-204-28")
        );
        assert_eq!(parse_cve("CVE:").as_deref(), Some(""));
        assert_eq!(parse_cve("verificable en"), None);
    }

    #[test]
    fn test_clean_pdf_text() {
        assert_eq!(
            clean_pdf_text("Constitucion \\(Sociedad Limitada\\)"),
            "Constitucion (Sociedad Limitada)"
        );
        assert_eq!(clean_pdf_text("(Capital: 3.000)Tj"), "Capital: 3.000");
        assert_eq!(clean_pdf_text("  a   b\\ c  "), "a b c");
    }

    #[test]
    fn test_clean_pdf_text_is_idempotent() {
        let samples = [
            "Constitucion \\(Sociedad Limitada\\)",
            "\\(x\\)Tj",
            "  spaced    out  ",
            "already clean",
            "",
        ];
        for sample in samples {
            let once = clean_pdf_text(sample);
            assert_eq!(clean_pdf_text(&once), once, "input: {sample:?}");
        }
    }

    #[test]
    fn test_is_company() {
        assert!(is_company("ACME SL"));
        assert!(is_company("ACME, SL"));
        assert!(is_company("acme s.a."));
        assert!(is_company("ACME SA"));
        assert!(!is_company("Juan Perez"));
        assert!(!is_company("Calle Mayor 123"));
        assert!(!is_company(""));
    }

    #[test]
    fn test_capitalize_sentence() {
        assert_eq!(capitalize_sentence("hola mundo"), "Hola mundo");
        assert_eq!(capitalize_sentence("ÉXITO TOTAL"), "Éxito total");
        assert_eq!(capitalize_sentence(""), "");
    }

    #[test]
    fn test_act_sets_are_disjoint() {
        let total = CARGO_ACTS.len() + NO_ARG_ACTS.len() + COLON_ACTS.len() + BOLD_ACTS.len();
        assert_eq!(ACT_CLASSES.len(), total);
    }

    #[test]
    fn test_act_class() {
        assert!(is_cargo_act("Nombramientos"));
        assert!(is_cargo_act("Ceses/Dimisiones"));
        assert!(is_no_arg_act("Extincion"));
        assert!(is_colon_act("CAPITAL"));
        assert!(is_bold_act("Fusión"));
        assert!(is_bold_act("Disolucion"));
        assert!(!is_cargo_act("Constitución"));
        assert_eq!(act_class("Unknown"), None);
    }

    #[test]
    fn test_parse_bold_act() {
        assert_eq!(
            parse_bold_act("Fusión: ABSORCION DE X SL"),
            Some(("Fusión".to_string(), "ABSORCION DE X SL".to_string()))
        );
        assert_eq!(parse_bold_act("Test Acto"), None);
    }

    #[test]
    fn test_parse_arg_colon() {
        assert_eq!(
            parse_arg_colon("Capital: 3.000,00 Euros"),
            Some(("Capital".to_string(), "3.000,00 Euros".to_string()))
        );
        assert_eq!(parse_arg_colon("Extinción: x"), None);
        assert_eq!(parse_arg_colon("no colon"), None);
    }

    #[test]
    fn test_parse_no_arg() {
        assert_eq!(parse_no_arg("  Extinción "), "Extinción");
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Declaración"), "declaracion");
        assert_eq!(fold("ÁLAVA"), "alava");
    }
}
