//! Act classifier.
//!
//! Maps an act name and its raw value to a typed [`Act`]. Cargo-bearing
//! acts get their value split into roles; every other act keeps its trimmed
//! value as text.

use tracing::debug;

use crate::patterns::{act_class, fold, parse_bold_act, parse_cargos, ActClass};
use crate::types::Act;

const REGISTRAL_DATA: &str = "datos registrales";

/// Classify an act.
///
/// # Arguments
/// * `name` - Act name as printed; trailing `.` and `:` are dropped
/// * `raw_value` - Raw value text, possibly empty
///
/// # Returns
/// A [`Act::Cargo`] for cargo-bearing names, otherwise an [`Act::Text`]
/// whose value is `None` when the trimmed raw value is empty.
///
/// # Examples
/// ```
/// use borme_core::acts::classify;
/// use borme_core::Act;
///
/// let act = classify("Nombramientos.", "Adm. Solid.: JUAN PEREZ;MARIA GARCIA");
/// match act {
///     Act::Cargo { name, roles } => {
///         assert_eq!(name, "Nombramientos");
///         assert_eq!(roles["Adm. Solid."], vec!["JUAN PEREZ", "MARIA GARCIA"]);
///     }
///     other => panic!("expected cargo act, got {other:?}"),
/// }
/// ```
pub fn classify(name: &str, raw_value: &str) -> Act {
    let name = normalize_name(name);

    match act_class(&name) {
        Some(ActClass::Cargo) => Act::Cargo {
            roles: parse_cargos(raw_value),
            name,
        },
        class => {
            if class.is_none() {
                debug!(act = %name, "Act name not in any known set, keeping as text");
            }
            let value = raw_value.trim();
            Act::Text {
                name,
                value: (!value.is_empty()).then(|| value.to_string()),
            }
        }
    }
}

/// Trim an act name and drop trailing `.`/`:` punctuation.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .trim_end_matches(['.', ':'])
        .trim_end()
        .to_string()
}

/// Split a name span that carries its own value.
///
/// Recognises `<known act>: <value>` and `<cargo act>. <role>: <persons>`.
/// Returns `None` when the span is only a name.
pub fn split_inline(span: &str) -> Option<(String, String)> {
    let span = span.trim();

    if let Some((head, rest)) = span.split_once(". ") {
        if act_class(head) == Some(ActClass::Cargo) && rest.contains(':') {
            return Some((normalize_name(head), rest.trim().to_string()));
        }
    }

    let (head, value) = parse_bold_act(span)?;
    let name = normalize_name(&head);
    act_class(&name).map(|_| (name, value))
}

/// Whether the act carries the announcement's registral data.
pub fn is_registral_data(name: &str) -> bool {
    fold(&normalize_name(name)) == REGISTRAL_DATA
}
