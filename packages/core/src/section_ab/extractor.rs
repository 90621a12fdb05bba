//! Line-driven extractor for Section A and B bulletins.

use tracing::{debug, trace, warn};

use super::mode::{Event, Marker, Mode};
use crate::acts::{classify, is_registral_data, normalize_name, split_inline};
use crate::patterns::{
    act_class, clean_pdf_text, fold, parse_bulletin_number, parse_company, parse_cve,
    parse_spanish_date,
};
use crate::province::Province;
use crate::types::{Act, Announcement, Bulletin, Section};

/// Bold font span: act names and company headers.
const NAME_FONT: &str = "/F1";
/// Regular font span: act values.
const VALUE_FONT: &str = "/F2";

const BRANCH_MARK: &str = "sucursal en espana";
const LIQUIDATION_MARK: &str = "en liquidacion";

/// Incremental Section A/B extractor.
///
/// Feed lines in source order with [`BulletinExtractor::feed_line`] and call
/// [`BulletinExtractor::finish`] once to obtain the bulletin. Announcements
/// and acts are emitted in exactly the order their lines were fed.
#[derive(Debug)]
pub struct BulletinExtractor {
    bulletin: Bulletin,
    mode: Mode,
    current: Option<Announcement>,
    pending_act: Option<String>,
    opened: u32,
}

impl BulletinExtractor {
    pub fn new(section: Section) -> Self {
        Self {
            bulletin: Bulletin::new(section),
            mode: Mode::default(),
            current: None,
            pending_act: None,
            opened: 0,
        }
    }

    /// Current scan mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Process one physical line. Unrecognised lines are skipped.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if let Some(span) = font_span(line, NAME_FONT) {
            self.on_name_span(&span);
            return;
        }
        if let Some(span) = font_span(line, VALUE_FONT) {
            self.on_value_span(&span);
            return;
        }

        let line = clean_pdf_text(line);

        if let Some(number) = parse_bulletin_number(&line) {
            self.bulletin.number = number;
            return;
        }

        if let Some(cve) = parse_cve(&line) {
            if cve.is_empty() {
                self.apply(Event::CvePending);
            } else {
                self.bulletin.cve = Some(cve);
            }
            return;
        }

        if let Some(marker) = Marker::detect(&line) {
            if marker == Marker::Header {
                self.flush_pending();
            }
            self.apply(Event::Marker(marker));
            return;
        }

        match self.mode {
            Mode::Header => self.on_header_line(&line),
            Mode::Body => self.on_body_line(&line),
            Mode::DateExpect => {
                if let Some(date) = parse_spanish_date(&line) {
                    self.bulletin.date = Some(date);
                    self.apply(Event::FieldParsed);
                } else {
                    debug!(line = %line, "Unrecognised date line skipped");
                }
            }
            Mode::NumberExpect => {
                let number = parse_bulletin_number(&line).or_else(|| line.parse().ok());
                if let Some(number) = number {
                    self.bulletin.number = number;
                    self.apply(Event::FieldParsed);
                }
            }
            Mode::SectionExpect => {
                self.check_section(&line);
                self.apply(Event::FieldParsed);
            }
            Mode::ProvinceExpect => {
                if let Some(province) = Province::from_title(&line) {
                    self.bulletin.province = Some(province);
                    self.apply(Event::FieldParsed);
                } else {
                    debug!(line = %line, "No province found in line");
                }
            }
            Mode::CveExpect => {
                self.bulletin.cve = Some(line);
                self.apply(Event::FieldParsed);
            }
            Mode::Neutral => trace!(line = %line, "Line skipped"),
        }
    }

    /// Close the scan and return the bulletin with its id range computed.
    pub fn finish(mut self) -> Bulletin {
        self.flush_pending();
        self.close_announcement();
        self.bulletin.compute_range();
        debug!(
            announcements = self.bulletin.announcements.len(),
            range = ?self.bulletin.range,
            "Bulletin extracted"
        );
        self.bulletin
    }

    fn apply(&mut self, event: Event) {
        let next = self.mode.transition(event);
        if next != self.mode {
            trace!(from = %self.mode, to = %next, "Mode transition");
        }
        self.mode = next;
    }

    fn on_name_span(&mut self, span: &str) {
        if span.is_empty() || span.starts_with('/') {
            return;
        }

        if parse_company(span).is_some() {
            self.on_header_line(span);
            return;
        }

        self.flush_pending();
        match split_inline(span) {
            Some((name, value)) => self.emit(&name, &value),
            None => self.pending_act = Some(normalize_name(span)),
        }
    }

    fn on_value_span(&mut self, span: &str) {
        if span.is_empty() {
            return;
        }
        match self.pending_act.take() {
            Some(name) => self.emit(&name, span),
            None => debug!(value = %span, "Value span without act name skipped"),
        }
    }

    fn on_header_line(&mut self, line: &str) {
        let Some(company) = parse_company(line) else {
            debug!(line = %line, "Header line is not a company entry");
            return;
        };

        self.flush_pending();
        self.close_announcement();

        self.opened += 1;
        let folded = fold(&company.name);
        let announcement = Announcement {
            id: self.opened,
            branch: folded.contains(BRANCH_MARK),
            liquidation: folded.trim_end_matches('.').ends_with(LIQUIDATION_MARK),
            registry: company.registry,
            company: company.name,
            ..Announcement::default()
        };
        debug!(
            id = announcement.id,
            printed_id = %company.id,
            company = %announcement.company,
            "Announcement opened"
        );
        self.current = Some(announcement);
    }

    fn on_body_line(&mut self, line: &str) {
        if let Some(name) = self.pending_act.take() {
            self.emit(&name, line);
            return;
        }

        if let Some((name, value)) = split_inline(line) {
            self.emit(&name, &value);
        } else if act_class(&normalize_name(line)).is_some() {
            self.pending_act = Some(normalize_name(line));
        } else {
            debug!(line = %line, "Body line without pending act skipped");
        }
    }

    fn check_section(&self, line: &str) {
        let declared = self.bulletin.section;
        let printed = line
            .split_whitespace()
            .last()
            .and_then(|token| token.parse::<Section>().ok());
        if let Some(printed) = printed {
            if printed != declared {
                warn!(
                    declared = %declared,
                    printed = %printed,
                    "Printed section differs from declared section"
                );
            }
        }
    }

    /// Attach an act to the open announcement.
    fn emit(&mut self, name: &str, raw_value: &str) {
        let Some(announcement) = self.current.as_mut() else {
            debug!(act = %name, "Act outside any announcement dropped");
            return;
        };

        if is_registral_data(name) {
            let value = raw_value.trim();
            if !value.is_empty() {
                announcement.registral_data = Some(value.to_string());
            }
            return;
        }

        announcement.acts.push(classify(name, raw_value));
    }

    /// Emit a pending act name that never received a value.
    fn flush_pending(&mut self) {
        let Some(name) = self.pending_act.take() else {
            return;
        };
        match self.current.as_mut() {
            Some(announcement) if !is_registral_data(&name) => {
                announcement.acts.push(Act::Text { name, value: None });
            }
            Some(_) => {}
            None => debug!(act = %name, "Pending act outside any announcement dropped"),
        }
    }

    fn close_announcement(&mut self) {
        if let Some(announcement) = self.current.take() {
            self.bulletin.add_announcement(announcement);
        }
    }
}

/// Text of a font span line (`/F1 Nombramientos. Tj`), cleaned.
fn font_span(line: &str, font: &str) -> Option<String> {
    let rest = line.strip_prefix(font)?;
    let rest = rest.trim();
    let rest = rest.strip_suffix(" Tj").unwrap_or(rest);
    Some(clean_pdf_text(rest))
}
