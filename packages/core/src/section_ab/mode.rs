//! Scan mode of the Section A/B extractor and its transition table.

use std::fmt;

/// What the extractor expects the next plain line to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Company header lines (`<id> - <name>`).
    Header,
    /// Act names and values.
    Body,
    DateExpect,
    NumberExpect,
    SectionExpect,
    ProvinceExpect,
    CveExpect,
    /// Nothing expected; plain lines are skipped.
    #[default]
    Neutral,
}

/// Literal marker recognised at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Header,
    Body,
    Date,
    Number,
    Section,
    Province,
    Cve,
}

/// Input that moves the extractor between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Marker(Marker),
    /// An empty `cve:` line announced the code on the next line.
    CvePending,
    /// The field the current expect-mode was waiting for has been read.
    FieldParsed,
}

/// `(marker, spellings)`; a line is a marker when its first word is one of
/// the spellings.
const MARKERS: &[(Marker, &[&str])] = &[
    (Marker::Header, &["Cabecera"]),
    (Marker::Body, &["Texto"]),
    (Marker::Date, &["Fecha"]),
    (Marker::Number, &["Numero", "Número"]),
    (Marker::Section, &["Seccion", "Sección"]),
    (Marker::Province, &["Provincia"]),
    (Marker::Cve, &["CVE"]),
];

impl Marker {
    /// Recognise a marker line.
    pub fn detect(line: &str) -> Option<Self> {
        let first = line
            .split(|c: char| !c.is_alphanumeric())
            .next()
            .unwrap_or_default();
        MARKERS
            .iter()
            .find(|(_, spellings)| spellings.contains(&first))
            .map(|(marker, _)| *marker)
    }
}

impl Mode {
    /// Transition table.
    ///
    /// Markers always win: each marker enters its own mode from any mode, so
    /// a header marker clears whatever field was being waited for. Reading
    /// the awaited field returns expect-modes to [`Mode::Neutral`], while
    /// [`Mode::Header`] and [`Mode::Body`] keep consuming lines.
    pub fn transition(self, event: Event) -> Mode {
        match (self, event) {
            (_, Event::Marker(Marker::Header)) => Mode::Header,
            (_, Event::Marker(Marker::Body)) => Mode::Body,
            (_, Event::Marker(Marker::Date)) => Mode::DateExpect,
            (_, Event::Marker(Marker::Number)) => Mode::NumberExpect,
            (_, Event::Marker(Marker::Section)) => Mode::SectionExpect,
            (_, Event::Marker(Marker::Province)) => Mode::ProvinceExpect,
            (_, Event::Marker(Marker::Cve)) | (_, Event::CvePending) => Mode::CveExpect,
            (
                Mode::DateExpect
                | Mode::NumberExpect
                | Mode::SectionExpect
                | Mode::ProvinceExpect
                | Mode::CveExpect,
                Event::FieldParsed,
            ) => Mode::Neutral,
            (mode @ (Mode::Header | Mode::Body | Mode::Neutral), Event::FieldParsed) => mode,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Body => "body",
            Self::DateExpect => "date",
            Self::NumberExpect => "number",
            Self::SectionExpect => "section",
            Self::ProvinceExpect => "province",
            Self::CveExpect => "cve",
            Self::Neutral => "neutral",
        };
        f.write_str(name)
    }
}
