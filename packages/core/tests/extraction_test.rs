//! End-to-end extraction tests over fixture documents.

use std::path::PathBuf;

use borme_core::{
    parse_document, parse_filename, parse_section_c, parse_text, Act, ActValue, Bulletin,
    ParseError, ParsedDocument, Section, Source,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_bulletin() -> Bulletin {
    let source = Source::file(fixture("BORME-A-2015-204-28.txt"));
    match parse_document(&source, Section::A).unwrap() {
        ParsedDocument::Bulletin(bulletin) => bulletin,
        other => panic!("expected bulletin, got {other:?}"),
    }
}

fn act_names(bulletin: &Bulletin) -> Vec<Vec<String>> {
    bulletin
        .announcements()
        .map(|a| a.acts.iter().map(|act| act.name().to_string()).collect())
        .collect()
}

#[test]
fn test_bulletin_metadata() {
    let bulletin = load_bulletin();
    assert_eq!(bulletin.section, Section::A);
    assert_eq!(bulletin.number, 204);
    assert_eq!(bulletin.date, NaiveDate::from_ymd_opt(2015, 10, 27));
    assert_eq!(bulletin.province.as_ref().map(|p| p.code), Some(28));
    assert_eq!(bulletin.cve.as_deref(), Some("BORME-A-2015-204-28"));
    assert_eq!(bulletin.filename.as_deref(), Some("BORME-A-2015-204-28.txt"));
    assert_eq!(bulletin.range, Some((1, 4)));
}

#[test]
fn test_announcements_use_sequential_ids() {
    let bulletin = load_bulletin();
    let companies: Vec<(u32, &str)> = bulletin
        .announcements()
        .map(|a| (a.id, a.company.as_str()))
        .collect();
    assert_eq!(
        companies,
        vec![
            (1, "ALDARA CATERING SL"),
            (2, "INVERSIONES LOPEZ SA"),
            (3, "GLOBAL TRADE LTD SUCURSAL EN ESPAÑA"),
            (4, "CONSTRUCCIONES VIEJAS SL EN LIQUIDACION"),
        ]
    );
}

#[test]
fn test_announcement_details() {
    let bulletin = load_bulletin();
    let first = &bulletin.announcements[&1];
    assert_eq!(first.registry.as_deref(), Some("Madrid"));
    assert_eq!(
        first.registral_data.as_deref(),
        Some("T 34012 , F 1, S 8, H M 611807, I/A 1 (20.10.15).")
    );

    let second = &bulletin.announcements[&2];
    assert_eq!(second.registry, None);
    assert_eq!(second.acts[2].value(), ActValue::None);

    assert!(bulletin.announcements[&3].branch);
    assert!(bulletin.announcements[&4].liquidation);
}

#[test]
fn test_act_order_matches_source() {
    let expected = vec![
        vec!["Constitución", "Nombramientos"],
        vec!["Ceses/Dimisiones", "Capital", "Extinción"],
        vec!["Revocaciones", "Fusión por absorción"],
        vec!["Disolución", "Nombramientos"],
    ];
    for _ in 0..5 {
        assert_eq!(act_names(&load_bulletin()), expected);
    }
}

#[test]
fn test_cargo_acts() {
    let bulletin = load_bulletin();

    let Act::Cargo { roles, .. } = &bulletin.announcements[&1].acts[1] else {
        panic!("expected cargo act");
    };
    assert_eq!(roles["Adm. Solid."], vec!["JUAN PEREZ", "MARIA GARCIA"]);

    let Act::Cargo { roles, .. } = &bulletin.announcements[&2].acts[0] else {
        panic!("expected cargo act");
    };
    assert_eq!(roles["Adm. Unico"], vec!["LOPEZ RUIZ ANA"]);
    assert_eq!(roles["Apoderado"], vec!["MARTIN SANZ LUIS", "GOMEZ DIAZ EVA"]);

    let Act::Cargo { roles, .. } = &bulletin.announcements[&4].acts[1] else {
        panic!("expected cargo act");
    };
    assert_eq!(roles["Liquidador"], vec!["PEREZ LOPEZ JOSE"]);
}

#[test]
fn test_bulletin_json_shape() {
    let bulletin = load_bulletin();
    let json = serde_json::to_value(&bulletin).unwrap();
    assert_eq!(json["date"], "2015-10-27");
    assert_eq!(json["seccion"], "A");
    assert_eq!(json["num"], 204);
    assert_eq!(json["provincia"]["code"], 28);
    assert_eq!(json["anuncios_rango"], serde_json::json!([1, 4]));
    assert_eq!(json["anuncios"]["1"]["empresa"], "ALDARA CATERING SL");
    assert_eq!(
        json["anuncios"]["1"]["actos"][1]["value"]["Adm. Solid."],
        serde_json::json!(["JUAN PEREZ", "MARIA GARCIA"])
    );
    assert_eq!(json["anuncios"]["3"]["sucursal"], true);
    assert!(json["anuncios"]["1"].get("sucursal").is_none());

    let back: Bulletin = serde_json::from_value(json).unwrap();
    assert_eq!(back, bulletin);
}

#[test]
fn test_missing_file_is_unreadable() {
    let source = Source::file(fixture("does-not-exist.txt"));
    assert!(matches!(
        parse_document(&source, Section::A),
        Err(ParseError::UnreadableSource { .. })
    ));
}

#[test]
fn test_unsupported_section_tag() {
    assert!(matches!(
        parse_text("Cabecera", "X"),
        Err(ParseError::UnsupportedSection(_))
    ));
}

#[test]
fn test_section_c_single_xml() {
    let records = parse_section_c(&Source::file(fixture("section_c_single.xml"))).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.department, "CONVOCATORIAS DE JUNTAS");
    assert_eq!(record.bulletin_number, 204);
    assert_eq!(record.announcement_number, "10446");
    assert_eq!(record.announcement_id, "A150046143");
    assert_eq!(record.start_page, 12003);
    assert_eq!(record.end_page, 12004);
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2015, 10, 27));
    assert_eq!(record.title, "ACME INDUSTRIAL, S.A.");
    assert_eq!(record.company, "ACME INDUSTRIAL, S.A.");
    assert_eq!(
        record.related_companies,
        vec!["ACME LOGISTICA, S.L.", "ACME SERVICIOS, S.L."]
    );
    assert_eq!(record.tax_ids, vec!["A28000001"]);
    assert_eq!(record.cve, "BORME-C-2015-10446");
    assert_eq!(record.section, Section::C);
    assert_eq!(record.filename.as_deref(), Some("section_c_single.xml"));
}

#[test]
fn test_section_c_multi_xml_isolates_nodes() {
    let records = parse_section_c(&Source::file(fixture("section_c_multi.xml"))).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].company, "PRIMERA FUSION, S.L.");
    assert_eq!(records[0].tax_ids, vec!["B11111111"]);
    assert_eq!(records[0].related_companies, vec!["ABSORBIDA UNO, S.L."]);
    assert_eq!(records[0].text, "");

    assert_eq!(records[1].department, "REDUCCIÓN DE CAPITAL");
    assert_eq!(records[1].text, "Reducción de capital social.");
    assert!(records[1].tax_ids.is_empty());
    assert_eq!(records[1].cve, "");

    assert_eq!(records[2].department, "DISOLUCIÓN DE EMPRESAS");
    assert_eq!(records[2].company, "TERCERA DISUELTA, S.L.");
    assert_eq!(records[2].tax_ids, vec!["B33333333", "B44444444"]);
    assert_eq!(records[2].cve, "BORME-C-2015-10449");

    for record in &records {
        assert_eq!(record.bulletin_number, 0);
    }
}

#[test]
fn test_section_c_html() {
    let records = parse_section_c(&Source::file(fixture("section_c.html"))).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.title, "TRANSFORMACIÓN DE SOCIEDADES");
    assert_eq!(record.company, "ESTRELLA NORTE, S.L.");
    assert_eq!(
        record.text,
        "ESTRELLA NORTE, S.L. Se hace público que la junta general acordó la \
         transformación. Madrid, 20 de octubre de 2015."
    );
}

#[test]
fn test_section_c_json_keys() {
    let records = parse_section_c(&Source::file(fixture("section_c_single.xml"))).unwrap();
    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["departamento"], "CONVOCATORIAS DE JUNTAS");
    assert_eq!(json["diario_numero"], 204);
    assert_eq!(json["fecha"], "2015-10-27");
    assert_eq!(json["seccion"], "C");
    assert_eq!(json["cifs"], serde_json::json!(["A28000001"]));
}

#[test]
fn test_filename_matches_content() {
    let info = parse_filename("BORME-A-2015-10-27.pdf").unwrap();
    assert_eq!(info.date, NaiveDate::from_ymd_opt(2015, 10, 27).unwrap());
    assert_eq!(info.section, "A");
    assert_eq!(info.number, 300);
    assert!(matches!(
        parse_filename("invalid.pdf"),
        Err(ParseError::InvalidFilename(_))
    ));
}
