use std::fs;
use std::path::{Path, PathBuf};

use aula_calendar::Calendar;
use aula_cli::cli::{DistributeArgs, FillArgs, OutputFormatArg, WeeksArgs};
use aula_cli::commands::{run_distribute, run_fill, run_weeks};
use aula_cli::summary::{distribution_table, fill_heading, fill_tables};
use tempfile::TempDir;

const FIELDS: &str = r#"[
  {"id": "entry.1", "label": "DISCIPLINA", "type": "select"},
  {"id": "entry.2", "label": "ANO/SÉRIE", "type": "select"},
  {"id": "entry.3", "label": "PROFESSOR(A)", "type": "text"},
  {"id": "entry.4", "label": "DATA DA AULA DA SEMANA", "type": "text"},
  {"id": "entry.5", "label": "CONTEÚDOS/OBJETOS DE CONHECIMENTO", "type": "textarea"},
  {"id": "entry.6", "label": "NÚMERO DE AULA PREVISTA", "type": "text"},
  {"id": "entry.7", "label": "AVALIAÇÃO", "type": "textarea"}
]"#;

fn write_plan(dir: &Path) -> (PathBuf, PathBuf) {
    let mut plan = String::from(
        "ANO/SÉRIE,BIMESTRE,AULA,OBJETOS DO CONHECIMENTO,CONTEÚDO,HABILIDADE,COMPONENTE CURRICULAR\n",
    );
    for lesson in 1..=23 {
        plan.push_str(&format!(
            "1º Ano,1,{lesson},Números,Conteúdo {lesson},EF01MA01,\n"
        ));
    }
    plan.push_str("2º Ano,1,30,Geometria,Figuras,EF02MA14,\n");
    let plan_path = dir.join("Matemática.csv");
    fs::write(&plan_path, plan).expect("write plan");
    let fields_path = dir.join("fields.json");
    fs::write(&fields_path, FIELDS).expect("write fields");
    (plan_path, fields_path)
}

fn fill_args(file: PathBuf, fields: PathBuf, term: &str, week: &str) -> FillArgs {
    FillArgs {
        file,
        sheet: "Matemática".to_string(),
        fields,
        term: term.to_string(),
        week: week.to_string(),
        periods: vec!["1º Ano".to_string()],
        format: OutputFormatArg::Table,
    }
}

#[test]
fn fill_prefills_the_lessons_of_a_week() {
    let dir = TempDir::new().expect("create temp dir");
    let (plan, fields) = write_plan(dir.path());
    let calendar = Calendar::embedded().expect("embedded calendar");

    let report =
        run_fill(&fill_args(plan, fields, "1º", "SEMANA 2"), &calendar).expect("fill week");
    assert_eq!(report.lessons, [4, 5]);
    assert_eq!(report.periods, ["1º Ano"]);
    assert_eq!(report.date_range.as_deref(), Some("10/02 - 14/02"));
    assert_eq!(report.global.get("entry.1"), Some("Matemática"));
    assert_eq!(report.global.get("entry.2"), Some("1º Ano"));
    assert!(!report.global.contains("entry.3"));

    assert_eq!(report.entries.len(), 2);
    let first = &report.entries[0];
    assert_eq!(first.lesson, Some(4));
    assert_eq!(first.values.get("entry.4"), Some("10/02 - 14/02"));
    assert_eq!(first.values.get("entry.5"), Some("Números — Conteúdo 4"));
    assert_eq!(first.values.get("entry.6"), Some("4"));
    assert_eq!(first.values.get("entry.7"), Some(""));

    assert_eq!(
        fill_heading(&report),
        "Matemática | term 1 | SEMANA 2 (10/02 - 14/02) | lessons: 4-5"
    );
    let (global, entries) = fill_tables(&report);
    assert!(global.to_string().contains("Matemática"));
    assert!(entries.to_string().contains("entry.5"));
}

#[test]
fn fill_rejects_terms_missing_from_the_sheet() {
    let dir = TempDir::new().expect("create temp dir");
    let (plan, fields) = write_plan(dir.path());
    let calendar = Calendar::embedded().expect("embedded calendar");

    let error = run_fill(&fill_args(plan, fields, "4", "SEMANA 1"), &calendar)
        .expect_err("term 4 has no rows");
    assert!(error.to_string().contains("has no lessons"));
}

#[test]
fn fill_reports_unreadable_field_list() {
    let dir = TempDir::new().expect("create temp dir");
    let (plan, _) = write_plan(dir.path());
    let calendar = Calendar::embedded().expect("embedded calendar");

    let missing = dir.path().join("missing.json");
    let error = run_fill(&fill_args(plan, missing, "1", "SEMANA 1"), &calendar)
        .expect_err("fields file is missing");
    assert!(error.to_string().starts_with("read form fields"));
}

#[test]
fn weeks_of_one_term() {
    let calendar = Calendar::embedded().expect("embedded calendar");
    let args = WeeksArgs {
        term: Some("3º".to_string()),
        format: OutputFormatArg::Json,
    };
    let listing = run_weeks(&args, &calendar).expect("list weeks");
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].term, "3");
    assert_eq!(listing[0].weeks.len(), 10);

    let all = run_weeks(
        &WeeksArgs {
            term: None,
            format: OutputFormatArg::Table,
        },
        &calendar,
    )
    .expect("list all weeks");
    assert_eq!(all.len(), 4);

    let unknown = WeeksArgs {
        term: Some("9".to_string()),
        format: OutputFormatArg::Table,
    };
    assert!(run_weeks(&unknown, &calendar).is_err());
}

#[test]
fn distribution_of_the_shorter_term() {
    let calendar = Calendar::embedded().expect("embedded calendar");
    let args = DistributeArgs {
        term: "3º".to_string(),
        total: 12,
        format: OutputFormatArg::Json,
    };
    let report = run_distribute(&args, &calendar).expect("distribute");
    assert_eq!(report.term, "3");
    assert_eq!(report.weeks.len(), 10);

    let json = serde_json::to_string(&report.weeks[..3]).expect("serialize weeks");
    insta::assert_snapshot!(json, @r#"[{"week_index":0,"lesson_numbers":[1,2],"start_lesson":1,"end_lesson":2},{"week_index":1,"lesson_numbers":[3,4],"start_lesson":3,"end_lesson":4},{"week_index":2,"lesson_numbers":[5],"start_lesson":5,"end_lesson":5}]"#);

    let table = distribution_table(&report).to_string();
    assert!(table.contains("SEMANA 10"));
    assert!(table.contains("1-2"));
}

#[test]
fn blank_term_is_rejected() {
    let calendar = Calendar::embedded().expect("embedded calendar");
    let args = DistributeArgs {
        term: " º ".to_string(),
        total: 5,
        format: OutputFormatArg::Table,
    };
    assert!(run_distribute(&args, &calendar).is_err());
}
