use aula_map::{FieldMatcher, MatchOutcome, match_across_rows, match_fields};
use aula_model::{CellValue, DataRow, FieldType, FormField};

fn lesson_row(skill: &str, lesson: i64) -> DataRow {
    [
        ("ANO/SÉRIE", CellValue::text("1º Ano")),
        ("BIMESTRE", CellValue::text("1")),
        ("AULA", CellValue::Integer(lesson)),
        ("HABILIDADE", CellValue::text(skill)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn binds_column_contained_in_label() {
    let row: DataRow = [
        ("ANO/SÉRIE", CellValue::text("1º Ano")),
        ("HABILIDADE", CellValue::text("EF01MA06")),
    ]
    .into_iter()
    .collect();
    let fields = [FormField::new("f1", "HABILIDADE", FieldType::Text)];
    let values = match_fields(&fields, &row);
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("f1"), Some("EF01MA06"));
}

#[test]
fn label_inside_column_name_also_matches() {
    let row: DataRow = [("COMPONENTE CURRICULAR", CellValue::text("Matemática"))]
        .into_iter()
        .collect();
    let fields = [FormField::new("c", "Componente", FieldType::Select)];
    assert_eq!(match_fields(&fields, &row).get("c"), Some("Matemática"));
}

#[test]
fn first_column_in_row_order_wins() {
    let row: DataRow = [
        ("CONTEÚDO", CellValue::text("primeiro")),
        ("CONTEÚDO EXTRA", CellValue::text("segundo")),
    ]
    .into_iter()
    .collect();
    let fields = [FormField::new("f", "Conteúdo extra", FieldType::Textarea)];
    assert_eq!(match_fields(&fields, &row).get("f"), Some("primeiro"));
}

#[test]
fn weekly_fields_are_always_present() {
    let row: DataRow = [
        ("ANO/SÉRIE", CellValue::text("1º Ano")),
        ("HABILIDADE", CellValue::text("EF01MA06")),
    ]
    .into_iter()
    .collect();
    let fields = [
        FormField::new("f2", "NÚMERO DE AULA PREVISTA", FieldType::Text),
        FormField::new("f3", "DATA DA AULA DA SEMANA", FieldType::Text),
        FormField::new("f4", "Observações", FieldType::Text),
    ];
    let values = match_fields(&fields, &row);
    assert_eq!(values.get("f2"), Some(""));
    assert_eq!(values.get("f3"), Some(""));
    assert!(!values.contains("f4"));
}

#[test]
fn planned_lesson_field_picks_lesson_column() {
    let fields = [FormField::new("f2", "NÚMERO DE AULA PREVISTA", FieldType::Text)];
    let values = match_fields(&fields, &lesson_row("EF01MA06", 3));
    assert_eq!(values.get("f2"), Some("3"));
}

#[test]
fn weekly_label_matching_column_binds_empty_cell() {
    let row: DataRow = [("Número de aula prevista?", CellValue::text(""))]
        .into_iter()
        .collect();
    let outcomes = FieldMatcher::new(&[FormField::new(
        "f2",
        "NÚMERO DE AULA PREVISTA",
        FieldType::Text,
    )])
    .resolve(&row);
    assert!(matches!(outcomes[0].outcome, MatchOutcome::Column { .. }));
    assert_eq!(outcomes[0].value.as_deref(), Some(""));
}

#[test]
fn checkbox_matches_on_cell_value() {
    let row: DataRow = [("TURNO", CellValue::text("Manhã"))].into_iter().collect();
    let checkbox = [FormField::new("t", "Período da manhã", FieldType::Checkbox)];
    let text = [FormField::new("t", "Período da manhã", FieldType::Text)];

    let outcomes = FieldMatcher::new(&checkbox).resolve(&row);
    assert_eq!(
        outcomes[0].outcome,
        MatchOutcome::CheckboxValue {
            column: "TURNO".to_string()
        }
    );
    assert_eq!(outcomes[0].value.as_deref(), Some("Manhã"));
    assert!(match_fields(&text, &row).is_empty());
}

#[test]
fn empty_cell_never_satisfies_checkbox() {
    let row: DataRow = [("TURNO", CellValue::Empty)].into_iter().collect();
    let fields = [FormField::new("t", "Período da manhã", FieldType::Checkbox)];
    assert!(match_fields(&fields, &row).is_empty());
}

#[test]
fn numeric_cells_render_without_fraction() {
    let row: DataRow = [("AULA", CellValue::Float(12.0))].into_iter().collect();
    let fields = [FormField::new("a", "Aula", FieldType::Text)];
    assert_eq!(match_fields(&fields, &row).get("a"), Some("12"));
}

#[test]
fn across_rows_keeps_row_order() {
    let rows = [lesson_row("EF01MA01", 1), lesson_row("EF01MA02", 2)];
    let fields = [FormField::new("h", "Habilidade", FieldType::Text)];
    let values = match_across_rows(&fields, &rows);
    let skills: Vec<Option<&str>> = values.iter().map(|v| v.get("h")).collect();
    assert_eq!(skills, [Some("EF01MA01"), Some("EF01MA02")]);
    assert!(match_across_rows(&fields, &[]).is_empty());
}

#[test]
fn no_fields_or_empty_row_yield_nothing() {
    assert!(match_fields(&[], &lesson_row("EF01MA06", 1)).is_empty());
    let fields = [FormField::new("h", "Habilidade", FieldType::Text)];
    assert!(match_fields(&fields, &DataRow::new()).is_empty());
}

#[test]
fn matched_values_serialize_by_field_id() {
    let fields = [
        FormField::new("entry.2", "HABILIDADE", FieldType::Text),
        FormField::new("entry.1", "ANO/SÉRIE", FieldType::Select),
    ];
    let values = match_fields(&fields, &lesson_row("EF01MA06", 1));
    let json = serde_json::to_string(&values).expect("serialize values");
    insta::assert_snapshot!(json, @r#"{"entry.1":"1º Ano","entry.2":"EF01MA06"}"#);
}

#[test]
fn symbol_only_header_binds_nothing() {
    let row: DataRow = [("#", CellValue::Integer(1)), ("-", CellValue::Empty)]
        .into_iter()
        .collect();
    let fields = [
        FormField::new("f1", "Observações", FieldType::Text),
        FormField::new("f2", "Turno", FieldType::Checkbox),
    ];
    let values = match_fields(&fields, &row);
    assert!(values.is_empty());
}

#[test]
fn padded_weekly_label_falls_back_to_empty() {
    let row = lesson_row("EF01MA06", 3);
    let fields = [FormField::new("f1", "  UNIDADE TEMÁTICA ", FieldType::Text)];
    let outcomes = FieldMatcher::new(&fields).resolve(&row);
    assert_eq!(outcomes[0].outcome, MatchOutcome::WeeklyFallback);
    assert_eq!(outcomes[0].value.as_deref(), Some(""));
}
