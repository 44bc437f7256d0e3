use aula_map::{WeekContext, compose_weekly_entries, partition_fields, prefill_global};
use aula_model::{CellValue, DataRow, FieldType, FormField, LessonColumns};

fn form_fields() -> Vec<FormField> {
    vec![
        FormField::new("entry.1", "PROFESSOR(A)", FieldType::Text),
        FormField::new("entry.2", "TURMA", FieldType::Select),
        FormField::new("entry.3", "DISCIPLINA", FieldType::Select),
        FormField::new("entry.4", "ANO/SÉRIE", FieldType::Select),
        FormField::new("entry.5", "DATA DA AULA DA SEMANA", FieldType::Text),
        FormField::new("entry.6", "CONTEÚDOS/OBJETOS DE CONHECIMENTO", FieldType::Textarea),
        FormField::new("entry.7", "HABILIDADES", FieldType::Textarea),
        FormField::new("entry.8", "NÚMERO DE AULA PREVISTA", FieldType::Text),
        FormField::new("entry.9", "UNIDADE TEMÁTICA", FieldType::Text),
        FormField::new("entry.10", "AVALIAÇÃO", FieldType::Textarea),
    ]
}

fn row(lesson: i64, objects: &str, content: &str) -> DataRow {
    [
        ("ANO/SÉRIE", CellValue::text("1º Ano")),
        ("BIMESTRE", CellValue::text("1")),
        ("AULA", CellValue::Integer(lesson)),
        ("OBJETOS DO CONHECIMENTO", CellValue::text(objects)),
        ("CONTEÚDO", CellValue::text(content)),
        ("HABILIDADE", CellValue::text("EF01MA06")),
        ("UNIDADE TEMÁTICA", CellValue::text("Números")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn partition_drops_professor_and_class_fields() {
    let partition = partition_fields(&form_fields());
    let global: Vec<&str> = partition.global.iter().map(|f| f.id.as_str()).collect();
    let weekly: Vec<&str> = partition.weekly.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(global, ["entry.3", "entry.4"]);
    assert_eq!(
        weekly,
        ["entry.5", "entry.6", "entry.7", "entry.8", "entry.9", "entry.10"]
    );
}

#[test]
fn prefill_sets_subject_from_sheet_name() {
    let partition = partition_fields(&form_fields());
    let first = row(4, "Contagem", "Números até 10");
    let values = prefill_global(&partition.global, Some(&first), "Matemática");
    assert_eq!(values.get("entry.3"), Some("Matemática"));
    assert_eq!(values.get("entry.4"), Some("1º Ano"));
}

#[test]
fn prefill_without_row_gives_empty_values() {
    let partition = partition_fields(&form_fields());
    let values = prefill_global(&partition.global, None, "");
    assert_eq!(values.len(), 2);
    assert_eq!(values.get("entry.3"), Some(""));
    assert_eq!(values.get("entry.4"), Some(""));
}

#[test]
fn weekly_entries_follow_row_order() {
    let partition = partition_fields(&form_fields());
    let rows = [
        row(4, "Contagem", "Números até 10"),
        row(5, "", "Sequências"),
    ];
    let context = WeekContext::new(Some("10/02 - 14/02".to_string()), LessonColumns::default());
    let entries = compose_weekly_entries(&partition.weekly, &rows, &context);
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first.lesson, Some(4));
    assert_eq!(first.values.get("entry.5"), Some("10/02 - 14/02"));
    assert_eq!(first.values.get("entry.6"), Some("Contagem — Números até 10"));
    assert_eq!(first.values.get("entry.7"), Some("EF01MA06"));
    assert_eq!(first.values.get("entry.8"), Some("4"));
    assert_eq!(first.values.get("entry.9"), Some("Números"));
    assert_eq!(first.values.get("entry.10"), Some(""));

    let second = &entries[1];
    assert_eq!(second.lesson, Some(5));
    assert_eq!(second.values.get("entry.6"), Some("Sequências"));
}

#[test]
fn missing_week_range_leaves_date_empty() {
    let fields = [FormField::new("d", "DATA DA AULA DA SEMANA", FieldType::Text)];
    let entries = compose_weekly_entries(&fields, &[row(1, "", "")], &WeekContext::default());
    assert_eq!(entries[0].values.get("d"), Some(""));
    assert!(compose_weekly_entries(&fields, &[], &WeekContext::default()).is_empty());
}
