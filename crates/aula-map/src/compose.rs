//! Composition of the values shown in the form editor.
//!
//! Fields split into global fields, filled once from the first selected
//! lesson, and weekly fields, filled once per lesson of the selected week.

use tracing::debug;

use aula_model::{DataRow, FieldValueMap, FormField, LessonColumns};

use crate::matcher::FieldMatcher;

/// Labels of fields repeated for every lesson of a week.
pub const WEEKLY_ENTRY_LABELS: [&str; 8] = [
    "DATA DA AULA DA SEMANA",
    "CONTEÚDOS/OBJETOS DE CONHECIMENTO",
    "HABILIDADES",
    "UNIDADE TEMÁTICA",
    "NÚMERO DE AULA PREVISTA",
    "DESENVOLVIMENTO DA AULA (ESTRATÉGIAS E RECURSOS PEDAGÓGICOS)",
    "QUAL PEDAGOGIA ATIVA SERÁ UTILIZADA?",
    "AVALIAÇÃO",
];

/// Global labels containing one of these are filled by hand and never prefilled.
const EXCLUDED_GLOBAL_MARKERS: [&str; 2] = ["PROFESSOR", "TURMA"];
const SUBJECT_MARKER: &str = "DISCIPLINA";
const CONTENT_SEPARATOR: &str = " — ";

pub fn is_weekly_entry_label(label: &str) -> bool {
    let upper = label.trim().to_uppercase();
    WEEKLY_ENTRY_LABELS.contains(&upper.as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPartition {
    pub global: Vec<FormField>,
    pub weekly: Vec<FormField>,
}

/// Splits fields into global and weekly sets, keeping declaration order.
///
/// Fields that are neither weekly nor prefillable (professor and class fields)
/// appear in neither set.
pub fn partition_fields(fields: &[FormField]) -> FieldPartition {
    let mut partition = FieldPartition::default();
    for field in fields {
        if is_weekly_entry_label(&field.label) {
            partition.weekly.push(field.clone());
            continue;
        }
        let upper = field.label.to_uppercase();
        if EXCLUDED_GLOBAL_MARKERS
            .iter()
            .any(|marker| upper.contains(marker))
        {
            continue;
        }
        partition.global.push(field.clone());
    }
    partition
}

/// Initial values of the global fields.
///
/// Every field gets an entry: the matcher's value against `row` when it has
/// one, otherwise an empty string. A field whose label mentions the subject
/// ("disciplina") takes the sheet name, since each sheet holds one subject.
pub fn prefill_global(fields: &[FormField], row: Option<&DataRow>, sheet: &str) -> FieldValueMap {
    let matched = row
        .map(|row| FieldMatcher::new(fields).match_row(row))
        .unwrap_or_default();
    let sheet = sheet.trim();
    fields
        .iter()
        .map(|field| {
            let value = if !sheet.is_empty() && field.label.to_uppercase().contains(SUBJECT_MARKER) {
                sheet.to_string()
            } else {
                matched.get(&field.id).unwrap_or_default().to_string()
            };
            (field.id.clone(), value)
        })
        .collect()
}

/// What a weekly field is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklySlot {
    LessonDate,
    Content,
    Skill,
    LessonNumber,
    Theme,
    /// Written by hand.
    Manual,
}

impl WeeklySlot {
    pub fn classify(label: &str) -> Self {
        let upper = label.to_uppercase();
        if upper.contains("DATA DA AULA") {
            Self::LessonDate
        } else if upper.contains("CONTEÚDOS") || upper.contains("OBJETOS DE CONHECIMENTO") {
            Self::Content
        } else if upper.contains("HABILIDADES") {
            Self::Skill
        } else if upper.contains("NÚMERO DE AULA") {
            Self::LessonNumber
        } else if upper.contains("UNIDADE TEMÁTICA") {
            Self::Theme
        } else {
            Self::Manual
        }
    }
}

/// Selected week data shared by all entries of that week.
#[derive(Debug, Clone, Default)]
pub struct WeekContext {
    /// Short date range of the week, e.g. `03/02 - 07/02`.
    pub date_range: Option<String>,
    pub columns: LessonColumns,
}

impl WeekContext {
    pub fn new(date_range: Option<String>, columns: LessonColumns) -> Self {
        Self {
            date_range,
            columns,
        }
    }
}

/// Weekly field values for one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyEntry {
    pub lesson: Option<u32>,
    pub values: FieldValueMap,
}

/// One entry per lesson row, in row order.
pub fn compose_weekly_entries(
    weekly_fields: &[FormField],
    rows: &[DataRow],
    context: &WeekContext,
) -> Vec<WeeklyEntry> {
    let slots: Vec<(&FormField, WeeklySlot)> = weekly_fields
        .iter()
        .map(|field| (field, WeeklySlot::classify(&field.label)))
        .collect();
    let columns = &context.columns;

    rows.iter()
        .map(|row| {
            let lesson = row.lesson_number(columns);
            let values = slots
                .iter()
                .map(|(field, slot)| {
                    let value = match slot {
                        WeeklySlot::LessonDate => context.date_range.clone().unwrap_or_default(),
                        WeeklySlot::Content => join_content(
                            row.text(&columns.knowledge_objects).trim(),
                            row.text(&columns.content).trim(),
                        ),
                        WeeklySlot::Skill => row.text(&columns.skill),
                        WeeklySlot::LessonNumber => lesson
                            .map(|lesson| lesson.to_string())
                            .unwrap_or_else(|| row.text(&columns.lesson)),
                        WeeklySlot::Theme => row.text(&columns.theme),
                        WeeklySlot::Manual => String::new(),
                    };
                    (field.id.clone(), value)
                })
                .collect();
            debug!(?lesson, fields = slots.len(), "composed weekly entry");
            WeeklyEntry { lesson, values }
        })
        .collect()
}

fn join_content(objects: &str, content: &str) -> String {
    match (objects.is_empty(), content.is_empty()) {
        (false, false) => format!("{objects}{CONTENT_SEPARATOR}{content}"),
        (false, true) => objects.to_string(),
        (true, false) => content.to_string(),
        (true, true) => String::new(),
    }
}
