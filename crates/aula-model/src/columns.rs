use serde::{Deserialize, Serialize};

/// Names of the logical columns of a lesson-plan sheet.
///
/// The defaults are the headers used by the state curriculum spreadsheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonColumns {
    /// School year / grade ("ano/série").
    pub period: String,
    /// Term ("bimestre").
    pub term: String,
    /// Lesson number ("aula").
    pub lesson: String,
    pub knowledge_objects: String,
    pub content: String,
    /// Skill / competency code, e.g. `EF01MA06`.
    pub skill: String,
    pub component: String,
    pub theme: String,
}

impl Default for LessonColumns {
    fn default() -> Self {
        Self {
            period: "ANO/SÉRIE".to_string(),
            term: "BIMESTRE".to_string(),
            lesson: "AULA".to_string(),
            knowledge_objects: "OBJETOS DO CONHECIMENTO".to_string(),
            content: "CONTEÚDO".to_string(),
            skill: "HABILIDADE".to_string(),
            component: "COMPONENTE CURRICULAR".to_string(),
            theme: "UNIDADE TEMÁTICA".to_string(),
        }
    }
}
