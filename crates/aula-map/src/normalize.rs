//! Loose text comparison keys.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes optional text for loose comparison.
///
/// Absent or empty input yields an empty string.
pub fn normalize(raw: Option<&str>) -> String {
    raw.map(normalize_str).unwrap_or_default()
}

/// Decomposes accents away, replaces every character that is not an ASCII
/// letter or digit with a single space, lowercases and trims.
///
/// Internal runs of spaces are kept, so `"A/B"` and `"A B"` normalize the same
/// but `"A//B"` does not.
///
/// ```
/// assert_eq!(aula_map::normalize_str("HABILIDADE(S)?"), "habilidade s");
/// assert_eq!(aula_map::normalize_str("Conteúdo"), "conteudo");
/// ```
pub fn normalize_str(raw: &str) -> String {
    let folded: String = raw
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    folded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_punctuation() {
        assert_eq!(normalize_str("HABILIDADE(S)?"), "habilidade s");
        assert_eq!(normalize_str("ANO/SÉRIE"), "ano serie");
        assert_eq!(normalize_str("NÚMERO DE AULA PREVISTA"), "numero de aula prevista");
        assert_eq!(normalize_str("  Ação  "), "acao");
    }

    #[test]
    fn keeps_internal_space_runs() {
        assert_eq!(normalize_str("CONTEÚDOS/ OBJETOS"), "conteudos  objetos");
        assert_eq!(normalize_str("1º Ano"), "1  ano");
    }

    #[test]
    fn absent_and_blank_are_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("?!")), "");
    }
}
