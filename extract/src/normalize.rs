//! Plan-text normalization utilities.

/// Prepares raw plan text for line classification.
///
/// Strips a UTF-8 BOM, unifies CRLF/CR line endings to LF, and drops
/// trailing whitespace per line. The heading patterns anchor on column
/// zero, so leading whitespace is left untouched.
pub fn normalize_plan_text(raw: &str) -> String {
    let without_bom = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let unified = without_bom.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_bom_and_unifies_line_endings() {
        let raw = "\u{feff}## Engineer 1: X\r\n**Phase 1: Plan**\r1.  **Do thing**  \n";
        let normalized = normalize_plan_text(raw);
        assert_eq!(
            normalized,
            "## Engineer 1: X\n**Phase 1: Plan**\n1.  **Do thing**"
        );
    }

    #[test]
    fn test_normalize_keeps_leading_indentation() {
        let raw = "*   **Timeline/Effort:** Weeks 1-3   ";
        assert_eq!(normalize_plan_text(raw), "*   **Timeline/Effort:** Weeks 1-3");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_plan_text(""), "");
    }
}
