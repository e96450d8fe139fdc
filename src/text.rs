//! Text normalization for summary post-processing.

/// Maximum number of insights stored with a topic memory.
const MAX_INSIGHTS: usize = 5;

/// Maximum length of a single stored insight, in characters.
const MAX_INSIGHT_CHARS: usize = 300;

/// Remove markdown emphasis symbols and collapse whitespace.
///
/// Strips `**`, `__`, and `~~` pairs, trims stray asterisks at the ends,
/// and normalizes runs of whitespace to single spaces.
pub fn strip_markdown(text: &str) -> String {
    let mut text = text.trim().to_string();
    for symbol in ["**", "__", "~~"] {
        while text.contains(symbol) {
            text = text.replace(symbol, "");
        }
    }
    let text = text.trim_matches('*');
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading bullet or list-number prefix from one insight line.
fn strip_list_prefix(line: &str) -> &str {
    line.trim_start_matches(['-', '•', '*', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', ')', ' '])
}

/// Clean raw insight lines for storage with a topic memory.
///
/// Each line is markdown-stripped, has any bullet/number prefix removed,
/// and is capped at 300 characters. Blank and near-blank lines are
/// dropped, duplicates are removed (first occurrence wins), and at most
/// five insights are kept, preserving input order.
pub fn clean_insights(raw: &[String]) -> Vec<String> {
    let mut cleaned = Vec::new();
    for line in raw {
        let stripped = strip_markdown(strip_list_prefix(line.trim()));
        if stripped.chars().count() <= 5 {
            continue;
        }
        let capped: String = stripped.chars().take(MAX_INSIGHT_CHARS).collect();
        if !cleaned.contains(&capped) {
            cleaned.push(capped);
        }
        if cleaned.len() == MAX_INSIGHTS {
            break;
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bold_and_strikethrough() {
        assert_eq!(strip_markdown("**bold** and ~~gone~~ and __under__"), "bold and gone and under");
    }

    #[test]
    fn test_strip_nested_emphasis() {
        // Repeated removal handles symbols reintroduced by adjacency.
        assert_eq!(strip_markdown("****double****"), "double");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(strip_markdown("  too   many\tspaces\nhere "), "too many spaces here");
    }

    #[test]
    fn test_clean_insights_strips_bullets_and_numbering() {
        let raw = vec![
            "- **First insight** about the topic".to_string(),
            "2) Second insight with more detail".to_string(),
            "• Third insight worth keeping".to_string(),
        ];
        let cleaned = clean_insights(&raw);
        assert_eq!(cleaned[0], "First insight about the topic");
        assert_eq!(cleaned[1], "Second insight with more detail");
        assert_eq!(cleaned[2], "Third insight worth keeping");
    }

    #[test]
    fn test_clean_insights_dedups_and_caps_at_five() {
        let raw: Vec<String> = (0..8)
            .map(|i| format!("insight number {}", i % 6))
            .collect();
        let cleaned = clean_insights(&raw);
        assert_eq!(cleaned.len(), 5);
        let mut sorted = cleaned.clone();
        sorted.dedup();
        assert_eq!(sorted.len(), cleaned.len());
    }

    #[test]
    fn test_clean_insights_drops_short_lines() {
        let raw = vec!["ok".to_string(), "-".to_string(), "a real insight here".to_string()];
        assert_eq!(clean_insights(&raw), vec!["a real insight here".to_string()]);
    }
}
