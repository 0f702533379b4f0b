/// First `max_chars` characters of `text`, with `...` appended when cut short
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(preview("What is Rust?", 50), "What is Rust?");
    }

    #[test]
    fn test_long_text_truncated() {
        let text = "a".repeat(60);
        assert_eq!(preview(&text, 50), format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_exact_length_not_marked() {
        let text = "b".repeat(50);
        assert_eq!(preview(&text, 50), text);
    }
}
