//! Markdown answers rendered for the terminal.

const FENCE: &str = "```";
const CODE_INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    CodeFence {
        language: Option<String>,
        code: String,
    },
}

/// Split markdown into paragraphs and fenced code blocks.
///
/// An unterminated fence runs to the end of the text.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut fence: Option<(Option<String>, Vec<&str>)> = None;

    for line in markdown.lines() {
        if let Some((language, code)) = fence.as_mut() {
            if line.trim_start().starts_with(FENCE) {
                blocks.push(Block::CodeFence {
                    language: language.take(),
                    code: code.join("\n"),
                });
                fence = None;
            } else {
                code.push(line);
            }
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix(FENCE) {
            flush_paragraph(&mut paragraph, &mut blocks);
            let language = info.trim();
            let language = (!language.is_empty()).then(|| language.to_string());
            fence = Some((language, Vec::new()));
        } else if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line);
        }
    }

    if let Some((language, code)) = fence {
        blocks.push(Block::CodeFence {
            language,
            code: code.join("\n"),
        });
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    blocks
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph(lines.join("\n")));
        lines.clear();
    }
}

pub fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph(text) => render_paragraph(text),
        Block::CodeFence { language, code } => render_code(language.as_deref(), code),
    }
}

// Inline `code` spans stay as written
fn render_paragraph(text: &str) -> String {
    text.to_string()
}

fn render_code(language: Option<&str>, code: &str) -> String {
    let mut out = format!("{}[{}]", CODE_INDENT, language.unwrap_or("code"));
    for line in code.lines() {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(CODE_INDENT);
            out.push_str(line);
        }
    }
    out
}

pub fn render_markdown(markdown: &str) -> String {
    parse_blocks(markdown)
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_fence() {
        let md = "Use the functional form:\n\n```jsx\nsetCount(prev => prev + 1);\n```\n\nThat's it.";
        let blocks = parse_blocks(md);
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("Use the functional form:".to_string()),
                Block::CodeFence {
                    language: Some("jsx".to_string()),
                    code: "setCount(prev => prev + 1);".to_string(),
                },
                Block::Paragraph("That's it.".to_string()),
            ]
        );
    }

    #[test]
    fn test_fence_without_language_keeps_blank_lines() {
        let blocks = parse_blocks("```\nfn a() {}\n\nfn b() {}\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeFence {
                language: None,
                code: "fn a() {}\n\nfn b() {}".to_string(),
            }]
        );
    }

    #[test]
    fn test_unterminated_fence() {
        let blocks = parse_blocks("text\n```rust\nlet x = 1;");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[1],
            Block::CodeFence {
                language: Some("rust".to_string()),
                code: "let x = 1;".to_string(),
            }
        );
    }

    #[test]
    fn test_render() {
        let out = render_markdown("Call `useState`:\n```js\nconst [a, setA] = useState(0);\n```");
        assert_eq!(
            out,
            "Call `useState`:\n\n    [js]\n    const [a, setA] = useState(0);"
        );
    }

    #[test]
    fn test_list_lines_stay_in_one_paragraph() {
        let blocks = parse_blocks("Consider:\n- `React.memo`\n- `useMemo`\n\nDone");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Paragraph("Consider:\n- `React.memo`\n- `useMemo`".to_string())
        );
    }
}
