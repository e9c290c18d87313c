//! Text scanning helpers shared by the extractor and the statement recognizers.

use super::model::Parameter;
use itertools::Itertools;

/// Number of lines inspected above a method when harvesting its comments.
const COMMENT_WINDOW: usize = 5;

/// Returns the block starting at the `{` at byte offset `open`, up to and including
/// its matching `}`. `None` when there is no brace at `open` or the braces never balance.
pub fn balanced_block(text: &str, open: usize) -> Option<&str> {
    if text.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open..open + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Collects the comment lines directly above byte offset `pos`.
///
/// Blank lines and attribute lines (`[...]`) are stepped over; any other line ends
/// the scan.
pub fn leading_comments(text: &str, pos: usize) -> String {
    // Only whole lines count; the indentation before `pos` is not one of them.
    let Some(line_start) = text[..pos].rfind('\n') else {
        return String::new();
    };
    let lines: Vec<&str> = text[..line_start].split('\n').collect();
    let window = &lines[lines.len().saturating_sub(COMMENT_WINDOW)..];

    let mut harvested = Vec::new();
    for line in window.iter().rev() {
        let line = line.trim();
        if line.starts_with("//") {
            harvested.push(line.trim_start_matches('/').trim());
        } else if line.starts_with("/*") || line.starts_with('*') {
            harvested.push(
                line.trim_start_matches(['/', '*'])
                    .trim_end_matches(['*', '/'])
                    .trim(),
            );
        } else if !line.is_empty() && !line.starts_with('[') {
            break;
        }
    }
    harvested.iter().rev().filter(|c| !c.is_empty()).join(" ")
}

/// Splits `text` on commas that are not nested in `<>`, `()`, `[]` or `{}`.
pub fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Parses a raw parameter list into `(type, name)` pairs. Entries without a
/// separate type and name are dropped; default values are ignored.
pub fn parse_parameters(raw: &str) -> Vec<Parameter> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    split_top_level(raw)
        .into_iter()
        .filter_map(|part| {
            let declaration = part.split('=').next().unwrap_or(part).trim();
            let (param_type, name) = declaration.rsplit_once(char::is_whitespace)?;
            Some(Parameter {
                param_type: param_type.trim().to_string(),
                name: name.trim().to_string(),
            })
        })
        .collect()
}

/// The text of the line containing `pos`, from its start up to `pos`, limited to
/// at most `max_bytes` bytes.
pub fn line_prefix(text: &str, pos: usize, max_bytes: usize) -> &str {
    let mut from = pos.saturating_sub(max_bytes);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    let window = &text[from..pos];
    match window.rfind('\n') {
        Some(newline) => &window[newline + 1..],
        None => window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_includes_both_braces() {
        let text = "void A() { if (x) { y(); } } trailing";
        let open = text.find('{').unwrap();
        assert_eq!(
            balanced_block(text, open),
            Some("{ if (x) { y(); } }")
        );
    }

    #[test]
    fn unbalanced_block_is_absent() {
        assert_eq!(balanced_block("{ { }", 0), None);
        assert_eq!(balanced_block("no brace", 0), None);
    }

    #[test]
    fn harvests_line_and_block_comments_in_order() {
        let text = "int x;\n/* first\n * second */\n// third\n[Attr]\nvoid Start() {}";
        let pos = text.find("void").unwrap();
        assert_eq!(leading_comments(text, pos), "first second third");
    }

    #[test]
    fn comment_scan_stops_at_code() {
        let text = "// unrelated\nint x;\n\n// Runs each frame\nvoid Update() {}";
        let pos = text.find("void").unwrap();
        assert_eq!(leading_comments(text, pos), "Runs each frame");
    }

    #[test]
    fn window_covers_five_whole_lines_above_an_indented_method() {
        let text = "class A {\n    // a\n    // b\n    // c\n    // d\n    // e\n    void Start() { }\n}";
        let pos = text.find("void").unwrap();
        assert_eq!(leading_comments(text, pos), "a b c d e");
    }

    #[test]
    fn first_line_has_no_comments() {
        assert_eq!(leading_comments("void Start() { }", 0), "");
    }

    #[test]
    fn doc_comment_slashes_are_stripped() {
        let text = "/// <summary>Hi</summary>\nvoid Awake() {}";
        let pos = text.find("void").unwrap();
        assert_eq!(leading_comments(text, pos), "<summary>Hi</summary>");
    }

    #[test]
    fn parameters_respect_generic_commas() {
        let params = parse_parameters("Dictionary<int, string> map, float speed = 2f");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].param_type, "Dictionary<int, string>");
        assert_eq!(params[0].name, "map");
        assert_eq!(params[1].param_type, "float");
        assert_eq!(params[1].name, "speed");
    }

    #[test]
    fn line_prefix_stops_at_newline() {
        let text = "a = 1;\nvar t = obj.Call()";
        let pos = text.find("obj").unwrap();
        assert_eq!(line_prefix(text, pos, 20), "var t = ");
    }
}
