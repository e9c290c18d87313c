//! Best-effort recovery of declarations from C# source text.
//!
//! Nothing here is a grammar. Each declaration kind is found by its own pattern
//! and anything that does not match is simply absent from the resulting
//! [`SourceModel`]. Extraction never fails.

use regex::Regex;
use std::sync::LazyLock;

mod model;
pub mod scan;

pub use model::*;

static USING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*using\s+([^;(]+);").unwrap());
static NAMESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnamespace\s+([^{\s;]+)").unwrap());
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+(\w+)\s*(?::\s*(\w+))?").unwrap());
static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\[[^\]]+\]\s*)?(?:(public|private|protected|internal)\s+)?(?:(static)\s+)?(?:(readonly)\s+)?(\w+(?:<[^>]+>)?(?:\[\])?)\s+(\w+)\s*(?:=\s*([^;]+))?;",
    )
    .unwrap()
});
static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\[[^\]]+\]\s*)?(?:(public|private|protected|internal)\s+)?(?:(static)\s+)?(?:(virtual|override|abstract)\s+)?(?:(async)\s+)?(\w+(?:<[^>]+>)?(?:\[\])?)\s+(\w+)\s*\(([^)]*)\)\s*\{",
    )
    .unwrap()
});

/// Words that can sit where a type or member name is expected in a statement,
/// which would otherwise be mistaken for declarations (`else if (x) {`, `return x;`).
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "foreach", "while", "do", "switch", "case", "return", "new", "using",
    "lock", "catch", "throw", "yield", "await", "goto", "namespace", "class", "struct",
    "interface", "enum", "delegate", "event", "operator", "const",
];

fn is_statement_keyword(word: &str) -> bool {
    STATEMENT_KEYWORDS.contains(&word)
}

/// Declarations recovered from one source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceModel {
    pub imports: Vec<String>,
    pub namespace: Option<String>,
    pub class_name: Option<String>,
    pub base_class: Option<String>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
}

impl SourceModel {
    /// Scans `code` for every declaration kind the extractor recognizes.
    pub fn extract(code: &str) -> Self {
        let imports = USING_RE
            .captures_iter(code)
            .map(|c| c[1].trim().to_string())
            .collect();
        let namespace = NAMESPACE_RE.captures(code).map(|c| c[1].to_string());
        let (class_name, base_class) = match CLASS_RE.captures(code) {
            Some(c) => (
                Some(c[1].to_string()),
                c.get(2).map(|m| m.as_str().to_string()),
            ),
            None => (None, None),
        };

        let (methods, body_spans) = extract_methods(code);
        let fields = extract_fields(&mask_spans(code, &body_spans));

        tracing::debug!(
            class = class_name.as_deref().unwrap_or("<none>"),
            fields = fields.len(),
            methods = methods.len(),
            "extracted source model"
        );

        Self {
            imports,
            namespace,
            class_name,
            base_class,
            fields,
            methods,
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Finds method declarations and returns them with the byte spans of their bodies.
fn extract_methods(code: &str) -> (Vec<MethodDecl>, Vec<(usize, usize)>) {
    let mut methods = Vec::new();
    let mut spans = Vec::new();

    for caps in METHOD_RE.captures_iter(code) {
        let return_type = &caps[5];
        let name = &caps[6];
        if is_statement_keyword(return_type) || is_statement_keyword(name) {
            continue;
        }

        let Some(whole) = caps.get(0) else {
            continue;
        };
        let open = whole.end() - 1;
        let body = match scan::balanced_block(code, open) {
            Some(body) => {
                spans.push((open, open + body.len()));
                body.to_string()
            }
            None => String::new(),
        };

        let access = Access::from_keyword(caps.get(1).map(|m| m.as_str()));
        tracing::trace!(%access, name, body_len = body.len(), "found method");
        methods.push(MethodDecl {
            access,
            is_static: caps.get(2).is_some(),
            modifier: caps
                .get(3)
                .and_then(|m| MethodModifier::from_keyword(m.as_str())),
            is_async: caps.get(4).is_some(),
            return_type: return_type.to_string(),
            name: name.to_string(),
            parameters: scan::parse_parameters(&caps[7]),
            body,
            is_coroutine: return_type.contains("IEnumerator"),
            comments: scan::leading_comments(code, whole.start()),
        });
    }
    (methods, spans)
}

fn extract_fields(code: &str) -> Vec<FieldDecl> {
    FIELD_RE
        .captures_iter(code)
        .filter(|caps| !is_statement_keyword(&caps[4]) && !is_statement_keyword(&caps[5]))
        .map(|caps| FieldDecl {
            access: Access::from_keyword(caps.get(1).map(|m| m.as_str())),
            is_static: caps.get(2).is_some(),
            is_readonly: caps.get(3).is_some(),
            field_type: caps[4].to_string(),
            name: caps[5].to_string(),
            initializer: caps.get(6).map(|m| m.as_str().trim().to_string()),
        })
        .collect()
}

/// Blanks out the given byte spans so field scanning only sees class-level text.
fn mask_spans(code: &str, spans: &[(usize, usize)]) -> String {
    let mut masked = String::with_capacity(code.len());
    let mut cursor = 0;
    for &(start, end) in spans {
        if start < cursor {
            continue;
        }
        masked.push_str(&code[cursor..start]);
        masked.extend(code[start..end].chars().map(|c| if c == '\n' { '\n' } else { ' ' }));
        cursor = end;
    }
    masked.push_str(&code[cursor..]);
    masked
}
