use super::construct::{Category, Construct, Located};
use crate::source::scan;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static FOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bfor\s*\(\s*(?:int|var)\s+(\w+)\s*=\s*([^;]+);\s*(\w+)\s*[<>]=?\s*([^;]+);\s*(\w+)\s*(?:\+\+|--|\+=\s*\d+|-=\s*\d+)\s*\)",
    )
    .unwrap()
});
static WHILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bwhile\s*\(([^)]+)\)").unwrap());
static FOREACH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bforeach\s*\(\s*(?:var|(\w+(?:<[^>]+>)?))\s+(\w+)\s+in\s+([^)]+)\)").unwrap()
});
static SWITCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bswitch\s*\(([^)]+)\)\s*\{").unwrap());
static CASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bcase\s+\d+\s*:").unwrap());
static LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDebug\.Log\s*\(([^)]+)\)").unwrap());
static IF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bif\s*\(([^)]+)\)").unwrap());
// A value may hold one level of braces, as in array and collection initializers.
static ASSIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\w+)\s*=\s*((?:[^=;{}>]|\{[^{}]*\})(?:[^;{}]|\{[^{}]*\})*);").unwrap()
});
static YIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\byield\s+return\s+(?:new\s+)?(\w+)\s*(?:\(([^)]*)\))?").unwrap()
});
static CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\.(\w+)\s*\(([^)]*)\)").unwrap());

/// How far back on the same line a member call is checked for an `=`.
const ASSIGNMENT_LOOKBACK: usize = 20;

/// Finds every occurrence of one construct kind in a method body.
///
/// Recognizers never fail: text that does not fit the pattern is simply not
/// reported.
pub trait Recognizer: Send + Sync {
    fn category(&self) -> Category;
    fn recognize(&self, body: &str) -> Vec<Located>;
}

macro_rules! define_recognizers {
    ( $( ($struct_name:ident, $category:expr, $scan:ident) ),* $(,)? ) => {
        $(
            pub struct $struct_name;
            impl Recognizer for $struct_name {
                fn category(&self) -> Category { $category }
                fn recognize(&self, body: &str) -> Vec<Located> { $scan(body) }
            }
        )*

        /// The built-in recognizers in scan precedence order.
        pub(super) fn default_recognizers() -> Vec<Box<dyn Recognizer>> {
            vec![ $( Box::new($struct_name), )* ]
        }
    };
}

define_recognizers! {
    (ForLoopRecognizer, Category::ForLoop, scan_for_loops),
    (WhileLoopRecognizer, Category::WhileLoop, scan_while_loops),
    (ForeachLoopRecognizer, Category::ForeachLoop, scan_foreach_loops),
    (SwitchRecognizer, Category::Switch, scan_switches),
    (LogCallRecognizer, Category::LogCall, scan_log_calls),
    (ConditionalRecognizer, Category::Conditional, scan_conditionals),
    (AssignmentRecognizer, Category::Assignment, scan_assignments),
    (YieldRecognizer, Category::YieldSuspend, scan_yields),
    (MemberCallRecognizer, Category::MemberCall, scan_member_calls),
}

fn located(caps: &Captures, construct: Construct) -> Option<Located> {
    Some(Located {
        offset: caps.get(0)?.start(),
        construct,
    })
}

fn scan_for_loops(body: &str) -> Vec<Located> {
    FOR_RE
        .captures_iter(body)
        .filter(|caps| caps[1] == caps[3] && caps[1] == caps[5])
        .filter_map(|caps| {
            let construct = Construct::ForLoop {
                variable: caps[1].to_string(),
                start: caps[2].trim().to_string(),
                end: caps[4].trim().to_string(),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_while_loops(body: &str) -> Vec<Located> {
    WHILE_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let construct = Construct::WhileLoop {
                condition: caps[1].trim().to_string(),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_foreach_loops(body: &str) -> Vec<Located> {
    FOREACH_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let construct = Construct::ForeachLoop {
                item_type: caps.get(1).map(|m| m.as_str().to_string()),
                item: caps[2].to_string(),
                collection: caps[3].trim().to_string(),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_switches(body: &str) -> Vec<Located> {
    SWITCH_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let case_count = scan::balanced_block(body, whole.end() - 1)
                .map(|block| CASE_RE.find_iter(block).count())
                .unwrap_or(0);
            let construct = Construct::Switch {
                selector: caps[1].trim().to_string(),
                case_count,
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_log_calls(body: &str) -> Vec<Located> {
    LOG_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let construct = Construct::LogCall {
                argument: caps[1].trim().to_string(),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_conditionals(body: &str) -> Vec<Located> {
    IF_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let construct = Construct::Conditional {
                condition: caps[1].trim().to_string(),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_assignments(body: &str) -> Vec<Located> {
    ASSIGN_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let construct = Construct::Assignment {
                target: caps[1].to_string(),
                value: caps[2].trim().to_string(),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_yields(body: &str) -> Vec<Located> {
    YIELD_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let construct = Construct::YieldSuspend {
                instruction: caps[1].to_string(),
                arguments: caps.get(2).map(|m| m.as_str().to_string()),
            };
            located(&caps, construct)
        })
        .collect()
}

fn scan_member_calls(body: &str) -> Vec<Located> {
    let mut calls = Vec::new();
    for caps in CALL_RE.captures_iter(body) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (receiver, method) = (&caps[1], &caps[2]);
        if receiver == "Debug" && method == "Log" {
            continue;
        }
        // The right-hand side of an assignment belongs to the assignment.
        if scan::line_prefix(body, whole.start(), ASSIGNMENT_LOOKBACK).contains('=') {
            tracing::debug!(receiver, method, "skipping call on the right of an assignment");
            continue;
        }

        let arg_count = caps[3].split(',').filter(|a| !a.trim().is_empty()).count();
        calls.push(Located {
            offset: whole.start(),
            construct: Construct::MemberCall {
                receiver: receiver.to_string(),
                method: method.to_string(),
                arg_count,
            },
        });
    }
    calls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constructs(found: Vec<Located>) -> Vec<Construct> {
        found.into_iter().map(|l| l.construct).collect()
    }

    #[test]
    fn recognizers_run_in_category_precedence() {
        let categories: Vec<_> = default_recognizers().iter().map(|r| r.category()).collect();
        assert_eq!(categories, Category::ALL);
        let names: Vec<_> = Category::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["for", "while", "foreach", "switch", "log", "if", "assignment", "yield", "call"]
        );
    }

    #[test]
    fn for_loop_requires_one_loop_variable() {
        assert_eq!(
            constructs(scan_for_loops("for (int i = 0; i < count; i++) {}")),
            vec![Construct::ForLoop {
                variable: "i".into(),
                start: "0".into(),
                end: "count".into(),
            }]
        );
        assert!(scan_for_loops("for (int i = 0; j < 3; i++) {}").is_empty());
        assert_eq!(scan_for_loops("for (var k = 10; k >= 0; k -= 2) {}").len(), 1);
    }

    #[test]
    fn switch_counts_integer_cases_only() {
        let body = "switch (state) { case 0: a(); break; case 1: { b(); } break; case \"x\": break; default: break; }";
        assert_eq!(
            constructs(scan_switches(body)),
            vec![Construct::Switch {
                selector: "state".into(),
                case_count: 2,
            }]
        );
    }

    #[test]
    fn assignment_ignores_comparisons_and_compound_operators() {
        let body = "if (a == b) {} x += 1; y <= 2; z = a * 2; w => w;";
        assert_eq!(
            constructs(scan_assignments(body)),
            vec![Construct::Assignment {
                target: "z".into(),
                value: "a * 2".into(),
            }]
        );
    }

    #[test]
    fn assignment_keeps_brace_initializers() {
        let body = "var pts = new Vector3[] { a, b };\nint[] ids = { 1, 2 };";
        assert_eq!(
            constructs(scan_assignments(body)),
            vec![
                Construct::Assignment {
                    target: "pts".into(),
                    value: "new Vector3[] { a, b }".into(),
                },
                Construct::Assignment {
                    target: "ids".into(),
                    value: "{ 1, 2 }".into(),
                },
            ]
        );
    }

    #[test]
    fn member_call_skips_log_and_assigned_results() {
        let body = "Debug.Log(\"x\");\nvar rb = gameObject.GetComponent();\ntransform.Translate(1, 2, 3);";
        assert_eq!(
            constructs(scan_member_calls(body)),
            vec![Construct::MemberCall {
                receiver: "transform".into(),
                method: "Translate".into(),
                arg_count: 3,
            }]
        );
    }

    #[test]
    fn yield_captures_instruction_and_arguments() {
        let found = constructs(scan_yields("yield return new WaitForSeconds(1.5f); yield return null;"));
        assert_eq!(
            found,
            vec![
                Construct::YieldSuspend {
                    instruction: "WaitForSeconds".into(),
                    arguments: Some("1.5f".into()),
                },
                Construct::YieldSuspend {
                    instruction: "null".into(),
                    arguments: None,
                },
            ]
        );
    }

    #[test]
    fn keywords_need_word_boundaries() {
        assert!(scan_conditionals("Modif(x);").is_empty());
        assert!(scan_for_loops("foreach (var i in items) {}").is_empty());
    }
}
