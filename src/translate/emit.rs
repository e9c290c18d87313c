use super::construct::Construct;
use super::units::{self, Arithmetic, Comparison};
use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use serde_json::json;

/// Fallback bounds for a for-loop whose bounds are not plain integer literals.
const DEFAULT_FIRST_INDEX: i64 = 0;
const DEFAULT_LAST_INDEX: i64 = 10;

/// The node control flow currently continues from, and the port it leaves through.
///
/// Every emitted construct is wired from the cursor into its `enter` port and then
/// becomes the cursor itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlowCursor {
    current: Option<(NodeId, &'static str)>,
}

impl FlowCursor {
    /// A cursor with no predecessor; the first construct stays unwired.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A cursor positioned on an event node's `trigger` output.
    pub fn at_event(event: NodeId) -> Self {
        Self {
            current: Some((event, "trigger")),
        }
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current.map(|(node, _)| node)
    }

    pub fn exit_key(&self) -> Option<&'static str> {
        self.current.map(|(_, key)| key)
    }

    /// Wires the predecessor, if any, into `node` and moves the cursor onto it.
    pub fn advance(&mut self, graph: &mut Graph, node: NodeId) -> Result<(), GraphError> {
        if let Some((previous, key)) = self.current {
            graph.connect_control(previous, key, node, "enter")?;
        }
        self.current = Some((node, "exit"));
        Ok(())
    }
}

/// Emits the nodes and connections for one construct.
pub fn emit(
    construct: &Construct,
    graph: &mut Graph,
    cursor: &mut FlowCursor,
) -> Result<(), GraphError> {
    match construct {
        Construct::ForLoop { start, end, .. } => {
            let for_node = graph.add_node(units::for_unit());
            let first = graph.add_node(units::literal_unit(
                json!(parse_index(start).unwrap_or(DEFAULT_FIRST_INDEX)),
                "int",
            ));
            let last = graph.add_node(units::literal_unit(
                json!(parse_index(end).unwrap_or(DEFAULT_LAST_INDEX)),
                "int",
            ));
            cursor.advance(graph, for_node)?;
            graph.connect_value(first, "output", for_node, "firstIndex")?;
            graph.connect_value(last, "output", for_node, "lastIndex")?;
        }
        // Conditions, collections and selectors have no synthesis rule; their
        // inputs stay unconnected.
        Construct::WhileLoop { .. } => {
            let node = graph.add_node(units::while_unit());
            cursor.advance(graph, node)?;
        }
        Construct::ForeachLoop { .. } => {
            let node = graph.add_node(units::foreach_unit());
            cursor.advance(graph, node)?;
        }
        Construct::Switch { case_count, .. } => {
            let node = graph.add_node(units::switch_unit(*case_count));
            cursor.advance(graph, node)?;
        }
        Construct::LogCall { argument } => {
            let log = graph.add_node(units::debug_log_unit());
            cursor.advance(graph, log)?;
            if let Some(text) = string_literal(argument) {
                let literal = graph.add_node(units::literal_unit(json!(text), "string"));
                graph.connect_value(literal, "output", log, "%message")?;
            }
        }
        Construct::Conditional { condition } => {
            let branch = graph.add_node(units::if_unit());
            cursor.advance(graph, branch)?;
            if let Some(op) = Comparison::find_in(condition) {
                tracing::debug!(op = op.symbol(), condition = condition.as_str(), "comparison operands are not synthesized");
                let comparison = graph.add_node(op.unit());
                graph.connect_value(comparison, "result", branch, "condition")?;
            }
        }
        Construct::Assignment { target, value } => {
            let set = graph.add_node(units::set_variable_unit(target, "System.Object"));
            cursor.advance(graph, set)?;
            if let Some(op) = Arithmetic::find_in(value) {
                tracing::debug!(op = %op.symbol(), value = value.as_str(), "arithmetic operands are not synthesized");
                let arithmetic = graph.add_node(op.unit());
                graph.connect_value(arithmetic, "result", set, "input")?;
            }
        }
        Construct::YieldSuspend {
            instruction,
            arguments,
        } => {
            let suspend = graph.add_node(units::yield_return_unit());
            cursor.advance(graph, suspend)?;
            let seconds = match (instruction.as_str(), arguments) {
                ("WaitForSeconds", Some(args)) => parse_seconds(args),
                _ => None,
            };
            if let Some(seconds) = seconds {
                let wait = graph.add_node(units::wait_for_seconds_unit(seconds));
                graph.connect_value(wait, "result", suspend, "instruction")?;
            }
        }
        Construct::MemberCall {
            receiver,
            method,
            arg_count,
        } => {
            let call = graph.add_node(units::member_call_unit(receiver, method, *arg_count));
            cursor.advance(graph, call)?;
        }
    }
    Ok(())
}

/// A loop bound counts only when it is made of ASCII digits alone.
fn parse_index(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// A single numeric literal, optionally with a C# `f`, `d` or `m` suffix.
fn parse_seconds(text: &str) -> Option<f64> {
    let text = text.trim();
    let number = text
        .strip_suffix(['f', 'F', 'd', 'D', 'm', 'M'])
        .unwrap_or(text);
    number.parse::<f64>().ok().filter(|s| s.is_finite())
}

fn string_literal(argument: &str) -> Option<&str> {
    if argument.len() >= 2 {
        argument.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}
