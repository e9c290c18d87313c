//! Turns recognized method bodies into event-rooted control-flow chains.
//!
//! Each method becomes one chain. Lifecycle methods get an event node at the
//! head; every recognized statement is appended behind the previous one through
//! a [`FlowCursor`]. Recognition is pattern based, so statements are emitted in
//! the order the [`ScanOrder`] prescribes, not necessarily in source order.

use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use crate::source::{MethodDecl, SourceModel};
use std::ops::Range;

pub mod construct;
mod emit;
pub mod recognize;
pub mod units;

pub use construct::{Category, Construct, Located};
pub use emit::FlowCursor;
pub use recognize::Recognizer;

/// The order in which recognized statements of one method are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// All matches of one category before any match of the next, in
    /// recognizer precedence order.
    #[default]
    Category,
    /// All matches sorted by their position in the method body. Matches at the
    /// same position keep recognizer precedence order.
    Textual,
}

/// The slice of the graph produced for one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNodes {
    pub method: String,
    pub event: Option<NodeId>,
    /// Indices into [`Graph::nodes`], in emission order.
    pub nodes: Range<usize>,
}

/// Builder for a [`Translator`].
pub struct TranslatorBuilder {
    recognizers: Vec<Box<dyn Recognizer>>,
    order: ScanOrder,
}

impl TranslatorBuilder {
    /// Appends a recognizer after the built-in ones.
    pub fn with_recognizer(mut self, recognizer: Box<dyn Recognizer>) -> Self {
        self.recognizers.push(recognizer);
        self
    }

    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> Translator {
        Translator {
            recognizers: self.recognizers,
            order: self.order,
        }
    }
}

pub struct Translator {
    recognizers: Vec<Box<dyn Recognizer>>,
    order: ScanOrder,
}

impl Translator {
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder {
            recognizers: recognize::default_recognizers(),
            order: ScanOrder::default(),
        }
    }

    pub fn scan_order(&self) -> ScanOrder {
        self.order
    }

    /// Translates every method of `model` into `graph`, in declaration order.
    pub fn translate(
        &self,
        model: &SourceModel,
        graph: &mut Graph,
    ) -> Result<Vec<MethodNodes>, GraphError> {
        model
            .methods
            .iter()
            .map(|method| self.translate_method(method, graph))
            .collect()
    }

    /// Appends one method's chain to `graph`.
    pub fn translate_method(
        &self,
        method: &MethodDecl,
        graph: &mut Graph,
    ) -> Result<MethodNodes, GraphError> {
        let first = graph.nodes().len();

        let event = units::is_lifecycle_event(&method.name)
            .then(|| graph.add_node(units::event_unit(&method.name)));
        let mut cursor = match event {
            Some(event) => FlowCursor::at_event(event),
            None => FlowCursor::empty(),
        };

        let constructs = self.recognize(&method.body);
        tracing::debug!(
            method = %method.name,
            event = event.is_some(),
            constructs = constructs.len(),
            "translating method"
        );
        for located in &constructs {
            emit::emit(&located.construct, graph, &mut cursor)?;
        }

        if let Some(event) = event {
            if !method.comments.is_empty() {
                graph.set_description(event, method.comments.clone())?;
            }
        }

        Ok(MethodNodes {
            method: method.name.clone(),
            event,
            nodes: first..graph.nodes().len(),
        })
    }

    /// Runs every recognizer over `body` and orders the matches.
    pub fn recognize(&self, body: &str) -> Vec<Located> {
        let mut found: Vec<Located> = self
            .recognizers
            .iter()
            .flat_map(|recognizer| {
                let matches = recognizer.recognize(body);
                tracing::trace!(category = %recognizer.category(), matches = matches.len());
                matches
            })
            .collect();
        if self.order == ScanOrder::Textual {
            // Stable, so equal offsets keep recognizer order.
            found.sort_by_key(|located| located.offset);
        }
        found
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_types(graph: &Graph) -> Vec<&str> {
        graph.nodes().iter().map(|n| n.unit_type.as_str()).collect()
    }

    fn method(name: &str, body: &str) -> MethodDecl {
        MethodDecl {
            name: name.to_string(),
            return_type: "void".to_string(),
            body: body.to_string(),
            ..MethodDecl::default()
        }
    }

    #[test]
    fn category_order_emits_loops_before_logs() {
        let mut graph = Graph::new();
        let body = "{ Debug.Log(\"a\"); while (x) { } }";
        Translator::default()
            .translate_method(&method("Update", body), &mut graph)
            .unwrap();
        assert_eq!(
            unit_types(&graph),
            [
                "Unity.VisualScripting.Update",
                "Unity.VisualScripting.While",
                "Unity.VisualScripting.InvokeMember",
                "Unity.VisualScripting.Literal",
            ]
        );
    }

    #[test]
    fn textual_order_follows_source_position() {
        let mut graph = Graph::new();
        let body = "{ Debug.Log(\"a\"); while (x) { } }";
        let translator = Translator::builder().scan_order(ScanOrder::Textual).build();
        assert_eq!(translator.scan_order(), ScanOrder::Textual);
        assert_eq!(Translator::default().scan_order(), ScanOrder::Category);
        translator
            .translate_method(&method("Update", body), &mut graph)
            .unwrap();
        assert_eq!(
            unit_types(&graph),
            [
                "Unity.VisualScripting.Update",
                "Unity.VisualScripting.InvokeMember",
                "Unity.VisualScripting.Literal",
                "Unity.VisualScripting.While",
            ]
        );
    }

    #[test]
    fn non_lifecycle_method_has_no_event() {
        let mut graph = Graph::new();
        let nodes = Translator::default()
            .translate_method(&method("Jump", "{ if (grounded) { } }"), &mut graph)
            .unwrap();
        assert_eq!(nodes.event, None);
        assert_eq!(nodes.nodes, 0..1);
        assert!(graph.connections().is_empty());
    }

    #[test]
    fn comments_describe_the_event() {
        let mut graph = Graph::new();
        let mut start = method("Start", "{ }");
        start.comments = "Initializes the player".to_string();
        let nodes = Translator::default()
            .translate_method(&start, &mut graph)
            .unwrap();
        let event = nodes.event.unwrap();
        assert_eq!(
            graph.node(event).unwrap().description.as_deref(),
            Some("Initializes the player")
        );
    }

    struct ReturnRecognizer;

    impl Recognizer for ReturnRecognizer {
        fn category(&self) -> Category {
            Category::MemberCall
        }

        fn recognize(&self, body: &str) -> Vec<Located> {
            body.match_indices("return;")
                .map(|(offset, _)| Located {
                    offset,
                    construct: Construct::MemberCall {
                        receiver: "this".to_string(),
                        method: "Return".to_string(),
                        arg_count: 0,
                    },
                })
                .collect()
        }
    }

    #[test]
    fn custom_recognizers_run_after_builtins() {
        let translator = Translator::builder()
            .with_recognizer(Box::new(ReturnRecognizer))
            .build();
        let found = translator.recognize("{ return; while (x) { } }");
        let categories: Vec<_> = found.iter().map(|l| l.construct.category()).collect();
        assert_eq!(categories, [Category::WhileLoop, Category::MemberCall]);
    }
}
