//! The assembled flow graph: an arena of nodes plus the connections between them.

use crate::error::GraphError;
use std::fmt;

mod guid;
mod layout;
mod node;

pub use guid::{GuidSource, RandomGuids, SequentialGuids};
pub use layout::{LayoutConfig, LayoutCursor};
pub use node::*;

pub const LITERAL_UNIT: &str = "Unity.VisualScripting.Literal";
pub const DEFAULT_TITLE: &str = "ConvertedGraph";
pub const DEFAULT_SUMMARY: &str = "Converted Graph";

/// Stable index of a node inside its graph. Also used as the serialized `$id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One flow graph document. Nodes are placed in emission order and never removed.
pub struct Graph {
    pub title: String,
    pub summary: String,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    variables: Vec<Variable>,
    layout: LayoutCursor,
    guids: Box<dyn GuidSource>,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_settings(LayoutConfig::default(), Box::new(RandomGuids))
    }

    pub fn with_settings(layout: LayoutConfig, guids: Box<dyn GuidSource>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            summary: DEFAULT_SUMMARY.to_string(),
            nodes: Vec::new(),
            connections: Vec::new(),
            variables: Vec::new(),
            layout: LayoutCursor::new(layout),
            guids,
        }
    }

    /// Places a node at the next layout slot and returns its id.
    pub fn add_node(&mut self, spec: NodeSpec) -> NodeId {
        let id = NodeId(self.nodes.len());
        let position = self.layout.next_position();
        tracing::trace!(%id, unit = %spec.unit_type, x = position.x, y = position.y, "placed node");
        self.nodes.push(Node {
            id,
            guid: self.guids.next_guid(),
            unit_type: spec.unit_type,
            category: spec.category,
            position,
            ports: spec.ports,
            default_values: spec.default_values,
            member: spec.member,
            description: None,
        });
        id
    }

    /// Adds an edge between two existing nodes.
    pub fn connect(
        &mut self,
        source: NodeId,
        source_key: &str,
        destination: NodeId,
        destination_key: &str,
        is_control: bool,
    ) -> Result<(), GraphError> {
        let source_node = self.require(source)?;
        if source_node.port(source_key).is_none() {
            tracing::debug!(
                unit = %source_node.unit_type,
                key = source_key,
                "connection leaves through an undeclared port"
            );
        }
        let destination_node = self.require(destination)?;
        if destination_node.port(destination_key).is_none() {
            tracing::debug!(
                unit = %destination_node.unit_type,
                key = destination_key,
                "connection enters through an undeclared port"
            );
        }

        let guid = self.guids.next_guid();
        self.connections.push(Connection {
            guid,
            source,
            source_key: source_key.to_string(),
            destination,
            destination_key: destination_key.to_string(),
            is_control,
        });
        Ok(())
    }

    pub fn connect_control(
        &mut self,
        source: NodeId,
        source_key: &str,
        destination: NodeId,
        destination_key: &str,
    ) -> Result<(), GraphError> {
        self.connect(source, source_key, destination, destination_key, true)
    }

    pub fn connect_value(
        &mut self,
        source: NodeId,
        source_key: &str,
        destination: NodeId,
        destination_key: &str,
    ) -> Result<(), GraphError> {
        self.connect(source, source_key, destination, destination_key, false)
    }

    /// Attaches a human-readable summary to a node. The only mutation a placed node allows.
    pub fn set_description(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(GraphError::NodeNotFound { id })?;
        node.description = Some(text.into());
        Ok(())
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn nodes_of_type<'a>(&'a self, unit_type: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.unit_type == unit_type)
    }

    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.iter().filter(move |c| c.destination == id)
    }

    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.iter().filter(move |c| c.source == id)
    }

    /// Checks that every connection endpoint resolves to a node of this graph.
    pub fn validate(&self) -> Result<(), GraphError> {
        for connection in &self.connections {
            self.require(connection.source)?;
            self.require(connection.destination)?;
        }
        Ok(())
    }

    fn require(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id.0).ok_or(GraphError::NodeNotFound { id })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("title", &self.title)
            .field("summary", &self.summary)
            .field("nodes", &self.nodes)
            .field("connections", &self.connections)
            .field("variables", &self.variables)
            .finish()
    }
}
