use super::NodeId;
use serde::Serialize;
use serde_json::{Map, Value};

/// Broad classification of a node, mirroring the palette groups of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Event,
    Flow,
    Data,
    Invoke,
    GetMember,
    SetMember,
    Variable,
    Operator,
}

/// Direction and kind of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    ControlInput,
    ControlOutput,
    ValueInput,
    ValueOutput,
}

impl PortKind {
    pub fn is_control(self) -> bool {
        matches!(self, PortKind::ControlInput | PortKind::ControlOutput)
    }

    pub fn is_input(self) -> bool {
        matches!(self, PortKind::ControlInput | PortKind::ValueInput)
    }
}

/// A named attachment point on a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub key: String,
    pub kind: PortKind,
    pub data_type: Option<String>,
    pub default_value: Option<Value>,
}

impl Port {
    pub fn control_input(key: impl Into<String>) -> Self {
        Self::new(key, PortKind::ControlInput, None)
    }

    pub fn control_output(key: impl Into<String>) -> Self {
        Self::new(key, PortKind::ControlOutput, None)
    }

    pub fn value_input(key: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self::new(key, PortKind::ValueInput, Some(data_type.into()))
    }

    pub fn value_output(key: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self::new(key, PortKind::ValueOutput, Some(data_type.into()))
    }

    fn new(key: impl Into<String>, kind: PortKind, data_type: Option<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            data_type,
            default_value: None,
        }
    }
}

/// The reflected member an invoke node is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDescriptor {
    pub name: String,
    pub target_type: String,
    pub parameter_types: Vec<String>,
    pub parameter_names: Vec<String>,
    pub is_static: bool,
}

/// A node before it has been placed in a graph. The graph assigns its identity
/// and layout position when it is added.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub unit_type: String,
    pub category: NodeCategory,
    pub ports: Vec<Port>,
    pub default_values: Map<String, Value>,
    pub member: Option<MemberDescriptor>,
}

impl NodeSpec {
    pub fn new(unit_type: impl Into<String>, category: NodeCategory, ports: Vec<Port>) -> Self {
        Self {
            unit_type: unit_type.into(),
            category,
            ports,
            default_values: Map::new(),
            member: None,
        }
    }

    pub fn with_default(mut self, key: &str, value: Value) -> Self {
        self.default_values.insert(key.to_string(), value);
        self
    }

    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.member = Some(member);
        self
    }
}

/// 2-D editor position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A unit placed in a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub guid: String,
    pub unit_type: String,
    pub category: NodeCategory,
    pub position: Position,
    pub ports: Vec<Port>,
    pub default_values: Map<String, Value>,
    pub member: Option<MemberDescriptor>,
    pub description: Option<String>,
}

impl Node {
    pub fn port(&self, key: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.key == key)
    }

    /// Whether the node takes part in control flow through an `enter` port.
    pub fn has_control_input(&self) -> bool {
        self.ports.iter().any(|p| p.kind.is_control() && p.kind.is_input())
    }

    pub fn is_literal(&self) -> bool {
        self.unit_type == super::LITERAL_UNIT
    }
}

/// An edge between two ports. Endpoints are arena indices into the owning graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub guid: String,
    pub source: NodeId,
    pub source_key: String,
    pub destination: NodeId,
    pub destination_key: String,
    pub is_control: bool,
}

/// A graph-level variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: String,
    pub value: Value,
    pub exposed: bool,
}
