//! Projection of a [`Graph`] into the Visual Scripting graph document.
//!
//! Nodes are written before connections, each in insertion order. `$id` and
//! `$ref` carry the node's arena index, so every reference resolves within the
//! same document.

use crate::error::GraphError;
use crate::graph::{Connection, Graph, Node, Position};
use crate::translate::units::{CONTROL_CONNECTION, VALUE_CONNECTION};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

mod schema;

use schema::*;

/// Renders `graph` as pretty-printed JSON with four-space indentation.
pub fn to_json(graph: &Graph) -> Result<String, GraphError> {
    let document = document(graph)?;
    let mut buffer = Vec::new();
    document.serialize(&mut Serializer::with_formatter(
        &mut buffer,
        PrettyFormatter::with_indent(b"    "),
    ))?;
    Ok(String::from_utf8(buffer)?)
}

/// Renders `graph` as a JSON value, for inspection.
pub fn to_value(graph: &Graph) -> Result<Value, GraphError> {
    Ok(serde_json::to_value(document(graph)?)?)
}

fn document(graph: &Graph) -> Result<Document<'_>, GraphError> {
    graph.validate()?;

    let elements = graph
        .nodes()
        .iter()
        .map(|node| Element::Unit(unit_element(node)))
        .chain(
            graph
                .connections()
                .iter()
                .map(|connection| Element::Connection(connection_element(connection))),
        )
        .collect();

    Ok(Document {
        nest: Nest {
            source: "Embed",
            macro_asset: None,
            embed: Embed {
                variables: Variables {
                    kind: "Flow",
                    collection: VariableCollection {
                        content: graph.variables(),
                        version: FORMAT_VERSION,
                    },
                    version: FORMAT_VERSION,
                },
                control_input_definitions: [],
                control_output_definitions: [],
                value_input_definitions: [],
                value_output_definitions: [],
                title: &graph.title,
                summary: &graph.summary,
                pan: Position { x: 0.0, y: 0.0 },
                zoom: 1.0,
                elements,
                version: FORMAT_VERSION,
            },
        },
    })
}

fn unit_element(node: &Node) -> UnitElement<'_> {
    let member = node.member.as_ref();
    let (literal_type, value) = if node.is_literal() {
        (
            node.default_values.get("type"),
            node.default_values.get("value"),
        )
    } else {
        (None, None)
    };

    UnitElement {
        guid: &node.guid,
        unit_type: &node.unit_type,
        version: FORMAT_VERSION,
        id: node.id.to_string(),
        position: node.position,
        default_values: &node.default_values,
        summary: node.description.as_deref(),
        member: member.map(|m| MemberElement {
            name: &m.name,
            parameter_types: &m.parameter_types,
            target_type: &m.target_type,
            target_type_name: &m.target_type,
            version: FORMAT_VERSION,
        }),
        chainable: member.map(|_| false),
        parameter_names: member.map(|m| m.parameter_names.as_slice()),
        literal_type,
        value,
    }
}

fn connection_element(connection: &Connection) -> ConnectionElement<'_> {
    ConnectionElement {
        guid: &connection.guid,
        connection_type: if connection.is_control {
            CONTROL_CONNECTION
        } else {
            VALUE_CONNECTION
        },
        source_unit: UnitRef {
            id: connection.source.to_string(),
        },
        source_key: &connection.source_key,
        destination_unit: UnitRef {
            id: connection.destination.to_string(),
        },
        destination_key: &connection.destination_key,
    }
}
