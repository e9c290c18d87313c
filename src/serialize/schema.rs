//! The on-disk shape of a flow graph document. Field order is the order keys are written.

use crate::graph::{Position, Variable};
use serde::Serialize;
use serde_json::{Map, Value};

pub(super) const FORMAT_VERSION: &str = "A";

#[derive(Serialize)]
pub(super) struct Document<'a> {
    pub nest: Nest<'a>,
}

#[derive(Serialize)]
pub(super) struct Nest<'a> {
    pub source: &'static str,
    #[serde(rename = "macro")]
    pub macro_asset: Option<()>,
    pub embed: Embed<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Embed<'a> {
    pub variables: Variables<'a>,
    pub control_input_definitions: [(); 0],
    pub control_output_definitions: [(); 0],
    pub value_input_definitions: [(); 0],
    pub value_output_definitions: [(); 0],
    pub title: &'a str,
    pub summary: &'a str,
    pub pan: Position,
    pub zoom: f64,
    pub elements: Vec<Element<'a>>,
    #[serde(rename = "$version")]
    pub version: &'static str,
}

#[derive(Serialize)]
pub(super) struct Variables<'a> {
    #[serde(rename = "Kind")]
    pub kind: &'static str,
    pub collection: VariableCollection<'a>,
    #[serde(rename = "$version")]
    pub version: &'static str,
}

#[derive(Serialize)]
pub(super) struct VariableCollection<'a> {
    #[serde(rename = "$content")]
    pub content: &'a [Variable],
    #[serde(rename = "$version")]
    pub version: &'static str,
}

#[derive(Serialize)]
#[serde(untagged)]
pub(super) enum Element<'a> {
    Unit(UnitElement<'a>),
    Connection(ConnectionElement<'a>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UnitElement<'a> {
    pub guid: &'a str,
    #[serde(rename = "$type")]
    pub unit_type: &'a str,
    #[serde(rename = "$version")]
    pub version: &'static str,
    #[serde(rename = "$id")]
    pub id: String,
    pub position: Position,
    pub default_values: &'a Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<MemberElement<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chainable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_names: Option<&'a [String]>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub literal_type: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MemberElement<'a> {
    pub name: &'a str,
    pub parameter_types: &'a [String],
    pub target_type: &'a str,
    pub target_type_name: &'a str,
    #[serde(rename = "$version")]
    pub version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ConnectionElement<'a> {
    pub guid: &'a str,
    #[serde(rename = "$type")]
    pub connection_type: &'static str,
    pub source_unit: UnitRef,
    pub source_key: &'a str,
    pub destination_unit: UnitRef,
    pub destination_key: &'a str,
}

#[derive(Serialize)]
pub(super) struct UnitRef {
    #[serde(rename = "$ref")]
    pub id: String,
}
