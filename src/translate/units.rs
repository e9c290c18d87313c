//! Factories for the Visual Scripting units the translator emits.

use crate::graph::{LITERAL_UNIT, MemberDescriptor, NodeCategory, NodeSpec, Port};
use ahash::AHashMap;
use serde_json::{Value, json};
use std::sync::LazyLock;

pub const INVOKE_MEMBER_UNIT: &str = "Unity.VisualScripting.InvokeMember";
pub const CONTROL_CONNECTION: &str = "Unity.VisualScripting.ControlConnection";
pub const VALUE_CONNECTION: &str = "Unity.VisualScripting.ValueConnection";

/// Method names that map onto a lifecycle or physics event unit.
pub const LIFECYCLE_EVENTS: &[&str] = &[
    "Start",
    "Update",
    "Awake",
    "OnEnable",
    "OnDisable",
    "OnDestroy",
    "FixedUpdate",
    "LateUpdate",
    "OnTriggerEnter",
    "OnTriggerExit",
    "OnTriggerStay",
    "OnCollisionEnter",
    "OnCollisionExit",
    "OnCollisionStay",
];

/// Call receivers that name a UnityEngine type.
const ENGINE_RECEIVERS: &[&str] = &["GameObject", "Transform", "Rigidbody"];

static TYPE_MAPPINGS: LazyLock<AHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    AHashMap::from_iter([
        ("int", "System.Int32"),
        ("float", "System.Single"),
        ("double", "System.Double"),
        ("bool", "System.Boolean"),
        ("string", "System.String"),
        ("Vector2", "UnityEngine.Vector2"),
        ("Vector3", "UnityEngine.Vector3"),
        ("Quaternion", "UnityEngine.Quaternion"),
        ("GameObject", "UnityEngine.GameObject"),
        ("Transform", "UnityEngine.Transform"),
    ])
});

/// Maps a C# keyword or engine type to its fully qualified name. Unknown names pass through.
pub fn map_type(name: &str) -> String {
    TYPE_MAPPINGS.get(name).copied().unwrap_or(name).to_string()
}

pub fn is_lifecycle_event(method_name: &str) -> bool {
    LIFECYCLE_EVENTS.contains(&method_name)
}

/// Resolves a call receiver to the target type recorded on the member descriptor.
pub fn receiver_type(receiver: &str) -> String {
    if ENGINE_RECEIVERS.contains(&receiver) {
        format!("UnityEngine.{}", receiver)
    } else {
        receiver.to_string()
    }
}

macro_rules! fixed_units {
    ( $( $(#[$doc:meta])* $fn_name:ident => ($unit:literal, $category:ident, [ $( $port:expr ),* $(,)? ]) );* $(;)? ) => {
        $(
            $(#[$doc])*
            pub fn $fn_name() -> NodeSpec {
                NodeSpec::new($unit, NodeCategory::$category, vec![ $( $port ),* ])
            }
        )*
    };
}

fixed_units! {
    if_unit => ("Unity.VisualScripting.If", Flow, [
        Port::control_input("enter"),
        Port::value_input("condition", "System.Boolean"),
        Port::control_output("true"),
        Port::control_output("false"),
    ]);
    for_unit => ("Unity.VisualScripting.For", Flow, [
        Port::control_input("enter"),
        Port::value_input("firstIndex", "System.Int32"),
        Port::value_input("lastIndex", "System.Int32"),
        Port::value_input("step", "System.Int32"),
        Port::control_output("body"),
        Port::control_output("exit"),
        Port::value_output("currentIndex", "System.Int32"),
    ]);
    while_unit => ("Unity.VisualScripting.While", Flow, [
        Port::control_input("enter"),
        Port::value_input("condition", "System.Boolean"),
        Port::control_output("body"),
        Port::control_output("exit"),
    ]);
    foreach_unit => ("Unity.VisualScripting.ForEach", Flow, [
        Port::control_input("enter"),
        Port::value_input("collection", "System.Collections.IEnumerable"),
        Port::control_output("body"),
        Port::control_output("exit"),
        Port::value_output("currentItem", "System.Object"),
    ]);
    /// Suspends a coroutine until its instruction completes.
    yield_return_unit => ("Unity.VisualScripting.YieldReturn", Flow, [
        Port::control_input("enter"),
        Port::control_output("exit"),
        Port::value_input("instruction", "UnityEngine.YieldInstruction"),
    ]);
}

pub fn event_unit(method_name: &str) -> NodeSpec {
    NodeSpec::new(
        format!("Unity.VisualScripting.{}", method_name),
        NodeCategory::Event,
        vec![Port::control_output("trigger")],
    )
}

/// A switch with one control output per integer case, plus `default`.
pub fn switch_unit(case_count: usize) -> NodeSpec {
    let mut ports = vec![
        Port::control_input("enter"),
        Port::value_input("selector", "System.Int32"),
    ];
    ports.extend((0..case_count).map(|i| Port::control_output(i.to_string())));
    ports.push(Port::control_output("default"));
    NodeSpec::new("Unity.VisualScripting.SwitchOnInteger", NodeCategory::Flow, ports)
}

/// A constant value. `type_name` goes through [`map_type`].
pub fn literal_unit(value: Value, type_name: &str) -> NodeSpec {
    let mapped = map_type(type_name);
    NodeSpec::new(
        LITERAL_UNIT,
        NodeCategory::Data,
        vec![Port::value_output("output", mapped.clone())],
    )
    .with_default("type", Value::String(mapped.clone()))
    .with_default("value", json!({ "$content": value, "$type": mapped }))
}

pub fn wait_for_seconds_unit(seconds: f64) -> NodeSpec {
    NodeSpec::new(
        "Unity.VisualScripting.WaitForSeconds",
        NodeCategory::Data,
        vec![
            Port::value_input("seconds", "System.Single"),
            Port::value_output("result", "UnityEngine.WaitForSeconds"),
        ],
    )
    .with_default("seconds", json!(seconds))
}

pub fn set_variable_unit(name: &str, variable_type: &str) -> NodeSpec {
    NodeSpec::new(
        "Unity.VisualScripting.SetVariable",
        NodeCategory::Variable,
        vec![
            Port::control_input("enter"),
            Port::control_output("exit"),
            Port::value_input("input", variable_type),
        ],
    )
    .with_default("name", Value::String(name.to_string()))
}

/// Invokes a reflected member. Instance members get a `target` input, each
/// parameter a `%name` input, and non-void members a `result` output.
pub fn invoke_unit(member: MemberDescriptor, return_type: Option<&str>) -> NodeSpec {
    let mut ports = vec![Port::control_input("enter"), Port::control_output("exit")];
    if !member.is_static {
        ports.push(Port::value_input("target", member.target_type.clone()));
    }
    for (name, param_type) in member.parameter_names.iter().zip(&member.parameter_types) {
        ports.push(Port::value_input(format!("%{}", name), param_type.clone()));
    }
    if let Some(return_type) = return_type.filter(|t| *t != "void") {
        ports.push(Port::value_output("result", map_type(return_type)));
    }
    NodeSpec::new(INVOKE_MEMBER_UNIT, NodeCategory::Invoke, ports).with_member(member)
}

/// `UnityEngine.Debug.Log(object message)`.
pub fn debug_log_unit() -> NodeSpec {
    invoke_unit(
        MemberDescriptor {
            name: "Log".to_string(),
            target_type: "UnityEngine.Debug".to_string(),
            parameter_types: vec!["System.Object".to_string()],
            parameter_names: vec!["message".to_string()],
            is_static: true,
        },
        None,
    )
}

/// An instance call whose arguments are only counted, not typed.
pub fn member_call_unit(receiver: &str, method: &str, arg_count: usize) -> NodeSpec {
    invoke_unit(
        MemberDescriptor {
            name: method.to_string(),
            target_type: receiver_type(receiver),
            parameter_types: vec!["System.Object".to_string(); arg_count],
            parameter_names: (0..arg_count).map(|i| format!("arg{}", i)).collect(),
            is_static: false,
        },
        Some("void"),
    )
}

/// Comparison operators, in the order a condition is searched for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl Comparison {
    const SEARCH_ORDER: [Comparison; 6] = [
        Comparison::LessOrEqual,
        Comparison::GreaterOrEqual,
        Comparison::Equal,
        Comparison::NotEqual,
        Comparison::Less,
        Comparison::Greater,
    ];

    /// The first operator, in search order, that occurs anywhere in `condition`.
    pub fn find_in(condition: &str) -> Option<Self> {
        Self::SEARCH_ORDER
            .into_iter()
            .find(|op| condition.contains(op.symbol()))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::Less => "<",
            Comparison::Greater => ">",
        }
    }

    pub fn unit_type(self) -> &'static str {
        match self {
            Comparison::LessOrEqual => "Unity.VisualScripting.GenericLessOrEqual",
            Comparison::GreaterOrEqual => "Unity.VisualScripting.GenericGreaterOrEqual",
            Comparison::Equal => "Unity.VisualScripting.GenericEqual",
            Comparison::NotEqual => "Unity.VisualScripting.GenericNotEqual",
            Comparison::Less => "Unity.VisualScripting.GenericLess",
            Comparison::Greater => "Unity.VisualScripting.GenericGreater",
        }
    }

    pub fn unit(self) -> NodeSpec {
        binary_operator(self.unit_type(), "System.Boolean")
    }
}

/// Arithmetic operators, in the order an expression is searched for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Arithmetic {
    const SEARCH_ORDER: [Arithmetic; 5] = [
        Arithmetic::Add,
        Arithmetic::Subtract,
        Arithmetic::Multiply,
        Arithmetic::Divide,
        Arithmetic::Modulo,
    ];

    /// The first operator, in search order, that occurs in `expression`. String
    /// literals never count as arithmetic.
    pub fn find_in(expression: &str) -> Option<Self> {
        if expression.starts_with('"') {
            return None;
        }
        Self::SEARCH_ORDER
            .into_iter()
            .find(|op| expression.contains(op.symbol()))
    }

    pub fn symbol(self) -> char {
        match self {
            Arithmetic::Add => '+',
            Arithmetic::Subtract => '-',
            Arithmetic::Multiply => '*',
            Arithmetic::Divide => '/',
            Arithmetic::Modulo => '%',
        }
    }

    pub fn unit_type(self) -> &'static str {
        match self {
            Arithmetic::Add => "Unity.VisualScripting.GenericAdd",
            Arithmetic::Subtract => "Unity.VisualScripting.GenericSubtract",
            Arithmetic::Multiply => "Unity.VisualScripting.GenericMultiply",
            Arithmetic::Divide => "Unity.VisualScripting.GenericDivide",
            Arithmetic::Modulo => "Unity.VisualScripting.GenericModulo",
        }
    }

    pub fn unit(self) -> NodeSpec {
        binary_operator(self.unit_type(), "System.Object")
    }
}

fn binary_operator(unit_type: &str, result_type: &str) -> NodeSpec {
    NodeSpec::new(
        unit_type,
        NodeCategory::Operator,
        vec![
            Port::value_input("a", "System.Object"),
            Port::value_input("b", "System.Object"),
            Port::value_output("result", result_type),
        ],
    )
}
