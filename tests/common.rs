//! Shared C# fixtures and graph inspection helpers.
#![allow(dead_code)]

use scriptgraph::prelude::*;

pub const FOR_UNIT: &str = "Unity.VisualScripting.For";
pub const IF_UNIT: &str = "Unity.VisualScripting.If";
pub const LITERAL_UNIT: &str = "Unity.VisualScripting.Literal";
pub const INVOKE_UNIT: &str = "Unity.VisualScripting.InvokeMember";
pub const SET_VARIABLE_UNIT: &str = "Unity.VisualScripting.SetVariable";

/// A typical behaviour: two lifecycle methods, a coroutine and a plain method.
///
/// - `Start`: a log call and a counting loop, with a leading comment.
/// - `Update`: a comparison and an engine call.
/// - `Blink`: a timed yield, no event.
/// - `TakeDamage`: an arithmetic assignment, no event.
pub const PLAYER_SCRIPT: &str = r#"using UnityEngine;
using System.Collections;

namespace Game.Actors
{
    public class PlayerController : MonoBehaviour
    {
        [SerializeField] private float speed = 5.0f;
        public int health = 100;
        private static readonly string tag = "Player";

        // Sets up the player
        void Start()
        {
            Debug.Log("hello");
            for (int i = 0; i < 5; i++)
            {
            }
        }

        void Update()
        {
            if (health > 3)
            {
            }
            transform.Translate(1, 0, 0);
        }

        IEnumerator Blink()
        {
            yield return new WaitForSeconds(2);
        }

        public void TakeDamage(int amount)
        {
            health = health - amount;
        }
    }
}
"#;

/// An `if` written before a `for`, to tell the scan orders apart.
pub const ORDER_SCRIPT: &str = r#"public class Ordering : MonoBehaviour
{
    void Update()
    {
        if (ready) { }
        for (int k = 1; k < 4; k++) { }
    }
}
"#;

/// Method-free source with no class either.
pub const EMPTY_SCRIPT: &str = "// nothing to see here\n";

/// Builds a graph with reproducible GUIDs.
pub fn deterministic_graph(code: &str, order: ScanOrder) -> Graph {
    Converter::builder()
        .scan_order(order)
        .guids(GuidStrategy::Sequential)
        .build()
        .build_graph(code, None)
        .expect("conversion never fails on text input")
}

pub fn unit_types(graph: &Graph) -> Vec<&str> {
    graph.nodes().iter().map(|n| n.unit_type.as_str()).collect()
}

pub fn count_of(graph: &Graph, unit_type: &str) -> usize {
    graph.nodes_of_type(unit_type).count()
}

/// `(source, source key, destination, destination key)` for every connection.
pub fn wiring(graph: &Graph) -> Vec<(usize, &str, usize, &str)> {
    graph
        .connections()
        .iter()
        .map(|c| {
            (
                c.source.index(),
                c.source_key.as_str(),
                c.destination.index(),
                c.destination_key.as_str(),
            )
        })
        .collect()
}
