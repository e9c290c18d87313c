//! Declaration recovery from C# source text.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use scriptgraph::source::{Access, Parameter, SourceModel};

#[cfg(test)]
mod extractor_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_level_declarations() {
        let model = SourceModel::extract(PLAYER_SCRIPT);

        assert_eq!(model.imports, vec!["UnityEngine", "System.Collections"]);
        assert_eq!(model.namespace.as_deref(), Some("Game.Actors"));
        assert_eq!(model.class_name.as_deref(), Some("PlayerController"));
        assert_eq!(model.base_class.as_deref(), Some("MonoBehaviour"));
    }

    #[test]
    fn test_fields_outside_method_bodies() {
        let model = SourceModel::extract(PLAYER_SCRIPT);
        let names: Vec<_> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["speed", "health", "tag"]);

        let speed = &model.fields[0];
        assert_eq!(speed.access, Access::Private);
        assert_eq!(speed.field_type, "float");
        assert_eq!(speed.initializer.as_deref(), Some("5.0f"));

        let tag = &model.fields[2];
        assert!(tag.is_static);
        assert!(tag.is_readonly);
        assert_eq!(tag.initializer.as_deref(), Some("\"Player\""));
    }

    #[test]
    fn test_methods_with_bodies_and_comments() {
        let model = SourceModel::extract(PLAYER_SCRIPT);
        let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Start", "Update", "Blink", "TakeDamage"]);

        let start = model.method("Start").unwrap();
        assert_eq!(start.comments, "Sets up the player");
        assert!(start.body.starts_with('{'));
        assert!(start.body.ends_with('}'));
        assert!(start.body.contains("Debug.Log(\"hello\")"));

        let update = model.method("Update").unwrap();
        assert_eq!(update.comments, "");

        let blink = model.method("Blink").unwrap();
        assert!(blink.is_coroutine);
        assert_eq!(blink.return_type, "IEnumerator");

        let damage = model.method("TakeDamage").unwrap();
        assert_eq!(damage.access, Access::Public);
        assert_eq!(
            damage.parameters,
            vec![Parameter {
                param_type: "int".to_string(),
                name: "amount".to_string(),
            }]
        );
    }

    #[test]
    fn test_statement_keywords_are_not_declarations() {
        let code = "class A {\n  int Get() {\n    if (a) { } else if (b) { }\n    return count;\n  }\n}";
        let model = SourceModel::extract(code);

        let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Get"]);
        assert!(model.fields.is_empty());
    }

    #[test]
    fn test_access_keywords_round_trip_through_display() {
        let code = "class A {\n  protected void Hit() { }\n  internal void Heal() { }\n  void Idle() { }\n}";
        let model = SourceModel::extract(code);
        let keywords: Vec<_> = model.methods.iter().map(|m| m.access.to_string()).collect();
        assert_eq!(keywords, vec!["protected", "internal", "private"]);
    }

    #[test]
    fn test_five_comment_lines_reach_the_method() {
        let code = "class A {\n    // a\n    // b\n    // c\n    // d\n    // e\n    void Start() { }\n}";
        let model = SourceModel::extract(code);
        assert_eq!(model.method("Start").unwrap().comments, "a b c d e");
    }

    #[test]
    fn test_unbalanced_body_is_empty() {
        let model = SourceModel::extract("class A { void Broken() { if (x) {");
        let broken = model.method("Broken").unwrap();
        assert_eq!(broken.body, "");
    }

    #[test]
    fn test_empty_source_yields_empty_model() {
        let model = SourceModel::extract(EMPTY_SCRIPT);
        assert_eq!(model, SourceModel::default());
    }
}
