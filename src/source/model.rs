use std::fmt;

/// Declared accessibility of a member. Members without a modifier are private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    Public,
    #[default]
    Private,
    Protected,
    Internal,
}

impl Access {
    pub(super) fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("public") => Access::Public,
            Some("protected") => Access::Protected,
            Some("internal") => Access::Internal,
            _ => Access::Private,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Internal => "internal",
        };
        write!(f, "{}", keyword)
    }
}

/// Inheritance modifier of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodModifier {
    Virtual,
    Override,
    Abstract,
}

impl MethodModifier {
    pub(super) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "virtual" => Some(MethodModifier::Virtual),
            "override" => Some(MethodModifier::Override),
            "abstract" => Some(MethodModifier::Abstract),
            _ => None,
        }
    }
}

/// A class-level field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub access: Access,
    pub is_static: bool,
    pub is_readonly: bool,
    pub field_type: String,
    pub name: String,
    pub initializer: Option<String>,
}

/// One `(type, name)` entry of a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub param_type: String,
    pub name: String,
}

/// A method declaration with its raw body text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDecl {
    pub access: Access,
    pub is_static: bool,
    pub modifier: Option<MethodModifier>,
    pub is_async: bool,
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// The body from its opening to its closing brace, inclusive. Empty when the
    /// braces never balance.
    pub body: String,
    pub is_coroutine: bool,
    /// Leading `//` or block comment lines, joined with single spaces.
    pub comments: String,
}
