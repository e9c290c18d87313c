use std::fmt;

/// Statement kinds the translator recognizes, in their default scan precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    ForLoop,
    WhileLoop,
    ForeachLoop,
    Switch,
    LogCall,
    Conditional,
    Assignment,
    YieldSuspend,
    MemberCall,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::ForLoop,
        Category::WhileLoop,
        Category::ForeachLoop,
        Category::Switch,
        Category::LogCall,
        Category::Conditional,
        Category::Assignment,
        Category::YieldSuspend,
        Category::MemberCall,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::ForLoop => "for",
            Category::WhileLoop => "while",
            Category::ForeachLoop => "foreach",
            Category::Switch => "switch",
            Category::LogCall => "log",
            Category::Conditional => "if",
            Category::Assignment => "assignment",
            Category::YieldSuspend => "yield",
            Category::MemberCall => "call",
        };
        write!(f, "{}", name)
    }
}

/// A recognized statement, carrying only the text captured by its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    ForLoop {
        variable: String,
        start: String,
        end: String,
    },
    WhileLoop {
        condition: String,
    },
    ForeachLoop {
        item_type: Option<String>,
        item: String,
        collection: String,
    },
    Switch {
        selector: String,
        case_count: usize,
    },
    LogCall {
        argument: String,
    },
    Conditional {
        condition: String,
    },
    Assignment {
        target: String,
        value: String,
    },
    YieldSuspend {
        instruction: String,
        arguments: Option<String>,
    },
    MemberCall {
        receiver: String,
        method: String,
        arg_count: usize,
    },
}

impl Construct {
    pub fn category(&self) -> Category {
        match self {
            Construct::ForLoop { .. } => Category::ForLoop,
            Construct::WhileLoop { .. } => Category::WhileLoop,
            Construct::ForeachLoop { .. } => Category::ForeachLoop,
            Construct::Switch { .. } => Category::Switch,
            Construct::LogCall { .. } => Category::LogCall,
            Construct::Conditional { .. } => Category::Conditional,
            Construct::Assignment { .. } => Category::Assignment,
            Construct::YieldSuspend { .. } => Category::YieldSuspend,
            Construct::MemberCall { .. } => Category::MemberCall,
        }
    }
}

/// A construct together with the byte offset of its match in the method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub offset: usize,
    pub construct: Construct,
}
