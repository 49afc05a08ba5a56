//! View Tree Nodes
//!
//! Display elements are built as explicit node values rather than
//! interpolated strings, so pages can be composed and compared in tests
//! before anything touches the terminal.

/// A node in the display tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Heading with a level (1 = page title)
    Heading { level: u8, text: String },
    /// Plain paragraph text
    Text(String),
    /// Labelled value, e.g. "Location: Pier 39"
    Field { label: String, value: String },
    /// Ordered list of child nodes
    List(Vec<Node>),
    /// Titled grouping of child nodes
    Section { title: String, children: Vec<Node> },
}

impl Node {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn section(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Section {
            title: title.into(),
            children,
        }
    }
}
