//! Terminal Text Rendering
//!
//! Walks a display tree into plain text for the terminal.

use crate::view::node::Node;

/// Render a display tree to terminal text
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    let pad = "  ".repeat(indent);

    match node {
        Node::Heading { level, text } => {
            if *level == 1 {
                out.push_str(&format!("{}=== {} ===\n\n", pad, text));
            } else {
                out.push_str(&format!("{}{}\n", pad, text));
            }
        }
        Node::Text(text) => {
            if !text.is_empty() {
                out.push_str(&format!("{}{}\n", pad, text));
            }
        }
        Node::Field { label, value } => {
            out.push_str(&format!("{}{}: {}\n", pad, label, value));
        }
        Node::List(items) => {
            for item in items {
                write_node(out, item, indent);
            }
        }
        Node::Section { title, children } => {
            if !title.is_empty() {
                out.push_str(&format!("{}## {}\n", pad, title));
            }
            for child in children {
                write_node(out, child, indent + usize::from(!title.is_empty()));
            }
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fields_and_headings() {
        let tree = Node::section(
            "Event Details",
            vec![
                Node::heading(3, "Launch"),
                Node::field("Location", "Pier 39"),
            ],
        );

        let text = render(&tree);
        assert!(text.contains("## Event Details"));
        assert!(text.contains("Launch"));
        assert!(text.contains("Location: Pier 39"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = Node::List(vec![Node::text("[1] Launch"), Node::text("[2] Retro")]);
        assert_eq!(render(&tree), render(&tree));
    }

    #[test]
    fn test_untitled_section_adds_no_heading() {
        let tree = Node::Section {
            title: String::new(),
            children: vec![Node::text("hello")],
        };
        let text = render(&tree);
        assert!(!text.contains("##"));
        assert!(text.contains("hello"));
    }
}
