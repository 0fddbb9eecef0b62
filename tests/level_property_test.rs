//! Property-based tests for the level protocol
//!
//! Uses proptest to generate random well-nested command streams and verify
//! the rendered output is balanced.

use proptest::prelude::*;
use side_export::{Command, Exporter, Test};

/// A well-nested tree of commands
#[derive(Debug, Clone)]
enum Node {
    Click,
    If { branches: Vec<Vec<Node>>, has_else: bool },
    While(Vec<Node>),
    Do(Vec<Node>),
    Times(Vec<Node>),
    ForEach(Vec<Node>),
}

fn any_node() -> impl Strategy<Value = Node> {
    let leaf = Just(Node::Click);
    leaf.prop_recursive(4, 32, 4, |inner| {
        let body = prop::collection::vec(inner, 0..4);
        prop_oneof![
            (prop::collection::vec(body.clone(), 1..4), any::<bool>())
                .prop_map(|(branches, has_else)| Node::If { branches, has_else }),
            body.clone().prop_map(Node::While),
            body.clone().prop_map(Node::Do),
            body.clone().prop_map(Node::Times),
            body.prop_map(Node::ForEach),
        ]
    })
}

fn flatten(node: &Node, out: &mut Vec<Command>) {
    let body = |nodes: &[Node], out: &mut Vec<Command>| {
        for n in nodes {
            flatten(n, out);
        }
    };
    match node {
        Node::Click => out.push(Command::new("click").with_target("id=a")),
        Node::If { branches, has_else } => {
            for (i, branch) in branches.iter().enumerate() {
                let name = if i == 0 { "if" } else { "elseIf" };
                out.push(Command::new(name).with_target("${x} > 0"));
                body(branch, out);
            }
            if *has_else {
                out.push(Command::new("else"));
                body(&branches[0], out);
            }
            out.push(Command::new("end"));
        }
        Node::While(nodes) => {
            out.push(Command::new("while").with_target("true"));
            body(nodes, out);
            out.push(Command::new("end"));
        }
        Node::Do(nodes) => {
            out.push(Command::new("do"));
            body(nodes, out);
            out.push(Command::new("repeatIf").with_target("false"));
        }
        Node::Times(nodes) => {
            out.push(Command::new("times").with_target("2"));
            body(nodes, out);
            out.push(Command::new("end"));
        }
        Node::ForEach(nodes) => {
            out.push(Command::new("forEach").with_target("items").with_value("item"));
            body(nodes, out);
            out.push(Command::new("end"));
        }
    }
}

fn stream(nodes: &[Node]) -> Test {
    let mut commands = Vec::new();
    for node in nodes {
        flatten(node, &mut commands);
    }
    Test {
        id: "p".into(),
        name: "property".into(),
        commands,
    }
}

proptest! {
    #[test]
    fn test_balanced_streams_render(nodes in prop::collection::vec(any_node(), 0..6)) {
        let lines = Exporter::default().render_test(&stream(&nodes));
        prop_assert!(lines.is_ok(), "{:?}", lines.err());
    }

    #[test]
    fn test_braces_match(nodes in prop::collection::vec(any_node(), 0..6)) {
        let lines = Exporter::default().render_test(&stream(&nodes)).unwrap();
        let opens: usize = lines.iter().map(|l| l.statement.matches('{').count()).sum();
        let closes: usize = lines.iter().map(|l| l.statement.matches('}').count()).sum();
        prop_assert_eq!(opens, closes);
    }

    #[test]
    fn test_first_and_last_line_at_base(nodes in prop::collection::vec(any_node(), 1..6)) {
        let lines = Exporter::default().render_test(&stream(&nodes)).unwrap();
        prop_assert_eq!(lines.first().map(|l| l.level), Some(0));
        prop_assert_eq!(lines.last().map(|l| l.level), Some(0));
    }

    #[test]
    fn test_level_steps_by_at_most_one(nodes in prop::collection::vec(any_node(), 0..6)) {
        let lines = Exporter::default().render_test(&stream(&nodes)).unwrap();
        for pair in lines.windows(2) {
            prop_assert!(pair[1].level <= pair[0].level + 1);
        }
    }
}
