use crate::graph::{MindMap, NodeKind};

/// Graphviz source for a mind map, one node statement per graph node.
///
/// Rasterizing the output (dot, neato) is left to the caller.
#[must_use]
pub fn to_dot(map: &MindMap) -> String {
    let mut out = String::from("graph mindmap {\n    overlap = false;\n");

    for (idx, node) in map.nodes().iter().enumerate() {
        let attrs = match node.kind {
            NodeKind::Center => {
                ", shape = box, style = filled, fillcolor = \"#2563eb\", fontcolor = white"
            }
            NodeKind::Leaf => ", style = filled, fillcolor = \"#facc15\"",
        };
        out.push_str(&format!(
            "    n{idx} [label = \"{}\"{attrs}];\n",
            escape(&node.label)
        ));
    }

    for (a, b) in map.edges() {
        out.push_str(&format!("    n{a} -- n{b};\n"));
    }

    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
