use serde_json::json;

use super::RenderResult;
use crate::graph::{MindMap, NodeKind};

const BACKGROUND: &str = "#0f172a";
const CENTER_COLOR: &str = "#2563eb";
const LEAF_COLOR: &str = "#facc15";
const CENTER_SIZE: u32 = 35;
const LEAF_SIZE: u32 = 20;

const PAGE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>
  body { margin: 0; background: __BACKGROUND__; }
  #mindmap { width: 100%; height: 100vh; }
</style>
</head>
<body>
<div id="mindmap"></div>
<script>
  const nodes = new vis.DataSet(__NODES__);
  const edges = new vis.DataSet(__EDGES__);
  const container = document.getElementById("mindmap");
  const options = {
    nodes: { shape: "dot", font: { color: "white" } },
    physics: { enabled: true },
  };
  new vis.Network(container, { nodes, edges }, options);
</script>
</body>
</html>
"##;

/// Self-contained interactive page for a mind map.
///
/// Nodes and edges are embedded as JSON and drawn by vis-network loaded
/// from a CDN; the page needs no server once written to disk.
pub fn to_html(map: &MindMap) -> RenderResult<String> {
    let nodes: Vec<_> = map
        .nodes()
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            let (color, size) = match node.kind {
                NodeKind::Center => (CENTER_COLOR, CENTER_SIZE),
                NodeKind::Leaf => (LEAF_COLOR, LEAF_SIZE),
            };
            json!({ "id": idx, "label": node.label, "color": color, "size": size })
        })
        .collect();

    let edges: Vec<_> = map
        .edges()
        .into_iter()
        .map(|(from, to)| json!({ "from": from, "to": to }))
        .collect();

    // keep a "</script>" inside a label from closing the tag early
    let nodes_json = serde_json::to_string(&nodes)?.replace("</", "<\\/");
    let edges_json = serde_json::to_string(&edges)?;

    Ok(PAGE
        .replace("__TITLE__", &escape_html(&map.center().label))
        .replace("__BACKGROUND__", BACKGROUND)
        .replace("__NODES__", &nodes_json)
        .replace("__EDGES__", &edges_json))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MindMap {
        MindMap::new(
            "Machine Learning",
            &["data science".to_string(), "neural nets".to_string()],
        )
    }

    #[test]
    fn test_page_embeds_graph() {
        let page = to_html(&sample()).unwrap();

        assert!(page.contains("vis-network"));
        assert!(page.contains(r#""label":"Machine Learning""#));
        assert!(page.contains(r#""label":"data science""#));
        assert!(page.contains(r#""label":"neural nets""#));
        assert!(page.contains(r#"{"from":0,"to":1}"#));
        assert!(page.contains(r#"{"from":0,"to":2}"#));
    }

    #[test]
    fn test_visual_constants() {
        let page = to_html(&sample()).unwrap();

        assert!(page.contains("#0f172a"));
        assert!(page.contains(r##""color":"#2563eb""##));
        assert!(page.contains(r##""color":"#facc15""##));
        assert!(page.contains(r#""size":35"#));
        assert!(page.contains(r#""size":20"#));
    }

    #[test]
    fn test_title_is_center_label() {
        let page = to_html(&sample()).unwrap();

        assert!(page.contains("<title>Machine Learning</title>"));
    }

    #[test]
    fn test_script_breakout_escaped() {
        let map = MindMap::new("</script><b>x</b>", &[]);
        let page = to_html(&map).unwrap();

        assert!(!page.contains(r#""label":"</script>"#));
        assert!(page.contains(r#"<\/script>"#));
        assert!(page.contains("<title>&lt;/script&gt;&lt;b&gt;x&lt;/b&gt;</title>"));
    }
}
