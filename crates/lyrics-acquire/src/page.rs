use crate::normalize;
use scraper::{Html, Node, Selector};
use std::ops::Deref;

/// Extract the lyrics from a song page.
///
/// Lyrics live in one or more `div[data-lyrics-container="true"]` blocks;
/// their text is joined with newlines, `<br>` becomes a line break, and
/// anything flagged `data-exclude-from-selection` (inline headers, ads) is
/// skipped. Section headers are removed afterwards.
///
/// Returns `None` when the page has no lyrics container at all, which is
/// how instrumentals and unreleased songs are rendered.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let container_sel =
        Selector::parse(r#"div[data-lyrics-container="true"]"#).expect("valid selector");

    let blocks: Vec<String> = document
        .select(&container_sel)
        .map(|container| {
            let mut text = String::new();
            walk_node(container.id(), container.tree(), &mut text);
            text
        })
        .collect();

    if blocks.is_empty() {
        tracing::debug!("No lyrics container on page");
        return None;
    }

    let text = normalize::normalize_text(&blocks.join("\n"));
    Some(normalize::remove_section_headers(&text))
}

fn walk_node(node_id: ego_tree::NodeId, tree: &ego_tree::Tree<Node>, out: &mut String) {
    let node = tree.get(node_id).expect("valid node id");

    match node.value() {
        Node::Text(text) => out.push_str(text.deref()),
        Node::Element(elem) => {
            if elem.name() == "br" {
                out.push('\n');
                return;
            }
            if elem.attr("data-exclude-from-selection") == Some("true") {
                return;
            }
            for child in node.children() {
                walk_node(child.id(), tree, out);
            }
        }
        _ => {}
    }
}
