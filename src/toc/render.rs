use crate::toc::types::{OutlineNode, TableOfContents};

/// Render a table of contents as nested list markup.
///
/// Links are same-page anchors (`#id`) for relative TOCs; an absolute
/// TOC prefixes `base_url` when one is given, so embedded content can
/// link back into its enclosing page.
pub fn render_html(toc: &TableOfContents, base_url: Option<&str>) -> String {
    let outline = toc.to_outline();
    if outline.is_empty() {
        return String::new();
    }

    let prefix = if toc.is_relative() {
        ""
    } else {
        base_url.unwrap_or("")
    };

    let mut html = String::from("<nav class=\"table-of-contents\" role=\"navigation\">\n<ul>\n");
    for node in &outline {
        append_node(&mut html, node, prefix);
    }
    html.push_str("</ul>\n</nav>");
    html
}

fn append_node(html: &mut String, node: &OutlineNode, prefix: &str) {
    html.push_str(&format!(
        "<li><a href=\"{}#{}\">{}</a>",
        prefix,
        node.id,
        html_escape::encode_text(&node.label)
    ));

    if !node.children.is_empty() {
        html.push_str("\n<ul>\n");
        for child in &node.children {
            append_node(html, child, prefix);
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</li>\n");
}
