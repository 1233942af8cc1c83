use scraper::{Html, Node};
use tracing::debug;

/// Elements whose contents never reach the visible text.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "svg", "path"];

/// Strip an HTML document down to its visible text.
///
/// The document goes through the browser tree builder, so script and style
/// bodies are raw text and a stray `<` in prose stays literal. Each text node
/// carries the number of invisible elements above it; only nodes at zero are
/// kept. Character references are decoded by the parser.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!("Tolerated {} markup errors", document.errors.len());
    }

    let mut parts: Vec<String> = Vec::new();
    let mut stack = vec![(document.tree.root(), 0usize)];

    while let Some((node, hidden_depth)) = stack.pop() {
        let depth = match node.value() {
            Node::Element(el) if is_invisible(el.name()) => hidden_depth + 1,
            Node::Text(text) => {
                let text = text.trim();
                if hidden_depth == 0 && !text.is_empty() {
                    parts.push(text.to_string());
                }
                continue;
            }
            _ => hidden_depth,
        };
        // reversed so the next pop is the first child
        stack.extend(node.children().rev().map(|child| (child, depth)));
    }

    parts.join(" ")
}

fn is_invisible(name: &str) -> bool {
    INVISIBLE_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_in_document_order() {
        let html = "<html><head><title>Acme</title></head><body><h1>Hello</h1><p>World</p></body></html>";
        assert_eq!(extract_text(html), "Acme Hello World");
    }

    #[test]
    fn skips_script_and_style() {
        let html = "<p>Before</p><script>var x = 1;</script><style>.a { color: red; }</style><p>After</p>";
        assert_eq!(extract_text(html), "Before After");
    }

    #[test]
    fn inline_js_with_comparisons_does_not_swallow_the_page() {
        let html = "<script>for(var i=0;i<n;i++){}</script><p>Visible</p><p>Call 317-555-1234</p>";
        assert_eq!(extract_text(html), "Visible Call 317-555-1234");
    }

    #[test]
    fn close_tag_inside_script_string_stays_hidden() {
        let html = "<script>if(a&&b<c){x='</div>'}</script><h2>Roof Repair</h2><p>Visible after</p>";
        assert_eq!(extract_text(html), "Roof Repair Visible after");
    }

    #[test]
    fn style_with_child_combinator() {
        let html = "<style>ul > li{margin:0}a<b{}</style><p>Menu</p>";
        assert_eq!(extract_text(html), "Menu");
    }

    #[test]
    fn bare_less_than_in_prose_is_kept() {
        let html = "<p>Prices < $100 everyday</p><p>Tail</p>";
        assert_eq!(extract_text(html), "Prices < $100 everyday Tail");
    }

    #[test]
    fn skips_nested_svg_paths() {
        let html = "<div>Logo<svg><title>icon</title><path d=\"M0\"></path></svg>Text</div>";
        assert_eq!(extract_text(html), "Logo Text");
    }

    #[test]
    fn uppercase_tags_are_hidden_too() {
        let html = "<SCRIPT>track()</SCRIPT><NOSCRIPT>Enable JS</NOSCRIPT><p>Shown</p>";
        assert_eq!(extract_text(html), "Shown");
    }

    #[test]
    fn stray_close_tag_is_ignored() {
        let html = "</script><p>Still visible</p><script>hidden()</script><p>Tail</p>";
        assert_eq!(extract_text(html), "Still visible Tail");
    }

    #[test]
    fn unclosed_script_hides_only_what_follows_it() {
        let html = "<p>Kept</p><script>var late = 1;";
        assert_eq!(extract_text(html), "Kept");
    }

    #[test]
    fn trims_runs_and_joins_with_single_space() {
        let html = "<p>\n   Call us   </p>\n\n<p>today</p>";
        assert_eq!(extract_text(html), "Call us today");
    }

    #[test]
    fn decodes_common_entities() {
        let html = "<p>Smith &amp; Sons&nbsp;Roofing &#169; 2024</p>";
        assert_eq!(extract_text(html), "Smith & Sons\u{a0}Roofing © 2024");
    }

    #[test]
    fn unknown_entity_kept_verbatim() {
        let html = "<p>Fish &chips;</p>";
        assert_eq!(extract_text(html), "Fish &chips;");
    }

    #[test]
    fn void_elements_and_doctype() {
        let html = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><link rel=\"stylesheet\" href=\"a.css\"></head><body>Hi<br>there<img src=\"x.png\"></body></html>";
        assert_eq!(extract_text(html), "Hi there");
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn broken_markup_returns_partial_text() {
        let html = "<p>Kept</p><div class=\"unterminated";
        let text = extract_text(html);
        assert!(text.starts_with("Kept"));
    }
}
