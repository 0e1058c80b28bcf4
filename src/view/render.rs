//! View renderers
//!
//! Two ways to draw a view tree:
//! - `render_html`: escaped markup, for browsers and snapshot files
//! - `render_text`: a compact plain-text layout for terminals
//!
//! Renderers ignore event bindings; wiring input back is the host's job.

use super::{Element, Node};

/// Elements that never have children or a closing tag
const VOID_TAGS: [&str; 3] = ["input", "br", "hr"];

/// Render a view tree as HTML markup
pub fn render_html<M>(node: &Node<M>) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

fn write_html<M>(node: &Node<M>, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_html(text)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(el.tag());
            for (name, value) in el.attributes() {
                out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if VOID_TAGS.contains(&el.tag()) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in el.children() {
                write_html(child, out);
            }
            out.push_str(&format!("</{}>", el.tag()));
        }
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a view tree as plain text
///
/// Lists become numbered lines (the current entry marked with `>`), tables
/// become aligned `label  value` rows and forms become `label: [value]` lines.
pub fn render_text<M>(node: &Node<M>) -> String {
    let mut out = String::new();
    write_text(node, &mut out);
    out
}

fn write_text<M>(node: &Node<M>, out: &mut String) {
    match node {
        Node::Text(text) => {
            if !text.is_empty() {
                out.push_str(text);
                out.push('\n');
            }
        }
        Node::Element(el) => match el.tag() {
            "ol" | "ul" => write_list(el, out),
            "table" => write_table(el, out),
            "form" => write_form(el, out),
            "h1" | "h2" | "h3" => {
                let heading = el.text_content();
                out.push_str(&heading);
                out.push('\n');
                out.push_str(&"-".repeat(heading.chars().count()));
                out.push('\n');
            }
            "p" => {
                out.push_str(&el.text_content());
                out.push('\n');
            }
            _ => {
                for child in el.children() {
                    write_text(child, out);
                }
            }
        },
    }
}

fn write_list<M>(list: &Element<M>, out: &mut String) {
    for (idx, item) in list.child_elements().enumerate() {
        let marker = if item.attribute("aria-current") == Some("true") {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("{} [{}] {}\n", marker, idx, item.text_content()));
    }
    out.push('\n');
}

fn write_table<M>(table: &Element<M>, out: &mut String) {
    let rows: Vec<(String, String)> = table
        .find_all("tr")
        .into_iter()
        .map(|row| {
            let label = row.find_first("th").map(|th| th.text_content()).unwrap_or_default();
            let value = row.find_first("td").map(|td| td.text_content()).unwrap_or_default();
            (label, value)
        })
        .collect();

    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    for (label, value) in rows {
        out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
    }
}

fn write_form<M>(form: &Element<M>, out: &mut String) {
    for control in form.find_all("input") {
        match control.attribute("type") {
            Some("submit") => {
                out.push_str(&format!("[ {} ]\n", control.value().unwrap_or("Submit")));
            }
            _ => {
                let id = control.attribute("id").unwrap_or_default();
                let label = form
                    .label_for(id)
                    .map(|l| l.text_content())
                    .unwrap_or_else(|| id.to_string());
                out.push_str(&format!(
                    "{}: [{}]\n",
                    label,
                    control.value().unwrap_or_default()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html_escapes_text_and_attributes() {
        let node: Node<()> = Element::<()>::new("p")
            .attr("title", "\"quoted\"")
            .text("Cut & <Blow-dry>")
            .into();
        assert_eq!(
            render_html(&node),
            "<p title=\"&quot;quoted&quot;\">Cut &amp; &lt;Blow-dry&gt;</p>"
        );
    }

    #[test]
    fn test_render_html_void_elements() {
        let node: Node<()> = Element::<()>::new("div")
            .child(Element::new("input").attr("type", "text").id("firstName"))
            .into();
        assert_eq!(
            render_html(&node),
            "<div><input type=\"text\" id=\"firstName\" /></div>"
        );
    }

    #[test]
    fn test_render_text_list_marks_current_entry() {
        let node: Node<()> = Element::<()>::new("ol")
            .child(Element::new("li").text("12:00"))
            .child(Element::new("li").attr("aria-current", "true").text("13:00"))
            .into();
        assert_eq!(render_text(&node), "  [0] 12:00\n> [1] 13:00\n\n");
    }

    #[test]
    fn test_render_text_table_aligns_labels() {
        let node: Node<()> = Element::<()>::new("table")
            .child(
                Element::new("tbody")
                    .child(
                        Element::new("tr")
                            .child(Element::new("th").text("Customer"))
                            .child(Element::new("td").text("Ashley")),
                    )
                    .child(
                        Element::new("tr")
                            .child(Element::new("th").text("Notes"))
                            .child(Element::new("td")),
                    ),
            )
            .into();
        assert_eq!(render_text(&node), "Customer  Ashley\nNotes     \n");
    }

    #[test]
    fn test_render_text_form_pairs_labels_with_inputs() {
        let node: Node<()> = Element::<()>::new("form")
            .child(Element::new("label").attr("for", "firstName").text("First name"))
            .child(
                Element::new("input")
                    .attr("type", "text")
                    .id("firstName")
                    .attr("value", "Ashley"),
            )
            .child(Element::new("input").attr("type", "submit").attr("value", "Add"))
            .into();
        assert_eq!(render_text(&node), "First name: [Ashley]\n[ Add ]\n");
    }
}
