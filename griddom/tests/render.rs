use griddom::{inner_html, to_html, Cursor, Display, Element, Style, TextAlign};

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_empty_element() {
    assert_eq!(to_html(&Element::box_()), "<div></div>");
}

#[test]
fn test_text_is_escaped() {
    let el = Element::cell().content_text("<b>x</b> & y");
    assert_eq!(to_html(&el), "<td>&lt;b&gt;x&lt;/b&gt; &amp; y</td>");
}

#[test]
fn test_attribute_order_is_stable() {
    let el = Element::button("⋮")
        .data("record-id", "7")
        .attr("type", "button")
        .class("action-dots")
        .id("users-row-0-actions");

    assert_eq!(
        to_html(&el),
        r#"<button id="users-row-0-actions" class="action-dots" type="button" data-record-id="7">⋮</button>"#
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    let el = Element::box_().data("sort", r#"na"me"#);
    assert_eq!(to_html(&el), r#"<div data-sort="na&quot;me"></div>"#);
}

#[test]
fn test_void_element_has_no_closing_tag() {
    let el = Element::text_input("").class("table-search").placeholder("Search...");
    assert_eq!(
        to_html(&el),
        r#"<input class="table-search" placeholder="Search..." value="">"#
    );
}

#[test]
fn test_nested_children() {
    let el = Element::row()
        .child(Element::cell().content_text("a"))
        .child(Element::cell().content_text("b"));
    assert_eq!(to_html(&el), "<tr><td>a</td><td>b</td></tr>");
    assert_eq!(inner_html(&el), "<td>a</td><td>b</td>");
}

#[test]
fn test_duplicate_class_is_ignored() {
    let el = Element::button("1").class("active").class("active");
    assert_eq!(el.classes, vec!["active".to_string()]);
}

#[test]
fn test_class_if() {
    assert!(Element::button("1").class_if("active", true).has_class("active"));
    assert!(!Element::button("2").class_if("active", false).has_class("active"));
}

// ============================================================================
// Style
// ============================================================================

#[test]
fn test_style_serialization() {
    let style = Style::new()
        .cursor(Cursor::Pointer)
        .width("120px")
        .text_align(TextAlign::Center);
    assert_eq!(style.to_css(), "width:120px;text-align:center;cursor:pointer");
}

#[test]
fn test_style_position_allows_negative_offsets() {
    let style = Style::new().display(Display::Block).top(35).left(-100);
    assert_eq!(style.to_css(), "display:block;top:35px;left:-100px");
}

#[test]
fn test_style_opacity() {
    assert_eq!(Style::new().opacity(0.3).to_css(), "opacity:0.3");
    assert_eq!(Style::new().opacity(1.0).to_css(), "opacity:1");
    assert_eq!(Style::new().opacity(4.0).to_css(), "opacity:1");
}

#[test]
fn test_empty_style_emits_no_attribute() {
    let el = Element::span().style(Style::new());
    assert!(el.style.is_empty());
    assert_eq!(to_html(&el), "<span></span>");
}

#[test]
fn test_rendering_is_deterministic() {
    let build = || {
        Element::table()
            .child(Element::row().child(Element::header_cell().data("sort", "name")))
            .style(Style::new().width("100%"))
    };
    assert_eq!(to_html(&build()), to_html(&build()));
}
