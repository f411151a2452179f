// src/util/markup.rs
//
// Minimal scanner for the markup produced by `CardRenderer`. It only reads
// opening tags with double-quoted attributes, which is all the renderer emits.
use crate::application::Element;
use crate::constants::{CARD_ID_ATTRIBUTE, CARD_MARKER};
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([a-zA-Z][a-zA-Z0-9-]*)((?:\s+[^\s"'=<>/]+(?:="[^"]*")?)*)\s*/?>"#).unwrap()
});

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^\s"'=<>/]+)(?:="([^"]*)")?"#).unwrap());

/// Every opening tag in document order, with decoded attribute values.
///
/// # Examples
///
/// ```
/// use memo_gallery::util::markup::parse_elements;
///
/// let elements = parse_elements(r##"<a href="#" class="button js-add-btn">Add</a>"##);
/// assert_eq!(elements.len(), 1);
/// assert!(elements[0].has_class("js-add-btn"));
/// ```
pub fn parse_elements(html: &str) -> Vec<Element> {
    scan(html).into_iter().map(|(element, _)| element).collect()
}

/// First element carrying the `marker` class.
pub fn find_element(html: &str, marker: &str) -> Option<Element> {
    parse_elements(html)
        .into_iter()
        .find(|element| element.has_class(marker))
}

/// Value of the `value` attribute of the input carrying `marker`.
pub fn input_value(html: &str, marker: &str) -> Option<String> {
    find_element(html, marker).map(|input| input.attribute("value").unwrap_or_default().to_string())
}

/// Decoded text between the opening `<textarea>` carrying `marker` and its
/// closing tag.
pub fn textarea_content(html: &str, marker: &str) -> Option<String> {
    let (_, end) = scan(html)
        .into_iter()
        .find(|(element, _)| element.tag == "textarea" && element.has_class(marker))?;

    let rest = &html[end..];
    let close = rest.find("</textarea>")?;
    Some(decode_html_entities(&rest[..close]).into_owned())
}

/// Id of the card rooted in `fragment`.
pub fn card_id(fragment: &str) -> Option<i64> {
    find_element(fragment, CARD_MARKER)?
        .attribute(CARD_ID_ATTRIBUTE)?
        .trim()
        .parse()
        .ok()
}

fn scan(html: &str) -> Vec<(Element, usize)> {
    OPEN_TAG
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let tag = caps.get(1)?.as_str().to_ascii_lowercase();
            let attributes = caps.get(2).map_or("", |m| m.as_str());
            Some((parse_tag(tag, attributes), whole.end()))
        })
        .collect()
}

fn parse_tag(tag: String, attributes: &str) -> Element {
    let mut element = Element::new(tag);

    for caps in ATTRIBUTE.captures_iter(attributes) {
        let Some(name) = caps.get(1) else { continue };
        let value = caps
            .get(2)
            .map(|m| decode_html_entities(m.as_str()).into_owned())
            .unwrap_or_default();

        if name.as_str() == "class" {
            for class in value.split_whitespace() {
                element = element.with_class(class);
            }
        } else {
            element = element.with_attribute(name.as_str(), value);
        }
    }

    element
}
