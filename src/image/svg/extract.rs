//! Variant extraction from vendor symbol templates.
//!
//! A template interleaves notes, guides and every weight/scale variant of a
//! symbol. Extraction keeps the root element (all attributes), the shared
//! `<style>`/`<defs>` nodes and the `Symbols` group reduced to one variant:
//!
//! ```text
//! <svg …>                      <svg …>
//!   <style/>                     <style/>
//!   <g id="Notes"/>      ──►     <g id="Symbols">
//!   <g id="Guides"/>               <g id="Regular-M"/>
//!   <g id="Symbols">             </g>
//!     <g id="Ultralight-S"/>   </svg>
//!     <g id="Regular-M"/>
//!     …
//! ```

use std::io::Cursor;

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesStart, Event},
};

use crate::error::{IconError, IconResult};

/// `id` of the group holding the selectable variants.
pub const SYMBOLS_GROUP: &str = "Symbols";

/// Root children copied forward verbatim.
const SHARED_ELEMENTS: &[&[u8]] = &[b"style", b"defs"];

/// Standalone single-variant document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    data: Vec<u8>,
    variant: String,
}

impl CleanedDocument {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Id of the selected variant (e.g. `Regular-M`).
    pub fn variant(&self) -> &str {
        &self.variant
    }
}

// ============================================================================
// Owned element tree
// ============================================================================

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    /// Text, CDATA and entity references, kept as parsed.
    Content(Event<'static>),
}

#[derive(Debug, Clone)]
struct Element {
    start: BytesStart<'static>,
    children: Vec<Node>,
}

impl Node {
    fn is_blank_text(&self) -> bool {
        matches!(self, Node::Content(Event::Text(text)) if text.iter().all(u8::is_ascii_whitespace))
    }

    fn is_entity(&self) -> bool {
        matches!(self, Node::Content(Event::GeneralRef(_)))
    }
}

impl Element {
    /// Drop whitespace-only text between children.
    ///
    /// The reader splits text at entity references, so blanks next to an
    /// entity belong to a run like `Hello &amp; World` and stay.
    fn drop_blank_text(&mut self) {
        let keep: Vec<bool> = (0..self.children.len())
            .map(|i| {
                let near_entity = |j: Option<usize>| {
                    j.and_then(|j| self.children.get(j))
                        .is_some_and(Node::is_entity)
                };
                !self.children[i].is_blank_text()
                    || near_entity(i.checked_sub(1))
                    || near_entity(Some(i + 1))
            })
            .collect();
        let mut keep = keep.into_iter();
        self.children.retain(|_| keep.next().unwrap_or(true));
    }

    fn new(start: BytesStart<'static>) -> Self {
        Self {
            start,
            children: Vec::new(),
        }
    }

    fn local_name(&self) -> &[u8] {
        self.start.local_name().into_inner()
    }

    fn has_id(&self, id: &str) -> bool {
        self.start
            .attributes()
            .flatten()
            .any(|attr| attr.key.as_ref() == b"id" && attr.value.as_ref() == id.as_bytes())
    }

    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Content(_) => None,
        })
    }

    /// Same tag and attributes, new children.
    fn with_children(&self, children: Vec<Node>) -> Self {
        Self {
            start: self.start.clone(),
            children,
        }
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Reduce a vendor template to the first variant of `variants` present in
/// its `Symbols` group.
pub fn extract<S: AsRef<str>>(source: &[u8], variants: &[S]) -> IconResult<CleanedDocument> {
    let root = parse_tree(source)?;

    let symbols = root
        .child_elements()
        .find(|e| e.local_name() == b"g" && e.has_id(SYMBOLS_GROUP))
        .ok_or_else(|| {
            IconError::VariantNotFound(format!("no `{SYMBOLS_GROUP}` group under the root element"))
        })?;

    let wanted: Vec<&str> = variants.iter().map(|v| v.as_ref()).collect();
    let (variant_id, variant) = wanted
        .iter()
        .find_map(|&id| symbols.child_elements().find(|e| e.has_id(id)).map(|e| (id, e)))
        .ok_or_else(|| {
            IconError::VariantNotFound(format!(
                "none of [{}] in `{SYMBOLS_GROUP}` group",
                wanted.join(", ")
            ))
        })?;

    let mut children: Vec<Node> = root
        .child_elements()
        .filter(|e| SHARED_ELEMENTS.iter().any(|name| *name == e.local_name()))
        .cloned()
        .map(Node::Element)
        .collect();
    children.push(Node::Element(
        symbols.with_children(vec![Node::Element(variant.clone())]),
    ));

    let cleaned = root.with_children(children);
    Ok(CleanedDocument {
        data: serialize(&cleaned)?,
        variant: variant_id.to_string(),
    })
}

/// Parse into an owned tree, dropping comments, processing instructions,
/// the doctype and whitespace-only text.
fn parse_tree(source: &[u8]) -> IconResult<Element> {
    let mut reader = Reader::from_reader(source);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            IconError::DocumentMalformed(format!(
                "XML parse error at position {}: {e}",
                reader.error_position()
            ))
        })?;

        match event {
            Event::Start(start) => stack.push(Element::new(start.into_owned())),
            Event::Empty(start) => attach(&mut stack, &mut root, Element::new(start.into_owned())),
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    IconError::DocumentMalformed("unexpected closing tag".into())
                })?;
                attach(&mut stack, &mut root, element);
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            content => {
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Content(content.into_owned()));
                }
            }
        }
    }

    if !stack.is_empty() {
        return Err(IconError::DocumentMalformed(
            "document ends inside an open element".into(),
        ));
    }
    root.ok_or_else(|| IconError::DocumentMalformed("no root element".into()))
}

#[inline]
fn attach(stack: &mut [Element], root: &mut Option<Element>, mut element: Element) {
    element.drop_blank_text();
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn serialize(root: &Element) -> IconResult<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(encoding_failed)?;
    write_element(&mut writer, root)?;
    Ok(writer.into_inner().into_inner())
}

fn encoding_failed(e: impl std::fmt::Display) -> IconError {
    IconError::EncodingFailed(e.to_string())
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> IconResult<()> {
    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(element.start.borrow()))
            .map_err(encoding_failed);
    }

    writer
        .write_event(Event::Start(element.start.borrow()))
        .map_err(encoding_failed)?;
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Content(event) => writer.write_event(event.borrow()).map_err(encoding_failed)?,
        }
    }
    writer
        .write_event(Event::End(element.start.to_end()))
        .map_err(encoding_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{square_variant, vendor_document};

    const PREFERENCE: &[&str] = &["Regular-M", "Regular-S", "Regular-L"];

    fn cleaned_text(doc: &CleanedDocument) -> String {
        String::from_utf8(doc.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_extract_keeps_only_selected_variant() {
        let source = vendor_document(&[
            square_variant("Ultralight-S", 100.0, 100.0, 40.0),
            square_variant("Regular-S", 300.0, 100.0, 40.0),
            square_variant("Regular-M", 500.0, 100.0, 50.0),
            square_variant("Black-L", 700.0, 100.0, 60.0),
        ]);

        let doc = extract(source.as_bytes(), PREFERENCE).unwrap();
        assert_eq!(doc.variant(), "Regular-M");

        let text = cleaned_text(&doc);
        assert_eq!(text.matches(r#"id="Regular-M""#).count(), 1);
        assert!(!text.contains("Ultralight-S"));
        assert!(!text.contains("Regular-S"));
        assert!(!text.contains("Black-L"));
        assert!(text.contains(r#"<g id="Symbols">"#));
    }

    #[test]
    fn test_extract_drops_guides_keeps_shared_nodes() {
        let source = vendor_document(&[square_variant("Regular-M", 500.0, 100.0, 50.0)]);
        let text = cleaned_text(&extract(source.as_bytes(), PREFERENCE).unwrap());

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(text.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(text.contains(r#"width="3300""#));
        assert!(text.contains("<style>"));
        assert!(text.contains("<defs>"));
        assert!(!text.contains("Notes"));
        assert!(!text.contains("Guides"));
        assert!(!text.contains("<!--"));
        assert!(!text.contains("DOCTYPE"));
        assert!(!text.contains("\n "));
    }

    #[test]
    fn test_extract_preference_order() {
        let source = vendor_document(&[
            square_variant("Regular-L", 100.0, 100.0, 40.0),
            square_variant("Regular-S", 300.0, 100.0, 40.0),
        ]);
        let doc = extract(source.as_bytes(), PREFERENCE).unwrap();
        assert_eq!(doc.variant(), "Regular-S");
        assert!(!cleaned_text(&doc).contains("Regular-L"));
    }

    #[test]
    fn test_extract_is_stable_on_cleaned_output() {
        let source = vendor_document(&[
            square_variant("Regular-S", 300.0, 100.0, 40.0),
            square_variant("Regular-M", 500.0, 100.0, 50.0),
        ]);
        let first = extract(source.as_bytes(), PREFERENCE).unwrap();
        let second = extract(first.as_bytes(), PREFERENCE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_symbols_group() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="Guides"/></svg>"#;
        let err = extract(source.as_bytes(), PREFERENCE).unwrap_err();
        assert!(matches!(err, IconError::VariantNotFound(ref m) if m.contains("Symbols")));
    }

    #[test]
    fn test_missing_variant() {
        let source = vendor_document(&[square_variant("Bold-M", 100.0, 100.0, 40.0)]);
        let err = extract(source.as_bytes(), PREFERENCE).unwrap_err();
        assert!(matches!(err, IconError::VariantNotFound(ref m) if m.contains("Regular-M")));
    }

    #[test]
    fn test_nested_symbols_group_is_not_matched() {
        let source = r#"<svg><g id="Wrapper"><g id="Symbols"><g id="Regular-M"/></g></g></svg>"#;
        let err = extract(source.as_bytes(), PREFERENCE).unwrap_err();
        assert!(matches!(err, IconError::VariantNotFound(_)));
    }

    #[test]
    fn test_malformed_documents() {
        for source in ["", "   ", "<svg><g></svg>", "<svg>", "</svg>"] {
            let err = extract(source.as_bytes(), PREFERENCE).unwrap_err();
            assert!(
                matches!(err, IconError::DocumentMalformed(_)),
                "{source:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_entities_and_style_text_survive() {
        let source = r#"<svg><style>.a{fill:#000}</style><g id="Symbols"><g id="Regular-M"><text>Hello &amp; World</text></g></g></svg>"#;
        let text = cleaned_text(&extract(source.as_bytes(), PREFERENCE).unwrap());
        assert!(text.contains("<style>.a{fill:#000}</style>"));
        assert!(text.contains("<text>Hello &amp; World</text>"), "{text}");
    }

    #[test]
    fn test_text_whitespace_is_kept_verbatim() {
        let source = "<svg>\n  <style>\n  .a { fill: #000 }\n</style>\n  <g id=\"Symbols\">\n    <g id=\"Regular-M\"><text> &lt; x &gt; </text></g>\n  </g>\n</svg>";
        let text = cleaned_text(&extract(source.as_bytes(), PREFERENCE).unwrap());
        assert!(text.contains("<style>\n  .a { fill: #000 }\n</style>"), "{text}");
        assert!(text.contains("<text> &lt; x &gt; </text>"), "{text}");
        // Indentation between elements is not carried over.
        assert!(text.contains("<svg><style>"), "{text}");
        assert!(text.contains("<g id=\"Symbols\"><g id=\"Regular-M\">"), "{text}");
    }
}
