// src/infrastructure/document.rs
use crate::application::{ClickEvent, ClickTarget, Element, Page};
use crate::constants::*;
use crate::domain::MemoFields;
use crate::ports::CardRenderer;
use crate::util::markup;
use std::collections::HashMap;
use tracing::{debug, trace};

/// The four inputs of the memo form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Tags,
    Image,
}

impl FormField {
    pub fn marker(&self) -> &'static str {
        match self {
            FormField::Title => FORM_TITLE_MARKER,
            FormField::Description => FORM_DESCRIPTION_MARKER,
            FormField::Tags => FORM_TAGS_MARKER,
            FormField::Image => FORM_IMAGE_MARKER,
        }
    }
}

/// In-memory host page: gallery cards, modal content and typed input.
///
/// Stands in for the browser document. It can serialize itself to a
/// standalone HTML page and build click events for any marked element.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    title: String,
    cards: Vec<String>,
    modal: String,
    modal_active: bool,
    // What the user typed since the modal content was last replaced
    edits: HashMap<FormField, String>,
    renderer: CardRenderer,
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cards: Vec::new(),
            modal: String::new(),
            modal_active: false,
            edits: HashMap::new(),
            renderer: CardRenderer::new(),
        }
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Ids of the rendered cards in gallery order.
    pub fn card_ids(&self) -> Vec<i64> {
        self.cards.iter().filter_map(|card| markup::card_id(card)).collect()
    }

    pub fn modal(&self) -> &str {
        &self.modal
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal_active
    }

    /// Simulate the user typing into a form input.
    pub fn fill(&mut self, field: FormField, value: impl Into<String>) {
        self.edits.insert(field, value.into());
    }

    /// Full page markup for the current state.
    pub fn render(&self) -> String {
        self.renderer
            .render_page(&self.title, &self.cards, &self.modal, self.modal_active)
    }

    /// Click path for the first element carrying `marker`.
    ///
    /// With `card_id` the element is looked up inside that card; otherwise
    /// the open modal is searched first, then the page chrome.
    pub fn target(&self, marker: &str, card_id: Option<i64>) -> Option<ClickTarget> {
        match card_id {
            Some(id) => self.card_target(marker, id),
            None => self.modal_target(marker).or_else(|| self.chrome_target(marker)),
        }
    }

    pub fn click(&self, marker: &str, card_id: Option<i64>) -> Option<ClickEvent> {
        self.target(marker, card_id).map(ClickEvent::new)
    }

    fn card_target(&self, marker: &str, id: i64) -> Option<ClickTarget> {
        let card = self
            .cards
            .iter()
            .find(|card| markup::card_id(card) == Some(id))?;
        let elements = markup::parse_elements(card);
        let root = elements.iter().find(|e| e.has_class(CARD_MARKER))?.clone();
        let element = elements.into_iter().find(|e| e.has_class(marker))?;

        let target = if element == root {
            ClickTarget::new(root)
        } else {
            ClickTarget::new(element).within(root)
        };
        Some(target.within(gallery_container()).within(body()))
    }

    fn modal_target(&self, marker: &str) -> Option<ClickTarget> {
        if !self.modal_active {
            return None;
        }
        let element = markup::find_element(&self.modal, marker)?;
        Some(
            ClickTarget::new(element)
                .within(modal_container(true))
                .within(body()),
        )
    }

    fn chrome_target(&self, marker: &str) -> Option<ClickTarget> {
        let chrome = [
            add_button(),
            gallery_container(),
            modal_container(self.modal_active),
        ];
        let element = chrome.into_iter().find(|e| e.has_class(marker))?;
        Some(ClickTarget::new(element).within(body()))
    }

    fn read_field(&self, field: FormField) -> Option<String> {
        if let Some(typed) = self.edits.get(&field) {
            return Some(typed.clone());
        }
        match field {
            FormField::Description => markup::textarea_content(&self.modal, field.marker()),
            _ => markup::input_value(&self.modal, field.marker()),
        }
    }
}

impl Page for HtmlDocument {
    fn replace_gallery(&mut self, cards: Vec<String>) {
        debug!(count = cards.len(), "Replacing gallery");
        self.cards = cards;
    }

    fn append_card(&mut self, card: String) {
        self.cards.push(card);
    }

    fn remove_card(&mut self, id: i64) -> bool {
        match self
            .cards
            .iter()
            .position(|card| markup::card_id(card) == Some(id))
        {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    fn set_modal(&mut self, content: String) {
        trace!(len = content.len(), "Setting modal content");
        self.modal = content;
        self.edits.clear();
    }

    fn show_modal(&mut self) {
        self.modal_active = true;
    }

    fn hide_modal(&mut self) {
        self.modal_active = false;
    }

    fn form_fields(&self) -> Option<MemoFields> {
        Some(MemoFields {
            title: self.read_field(FormField::Title)?,
            description: self.read_field(FormField::Description)?,
            tags: self.read_field(FormField::Tags)?,
            image: self.read_field(FormField::Image)?,
        })
    }
}

fn body() -> Element {
    Element::new("body")
}

fn add_button() -> Element {
    Element::new("a")
        .with_class("button")
        .with_class(ADD_BUTTON_MARKER)
        .with_attribute("href", "#")
}

fn gallery_container() -> Element {
    Element::new("div")
        .with_class("cards-grid")
        .with_class(GALLERY_MARKER)
}

fn modal_container(active: bool) -> Element {
    let modal = Element::new("div").with_class("modal").with_class(MODAL_MARKER);
    if active {
        modal.with_class(MODAL_ACTIVE_CLASS)
    } else {
        modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Memo;

    fn card(id: i64) -> String {
        CardRenderer::new().render_card(&Memo {
            id,
            title: format!("Memo {id}"),
            image: format!("https://example.com/{id}.png"),
            ..Default::default()
        })
    }

    #[test]
    fn given_cards_when_removing_one_then_keeps_others_in_order() {
        let mut document = HtmlDocument::new("Memos");
        document.replace_gallery(vec![card(1), card(2), card(3)]);

        let removed = document.remove_card(2);

        assert!(removed);
        assert_eq!(document.card_ids(), vec![1, 3]);
    }

    #[test]
    fn given_missing_card_when_removing_then_returns_false() {
        let mut document = HtmlDocument::new("Memos");
        document.replace_gallery(vec![card(1)]);

        assert!(!document.remove_card(9));
        assert_eq!(document.card_ids(), vec![1]);
    }

    #[test]
    fn given_typed_input_when_modal_replaced_then_edits_are_discarded() {
        let mut document = HtmlDocument::new("Memos");
        document.set_modal(CardRenderer::new().render_form(&Memo::draft()));
        document.fill(FormField::Title, "typed");

        document.set_modal(CardRenderer::new().render_form(&Memo::draft()));

        let fields = document.form_fields().expect("Form should be open");
        assert_eq!(fields.title, "");
    }

    #[test]
    fn given_card_when_targeting_image_then_path_reaches_card_root() {
        let mut document = HtmlDocument::new("Memos");
        document.replace_gallery(vec![card(4)]);

        let target = document
            .target(CARD_IMAGE_MARKER, Some(4))
            .expect("Image should exist");

        assert_eq!(target.element().tag, "img");
        assert_eq!(
            target.element().attribute("src"),
            Some("https://example.com/4.png")
        );
        assert!(target.closest(CARD_MARKER).is_some());
        assert!(target.closest(GALLERY_MARKER).is_some());
    }

    #[test]
    fn given_closed_modal_when_targeting_save_then_returns_none() {
        let mut document = HtmlDocument::new("Memos");
        document.set_modal(CardRenderer::new().render_form(&Memo::draft()));

        assert!(document.target(SAVE_BUTTON_MARKER, None).is_none());
    }

    #[test]
    fn given_page_when_targeting_add_button_then_finds_chrome_link() {
        let document = HtmlDocument::new("Memos");

        let target = document
            .target(ADD_BUTTON_MARKER, None)
            .expect("Add button should exist");

        assert!(target.element().is_link());
    }
}
