// src/application/router.rs
use crate::constants::*;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// A single node in a click path: tag name, classes and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_link(&self) -> bool {
        self.tag.eq_ignore_ascii_case("a")
    }
}

/// The clicked element followed by its ancestors, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    path: Vec<Element>,
}

impl ClickTarget {
    pub fn new(target: Element) -> Self {
        Self { path: vec![target] }
    }

    /// Append the next enclosing ancestor.
    pub fn within(mut self, ancestor: Element) -> Self {
        self.path.push(ancestor);
        self
    }

    pub fn element(&self) -> &Element {
        &self.path[0]
    }

    /// Nearest element, starting at the target itself, that carries `marker`.
    pub fn closest(&self, marker: &str) -> Option<&Element> {
        self.path.iter().find(|element| element.has_class(marker))
    }
}

#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub target: ClickTarget,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: ClickTarget) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Controller operation selected for a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenCreateForm,
    Close,
    Zoom(String),
    Save(i64),
    Edit(i64),
    Delete(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub action: Action,
    pub prevent_default: bool,
}

struct Route {
    marker: &'static str,
    extract: fn(&Element, &ClickTarget) -> Option<Action>,
}

// Order is priority: the first marker found on the click path wins.
static ROUTES: [Route; 6] = [
    Route {
        marker: ADD_BUTTON_MARKER,
        extract: open_create_form,
    },
    Route {
        marker: MODAL_CLOSE_MARKER,
        extract: close,
    },
    Route {
        marker: CARD_IMAGE_MARKER,
        extract: zoom,
    },
    Route {
        marker: SAVE_BUTTON_MARKER,
        extract: save,
    },
    Route {
        marker: CARD_EDIT_MARKER,
        extract: edit,
    },
    Route {
        marker: CARD_DELETE_MARKER,
        extract: delete,
    },
];

fn open_create_form(_: &Element, _: &ClickTarget) -> Option<Action> {
    Some(Action::OpenCreateForm)
}

fn close(_: &Element, _: &ClickTarget) -> Option<Action> {
    Some(Action::Close)
}

fn zoom(image: &Element, _: &ClickTarget) -> Option<Action> {
    image.attribute("src").map(|src| Action::Zoom(src.to_string()))
}

fn save(button: &Element, _: &ClickTarget) -> Option<Action> {
    // A save button without a usable id submits a new memo.
    Some(Action::Save(parse_card_id(button).unwrap_or(0)))
}

fn edit(_: &Element, target: &ClickTarget) -> Option<Action> {
    enclosing_card_id(target).map(Action::Edit)
}

fn delete(_: &Element, target: &ClickTarget) -> Option<Action> {
    enclosing_card_id(target).map(Action::Delete)
}

fn enclosing_card_id(target: &ClickTarget) -> Option<i64> {
    target.closest(CARD_MARKER).and_then(parse_card_id)
}

fn parse_card_id(element: &Element) -> Option<i64> {
    element
        .attribute(CARD_ID_ATTRIBUTE)
        .and_then(|value| value.trim().parse().ok())
}

/// Classifies clicks for the single delegated document listener.
pub struct EventRouter;

impl EventRouter {
    #[instrument(level = "debug", skip(target), fields(tag = %target.element().tag), ret)]
    pub fn route(target: &ClickTarget) -> Option<Routed> {
        let (route, element) = ROUTES
            .iter()
            .find_map(|route| target.closest(route.marker).map(|element| (route, element)))?;

        let action = (route.extract)(element, target);
        if action.is_none() {
            debug!(marker = route.marker, "Matched marker without usable data");
        }

        action.map(|action| Routed {
            action,
            prevent_default: element.is_link(),
        })
    }
}
