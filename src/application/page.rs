// src/application/page.rs
use crate::domain::MemoFields;

/// The host page regions the controller mutates.
///
/// Implementations resolve the gallery and modal containers on every call,
/// so a controller never holds on to a stale container.
pub trait Page {
    /// Replace every card in the gallery.
    fn replace_gallery(&mut self, cards: Vec<String>);

    fn append_card(&mut self, card: String);

    /// Remove the card keyed by `id`; returns false if no such card exists.
    fn remove_card(&mut self, id: i64) -> bool;

    /// Replace the modal content; an empty string clears it.
    fn set_modal(&mut self, content: String);

    fn show_modal(&mut self);

    fn hide_modal(&mut self);

    /// Current values of the four form inputs, if a form is open.
    fn form_fields(&self) -> Option<MemoFields>;
}

/// Blocking user notifications.
pub trait Dialog {
    fn alert(&mut self, message: &str);

    fn confirm(&mut self, message: &str) -> bool;
}
