// src/constants.rs
//
// Marker classes and fixed strings shared by the renderer, the router and the
// headless document. Marker classes identify interactive roles only; styling
// uses the Bulma classes next to them.

/// Default memo collection endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337/memos/";

/// Default `<title>` of the rendered page.
pub const DEFAULT_PAGE_TITLE: &str = "Memos";

/// Grid that holds one card per memo.
pub const GALLERY_MARKER: &str = "js-cards-grid";

/// Overlay shared by the form and the image viewer.
pub const MODAL_MARKER: &str = "js-modal";

pub const ADD_BUTTON_MARKER: &str = "js-add-btn";
pub const SAVE_BUTTON_MARKER: &str = "js-card-save";
pub const MODAL_CLOSE_MARKER: &str = "js-modal-close";
pub const CARD_MARKER: &str = "js-memo-card";
pub const CARD_IMAGE_MARKER: &str = "js-card-img";
pub const CARD_EDIT_MARKER: &str = "js-card-edit";
pub const CARD_DELETE_MARKER: &str = "js-card-delete";

pub const FORM_TITLE_MARKER: &str = "js-form-title";
pub const FORM_DESCRIPTION_MARKER: &str = "js-form-desc";
pub const FORM_TAGS_MARKER: &str = "js-form-tags";
pub const FORM_IMAGE_MARKER: &str = "js-form-img";

/// Attribute carrying the memo id on cards and on the save button.
pub const CARD_ID_ATTRIBUTE: &str = "data-card-id";

/// Class toggled on the modal container while it is shown.
pub const MODAL_ACTIVE_CLASS: &str = "is-active";

pub const SUBMIT_LABEL: &str = "Submit";
pub const SAVE_CHANGES_LABEL: &str = "Save changes";

/// Question asked before a memo is deleted.
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure about that?";

/// Delay in milliseconds after writing the page before opening the browser.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
