// src/ports/html.rs
use crate::constants::*;
use crate::domain::memo::split_tags;
use crate::domain::Memo;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// Builds the markup fragments for cards, the modal and the host page.
///
/// Every method is a pure function of its input. Text and attribute values
/// are escaped so that memo content never becomes markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardRenderer;

impl CardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// One badge per non-empty `;`-separated segment.
    pub fn render_tags(&self, tags: &str) -> String {
        split_tags(tags)
            .into_iter()
            .map(|tag| format!(r#"<span class="tag is-info is-light">{}</span>"#, encode_text(tag)))
            .collect()
    }

    #[instrument(level = "trace", skip(self), fields(id = memo.id))]
    pub fn render_card(&self, memo: &Memo) -> String {
        format!(
            r##"<div class="card memo-card {card}" {id_attr}="{id}">
    <div class="card-image">
        <figure class="image is-4by3">
            <img src="{image}" alt="{alt}" class="card-img {image_marker}">
        </figure>
    </div>
    <div class="card-content">
        <div class="title is-4">{title}</div>
        <div class="content">
            {description}
            <div class="tags">{tags}</div>
        </div>
    </div>
    <footer class="card-footer">
        <a href="#" class="card-footer-item {edit}">Edit</a>
        <a href="#" class="card-footer-item {delete}">Delete</a>
    </footer>
</div>"##,
            card = CARD_MARKER,
            id_attr = CARD_ID_ATTRIBUTE,
            id = memo.id,
            image = encode_double_quoted_attribute(&memo.image),
            alt = encode_double_quoted_attribute(&memo.title),
            image_marker = CARD_IMAGE_MARKER,
            title = encode_text(&memo.title),
            description = encode_text(&memo.description),
            tags = self.render_tags(&memo.tags),
            edit = CARD_EDIT_MARKER,
            delete = CARD_DELETE_MARKER,
        )
    }

    /// Modal form pre-filled from `memo`; pass `Memo::draft()` for a new one.
    pub fn render_form(&self, memo: &Memo) -> String {
        let save_label = if memo.is_draft() {
            SUBMIT_LABEL
        } else {
            SAVE_CHANGES_LABEL
        };

        format!(
            r#"<div class="modal-background {close}"></div>
<div class="modal-card">
    <header class="modal-card-head">
        <p class="modal-card-title">{heading}</p>
        <button class="delete {close}" aria-label="close"></button>
    </header>
    <section class="modal-card-body">
        <div class="field">
            <label class="label">Title</label>
            <div class="control">
                <input class="input {title_marker}" type="text" value="{title}" placeholder="Title ...">
            </div>
        </div>
        <div class="field">
            <label class="label">Description</label>
            <div class="control">
                <textarea class="textarea {desc_marker}" placeholder="Description ...">{description}</textarea>
            </div>
        </div>
        <div class="field">
            <label class="label">Tags</label>
            <div class="control">
                <input class="input {tags_marker}" type="text" value="{tags}" placeholder="Tags ...">
            </div>
        </div>
        <div class="field">
            <label class="label">Image link</label>
            <div class="control">
                <input class="input {image_marker}" type="text" value="{image}" placeholder="Image link ...">
            </div>
        </div>
    </section>
    <footer class="modal-card-foot">
        <button class="button is-success {save}" {id_attr}="{id}">{save_label}</button>
        <button class="button {close}">Cancel</button>
    </footer>
</div>"#,
            close = MODAL_CLOSE_MARKER,
            heading = encode_text(&memo.title),
            title_marker = FORM_TITLE_MARKER,
            title = encode_double_quoted_attribute(&memo.title),
            desc_marker = FORM_DESCRIPTION_MARKER,
            description = encode_text(&memo.description),
            tags_marker = FORM_TAGS_MARKER,
            tags = encode_double_quoted_attribute(&memo.tags),
            image_marker = FORM_IMAGE_MARKER,
            image = encode_double_quoted_attribute(&memo.image),
            save = SAVE_BUTTON_MARKER,
            id_attr = CARD_ID_ATTRIBUTE,
            id = memo.id,
            save_label = save_label,
        )
    }

    pub fn render_image_viewer(&self, url: &str) -> String {
        format!(
            r#"<div class="modal-background {close}"></div>
<div class="modal-content">
    <p class="image">
        <img src="{url}" alt="">
    </p>
</div>
<button class="modal-close is-large {close}" aria-label="close"></button>"#,
            close = MODAL_CLOSE_MARKER,
            url = encode_double_quoted_attribute(url),
        )
    }

    /// Standalone host page around the gallery and modal content.
    pub fn render_page(&self, title: &str, cards: &[String], modal: &str, modal_active: bool) -> String {
        let modal_class = if modal_active {
            format!("modal {} {}", MODAL_MARKER, MODAL_ACTIVE_CLASS)
        } else {
            format!("modal {}", MODAL_MARKER)
        };

        format!(
            r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css">
    <style>
        .cards-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1.5rem;
        }}
        .memo-card {{
            display: flex;
            flex-direction: column;
        }}
        .memo-card .card-content {{
            flex-grow: 1;
        }}
        .card-img {{
            object-fit: cover;
            cursor: zoom-in;
        }}
    </style>
</head>
<body>
    <section class="section">
        <div class="container">
            <div class="level">
                <div class="level-left">
                    <h1 class="title">{title}</h1>
                </div>
                <div class="level-right">
                    <a href="#" class="button is-primary {add}">Add memo</a>
                </div>
            </div>
            <div class="cards-grid {gallery}">
{cards}
            </div>
        </div>
    </section>
    <div class="{modal_class}">
{modal}
    </div>
</body>
</html>"##,
            title = encode_text(title),
            add = ADD_BUTTON_MARKER,
            gallery = GALLERY_MARKER,
            cards = cards.join("\n"),
            modal_class = modal_class,
            modal = modal,
        )
    }
}
