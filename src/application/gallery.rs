// src/application/gallery.rs
use crate::application::router::{Action, ClickEvent, EventRouter};
use crate::application::{Dialog, MemoApi, Page};
use crate::constants::CONFIRM_DELETE_MESSAGE;
use crate::domain::{DomainError, Memo};
use crate::ports::CardRenderer;
use tracing::{debug, info, instrument, warn};

/// What the modal region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Closed,
    Form { id: i64 },
    Image { url: String },
}

/// Result of a controller action.
///
/// `Failed` means the error has already been reported through the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    Failed,
}

/// Drives the gallery and the modal in response to user actions.
pub struct GalleryController<A: MemoApi, P: Page, D: Dialog> {
    api: A,
    page: P,
    dialog: D,
    renderer: CardRenderer,
    mode: ModalMode,
}

impl<A: MemoApi, P: Page, D: Dialog> GalleryController<A, P, D> {
    pub fn new(api: A, page: P, dialog: D) -> Self {
        Self {
            api,
            page,
            dialog,
            renderer: CardRenderer::new(),
            mode: ModalMode::Closed,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    /// Fetch every memo and replace the gallery. A failed fetch leaves the
    /// current cards in place.
    #[instrument(level = "debug", skip(self))]
    pub async fn load_and_render_all(&mut self) -> Outcome {
        match self.api.list().await {
            Ok(memos) => {
                info!(count = memos.len(), "Rendering gallery");
                let cards = memos
                    .iter()
                    .map(|memo| self.renderer.render_card(memo))
                    .collect();
                self.page.replace_gallery(cards);
                Outcome::Completed
            }
            Err(e) => self.report(e),
        }
    }

    pub fn open_create_form(&mut self) -> Outcome {
        self.open_form(&Memo::draft());
        Outcome::Completed
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn open_edit_form(&mut self, id: i64) -> Outcome {
        match self.api.get(id).await {
            Ok(memo) => {
                self.open_form(&memo);
                Outcome::Completed
            }
            Err(e) => self.report(e),
        }
    }

    /// Submit the open form: update when `id` is set, create otherwise.
    ///
    /// An update refreshes the whole gallery; a create only appends the new
    /// card. The modal stays open when the request fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn save(&mut self, id: i64) -> Outcome {
        let Some(fields) = self.page.form_fields() else {
            return self.report(DomainError::FormNotOpen);
        };

        if id != 0 {
            match self.api.update(id, &fields).await {
                Ok(_) => {
                    info!(id, "Memo updated");
                    let refreshed = self.load_and_render_all().await;
                    self.close();
                    refreshed
                }
                Err(e) => self.report(e),
            }
        } else {
            match self.api.create(&fields).await {
                Ok(created) => {
                    info!(id = created.id, "Memo created");
                    let card = self.renderer.render_card(&created);
                    self.page.append_card(card);
                    self.close();
                    Outcome::Completed
                }
                Err(e) => self.report(e),
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&mut self, id: i64) -> Outcome {
        if !self.dialog.confirm(CONFIRM_DELETE_MESSAGE) {
            debug!(id, "Deletion declined");
            return Outcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                if !self.page.remove_card(id) {
                    warn!(id, "Deleted memo had no card in the gallery");
                }
                info!(id, "Memo deleted");
                Outcome::Completed
            }
            Err(e) => self.report(e),
        }
    }

    pub fn zoom(&mut self, url: &str) -> Outcome {
        let content = self.renderer.render_image_viewer(url);
        self.open_modal(
            ModalMode::Image {
                url: url.to_string(),
            },
            content,
        );
        Outcome::Completed
    }

    pub fn close(&mut self) -> Outcome {
        self.page.set_modal(String::new());
        self.page.hide_modal();
        self.mode = ModalMode::Closed;
        Outcome::Completed
    }

    /// Entry point for the delegated click listener.
    ///
    /// Returns `None` when the click does not hit any interactive marker.
    pub async fn handle_click(&mut self, event: &mut ClickEvent) -> Option<Outcome> {
        let routed = EventRouter::route(&event.target)?;
        if routed.prevent_default {
            event.prevent_default();
        }
        Some(self.dispatch(routed.action).await)
    }

    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        debug!(?action, "Dispatching");
        match action {
            Action::OpenCreateForm => self.open_create_form(),
            Action::Close => self.close(),
            Action::Zoom(url) => self.zoom(&url),
            Action::Save(id) => self.save(id).await,
            Action::Edit(id) => self.open_edit_form(id).await,
            Action::Delete(id) => self.delete(id).await,
        }
    }

    fn open_form(&mut self, memo: &Memo) {
        let content = self.renderer.render_form(memo);
        self.open_modal(ModalMode::Form { id: memo.id }, content);
    }

    // Setting new content discards whatever the previous mode left behind.
    fn open_modal(&mut self, mode: ModalMode, content: String) {
        self.page.set_modal(content);
        self.page.show_modal();
        self.mode = mode;
    }

    fn report(&mut self, error: DomainError) -> Outcome {
        warn!(%error, "Action failed");
        self.dialog.alert(&error.to_string());
        Outcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::HtmlDocument;
    use crate::util::testing::{MockMemoApi, ScriptedDialog};

    fn controller() -> GalleryController<MockMemoApi, HtmlDocument, ScriptedDialog> {
        GalleryController::new(
            MockMemoApi::builder().build(),
            HtmlDocument::new("Memos"),
            ScriptedDialog::new(),
        )
    }

    #[test]
    fn given_open_form_when_zooming_then_replaces_modal_content() {
        // Arrange
        let mut controller = controller();
        controller.open_create_form();

        // Act
        controller.zoom("https://example.com/big.png");

        // Assert
        assert_eq!(
            controller.mode(),
            &ModalMode::Image {
                url: "https://example.com/big.png".to_string()
            }
        );
        assert!(controller.page().form_fields().is_none());
        assert!(controller.page().is_modal_active());
    }

    #[test]
    fn given_closed_modal_when_closing_twice_then_stays_closed() {
        // Arrange
        let mut controller = controller();
        controller.open_create_form();

        // Act
        let first = controller.close();
        let second = controller.close();

        // Assert
        assert_eq!(first, Outcome::Completed);
        assert_eq!(second, Outcome::Completed);
        assert_eq!(controller.mode(), &ModalMode::Closed);
        assert!(!controller.page().is_modal_active());
        assert_eq!(controller.page().modal(), "");
        assert!(controller.dialog().alerts().is_empty());
    }
}
