// src/cli/commands.rs
use crate::application::{Dialog, GalleryController, MemoApi, Outcome};
use crate::cli::args::{Command, FieldArgs};
use crate::constants::*;
use crate::domain::{DomainError, Memo};
use crate::infrastructure::{Config, FormField, HtmlDocument, HttpMemoClient, PageWriter, TerminalDialog};
use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

pub async fn execute(config: Config, command: Command) -> Result<()> {
    let client = HttpMemoClient::new(&config.server.base_url)?;
    info!(base_url = %client.base_url(), "Using memo service");
    let document = HtmlDocument::new(config.page.title.clone());

    let assume_yes = matches!(command, Command::Delete { yes: true, .. });
    let mut controller = GalleryController::new(client, document, TerminalDialog::stdio(assume_yes));

    match command {
        Command::Gallery { output } => {
            expect_completed(controller.load_and_render_all().await, "Loading memos")?;
            publish(&controller, output.as_deref())
        }
        Command::List { search } => {
            let memos = controller.api_mut().list().await?;
            for memo in filter_by_title(memos, search.as_deref()) {
                println!("{}\t{}", memo.id, memo.title);
            }
            Ok(())
        }
        Command::View {
            memo_id,
            json: true,
            ..
        } => {
            let memo = controller.api_mut().get(memo_id).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&memo).context("Failed to serialize memo to JSON")?
            );
            Ok(())
        }
        Command::View {
            memo_id, output, ..
        } => {
            expect_completed(controller.load_and_render_all().await, "Loading memos")?;
            click(&mut controller, CARD_EDIT_MARKER, Some(memo_id)).await?;
            publish(&controller, output.as_deref())
        }
        Command::Zoom { memo_id, output } => {
            expect_completed(controller.load_and_render_all().await, "Loading memos")?;
            click(&mut controller, CARD_IMAGE_MARKER, Some(memo_id)).await?;
            publish(&controller, output.as_deref())
        }
        Command::Add { fields } => {
            let before = controller.page().card_ids();
            click(&mut controller, ADD_BUTTON_MARKER, None).await?;
            fill_form(controller.page_mut(), &fields);
            click(&mut controller, SAVE_BUTTON_MARKER, None).await?;

            let created = controller
                .page()
                .card_ids()
                .into_iter()
                .find(|id| !before.contains(id))
                .ok_or_else(|| anyhow!("Created memo did not appear in the gallery"))?;
            println!("Created memo {}", created);
            Ok(())
        }
        Command::Edit { memo_id, fields } => {
            expect_completed(controller.load_and_render_all().await, "Loading memos")?;
            click(&mut controller, CARD_EDIT_MARKER, Some(memo_id)).await?;
            fill_form(controller.page_mut(), &fields);
            click(&mut controller, SAVE_BUTTON_MARKER, None).await?;
            println!("Updated memo {}", memo_id);
            Ok(())
        }
        Command::Delete { memo_id, .. } => {
            expect_completed(controller.load_and_render_all().await, "Loading memos")?;
            match click(&mut controller, CARD_DELETE_MARKER, Some(memo_id)).await? {
                Outcome::Cancelled => println!("Kept memo {}", memo_id),
                _ => println!("Deleted memo {}", memo_id),
            }
            Ok(())
        }
    }
}

/// Click the element carrying `marker` and run whatever the router picks.
///
/// A failed action has already been reported by the dialog.
pub async fn click<A: MemoApi, D: Dialog>(
    controller: &mut GalleryController<A, HtmlDocument, D>,
    marker: &str,
    card_id: Option<i64>,
) -> Result<Outcome> {
    let mut event = controller.page().click(marker, card_id).ok_or_else(|| match card_id {
        Some(id) => anyhow::Error::from(DomainError::CardNotFound(id)),
        None => anyhow!("Nothing on the page carries {}", marker),
    })?;

    let outcome = controller
        .handle_click(&mut event)
        .await
        .ok_or_else(|| anyhow!("Click on {} was not handled", marker))?;
    debug!(marker, ?outcome, prevented = event.is_default_prevented(), "Click handled");

    if outcome == Outcome::Failed {
        bail!("Action on {} failed", marker);
    }
    Ok(outcome)
}

/// Type the given values into the open form.
pub fn fill_form(document: &mut HtmlDocument, fields: &FieldArgs) {
    let typed = [
        (FormField::Title, &fields.title),
        (FormField::Description, &fields.description),
        (FormField::Tags, &fields.tags),
        (FormField::Image, &fields.image),
    ];
    for (field, value) in typed {
        if let Some(value) = value {
            document.fill(field, value.clone());
        }
    }
}

/// Case-insensitive title filter; `None` keeps every memo.
pub fn filter_by_title(memos: Vec<Memo>, search: Option<&str>) -> Vec<Memo> {
    match search {
        None => memos,
        Some(query) => {
            let query = query.to_lowercase();
            memos
                .into_iter()
                .filter(|memo| memo.title.to_lowercase().contains(&query))
                .collect()
        }
    }
}

fn expect_completed(outcome: Outcome, what: &str) -> Result<()> {
    match outcome {
        Outcome::Failed => bail!("{} failed", what),
        _ => Ok(()),
    }
}

fn publish<A: MemoApi, D: Dialog>(
    controller: &GalleryController<A, HtmlDocument, D>,
    output: Option<&Path>,
) -> Result<()> {
    let mut writer = PageWriter::new();
    let path = writer.publish(&controller.page().render(), output)?;
    info!(?path, "Page published");
    Ok(())
}
