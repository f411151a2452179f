// src/domain/memo.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Separator between tag labels inside `Memo::tags`.
pub const TAG_SEPARATOR: char = ';';

/// A memo record as served by the memo service.
///
/// The server owns the record; a `Memo` on this side is a snapshot taken for
/// rendering or for pre-filling the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Request body for create (POST) and full-record replace (PUT).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoFields {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub image: String,
}

impl Memo {
    /// Blank memo used when the create form is opened.
    pub fn draft() -> Self {
        Self::default()
    }

    /// A memo without a server-assigned id has never been saved.
    pub fn is_draft(&self) -> bool {
        self.id == 0
    }

    /// Tag labels in order, skipping empty segments.
    ///
    /// A label that itself contains `;` cannot be represented and is split.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }

    pub fn fields(&self) -> MemoFields {
        MemoFields {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            image: self.image.clone(),
        }
    }

    pub fn with_fields(id: i64, fields: MemoFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            tags: fields.tags,
            image: fields.image,
        }
    }
}

pub fn split_tags(tags: &str) -> Vec<&str> {
    tags.split(TAG_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

// The service sends `null` for fields that were never filled in.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
