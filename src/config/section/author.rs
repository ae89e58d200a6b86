//! `[author]` profile for the bio widget.
//!
//! ```toml
//! [author]
//! name = "Denny Scott"
//! photo = "/photo.jpg"
//! bio = "JS Dev."
//!
//! [author.contacts]
//! twitter = "@gitinbit"
//! github = "DennyScott"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::site::check_not_blank;
use crate::config::{ConfigDiagnostics, FieldPath, RawText, text_or_default};

/// Author profile shown next to posts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Config)]
#[serde(default)]
#[config(section = "author")]
pub struct RawAuthor {
    #[config(required, example = "Jane Doe", inline_doc = "display name")]
    pub name: Option<RawText>,

    #[config(example = "/photo.jpg", inline_doc = "avatar path or URL")]
    pub photo: Option<RawText>,

    #[config(inline_doc = "short biography")]
    pub bio: Option<RawText>,

    /// Contact handles keyed by channel (twitter, github, email, ...).
    #[config(table, example = "github = \"jane\"\nemail = \"jane@example.com\"")]
    pub contacts: Option<BTreeMap<String, RawText>>,
}

impl RawAuthor {
    /// Validate into an [`Author`], reporting problems to `diag`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) -> Option<Author> {
        let section = FieldPath::new(Self::TEMPLATE_SECTION);
        for key in self.missing_required() {
            diag.missing(section.join(key));
        }

        let name = self
            .name
            .as_ref()
            .and_then(|name| name.text(Self::FIELDS.name, diag))
            .filter(|name| check_not_blank(name, Self::FIELDS.name, diag));
        let photo = text_or_default(self.photo.as_ref(), Self::FIELDS.photo, diag);
        let bio = text_or_default(self.bio.as_ref(), Self::FIELDS.bio, diag);

        let mut contacts = BTreeMap::new();
        for (channel, handle) in self.contacts.iter().flatten() {
            let field = Self::FIELDS.contacts.join(channel);
            if channel.trim().is_empty() {
                diag.error(
                    Self::FIELDS.contacts,
                    "contact channel name must not be empty",
                );
                continue;
            }
            let Some(handle) = handle.text(field.clone(), diag) else {
                continue;
            };
            if handle.trim().is_empty() {
                diag.warn(field, "empty handle");
            }
            contacts.insert(channel.clone(), handle.to_string());
        }

        Some(Author {
            name: name?.to_string(),
            photo,
            bio,
            contacts,
        })
    }
}

/// Validated author profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    name: String,
    photo: String,
    bio: String,
    contacts: BTreeMap<String, String>,
}

impl Author {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Avatar path or URL; empty when not set.
    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Channel -> handle, as configured, ordered by channel.
    pub fn contacts(&self) -> &BTreeMap<String, String> {
        &self.contacts
    }

    pub fn contact(&self, channel: &str) -> Option<&str> {
        self.contacts.get(channel).map(String::as_str)
    }
}
