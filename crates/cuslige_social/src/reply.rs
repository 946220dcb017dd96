//! Platform-neutral profile reply model.

use cuslige_core::ProfileLookup;
use cuslige_error::ProfileError;
use cuslige_interface::ProfilePresenter;
use derive_getters::Getters;
use serde::Serialize;
use std::fmt;

/// Reply to a user whose name did not resolve.
pub const NOT_FOUND_MESSAGE: &str = "❌ User not found.";

/// Reply to every other lookup failure.
pub const UPSTREAM_ERROR_MESSAGE: &str = "❌ API error or Cloudflare blocked.";

/// Shown in place of an unset description.
pub const NO_DESCRIPTION: &str = "_No description_";

const DESCRIPTION_WIDTH: usize = 100;
const PLACEHOLDER: &str = "…";
const CARD_COLOUR: [u8; 3] = [235, 245, 255];
const FOOTER: &str = "Cuslige Bot";

/// One labelled value on a profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ReplyField {
    name: String,
    value: String,
    inline: bool,
}

impl ReplyField {
    fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// A button under the card. Link buttons carry a URL; the rest are inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ReplyButton {
    label: String,
    url: Option<String>,
    custom_id: Option<String>,
    disabled: bool,
}

impl ReplyButton {
    /// Button opening `url`.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
            custom_id: None,
            disabled: false,
        }
    }

    /// Greyed-out button that does nothing when pressed.
    pub fn new_disabled(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
            custom_id: Some(custom_id.into()),
            disabled: true,
        }
    }
}

/// Rich profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ProfileCard {
    title: String,
    description: String,
    thumbnail_url: String,
    colour: [u8; 3],
    fields: Vec<ReplyField>,
    footer_text: String,
    footer_icon_url: String,
    buttons: Vec<ReplyButton>,
}

/// What gets sent back for one `/user` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileReply {
    /// Successful lookup.
    Card(ProfileCard),
    /// Plain text message, used for failures.
    Notice {
        /// Message body
        message: String,
    },
}

impl ProfileReply {
    /// Plain text reply.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }

    /// The card, if this is a successful lookup.
    pub fn card(&self) -> Option<&ProfileCard> {
        match self {
            Self::Card(card) => Some(card),
            Self::Notice { .. } => None,
        }
    }
}

impl fmt::Display for ProfileReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notice { message } => write!(f, "{message}"),
            Self::Card(card) => {
                writeln!(f, "{}", card.title)?;
                writeln!(f, "{}", card.description)?;
                for field in &card.fields {
                    writeln!(f, "{}: {}", field.name, field.value)?;
                }
                for button in &card.buttons {
                    if let Some(url) = &button.url {
                        writeln!(f, "{}: {}", button.label, url)?;
                    }
                }
                write!(f, "{}", card.footer_text)
            }
        }
    }
}

/// Collapse whitespace and truncate at a word boundary to fit `width` chars.
///
/// Text that already fits is returned collapsed. Otherwise as many whole
/// words as fit alongside `placeholder` are kept, and `placeholder` is
/// appended; if not even one word fits, only the placeholder remains.
///
/// ```
/// use cuslige_social::shorten;
///
/// assert_eq!(shorten("Hello   world", 20, "…"), "Hello world");
/// assert_eq!(shorten("Hello world again", 12, "…"), "Hello world…");
/// ```
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(placeholder.chars().count());
    let mut out = String::new();
    let mut len = 0;
    for word in words {
        let sep = usize::from(!out.is_empty());
        let word_len = word.chars().count();
        if len + sep + word_len > budget {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        len += sep + word_len;
    }
    out.push_str(placeholder);
    out
}

/// Builds [`ProfileReply`] values for lookups and failures.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ReplyPresenter {
    footer: String,
    colour: [u8; 3],
    description_width: usize,
}

impl Default for ReplyPresenter {
    fn default() -> Self {
        Self {
            footer: FOOTER.to_string(),
            colour: CARD_COLOUR,
            description_width: DESCRIPTION_WIDTH,
        }
    }
}

impl ReplyPresenter {
    /// Presenter with a custom footer text.
    pub fn with_footer(footer: impl Into<String>) -> Self {
        Self {
            footer: footer.into(),
            ..Self::default()
        }
    }

    fn description(&self, raw: Option<&str>) -> String {
        let raw = raw
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION);
        shorten(raw, self.description_width, PLACEHOLDER)
    }
}

impl ProfilePresenter for ReplyPresenter {
    type Reply = ProfileReply;

    fn present(&self, lookup: &ProfileLookup) -> ProfileReply {
        let record = lookup.record();
        let status = if *lookup.premium() {
            "● Premium Member"
        } else {
            "○ Standard User"
        };

        let fields = vec![
            ReplyField::new(
                "🌫 Description",
                self.description(record.description().as_deref()),
                false,
            ),
            ReplyField::new("👥 Friends", record.friend_count().to_string(), true),
            ReplyField::new("⭐ Status", status, true),
            ReplyField::new("📅 Join Date", record.join_date().unwrap_or("N/A"), true),
            ReplyField::new("🆔 User ID", record.user_id().to_string(), true),
        ];

        let buttons = vec![
            ReplyButton::link("🌐 View Profile", record.profile_url()),
            ReplyButton::link("🖼 Avatar Image", record.avatar_url().clone()),
            ReplyButton::new_disabled("📋 Copy UserID", format!("copy_userid:{}", record.user_id())),
        ];

        ProfileReply::Card(ProfileCard {
            title: format!("{} — Roblox User", record.name()),
            description: format!("**{}**", record.display_name()),
            thumbnail_url: record.avatar_url().clone(),
            colour: self.colour,
            fields,
            footer_text: self.footer.clone(),
            footer_icon_url: record.avatar_url().clone(),
            buttons,
        })
    }

    fn present_error(&self, error: &ProfileError) -> ProfileReply {
        if error.is_not_found() {
            ProfileReply::notice(NOT_FOUND_MESSAGE)
        } else {
            ProfileReply::notice(UPSTREAM_ERROR_MESSAGE)
        }
    }
}
