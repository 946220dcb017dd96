//! Conversion from [`ProfileReply`] to Serenity message builders.

use crate::{ProfileCard, ProfileReply, ReplyButton};
use serenity::all::{
    ButtonStyle, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponseFollowup,
};

fn button(button: &ReplyButton) -> CreateButton {
    let built = match (button.url(), button.custom_id()) {
        (Some(url), _) => CreateButton::new_link(url),
        (None, Some(id)) => CreateButton::new(id).style(ButtonStyle::Secondary),
        (None, None) => CreateButton::new("noop").style(ButtonStyle::Secondary),
    };
    built.label(button.label()).disabled(*button.disabled())
}

fn embed(card: &ProfileCard) -> CreateEmbed {
    let [r, g, b] = *card.colour();
    let mut embed = CreateEmbed::new()
        .title(card.title())
        .description(card.description())
        .colour(Colour::from_rgb(r, g, b))
        .thumbnail(card.thumbnail_url())
        .footer(CreateEmbedFooter::new(card.footer_text()).icon_url(card.footer_icon_url()));
    for field in card.fields() {
        embed = embed.field(field.name(), field.value(), *field.inline());
    }
    embed
}

/// Follow-up message for a deferred `/user` interaction.
pub fn followup(reply: &ProfileReply) -> CreateInteractionResponseFollowup {
    match reply {
        ProfileReply::Notice { message } => CreateInteractionResponseFollowup::new().content(message),
        ProfileReply::Card(card) => {
            let buttons = card.buttons().iter().map(button).collect();
            CreateInteractionResponseFollowup::new()
                .embed(embed(card))
                .components(vec![CreateActionRow::Buttons(buttons)])
        }
    }
}
