//! User card rendering.
//!
//! Every user becomes a [`UserCard`] whose [`Role`] picks the course entry
//! layout through a dispatch table; the card frame is shared. Cards are
//! concatenated in input order and handed to a [`MarkupSink`] once per pass.

pub mod card;
pub mod courses;
pub mod role;

pub use card::UserCard;
pub use role::Role;

use anyhow::Result;
use tracing::debug;

use crate::config::RenderConfig;
use crate::gradation::Gradation;
use crate::sink::MarkupSink;
use crate::stats::RenderStats;
use crate::user::User;

/// Renders one card per user and concatenates them in input order.
pub fn render_users(
    users: &[User],
    gradation: &Gradation,
    config: &RenderConfig,
) -> Result<String> {
    let markup = users
        .iter()
        .map(|user| UserCard::new(user).render(gradation, config))
        .collect::<askama::Result<String>>()?;
    Ok(markup)
}

/// Renders `users` and writes the markup into the configured container of
/// `sink`.
pub fn render_into<S: MarkupSink + ?Sized>(
    sink: &mut S,
    users: &[User],
    gradation: &Gradation,
    config: &RenderConfig,
) -> Result<RenderStats> {
    let markup = render_users(users, gradation, config)?;
    let stats = RenderStats::from_users(users, gradation);
    debug!(
        cards = stats.cards,
        bytes = markup.len(),
        container = %config.container_id,
        "Markup rendered"
    );

    sink.inject(&config.container_id, &markup)?;

    Ok(stats)
}
