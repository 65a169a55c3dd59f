//! Wire types of the bot-analytics API consumed by the dashboard frontend.

pub mod bot_analytics;
