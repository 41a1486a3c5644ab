//! Subcommands of `teams-activity` and their handlers.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::{json, Value};
use teams::{Activity, ChannelAccount, MentionTextLocation, TeamsActivityExt};
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a conversationUpdate activity into a Teams event
    Classify,

    /// Print the tenant id from the channel data
    Tenant,

    /// Print the general channel of the activity's team
    GeneralChannel,

    /// Add an @mention to the activity text and print the activity
    Mention {
        /// Id of the mentioned user
        #[arg(long)]
        user_id: String,

        /// Display name of the mentioned user
        #[arg(long)]
        user_name: Option<String>,

        /// Text shown inside the mention instead of the display name
        #[arg(long)]
        text: Option<String>,

        /// Put the mention after the existing text
        #[arg(long)]
        append: bool,
    },

    /// Build a reply addressed to the team's general channel
    Reply {
        /// Reply text
        #[arg(long)]
        text: Option<String>,

        /// Reply locale (defaults to the inbound locale)
        #[arg(long)]
        locale: Option<String>,
    },
}

/// Run a subcommand against an activity and return the JSON to print.
pub fn run(command: &Commands, mut activity: Activity) -> Result<Value> {
    match command {
        Commands::Classify => {
            let event = activity
                .conversation_update_data()
                .context("Failed to classify conversation update")?;
            info!(event_type = %event.event_type(), "Classified activity");
            serde_json::to_value(&event).context("Failed to encode event")
        }

        Commands::Tenant => {
            let tenant_id = activity.tenant_id().context("Failed to read tenant id")?;
            Ok(json!({ "tenantId": tenant_id }))
        }

        Commands::GeneralChannel => {
            let channel = activity
                .general_channel()
                .context("Failed to read general channel")?;
            serde_json::to_value(&channel).context("Failed to encode channel")
        }

        Commands::Mention {
            user_id,
            user_name,
            text,
            append,
        } => {
            let mentioned = ChannelAccount {
                id: user_id.clone(),
                name: user_name.clone(),
                ..ChannelAccount::default()
            };
            let location = if *append {
                MentionTextLocation::AppendText
            } else {
                MentionTextLocation::PrependText
            };

            activity
                .add_mention_to_text(&mentioned, location, text.as_deref())
                .context("Failed to add mention")?;
            serde_json::to_value(&activity).context("Failed to encode activity")
        }

        Commands::Reply { text, locale } => {
            let reply = activity
                .create_reply_to_general_channel(text.as_deref(), locale.as_deref())
                .context("Failed to create reply")?;
            info!(reply_to = ?reply.reply_to_id, "Created general channel reply");
            serde_json::to_value(&reply).context("Failed to encode reply")
        }
    }
}
