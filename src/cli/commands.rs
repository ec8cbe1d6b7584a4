// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Schedule a website
    Add {
        /// Website URL (scheme optional, https:// is assumed)
        #[arg(required = true)]
        url: String,

        /// Time of day, 24-hour HH:MM
        #[arg(required = true)]
        time: String,

        /// Display name (defaults to the hostname)
        #[arg(long)]
        name: Option<String>,
    },

    /// List scheduled websites
    List,

    /// Enable or disable a schedule
    Toggle {
        /// Schedule ID
        #[arg(required = true)]
        id: String,
    },

    /// Remove a schedule
    Remove {
        /// Schedule ID
        #[arg(required = true)]
        id: String,
    },

    /// Run one match evaluation against the current minute
    Check,

    /// Manage autofill data
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show stored autofill fields
    Show,

    /// Set one field and save the record
    Set {
        /// Field name (e.g. name, email, irctc_username)
        #[arg(required = true)]
        field: String,

        /// Field value, free-form text
        #[arg(required = true)]
        value: String,
    },

    /// Clear stored autofill data
    Clear,

    /// Simulate filling a form with the stored data
    Fill,
}
