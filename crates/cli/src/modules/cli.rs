/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use directory::AliasScope;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(name = "mailctl")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
    /// SQLite database to use
    #[clap(short, long)]
    #[clap(default_value = "/etc/mail/mail.sqlite")]
    pub database: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage virtual domains
    #[clap(subcommand)]
    Domain(DomainCommands),

    /// Manage virtual mailbox users
    #[clap(subcommand)]
    User(UserCommands),

    /// Manage virtual aliases
    #[clap(subcommand)]
    Alias(AliasCommands),
}

#[derive(Subcommand)]
pub enum DomainCommands {
    /// Show all virtual domains
    Show,

    /// Add a virtual domain
    Add {
        /// Domain name to add
        name: String,
    },

    /// Delete a virtual domain including its users and aliases
    Delete {
        /// Domain name to delete
        name: String,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Show all mailbox users
    Show,

    /// Add a mailbox user, printing its generated password
    Add {
        /// Email address of the user
        email: String,
    },

    /// Delete a mailbox user including the aliases that forward to it
    Delete {
        /// Email address of the user
        email: String,
    },
}

#[derive(Subcommand)]
pub enum AliasCommands {
    /// Show aliases, aggregated by source address
    Show {
        /// Which aliases to show
        #[clap(value_enum)]
        #[clap(short, long, default_value = "enabled")]
        scope: ShowScope,
    },

    /// Search aliases whose source address contains a substring
    Search {
        /// Substring to look for
        pattern: String,
    },

    /// Add a source -> destination mapping
    Add {
        /// Source address to forward from
        source: String,

        /// Destination mailbox address
        destination: String,

        /// Free-text description
        #[clap(short = 'c', long)]
        description: Option<String>,
    },

    /// Enable all mappings of a source address
    Enable {
        /// Source address to enable
        source: String,
    },

    /// Disable all mappings of a source address without deleting them
    Disable {
        /// Source address to disable
        source: String,
    },

    /// Delete all mappings of a source address
    Delete {
        /// Source address to delete
        source: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ShowScope {
    /// Enabled aliases only
    Enabled,
    /// Disabled aliases only
    Disabled,
    /// Every alias
    All,
}

impl From<ShowScope> for AliasScope {
    fn from(scope: ShowScope) -> Self {
        match scope {
            ShowScope::Enabled => AliasScope::Enabled,
            ShowScope::Disabled => AliasScope::Disabled,
            ShowScope::All => AliasScope::All,
        }
    }
}
