use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "minaret", version, about = "Mosque schedule and dashboard toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a mosque
    AddMosque {
        /// Mosque name
        name: String,
        /// Street address
        #[arg(long)]
        address: Option<String>,
    },
    /// Add a member to a mosque
    AddMember {
        /// Mosque id or name
        mosque: String,
        /// Member name
        name: String,
        /// Role: admin, imam or muazzin
        #[arg(long, default_value = "muazzin")]
        role: String,
    },
    /// Add a dated event to a mosque
    AddEvent {
        /// Mosque id or name
        mosque: String,
        /// Event title
        title: String,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Set one slot of a mosque's schedule
    SetTime {
        /// Mosque id or name
        mosque: String,
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Time string, "HH:MM" or "hh:mm AM/PM" — stored verbatim
        time: String,
    },
    /// Show a mosque's schedule and the next prayer
    Times {
        /// Mosque id or name (falls back to the configured default)
        mosque: Option<String>,
    },
    /// Show the next prayer with a countdown
    Next {
        /// Mosque id or name (falls back to the configured default)
        mosque: Option<String>,
    },
    /// Dashboard summary: member count, upcoming events, next prayer
    Summary {
        /// Mosque id or name (falls back to the configured default)
        mosque: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered mosques
    Mosques,
    /// Set the default mosque used when MOSQUE is omitted
    SetDefault {
        /// Mosque id or name
        mosque: String,
    },
}
