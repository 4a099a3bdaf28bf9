//! Console observer for watch sessions
//!
//! Prints each poll event as a timestamped line. Redundant snapshots
//! (identical to the previous one) are skipped so a slow backend doesn't
//! spam the terminal.

use colored::*;
use leadscout_core::domain::event::{DiscoverySummary, ProgressUpdate};
use leadscout_poller::{PollError, PollObserver};

pub struct ConsoleObserver;

impl ConsoleObserver {
    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

impl PollObserver for ConsoleObserver {
    fn on_progress(&self, update: &ProgressUpdate, changed: bool) {
        if !changed {
            return;
        }

        let phase = update.phase.as_deref().unwrap_or("working");
        let mut line = format!(
            "{} {} {} ({}/{})",
            Self::timestamp().dimmed(),
            "▸".cyan(),
            phase.cyan(),
            update.current,
            update.total
        );

        if update.leads_created > 0 {
            line.push_str(&format!(" — {} lead(s) so far", update.leads_created));
        }

        println!("{}", line);

        if let Some(message) = &update.message {
            println!("           {}", message.dimmed());
        }
    }

    fn on_complete(&self, summary: &DiscoverySummary) {
        println!(
            "{} {} Discovery complete: {} lead(s) created",
            Self::timestamp().dimmed(),
            "✓".green(),
            summary.leads_created
        );

        if let Some(text) = &summary.summary {
            println!("           {}", text);
        }

        for lead_id in &summary.lead_ids {
            println!("           lead {}", lead_id.to_string().dimmed());
        }
    }

    fn on_error(&self, error: &PollError) {
        println!(
            "{} {} {}",
            Self::timestamp().dimmed(),
            "✗".red(),
            error.to_string().red()
        );
    }
}
