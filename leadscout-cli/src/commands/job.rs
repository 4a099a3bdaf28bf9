//! Discovery job command handlers
//!
//! Handles launching jobs, one-shot status checks, and live watch
//! sessions with Ctrl-C cancellation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use uuid::Uuid;

use leadscout_client::DiscoveryClient;
use leadscout_core::domain::job::{JobState, StatusSnapshot, TaskId};
use leadscout_poller::{PollConfig, PollDriver, StopReason};

use crate::config::Config;
use crate::observer::ConsoleObserver;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Launch a discovery job for a campaign
    Launch {
        /// Campaign UUID
        campaign_id: Uuid,

        /// Clear a stuck prior job before launching
        #[arg(long)]
        force: bool,
    },
    /// Show the current status of a job
    Status {
        /// Task id returned at launch
        task_id: String,
    },
    /// Launch a job and follow it until it finishes (Ctrl-C cancels)
    Watch {
        /// Campaign UUID
        campaign_id: Uuid,

        /// Clear a stuck prior job before launching
        #[arg(long)]
        force: bool,

        /// Poll interval in seconds
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The job command to execute
/// * `config` - The CLI configuration
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = DiscoveryClient::new(&config.api_url);

    match command {
        JobCommands::Launch { campaign_id, force } => launch_job(&client, campaign_id, force).await,
        JobCommands::Status { task_id } => show_status(&client, &task_id).await,
        JobCommands::Watch {
            campaign_id,
            force,
            interval,
        } => watch_job(client, campaign_id, force, interval).await,
    }
}

/// Launch a job and print its task id
async fn launch_job(client: &DiscoveryClient, campaign_id: Uuid, force: bool) -> Result<()> {
    let task_id = client
        .launch_discovery(campaign_id, force)
        .await
        .context("Failed to launch discovery job")?;

    println!("{}", "Discovery job launched.".bold());
    println!("  Campaign: {}", campaign_id.to_string().dimmed());
    println!("  Task:     {}", task_id.to_string().cyan());
    println!();
    println!(
        "{}",
        format!("Follow it with: leadscout job status {}", task_id).dimmed()
    );

    Ok(())
}

/// Fetch and display a single status snapshot
async fn show_status(client: &DiscoveryClient, task_id: &str) -> Result<()> {
    let snapshot = client
        .fetch_status(&TaskId::new(task_id))
        .await
        .context("Failed to fetch job status")?;

    print_snapshot(task_id, &snapshot);

    Ok(())
}

/// Launch a job and poll it until terminal state or Ctrl-C
async fn watch_job(
    client: DiscoveryClient,
    campaign_id: Uuid,
    force: bool,
    interval_secs: u64,
) -> Result<()> {
    let config = PollConfig::new(Duration::from_secs(interval_secs));
    if let Err(e) = config.validate() {
        bail!("invalid poll interval: {}", e);
    }

    println!(
        "{}",
        format!(
            "Watching discovery for campaign {} (every {}s, Ctrl-C to stop)...",
            campaign_id, interval_secs
        )
        .bold()
    );

    let driver = PollDriver::new(Arc::new(client), config);
    let handle = driver.start(campaign_id, force, Arc::new(ConsoleObserver));

    let canceller = handle.canceller();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            canceller.cancel();
        }
    });

    match handle.join().await {
        StopReason::Complete => Ok(()),
        StopReason::Cancelled => {
            println!("{}", "Watch cancelled; the job keeps running server-side.".yellow());
            Ok(())
        }
        // The observer already printed the error detail.
        StopReason::Error => bail!("discovery job did not complete"),
    }
}

/// Print detailed snapshot information
fn print_snapshot(task_id: &str, snapshot: &StatusSnapshot) {
    let state_colored = colorize_state(snapshot.state);

    println!("{}", "Job Status:".bold());
    println!("  Task:     {}", task_id.cyan());
    println!("  State:    {}", state_colored);

    if let Some(phase) = &snapshot.phase {
        println!("  Phase:    {}", phase);
    }

    println!("  Progress: {}/{}", snapshot.current, snapshot.total);

    if let Some(message) = &snapshot.message {
        println!("  Message:  {}", message);
    }

    println!("  Leads:    {}", snapshot.leads_created);

    if let Some(summary) = &snapshot.summary {
        println!("\n{}", "Summary:".bold());
        println!("  {}", summary);
    }

    if let Some(error) = &snapshot.error {
        println!("\n{}", "Error:".bold());
        println!("  {}", error.red());
    }

    if !snapshot.lead_ids.is_empty() {
        println!("\n{}", "Lead IDs:".bold());
        for lead_id in &snapshot.lead_ids {
            println!("  {}", lead_id.to_string().dimmed());
        }
    }
}

/// Colorize job state for display
fn colorize_state(state: JobState) -> colored::ColoredString {
    let state_str = format!("{:?}", state);
    match state {
        JobState::Running => state_str.cyan(),
        JobState::Completed => state_str.green(),
        JobState::Failed => state_str.red(),
    }
}
