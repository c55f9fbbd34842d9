//! Read-only commands that query the backend and print the result.

use crate::api::KioskApi;
use crate::format;
use crate::model::Meeting;
use anyhow::{Context, Result};
use chrono::Local;

pub async fn handle_status_command(api: &dyn KioskApi) -> Result<()> {
    let settings = api.settings().await.context("Failed to load settings")?;
    let wifi = api.wifi_status().await.context("Failed to load WiFi status")?;
    let recorder = api
        .recording_status()
        .await
        .context("Failed to load recorder state")?;

    println!();
    println!("SafeScribe Status");
    println!("=================");
    println!();
    println!(
        "Setup:     {}",
        if settings.setup_complete { "complete" } else { "pending" }
    );
    println!(
        "Email:     {}",
        match (settings.email_configured, settings.email_address.as_deref()) {
            (true, Some(address)) => address,
            _ => "<not configured>",
        }
    );
    println!(
        "WiFi:      {}",
        match (wifi.connected, wifi.ssid.as_deref()) {
            (true, Some(ssid)) => ssid,
            (true, None) => "connected",
            _ => "<not connected>",
        }
    );
    println!("Recorder:  {}", recorder.state);

    Ok(())
}

pub async fn handle_meetings_command(api: &dyn KioskApi, id: Option<&str>) -> Result<()> {
    if let Some(id) = id {
        let meeting = api
            .get_meeting(id)
            .await
            .with_context(|| format!("Failed to load meeting {}", id))?;
        print_meeting(&meeting);
        return Ok(());
    }

    let list = api.list_meetings().await.context("Failed to list meetings")?;

    if list.meetings.is_empty() {
        println!("No meetings recorded yet.");
    } else {
        let now = Local::now();
        println!("Found {} meeting(s):\n", list.meetings.len());
        for meeting in &list.meetings {
            let state = if meeting.is_processing() {
                " [processing]"
            } else if meeting.emailed {
                " [emailed]"
            } else {
                ""
            };
            println!(
                "{}  {}  {}  {}{}",
                meeting.id,
                format::relative_date(&meeting.created_at, now),
                format::list_duration(meeting.duration),
                meeting.display_title().unwrap_or("Meeting"),
                state
            );
        }
    }

    if let (Some(used), Some(total)) = (list.storage_used_mb, list.storage_total_mb) {
        println!();
        println!("Storage: {}", format::storage_free(used, total));
    }

    Ok(())
}

pub async fn handle_transcript_command(api: &dyn KioskApi) -> Result<()> {
    let res = api.transcript().await.context("Failed to load transcript")?;
    if res.transcript.trim().is_empty() {
        println!("No transcript available.");
    } else {
        println!("{}", res.transcript);
    }
    Ok(())
}

fn print_meeting(meeting: &Meeting) {
    println!();
    println!("{}", meeting.display_title().unwrap_or("Meeting"));
    println!("{}", "=".repeat(meeting.display_title().unwrap_or("Meeting").chars().count()));
    println!();
    println!("ID:        {}", meeting.id);
    println!("Recorded:  {}", format::absolute_date(&meeting.created_at));
    println!("Length:    {}", format::detail_duration(meeting.duration));
    println!("Size:      {}", format::megabytes(meeting.total_size_mb()));
    if meeting.is_processing() {
        println!("Status:    processing");
    }
    if meeting.emailed {
        let when = meeting
            .emailed_at
            .as_deref()
            .map(format::absolute_date)
            .unwrap_or_else(|| "yes".to_string());
        println!("Emailed:   {}", when);
    }

    if let Some(summary) = meeting.summary.as_deref().filter(|s| !s.is_empty()) {
        println!();
        println!("Summary:");
        println!("{}", summary);
    }
    print_list("Action items", &meeting.action_items);
    print_list("Decisions", &meeting.decisions);
    print_list("Topics", &meeting.topics);
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}:", heading);
    for item in items {
        println!("  - {}", item);
    }
}
