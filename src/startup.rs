use crate::availability::{availability_chips, summarize_mentor_availability, AvailabilitySummary};
use crate::config::Config;
use crate::error::Error;
use crate::volunteers::{Volunteer, VolunteerClient, VolunteerKind};
use chrono::Utc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Fetch the configured volunteer list and print who is available when
pub async fn run(config: Config) -> miette::Result<()> {
    let client = VolunteerClient::from_config(&config)?;
    let volunteers = client
        .fetch_volunteers(&config.event_id, config.volunteer_type)
        .await?;

    let selected: Vec<&Volunteer> = volunteers.iter().filter(|v| v.is_selected).collect();
    info!(
        "{} of {} {}s are selected for event {}",
        selected.len(),
        volunteers.len(),
        config.volunteer_type,
        config.event_id
    );

    if config.volunteer_type == VolunteerKind::Mentor {
        print!("{}", render_summary(&summarize_mentor_availability(&volunteers)));
    } else {
        warn!("Slot counts are only computed for mentors");
    }

    let now = Utc::now();
    for volunteer in selected {
        let available: Vec<String> = availability_chips(volunteer, now)
            .into_iter()
            .filter(|chip| chip.available_now)
            .map(|chip| chip.label)
            .collect();
        if !available.is_empty() {
            println!("Available now: {} ({})", volunteer.name, available.join(", "));
        }
    }

    Ok(())
}

/// Plain-text table of per-slot mentor counts
pub fn render_summary(summary: &AvailabilitySummary) -> String {
    if summary.is_empty() {
        return "No mentor availability data yet\n".to_string();
    }

    let width = summary
        .rows
        .iter()
        .map(|row| row.slot.text.chars().count())
        .max()
        .unwrap_or(0)
        .max("Timeslot".len());

    let mut out = format!(
        "{:<width$}  {:>5}  {:>9}  {:>6}\n",
        "Timeslot",
        "Total",
        "In-Person",
        "Remote",
        width = width
    );
    for row in &summary.rows {
        let pad = width - row.slot.text.chars().count();
        out.push_str(&format!(
            "{}{}  {:>5}  {:>9}  {:>6}\n",
            row.slot.text,
            " ".repeat(pad),
            row.total,
            row.in_person,
            row.remote
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::AvailabilityInput;

    #[test]
    fn test_render_empty_summary() {
        assert_eq!(
            render_summary(&AvailabilitySummary::default()),
            "No mentor availability data yet\n"
        );
    }

    #[test]
    fn test_render_summary_rows() {
        let volunteers = vec![Volunteer {
            name: "Ada".to_string(),
            is_selected: true,
            is_in_person: true,
            volunteer_type: Some("mentor".to_string()),
            availability: Some(AvailabilityInput::from(
                "Friday Oct 10: 🌅 Early Morning (7am - 9am PST)",
            )),
            ..Default::default()
        }];
        let rendered = render_summary(&summarize_mentor_availability(&volunteers));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Timeslot"));
        assert!(lines[1].starts_with("Friday Oct 10: 🌅 Early Morning (7am - 9am PST)"));
        let counts: Vec<&str> = lines[1].split_whitespace().rev().take(3).collect();
        assert_eq!(counts, vec!["0", "1", "1"]);
    }
}
