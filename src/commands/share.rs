use std::fmt::Write as _;

use crate::profile::UserProfile;
use crate::services::cycle::CycleProjection;
use crate::services::dates;

/// Plain-text health summary for manual sharing with a health worker.
/// Fixed format, no machine-readable schema; the front end puts it on the
/// clipboard.

fn num_or_na(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

pub fn health_summary(profile: &UserProfile, projection: &CycleProjection) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "**Health Summary**");
    let _ = writeln!(out, "Age: {}", profile.age);
    let _ = writeln!(out, "Average Cycle: {} days", num_or_na(profile.cycle_length));
    let _ = writeln!(out, "Average Period: {} days", num_or_na(profile.period_length));
    let _ = writeln!(out);

    let _ = writeln!(out, "**Current Cycle**");
    let _ = writeln!(
        out,
        "Last Period Start: {}",
        dates::display_or_na(profile.last_period_date.as_deref())
    );
    let _ = writeln!(
        out,
        "Estimated Next Period: {}",
        dates::format_display(projection.next_period_start)
    );
    let _ = writeln!(
        out,
        "Estimated Fertile Window: {} - {}",
        dates::format_display(projection.fertile_start),
        dates::format_display(projection.fertile_end)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "**Recent Logs:**");
    let recent_from = profile.symptoms_log.len().saturating_sub(3);
    let recent = &profile.symptoms_log[recent_from..];
    if recent.is_empty() {
        let _ = writeln!(out, "No recent logs.");
    } else {
        for entry in recent {
            let _ = writeln!(out, "- **{}:**", dates::display_or_na(Some(&entry.date)));
            let _ = writeln!(
                out,
                "  Mood: {}",
                entry
                    .mood
                    .map_or_else(|| "N/A".to_string(), |mood| mood.to_string())
            );
            let _ = writeln!(
                out,
                "  Symptoms: {}",
                if entry.symptoms.is_empty() {
                    "N/A".to_string()
                } else {
                    entry.symptoms.join(", ")
                }
            );
            let _ = writeln!(
                out,
                "  Cravings: {}",
                entry
                    .cravings
                    .map_or_else(|| "N/A".to_string(), |craving| craving.to_string())
            );
        }
    }

    out.trim_end().to_string()
}
