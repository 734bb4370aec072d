use colored::*;
use serde_json::Value;

use crate::constants::TIMESTAMP_CLAIMS;
use crate::types::{Output, Status};

pub fn print_output(format: &str, output: &Output) {
    match output.status {
        Status::Decoded => println!("{}", render(format, output)),
        Status::Unreadable => eprintln!("{}", render(format, output)),
    }
}

pub fn render(format: &str, output: &Output) -> String {
    match format {
        "json" => serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string()),
        _ => render_text(output),
    }
}

fn render_text(output: &Output) -> String {
    let mut report = String::new();
    let claims = match (&output.status, &output.claims) {
        (Status::Decoded, Some(claims)) => claims,
        _ => {
            report.push_str(&format!("{} {}", "[!]".red(), output.detail.red()));
            return report;
        }
    };

    if let Some(header) = output.header.as_ref().and_then(Value::as_object) {
        report.push_str(&format!("{}", "Token header values:\n".yellow()));
        for (key, value) in header {
            report.push_str(&format!("[+] {} = {}\n", key, value.to_string().bright_blue()));
        }
        report.push('\n');
    }

    report.push_str(&format!("{}", "Token payload values:\n".yellow()));
    for (key, value) in claims {
        report.push_str(&format!("[+] {} = {}", key, value.to_string().bright_blue()));
        let stamp = TIMESTAMP_CLAIMS
            .iter()
            .find(|(field, _)| *field == key.as_str())
            .and_then(|(_, label)| value.as_i64().and_then(decode_timestamp).map(|t| (label, t)));
        if let Some((label, time)) = stamp {
            report.push_str(&format!("    ==> {} = {}", label, time.bright_blue()));
        }
        report.push('\n');
    }

    if let Some(identity) = &output.identity {
        report.push_str(&format!("{}", "\nIdentity:\n".yellow()));
        report.push_str(&format!(
            "[+] user id = {}\n",
            identity.user_id.as_deref().unwrap_or("-").green()
        ));
        report.push_str(&format!(
            "[+] email = {}\n",
            identity.email.as_deref().unwrap_or("-").green()
        ));
    }

    report.push_str(&format!("\n{} {}", "[-]".yellow(), output.detail));
    report
}

fn decode_timestamp(timestamp: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.format("%Y-%m-%d %H:%M:%S (UTC)").to_string())
}
