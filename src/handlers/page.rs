//! Dashboard HTML

use std::fmt::Write;

use crate::inference::interpret::{ConfidenceTier, Verdict};
use crate::inference::PredictionView;
use crate::models::{Encryption, Protocol, SessionInput};

pub const FAILURE_NOTICE: &str = "API request failed. Please check the API URL.";

/// What the result area shows
#[derive(Debug)]
pub enum ResultArea<'a> {
    Empty,
    Prediction(&'a PredictionView),
    Failure,
    Invalid(&'a str),
}

pub fn render(input: &SessionInput, result: ResultArea<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(HEAD);
    html.push_str("<h1>Intrusion Detection Dashboard</h1>\n");
    html.push_str("<h3>Intrusion Detection Prediction</h3>\n");
    render_form(&mut html, input);
    render_result(&mut html, &result);
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn render_form(html: &mut String, input: &SessionInput) {
    html.push_str("<form method=\"post\" action=\"/predict\">\n");

    select(html, "protocol_type", "Protocol Type",
        Protocol::ALL.iter().map(|p| (p.as_str(), *p == input.protocol_type)));
    select(html, "encryption_used", "Encryption Used",
        Encryption::ALL.iter().map(|e| (e.as_str(), *e == input.encryption_used)));

    number(html, "packet_size", "Network Packet Size", &input.packet_size.to_string(), "1");
    number(html, "login_attempts", "Login Attempts", &input.login_attempts.to_string(), "1");
    number(html, "session_duration", "Session Duration", &real(input.session_duration), "any");
    number(html, "ip_reputation", "IP Reputation Score", &real(input.ip_reputation), "any");
    number(html, "failed_logins", "Failed Logins", &input.failed_logins.to_string(), "1");

    let _ = writeln!(
        html,
        "<label><input type=\"checkbox\" name=\"unusual_access\" value=\"true\"{}> Unusual Time Access</label>",
        if input.unusual_access { " checked" } else { "" }
    );

    html.push_str("<button type=\"submit\">Predict Attack</button>\n</form>\n");
}

fn render_result(html: &mut String, result: &ResultArea<'_>) {
    match result {
        ResultArea::Empty => {}
        ResultArea::Failure => {
            let _ = writeln!(html, "<div class=\"notice error\">{}</div>", FAILURE_NOTICE);
        }
        ResultArea::Invalid(msg) => {
            let _ = writeln!(html, "<div class=\"notice error\">Invalid input: {}</div>", escape(msg));
        }
        ResultArea::Prediction(view) => {
            html.push_str("<section class=\"result\">\n");
            let _ = writeln!(
                html,
                "<p><strong>Prediction Confidence:</strong> <code>{}</code></p>",
                view.percentage
            );

            let class = match view.verdict {
                Verdict::AttackDetected => "error",
                Verdict::NoAttack => "success",
            };
            let _ = writeln!(html, "<div class=\"notice {}\">{}</div>", class, view.verdict_label);

            match view.verdict {
                Verdict::AttackDetected => {
                    html.push_str("<blockquote><strong>Why?</strong> The model flagged this session as an intrusion based on a combination of:\n<ul>\n");
                    for reason in view.explanation {
                        let _ = writeln!(html, "<li>{}</li>", reason);
                    }
                    html.push_str("</ul></blockquote>\n");
                }
                Verdict::NoAttack => {
                    let _ = writeln!(
                        html,
                        "<blockquote><strong>Why?</strong> {}</blockquote>",
                        view.explanation.join(" ")
                    );
                }
            }

            let class = match view.confidence {
                ConfidenceTier::High => "info",
                ConfidenceTier::Medium | ConfidenceTier::Low => "warning",
            };
            let _ = writeln!(html, "<div class=\"notice {}\">{}</div>", class, view.confidence_message);

            if view.is_degraded() {
                let _ = writeln!(
                    html,
                    "<p class=\"degraded\">The model response did not include {}; defaults were used.</p>",
                    view.defaulted_fields.join(", ")
                );
            }

            let _ = writeln!(html, "<p class=\"request-id\">Request {}</p>", view.request_id);
            html.push_str("</section>\n");
        }
    }
}

fn select<'a>(html: &mut String, name: &str, label: &str, options: impl Iterator<Item = (&'a str, bool)>) {
    let _ = writeln!(html, "<label>{}<select name=\"{}\">", label, name);
    for (value, selected) in options {
        let _ = writeln!(
            html,
            "<option value=\"{v}\"{s}>{v}</option>",
            v = value,
            s = if selected { " selected" } else { "" }
        );
    }
    html.push_str("</select></label>\n");
}

fn number(html: &mut String, name: &str, label: &str, value: &str, step: &str) {
    let min = if name == "ip_reputation" { "" } else { " min=\"0\"" };
    let _ = writeln!(
        html,
        "<label>{}<input type=\"number\" name=\"{}\" value=\"{}\" step=\"{}\"{}></label>",
        label, name, value, step, min
    );
}

/// Keep a decimal point so `500.0` does not render as `500`
fn real(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Intrusion Detection Dashboard</title>
<style>
body { background: #0e1117; color: #fafafa; font-family: sans-serif; }
main { max-width: 720px; margin: 2rem auto; }
label { display: block; margin: .6rem 0; }
select, input[type=number] { display: block; width: 100%; padding: .3rem; }
.notice { padding: .8rem; margin: .8rem 0; border-radius: .4rem; }
.error { background: #3e1c1c; }
.success { background: #173928; }
.info { background: #172d43; }
.warning { background: #3d3a1b; }
.degraded, .request-id { color: #a0a0a0; font-size: .85rem; }
</style>
</head>
<body>
<main>
"#;
