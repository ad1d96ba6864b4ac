use crate::config::RAPIDAPI_KEY_VAR;
use crate::probe::KeyProbeResult;
use std::io;

pub const HEADER: &str = "🔍 Debugging API Key Configuration";

/// Outcome of the last manual check against the provider's own test console.
/// Static context for whoever reads the report, not derived from the probe.
pub const VERIFICATION_NOTE: &str = "\
💡 Note: When you tested successfully on RapidAPI website, the result was:
{\"ac\": [], \"msg\": \"No error\", \"total\": 0}";

pub const MISMATCH_CHECKLIST: &str = "\
🔧 This confirms subscription is active on RapidAPI side.
🔧 If our server tests still fail, it may be:
   • Different API key being used
   • Server environment variable not updated
   • Need to restart server after key update";

/// Render a probe result into the report's lines, in fixed order.
pub fn render(result: &KeyProbeResult) -> Vec<String> {
    let mut lines = vec![HEADER.to_string(), String::new()];

    if result.present {
        lines.push(format!("✅ {} found in environment", RAPIDAPI_KEY_VAR));
        lines.push(format!(
            "📱 Key starts with: {}...",
            result.prefix_preview.as_deref().unwrap_or("")
        ));
        lines.push(format!(
            "📏 Key length: {} characters",
            result.length.unwrap_or(0)
        ));
        lines.push(format!(
            "🎯 Key ends with: ...{}",
            result.suffix_preview.as_deref().unwrap_or("")
        ));
    } else {
        lines.push(format!(
            "❌ {} not found in environment variables",
            RAPIDAPI_KEY_VAR
        ));
    }

    lines.push(String::new());
    lines.extend(VERIFICATION_NOTE.lines().map(str::to_string));
    lines.push(String::new());
    lines.extend(MISMATCH_CHECKLIST.lines().map(str::to_string));
    lines
}

pub fn write_report<W: io::Write>(out: &mut W, result: &KeyProbeResult) -> io::Result<()> {
    for line in render(result) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
