use std::io::Write;

use crate::app::{AppContext, Result, RsrError};
use crate::domain::{Entry, Timeline};

pub async fn show_timeline(ctx: &AppContext, json: bool) -> Result<()> {
    let timeline = ctx.build_timeline().await?;

    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &timeline)?;
    } else {
        write_text(&mut out, &timeline)?;
    }

    Ok(())
}

pub fn list_sources(ctx: &AppContext) -> Result<()> {
    let sources = ctx.sources()?;

    if sources.is_empty() {
        println!("No feeds");
        return Ok(());
    }

    for source in sources.iter() {
        println!("{}", source);
    }

    Ok(())
}

fn write_text<W: Write>(out: &mut W, timeline: &Timeline) -> Result<()> {
    if timeline.is_empty() {
        writeln!(out, "No entries")?;
        return Ok(());
    }

    for entry in timeline {
        writeln!(out, "{}", format_entry(entry))?;
    }

    Ok(())
}

fn write_json<W: Write>(out: &mut W, timeline: &Timeline) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, timeline)
        .map_err(|e| RsrError::Other(format!("Failed to encode timeline: {}", e)))?;
    writeln!(out)?;
    Ok(())
}

fn format_entry(entry: &Entry) -> String {
    let date = if entry.has_published() {
        entry.published_display.as_str()
    } else {
        "                   "
    };

    format!(
        "{}  [{}] {}\n  {}",
        date,
        entry.site.display_title(&entry.site.link),
        entry.display_title(),
        entry.link
    )
}
