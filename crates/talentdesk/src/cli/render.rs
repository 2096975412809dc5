//! # Rendering Module
//!
//! Turns library results into terminal text. Layout math (column widths,
//! truncation, padding) is Unicode-aware via `unicode-width`, since player and
//! template names are free text. Colors come from [`super::styles`].
//!
//! Every renderer returns a `String`; printing is left to the caller so the
//! same output can go to stdout or into a session transcript.

use super::styles;
use console::{Style, StyledObject};
use serde::Serialize;
use talentdeskapp::analysis::{AnalysisResult, TemplateSummary};
use talentdeskapp::commands::dashboard::DashboardSummary;
use talentdeskapp::commands::{CmdMessage, CmdResult, Entity, MessageLevel};
use talentdeskapp::navigation::{NavigationState, ResolvedView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest any single column may get before truncation.
pub const MAX_COLUMN_WIDTH: usize = 42;
const ELLIPSIS: char = '…';

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => styles::info(),
            MessageLevel::Success => styles::success(),
            MessageLevel::Warning => styles::warning(),
            MessageLevel::Error => styles::error(),
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

/// Listing table (if any) followed by messages.
pub fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();
    if let Some(first) = result.listed.first() {
        out.push_str(&render_entities(first, &result.listed));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

/// Output for a listing that came back empty.
pub fn render_empty(what: &str) -> String {
    let message = format!("No {} to show.", what);
    format!("{}\n", styles::muted().apply_to(message))
}

struct Cell {
    text: String,
    style: Style,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::new())
    }

    fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn id(text: &str) -> Self {
        Self::styled(text, styles::id())
    }

    fn score(value: f64) -> Self {
        Self::styled(format!("{:.1}", value), styles::score(value))
    }

    fn stage(label: &str) -> Self {
        Self::styled(label, styles::stage(label))
    }
}

fn yes_no(flag: bool) -> Cell {
    if flag {
        Cell::styled("yes", styles::success())
    } else {
        Cell::styled("no", styles::muted())
    }
}

fn render_entities(first: &Entity, entities: &[Entity]) -> String {
    #[rustfmt::skip]
    let headers: &[&str] = match first {
        Entity::Template(_) => &["ID", "NAME", "TYPE", "SPORT", "EX", "MIN", "ASSIGNED", "AVG", "ACTIVE"],
        Entity::Exercise(_) => &["ID", "NAME", "SPORT", "DIFFICULTY", "METRICS", "SUBMISSIONS", "AVG"],
        Entity::Candidate(_) => &["ID", "NAME", "SPORT", "SCORE", "STATUS"],
        Entity::PipelineEntry(_) => &["ID", "NAME", "SPORT", "SCORE", "STAGE", "OWNER"],
        Entity::Player(_) => &["ID", "NAME", "AGE", "LOCATION", "SPORT", "VIDEOS", "AVG", "POOL", "ACTIVE"],
        Entity::PendingVideo(_) => &["ID", "PLAYER", "EXERCISE", "SUBMITTED"],
        Entity::CompletedVideo(_) => &["ID", "PLAYER", "EXERCISE", "SCORE", "REVIEWED"],
        Entity::FlaggedVideo(_) => &["ID", "PLAYER", "REASON", "FLAGGED"],
        Entity::Notification(_) => &["TIME", "TYPE", "MESSAGE"],
    };
    let rows = entities.iter().map(entity_row).collect();
    render_table(headers, rows)
}

fn entity_row(entity: &Entity) -> Vec<Cell> {
    match entity {
        Entity::Template(t) => vec![
            Cell::id(&t.id),
            Cell::styled(&t.name, styles::title()),
            Cell::plain(t.template_type.as_str()),
            Cell::plain(&t.sport),
            Cell::plain(t.exercises.to_string()),
            Cell::plain(t.duration.to_string()),
            Cell::plain(t.assignments.to_string()),
            Cell::score(t.avg_score),
            yes_no(t.is_active),
        ],
        Entity::Exercise(e) => vec![
            Cell::id(&e.id),
            Cell::styled(&e.name, styles::title()),
            Cell::plain(&e.sport),
            Cell::plain(e.difficulty.as_str()),
            Cell::plain(e.metrics.iter().cloned().collect::<Vec<_>>().join(", ")),
            Cell::plain(e.submissions.to_string()),
            Cell::score(e.avg_score),
        ],
        Entity::Candidate(c) => vec![
            Cell::id(&c.id),
            Cell::plain(&c.name),
            Cell::plain(&c.sport),
            Cell::score(c.score),
            Cell::stage(c.status.as_str()),
        ],
        Entity::PipelineEntry(p) => vec![
            Cell::id(&p.id),
            Cell::plain(&p.name),
            Cell::plain(&p.sport),
            Cell::score(p.score),
            Cell::stage(p.status.as_str()),
            match &p.owner {
                Some(owner) => Cell::plain(owner),
                None => Cell::styled("-", styles::muted()),
            },
        ],
        Entity::Player(p) => vec![
            Cell::id(&p.id),
            Cell::plain(&p.name),
            Cell::plain(p.age.to_string()),
            Cell::plain(&p.location),
            Cell::plain(&p.primary_sport),
            Cell::plain(p.total_videos.to_string()),
            Cell::score(p.average_score),
            yes_no(p.in_talent_pool),
            Cell::styled(&p.last_active, styles::muted()),
        ],
        Entity::PendingVideo(v) => vec![
            Cell::id(&v.id),
            Cell::plain(&v.player),
            Cell::plain(&v.exercise),
            Cell::styled(&v.submitted, styles::muted()),
        ],
        Entity::CompletedVideo(v) => vec![
            Cell::id(&v.id),
            Cell::plain(&v.player),
            Cell::plain(&v.exercise),
            Cell::score(v.score),
            Cell::styled(&v.reviewed_on, styles::muted()),
        ],
        Entity::FlaggedVideo(v) => vec![
            Cell::id(&v.id),
            Cell::plain(&v.player),
            Cell::styled(&v.reason, styles::warning()),
            Cell::styled(&v.flagged_on, styles::muted()),
        ],
        Entity::Notification(n) => {
            let message_style = if n.read { Style::new() } else { styles::unread() };
            vec![
                Cell::styled(&n.created_at, styles::muted()),
                Cell::plain(n.kind.as_deref().unwrap_or("-")),
                Cell::styled(&n.message, message_style),
            ]
        }
    }
}

/// Truncate `text` to at most `width` display columns.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

fn pad(styled: StyledObject<String>, visible: usize, width: usize) -> String {
    format!("{}{}", styled, " ".repeat(width.saturating_sub(visible)))
}

fn render_table(headers: &[&str], rows: Vec<Vec<Cell>>) -> String {
    let rows: Vec<Vec<Cell>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|c| Cell::styled(truncate_to_width(&c.text, MAX_COLUMN_WIDTH), c.style))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.text.width());
        }
    }

    let mut out = String::new();
    let last = headers.len() - 1;
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let styled = styles::header().apply_to(h.to_string());
            if i == last {
                styled.to_string()
            } else {
                pad(styled, h.width(), widths[i])
            }
        })
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let visible = cell.text.width();
                let styled = cell.style.apply_to(cell.text);
                if i == last {
                    styled.to_string()
                } else {
                    pad(styled, visible, widths[i])
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    let average = summary
        .average_review_score
        .map(|s| styles::score(s).apply_to(format!("{:.2}", s)).to_string())
        .unwrap_or_else(|| styles::muted().apply_to("-").to_string());
    let lines = [
        (
            "Templates",
            format!(
                "{} active / {}",
                summary.active_templates, summary.total_templates
            ),
        ),
        ("Assignments", summary.total_assignments.to_string()),
        ("Exercises", summary.exercises.to_string()),
        (
            "Players",
            format!(
                "{} ({} in talent pool)",
                summary.players, summary.talent_pool
            ),
        ),
        ("Candidates", summary.candidates.to_string()),
        (
            "Videos",
            format!(
                "{} pending, {} completed, {} flagged",
                summary.pending_videos, summary.completed_videos, summary.flagged_videos
            ),
        ),
        ("Avg review", average),
        ("Unread", summary.unread_notifications.to_string()),
    ];
    let label_width = lines.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    let mut out = format!("{}\n", styles::title().apply_to("Dashboard"));
    for (label, value) in lines {
        let label_cell = styles::muted().apply_to(label.to_string());
        out.push_str(&format!(
            "  {}  {}\n",
            pad(label_cell, label.width(), label_width),
            value
        ));
    }
    out
}

pub fn render_navigation(state: &NavigationState, view: &ResolvedView) -> String {
    let mut out = String::new();
    let current = match view.sub_item {
        Some(sub) => format!("{} › {}", view.section.label, sub.label),
        None => view.section.label.to_string(),
    };
    let viewing = styles::muted().apply_to("Viewing:");
    out.push_str(&format!("{} {}\n", viewing, styles::title().apply_to(current)));
    if view.section.id != state.active_section {
        out.push_str(&format!(
            "{}\n",
            styles::warning().apply_to(format!(
                "Unknown section '{}', showing {}",
                state.active_section, view.section.label
            ))
        ));
    }
    let expanded: Vec<&str> = state.expanded_items.iter().map(String::as_str).collect();
    let label = styles::muted().apply_to("Expanded:");
    out.push_str(&format!("{} {}\n", label, expanded.join(", ")));
    if let Some(player) = &state.selected_player_id {
        let label = styles::muted().apply_to("Player:");
        out.push_str(&format!("{} {}\n", label, styles::id().apply_to(player)));
    }
    out
}

pub fn render_remote_templates(templates: &[TemplateSummary]) -> String {
    let rows = templates
        .iter()
        .map(|t| {
            vec![
                Cell::id(&t.id),
                Cell::styled(&t.name, styles::title()),
                Cell::styled(t.description.clone().unwrap_or_default(), styles::muted()),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "DESCRIPTION"], rows)
}

pub fn render_analysis(result: &AnalysisResult) -> String {
    let similarity = result.overall_similarity;
    let similarity_style = styles::score(similarity / 10.0);
    let mut out = format!(
        "{} {}\n",
        styles::title().apply_to("Analysis"),
        styles::muted().apply_to(&result.session_id)
    );
    out.push_str(&format!(
        "  Similarity  {}\n  Frames      {}\n  Duration    {:.1}s\n",
        similarity_style.apply_to(format!("{:.1}%", similarity)),
        result.total_frames,
        result.analysis_duration
    ));
    if !result.recommendations.is_empty() {
        out.push_str(&format!("{}\n", styles::title().apply_to("Recommendations")));
        for (i, rec) in result.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, rec));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentdeskapp::api::TalentApi;
    use talentdeskapp::commands::get::TemplateFilter;
    use talentdeskapp::navigation::resolve_view;

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Sprint", 10), "Sprint");
        assert_eq!(truncate_to_width("Basketball Assessment", 8), "Basketb…");
        let wide = truncate_to_width("日本語テキスト", 7);
        assert!(wide.width() <= 7);
        assert!(wide.ends_with(ELLIPSIS));
    }

    #[test]
    fn template_table_aligns_columns() {
        plain();
        let api = TalentApi::seeded();
        let out = render_result(&api.get_templates(&TemplateFilter::default()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("ID"));
        let name_col = lines[0].find("NAME").unwrap();
        assert_eq!(lines[1].find("Basketball").unwrap(), name_col);
        assert!(lines[1].contains("89"));
    }

    #[test]
    fn messages_render_in_order() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("Created template 'A'"),
            CmdMessage::warning("No template with id 'X'"),
        ]);
        assert_eq!(out, "Created template 'A'\nNo template with id 'X'\n");
    }

    #[test]
    fn dashboard_shows_counts() {
        plain();
        let api = TalentApi::seeded();
        let out = render_dashboard(&api.dashboard());
        assert!(out.contains("4 active / 5"));
        assert!(out.contains("2 pending, 2 completed, 1 flagged"));
    }

    #[test]
    fn navigation_reports_fallback() {
        plain();
        let mut nav = NavigationState::default();
        nav.set_active_section("nowhere", None);
        let out = render_navigation(&nav, &resolve_view(&nav));
        assert!(out.contains("Viewing: Dashboard"));
        assert!(out.contains("Unknown section 'nowhere'"));
    }
}
