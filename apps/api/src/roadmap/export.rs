//! Stateless HTML formatting for the downloadable skill-match report.
//!
//! Consumes the typed `Roadmap` from the shared parser; no line scanning
//! happens here.

use chrono::Utc;

use crate::analysis::skill_match::{compatibility_label, SkillReport};
use crate::roadmap::Roadmap;

/// Escapes text for safe interpolation into HTML body and attribute positions.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the roadmap outline as nested week/day/resource markup.
pub fn render_roadmap_html(roadmap: &Roadmap) -> String {
    let mut html = String::new();
    for week in &roadmap.weeks {
        html.push_str(&format!(
            r#"<div class="week"><div class="week-header">{}: {}</div>"#,
            escape_html(&week.title),
            escape_html(&week.subtitle)
        ));
        for day in &week.days {
            html.push_str(&format!(
                r#"<div class="day"><div class="day-title">{}</div>"#,
                escape_html(&day.title)
            ));
            if !day.duration.is_empty() {
                html.push_str(&format!(
                    r#"<div class="day-duration">⏱️ {}</div>"#,
                    escape_html(&day.duration)
                ));
            }
            for resource in &day.resources {
                html.push_str(&format!(
                    r#"<div class="resource">📚 {} <a href="{}">→ Reference</a></div>"#,
                    escape_html(&resource.topic),
                    escape_html(&resource.link)
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }
    html
}

fn skill_column(heading: &str, class: &str, skills: &[String]) -> String {
    let items: String = skills
        .iter()
        .map(|s| format!(r#"<div class="skill-item {class}">{}</div>"#, escape_html(s)))
        .collect();
    format!(
        r#"<div class="skill-card"><h3>{heading} ({})</h3>{items}</div>"#,
        skills.len()
    )
}

/// Renders the full standalone report document: match score, the three skill
/// columns, and the parsed roadmap. The caller serves it as `text/html`; the
/// user prints it to PDF from the browser.
pub fn render_report_html(report: &SkillReport) -> String {
    let roadmap = crate::roadmap::parse(&report.roadmap);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Skill Match Report - {pct:.1}%</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif; line-height: 1.6; color: #1e293b; max-width: 900px; margin: 0 auto; padding: 40px 20px; }}
h1 {{ color: #4f46e5; font-size: 32px; margin-bottom: 8px; }}
h2 {{ color: #334155; font-size: 24px; margin-top: 40px; border-bottom: 3px solid #4f46e5; padding-bottom: 8px; }}
.score-box {{ text-align: center; border: 2px solid #e2e8f0; border-radius: 12px; padding: 24px; margin: 24px 0; }}
.score {{ font-size: 48px; font-weight: bold; color: #4f46e5; }}
.skills-grid {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }}
.skill-card {{ border: 1px solid #e2e8f0; border-radius: 8px; padding: 20px; background: #f8fafc; }}
.skill-item {{ padding: 8px 12px; margin: 6px 0; border-radius: 6px; font-size: 14px; font-family: 'Courier New', monospace; }}
.matched {{ background: #d1fae5; color: #065f46; }}
.missing {{ background: #fee2e2; color: #991b1b; }}
.extra {{ background: #dbeafe; color: #1e40af; }}
.week {{ border: 2px solid #e2e8f0; border-radius: 12px; margin: 30px 0; padding: 20px; }}
.week-header {{ font-size: 22px; font-weight: bold; color: #4f46e5; margin-bottom: 16px; }}
.day {{ border-left: 4px solid #4f46e5; padding-left: 16px; margin: 20px 0; }}
.day-title {{ font-weight: bold; color: #1e293b; margin-bottom: 8px; }}
.day-duration {{ color: #64748b; font-size: 14px; margin-bottom: 8px; }}
.resource {{ padding: 6px 0; color: #475569; font-size: 14px; }}
.resource a {{ color: #4f46e5; text-decoration: none; font-weight: 600; }}
.footer {{ margin-top: 60px; padding-top: 20px; border-top: 2px solid #e2e8f0; text-align: center; color: #94a3b8; font-size: 14px; }}
</style>
</head>
<body>
<h1>🎯 Skill Match Report</h1>
<p>Generated on {date}</p>
<div class="score-box">
<div>Your Match Score</div>
<div class="score">{pct:.1}%</div>
<div class="message">{label}</div>
</div>
<h2>📊 Skills Analysis</h2>
<div class="skills-grid">
{matched}
{missing}
{extra}
</div>
<div class="roadmap">
<h2>🗺️ Your Learning Roadmap</h2>
{roadmap_html}
</div>
<div class="footer">
<p>Generated by Skill Matcher | Keep learning and growing! 🚀</p>
</div>
</body>
</html>
"#,
        pct = report.match_percentage,
        date = Utc::now().format("%Y-%m-%d"),
        label = compatibility_label(report.match_percentage),
        matched = skill_column("✓ Matched Skills", "matched", &report.matched),
        missing = skill_column("✗ Missing Skills", "missing", &report.missing),
        extra = skill_column("+ Extra Skills", "extra", &report.extra),
        roadmap_html = render_roadmap_html(&roadmap),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::parse;

    fn sample_report() -> SkillReport {
        SkillReport {
            matched: vec!["Rust".to_string()],
            missing: vec!["Kubernetes".to_string()],
            extra: vec!["Photoshop".to_string()],
            match_percentage: 50.0,
            roadmap: "## Week 1: Basics\n### Day 1: Start\n- Time: 2 hours\n- Pods | https://example.com/pods".to_string(),
        }
    }

    #[test]
    fn test_roadmap_html_contains_parsed_structure() {
        let roadmap = parse(&sample_report().roadmap);
        let html = render_roadmap_html(&roadmap);
        assert!(html.contains(r#"<div class="week-header">Week 1: Basics</div>"#));
        assert!(html.contains(r#"<div class="day-title">Start</div>"#));
        assert!(html.contains("⏱️ 2 hours"));
        assert!(html.contains(r#"<a href="https://example.com/pods">"#));
    }

    #[test]
    fn test_roadmap_html_escapes_markup() {
        let roadmap = parse("## Week 1: <b>Bold</b>\n### Day 1: X\n- a & b | https://e.com/?x=1&y=2");
        let html = render_roadmap_html(&roadmap);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_unstructured_roadmap_still_renders_fallback_week() {
        let roadmap = parse("nothing to see here");
        let html = render_roadmap_html(&roadmap);
        assert!(html.contains("Week 1: Getting Started"));
        assert!(html.contains("Review the complete roadmap details"));
        assert!(html.contains("⏱️ Self-paced"));
    }

    #[test]
    fn test_report_document_sections() {
        let html = render_report_html(&sample_report());
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("50.0%"));
        assert!(html.contains("Moderate Compatibility."));
        assert!(html.contains("✓ Matched Skills (1)"));
        assert!(html.contains("✗ Missing Skills (1)"));
        assert!(html.contains("+ Extra Skills (1)"));
        assert!(html.contains(r#"<div class="skill-item matched">Rust</div>"#));
        assert!(html.contains("Week 1: Basics"));
    }
}
