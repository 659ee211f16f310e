//! Roadmap parser — turns the LLM's loosely-structured roadmap text into a typed
//! outline (weeks → days → timed resource lists).
//!
//! The upstream generator is an LLM, so the input is markdown-ish at best. The
//! parser is total: any line it does not recognize is ignored, and an input with
//! no recognizable structure degrades to a single placeholder week rather than
//! an empty outline. No call ever fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Week header: one or two `#`, the word "Week", a number.
static WEEK_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^#{1,2}\s*Week\s*\d+").unwrap());
static WEEK_CAPTURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Week\s*(\d+)[:\s]*(.*)$").unwrap());

/// Day header: one to three `#`, the word "Day", a number. Checked only after
/// the week pattern has failed, so precedence (not `#` count) disambiguates.
static DAY_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^#{1,3}\s*Day\s*\d+").unwrap());
static DAY_CAPTURE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Day\s*(\d+)[:\s]*(.*)$").unwrap());

/// Bulleted "Time:" line. Bullets may be an ASCII hyphen or an en-dash.
static TIME_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[-–]\s*Time:").unwrap());
static TIME_CAPTURE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Time:\s*(.+)$").unwrap());

/// Bulleted resource line: `- <topic> | <link>`.
static RESOURCE_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-–]\s*.+\|.+").unwrap());
static BULLET_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-–]\s*").unwrap());

const DEFAULT_WEEK_SUBTITLE: &str = "Focus Period";

const FALLBACK_WEEK_TITLE: &str = "Week 1";
const FALLBACK_WEEK_SUBTITLE: &str = "Getting Started";
const FALLBACK_DAY_TITLE: &str = "Review the complete roadmap details";
const FALLBACK_DAY_DURATION: &str = "Self-paced";

/// A learning topic and its reference URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub topic: String,
    pub link: String,
}

/// One day of the roadmap: a title, an optional duration label, and an ordered
/// resource list. `duration` stays empty until a "Time:" line is seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub title: String,
    pub duration: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub title: String,
    pub subtitle: String,
    pub days: Vec<Day>,
}

/// Ordered outline of the whole roadmap. Never empty: parsing synthesizes a
/// placeholder week when no week header is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub weeks: Vec<Week>,
}

/// Scan state for the single left-to-right pass: the closed weeks plus the two
/// entities currently under construction.
#[derive(Default)]
struct Scan {
    weeks: Vec<Week>,
    open_week: Option<Week>,
    open_day: Option<Day>,
}

impl Scan {
    /// Classifies one trimmed line and applies its action. First match wins;
    /// unrecognized lines are ignored.
    fn step(&mut self, line: &str) {
        if WEEK_HEADER_RE.is_match(line) {
            self.flush_day();
            self.flush_week();
            self.open_week = Some(self.new_week(line));
        } else if DAY_HEADER_RE.is_match(line) {
            // A day open with no open week is dropped here, not recovered.
            self.flush_day();
            self.open_day = Some(new_day(line));
        } else if TIME_LINE_RE.is_match(line) {
            if let Some(day) = self.open_day.as_mut() {
                if let Some(caps) = TIME_CAPTURE_RE.captures(line) {
                    day.duration = caps[1].trim().to_string();
                }
            }
        } else if self.open_day.is_some() && RESOURCE_LINE_RE.is_match(line) {
            let body = BULLET_PREFIX_RE.replace(line, "");
            let mut parts = body.splitn(3, '|');
            if let (Some(topic), Some(link)) = (parts.next(), parts.next()) {
                // Segments past the second `|` are discarded.
                if let Some(day) = self.open_day.as_mut() {
                    day.resources.push(Resource {
                        topic: topic.trim().to_string(),
                        link: link.trim().to_string(),
                    });
                }
            }
        }
    }

    fn new_week(&self, line: &str) -> Week {
        match WEEK_CAPTURE_RE.captures(line) {
            Some(caps) => {
                let subtitle = caps[2].trim();
                Week {
                    title: format!("Week {}", &caps[1]),
                    subtitle: if subtitle.is_empty() {
                        DEFAULT_WEEK_SUBTITLE.to_string()
                    } else {
                        subtitle.to_string()
                    },
                    days: Vec::new(),
                }
            }
            None => Week {
                title: format!("Week {}", self.weeks.len() + 1),
                subtitle: DEFAULT_WEEK_SUBTITLE.to_string(),
                days: Vec::new(),
            },
        }
    }

    fn flush_day(&mut self) {
        if let Some(day) = self.open_day.take() {
            if let Some(week) = self.open_week.as_mut() {
                week.days.push(day);
            }
        }
    }

    fn flush_week(&mut self) {
        if let Some(week) = self.open_week.take() {
            self.weeks.push(week);
        }
    }

    fn finish(mut self) -> Vec<Week> {
        self.flush_day();
        self.flush_week();
        self.weeks
    }
}

fn new_day(line: &str) -> Day {
    let title = DAY_CAPTURE_RE
        .captures(line)
        .map(|caps| caps[2].trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| line.to_string());
    Day {
        title,
        duration: String::new(),
        resources: Vec::new(),
    }
}

fn fallback_week() -> Week {
    Week {
        title: FALLBACK_WEEK_TITLE.to_string(),
        subtitle: FALLBACK_WEEK_SUBTITLE.to_string(),
        days: vec![Day {
            title: FALLBACK_DAY_TITLE.to_string(),
            duration: FALLBACK_DAY_DURATION.to_string(),
            resources: Vec::new(),
        }],
    }
}

/// Parses raw roadmap text into a `Roadmap`. Total and pure: never fails,
/// never loops, returns at least one week for any input.
pub fn parse(raw: &str) -> Roadmap {
    let mut scan = Scan::default();
    for line in raw.lines() {
        scan.step(line.trim());
    }
    let mut weeks = scan.finish();
    if weeks.is_empty() {
        weeks.push(fallback_week());
    }
    Roadmap { weeks }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_WEEK_ROADMAP: &str = "\
## Week 1: Fundamentals
### Day 1: Intro
- Time: 2 hours
- Learn basics | https://example.com/a
## Week 2: Advanced
### Day 1: Practice
- Time: 4 hours
- Build project | https://example.com/b";

    #[test]
    fn test_two_week_scenario() {
        let roadmap = parse(TWO_WEEK_ROADMAP);
        assert_eq!(roadmap.weeks.len(), 2);

        let w1 = &roadmap.weeks[0];
        assert_eq!(w1.title, "Week 1");
        assert_eq!(w1.subtitle, "Fundamentals");
        assert_eq!(w1.days.len(), 1);
        assert_eq!(w1.days[0].title, "Intro");
        assert_eq!(w1.days[0].duration, "2 hours");
        assert_eq!(
            w1.days[0].resources,
            vec![Resource {
                topic: "Learn basics".to_string(),
                link: "https://example.com/a".to_string(),
            }]
        );

        let w2 = &roadmap.weeks[1];
        assert_eq!(w2.title, "Week 2");
        assert_eq!(w2.subtitle, "Advanced");
        assert_eq!(w2.days[0].title, "Practice");
        assert_eq!(w2.days[0].duration, "4 hours");
        assert_eq!(w2.days[0].resources[0].topic, "Build project");
        assert_eq!(w2.days[0].resources[0].link, "https://example.com/b");
    }

    #[test]
    fn test_empty_input_yields_fallback() {
        let roadmap = parse("");
        assert_eq!(roadmap.weeks.len(), 1);
        let week = &roadmap.weeks[0];
        assert_eq!(week.title, "Week 1");
        assert_eq!(week.subtitle, "Getting Started");
        assert_eq!(week.days.len(), 1);
        assert_eq!(week.days[0].title, "Review the complete roadmap details");
        assert_eq!(week.days[0].duration, "Self-paced");
        assert!(week.days[0].resources.is_empty());
    }

    #[test]
    fn test_fallback_is_deterministic_for_unstructured_input() {
        let prose = "Great! You already have all the required skills.\nKeep building.";
        assert_eq!(parse(prose), parse(prose));
        assert_eq!(parse(prose), parse(""));
    }

    #[test]
    fn test_totality_on_garbage() {
        for input in [
            "\0\x01\x02 binary \x7f garbage",
            "   \n\t\n   ",
            "|||||",
            "###",
            "- Time:",
            "## Week",
        ] {
            let roadmap = parse(input);
            assert!(!roadmap.weeks.is_empty());
            assert!(!roadmap.weeks[0].days.is_empty());
        }
    }

    #[test]
    fn test_week_order_matches_input_order() {
        let input = "## Week 3: C\n## Week 1: A\n## Week 2: B";
        let roadmap = parse(input);
        let titles: Vec<&str> = roadmap.weeks.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["Week 3", "Week 1", "Week 2"]);
    }

    #[test]
    fn test_resource_extra_segments_discarded() {
        let input = "## Week 1: X\n### Day 1: Y\n- Learn X | https://example.com/x | extra";
        let roadmap = parse(input);
        let resources = &roadmap.weeks[0].days[0].resources;
        assert_eq!(
            resources,
            &vec![Resource {
                topic: "Learn X".to_string(),
                link: "https://example.com/x".to_string(),
            }]
        );
    }

    #[test]
    fn test_duration_capture() {
        let input = "## Week 1: X\n### Day 1: Y\n- Time: 3-4 hours";
        let roadmap = parse(input);
        assert_eq!(roadmap.weeks[0].days[0].duration, "3-4 hours");
    }

    #[test]
    fn test_end_of_input_flush() {
        let input = "## Week 1: X\n### Day 1: Y\n- Learn Z | https://example.com/z";
        let roadmap = parse(input);
        assert_eq!(roadmap.weeks.len(), 1);
        assert_eq!(roadmap.weeks[0].days.len(), 1);
        assert_eq!(roadmap.weeks[0].days[0].resources.len(), 1);
    }

    #[test]
    fn test_en_dash_bullets() {
        let input = "## Week 1: X\n### Day 1: Y\n– Time: 1 hour\n– Topic A | https://example.com/a";
        let roadmap = parse(input);
        let day = &roadmap.weeks[0].days[0];
        assert_eq!(day.duration, "1 hour");
        assert_eq!(day.resources[0].topic, "Topic A");
    }

    #[test]
    fn test_week_without_subtitle_gets_default() {
        let roadmap = parse("## Week 1\n### Day 1: Y");
        assert_eq!(roadmap.weeks[0].subtitle, "Focus Period");
    }

    #[test]
    fn test_day_without_title_keeps_header_line() {
        let roadmap = parse("## Week 1: X\n### Day 2");
        assert_eq!(roadmap.weeks[0].days[0].title, "### Day 2");
    }

    #[test]
    fn test_day_before_any_week_is_dropped() {
        let input = "### Day 1: Orphan\n- Time: 1 hour\n- Lost | https://example.com/lost\n## Week 1: X\n### Day 1: Kept";
        let roadmap = parse(input);
        assert_eq!(roadmap.weeks.len(), 1);
        assert_eq!(roadmap.weeks[0].days.len(), 1);
        assert_eq!(roadmap.weeks[0].days[0].title, "Kept");
    }

    #[test]
    fn test_three_hash_week_header_is_ignored() {
        // Week headers allow at most two `#`; three means this line is neither
        // a week nor a day header.
        let roadmap = parse("### Week 1: Not a week");
        assert_eq!(roadmap.weeks[0].subtitle, "Getting Started");
    }

    #[test]
    fn test_single_segment_bullet_is_ignored() {
        let input = "## Week 1: X\n### Day 1: Y\n- No pipe here";
        let roadmap = parse(input);
        assert!(roadmap.weeks[0].days[0].resources.is_empty());
    }

    #[test]
    fn test_time_line_outside_day_is_ignored() {
        let input = "## Week 1: X\n- Time: 5 hours\n### Day 1: Y";
        let roadmap = parse(input);
        assert_eq!(roadmap.weeks[0].days[0].duration, "");
    }

    #[test]
    fn test_resource_order_within_day() {
        let input = "## Week 1: X\n### Day 1: Y\n- A | https://a\n- B | https://b\n- C | https://c";
        let roadmap = parse(input);
        let topics: Vec<&str> = roadmap.weeks[0].days[0]
            .resources
            .iter()
            .map(|r| r.topic.as_str())
            .collect();
        assert_eq!(topics, ["A", "B", "C"]);
    }

    #[test]
    fn test_case_insensitive_headers() {
        let roadmap = parse("## WEEK 1: Loud\n### day 1: quiet");
        assert_eq!(roadmap.weeks[0].title, "Week 1");
        assert_eq!(roadmap.weeks[0].days[0].title, "quiet");
    }
}
