use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::assessment::tables::{core_value_rule, CORE_VALUE_VOCABULARY};
use crate::assessment::{Category, CategoryScores, ScoreResult, Tally};
use crate::config::ColorMode;
use crate::jobs::{RankedJob, Shortfall};
use crate::saved::{SavedEntry, SavedJobs};

/// Decide whether to color stdout for the configured mode
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

const BAR_WIDTH: usize = 20;

fn score_bar(score: i32) -> String {
    let filled = (score.clamp(0, 100) as usize * BAR_WIDTH) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format the four category scores, one per line with a bar
/// e.g. "technical        55  ###########........."
pub fn format_scores(scores: &CategoryScores, use_colors: bool) -> String {
    Category::ALL
        .iter()
        .map(|&category| {
            let score = scores.get(category);
            let label = format!("{:<15}", category.label());
            let value = format!("{:>3}", score);
            let bar = score_bar(score);
            if use_colors {
                let bar = if score >= 75 {
                    bar.green().to_string()
                } else if score >= 50 {
                    bar.yellow().to_string()
                } else {
                    bar.red().to_string()
                };
                format!("{} {}  {}", label, value.bold(), bar)
            } else {
                format!("{} {}  {}", label, value, bar)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format scores as one tab-separated line for scripting
/// Columns: technical, communication, problemSolving, teamwork
pub fn format_scores_tsv(scores: &CategoryScores) -> String {
    Category::ALL
        .iter()
        .map(|&c| scores.get(c).to_string())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Format a delta for the breakdown table: "+8", "+14.4", or "." for none
pub fn format_delta(delta: f64) -> String {
    if delta == 0.0 {
        ".".to_string()
    } else if delta.fract() == 0.0 {
        format!("{:+}", delta as i64)
    } else {
        format!("{:+.1}", delta)
    }
}

fn format_row(label: &str, values: &Tally, render: fn(f64) -> String) -> String {
    let cells: String = Category::ALL
        .iter()
        .map(|&c| format!("{:>8}", render(values.get(c))))
        .collect();
    format!("{:<34}{}", label, cells)
}

/// Format every rule that contributed to a score, followed by totals
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let header = format!(
        "{:<34}{:>8}{:>8}{:>8}{:>8}",
        "", "tech", "comm", "prob", "team"
    );
    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    lines.push(format_row(
        "Base",
        &Tally::splat(crate::assessment::tables::BASE_SCORE),
        |v| format!("{}", v),
    ));

    for contribution in &result.breakdown {
        let label = format!("{}: {}", contribution.label, contribution.description);
        lines.push(format_row(&label, &contribution.deltas, format_delta));
    }

    lines.push(format_row("Raw total", &result.raw, |v| {
        if v.fract() == 0.0 {
            format!("{}", v as i64)
        } else {
            format!("{:.1}", v)
        }
    }));

    let final_scores = Tally {
        technical: result.scores.technical as f64,
        communication: result.scores.communication as f64,
        problem_solving: result.scores.problem_solving as f64,
        teamwork: result.scores.teamwork as f64,
    };
    let final_row = format_row("Final (rounded, 20-100)", &final_scores, |v| {
        format!("{}", v as i64)
    });
    lines.push(if use_colors {
        final_row.bold().to_string()
    } else {
        final_row
    });

    lines.join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format unmet requirements: "needs technical +20, teamwork +5", or "" when none
pub fn format_shortfalls(shortfalls: &[Shortfall]) -> String {
    if shortfalls.is_empty() {
        return String::new();
    }
    let gaps = shortfalls
        .iter()
        .map(|s| format!("{} +{}", s.category, s.gap))
        .collect::<Vec<_>>()
        .join(", ");
    format!("needs {}", gaps)
}

/// Format ranked jobs as a table with columns: Index, Fit, Saved, Headline, Id, Gaps
/// Index column: 3 chars (fits "99."), right-aligned
/// Fit column: 4 chars (fits "100%"), right-aligned
pub fn format_match_table(ranked: &[RankedJob], saved: &SavedJobs, use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No job postings found.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let fit_width = 4;
    let separator = "  ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let fit_str = format!("{:>width$}", format!("{}%", entry.compatibility), width = fit_width);
            let marker = if saved.is_saved(&entry.job.id) { "*" } else { " " };
            let id = &entry.job.id;
            let gaps = format_shortfalls(&entry.shortfalls);
            let gaps_width = if gaps.is_empty() {
                0
            } else {
                separator.len() + gaps.chars().count()
            };

            // index + space + fit + marker + separators + id + gaps
            let fixed_width =
                index_width + 1 + fit_width + 1 + separator.len() * 2 + id.chars().count() + gaps_width;
            let headline = entry.job.headline();
            let headline = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_title(&headline, width - fixed_width),
                Some(_) => truncate_title(&headline, 20),
                None => headline,
            };

            if use_colors {
                let fit_colored = if entry.compatibility >= 80 {
                    fit_str.green().bold().to_string()
                } else if entry.compatibility >= 50 {
                    fit_str.yellow().to_string()
                } else {
                    fit_str.red().to_string()
                };
                let gaps = if gaps.is_empty() {
                    gaps
                } else {
                    format!("{}{}", separator, gaps.red())
                };
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    fit_colored,
                    marker.yellow(),
                    separator,
                    headline,
                    separator,
                    id.dimmed(),
                    gaps
                )
            } else {
                let gaps = if gaps.is_empty() {
                    gaps
                } else {
                    format!("{}{}", separator, gaps)
                };
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, fit_str, marker, separator, headline, separator, id, gaps
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked jobs as tab-separated values for scripting
/// Columns: compatibility, id, title, company (no headers, no colors)
pub fn format_match_tsv(ranked: &[RankedJob]) -> String {
    ranked
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.compatibility, entry.job.id, entry.job.title, entry.job.company
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format saved jobs, most recent first
/// Format: "{id}  {headline}  ({age} ago)"
pub fn format_saved_list(saved: &SavedJobs, use_colors: bool) -> String {
    if saved.saved.is_empty() {
        return "No saved jobs.".to_string();
    }

    let now = Utc::now();
    saved
        .entries_by_recency()
        .into_iter()
        .map(|(id, entry)| format_saved_line(id, entry, now - entry.saved_at, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_saved_line(id: &str, entry: &SavedEntry, age: Duration, use_colors: bool) -> String {
    let age = format_age(age);
    let age = if age == "now" {
        "just now".to_string()
    } else {
        format!("{} ago", age)
    };
    if use_colors {
        format!("{}  {}  ({})", id.cyan(), entry.headline.bold(), age.dimmed())
    } else {
        format!("{}  {}  ({})", id, entry.headline, age)
    }
}

/// List the core-value vocabulary; values that carry points show their deltas
pub fn format_core_values(use_colors: bool) -> String {
    CORE_VALUE_VOCABULARY
        .iter()
        .map(|value| match core_value_rule(value) {
            Some(rule) => {
                let deltas = rule
                    .bonuses
                    .iter()
                    .map(|(category, points)| format!("{} {}", category, format_delta(*points)))
                    .collect::<Vec<_>>()
                    .join(", ");
                if use_colors {
                    format!("{:<22}{}", value.bold(), deltas.green())
                } else {
                    format!("{:<22}{}", value, deltas)
                }
            }
            None => value.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{calculate_score, Assessment, BubbleAnswers, Education};
    use crate::jobs::{JobPosting, Requirements, Shortfall};

    fn sample_scores() -> CategoryScores {
        CategoryScores {
            technical: 55,
            communication: 40,
            problem_solving: 52,
            teamwork: 100,
        }
    }

    fn sample_job(id: &str, title: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            url: None,
            requirements: Requirements::default(),
        }
    }

    #[test]
    fn test_format_scores_plain() {
        let result = format_scores(&sample_scores(), false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("technical"));
        assert!(lines[0].contains(" 55  ###########........."));
        assert!(lines[3].contains("100  ####################"));
    }

    #[test]
    fn test_format_scores_tsv() {
        assert_eq!(format_scores_tsv(&sample_scores()), "55\t40\t52\t100");
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0), "....................");
        assert_eq!(score_bar(20), "####................");
        assert_eq!(score_bar(150), "####################");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(0.0), ".");
        assert_eq!(format_delta(8.0), "+8");
        assert_eq!(format_delta(14.4), "+14.4");
    }

    #[test]
    fn test_format_breakdown_lists_rules() {
        let mut bubbles = BubbleAnswers::default();
        bubbles.q1 = Some(4);
        let assessment = Assessment {
            education: Education::Master,
            core_values: vec!["Leadership".to_string()],
            bubbles,
            ..Default::default()
        };
        let result = calculate_score(&assessment);
        let text = format_breakdown(&result, false);

        assert!(text.contains("Base"));
        assert!(text.contains("Education: Master"));
        assert!(text.contains("+14.4"));
        assert!(text.contains("Core value: Leadership"));
        assert!(text.contains("Bubble: q1 = 4"));
        assert!(text.contains("Raw total"));
        assert!(text.lines().last().unwrap().starts_with("Final"));
    }

    #[test]
    fn test_format_match_table_empty() {
        let ranked: Vec<RankedJob> = vec![];
        assert_eq!(
            format_match_table(&ranked, &SavedJobs::new(), false),
            "No job postings found."
        );
    }

    #[test]
    fn test_format_match_table_rows() {
        let a = sample_job("be-1", "Backend Engineer");
        let b = sample_job("pm-2", "Product Manager");
        let ranked = vec![
            RankedJob {
                job: &a,
                compatibility: 100,
                shortfalls: vec![],
            },
            RankedJob {
                job: &b,
                compatibility: 75,
                shortfalls: vec![Shortfall {
                    category: Category::Communication,
                    gap: 35,
                }],
            },
        ];
        let mut saved = SavedJobs::new();
        saved.save("pm-2".to_string(), b.headline());

        let result = format_match_table(&ranked, &saved, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1. 100% "));
        assert!(lines[0].contains("Backend Engineer @ Acme"));
        assert!(lines[0].ends_with("be-1"));
        assert!(lines[1].starts_with(" 2.  75%*"));
        assert!(lines[1].ends_with("pm-2  needs communication +35"));
    }

    #[test]
    fn test_format_match_tsv() {
        let a = sample_job("be-1", "Backend Engineer");
        let ranked = vec![RankedJob {
            job: &a,
            compatibility: 88,
            shortfalls: vec![],
        }];
        assert_eq!(format_match_tsv(&ranked), "88\tbe-1\tBackend Engineer\tAcme");
    }

    #[test]
    fn test_format_shortfalls() {
        assert_eq!(format_shortfalls(&[]), "");
        let gaps = [
            Shortfall {
                category: Category::Technical,
                gap: 20,
            },
            Shortfall {
                category: Category::Teamwork,
                gap: 5,
            },
        ];
        assert_eq!(format_shortfalls(&gaps), "needs technical +20, teamwork +5");
    }

    #[test]
    fn test_format_saved_list_empty() {
        assert_eq!(format_saved_list(&SavedJobs::new(), false), "No saved jobs.");
    }

    #[test]
    fn test_format_saved_line() {
        let entry = SavedEntry {
            saved_at: Utc::now(),
            headline: "Backend Engineer @ Acme".to_string(),
        };
        assert_eq!(
            format_saved_line("be-1", &entry, Duration::days(3), false),
            "be-1  Backend Engineer @ Acme  (3d ago)"
        );
        assert_eq!(
            format_saved_line("be-1", &entry, Duration::seconds(5), false),
            "be-1  Backend Engineer @ Acme  (just now)"
        );
    }

    #[test]
    fn test_format_core_values_lists_vocabulary() {
        let text = format_core_values(false);
        assert_eq!(text.lines().count(), 20);
        assert!(text.contains("communication +8"));
        assert!(text.lines().any(|l| l == "Integrity"));
    }

    #[test]
    fn test_truncate_title_long() {
        assert_eq!(truncate_title("This is a very long title", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_title_very_narrow() {
        assert_eq!(truncate_title("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
        assert_eq!(format_age(Duration::days(2)), "2d");
        assert_eq!(format_age(Duration::weeks(2)), "2w");
        assert_eq!(format_age(Duration::minutes(30)), "30m");
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }
}
