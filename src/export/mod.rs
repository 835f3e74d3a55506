//! Non-interactive output for `--print` and `--html`.

use std::fmt::Write;

use askama::Template;

use crate::board::JobBoard;
use crate::description::format_description;
use crate::job::{JobPosting, NO_TECHNOLOGIES_LABEL};

const JOB_NOT_FOUND_HTML: &str = "<p>Job not found</p>\n";

/// Render the board's current page as plain text.
pub fn render_page_text(board: &JobBoard) -> String {
    let mut out = String::new();
    let pages = board.page_count();
    if pages == 0 {
        out.push_str("No jobs found\n");
        return out;
    }
    let _ = writeln!(
        out,
        "Page {}/{} ({} jobs)",
        board.current_page(),
        pages,
        board.filtered_len()
    );
    for job in board.visible_jobs() {
        let marker = if board.selected_id() == Some(job.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "{marker} {}", job.company);
        let _ = writeln!(out, "  {}", job.title);
        let _ = writeln!(
            out,
            "  [{}] [{}]  id: {}",
            job.payment_label(),
            job.location_label(),
            job.id
        );
    }
    out
}

/// Detail card for `--html`, rendered from `templates/job_detail.html`.
///
/// Plain fields are escaped by the template; the description is inserted as
/// produced by [`format_description`].
#[derive(Template)]
#[template(path = "job_detail.html")]
struct JobDetailTemplate<'a> {
    company: &'a str,
    location: &'a str,
    title: &'a str,
    logo_url: Option<&'a str>,
    description_html: String,
    technologies: &'a [String],
    no_technologies: &'static str,
    apply_url: &'a str,
}

impl<'a> JobDetailTemplate<'a> {
    fn new(job: &'a JobPosting) -> Self {
        Self {
            company: &job.company,
            location: job.location_label(),
            title: &job.title,
            logo_url: job.logo_url(),
            description_html: format_description(&job.description),
            technologies: &job.technologies,
            no_technologies: NO_TECHNOLOGIES_LABEL,
            apply_url: &job.apply_url,
        }
    }
}

/// Render a job's detail card as an HTML fragment.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_detail_html(job: Option<&JobPosting>) -> askama::Result<String> {
    let Some(job) = job else {
        return Ok(JOB_NOT_FOUND_HTML.to_string());
    };
    let mut html = JobDetailTemplate::new(job).render()?;
    if !html.ends_with('\n') {
        html.push('\n');
    }
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JobPosting {
        let mut job = JobPosting::new("42", "Rust <Backend> Engineer");
        job.company = "Ferris & Co".to_string();
        job.description = "# About\n* **Remote** first".to_string();
        job.technologies = vec!["rust".to_string(), "postgres".to_string()];
        job.apply_url = "https://example.com/apply?id=42&src=board".to_string();
        job.max_payment_usd = Some(150_000.0);
        job
    }

    #[test]
    fn test_detail_html_escapes_plain_fields() {
        let html = render_detail_html(Some(&sample_job())).unwrap();
        assert!(html.contains("<h1>Rust &lt;Backend&gt; Engineer</h1>"));
        assert!(html.contains("<h2>Ferris &amp; Co</h2>"));
        assert!(html.contains("href=\"https://example.com/apply?id=42&amp;src=board\""));
    }

    #[test]
    fn test_detail_html_formats_description() {
        let html = render_detail_html(Some(&sample_job())).unwrap();
        assert!(html.contains(
            "<div class=\"description\">\n<p><h1>About</h1></p>\n<p><li><strong>Remote</strong> first</li></p>\n  </div>"
        ));
    }

    #[test]
    fn test_detail_html_fallbacks() {
        let job = JobPosting::new("1", "Dev");
        let html = render_detail_html(Some(&job)).unwrap();
        assert!(html.contains("<p>Worldwide</p>"));
        assert!(html.contains("<li>No technologies listed</li>"));
        assert!(html.contains("logo-placeholder"));
        assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\">Apply Now</a>"));
    }

    #[test]
    fn test_detail_html_not_found() {
        assert_eq!(render_detail_html(None).unwrap(), "<p>Job not found</p>\n");
    }

    #[test]
    fn test_page_text_lists_visible_jobs() {
        let board = JobBoard::with_jobs(vec![sample_job(), JobPosting::new("7", "Go Dev")]);
        let text = render_page_text(&board);
        assert!(text.starts_with("Page 1/1 (2 jobs)\n"));
        assert!(text.contains("> Ferris & Co"));
        assert!(text.contains("[$150,000] [Worldwide]  id: 42"));
        assert!(text.contains("[Competitive] [Worldwide]  id: 7"));
    }

    #[test]
    fn test_page_text_empty_board() {
        assert_eq!(render_page_text(&JobBoard::new()), "No jobs found\n");
    }
}
