use std::path::PathBuf;

use jobdeck::board::{JobBoard, PAGE_SIZE, Selection};
use jobdeck::description::format_description;
use jobdeck::export::{render_detail_html, render_page_text};
use jobdeck::fetch::{JobSource, load_jobs};
use jobdeck::job::JobPosting;

fn fixture_source() -> JobSource {
    JobSource::File(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/jobs.json"))
}

#[test]
fn test_fixture_listing_loads_with_fallbacks() {
    let board = JobBoard::with_jobs(load_jobs(&fixture_source()));
    assert_eq!(board.jobs().len(), 3);
    assert_eq!(board.selected_id(), Some("rd-101"));

    let frontend = board.job("fe-202").unwrap();
    assert_eq!(frontend.payment_label(), "Competitive");
    assert_eq!(frontend.location_label(), "Worldwide");
    assert_eq!(frontend.logo_url(), None);

    let platform = board.job("pl-303").unwrap();
    assert_eq!(platform.payment_label(), "$150,000.5");
    assert!(platform.technologies.is_empty());
}

#[test]
fn test_search_is_case_insensitive_over_titles() {
    let mut board = JobBoard::with_jobs(load_jobs(&fixture_source()));
    board.set_search_text("RUST");
    let ids: Vec<&str> = board
        .filtered_jobs()
        .iter()
        .map(|job| job.id.as_str())
        .collect();
    assert_eq!(ids, vec!["rd-101", "pl-303"]);

    board.set_search_text("");
    assert_eq!(board.filtered_len(), 3);
}

#[test]
fn test_pages_of_large_listing() {
    let jobs: Vec<JobPosting> = (0..23)
        .map(|i| JobPosting::new(format!("j{i}"), format!("Engineer {i}")))
        .collect();
    let mut board = JobBoard::with_jobs(jobs);
    assert_eq!(board.page_count(), 3);
    assert_eq!(board.visible_jobs().len(), PAGE_SIZE);

    assert!(board.go_to_page(3));
    let last: Vec<&str> = board
        .visible_jobs()
        .iter()
        .map(|job| job.id.as_str())
        .collect();
    assert_eq!(last, vec!["j20", "j21", "j22"]);
    assert!(!board.next_page());

    board.set_search_text("engineer 1");
    assert_eq!(board.current_page(), 1);
    // "Engineer 1" and "Engineer 10" through "Engineer 19"
    assert_eq!(board.filtered_len(), 11);
}

#[test]
fn test_stale_selection_reports_not_found() {
    let mut board = JobBoard::with_jobs(load_jobs(&fixture_source()));
    board.select("gone-999");
    assert_eq!(board.selection(), Selection::NotFound("gone-999"));
    assert_eq!(
        render_detail_html(board.job("gone-999")).unwrap(),
        "<p>Job not found</p>\n"
    );
}

#[test]
fn test_unreachable_endpoint_shows_empty_board() {
    let board = JobBoard::with_jobs(load_jobs(&JobSource::Http(
        "http://127.0.0.1:9/api/crackeddevs".to_string(),
    )));
    assert!(board.jobs().is_empty());
    assert_eq!(board.selection(), Selection::None);
    assert_eq!(render_page_text(&board), "No jobs found\n");
}

#[test]
fn test_formatter_scenario() {
    assert_eq!(
        format_description("# Title\n## Sub\n* item1\n**bold**"),
        "<p><h1>Title</h1></p>\n<p><h2>Sub</h2></p>\n<p><li>item1</li></p>\n<p><strong>bold</strong></p>"
    );
}

#[test]
fn test_html_export_of_fixture_job() {
    let board = JobBoard::with_jobs(load_jobs(&fixture_source()));
    let html = render_detail_html(board.job("rd-101")).unwrap();
    assert!(html.contains("<h1>Senior Rust Engineer</h1>"));
    assert!(html.contains("<p><li>Build <strong>low-latency</strong> services</li></p>"));
    assert!(html.contains("<p><h3>Perks</h3></p>"));
    assert!(html.contains("<li>tokio</li>"));
    assert!(html.contains(
        "<img src=\"https://ferrislabs.example/logo.png\" alt=\"Ferris Labs logo\" width=\"64\" height=\"64\">"
    ));
    assert!(html.contains(
        "<a href=\"https://ferrislabs.example/careers/rd-101\" target=\"_blank\" rel=\"noopener noreferrer\">Apply Now</a>"
    ));
}
