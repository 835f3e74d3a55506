use super::*;
use super::style::Theme;
use crate::app::{Message, Model, update};
use crate::config::ThemeMode;
use crate::job::JobPosting;
use crate::logo::LogoCache;
use image::{DynamicImage, Rgb, RgbImage};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui_image::picker::Picker;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(120, 40);
    Terminal::new(backend).unwrap()
}

fn rendered_text(model: &mut Model) -> String {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn sample_job() -> JobPosting {
    let mut job = JobPosting::new("42", "Senior Rust Engineer");
    job.company = "Ferris Labs".to_string();
    job.description = "# About us\n* **Remote** first\nWe ship.".to_string();
    job.technologies = vec!["rust".to_string(), "tokio".to_string()];
    job.job_type = "full_time".to_string();
    job.apply_url = "https://ferris.example/apply".to_string();
    job.max_payment_usd = Some(180_000.0);
    job.country_iso = Some("DE".to_string());
    job
}

fn loaded_model(jobs: Vec<JobPosting>) -> Model {
    update(Model::new("http://localhost:3000/api/crackeddevs", (120, 40)), Message::JobsLoaded(jobs))
}

#[test]
fn test_render_shows_loading_placeholder() {
    let mut model = Model::new("http://localhost:3000/api/crackeddevs", (120, 40));
    let content = rendered_text(&mut model);
    assert!(content.contains("Loading..."));
    assert!(content.contains("fetching..."));
}

#[test]
fn test_render_empty_listing() {
    let mut model = loaded_model(Vec::new());
    let content = rendered_text(&mut model);
    assert!(content.contains("No jobs found"));
    assert!(content.contains("Select a job to view details"));
}

#[test]
fn test_render_card_badges_and_fallbacks() {
    let mut model = loaded_model(vec![sample_job(), JobPosting::new("7", "Go Developer")]);
    let content = rendered_text(&mut model);
    assert!(content.contains("Ferris Labs"));
    assert!(content.contains("$180,000"));
    assert!(content.contains("DE"));
    assert!(content.contains("Competitive"));
    assert!(content.contains("Worldwide"));
    assert!(content.contains("Jobs (2)"));
}

#[test]
fn test_render_detail_of_selected_job() {
    let mut model = loaded_model(vec![sample_job()]);
    let content = rendered_text(&mut model);
    assert!(content.contains("Back (Esc)"));
    assert!(content.contains("Senior Rust Engineer"));
    assert!(content.contains("About us"));
    assert!(content.contains("Remote first"));
    assert!(content.contains("Technologies:"));
    assert!(content.contains("tokio"));
    assert!(content.contains("Type: full_time"));
    assert!(content.contains("Apply Now: https://ferris.example/apply"));
    assert!(!content.contains("**"));
}

#[test]
fn test_render_detail_without_technologies() {
    let mut model = loaded_model(vec![JobPosting::new("1", "Dev")]);
    let content = rendered_text(&mut model);
    assert!(content.contains("No technologies listed"));
}

#[test]
fn test_render_job_not_found() {
    let mut model = loaded_model(vec![sample_job()]);
    model.board.select("missing");
    let content = rendered_text(&mut model);
    assert!(content.contains("Job not found"));
}

#[test]
fn test_render_after_back_shows_prompt() {
    let model = loaded_model(vec![sample_job()]);
    let mut model = update(model, Message::Back);
    let content = rendered_text(&mut model);
    assert!(content.contains("Select a job to view details"));
}

#[test]
fn test_render_pagination_bar() {
    let jobs = (1..=25)
        .map(|i| JobPosting::new(i.to_string(), format!("Job {i}")))
        .collect();
    let mut model = update(loaded_model(jobs), Message::NextPage);
    let content = rendered_text(&mut model);
    assert!(content.contains("\u{2039} Prev  1   2   3  Next \u{203a}"));
    assert!(content.contains("Page 2/3"));
}

#[test]
fn test_render_search_bar_while_searching() {
    let model = update(loaded_model(vec![sample_job()]), Message::StartSearch);
    let mut model = update(model, Message::SearchInput("rust".to_string()));
    let content = rendered_text(&mut model);
    assert!(content.contains("/rust  [1 matches]"));
}

#[test]
fn test_render_help_overlay() {
    let mut model = update(loaded_model(vec![sample_job()]), Message::ToggleHelp);
    let content = rendered_text(&mut model);
    assert!(content.contains("Help"));
    assert!(content.contains("Apply Now (open link)"));
}

#[test]
fn test_render_detail_scroll_is_clamped() {
    let model = loaded_model(vec![sample_job()]);
    let mut model = update(model, Message::ScrollDetailDown(500));
    let _ = rendered_text(&mut model);
    // The short sample body fits the pane, so there is nothing to scroll.
    assert_eq!(model.detail_scroll, 0);
}

#[test]
fn test_render_detail_scrolls_through_wrapped_description() {
    let mut job = sample_job();
    job.description = vec!["remote ".repeat(140); 10].join("\n");
    let body_lines = u16::try_from(render::detail_body_lines(&job, &Theme::dark()).len()).unwrap();

    let model = loaded_model(vec![job]);
    let mut model = update(model, Message::ScrollDetailDown(10_000));
    let content = rendered_text(&mut model);
    assert!(model.detail_scroll > body_lines);
    assert!(content.contains("Apply Now"));
    assert!(content.contains("Technologies:"));
}

#[test]
fn test_render_with_ready_logo() {
    let mut job = sample_job();
    job.logo_url = Some("https://ferris.example/logo.png".to_string());
    let mut model = loaded_model(vec![job]).with_logos(LogoCache::new(Some(Picker::halfblocks())));
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([220, 80, 20])));
    model
        .logos
        .insert_image("https://ferris.example/logo.png", image);
    let content = rendered_text(&mut model);
    assert!(content.contains("Ferris Labs"));
    assert!(model.logos.protocol_mut("https://ferris.example/logo.png").is_some());
}

#[test]
fn test_description_lines_style_blocks() {
    let lines = render::description_lines("## Perks\n* **Equity**\nplain", &Theme::dark());
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].to_string(), "Perks");
    assert_eq!(lines[1].to_string(), "  \u{2022} Equity");
    assert!(
        lines[1]
            .spans
            .iter()
            .any(|span| span.content == "Equity"
                && span.style.add_modifier.contains(ratatui::style::Modifier::BOLD))
    );
    assert_eq!(lines[2].to_string(), "plain");
}

#[test]
fn test_visible_cards_and_scroll_offset() {
    assert_eq!(visible_cards(0), 1);
    assert_eq!(visible_cards(3), 1);
    assert_eq!(visible_cards(7), 2);
    assert_eq!(visible_cards(39), 10);
    assert_eq!(list_scroll_offset(0, 3), 0);
    assert_eq!(list_scroll_offset(2, 3), 0);
    assert_eq!(list_scroll_offset(5, 3), 3);
}

#[test]
fn test_pagination_items_and_hits() {
    assert!(pagination_items(0).is_empty());
    let labels: Vec<String> = pagination_items(2).into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["\u{2039} Prev", " 1 ", " 2 ", "Next \u{203a}"]);

    let bar = Rect::new(2, 0, 40, 1);
    assert_eq!(pagination_target_at(bar, 2, 2), Some(PageTarget::Prev));
    assert_eq!(pagination_target_at(bar, 2, 8), None);
    assert_eq!(pagination_target_at(bar, 2, 10), Some(PageTarget::Page(1)));
    assert_eq!(pagination_target_at(bar, 2, 17), Some(PageTarget::Next));
    assert_eq!(pagination_target_at(bar, 0, 2), None);
}

#[test]
fn test_screen_layout_splits_panes() {
    let layout = screen_layout(Rect::new(0, 0, 100, 30));
    assert_eq!(layout.search.height, SEARCH_HEIGHT);
    assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
    assert_eq!(layout.pagination.height, 1);
    assert_eq!(layout.list.x, 0);
    assert_eq!(layout.detail.x, layout.list.width);
}

#[test]
fn test_light_theme_paints_screen_background() {
    let mut model = update(loaded_model(vec![sample_job()]), Message::ToggleTheme);
    assert_eq!(model.theme, ThemeMode::Light);
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(&mut model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    // Interior of the list pane below the only card.
    let cell = &buffer[(10u16, 20u16)];
    assert_eq!(cell.bg, Theme::light().base.bg.unwrap());
}
