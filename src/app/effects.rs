use std::io::{Write, stdout};

use base64::Engine;

use crate::app::{App, Message, Model, ToastLevel};
use crate::logo::LogoLoader;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::JobsLoaded(jobs) => {
                tracing::debug!(count = jobs.len(), "listing installed");
            }
            Message::ApplyNow => {
                let Some(url) = apply_url(model) else {
                    model.show_toast(ToastLevel::Warning, "No apply link for this job");
                    return;
                };
                match open_external_link(&url) {
                    Ok(()) => model.show_toast(ToastLevel::Info, format!("Opened {url}")),
                    Err(err) => {
                        tracing::warn!(url = %url, error = %err, "failed to open apply link");
                        model.show_toast(ToastLevel::Error, format!("Open failed: {err}"));
                    }
                }
            }
            Message::CopyApplyLink => {
                let Some(url) = apply_url(model) else {
                    model.show_toast(ToastLevel::Warning, "No apply link for this job");
                    return;
                };
                match copy_to_clipboard(&url) {
                    Ok(()) => model.show_toast(ToastLevel::Info, "Copied apply link"),
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Copy failed: {err}"));
                    }
                }
            }
            _ => {}
        }
    }

    /// Queue downloads for logos the current screen needs.
    pub(super) fn request_logos(model: &mut Model, loader: &LogoLoader) {
        for url in model.wanted_logo_urls() {
            if !model.logos.needs_request(&url) {
                continue;
            }
            if loader.request(&url) {
                model.logos.mark_pending(&url);
            } else {
                model.logos.mark_failed(&url);
            }
        }
    }
}

fn apply_url(model: &Model) -> Option<String> {
    model
        .selected_job()
        .map(|job| job.apply_url.trim())
        .filter(|url| !url.is_empty())
        .map(ToOwned::to_owned)
}

fn open_external_link(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?.wait()?;
        Ok(())
    }
    #[cfg(target_os = "windows")]
    {
        use std::process::Stdio;
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        use std::process::Stdio;
        std::process::Command::new("xdg-open")
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?
            .wait()?;
        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if copy_to_pbcopy(text).is_ok() {
            return Ok(());
        }
    }
    let mut out = stdout();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    if child.wait()?.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("pbcopy failed"))
    }
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobPosting;

    #[test]
    fn test_osc52_sequence_encodes_link() {
        assert_eq!(
            osc52_sequence("https://a.io"),
            "\x1b]52;c;aHR0cHM6Ly9hLmlv\x07"
        );
    }

    #[test]
    fn test_apply_url_requires_selected_job_with_link() {
        let mut model = Model::default();
        assert_eq!(apply_url(&model), None);

        let mut job = JobPosting::new("1", "Rust Dev");
        job.apply_url = "  https://example.com/apply ".to_string();
        model.board.load(vec![job, JobPosting::new("2", "No Link")]);
        assert_eq!(apply_url(&model).as_deref(), Some("https://example.com/apply"));

        model.board.select("2");
        assert_eq!(apply_url(&model), None);
    }

    #[test]
    fn test_apply_without_link_warns() {
        let mut model = Model::default();
        model.board.load(vec![JobPosting::new("1", "Rust Dev")]);
        App::handle_message_side_effects(&mut model, &Message::ApplyNow);
        assert_eq!(
            model.active_toast(),
            Some(("No apply link for this job", ToastLevel::Warning))
        );
    }
}
