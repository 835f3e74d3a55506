use std::io::Read;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use image::DynamicImage;

use super::{LogoError, MAX_LOGO_BYTES};

/// A finished download: the requested URL and its outcome.
pub type LogoResult = (String, Result<DynamicImage, LogoError>);

/// Background worker that downloads and decodes logos one at a time.
pub struct LogoLoader {
    requests: Sender<String>,
    results: Receiver<LogoResult>,
}

impl LogoLoader {
    /// Start the worker thread. It exits when the loader is dropped.
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = mpsc::channel::<String>();
        let (res_tx, res_rx) = mpsc::channel();
        std::thread::spawn(move || {
            let client = match reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
            {
                Ok(client) => client,
                Err(err) => {
                    tracing::warn!(error = %err, "logo loader unavailable");
                    return;
                }
            };
            for url in req_rx {
                let result = download_with(&client, &url);
                if res_tx.send((url, result)).is_err() {
                    break;
                }
            }
        });
        Self {
            requests: req_tx,
            results: res_rx,
        }
    }

    /// Queue `url` for download. Returns false if the worker is gone.
    pub fn request(&self, url: &str) -> bool {
        self.requests.send(url.to_string()).is_ok()
    }

    /// Collect every finished download without blocking.
    pub fn drain(&self) -> Vec<LogoResult> {
        self.results.try_iter().collect()
    }
}

/// Download and decode one logo, refusing bodies over [`MAX_LOGO_BYTES`]
/// before they are buffered.
fn download_with(client: &reqwest::blocking::Client, url: &str) -> Result<DynamicImage, LogoError> {
    let response = client.get(url).send()?.error_for_status()?;
    if let Some(len) = response.content_length()
        && len > MAX_LOGO_BYTES as u64
    {
        return Err(LogoError::TooLarge(usize::try_from(len).unwrap_or(usize::MAX)));
    }
    let mut bytes = Vec::new();
    response
        .take(MAX_LOGO_BYTES as u64 + 1)
        .read_to_end(&mut bytes)?;
    decode_logo(&bytes)
}

/// Decode logo bytes in any format the `image` crate recognises.
fn decode_logo(bytes: &[u8]) -> Result<DynamicImage, LogoError> {
    if bytes.len() > MAX_LOGO_BYTES {
        return Err(LogoError::TooLarge(bytes.len()));
    }
    Ok(image::load_from_memory(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::{Cursor, Read, Write};
    use std::net::TcpListener;

    /// Serve one raw HTTP response on a random local port and return its URL.
    fn serve_once(head: String, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&body);
                let _ = stream.flush();
            }
        });
        format!("http://{addr}/logo.png")
    }

    fn png_bytes() -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255])));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png_logo() {
        let image = decode_logo(&png_bytes()).unwrap();
        assert_eq!((image.width(), image.height()), (4, 3));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_logo(b"definitely not an image").unwrap_err();
        assert!(matches!(err, LogoError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_oversized_body() {
        let bytes = vec![0u8; MAX_LOGO_BYTES + 1];
        let err = decode_logo(&bytes).unwrap_err();
        assert!(matches!(err, LogoError::TooLarge(_)));
    }

    #[test]
    fn test_download_decodes_served_logo() {
        let body = png_bytes();
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let url = serve_once(head, body);
        let client = reqwest::blocking::Client::new();
        let image = download_with(&client, &url).unwrap();
        assert_eq!((image.width(), image.height()), (4, 3));
    }

    #[test]
    fn test_download_refuses_oversized_content_length() {
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            MAX_LOGO_BYTES + 1
        );
        let url = serve_once(head, Vec::new());
        let client = reqwest::blocking::Client::new();
        let err = download_with(&client, &url).unwrap_err();
        assert!(matches!(err, LogoError::TooLarge(len) if len == MAX_LOGO_BYTES + 1));
    }
}
