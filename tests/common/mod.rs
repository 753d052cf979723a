// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.
#![allow(dead_code)]

use futures_util::StreamExt;
use iced::Task;
use iced_giffy::fetch::Url;
use iced_runtime::Action;
use image_rs::codecs::gif::GifEncoder;
use image_rs::{Delay, Frame, Rgba, RgbaImage};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Encodes one solid-colored frame per `(color, delay_ms)` entry into a GIF.
pub fn encode_gif(width: u32, height: u32, frames: &[([u8; 4], u32)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        let frames = frames.iter().map(|(color, delay_ms)| {
            Frame::from_parts(
                RgbaImage::from_pixel(width, height, Rgba(*color)),
                0,
                0,
                Delay::from_numer_denom_ms(*delay_ms, 1),
            )
        });
        encoder
            .encode_frames(frames)
            .expect("failed to encode GIF frames");
    }
    bytes
}

/// Serves a single canned HTTP response on a loopback port.
pub async fn serve_once(
    status_line: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(header.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        }
    });

    Url::parse(&format!("http://{addr}/image.gif")).expect("valid loopback url")
}

/// Runs `task` to completion and returns the messages it produced.
pub async fn run_task<T>(task: Task<T>) -> Vec<T> {
    let Some(stream) = iced_runtime::task::into_stream(task) else {
        return Vec::new();
    };
    stream
        .filter_map(|action| async move {
            match action {
                Action::Output(output) => Some(output),
                _ => None,
            }
        })
        .collect()
        .await
}

/// URL on a loopback port with no listener, so connections are refused.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    Url::parse(&format!("http://{addr}/missing.gif")).expect("valid loopback url")
}

struct CaptureLogger;

static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn {
            WARNINGS
                .lock()
                .expect("warning log poisoned")
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Installs a logger that records warnings for later inspection.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Debug);
    });
}

/// Number of captured warnings that mention `needle`.
pub fn warnings_mentioning(needle: &str) -> usize {
    WARNINGS
        .lock()
        .expect("warning log poisoned")
        .iter()
        .filter(|message| message.contains(needle))
        .count()
}
