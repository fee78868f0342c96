use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use trademind_coach::config::{Config, GeneratorKind};
use trademind_coach::models::{Emotion, Entry, TradeAttributes};

/// Config pointing both backends at `base_url`.
pub fn test_config(base_url: &str) -> Config {
    Config {
        generator: GeneratorKind::HuggingFace,
        hf_api_key: Some("hf_test".to_string()),
        hf_model: "test/model".to_string(),
        hf_endpoint: format!("{base_url}/models/test/model"),
        deepseek_api_key: Some("sk_test".to_string()),
        deepseek_model: "deepseek-chat".to_string(),
        deepseek_endpoint: format!("{base_url}/v1/chat/completions"),
        request_timeout_secs: 1,
        max_new_tokens: 300,
        temperature: 0.6,
        log_level: "debug".to_string(),
    }
}

pub fn winning_trade() -> TradeAttributes {
    TradeAttributes {
        entry: Entry::Buy,
        pair: "SOL/USD".to_string(),
        profit: Some(100.0),
        loss: None,
        pre_trade_emotion: Some(Emotion::Neutral),
        post_trade_emotion: Some(Emotion::Happy),
        rules_followed_count: Some(3),
        rules_total: Some(4),
        reason: "Clean break of structure".to_string(),
    }
}

pub fn revenge_trade() -> TradeAttributes {
    TradeAttributes {
        entry: Entry::Sell,
        pair: "USD/JPY".to_string(),
        profit: None,
        loss: Some(50.0),
        pre_trade_emotion: Some(Emotion::Angry),
        post_trade_emotion: Some(Emotion::Sad),
        rules_followed_count: Some(1),
        rules_total: Some(4),
        reason: "Had to make it back".to_string(),
    }
}

/// Minimal HTTP/1.1 server answering every request with one canned response.
pub struct StubServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<String>>>,
}

impl StubServer {
    pub async fn respond(status: u16, body: &str) -> Self {
        Self::spawn(Some((status, body.to_string()))).await
    }

    /// Accepts connections but never answers.
    pub async fn silent() -> Self {
        Self::spawn(None).await
    }

    async fn spawn(reply: Option<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let last_request = Arc::new(Mutex::new(None));

        let task_hits = hits.clone();
        let task_last = last_request.clone();
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                task_hits.fetch_add(1, Ordering::SeqCst);
                let reply = reply.clone();
                let last = task_last.clone();
                tokio::spawn(async move {
                    handle(socket, reply, last).await;
                });
            }
        });

        Self {
            url,
            hits,
            last_request,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<String> {
        self.last_request.lock().unwrap().clone()
    }
}

async fn handle(
    mut socket: TcpStream,
    reply: Option<(u16, String)>,
    last: Arc<Mutex<Option<String>>>,
) {
    let request = read_request(&mut socket).await;
    *last.lock().unwrap() = Some(request);

    let Some((status, body)) = reply else {
        // Hold the connection open until the client gives up.
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        return;
    };

    let reason = match status {
        200 => "OK",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
