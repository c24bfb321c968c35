//! Scripted dispatcher and a one-shot HTTP responder used by tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::{ApiError, ApiReply, ApiRequest, ApiResult, Dispatcher};

/// Records every request and answers from a script.
///
/// When the script runs dry the last scripted answer is repeated, so a
/// single `returning(..)` serves any number of calls.
pub(crate) struct RecordingDispatcher {
    script: Mutex<VecDeque<ApiResult<ApiReply>>>,
    last: Mutex<ApiResult<ApiReply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingDispatcher {
    pub(crate) fn returning(value: Value) -> Self {
        Self::scripted(vec![Ok(ApiReply::Data(value))])
    }

    /// Answers every call with a 404.
    pub(crate) fn empty() -> Self {
        Self::scripted(vec![Ok(ApiReply::NotFound)])
    }

    /// Answers every call with a bodiless 2xx.
    pub(crate) fn no_content() -> Self {
        Self::scripted(vec![Ok(ApiReply::NoContent)])
    }

    pub(crate) fn failing(error: ApiError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    pub(crate) fn scripted(answers: Vec<ApiResult<ApiReply>>) -> Self {
        let last = answers.last().cloned().unwrap_or(Ok(ApiReply::NotFound));
        Self {
            script: Mutex::new(answers.into()),
            last: Mutex::new(last),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The only request issued; panics unless exactly one was made.
    pub(crate) fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one dispatch");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> ApiResult<ApiReply> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(answer) => answer,
            None => self.last.lock().unwrap().clone(),
        }
    }
}

/// Accept one connection, answer it with the given status and body, and
/// hand back the raw request text.
pub(crate) async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        raw
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
