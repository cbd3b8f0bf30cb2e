use crate::core::constants::network;
use crate::infrastructure::remote::redirect::normal_policy;
use log::debug;
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

static SYNC_CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();
static ASYNC_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// HTTP 响应，正文以文本形式保存
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// 跟随重定向后的最终 URL
    pub url: Url,
    pub body: String,
}

impl HttpResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    fn from_blocking(response: reqwest::blocking::Response) -> Result<Self, NetworkError> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.text().map_err(NetworkError::from_reqwest)?;
        Ok(Self {
            status,
            headers,
            url,
            body,
        })
    }

    async fn from_async(response: reqwest::Response) -> Result<Self, NetworkError> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.text().await.map_err(NetworkError::from_reqwest)?;
        Ok(Self {
            status,
            headers,
            url,
            body,
        })
    }
}

/// 目录服务的 HTTP 访问入口
///
/// 同步和异步两种模式各自复用一个进程级客户端，首次调用时创建。
/// 同步接口在传输失败时返回 `None`，异步接口把错误交给调用方处理；
/// 非 2xx 响应在两种模式下都按普通响应返回。
///
/// 异步客户端的连接池绑定在首次使用它的 tokio 运行时上，异步接口应始终
/// 在同一个运行时中调用。
pub struct HttpGateway;

impl HttpGateway {
    /// 同步 GET 请求
    pub fn get(uri: &str) -> Option<HttpResponse> {
        Self::get_with_headers(uri, &HashMap::new())
    }

    /// 带附加请求头的同步 GET 请求
    pub fn get_with_headers(uri: &str, headers: &HashMap<String, String>) -> Option<HttpResponse> {
        swallow("GET", uri, Self::send_get(uri, headers))
    }

    /// 异步 GET 请求
    pub async fn get_async(uri: &str) -> Result<HttpResponse, NetworkError> {
        Self::get_async_with_headers(uri, &HashMap::new()).await
    }

    /// 带附加请求头的异步 GET 请求
    pub async fn get_async_with_headers(
        uri: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, NetworkError> {
        let url = Url::parse(uri)?;
        let mut request = async_client()?
            .get(url)
            .header(USER_AGENT, network::USER_AGENT)
            .timeout(Duration::from_secs(network::GET_REQUEST_TIMEOUT_SECS));
        for (name, value) in extra_headers(headers) {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(NetworkError::from_reqwest)?;
        let response = HttpResponse::from_async(response).await?;
        log_status("GET", uri, &response);
        Ok(response)
    }

    /// 同步 HEAD 请求
    pub fn head(uri: &str) -> Option<HttpResponse> {
        swallow("HEAD", uri, Self::send_head(uri))
    }

    /// 异步 HEAD 请求
    pub async fn head_async(uri: &str) -> Result<HttpResponse, NetworkError> {
        let url = Url::parse(uri)?;
        let response = async_client()?
            .head(url)
            .header(USER_AGENT, network::USER_AGENT)
            .send()
            .await
            .map_err(NetworkError::from_reqwest)?;
        let response = HttpResponse::from_async(response).await?;
        log_status("HEAD", uri, &response);
        Ok(response)
    }

    fn send_get(uri: &str, headers: &HashMap<String, String>) -> Result<HttpResponse, NetworkError> {
        let url = Url::parse(uri)?;
        let mut request = sync_client()?
            .get(url)
            .header(USER_AGENT, network::USER_AGENT)
            .timeout(Duration::from_secs(network::GET_REQUEST_TIMEOUT_SECS));
        for (name, value) in extra_headers(headers) {
            request = request.header(name, value);
        }

        let response = request.send().map_err(NetworkError::from_reqwest)?;
        HttpResponse::from_blocking(response)
    }

    // HEAD 不设置单独的请求超时，沿用客户端默认值
    fn send_head(uri: &str) -> Result<HttpResponse, NetworkError> {
        let url = Url::parse(uri)?;
        let response = sync_client()?
            .head(url)
            .header(USER_AGENT, network::USER_AGENT)
            .send()
            .map_err(NetworkError::from_reqwest)?;
        HttpResponse::from_blocking(response)
    }
}

fn sync_client() -> Result<&'static reqwest::blocking::Client, NetworkError> {
    if let Some(client) = SYNC_CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(network::CONNECT_TIMEOUT_SECS))
        .redirect(normal_policy())
        .build()
        .map_err(|e| NetworkError::ClientUnavailable(e.to_string()))?;
    debug!("已创建同步 HTTP 客户端");
    // 并发首次调用时可能重复创建，多余的实例直接丢弃
    Ok(SYNC_CLIENT.get_or_init(|| client))
}

fn async_client() -> Result<&'static reqwest::Client, NetworkError> {
    if let Some(client) = ASYNC_CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(network::CONNECT_TIMEOUT_SECS))
        .redirect(normal_policy())
        .build()
        .map_err(|e| NetworkError::ClientUnavailable(e.to_string()))?;
    debug!("已创建异步 HTTP 客户端");
    Ok(ASYNC_CLIENT.get_or_init(|| client))
}

/// 过滤掉名称或值为空的请求头
fn extra_headers(
    headers: &HashMap<String, String>,
) -> impl Iterator<Item = (&str, &str)> + '_ {
    headers.iter().filter_map(|(name, value)| {
        if name.is_empty() || value.is_empty() {
            debug!("忽略空请求头: {:?}={:?}", name, value);
            None
        } else {
            Some((name.as_str(), value.as_str()))
        }
    })
}

fn log_status(method: &str, uri: &str, response: &HttpResponse) {
    if response.status != StatusCode::OK {
        debug!("{} {} 返回状态码 {}", method, uri, response.status);
    }
}

fn swallow(
    method: &str,
    uri: &str,
    result: Result<HttpResponse, NetworkError>,
) -> Option<HttpResponse> {
    match result {
        Ok(response) => {
            log_status(method, uri, &response);
            Some(response)
        }
        Err(e) => {
            debug!("{} {} 请求失败: {}", method, uri, e);
            None
        }
    }
}

/// 网络错误类型
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),
}

impl NetworkError {
    /// 区分超时和其他传输错误
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::HttpError(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use crate::core::constants::network::{
        CONNECT_TIMEOUT_SECS, GET_REQUEST_TIMEOUT_SECS, MAX_REDIRECTS,
    };
    use std::net::{TcpListener, TcpStream};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    const OK_RESPONSE: &str =
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello";
    const NOT_FOUND_RESPONSE: &str =
        "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found";
    const REDIRECT_RESPONSE: &str =
        "HTTP/1.1 302 Found\r\nLocation: /final\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    /// 本地一次性服务器，按顺序处理每个连接并记录原始请求
    fn serve(responses: Vec<&'static str>) -> (String, thread::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                requests.push(read_request(&mut stream));
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            requests
        });
        (base, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        while !data.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn header_lines(request: &str) -> Vec<String> {
        request
            .lines()
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_ascii_lowercase())
            .collect()
    }

    /// 每个请求都重定向到一个新路径的服务器，返回已处理的请求数
    fn serve_endless_redirects() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = stream.unwrap();
                read_request(&mut stream);
                let hop = counter.fetch_add(1, Ordering::SeqCst) + 1;
                let response = format!(
                    "HTTP/1.1 302 Found\r\nLocation: /hop/{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    hop
                );
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });
        (base, hits)
    }

    /// 接受连接但从不响应的服务器
    fn serve_silently() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        thread::spawn(move || {
            let mut open = Vec::new();
            for stream in listener.incoming() {
                let mut stream = stream.unwrap();
                read_request(&mut stream);
                open.push(stream);
            }
        });
        base
    }

    fn assert_get_timeout_window(started: Instant) {
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(GET_REQUEST_TIMEOUT_SECS), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(CONNECT_TIMEOUT_SECS), "{elapsed:?}");
    }

    fn unreachable_uri() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/disco/v3.0/major_versions", addr)
    }

    #[test]
    fn test_get_returns_body() {
        let (base, server) = serve(vec![OK_RESPONSE]);
        let response = HttpGateway::get(&format!("{}/disco/v3.0/distributions", base)).unwrap();
        assert_eq!(response.status_code(), 200);
        assert!(response.is_success());
        assert_eq!(response.body, "hello");

        let requests = server.join().unwrap();
        assert!(requests[0].starts_with("GET /disco/v3.0/distributions HTTP/1.1"));
        assert!(header_lines(&requests[0]).contains(&"user-agent: discoapi".to_string()));
    }

    #[test]
    fn test_get_drops_empty_headers() {
        let (base, server) = serve(vec![OK_RESPONSE]);
        let mut headers = HashMap::new();
        headers.insert(String::new(), "x".to_string());
        headers.insert("k".to_string(), String::new());
        headers.insert("X-Token".to_string(), "abc".to_string());

        let response = HttpGateway::get_with_headers(&base, &headers);
        assert!(response.is_some());

        let requests = server.join().unwrap();
        let lines = header_lines(&requests[0]);
        assert!(lines.contains(&"x-token: abc".to_string()));
        assert!(lines.contains(&"user-agent: discoapi".to_string()));
        assert!(!lines.iter().any(|line| line.starts_with("k:")));
        assert!(!lines.iter().any(|line| line.starts_with(':')));
    }

    #[test]
    fn test_get_not_found_is_a_response() {
        let (base, server) = serve(vec![NOT_FOUND_RESPONSE]);
        let response = HttpGateway::get(&format!("{}/missing", base)).unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "not found");
        server.join().unwrap();
    }

    #[test]
    fn test_get_unreachable_returns_none() {
        assert!(HttpGateway::get(&unreachable_uri()).is_none());
    }

    #[test]
    fn test_get_invalid_uri_returns_none() {
        assert!(HttpGateway::get("not a uri").is_none());
    }

    #[test]
    fn test_get_follows_redirect() {
        let (base, server) = serve(vec![REDIRECT_RESPONSE, OK_RESPONSE]);
        let response = HttpGateway::get(&format!("{}/start", base)).unwrap();
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.url.path(), "/final");

        let requests = server.join().unwrap();
        assert!(requests[1].starts_with("GET /final HTTP/1.1"));
    }

    #[test]
    fn test_head_has_empty_body() {
        let (base, server) = serve(vec![OK_RESPONSE]);
        let response = HttpGateway::head(&base).unwrap();
        assert_eq!(response.status_code(), 200);
        assert!(response.body.is_empty());

        let requests = server.join().unwrap();
        assert!(requests[0].starts_with("HEAD / HTTP/1.1"));
        assert!(header_lines(&requests[0]).contains(&"user-agent: discoapi".to_string()));
    }

    #[test]
    fn test_head_unreachable_returns_none() {
        assert!(HttpGateway::head(&unreachable_uri()).is_none());
    }

    #[tokio::test]
    async fn test_get_async_returns_response() {
        let (base, server) = serve(vec![NOT_FOUND_RESPONSE]);
        let mut headers = HashMap::new();
        headers.insert("Accept-Language".to_string(), "en".to_string());
        headers.insert("k".to_string(), String::new());

        let response = HttpGateway::get_async_with_headers(&base, &headers)
            .await
            .unwrap();
        assert_eq!(response.status_code(), 404);

        let lines = header_lines(&server.join().unwrap()[0]);
        assert!(lines.contains(&"accept-language: en".to_string()));
        assert!(!lines.iter().any(|line| line.starts_with("k:")));
    }

    #[tokio::test]
    async fn test_get_async_unreachable_is_error() {
        let result = HttpGateway::get_async(&unreachable_uri()).await;
        assert!(matches!(result, Err(NetworkError::HttpError(_))));
    }

    #[tokio::test]
    async fn test_get_async_invalid_uri_is_error() {
        let result = HttpGateway::get_async("::nope").await;
        assert!(matches!(result, Err(NetworkError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_head_async() {
        let (base, server) = serve(vec![OK_RESPONSE]);
        let response = HttpGateway::head_async(&base).await.unwrap();
        assert!(response.is_success());
        assert!(response.body.is_empty());
        server.join().unwrap();

        assert!(HttpGateway::head_async(&unreachable_uri()).await.is_err());
    }

    #[test]
    fn test_get_stops_after_redirect_limit() {
        let (base, hits) = serve_endless_redirects();
        assert!(HttpGateway::get(&format!("{}/start", base)).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), MAX_REDIRECTS + 1);
    }

    #[tokio::test]
    async fn test_get_async_redirect_limit_is_error() {
        let (base, hits) = serve_endless_redirects();
        let result = HttpGateway::get_async(&format!("{}/start", base)).await;
        assert!(matches!(result, Err(NetworkError::HttpError(_))));
        assert_eq!(hits.load(Ordering::SeqCst), MAX_REDIRECTS + 1);
    }

    #[test]
    fn test_get_times_out_without_response() {
        let base = serve_silently();
        let started = Instant::now();
        assert!(HttpGateway::get(&base).is_none());
        assert_get_timeout_window(started);
    }

    #[tokio::test]
    async fn test_get_async_times_out_without_response() {
        let base = serve_silently();
        let started = Instant::now();
        let result = HttpGateway::get_async(&base).await;
        assert!(matches!(result, Err(NetworkError::Timeout)));
        assert_get_timeout_window(started);
    }
}
