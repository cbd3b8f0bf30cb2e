use crate::cli::commands::*;
use crate::cli::output::{OutputFormat, FORMATTER};
use crate::core::distribution::Distribution;
use crate::core::name_resolver;
use crate::error::{AppError, AppResult};
use crate::infrastructure::remote::http_client::{HttpGateway, HttpResponse};
use futures_util::future::join_all;
use std::collections::{HashMap, HashSet};

/// 命令处理器
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    /// 处理命令
    pub async fn handle_command(&self, command: Commands) -> AppResult<()> {
        match command {
            Commands::Resolve { text, json } => self.handle_resolve(&text, json),
            Commands::Distros { json } => self.handle_distros(json),
            Commands::Get {
                uri,
                headers,
                use_async,
                json,
            } => self.handle_get(uri, headers, use_async, json).await,
            Commands::Head {
                uris,
                use_async,
                json,
            } => self.handle_head(uris, use_async, json).await,
        }
    }

    fn handle_resolve(&self, text: &str, json: bool) -> AppResult<()> {
        let distribution =
            name_resolver::resolve(text).ok_or_else(|| AppError::unknown_distribution(text))?;
        let output =
            FORMATTER.format_distribution(text, distribution, OutputFormat::from_flag(json))?;
        print!("{}", output);
        Ok(())
    }

    fn handle_distros(&self, json: bool) -> AppResult<()> {
        let output =
            FORMATTER.format_distributions(Distribution::values(), OutputFormat::from_flag(json))?;
        print!("{}", output);
        Ok(())
    }

    async fn handle_get(
        &self,
        uri: String,
        headers: Vec<String>,
        use_async: bool,
        json: bool,
    ) -> AppResult<()> {
        let headers = parse_headers(&headers)?;

        let response = if use_async {
            HttpGateway::get_async_with_headers(&uri, &headers).await?
        } else {
            // 阻塞客户端不能在异步运行时线程上直接调用
            let target = uri.clone();
            tokio::task::spawn_blocking(move || HttpGateway::get_with_headers(&target, &headers))
                .await
                .map_err(|e| AppError::internal(e.to_string()))?
                .ok_or_else(|| AppError::unreachable(&uri))?
        };

        print!(
            "{}",
            FORMATTER.format_response("GET", &response, OutputFormat::from_flag(json))?
        );
        Ok(())
    }

    async fn handle_head(&self, uris: Vec<String>, use_async: bool, json: bool) -> AppResult<()> {
        let format = OutputFormat::from_flag(json);

        let results: Vec<(String, AppResult<HttpResponse>)> = if use_async {
            let responses = join_all(uris.iter().map(|uri| HttpGateway::head_async(uri))).await;
            uris.into_iter()
                .zip(responses)
                .map(|(uri, result)| (uri, result.map_err(AppError::from)))
                .collect()
        } else {
            tokio::task::spawn_blocking(move || {
                uris.into_iter()
                    .map(|uri| {
                        let result =
                            HttpGateway::head(&uri).ok_or_else(|| AppError::unreachable(&uri));
                        (uri, result)
                    })
                    .collect::<Vec<_>>()
            })
            .await
            .map_err(|e| AppError::internal(e.to_string()))?
        };

        let mut failures = 0;
        for (uri, result) in results {
            match result {
                Ok(response) => print!("{}", FORMATTER.format_response("HEAD", &response, format)?),
                Err(e) => {
                    failures += 1;
                    eprint!("{}", FORMATTER.format_error(&format!("{}: {}", uri, e), format));
                }
            }
        }

        if failures > 0 {
            return Err(AppError::Network {
                message: format!("{} 个 HEAD 请求失败", failures),
            });
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析 NAME=VALUE 形式的请求头参数，名称不区分大小写且不能重复
fn parse_headers(raw: &[String]) -> AppResult<HashMap<String, String>> {
    let mut headers = HashMap::new();
    let mut seen = HashSet::new();
    for entry in raw {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| AppError::validation_failed("header", &format!("缺少 '=': {}", entry)))?;
        let name = name.trim();
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(AppError::validation_failed(
                "header",
                &format!("重复的请求头: {}", name),
            ));
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }
    Ok(headers)
}
