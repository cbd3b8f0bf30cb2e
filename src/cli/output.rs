use crate::core::distribution::Distribution;
use crate::core::name_resolver::aliases_of;
use crate::error::AppResult;
use crate::infrastructure::remote::http_client::HttpResponse;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// 输出格式化器
pub struct OutputFormatter;

impl OutputFormatter {
    /// 格式化名称解析结果
    pub fn format_distribution(
        &self,
        input: &str,
        distribution: Distribution,
        format: OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(format!(
                "{} -> {} ({})\n",
                input,
                distribution.api_name(),
                distribution.ui_string()
            )),
            OutputFormat::Json => {
                let json_output = serde_json::json!({
                    "input": input,
                    "distribution": distribution,
                    "name": distribution.ui_string(),
                });
                Ok(json_line(&json_output)?)
            }
        }
    }

    /// 格式化发行版列表
    pub fn format_distributions(
        &self,
        distributions: &[Distribution],
        format: OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Text => {
                let mut output = String::from("Known distributions:\n");
                for distribution in distributions {
                    output.push_str(&format!(
                        "  {:<18} {:<18} {}\n",
                        distribution.api_name(),
                        distribution.ui_string(),
                        aliases_of(*distribution).join(", ")
                    ));
                }
                Ok(output)
            }
            OutputFormat::Json => {
                let entries: Vec<_> = distributions
                    .iter()
                    .map(|distribution| {
                        serde_json::json!({
                            "distribution": distribution,
                            "name": distribution.ui_string(),
                            "aliases": aliases_of(*distribution),
                        })
                    })
                    .collect();
                Ok(json_line(&entries)?)
            }
        }
    }

    /// 格式化 HTTP 响应
    pub fn format_response(
        &self,
        method: &str,
        response: &HttpResponse,
        format: OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Text => {
                let mut output = format!("{} {} -> {}\n", method, response.url, response.status);
                if !response.body.is_empty() {
                    output.push_str(&response.body);
                    if !response.body.ends_with('\n') {
                        output.push('\n');
                    }
                }
                Ok(output)
            }
            OutputFormat::Json => {
                let headers: serde_json::Map<String, serde_json::Value> = response
                    .headers
                    .iter()
                    .filter_map(|(name, value)| {
                        value
                            .to_str()
                            .ok()
                            .map(|v| (name.to_string(), serde_json::Value::from(v)))
                    })
                    .collect();
                let json_output = serde_json::json!({
                    "method": method,
                    "url": response.url.as_str(),
                    "status": response.status_code(),
                    "headers": headers,
                    "body": response.body,
                });
                Ok(json_line(&json_output)?)
            }
        }
    }

    /// 格式化错误信息
    pub fn format_error(&self, error: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!("Error: {}\n", error),
            OutputFormat::Json => format!(
                "{}\n",
                serde_json::json!({
                    "error": error,
                    "success": false
                })
            ),
        }
    }
}

/// 美化后的 JSON，以换行结尾
fn json_line<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

/// 默认输出格式化器实例
pub static FORMATTER: OutputFormatter = OutputFormatter;
