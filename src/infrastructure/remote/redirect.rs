use crate::core::constants::network::MAX_REDIRECTS;
use reqwest::redirect::Policy;
use reqwest::Url;

/// 常规重定向策略
///
/// 自动跟随重定向，但不会从 https 降级到 http；遇到降级时停止并把
/// 重定向响应本身返回给调用方。
pub fn normal_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        if is_downgrade(attempt.previous().last(), attempt.url()) {
            attempt.stop()
        } else {
            attempt.follow()
        }
    })
}

fn is_downgrade(from: Option<&Url>, to: &Url) -> bool {
    matches!(from, Some(previous) if previous.scheme() == "https") && to.scheme() == "http"
}
