use clap::{Parser, Subcommand};

/// discocli CLI 应用程序
#[derive(Parser)]
#[command(name = "discocli")]
#[command(about = "JDK 发行版目录服务命令行客户端", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 顶级命令
#[derive(Subcommand)]
pub enum Commands {
    /// 将发行版名称解析为标准标识
    Resolve {
        /// 发行版名称（精确匹配已知写法）
        text: String,
        /// JSON 格式输出
        #[arg(long)]
        json: bool,
    },
    /// 列出所有已知发行版及其别名
    Distros {
        /// JSON 格式输出
        #[arg(long)]
        json: bool,
    },
    /// 发送 GET 请求
    Get {
        /// 请求地址
        uri: String,
        /// 附加请求头，格式 NAME=VALUE
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// 使用异步客户端
        #[arg(long = "async")]
        use_async: bool,
        /// JSON 格式输出
        #[arg(long)]
        json: bool,
    },
    /// 发送 HEAD 请求
    Head {
        /// 请求地址，可指定多个
        #[arg(required = true)]
        uris: Vec<String>,
        /// 使用异步客户端并发请求
        #[arg(long = "async")]
        use_async: bool,
        /// JSON 格式输出
        #[arg(long)]
        json: bool,
    },
}
