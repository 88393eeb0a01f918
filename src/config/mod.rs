use std::env;

/// 负载变体：决定每个位置生成什么样的载荷
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadVariant {
    /// 每个位置三个 [1,100] 随机整数
    Numbers,
    /// 每个位置一条嵌入坐标和一个随机整数的消息
    Message,
}

impl PayloadVariant {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "message" => PayloadVariant::Message,
            _ => PayloadVariant::Numbers,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub payload_variant: PayloadVariant,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            payload_variant: env::var("PAYLOAD_VARIANT")
                .map(|v| PayloadVariant::parse(&v))
                .unwrap_or(PayloadVariant::Numbers),
        }
    }
}
