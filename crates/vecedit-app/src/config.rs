//! 编辑器配置
//!
//! 默认值可通过环境变量覆盖：
//! - `VECEDIT_LOG`: 日志级别（trace/debug/info/warn/error）
//! - `VECEDIT_PROMPT`: 输入提示符
//! - `VECEDIT_BANNER`: 是否显示启动横幅（1/0, true/false）

use tracing::Level;

pub const ENV_LOG: &str = "VECEDIT_LOG";
pub const ENV_PROMPT: &str = "VECEDIT_PROMPT";
pub const ENV_BANNER: &str = "VECEDIT_BANNER";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// 日志最大级别
    pub log_level: Level,
    /// 输入提示符
    pub prompt: String,
    /// 是否显示启动横幅
    pub show_banner: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

impl EditorConfig {
    /// 从进程环境读取配置
    ///
    /// 返回配置以及无法识别的取值说明（日志初始化后再输出）。
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(value) = lookup(ENV_LOG) {
            match value.trim().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(format!("{ENV_LOG}={value}")),
            }
        }

        if let Some(value) = lookup(ENV_PROMPT) {
            config.prompt = value;
        }

        if let Some(value) = lookup(ENV_BANNER) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.show_banner = true,
                "0" | "false" | "no" | "off" => config.show_banner = false,
                _ => rejected.push(format!("{ENV_BANNER}={value}")),
            }
        }

        (config, rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let (config, rejected) = EditorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EditorConfig::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_overrides() {
        let (config, rejected) = EditorConfig::from_lookup(lookup(&[
            (ENV_LOG, "debug"),
            (ENV_PROMPT, "vecedit> "),
            (ENV_BANNER, "off"),
        ]));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.prompt, "vecedit> ");
        assert!(!config.show_banner);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let (config, rejected) =
            EditorConfig::from_lookup(lookup(&[(ENV_LOG, "loud"), (ENV_BANNER, "maybe")]));
        assert_eq!(config.log_level, Level::WARN);
        assert!(config.show_banner);
        assert_eq!(rejected, ["VECEDIT_LOG=loud", "VECEDIT_BANNER=maybe"]);
    }
}
