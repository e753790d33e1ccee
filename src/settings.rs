use analyzer::CheckOptions;

/// 前端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// 语义检查选项
    pub check: CheckOptions,

    /// `RUST_LOG` 未设置时使用的过滤规则, 默认 `warn`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            check: CheckOptions::default(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn with_check(mut self, check: CheckOptions) -> Self {
        self.check = check;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
