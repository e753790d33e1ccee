/// 语义检查的开关
///
/// 默认全部开启，`max_errors` 为 `None` 时不限制错误数量。
/// 上限至少为 1，`Some(0)` 按 1 处理，因此有错误时总会报告出来。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub variadic_without_parameters: bool,
    pub duplicate_parameters: bool,
    pub duplicate_functions: bool,
    pub duplicate_imports: bool,
    pub duplicate_node_ids: bool,
    pub max_errors: Option<usize>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            variadic_without_parameters: true,
            duplicate_parameters: true,
            duplicate_functions: true,
            duplicate_imports: true,
            duplicate_node_ids: true,
            max_errors: None,
        }
    }
}

impl CheckOptions {
    /// 关闭所有检查，与语法层一样宽松
    pub fn permissive() -> Self {
        Self {
            variadic_without_parameters: false,
            duplicate_parameters: false,
            duplicate_functions: false,
            duplicate_imports: false,
            duplicate_node_ids: false,
            max_errors: None,
        }
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors.max(1));
        self
    }

    /// 实际生效的错误上限
    pub fn error_limit(&self) -> Option<usize> {
        self.max_errors.map(|max| max.max(1))
    }
}
