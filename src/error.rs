use analyzer::SemanticError;
use syntax::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrontendError>;

/// 单个编译单元的语义错误
///
/// 不同单元可能来自不同的 id 分配器，根节点 id 可以相同，
/// 因此用 `index` (单元在输入中的位置) 区分。
#[derive(Debug)]
pub struct UnitErrors {
    pub index: usize,
    pub root: NodeId,
    pub errors: Vec<SemanticError>,
}

/// 前端错误
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("semantic errors in {} compilation unit(s)", .0.len())]
    Semantic(Vec<UnitErrors>),

    #[error("no compilation unit to check")]
    NoInput,

    #[error("failed to install tracing subscriber: {0}")]
    Logging(String),
}

impl FrontendError {
    /// 按编译单元顺序列出所有语义错误
    pub fn semantic_errors(&self) -> impl Iterator<Item = &SemanticError> {
        let units = match self {
            Self::Semantic(units) => Some(units),
            _ => None,
        };
        units
            .into_iter()
            .flat_map(|units| units.iter().flat_map(|unit| &unit.errors))
    }

    /// 报告错误
    pub fn report(self) {
        match self {
            Self::Semantic(units) => {
                for unit in units {
                    for error in unit.errors {
                        let report = miette::Report::new(error);
                        println!("in unit {} (root #{}): {:?}", unit.index, unit.root, report);
                    }
                }
            }
            _ => println!("Error: {}", self),
        }
    }
}
