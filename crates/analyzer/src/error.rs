use miette::Diagnostic;
use syntax::NodeId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SemanticError {
    #[error("function '{function}' is variadic but declares no parameters (node #{id})")]
    #[diagnostic(
        code(semantic::variadic_without_parameters),
        help("the variadic marker applies to the last declared parameter")
    )]
    VariadicWithoutParameters { function: String, id: NodeId },

    #[error("parameter '{name}' is declared more than once in function '{function}' (node #{id})")]
    #[diagnostic(code(semantic::duplicate_parameter))]
    DuplicateParameter {
        function: String,
        name: String,
        id: NodeId,
    },

    #[error("function '{name}' with {arity} parameter(s) is already defined (node #{id})")]
    #[diagnostic(code(semantic::function_defined))]
    DuplicateFunction {
        name: String,
        arity: usize,
        id: NodeId,
        previous: NodeId,
    },

    #[error("module '{name}' is imported more than once (node #{id})")]
    #[diagnostic(code(semantic::duplicate_import))]
    DuplicateImport {
        name: String,
        id: NodeId,
        previous: NodeId,
    },

    #[error("node id #{id} is used by more than one node")]
    #[diagnostic(
        code(semantic::duplicate_node_id),
        help("node ids must be allocated from a single NodeIdGen per parse session")
    )]
    DuplicateNodeId { id: NodeId },
}

impl SemanticError {
    /// 出错的节点
    pub fn node(&self) -> NodeId {
        match self {
            Self::VariadicWithoutParameters { id, .. }
            | Self::DuplicateParameter { id, .. }
            | Self::DuplicateFunction { id, .. }
            | Self::DuplicateImport { id, .. }
            | Self::DuplicateNodeId { id } => *id,
        }
    }
}
