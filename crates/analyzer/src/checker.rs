//! 语法层之后的第一道检查
//!
//! 语法树节点保存解析器给出的任何数据，这里负责报告其中不一致的地方。

use std::collections::{HashMap, HashSet};

use syntax::ast::*;
use syntax::{Listener, NodeId};

use crate::error::SemanticError;
use crate::options::CheckOptions;

/// 匿名函数在错误信息中的名称
pub const CLOSURE_NAME: &str = "<closure>";

#[derive(Debug)]
pub struct Checker<'a> {
    options: &'a CheckOptions,
    errors: Vec<SemanticError>,

    seen_ids: HashSet<NodeId>,

    /// (函数名, 元数) -> 首次定义的节点
    functions: HashMap<(String, usize), NodeId>,

    /// 导入名 -> 首次导入的节点
    imports: HashMap<String, NodeId>,

    /// 下一个进入的 Function 所属的声明名
    pending_name: Option<String>,
}

impl<'a> Checker<'a> {
    pub fn new(options: &'a CheckOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
            seen_ids: HashSet::new(),
            functions: HashMap::new(),
            imports: HashMap::new(),
            pending_name: None,
        }
    }

    /// 检查以 `root` 为根的整棵树，返回发现的错误
    pub fn run<N: AstNode>(mut self, root: &N) -> Vec<SemanticError> {
        self.walk(root);
        tracing::debug!(root = %root.id(), errors = self.errors.len(), "semantic check finished");
        self.errors
    }

    fn is_full(&self) -> bool {
        self.options
            .error_limit()
            .is_some_and(|max| self.errors.len() >= max)
    }

    fn new_error(&mut self, error: SemanticError) {
        if self.is_full() {
            return;
        }
        tracing::warn!(node = %error.node(), "{error}");
        self.errors.push(error);
    }

    fn check_parameters(&mut self, name: &str, node: &Function) {
        if self.options.variadic_without_parameters
            && node.is_variadic()
            && node.parameters().is_empty()
        {
            self.new_error(SemanticError::VariadicWithoutParameters {
                function: name.to_string(),
                id: node.id(),
            });
        }

        if self.options.duplicate_parameters {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            for param in node.parameters() {
                if !seen.insert(param.as_str()) && reported.insert(param.as_str()) {
                    self.new_error(SemanticError::DuplicateParameter {
                        function: name.to_string(),
                        name: param.clone(),
                        id: node.id(),
                    });
                }
            }
        }
    }
}

impl Listener for Checker<'_> {
    fn enter_node(&mut self, node: &dyn AstNode) {
        if self.options.duplicate_node_ids && !self.seen_ids.insert(node.id()) {
            self.new_error(SemanticError::DuplicateNodeId { id: node.id() });
        }
    }

    fn enter_import_declaration(&mut self, node: &ImportDeclaration) {
        if !self.options.duplicate_imports {
            return;
        }
        if let Some(&previous) = self.imports.get(node.name()) {
            self.new_error(SemanticError::DuplicateImport {
                name: node.name().to_string(),
                id: node.id(),
                previous,
            });
        } else {
            self.imports.insert(node.name().to_string(), node.id());
        }
    }

    fn enter_function_declaration(&mut self, node: &FunctionDeclaration) {
        self.pending_name = Some(node.name().to_string());

        if !self.options.duplicate_functions {
            return;
        }
        let key = (node.name().to_string(), node.arity());
        if let Some(&previous) = self.functions.get(&key) {
            self.new_error(SemanticError::DuplicateFunction {
                name: key.0,
                arity: key.1,
                id: node.id(),
                previous,
            });
        } else {
            self.functions.insert(key, node.id());
        }
    }

    fn enter_function(&mut self, node: &Function) {
        let name = self
            .pending_name
            .take()
            .unwrap_or_else(|| CLOSURE_NAME.to_string());
        self.check_parameters(&name, node);
    }
}

/// 使用给定选项检查整棵树
pub fn check<N: AstNode>(root: &N, options: &CheckOptions) -> Vec<SemanticError> {
    Checker::new(options).run(root)
}
