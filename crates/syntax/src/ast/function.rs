//! 函数 / 闭包节点

use std::fmt;

use super::{AstNode, Block, NodeKind};
use crate::node_id::NodeId;
use crate::visitor::Visitor;

/// 函数或闭包的声明：形参名列表、是否可变参数、函数体
///
/// 节点本身不做任何校验。形参重名、`variadic` 为真但形参为空等情况
/// 都原样保存，由之后的语义分析报告。
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    id: NodeId,
    parameters: Vec<String>,
    variadic: bool,
    body: Option<Block>,
}

impl Function {
    pub fn builder(id: NodeId) -> FunctionBuilder {
        FunctionBuilder::new(id)
    }

    /// 按声明顺序排列的形参名，未设置时为空
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// 最后一个形参是否绑定变长实参列表
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn body(&self) -> Option<&Block> {
        self.body.as_ref()
    }

    /// 可变参数对应的形参名
    pub fn variadic_parameter(&self) -> Option<&str> {
        if self.variadic {
            self.parameters.last().map(String::as_str)
        } else {
            None
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Function{{id={}, parameters={:?}, variadic={}, body=",
            self.id, self.parameters, self.variadic
        )?;
        match &self.body {
            Some(body) => write!(f, "#{}", body.id())?,
            None => write!(f, "none")?,
        }
        write!(f, "}}")
    }
}

impl AstNode for Function {
    fn id(&self) -> NodeId {
        self.id
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Function
    }

    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> V::Output
    where
        V: Visitor<C> + ?Sized,
    {
        visitor.visit_function(self, context)
    }

    fn accept_children<C, V>(&self, visitor: &mut V, context: &mut C) -> Vec<V::Output>
    where
        V: Visitor<C> + ?Sized,
    {
        self.body
            .iter()
            .map(|body| body.accept(&mut *visitor, &mut *context))
            .collect()
    }
}

/// 解析器用来逐步填充 [`Function`] 的构建器
///
/// 各字段可按任意顺序设置，重复设置时以最后一次为准。
/// `build` 之后得到的节点不可再修改。
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    id: NodeId,
    parameters: Vec<String>,
    variadic: bool,
    body: Option<Block>,
}

impl FunctionBuilder {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            parameters: Vec::new(),
            variadic: false,
            body: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_parameters(names);
        self
    }

    pub fn set_parameters<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn variadic(mut self, variadic: bool) -> Self {
        self.set_variadic(variadic);
        self
    }

    pub fn set_variadic(&mut self, variadic: bool) -> &mut Self {
        self.variadic = variadic;
        self
    }

    pub fn body(mut self, body: Block) -> Self {
        self.set_body(body);
        self
    }

    pub fn set_body(&mut self, body: Block) -> &mut Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Function {
        Function {
            id: self.id,
            parameters: self.parameters,
            variadic: self.variadic,
            body: self.body,
        }
    }
}
