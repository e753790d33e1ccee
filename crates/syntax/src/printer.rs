//! 语法树的文本转储，仅用于调试和测试

use std::fmt::Write;

use crate::ast::AstNode;
use crate::visitor::Listener;

/// 每个节点输出一行，子节点缩进两个空格
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Listener for TreePrinter {
    fn enter_node(&mut self, node: &dyn AstNode) {
        // 写入 String 不会失败
        let _ = writeln!(self.out, "{:indent$}{node}", "", indent = self.depth * 2);
        self.depth += 1;
    }

    fn leave_node(&mut self, _node: &dyn AstNode) {
        self.depth -= 1;
    }
}

/// 转储以 `root` 为根的整棵树
pub fn dump<N: AstNode>(root: &N) -> String {
    let mut printer = TreePrinter::new();
    printer.walk(root);
    printer.finish()
}
