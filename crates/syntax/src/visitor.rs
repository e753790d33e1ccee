use crate::ast::*;

macro_rules! def_visitor {
    ($($Node:ident, $visit:ident, $enter:ident, $leave:ident);* $(;)?) => {
        /// 语法树访问者 trait
        ///
        /// 每种节点对应一个处理函数，由节点的 [`AstNode::accept`] 选择调用哪一个。
        /// 是否以及如何继续访问子节点由处理函数自己决定，
        /// 通常是调用 [`AstNode::accept_children`] 或对单个子节点调用 `accept`。
        pub trait Visitor<C = ()> {
            type Output;

            $(
                #[doc = concat!("处理 [`", stringify!($Node), "`] 节点")]
                fn $visit(&mut self, node: &$Node, context: &mut C) -> Self::Output;
            )*
        }

        /// 进入 / 离开节点时回调的监听者，所有方法默认为空
        pub trait Listener {
            /// 进入任意节点时调用，先于具体的 `enter_*`
            fn enter_node(&mut self, _node: &dyn AstNode) {}
            /// 离开任意节点时调用，晚于具体的 `leave_*`
            fn leave_node(&mut self, _node: &dyn AstNode) {}

            $(
                fn $enter(&mut self, _node: &$Node) {}
                fn $leave(&mut self, _node: &$Node) {}
            )*

            /// 先序遍历语法树
            fn walk<N: AstNode>(&mut self, root: &N)
            where
                Self: Sized,
            {
                root.accept(&mut Walk(self), &mut ());
            }
        }

        /// 把 [`Listener`] 适配成 [`Visitor`]，借助双分派完成遍历
        struct Walk<'a, L>(&'a mut L);

        impl<L: Listener> Visitor for Walk<'_, L> {
            type Output = ();

            $(
                fn $visit(&mut self, node: &$Node, context: &mut ()) {
                    self.0.enter_node(node);
                    self.0.$enter(node);
                    node.accept_children(self, context);
                    self.0.$leave(node);
                    self.0.leave_node(node);
                }
            )*
        }
    };
}

def_visitor! {
    CompilationUnit, visit_compilation_unit, enter_compilation_unit, leave_compilation_unit;
    ModuleDeclaration, visit_module_declaration, enter_module_declaration, leave_module_declaration;
    ImportDeclaration, visit_import_declaration, enter_import_declaration, leave_import_declaration;
    FunctionDeclaration, visit_function_declaration, enter_function_declaration, leave_function_declaration;
    Function, visit_function, enter_function, leave_function;
    Block, visit_block, enter_block, leave_block;
    ReturnStatement, visit_return_statement, enter_return_statement, leave_return_statement;
    LetOrVar, visit_let_or_var, enter_let_or_var, leave_let_or_var;
    Reference, visit_reference, enter_reference, leave_reference;
    Literal, visit_literal, enter_literal, leave_literal;
    FunctionInvocation, visit_function_invocation, enter_function_invocation, leave_function_invocation;
}
