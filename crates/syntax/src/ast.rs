use std::fmt;

use crate::node_id::NodeId;
use crate::visitor::Visitor;

mod function;

pub use function::{Function, FunctionBuilder};

/// 所有语法树节点共有的能力
///
/// `accept` / `accept_children` 带 `Self: Sized` 约束，
/// 因此 `&dyn AstNode` 仍可用于读取 id、种类和调试输出。
pub trait AstNode: fmt::Display {
    fn id(&self) -> NodeId;

    fn kind(&self) -> NodeKind;

    /// 双分派入口：调用 visitor 中该变体对应的处理函数并返回其结果
    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> V::Output
    where
        V: Visitor<C> + ?Sized,
        Self: Sized;

    /// 按声明顺序对每个直接子节点调用 `accept`
    fn accept_children<C, V>(&self, visitor: &mut V, context: &mut C) -> Vec<V::Output>
    where
        V: Visitor<C> + ?Sized,
        Self: Sized;
}

/// 以 `[#1, #2]` 的形式输出子节点 id
pub(crate) fn fmt_ids<'a, N>(
    f: &mut fmt::Formatter<'_>,
    nodes: impl IntoIterator<Item = &'a N>,
) -> fmt::Result
where
    N: AstNode + 'a,
{
    write!(f, "[")?;
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "#{}", node.id())?;
    }
    write!(f, "]")
}

macro_rules! ast_node {
    (@ty text) => { String };
    (@ty flag) => { bool };
    (@ty data ($T:ty)) => { $T };
    (@ty node ($T:ty)) => { $T };
    (@ty boxed ($T:ty)) => { Box<$T> };
    (@ty opt ($T:ty)) => { Option<$T> };
    (@ty opt_boxed ($T:ty)) => { Option<Box<$T>> };
    (@ty nodes ($T:ty)) => { Vec<$T> };

    (@arg boxed ($T:ty)) => { $T };
    (@arg opt_boxed ($T:ty)) => { Option<$T> };
    (@arg $handler:ident $( ( $($arg:tt)* ) )?) => {
        ast_node!(@ty $handler $( ( $($arg)* ) )?)
    };

    (@init $v:ident, boxed ($T:ty)) => { Box::new($v) };
    (@init $v:ident, opt_boxed ($T:ty)) => { $v.map(Box::new) };
    (@init $v:ident, $handler:ident $( ( $($arg:tt)* ) )?) => { $v };

    (@ret text) => { &str };
    (@ret flag) => { bool };
    (@ret data ($T:ty)) => { &$T };
    (@ret node ($T:ty)) => { &$T };
    (@ret boxed ($T:ty)) => { &$T };
    (@ret opt ($T:ty)) => { Option<&$T> };
    (@ret opt_boxed ($T:ty)) => { Option<&$T> };
    (@ret nodes ($T:ty)) => { &[$T] };

    (@get $self:ident, $f:ident, flag) => { $self.$f };
    (@get $self:ident, $f:ident, opt ($T:ty)) => { $self.$f.as_ref() };
    (@get $self:ident, $f:ident, opt_boxed ($T:ty)) => { $self.$f.as_deref() };
    (@get $self:ident, $f:ident, $handler:ident $( ( $($arg:tt)* ) )?) => { &$self.$f };

    (@fmt $out:ident, $v:expr, text) => { write!($out, "{:?}", $v) };
    (@fmt $out:ident, $v:expr, flag) => { write!($out, "{}", $v) };
    (@fmt $out:ident, $v:expr, data ($T:ty)) => { write!($out, "{}", $v) };
    (@fmt $out:ident, $v:expr, opt ($T:ty)) => { ast_node!(@fmt $out, $v, opt_boxed ($T)) };
    (@fmt $out:ident, $v:expr, opt_boxed ($T:ty)) => {
        match &$v {
            Some(it) => write!($out, "#{}", it.id()),
            None => write!($out, "none"),
        }
    };
    (@fmt $out:ident, $v:expr, nodes ($T:ty)) => { fmt_ids($out, &$v) };
    (@fmt $out:ident, $v:expr, $handler:ident ($T:ty)) => { write!($out, "#{}", $v.id()) };

    (@children $out:ident, $visitor:ident, $context:ident, $v:expr, node ($T:ty)) => {
        $out.push($v.accept(&mut *$visitor, &mut *$context));
    };
    (@children $out:ident, $visitor:ident, $context:ident, $v:expr, boxed ($T:ty)) => {
        $out.push($v.accept(&mut *$visitor, &mut *$context));
    };
    (@children $out:ident, $visitor:ident, $context:ident, $v:expr, opt ($T:ty)) => {
        ast_node!(@children $out, $visitor, $context, $v, opt_boxed ($T))
    };
    (@children $out:ident, $visitor:ident, $context:ident, $v:expr, opt_boxed ($T:ty)) => {
        if let Some(it) = &$v {
            $out.push(it.accept(&mut *$visitor, &mut *$context));
        }
    };
    (@children $out:ident, $visitor:ident, $context:ident, $v:expr, nodes ($T:ty)) => {
        for it in &$v {
            $out.push(it.accept(&mut *$visitor, &mut *$context));
        }
    };
    (@children $out:ident, $visitor:ident, $context:ident, $v:expr, $($rest:tt)*) => {};

    (
        $(#[$meta:meta])*
        $Name:ident ~ $visit:ident {
            $( $field:ident : $handler:ident $( ( $($arg:tt)* ) )? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $Name {
            id: NodeId,
            $( $field: ast_node!(@ty $handler $( ( $($arg)* ) )?), )*
        }

        impl $Name {
            pub fn new(id: NodeId $(, $field: ast_node!(@arg $handler $( ( $($arg)* ) )?))*) -> Self {
                Self {
                    id,
                    $( $field: ast_node!(@init $field, $handler $( ( $($arg)* ) )?), )*
                }
            }

            $(
                pub fn $field(&self) -> ast_node!(@ret $handler $( ( $($arg)* ) )?) {
                    ast_node!(@get self, $field, $handler $( ( $($arg)* ) )?)
                }
            )*
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($Name), "{{id={}"), self.id)?;
                $(
                    write!(f, concat!(", ", stringify!($field), "="))?;
                    ast_node!(@fmt f, self.$field, $handler $( ( $($arg)* ) )?)?;
                )*
                write!(f, "}}")
            }
        }

        impl AstNode for $Name {
            fn id(&self) -> NodeId {
                self.id
            }

            fn kind(&self) -> NodeKind {
                NodeKind::$Name
            }

            fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> V::Output
            where
                V: Visitor<C> + ?Sized,
            {
                visitor.$visit(self, context)
            }

            #[allow(unused_variables, unused_mut)]
            fn accept_children<C, V>(&self, visitor: &mut V, context: &mut C) -> Vec<V::Output>
            where
                V: Visitor<C> + ?Sized,
            {
                let mut out = Vec::new();
                $( ast_node!(@children out, visitor, context, self.$field, $handler $( ( $($arg)* ) )?); )*
                out
            }
        }
    };
}

macro_rules! ast_enum {
    (
        $(#[$meta:meta])*
        $Name:ident / $Kind:ident {
            $($Variant:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $Name {
            $($Variant($Variant),)*
        }

        /// 节点变体的种类标签
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $Kind {
            $($Variant,)*
        }

        impl fmt::Display for $Kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$Variant => f.write_str(stringify!($Variant)),)*
                }
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$Variant(it) => fmt::Display::fmt(it, f),)*
                }
            }
        }

        impl AstNode for $Name {
            fn id(&self) -> NodeId {
                match self {
                    $(Self::$Variant(it) => it.id(),)*
                }
            }

            fn kind(&self) -> NodeKind {
                match self {
                    $(Self::$Variant(it) => it.kind(),)*
                }
            }

            fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> V::Output
            where
                V: Visitor<C> + ?Sized,
            {
                match self {
                    $(Self::$Variant(it) => it.accept(visitor, context),)*
                }
            }

            fn accept_children<C, V>(&self, visitor: &mut V, context: &mut C) -> Vec<V::Output>
            where
                V: Visitor<C> + ?Sized,
            {
                match self {
                    $(Self::$Variant(it) => it.accept_children(visitor, context),)*
                }
            }
        }

        $(
            impl From<$Variant> for $Name {
                fn from(node: $Variant) -> Self {
                    Self::$Variant(node)
                }
            }
        )*
    };
}

ast_enum!(
    /// 任意语法树节点
    Node / NodeKind {
        CompilationUnit,
        ModuleDeclaration,
        ImportDeclaration,
        FunctionDeclaration,
        Function,
        Block,
        ReturnStatement,
        LetOrVar,
        Reference,
        Literal,
        FunctionInvocation,
    }
);

// 编译单元
ast_node!(
    /// 一个源文件：可选的模块声明、导入和顶层函数
    CompilationUnit ~ visit_compilation_unit {
        module: opt(ModuleDeclaration),
        imports: nodes(ImportDeclaration),
        functions: nodes(FunctionDeclaration),
    }
);

ast_node!(
    ModuleDeclaration ~ visit_module_declaration {
        name: text,
    }
);

ast_node!(
    ImportDeclaration ~ visit_import_declaration {
        name: text,
    }
);

// 函数
ast_node!(
    /// 具名的顶层函数，`is_local` 对应 `local function`
    FunctionDeclaration ~ visit_function_declaration {
        name: text,
        is_local: flag,
        function: node(Function),
    }
);

// 块和语句
ast_node!(
    Block ~ visit_block {
        statements: nodes(Node),
    }
);

ast_node!(
    ReturnStatement ~ visit_return_statement {
        value: opt_boxed(Node),
    }
);

ast_node!(
    LetOrVar ~ visit_let_or_var {
        binding: data(BindingKind),
        name: text,
        value: boxed(Node),
    }
);

/// `let` 绑定不可重新赋值，`var` 可以
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Let,
    Var,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Let => f.write_str("let"),
            BindingKind::Var => f.write_str("var"),
        }
    }
}

// 表达式
ast_node!(
    Reference ~ visit_reference {
        name: text,
    }
);

ast_node!(
    Literal ~ visit_literal {
        value: data(LiteralValue),
    }
);

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Int(i) => write!(f, "{i}"),
            LiteralValue::Float(x) => write!(f, "{x:?}"),
            LiteralValue::Str(s) => write!(f, "{s:?}"),
        }
    }
}

ast_node!(
    FunctionInvocation ~ visit_function_invocation {
        name: text,
        arguments: nodes(Node),
    }
);

impl FunctionDeclaration {
    /// 形参个数，同名函数按元数重载
    pub fn arity(&self) -> usize {
        self.function.parameters().len()
    }
}
