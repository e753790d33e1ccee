use std::fmt;

/// 语法树节点标识
///
/// 在一次解析会话内唯一，构造时分配，之后不再改变。
/// 只用于诊断和节点间关联，不参与语义上的相等比较。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 解析会话的节点 id 分配器，单调递增，不会复用
///
/// `u32::MAX` 也会被分配，之后再申请 id 会 panic。
#[derive(Debug)]
pub struct NodeIdGen {
    /// `None` 表示 id 已全部分配
    next: Option<u32>,
}

impl Default for NodeIdGen {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl NodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从指定的 id 开始分配
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    pub fn next_id(&mut self) -> NodeId {
        let raw = self.next.expect("node id space exhausted");
        self.next = raw.checked_add(1);
        NodeId(raw)
    }

    /// 下一个将被分配的 id，已分配完时为 `None`
    pub fn peek(&self) -> Option<NodeId> {
        self.next.map(NodeId)
    }
}
