use std::collections::HashMap;

use crate::ast::AstNode;
use crate::node_id::NodeId;
use crate::visitor::Listener;

/// 子节点 id 到父节点 id 的索引
///
/// 节点不持有父节点，需要向上查找时通过这里按 id 查询。
#[derive(Debug, Default)]
pub struct ParentMap {
    parents: HashMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl ParentMap {
    pub fn build<N: AstNode>(root: &N) -> Self {
        let mut builder = ParentMapBuilder::default();
        builder.walk(root);
        builder.map
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    /// 从直接父节点开始，依次向上直到根节点
    ///
    /// id 重复的树可能形成环，最多返回 `len()` 个节点。
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&it| self.parent(it)).take(self.len())
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[derive(Default)]
struct ParentMapBuilder {
    map: ParentMap,
    stack: Vec<NodeId>,
}

impl Listener for ParentMapBuilder {
    fn enter_node(&mut self, node: &dyn AstNode) {
        match self.stack.last() {
            Some(&parent) => {
                self.map.parents.insert(node.id(), parent);
            }
            None => self.map.root = Some(node.id()),
        }
        self.stack.push(node.id());
    }

    fn leave_node(&mut self, _node: &dyn AstNode) {
        self.stack.pop();
    }
}
