pub mod ast;
pub mod node_id;
pub mod parent_map;
pub mod printer;
pub mod visitor;


pub use ast::AstNode;
pub use ast::Node;
pub use ast::NodeKind;
pub use node_id::NodeId;
pub use node_id::NodeIdGen;
pub use printer::dump;
pub use visitor::Listener;
pub use visitor::Visitor;
