use crate::expression::ops::{MAX_ARITY, OpCode};

/// Index of a node inside its [`Arena`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One AST node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// Constant value.
    Literal(f64),
    /// Position of the bound letter in the variable alphabet.
    Variable(usize),
    /// Operator applied to `arity` children; slots past `arity` are unused.
    Operator {
        /// Operator code; never one of the pseudo-codes.
        code: OpCode,
        /// Children in left-to-right source order.
        args: [NodeId; MAX_ARITY],
    },
}

impl Node {
    /// The node's code, pseudo-codes included.
    pub fn code(&self) -> OpCode {
        match self {
            Self::Literal(_) => OpCode::Literal,
            Self::Variable(_) => OpCode::Variable,
            Self::Operator { code, .. } => *code,
        }
    }

    /// Children actually used by the node.
    pub fn children(&self) -> &[NodeId] {
        match self {
            Self::Operator { code, args } => &args[..code.arity()],
            Self::Literal(_) | Self::Variable(_) => &[],
        }
    }
}

/// Append-only node storage. Children always precede their parent, so the
/// last node pushed by a successful compile is the root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Node at `id`.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the most recently appended node.
    pub fn last_id(&self) -> Option<NodeId> {
        self.nodes.len().checked_sub(1).map(|i| NodeId(i as u32))
    }

    /// All nodes in append order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
