use core::fmt;

/// Scalar type every node evaluates to.
pub type Scalar = f32;

/// Largest arity of any operator (`fbm`, `turbulence`, `picture`).
pub const MAX_ARITY: usize = 3;

/// Index of a node inside its tree's arena. Two ids are the same node iff they are equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of node variants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// Evaluates `atan2(y, x)` on the raw evaluation coordinates and ignores both children.
    /// Kept this way so saved pictures keep rendering the same.
    Atan2,
    Atan,
    Sin,
    Cos,
    /// `80 * simplex2(c0, c1) - 2`.
    Noise,
    /// Sum of absolute simplex octaves at `(c0, c1)` with frequency `c2`.
    Turbulence,
    Ceil,
    /// Fractal brownian motion at `(c0, c1)` with frequency `c2`.
    Fbm,
    Floor,
    Negate,
    Square,
    Abs,
    X,
    Y,
    Const(Scalar),
    /// Red, green and blue channels of a saved picture. Never evaluated.
    Picture,
}

/// Operators a random tree may contain, in generator order.
pub const OPERATORS: [Op; 16] = [
    Op::Add,
    Op::Sub,
    Op::Mul,
    Op::Div,
    Op::Atan2,
    Op::Atan,
    Op::Sin,
    Op::Cos,
    Op::Noise,
    Op::Turbulence,
    Op::Ceil,
    Op::Fbm,
    Op::Floor,
    Op::Negate,
    Op::Square,
    Op::Abs,
];

impl Op {
    pub const fn arity(self) -> usize {
        match self {
            Op::X | Op::Y | Op::Const(_) => 0,
            Op::Atan | Op::Sin | Op::Cos | Op::Ceil | Op::Floor | Op::Negate | Op::Square | Op::Abs => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Atan2 | Op::Noise => 2,
            Op::Turbulence | Op::Fbm | Op::Picture => 3,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.arity() == 0
    }

    /// Token used by the text format. `None` for constants, which print their value.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Atan2 => "atan2",
            Op::Atan => "atan",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Noise => "snoise2",
            Op::Turbulence => "turbulence",
            Op::Ceil => "ceil",
            Op::Fbm => "fbm",
            Op::Floor => "floor",
            Op::Negate => "negate",
            Op::Square => "square",
            Op::Abs => "abs",
            Op::X => "x",
            Op::Y => "y",
            Op::Picture => "picture",
            Op::Const(_) => return None,
        })
    }

    /// Reverse of [`Op::name`]. Exact, case-sensitive match.
    pub fn from_name(token: &str) -> Option<Op> {
        let op = match token {
            "+" => Op::Add,
            "-" => Op::Sub,
            "*" => Op::Mul,
            "/" => Op::Div,
            "atan2" => Op::Atan2,
            "atan" => Op::Atan,
            "sin" => Op::Sin,
            "cos" => Op::Cos,
            "snoise2" => Op::Noise,
            "turbulence" => Op::Turbulence,
            "ceil" => Op::Ceil,
            "fbm" => Op::Fbm,
            "floor" => Op::Floor,
            "negate" => Op::Negate,
            "square" => Op::Square,
            "abs" => Op::Abs,
            "x" => Op::X,
            "y" => Op::Y,
            "picture" => Op::Picture,
            _ => return None,
        };
        Some(op)
    }
}

/// One arena slot: the variant, its child slots and a non-owning parent link.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub op: Op,
    pub parent: Option<NodeId>,
    slots: [Option<NodeId>; MAX_ARITY],
}

impl Node {
    /// A node with every child slot open.
    pub fn new(op: Op, parent: Option<NodeId>) -> Self {
        Self {
            op,
            parent,
            slots: [None; MAX_ARITY],
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.op.arity()
    }

    /// Child slots, exactly `arity` long.
    #[inline]
    pub fn children(&self) -> &[Option<NodeId>] {
        &self.slots[..self.op.arity()]
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut [Option<NodeId>] {
        let arity = self.op.arity();
        &mut self.slots[..arity]
    }

    #[inline]
    pub fn child(&self, slot: usize) -> Option<NodeId> {
        self.children().get(slot).copied().flatten()
    }

    /// Slot holding `child`, compared by identity.
    pub fn slot_of(&self, child: NodeId) -> Option<usize> {
        self.children().iter().position(|c| *c == Some(child))
    }
}
