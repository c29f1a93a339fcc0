/// Binary arithmetic operators available in a puzzle expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Binding strength of an expression whose top-level operator is `self`
    pub fn binding(self) -> Binding {
        match self {
            Operator::Add | Operator::Sub => Binding::AddSub,
            Operator::Mul | Operator::Div => Binding::MulDiv,
        }
    }

    /// `-` and `/` need parentheses around a right operand of equal strength
    pub fn is_right_sensitive(self) -> bool {
        matches!(self, Operator::Sub | Operator::Div)
    }
}

/// How tightly the top level of a rendered expression binds.
///
/// Ordered `AddSub < MulDiv < Atom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Binding {
    AddSub,
    MulDiv,
    Atom,
}

impl Binding {
    /// Whether an operand of strength `self` must be parenthesized when placed
    /// on the given side of `op`
    pub fn needs_parens(self, op: Operator, is_right: bool) -> bool {
        let strength = op.binding();
        if self < strength {
            return true;
        }
        is_right && op.is_right_sensitive() && self == strength
    }
}

/// Raw arithmetic expression tree as produced by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn binding(&self) -> Binding {
        match self {
            Expression::Number(_) => Binding::Atom,
            Expression::Binary(op, _, _) => op.binding(),
        }
    }

    /// Number of integer leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary(_, l, r) => l.leaf_count() + r.leaf_count(),
        }
    }
}
