// Fixed parameters of the reach-24 game
pub const TARGET: i64 = 24;
pub const CARD_MIN: i64 = 1;
pub const CARD_MAX: i64 = 13;
pub const OPERAND_COUNT: usize = 4;
