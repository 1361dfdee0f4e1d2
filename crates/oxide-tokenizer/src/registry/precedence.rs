//! Operator binding strengths, higher binds tighter.

pub const HIGHEST: u8 = 100;
/// Member access (`.`) and JSON path operators.
pub const MEMBER: u8 = 90;
/// `::` and `:` casts.
pub const TYPECAST: u8 = 85;
/// Prefix `NOT` and `~`.
pub const UNARY: u8 = 80;
pub const MULTIPLICATIVE: u8 = 70;
pub const ADDITIVE: u8 = 60;
pub const SHIFT: u8 = 55;
pub const BITWISE_AND: u8 = 50;
pub const BITWISE_XOR: u8 = 45;
pub const BITWISE_OR: u8 = 40;
pub const COMPARISON: u8 = 35;
/// `IS NULL` / `IS NOT NULL`.
pub const NULL_TEST: u8 = 30;
pub const BETWEEN: u8 = 25;
pub const IN: u8 = 20;
/// `LIKE`, `SIMILAR TO` and regex matches.
pub const PATTERN: u8 = 15;
pub const AND: u8 = 10;
pub const OR: u8 = 5;
pub const ASSIGNMENT: u8 = 1;
pub const LOWEST: u8 = 0;
