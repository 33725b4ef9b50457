//! Names of the tree tags with a fixed meaning outside the parser.
//!
//! Any other tag is opaque and is passed along untouched.

/// The root of a parsed program
pub const START: &str = "start";
/// A sequence of stages joined by `|`
pub const PIPELINE: &str = "pipeline";
/// Partial application with `$`
pub const CURRY: &str = "curry";
/// An external command and its arguments
pub const EXEC: &str = "exec";
pub const IDENTIFIER: &str = "identifier";

pub const UNIT_INTEGER_LITERAL: &str = "unit_integer_literal";
pub const UNIT_FLOAT_LITERAL: &str = "unit_float_literal";
pub const UNIT_LITERAL: &str = "unit_literal";
pub const UNIT_TYPE: &str = "unit_type";
pub const UNIT: &str = "unit";

pub const REASSIGN: &str = "reassign";
pub const PLUS_ASSIGN: &str = "plus_assign";
pub const MINUS_ASSIGN: &str = "minus_assign";
pub const TIMES_ASSIGN: &str = "times_assign";
pub const DIVIDE_ASSIGN: &str = "divide_assign";
pub const INT_DIV_ASSIGN: &str = "int_div_assign";
pub const MOD_ASSIGN: &str = "mod_assign";
pub const POWER_ASSIGN: &str = "power_assign";
pub const PIPE_ASSIGN: &str = "pipe_assign";
pub const CONCAT_ASSIGN: &str = "concat_assign";
pub const SEQ_AND_ASSIGN: &str = "seq_and_assign";
pub const SEQ_OR_ASSIGN: &str = "seq_or_assign";

pub const ADDITION: &str = "addition";
pub const SUBTRACTION: &str = "subtraction";
pub const MULTIPLY: &str = "multiply";
pub const DIVIDE: &str = "divide";
pub const INT_DIVIDE: &str = "int_divide";
pub const MODULUS: &str = "modulus";
pub const RAISE_POWER: &str = "raise_power";
pub const CONCATENATE: &str = "concatenate";
pub const LOGICAL_SEQUENCE: &str = "logical_sequence";
pub const AND_SEQUENCE: &str = "and_sequence";
pub const OR_SEQUENCE: &str = "or_sequence";

/// `loop { ... }`
pub const ALWAYS_LOOP: &str = "always_loop";
pub const WHILE: &str = "while";

/// `...field` as a pipeline stage
pub const SELECTION_LAMBDA_SHORTHAND: &str = "selection_lambda_shorthand";
pub const SELECT_FIELD: &str = "select_field";
pub const LAMBDA_FUNC: &str = "lambda_func";
/// A bare `_`
pub const IMPLICIT_LAMBDA_PARAM: &str = "implicit_lambda_param";
