//! Built-in function vocabulary.

use super::{fold_key, text_key, FunctionInfo, Result, Symbol};
use crate::lexer::FunctionCategory as F;

const UNBOUNDED: i32 = FunctionInfo::UNBOUNDED;

/// `(name, category, min args, max args, description)` in registration
/// order. `ABS`, `CEILING`, `FLOOR` and `ROUND` are listed as scalar and
/// again as mathematical; the mathematical entries win.
const BUILTIN_FUNCTIONS: &[(&str, F, i32, i32, &str)] = &[
    ("COUNT", F::Aggregate, 1, 1, "Number of rows or non-null values"),
    ("SUM", F::Aggregate, 1, 1, "Sum of the input values"),
    ("AVG", F::Aggregate, 1, 1, "Arithmetic mean"),
    ("MIN", F::Aggregate, 1, 1, "Smallest value"),
    ("MAX", F::Aggregate, 1, 1, "Largest value"),
    ("GROUP_CONCAT", F::Aggregate, 1, UNBOUNDED, "Concatenated group values"),
    ("LISTAGG", F::Aggregate, 1, UNBOUNDED, "List aggregate"),
    ("ARRAY_AGG", F::Aggregate, 1, UNBOUNDED, "Aggregate into array"),
    ("STDDEV", F::Aggregate, 1, 1, "Standard deviation"),
    ("VARIANCE", F::Aggregate, 1, 1, "Variance"),

    ("CONVERT", F::Scalar, 2, 3, "Convert to another type"),
    ("CAST", F::Scalar, 2, 2, "Cast to another type"),
    ("COALESCE", F::Scalar, 1, UNBOUNDED, "First non-null argument"),
    ("NULLIF", F::Scalar, 2, 2, "NULL when both arguments are equal"),
    ("IFNULL", F::Scalar, 2, 2, "Fallback value for NULL"),
    ("LEAST", F::Scalar, 2, UNBOUNDED, "Least value"),
    ("GREATEST", F::Scalar, 2, UNBOUNDED, "Greatest value"),
    ("FORMAT", F::Scalar, 2, 2, "Format a value"),
    ("LENGTH", F::Scalar, 1, 1, "Length of a value"),
    ("POSITION", F::Scalar, 2, 2, "Position of substring"),
    ("ABS", F::Scalar, 1, 1, "Absolute value"),
    ("ROUND", F::Scalar, 1, 2, "Round value"),
    ("FLOOR", F::Scalar, 1, 1, "Floor value"),
    ("CEILING", F::Scalar, 1, 1, "Ceiling value"),
    ("DATE_TRUNC", F::Scalar, 2, 2, "Truncate date to part"),
    ("DATE_ADD", F::Scalar, 2, 2, "Add interval to date"),
    ("DATE_SUB", F::Scalar, 2, 2, "Subtract interval from date"),
    ("EXTRACT", F::Scalar, 2, 2, "Extract part from date/time"),

    ("UPPER", F::String, 1, 1, "Convert to upper case"),
    ("LOWER", F::String, 1, 1, "Convert to lower case"),
    ("SUBSTRING", F::String, 2, 3, "Extract a substring"),
    ("TRIM", F::String, 1, 2, "Trim characters from both ends"),
    ("LTRIM", F::String, 1, 1, "Trim leading characters"),
    ("RTRIM", F::String, 1, 1, "Trim trailing characters"),
    ("CONCAT", F::String, 2, UNBOUNDED, "Concatenate strings"),
    ("REPLACE", F::String, 3, 3, "Replace substring"),
    ("SPLIT_PART", F::String, 3, 3, "Field of a delimited string"),
    ("LEFT", F::String, 2, 2, "Left substring"),
    ("RIGHT", F::String, 2, 2, "Right substring"),
    ("REPEAT", F::String, 2, 2, "Repeat string"),
    ("REVERSE", F::String, 1, 1, "Reverse string"),
    ("CHAR_LENGTH", F::String, 1, 1, "Length in characters"),
    ("CHARACTER_LENGTH", F::String, 1, 1, "Length in characters"),

    ("DATEPART", F::DateTime, 2, 2, "Part of a date"),
    ("GETDATE", F::DateTime, 0, 0, "Current date"),
    ("NOW", F::DateTime, 0, 0, "Current timestamp"),
    ("CURRENT_DATE", F::DateTime, 0, 0, "Current date"),
    ("CURRENT_TIME", F::DateTime, 0, 0, "Current time"),
    ("CURRENT_TIMESTAMP", F::DateTime, 0, 0, "Current timestamp"),
    ("LOCALTIME", F::DateTime, 0, 0, "Local time"),
    ("LOCALTIMESTAMP", F::DateTime, 0, 0, "Local timestamp"),
    ("AGE", F::DateTime, 1, 2, "Interval between timestamps"),
    ("TO_DATE", F::DateTime, 1, 2, "Parse a date"),
    ("TO_TIMESTAMP", F::DateTime, 1, 2, "Parse a timestamp"),

    ("ABS", F::Mathematical, 1, 1, "Absolute value"),
    ("CEILING", F::Mathematical, 1, 1, "Smallest integer not below the value"),
    ("FLOOR", F::Mathematical, 1, 1, "Largest integer not above the value"),
    ("ROUND", F::Mathematical, 1, 2, "Round to a precision"),
    ("POWER", F::Mathematical, 2, 2, "Raise to a power"),
    ("SQRT", F::Mathematical, 1, 1, "Square root"),
    ("EXP", F::Mathematical, 1, 1, "Exponential"),
    ("LN", F::Mathematical, 1, 1, "Natural logarithm"),
    ("LOG", F::Mathematical, 1, 1, "Logarithm"),
    ("MOD", F::Mathematical, 2, 2, "Remainder of a division"),
    ("SIGN", F::Mathematical, 1, 1, "Sign of a number"),
    ("TRUNC", F::Mathematical, 1, 2, "Truncate toward zero"),
    ("RANDOM", F::Mathematical, 0, 0, "Random number"),
    ("PI", F::Mathematical, 0, 0, "Pi constant"),
    ("SIN", F::Mathematical, 1, 1, "Sine"),
    ("COS", F::Mathematical, 1, 1, "Cosine"),
    ("TAN", F::Mathematical, 1, 1, "Tangent"),
    ("ASIN", F::Mathematical, 1, 1, "Arc sine"),
    ("ACOS", F::Mathematical, 1, 1, "Arc cosine"),
    ("ATAN", F::Mathematical, 1, 1, "Arc tangent"),
    ("DEGREES", F::Mathematical, 1, 1, "Radians to degrees"),
    ("RADIANS", F::Mathematical, 1, 1, "Degrees to radians"),

    ("SUSER_SNAME", F::System, 0, 0, "System user name"),
    ("CURRENT_USER", F::System, 0, 0, "Current user"),
    ("SESSION_USER", F::System, 0, 0, "Session user"),
    ("USER", F::System, 0, 0, "User"),
    ("SYSTEM_USER", F::System, 0, 0, "System user"),
    ("TRANCOUNT", F::System, 0, 0, "Open transaction count"),
    ("VERSION", F::System, 0, 0, "Server version"),
    ("DATABASE", F::System, 0, 0, "Current database"),
    ("SCHEMA_NAME", F::System, 0, 1, "Current schema"),

    ("ROW_NUMBER", F::Window, 0, 0, "Sequential row number"),
    ("RANK", F::Window, 0, 0, "Rank with gaps"),
    ("DENSE_RANK", F::Window, 0, 0, "Rank without gaps"),
    ("NTILE", F::Window, 1, 1, "Bucket number"),
    ("PERCENT_RANK", F::Window, 0, 0, "Relative rank"),
    ("CUME_DIST", F::Window, 0, 0, "Cumulative distribution"),
    ("LEAD", F::Window, 1, 3, "Value from a following row"),
    ("LAG", F::Window, 1, 3, "Value from a preceding row"),
    ("FIRST_VALUE", F::Window, 1, 1, "First value in the frame"),
    ("LAST_VALUE", F::Window, 1, 1, "Last value in the frame"),
    ("NTH_VALUE", F::Window, 2, 2, "Value of the nth row in the frame"),];

impl Symbol for FunctionInfo {
    type Key = String;
    type Query = str;

    const REGISTRY: &'static str = "function";

    fn key(&self) -> Result<String> {
        text_key(&self.name, Self::REGISTRY)
    }

    fn query_key(query: &str) -> String {
        fold_key(query)
    }

    fn builtins() -> Vec<Self> {
        BUILTIN_FUNCTIONS
            .iter()
            .map(|&(name, category, min_args, max_args, description)| {
                Self::new(name, category, min_args, max_args).with_description(description)
            })
            .collect()
    }
}
