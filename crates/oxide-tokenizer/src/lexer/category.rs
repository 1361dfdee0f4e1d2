//! Closed classification enumerations shared by tokens and registries.
//!
//! Every enumeration renders, displays and serializes as its symbolic
//! upper-case name (`SESSION_OPTION`, `NULL_VALUE`, ...).

use std::fmt;

/// Declares a fieldless enum whose variants map one-to-one onto symbolic
/// names used for `as_str`, `Display` and serde.
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $text:tt,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the symbolic name of this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

symbolic_enum! {
    /// Lexical class of a token.
    pub enum TokenType {
        /// Input the engine could not classify.
        Unknown => "UNKNOWN",
        Keyword => "KEYWORD",
        /// A registered function name followed by `(`.
        Function => "FUNCTION",
        Identifier => "IDENTIFIER",
        Literal => "LITERAL",
        Operator => "OPERATOR",
        Punctuator => "PUNCTUATOR",
        /// A date-time part name such as `YEAR` or `MINUTE`.
        DateTimePart => "DATETIMEPART",
        Comment => "COMMENT",
        /// End of input; always the last token.
        EndOfFile => "END_OF_FILE",
    }
}

symbolic_enum! {
    /// Category of a registered keyword.
    pub enum KeywordCategory {
        /// Data manipulation (`SELECT`, `INSERT`, ...).
        Dml => "DML",
        /// Data definition (`CREATE`, `TABLE`, ...).
        Ddl => "DDL",
        Clause => "CLAUSE",
        /// Common table expressions.
        Cte => "CTE",
        /// Set operations (`UNION`, `INTERSECT`, `EXCEPT`).
        SetOp => "SETOP",
        SessionOption => "SESSION_OPTION",
        Predicate => "PREDICATE",
        /// `NULL`, `TRUE`, `FALSE`.
        LogicalConst => "LOGICAL_CONST",
        Transaction => "TRANSACTION",
        Security => "SECURITY",
        /// Procedural statements (`DECLARE`, `IF`, `WHILE`, ...).
        ProgStmt => "PROG_STMT",
        Misc => "MISC",
        DataType => "DATA_TYPE",
    }
}

symbolic_enum! {
    /// Shape of a literal token.
    pub enum LiteralCategory {
        String => "STRING",
        /// `E'...'` string with backslash escapes processed.
        EscapeString => "ESCAPE_STRING",
        Char => "CHAR",
        Integer => "INTEGER",
        Float => "FLOAT",
        Binary => "BINARY",
        Hex => "HEX",
        Date => "DATE",
        Time => "TIME",
        DateTime => "DATETIME",
        Interval => "INTERVAL",
        Uuid => "UUID",
        Array => "ARRAY",
        Json => "JSON",
        Xml => "XML",
        Boolean => "BOOLEAN",
        NullValue => "NULL_VALUE",
    }
}

symbolic_enum! {
    /// Category of a registered operator.
    pub enum OperatorCategory {
        Arithmetic => "ARITHMETIC",
        Assign => "ASSIGN",
        Comparison => "COMPARISON",
        Logical => "LOGICAL",
        Bitwise => "BITWISE",
        Concat => "CONCAT",
        Json => "JSON",
        Regex => "REGEX",
        Array => "ARRAY",
        Typecast => "TYPECAST",
    }
}

symbolic_enum! {
    /// Category of a registered function.
    pub enum FunctionCategory {
        Aggregate => "AGGREGATE",
        Scalar => "SCALAR",
        String => "STRING",
        DateTime => "DATETIME",
        Mathematical => "MATHEMATICAL",
        System => "SYSTEM",
        Window => "WINDOW",
    }
}

symbolic_enum! {
    /// Comment style.
    pub enum CommentKind {
        /// `-- ...` up to the end of the line.
        SingleLine => "SINGLE_LINE",
        /// `/* ... */`.
        MultiLine => "MULTI_LINE",
    }
}

symbolic_enum! {
    /// Structural role of a punctuator character.
    pub enum CommonSymbol {
        Comma => "COMMA",
        Semicolon => "SEMICOLON",
        LParen => "LPAREN",
        RParen => "RPAREN",
        LBrace => "LBRACE",
        RBrace => "RBRACE",
        LBracket => "LBRACKET",
        RBracket => "RBRACKET",
        Dot => "DOT",
        Colon => "COLON",
        /// Bind parameter markers such as `?`, `$` and `@`.
        ParamMarker => "PARAM_MARKER",
    }
}

symbolic_enum! {
    /// Component of a date or time value.
    pub enum DateTimePart {
        Year => "YEAR",
        Quarter => "QUARTER",
        Month => "MONTH",
        DayOfYear => "DAY_OF_YEAR",
        Day => "DAY",
        Week => "WEEK",
        IsoWeek => "ISO_WEEK",
        Weekday => "WEEKDAY",
        Hour => "HOUR",
        Minute => "MINUTE",
        Second => "SECOND",
        Millisecond => "MILLISECOND",
        Microsecond => "MICROSECOND",
        Nanosecond => "NANOSECOND",
        TimezoneOffset => "TIMEZONE_OFFSET",
    }
}

impl DateTimePart {
    /// Looks up a date-time part by name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "YEAR" => Some(Self::Year),
            "QUARTER" => Some(Self::Quarter),
            "MONTH" => Some(Self::Month),
            "DAY_OF_YEAR" => Some(Self::DayOfYear),
            "DAY" => Some(Self::Day),
            "WEEK" => Some(Self::Week),
            "ISO_WEEK" => Some(Self::IsoWeek),
            "WEEKDAY" => Some(Self::Weekday),
            "HOUR" => Some(Self::Hour),
            "MINUTE" => Some(Self::Minute),
            "SECOND" => Some(Self::Second),
            "MILLISECOND" => Some(Self::Millisecond),
            "MICROSECOND" => Some(Self::Microsecond),
            "NANOSECOND" => Some(Self::Nanosecond),
            "TIMEZONE_OFFSET" => Some(Self::TimezoneOffset),
            _ => None,
        }
    }
}
