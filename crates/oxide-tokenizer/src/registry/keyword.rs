//! Built-in keyword vocabulary.

use super::{fold_key, text_key, KeywordInfo, Result, Symbol};
use crate::lexer::KeywordCategory as K;

/// Keywords in registration order. Words listed in several groups end up
/// with the category of their last listing.
const BUILTIN_KEYWORDS: &[(&str, K)] = &[
    ("SELECT", K::Dml),
    ("INSERT", K::Dml),
    ("UPDATE", K::Dml),
    ("DELETE", K::Dml),
    ("MERGE", K::Dml),
    ("EXECUTE", K::Dml),
    ("VALUES", K::Dml),
    ("OUTPUT", K::Dml),
    ("DEFAULT", K::Dml),
    ("INTO", K::Dml),
    ("RETURNING", K::Dml),
    ("USING", K::Dml),

    ("CREATE", K::Ddl),
    ("ALTER", K::Ddl),
    ("DROP", K::Ddl),
    ("TRUNCATE", K::Ddl),
    ("TABLE", K::Ddl),
    ("VIEW", K::Ddl),
    ("INDEX", K::Ddl),
    ("SEQUENCE", K::Ddl),
    ("CONSTRAINT", K::Ddl),
    ("TRIGGER", K::Ddl),
    ("PRIMARY", K::Ddl),
    ("FOREIGN", K::Ddl),
    ("REFERENCES", K::Ddl),
    ("UNIQUE", K::Ddl),
    ("CHECK", K::Ddl),
    ("PARTITION", K::Ddl),
    ("COLUMN", K::Ddl),
    ("DATABASE", K::Ddl),
    ("SCHEMA", K::Ddl),
    ("TYPE", K::Ddl),
    ("KEY", K::Ddl),

    ("FROM", K::Clause),
    ("WHERE", K::Clause),
    ("GROUP", K::Clause),
    ("HAVING", K::Clause),
    ("ORDER", K::Clause),
    ("JOIN", K::Clause),
    ("INNER", K::Clause),
    ("LEFT", K::Clause),
    ("RIGHT", K::Clause),
    ("FULL", K::Clause),
    ("CROSS", K::Clause),
    ("OUTER", K::Clause),
    ("ON", K::Clause),
    ("USING", K::Clause),
    ("DISTINCT", K::Clause),
    ("TOP", K::Clause),
    ("LIMIT", K::Clause),
    ("OFFSET", K::Clause),
    ("WINDOW", K::Clause),
    ("PARTITION", K::Clause),
    ("OVER", K::Clause),
    ("AS", K::Clause),
    ("BY", K::Clause),
    ("DO", K::Clause),
    ("END", K::Clause),
    ("UNION", K::Clause),
    ("APPLY", K::Clause),

    ("WITH", K::Cte),
    ("RECURSIVE", K::Cte),

    ("UNION", K::SetOp),
    ("INTERSECT", K::SetOp),
    ("EXCEPT", K::SetOp),

    ("SET", K::SessionOption),
    ("ON", K::SessionOption),
    ("OFF", K::SessionOption),
    ("AUTOCOMMIT", K::SessionOption),
    ("IMPLICIT_TRANSACTIONS", K::SessionOption),
    ("ISOLATION_LEVEL", K::SessionOption),

    ("IN", K::Predicate),
    ("IS", K::Predicate),
    ("LIKE", K::Predicate),
    ("BETWEEN", K::Predicate),
    ("ALL", K::Predicate),
    ("ANY", K::Predicate),
    ("SOME", K::Predicate),
    ("EXISTS", K::Predicate),
    ("NOT", K::Predicate),
    ("UNIQUE", K::Predicate),

    ("NULL", K::LogicalConst),
    ("TRUE", K::LogicalConst),
    ("FALSE", K::LogicalConst),

    ("TRANSACTION", K::Transaction),
    ("BEGIN", K::Transaction),
    ("COMMIT", K::Transaction),
    ("ROLLBACK", K::Transaction),
    ("SAVEPOINT", K::Transaction),
    ("RELEASE", K::Transaction),
    ("CHAIN", K::Transaction),

    ("GRANT", K::Security),
    ("REVOKE", K::Security),
    ("DENY", K::Security),
    ("ON", K::Security),
    ("TO", K::Security),

    ("DECLARE", K::ProgStmt),
    ("SET", K::ProgStmt),
    ("PRINT", K::ProgStmt),
    ("RETURN", K::ProgStmt),
    ("THROW", K::ProgStmt),
    ("TRY", K::ProgStmt),
    ("CATCH", K::ProgStmt),
    ("IF", K::ProgStmt),
    ("ELSE", K::ProgStmt),
    ("LOOP", K::ProgStmt),
    ("WHILE", K::ProgStmt),
    ("FOR", K::ProgStmt),
    ("BREAK", K::ProgStmt),
    ("CONTINUE", K::ProgStmt),
    ("EXEC", K::ProgStmt),
    ("GO", K::ProgStmt),

    ("CASE", K::Misc),
    ("WHEN", K::Misc),
    ("THEN", K::Misc),
    ("ELSE", K::Misc),
    ("END", K::Misc),
    ("ASC", K::Misc),
    ("DESC", K::Misc),
    ("GENERATED", K::Misc),
    ("AUTOINCREMENT", K::Misc),
    ("CASCADE", K::Misc),
    ("RESTRICT", K::Misc),
    ("DEFERRABLE", K::Misc),
    ("EXPLAIN", K::Misc),
    ("ANALYZE", K::Misc),
    ("VACUUM", K::Misc),

    ("INT", K::DataType),
    ("INTEGER", K::DataType),
    ("BIGINT", K::DataType),
    ("SMALLINT", K::DataType),
    ("TINYINT", K::DataType),
    ("MEDIUMINT", K::DataType),
    ("DECIMAL", K::DataType),
    ("NUMERIC", K::DataType),
    ("FLOAT", K::DataType),
    ("REAL", K::DataType),
    ("DOUBLE", K::DataType),
    ("CHAR", K::DataType),
    ("VARCHAR", K::DataType),
    ("TEXT", K::DataType),
    ("CLOB", K::DataType),
    ("BINARY", K::DataType),
    ("VARBINARY", K::DataType),
    ("BLOB", K::DataType),
    ("DATE", K::DataType),
    ("TIME", K::DataType),
    ("TIMESTAMP", K::DataType),
    ("DATETIME", K::DataType),
    ("INTERVAL", K::DataType),
    ("BOOLEAN", K::DataType),
    ("UUID", K::DataType),
    ("JSON", K::DataType),
    ("XML", K::DataType),
    ("ARRAY", K::DataType),
];

impl Symbol for KeywordInfo {
    type Key = String;
    type Query = str;

    const REGISTRY: &'static str = "keyword";

    fn key(&self) -> Result<String> {
        text_key(&self.lexeme, Self::REGISTRY)
    }

    fn query_key(query: &str) -> String {
        fold_key(query)
    }

    fn builtins() -> Vec<Self> {
        BUILTIN_KEYWORDS
            .iter()
            .map(|&(lexeme, category)| Self::new(lexeme, category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::KeywordCategory;
    use crate::registry::KeywordRegistry;

    fn category(word: &str) -> KeywordCategory {
        KeywordRegistry::default().try_get(word).unwrap().category
    }

    #[test]
    fn test_group_categories() {
        assert_eq!(category("select"), KeywordCategory::Dml);
        assert_eq!(category("TRUNCATE"), KeywordCategory::Ddl);
        assert_eq!(category("Where"), KeywordCategory::Clause);
        assert_eq!(category("RECURSIVE"), KeywordCategory::Cte);
        assert_eq!(category("INTERSECT"), KeywordCategory::SetOp);
        assert_eq!(category("AUTOCOMMIT"), KeywordCategory::SessionOption);
        assert_eq!(category("BETWEEN"), KeywordCategory::Predicate);
        assert_eq!(category("NULL"), KeywordCategory::LogicalConst);
        assert_eq!(category("SAVEPOINT"), KeywordCategory::Transaction);
        assert_eq!(category("GRANT"), KeywordCategory::Security);
        assert_eq!(category("DECLARE"), KeywordCategory::ProgStmt);
        assert_eq!(category("VACUUM"), KeywordCategory::Misc);
        assert_eq!(category("VARCHAR"), KeywordCategory::DataType);
    }

    #[test]
    fn test_duplicates_keep_last_category() {
        assert_eq!(category("ON"), KeywordCategory::Security);
        assert_eq!(category("USING"), KeywordCategory::Clause);
        assert_eq!(category("PARTITION"), KeywordCategory::Clause);
        assert_eq!(category("UNION"), KeywordCategory::SetOp);
        assert_eq!(category("END"), KeywordCategory::Misc);
        assert_eq!(category("ELSE"), KeywordCategory::Misc);
        assert_eq!(category("SET"), KeywordCategory::ProgStmt);
        assert_eq!(category("UNIQUE"), KeywordCategory::Predicate);
    }

    #[test]
    fn test_unknown_word() {
        assert!(KeywordRegistry::default().try_get("customers").is_none());
    }
}
