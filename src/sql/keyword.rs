//! SQL reserved-word model used by the scanner and the recasing pipeline.
//!
//! This module defines the set of reserved words whose spelling is fixed by
//! the grammar and which are therefore eligible for case normalization.
//! Words not in this set (identifiers, column names, the contents of
//! literals) are never case-altered.
//!
//! Design notes:
//! - Keywords are matched case-insensitively via `from_lower` using a
//!   pre-lower-cased string slice.
//! - `as_str` provides the canonical upper-case spelling, which is also the
//!   rendered form during recasing. For this ASCII-only set it is always
//!   equal to upper-casing the matched source text.
//! - The derived traits make it easy to compare, copy, and log values.
//!
//! Safety & Compatibility:
//! - Adding new variants is non-breaking for downstream code that uses
//!   exhaustive matches with a wildcard (`_`). A word missing from this set
//!   is left verbatim in the output, so omissions are conservative.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Add,
    All,
    Alter,
    And,
    Any,
    As,
    Asc,
    Begin,
    Between,
    Break,
    By,
    Case,
    Check,
    Close,
    Column,
    Commit,
    Constraint,
    Continue,
    Create,
    Cross,
    Cursor,
    Database,
    Declare,
    Default,
    Delete,
    Desc,
    Distinct,
    Drop,
    Else,
    End,
    Escape,
    Except,
    Exec,
    Execute,
    Exists,
    Fetch,
    For,
    Foreign,
    From,
    Full,
    Function,
    Goto,
    Grant,
    Group,
    Having,
    If,
    In,
    Index,
    Inner,
    Insert,
    Intersect,
    Into,
    Is,
    Join,
    Key,
    Left,
    Like,
    Merge,
    Not,
    Null,
    Of,
    Off,
    Offset,
    On,
    Open,
    Or,
    Order,
    Outer,
    Over,
    Percent,
    Primary,
    Print,
    Procedure,
    References,
    Return,
    Revoke,
    Right,
    Rollback,
    Select,
    Set,
    Table,
    Then,
    To,
    Top,
    Transaction,
    Trigger,
    Union,
    Unique,
    Update,
    Use,
    Values,
    View,
    When,
    Where,
    While,
    With,
}

impl Keyword {
    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized reserved word.
    ///
    /// NOTE: The caller is responsible for lower-casing the input. This
    /// avoids allocating new strings for each token; `to_ascii_lowercase`
    /// is typically performed once per word lexeme outside this function.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "add" => Add,
            "all" => All,
            "alter" => Alter,
            "and" => And,
            "any" => Any,
            "as" => As,
            "asc" => Asc,
            "begin" => Begin,
            "between" => Between,
            "break" => Break,
            "by" => By,
            "case" => Case,
            "check" => Check,
            "close" => Close,
            "column" => Column,
            "commit" => Commit,
            "constraint" => Constraint,
            "continue" => Continue,
            "create" => Create,
            "cross" => Cross,
            "cursor" => Cursor,
            "database" => Database,
            "declare" => Declare,
            "default" => Default,
            "delete" => Delete,
            "desc" => Desc,
            "distinct" => Distinct,
            "drop" => Drop,
            "else" => Else,
            "end" => End,
            "escape" => Escape,
            "except" => Except,
            "exec" => Exec,
            "execute" => Execute,
            "exists" => Exists,
            "fetch" => Fetch,
            "for" => For,
            "foreign" => Foreign,
            "from" => From,
            "full" => Full,
            "function" => Function,
            "goto" => Goto,
            "grant" => Grant,
            "group" => Group,
            "having" => Having,
            "if" => If,
            "in" => In,
            "index" => Index,
            "inner" => Inner,
            "insert" => Insert,
            "intersect" => Intersect,
            "into" => Into,
            "is" => Is,
            "join" => Join,
            "key" => Key,
            "left" => Left,
            "like" => Like,
            "merge" => Merge,
            "not" => Not,
            "null" => Null,
            "of" => Of,
            "off" => Off,
            "offset" => Offset,
            "on" => On,
            "open" => Open,
            "or" => Or,
            "order" => Order,
            "outer" => Outer,
            "over" => Over,
            "percent" => Percent,
            "primary" => Primary,
            "print" => Print,
            "procedure" => Procedure,
            "references" => References,
            "return" => Return,
            "revoke" => Revoke,
            "right" => Right,
            "rollback" => Rollback,
            "select" => Select,
            "set" => Set,
            "table" => Table,
            "then" => Then,
            "to" => To,
            "top" => Top,
            "transaction" => Transaction,
            "trigger" => Trigger,
            "union" => Union,
            "unique" => Unique,
            "update" => Update,
            "use" => Use,
            "values" => Values,
            "view" => View,
            "when" => When,
            "where" => Where,
            "while" => While,
            "with" => With,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical upper-case string form of the keyword, the spelling used
    /// when the word is rewritten.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Add => "ADD",
            All => "ALL",
            Alter => "ALTER",
            And => "AND",
            Any => "ANY",
            As => "AS",
            Asc => "ASC",
            Begin => "BEGIN",
            Between => "BETWEEN",
            Break => "BREAK",
            By => "BY",
            Case => "CASE",
            Check => "CHECK",
            Close => "CLOSE",
            Column => "COLUMN",
            Commit => "COMMIT",
            Constraint => "CONSTRAINT",
            Continue => "CONTINUE",
            Create => "CREATE",
            Cross => "CROSS",
            Cursor => "CURSOR",
            Database => "DATABASE",
            Declare => "DECLARE",
            Default => "DEFAULT",
            Delete => "DELETE",
            Desc => "DESC",
            Distinct => "DISTINCT",
            Drop => "DROP",
            Else => "ELSE",
            End => "END",
            Escape => "ESCAPE",
            Except => "EXCEPT",
            Exec => "EXEC",
            Execute => "EXECUTE",
            Exists => "EXISTS",
            Fetch => "FETCH",
            For => "FOR",
            Foreign => "FOREIGN",
            From => "FROM",
            Full => "FULL",
            Function => "FUNCTION",
            Goto => "GOTO",
            Grant => "GRANT",
            Group => "GROUP",
            Having => "HAVING",
            If => "IF",
            In => "IN",
            Index => "INDEX",
            Inner => "INNER",
            Insert => "INSERT",
            Intersect => "INTERSECT",
            Into => "INTO",
            Is => "IS",
            Join => "JOIN",
            Key => "KEY",
            Left => "LEFT",
            Like => "LIKE",
            Merge => "MERGE",
            Not => "NOT",
            Null => "NULL",
            Of => "OF",
            Off => "OFF",
            Offset => "OFFSET",
            On => "ON",
            Open => "OPEN",
            Or => "OR",
            Order => "ORDER",
            Outer => "OUTER",
            Over => "OVER",
            Percent => "PERCENT",
            Primary => "PRIMARY",
            Print => "PRINT",
            Procedure => "PROCEDURE",
            References => "REFERENCES",
            Return => "RETURN",
            Revoke => "REVOKE",
            Right => "RIGHT",
            Rollback => "ROLLBACK",
            Select => "SELECT",
            Set => "SET",
            Table => "TABLE",
            Then => "THEN",
            To => "TO",
            Top => "TOP",
            Transaction => "TRANSACTION",
            Trigger => "TRIGGER",
            Union => "UNION",
            Unique => "UNIQUE",
            Update => "UPDATE",
            Use => "USE",
            Values => "VALUES",
            View => "VIEW",
            When => "WHEN",
            Where => "WHERE",
            While => "WHILE",
            With => "WITH",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
