//! Pure token classification and script reassembly.
//!
//! Nothing here touches a buffer or suspends; given the same source and
//! token stream the result is always the same string.

use crate::*;

/// Rendered form of one token: reserved words take their canonical
/// upper-case spelling, every other token is the source text untouched.
///
/// Pure and infallible; an empty-span token renders as the empty string.
/// For the ASCII reserved-word set the rendered keyword equals the
/// upper-casing of the matched text, so per-token lengths happen to be
/// preserved; callers must not rely on that holding for other classifier
/// strategies.
pub fn rendered<'a>(token: &Token, source: &'a str) -> &'a str {
    match token.kind {
        TokenKind::Keyword(kw) => kw.as_str(),
        _ => token.text(source),
    }
}

/// Fold the classified token stream back into a single script.
///
/// Tokens contribute in source order with no inserted separators, so the
/// output differs from `source` only where keywords changed case.
pub fn reassemble(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len());
    for token in tokens {
        out.push_str(rendered(token, source));
    }
    out
}

/// Scan and reassemble in one step: the pure half of the pipeline.
pub fn recase(source: &str) -> (String, Vec<ScanError>) {
    let (tokens, errors) = tokenize(source);
    (reassemble(source, &tokens), errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn keyword_renders_uppercase() {
        let sql = "select";
        let (tokens, _) = tokenize(sql);
        assert_eq!(rendered(&tokens[0], sql), "SELECT");
    }

    #[test]
    fn identifier_renders_verbatim() {
        let sql = "myColumn";
        let (tokens, _) = tokenize(sql);
        assert_eq!(rendered(&tokens[0], sql), "myColumn");
    }

    #[test]
    fn string_literal_interior_is_never_recased() {
        let sql = "'Select'";
        let (tokens, _) = tokenize(sql);
        assert_eq!(tokens[0].kind, TokenKind::StringLit);
        assert_eq!(rendered(&tokens[0], sql), "'Select'");
    }

    #[rstest]
    #[case("select Id from Users", "SELECT Id FROM Users")]
    #[case("SELECT 1", "SELECT 1")]
    #[case("", "")]
    #[case("sElEcT x FrOm y", "SELECT x FROM y")]
    #[case(
        "select [from], 'where' -- and\n",
        "SELECT [from], 'where' -- and\n"
    )]
    #[case("/* select */ select", "/* select */ SELECT")]
    #[case("declare @select int", "DECLARE @select int")]
    #[case("delete from t where id between 1 and 9", "DELETE FROM t WHERE id BETWEEN 1 AND 9")]
    fn recases_only_keywords(#[case] input: &str, #[case] expected: &str) {
        let (output, errors) = recase(input);
        assert!(errors.is_empty());
        assert_eq!(output, expected);
    }

    #[rstest]
    #[case("select Id from Users")]
    #[case("select 'a' + [b] -- c\nwhere x")]
    #[case("'unclosed select")]
    #[case("update [T] set \"c\" = @v; -- done")]
    fn recasing_twice_equals_once(#[case] input: &str) {
        let (once, _) = recase(input);
        let (twice, _) = recase(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn random_scripts_are_idempotent() {
        use rand::Rng as _;
        let fragments = [
            "select", "From", "WHERE", " ", "\n", "[a b]", "'x''y'", "--z", "\n", "/*k*/", "@p",
            "#t", "42", "Users", "(", ")", ",", ";", "=", "order", "by",
        ];
        let mut rng = rand::rng();
        for _ in 0..200 {
            let n = rng.random_range(0..30);
            let sql: String = (0..n)
                .map(|_| fragments[rng.random_range(0..fragments.len())])
                .collect();
            let (once, _) = recase(&sql);
            let (twice, _) = recase(&once);
            assert_eq!(twice, once, "not idempotent for {sql:?}");
        }
    }

    #[test]
    fn ascii_keywords_preserve_script_length() {
        let input = "select Id from Users";
        let (output, _) = recase(input);
        assert_eq!(output.len(), input.len());
    }
}
