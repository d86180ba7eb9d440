//! The one-shot transformation pipeline over a text buffer.

use crate::*;
use itertools::Itertools as _;

/// Outcome of one transformation pass. Consumed once by the caller; no
/// intermediate state survives the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// No editing surface resolved; nothing to do.
    #[display("no active script buffer")]
    NoTarget,
    /// The script was already normalized; the buffer was not touched.
    #[display("script already normalized")]
    Unchanged,
    /// The buffer was rewritten in a single replacement.
    #[display("script rewritten, cursor restored to {cursor}")]
    Replaced { cursor: usize },
}

/// Normalize keyword casing in the given buffer, if any.
///
/// Strictness comes from the environment (`SQLCASE_STRICT_LEX`); see
/// [`transform_with`] for the full contract.
pub fn transform(target: Option<&mut dyn TextBuffer>) -> Result<Outcome> {
    transform_with(target, config().strict_lex)
}

/// Normalize keyword casing in the given buffer, if any.
///
/// One snapshot is read; the buffer is written at most once (a single
/// whole-content replacement) plus one caret move. When the rewrite would
/// change nothing the buffer is left completely untouched, preserving undo
/// history and caret state.
///
/// Scanner diagnostics do not stop the rewrite unless `strict` is set: the
/// token stream is best-effort and the untouched-or-fully-rewritten
/// guarantee holds either way. A rejected replacement surfaces as
/// [`Error::EditRejected`] with the buffer still in its pre-edit state.
pub fn transform_with(target: Option<&mut dyn TextBuffer>, strict: bool) -> Result<Outcome> {
    let Some(buffer) = target else {
        debug!("no active buffer, skipping");
        return Ok(Outcome::NoTarget);
    };

    let script = buffer.snapshot();
    let (tokens, scan_errors) = tokenize(&script);
    if !scan_errors.is_empty() {
        let summary = scan_errors.iter().map(ToString::to_string).join("; ");
        if strict {
            return Err(Error::InvalidScript(summary));
        }
        warn!("recasing a degraded token stream: {summary}");
    }

    let candidate = reassemble(&script, &tokens);
    if candidate == script {
        debug!("recase is a no-op, leaving the buffer untouched");
        return Ok(Outcome::Unchanged);
    }

    // Capture before mutating; only letter case changes, so the offset is
    // reapplied as-is, clamped in case the lengths diverge.
    let cursor = buffer.cursor().clamp(candidate.len());
    buffer.replace_all(&candidate)?;
    buffer.set_cursor(cursor.start());
    info!(
        old_len = script.len(),
        new_len = candidate.len(),
        "rewrote script buffer"
    );
    Ok(Outcome::Replaced {
        cursor: cursor.start(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rstest::rstest;

    #[test]
    fn no_target_is_nothing_to_do() {
        common_init();
        assert_eq!(transform_with(None, false).unwrap(), Outcome::NoTarget);
    }

    #[test]
    fn noop_never_touches_the_buffer() {
        common_init();
        let mut buffer = SpyBuffer::new("SELECT 1");
        let outcome = transform_with(Some(&mut buffer), false).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(buffer.replacements.is_empty());
        assert!(buffer.cursor_moves.is_empty());
    }

    #[test]
    fn rewrites_keywords_in_one_replacement() {
        common_init();
        let mut buffer = SpyBuffer::with_cursor("select Id from Users", 7);
        let outcome = transform_with(Some(&mut buffer), false).unwrap();
        assert_eq!(outcome, Outcome::Replaced { cursor: 7 });
        assert_eq!(buffer.replacements, vec!["SELECT Id FROM Users".to_string()]);
        assert_eq!(buffer.text(), "SELECT Id FROM Users");
        assert_eq!(buffer.cursor_moves, vec![7]);
    }

    #[test]
    fn cursor_offset_is_clamped_to_the_new_text() {
        common_init();
        let mut buffer = SpyBuffer::with_cursor("select", 999);
        let outcome = transform_with(Some(&mut buffer), false).unwrap();
        assert_eq!(outcome, Outcome::Replaced { cursor: 6 });
        assert_eq!(buffer.cursor_moves, vec![6]);
    }

    #[test]
    fn rejected_edit_leaves_the_buffer_untouched() {
        common_init();
        let mut buffer = SpyBuffer::new("select 1").rejecting_edits();
        let err = transform_with(Some(&mut buffer), false).unwrap_err();
        assert!(matches!(err, Error::EditRejected(_)));
        assert_eq!(buffer.text(), "select 1");
        assert!(buffer.cursor_moves.is_empty());
    }

    #[test]
    fn degraded_scan_still_recases_best_effort() {
        common_init();
        let mut buffer = SpyBuffer::new("select 'abc");
        let outcome = transform_with(Some(&mut buffer), false).unwrap();
        assert_eq!(outcome, Outcome::Replaced { cursor: 0 });
        assert_eq!(buffer.text(), "SELECT 'abc");
    }

    #[test]
    fn strict_mode_rejects_degraded_scripts() {
        common_init();
        let mut buffer = SpyBuffer::new("select 'abc");
        let err = transform_with(Some(&mut buffer), true).unwrap_err();
        assert!(matches!(err, Error::InvalidScript(_)));
        assert_eq!(buffer.text(), "select 'abc");
        assert!(buffer.replacements.is_empty());
    }

    #[rstest]
    #[case("select Id from Users", "SELECT Id FROM Users")]
    #[case(
        "update t set x = 1 where y is null",
        "UPDATE t SET x = 1 WHERE y IS NULL"
    )]
    #[case(
        "select 'Select' as [select] -- select\n",
        "SELECT 'Select' AS [select] -- select\n"
    )]
    fn end_to_end_rewrites(#[case] input: &str, #[case] expected: &str) {
        common_init();
        let mut buffer = SpyBuffer::new(input);
        transform_with(Some(&mut buffer), false).unwrap();
        assert_eq!(buffer.text(), expected);
    }

    #[test]
    fn memory_buffer_round_trip() {
        common_init();
        let mut buffer = MemoryBuffer::with_cursor("select Id from Users", 7);
        let outcome = transform(Some(&mut buffer)).unwrap();
        assert_eq!(outcome, Outcome::Replaced { cursor: 7 });
        assert_eq!(buffer.snapshot(), "SELECT Id FROM Users");
    }
}
