use core::fmt;
use std::ops::Range;

use crate::input::{IStr, IStrError, NL};

/// Used in macros to associate input position context with an error.
#[doc(hidden)]
pub fn error_context<E>(path: &'static str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let pos = match error.downcast_ref::<IStrError>() {
        Some(e) => Some(pos_from(data.as_data(), e.span())),
        None => None,
    };

    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Debug, Clone, Copy)]
pub struct LineCol {
    line: usize,
    col: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{col}", col = self.col)
    }
}

/// Resolve a byte span against the full input to a line and column.
fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(head) = data.get(..span.start) else {
        return LineCol::new(0, 0);
    };

    let line = memchr::memchr_iter(NL, head).count();

    let col = match head.iter().rposition(|&b| b == NL) {
        Some(n) => head.len() - (n + 1),
        None => head.len(),
    };

    LineCol::new(line, col)
}

/// Context layer naming the input file and position an error refers to.
#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => write!(f, "{path}", path = self.path),
        }
    }
}
