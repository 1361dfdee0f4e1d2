//! Cancellable asynchronous token streams.

use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::stream::{FusedStream, Stream};
use tracing::debug;

use super::{Lexer, Token};

/// A cooperative cancellation signal shared between a host and streams.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Creates a flag that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Asynchronous view of a [`Lexer`].
///
/// The stream yields to the executor once before producing each token and
/// checks its [`CancellationFlag`] before each token. After cancellation
/// the stream ends; it never produces a partial token and cannot be
/// resumed.
#[derive(Debug)]
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    cancel: CancellationFlag,
    /// Whether the yield point for the next token has been taken.
    yielded: bool,
    done: bool,
}

impl<'a> TokenStream<'a> {
    /// Wraps a lexer.
    #[must_use]
    pub const fn new(lexer: Lexer<'a>, cancel: CancellationFlag) -> Self {
        Self {
            lexer,
            cancel,
            yielded: false,
            done: false,
        }
    }
}

impl Stream for TokenStream<'_> {
    type Item = Token;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Token>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }
        if this.cancel.is_cancelled() {
            this.done = true;
            debug!(
                line = this.lexer.line(),
                column = this.lexer.column(),
                "Token stream cancelled"
            );
            return Poll::Ready(None);
        }
        if !this.yielded {
            this.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        this.yielded = false;
        let token = this.lexer.next();
        if token.is_none() {
            this.done = true;
        }
        Poll::Ready(token)
    }
}

impl FusedStream for TokenStream<'_> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::StreamExt;

    #[test]
    fn test_stream_matches_lexer() {
        let sql = "SELECT a, b FROM t WHERE a > 1";
        let streamed: Vec<Token> =
            block_on(TokenStream::new(Lexer::new(sql), CancellationFlag::new()).collect());
        assert_eq!(streamed, Lexer::new(sql).tokenize());
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = CancellationFlag::new();
        cancel.cancel();
        let mut stream = TokenStream::new(Lexer::new("SELECT 1"), cancel);
        assert!(block_on(stream.next()).is_none());
        assert!(stream.is_terminated());
    }

    #[test]
    fn test_cancel_mid_stream() {
        let cancel = CancellationFlag::new();
        let mut stream = TokenStream::new(Lexer::new("SELECT a FROM t"), cancel.clone());
        let first = block_on(stream.next()).unwrap();
        assert_eq!(first.lexeme, "SELECT");
        cancel.cancel();
        assert!(block_on(stream.next()).is_none());
        assert!(block_on(stream.next()).is_none());
    }

    #[test]
    fn test_clones_share_flag() {
        let flag = CancellationFlag::new();
        let clone = flag.clone();
        assert!(!flag.is_cancelled());
        clone.cancel();
        assert!(flag.is_cancelled());
    }
}
