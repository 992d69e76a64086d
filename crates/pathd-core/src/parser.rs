use crate::scanner::{ScanKind, ScanToken, Scanner};
use crate::token::{Cmd, ErrorKind, PathToken};

/// Grammar-aware SVG path parser.
///
/// Pull-based: each [`Iterator::next`] call scans exactly one high-level
/// token. The stream is a run of [`PathToken::Command`] tokens (optionally
/// preceded by one [`PathToken::Wsp`]) and ends either cleanly at the end of
/// the input or with a single [`PathToken::Error`], after which no further
/// tokens are produced. Re-parsing requires a fresh parser; the cursor never
/// rewinds.
#[derive(Debug, Clone)]
pub struct PathParser<'a> {
    scanner: Scanner<'a>,
    path: &'a str,
    lax: bool,
    started: bool,
    done: bool,
    last: Option<ScanToken>,
    pending: Option<PathToken>,
}

impl<'a> PathParser<'a> {
    /// Strict parser: the first command must be a move (`m`/`M`).
    pub fn new(path: &'a str) -> Self {
        Self {
            scanner: Scanner::new(path),
            path,
            lax: false,
            started: false,
            done: false,
            last: None,
            pending: None,
        }
    }

    /// Fragment parser: waives the leading-move rule so a partial path can be
    /// parsed for splicing into a larger one. All other rules are identical.
    pub fn fragment(path: &'a str) -> Self {
        Self {
            lax: true,
            ..Self::new(path)
        }
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    fn text(&self, t: ScanToken) -> &'a str {
        &self.path[t.index..t.index + t.len]
    }

    fn number_value(&self, t: ScanToken) -> f64 {
        self.text(t).parse().unwrap_or(0.0)
    }

    /// Pick the error category from what was actually found at the offset.
    fn classify_kind(&self, t: ScanToken) -> ErrorKind {
        match t.kind {
            ScanKind::Command => ErrorKind::UnexpectedCommand,
            ScanKind::CommaWsp => ErrorKind::UnexpectedComma,
            ScanKind::Number => ErrorKind::UnexpectedNumber,
            _ => match self.path.as_bytes().get(t.index).copied() {
                Some(b'+') | Some(b'-') => ErrorKind::UnexpectedSign,
                Some(b'.') => ErrorKind::UnexpectedDot,
                _ => ErrorKind::UnexpectedToken,
            },
        }
    }

    /// Error tokens consume the whole remaining path.
    fn error_token(&self, t: ScanToken, kind: ErrorKind) -> PathToken {
        PathToken::Error {
            kind,
            index: t.index,
            len: self.path.len() - t.index,
        }
    }

    /// Terminate the traversal with an error. An error already stashed while
    /// collecting the current command takes precedence.
    fn emit_error(&mut self, t: ScanToken, kind: ErrorKind) -> PathToken {
        self.done = true;
        if let Some(pending) = self.pending.take() {
            return pending;
        }
        self.error_token(t, kind)
    }

    fn fail(&mut self, t: ScanToken) -> PathToken {
        let kind = self.classify_kind(t);
        self.emit_error(t, kind)
    }

    /// Assemble one command token starting at `cmd_tok`.
    ///
    /// Collects every scanner token up to (not including) the next command
    /// letter, enforcing the separator rules: the separator right after the
    /// command letter is white space only, a comma is legal only directly
    /// after a number, and an unknown token stashes a pending error while the
    /// already-collected values still form a best-effort command token.
    fn command(&mut self, cmd_tok: ScanToken) -> PathToken {
        let letter = self.path.as_bytes()[cmd_tok.index];
        let Some((cmd, relative)) = Cmd::from_letter(letter) else {
            return self.fail(cmd_tok);
        };
        self.started = true;

        let mut tokens = vec![cmd_tok];
        let mut forbid_comma = true;

        self.last = self.scanner.next();
        while let Some(t) = self.last {
            match t.kind {
                ScanKind::Command => break,
                ScanKind::Wsp => tokens.push(t),
                ScanKind::CommaWsp => {
                    if forbid_comma {
                        return self.fail(t);
                    }
                    forbid_comma = true;
                    tokens.push(t);
                }
                ScanKind::Number => {
                    forbid_comma = false;
                    tokens.push(t);
                }
                ScanKind::Unknown => {
                    if self.pending.is_none() {
                        let kind = self.classify_kind(t);
                        self.pending = Some(self.error_token(t, kind));
                    }
                    break;
                }
            }
            self.last = self.scanner.next();
        }

        match cmd {
            Cmd::ClosePath => self.close(relative, tokens),
            Cmd::Arc => self.arc(relative, tokens),
            _ => self.repeat(cmd, relative, tokens),
        }
    }

    /// Shorthand repetition: `count` collected values must form whole
    /// arity-sized tuples. A partial trailing tuple re-anchors the error at
    /// its first excess value; a trailing separator is excluded from the
    /// command's span and reported on its own.
    fn repeat(&mut self, cmd: Cmd, relative: bool, mut tokens: Vec<ScanToken>) -> PathToken {
        let arity = cmd.arity();
        let count = tokens
            .iter()
            .filter(|t| t.kind == ScanKind::Number)
            .count();

        if count < arity {
            return match self.last {
                // Not enough values before the next command letter.
                Some(t) if t.kind == ScanKind::Command => self.fail(t),
                _ => self.fail(tokens[0]),
            };
        }

        let excess = count % arity;
        let stop = if excess > 0 {
            tokens
                .iter()
                .filter(|t| t.kind == ScanKind::Number)
                .nth(count - excess)
                .copied()
        } else {
            None
        };

        if self.pending.is_none() {
            if let Some(t) = stop {
                let kind = self.classify_kind(t);
                self.pending = Some(self.error_token(t, kind));
            } else if tokens.last().is_some_and(|t| t.kind == ScanKind::CommaWsp) {
                if let Some(t) = tokens.pop() {
                    let kind = self.classify_kind(t);
                    self.pending = Some(self.error_token(t, kind));
                }
            }
        }

        let mut len = 0;
        for t in &tokens {
            if stop.is_some_and(|s| s.index == t.index) {
                break;
            }
            len += t.len;
        }

        let numbers = tokens
            .iter()
            .filter(|t| t.kind == ScanKind::Number)
            .take(count - excess)
            .map(|t| self.number_value(*t))
            .collect();

        PathToken::Command {
            cmd,
            relative,
            index: tokens[0].index,
            len,
            numbers,
        }
    }

    /// Arc validation runs before tuple grouping: too few values anchor the
    /// error at the arc letter itself, and the flag positions of every
    /// 7-tuple must hold the literal `0` or `1` (no sign, dot, or extra
    /// digits), even where a generic coordinate would be well formed.
    fn arc(&mut self, relative: bool, tokens: Vec<ScanToken>) -> PathToken {
        let count = tokens
            .iter()
            .filter(|t| t.kind == ScanKind::Number)
            .count();
        if count < 7 {
            return self.fail(tokens[0]);
        }

        for (i, t) in tokens
            .iter()
            .filter(|t| t.kind == ScanKind::Number)
            .enumerate()
        {
            if matches!(i % 7, 3 | 4) {
                let text = self.text(*t);
                if text != "0" && text != "1" {
                    return self.emit_error(*t, ErrorKind::InvalidArcFlag);
                }
            }
        }

        self.repeat(Cmd::Arc, relative, tokens)
    }

    /// Close-path takes no arguments; it absorbs trailing white space and
    /// anything else after it must start a new command.
    fn close(&mut self, relative: bool, tokens: Vec<ScanToken>) -> PathToken {
        let mut len = tokens[0].len;
        let mut offender = None;
        for t in &tokens[1..] {
            if t.kind == ScanKind::Wsp {
                len += t.len;
            } else {
                offender = Some(*t);
                break;
            }
        }

        if let Some(t) = offender {
            // Positionally earlier than any stashed unknown-character error.
            let kind = self.classify_kind(t);
            self.pending = Some(self.error_token(t, kind));
        }

        PathToken::Command {
            cmd: Cmd::ClosePath,
            relative,
            index: tokens[0].index,
            len,
            numbers: Vec::new(),
        }
    }
}

impl Iterator for PathParser<'_> {
    type Item = PathToken;

    fn next(&mut self) -> Option<PathToken> {
        if let Some(err) = self.pending.take() {
            self.done = true;
            return Some(err);
        }

        if self.done {
            return None;
        }

        if let Some(t) = self.last.filter(|t| t.kind == ScanKind::Command) {
            self.last = None;
            return Some(self.command(t));
        }

        let Some(t) = self.scanner.next() else {
            self.done = true;
            return None;
        };

        match t.kind {
            ScanKind::Command => {
                let letter = self.path.as_bytes()[t.index];
                if self.started || self.lax || letter.eq_ignore_ascii_case(&b'm') {
                    Some(self.command(t))
                } else {
                    Some(self.fail(t))
                }
            }
            ScanKind::Wsp => Some(PathToken::Wsp {
                index: t.index,
                len: t.len,
            }),
            _ => Some(self.fail(t)),
        }
    }
}
