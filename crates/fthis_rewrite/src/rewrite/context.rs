//! Lexical context tracking.
//!
//! The rewriter never tokenizes its input. It only needs to know whether the
//! cursor sits in code, where `ƒ` and brackets are meaningful, or inside a
//! string, comment or template literal, where they are plain text. Each state
//! has its own transition function; [`Tracker`] applies them and keeps the
//! stack of open template literals.

/// Lexical region containing the scan cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Code,
    SingleQuoteString,
    DoubleQuoteString,
    LineComment,
    BlockComment,
    /// Literal text of a template, between `` ` `` / `}` and `${` / `` ` ``.
    TemplateLiteral,
    /// Code inside a template's `${ ... }`.
    TemplateInterpolation,
}

/// What a transition function asks the tracker to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Stay,
    Enter(ScanState),
    /// Close the current region and return to the enclosing one.
    Exit,
    OpenBrace,
    CloseBrace,
}

/// A transition plus the number of characters it consumes.
#[derive(Debug, Clone, Copy)]
struct Step {
    action: Move,
    width: usize,
}

impl Step {
    const fn new(action: Move, width: usize) -> Self {
        Self { action, width }
    }

    const fn one(action: Move) -> Self {
        Self::new(action, 1)
    }
}

fn code(c: char, next: Option<char>) -> Step {
    match (c, next) {
        ('\'', _) => Step::one(Move::Enter(ScanState::SingleQuoteString)),
        ('"', _) => Step::one(Move::Enter(ScanState::DoubleQuoteString)),
        ('`', _) => Step::one(Move::Enter(ScanState::TemplateLiteral)),
        ('/', Some('/')) => Step::new(Move::Enter(ScanState::LineComment), 2),
        ('/', Some('*')) => Step::new(Move::Enter(ScanState::BlockComment), 2),
        _ => Step::one(Move::Stay),
    }
}

fn quoted(quote: char, c: char) -> Step {
    if c == '\\' {
        Step::new(Move::Stay, 2)
    } else if c == quote {
        Step::one(Move::Exit)
    } else {
        Step::one(Move::Stay)
    }
}

fn line_comment(c: char) -> Step {
    if c == '\n' {
        Step::one(Move::Exit)
    } else {
        Step::one(Move::Stay)
    }
}

fn block_comment(c: char, next: Option<char>) -> Step {
    match (c, next) {
        ('*', Some('/')) => Step::new(Move::Exit, 2),
        _ => Step::one(Move::Stay),
    }
}

fn template_literal(c: char, next: Option<char>) -> Step {
    match (c, next) {
        ('\\', _) => Step::new(Move::Stay, 2),
        ('`', _) => Step::one(Move::Exit),
        ('$', Some('{')) => Step::new(Move::Enter(ScanState::TemplateInterpolation), 2),
        _ => Step::one(Move::Stay),
    }
}

fn template_interpolation(c: char) -> Step {
    match c {
        '\'' => Step::one(Move::Enter(ScanState::SingleQuoteString)),
        '"' => Step::one(Move::Enter(ScanState::DoubleQuoteString)),
        '`' => Step::one(Move::Enter(ScanState::TemplateLiteral)),
        '{' => Step::one(Move::OpenBrace),
        '}' => Step::one(Move::CloseBrace),
        _ => Step::one(Move::Stay),
    }
}

/// Character-by-character lexical state machine.
///
/// Every scan over a span of code starts a fresh tracker in
/// [`ScanState::Code`].
#[derive(Debug, Clone)]
pub(crate) struct Tracker {
    state: ScanState,
    /// One entry per open template literal, innermost last. The value counts
    /// unclosed `{` inside that template's current interpolation.
    templates: Vec<u32>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            state: ScanState::Code,
            templates: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn in_code(&self) -> bool {
        self.state == ScanState::Code
    }

    /// Consume the character at `i` (two for escapes and two-character
    /// delimiters) and return how many characters were consumed.
    ///
    /// The width never runs past the end of `chars`.
    pub fn advance(&mut self, chars: &[char], i: usize) -> usize {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        let step = match self.state {
            ScanState::Code => code(c, next),
            ScanState::SingleQuoteString => quoted('\'', c),
            ScanState::DoubleQuoteString => quoted('"', c),
            ScanState::LineComment => line_comment(c),
            ScanState::BlockComment => block_comment(c, next),
            ScanState::TemplateLiteral => template_literal(c, next),
            ScanState::TemplateInterpolation => template_interpolation(c),
        };

        self.apply(step.action);
        step.width.min(chars.len() - i)
    }

    fn apply(&mut self, action: Move) {
        match action {
            Move::Stay => {}
            Move::Enter(ScanState::TemplateLiteral) => {
                self.templates.push(0);
                self.state = ScanState::TemplateLiteral;
            }
            Move::Enter(state) => self.state = state,
            Move::Exit => {
                if self.state == ScanState::TemplateLiteral {
                    self.templates.pop();
                }
                self.state = self.enclosing();
            }
            Move::OpenBrace => {
                if let Some(depth) = self.templates.last_mut() {
                    *depth += 1;
                }
            }
            Move::CloseBrace => match self.templates.last_mut() {
                Some(depth) if *depth > 0 => *depth -= 1,
                _ => self.state = ScanState::TemplateLiteral,
            },
        }
    }

    /// State to return to when a string, comment or template closes.
    fn enclosing(&self) -> ScanState {
        if self.templates.is_empty() {
            ScanState::Code
        } else {
            ScanState::TemplateInterpolation
        }
    }
}
