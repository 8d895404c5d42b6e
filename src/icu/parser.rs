//! Recursive-descent parser for the ICU MessageFormat mini-language.
//!
//! Supports the subset react-intl messages actually use: literals with
//! apostrophe quoting, simple arguments, `number`/`date`/`time` with an
//! optional style, `plural`/`selectordinal` (including `offset:` and `=N`
//! exact selectors), `select`, `#` inside plural options, and rich-text
//! tags (`<b>...</b>`).

use std::fmt;

use super::{MessageElement, Options, PluralType};

/// Why a message failed to parse, without position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// `{` was never closed: `"Hello {name"`.
    UnclosedBrace,
    /// `{}` or `{,` - no argument name.
    ExpectedArgumentName,
    /// Unexpected character after an argument name: `{a b}`.
    MalformedArgument,
    /// Unknown word after the comma: `{a, bogus}`.
    InvalidArgumentType(String),
    /// `plural`/`select` not followed by a comma and options.
    ExpectedOptions,
    /// Empty option list, or garbage where a selector should be.
    ExpectedSelector,
    /// Selector not followed by `{`.
    ExpectedOptionMessage,
    /// Option message missing its closing `}`.
    UnclosedOption,
    /// Plural/select without an `other` clause.
    MissingOtherClause,
    /// `offset:` not followed by digits.
    InvalidOffset,
    /// `<` opened a tag that never reached `>`.
    InvalidTag(String),
    /// `<b>` without a matching `</b>`.
    UnclosedTag(String),
    /// Closing tag name does not match the opening tag.
    UnmatchedClosingTag { expected: String, found: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnclosedBrace => write!(f, "unclosed argument brace"),
            ErrorKind::ExpectedArgumentName => write!(f, "expected argument name"),
            ErrorKind::MalformedArgument => write!(f, "malformed argument"),
            ErrorKind::InvalidArgumentType(word) => {
                write!(f, "invalid argument type `{}`", word)
            }
            ErrorKind::ExpectedOptions => write!(f, "expected plural or select options"),
            ErrorKind::ExpectedSelector => write!(f, "expected selector"),
            ErrorKind::ExpectedOptionMessage => write!(f, "expected `{{` after selector"),
            ErrorKind::UnclosedOption => write!(f, "unclosed option message"),
            ErrorKind::MissingOtherClause => write!(f, "missing `other` clause"),
            ErrorKind::InvalidOffset => write!(f, "expected a number after `offset:`"),
            ErrorKind::InvalidTag(name) => write!(f, "invalid tag `<{}>`", name),
            ErrorKind::UnclosedTag(name) => write!(f, "unclosed tag `<{}>`", name),
            ErrorKind::UnmatchedClosingTag { expected, found } => {
                write!(
                    f,
                    "mismatched closing tag `</{}>`, expected `</{}>`",
                    found, expected
                )
            }
        }
    }
}

/// A syntax error in an ICU message, with the byte offset it occurred at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub pos: usize,
}

impl ParseError {
    fn new(kind: ErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.pos)
    }
}

impl std::error::Error for ParseError {}

/// Parse a raw ICU message into an ordered element sequence.
pub fn parse(message: &str) -> Result<Vec<MessageElement>, ParseError> {
    let mut parser = Parser::new(message);
    let elements = parser.parse_message(0, false, false)?;
    // parse_message only stops early inside a nested construct, so a clean
    // top-level parse always consumes the whole input.
    debug_assert!(parser.pos == message.len());
    Ok(elements)
}

/// What the argument after the comma turned out to be.
enum ArgType {
    Plural(PluralType),
    Select,
    Simple(fn(String, Option<String>) -> MessageElement),
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn take_ident(&mut self) -> &'a str {
        self.take_while(|c| c.is_alphanumeric() || c == '_' || c == '-')
    }

    /// Parse elements until EOF, a `}` closing a nested construct, or a
    /// `</` closing the enclosing tag. The terminator is left unconsumed.
    fn parse_message(
        &mut self,
        nesting: usize,
        in_plural: bool,
        in_tag: bool,
    ) -> Result<Vec<MessageElement>, ParseError> {
        let mut elements = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some('}') if nesting > 0 => break,
                Some('{') => elements.push(self.parse_argument(nesting, in_plural)?),
                Some('#') if in_plural => {
                    self.bump();
                    elements.push(MessageElement::Pound);
                }
                Some('<') if in_tag && self.peek_second() == Some('/') => break,
                Some('<') if self.peek_second().is_some_and(|c| c.is_ascii_alphabetic()) => {
                    elements.push(self.parse_tag(nesting, in_plural)?);
                }
                Some(_) => {
                    if let Some(literal) = self.parse_literal(nesting, in_plural, in_tag) {
                        elements.push(literal);
                    }
                }
            }
        }
        Ok(elements)
    }

    /// Consume a run of plain text, handling ICU apostrophe quoting.
    ///
    /// Always consumes at least one character, so the caller's loop makes
    /// progress even on stray `}`/`#`/`<` that no other branch claims.
    fn parse_literal(
        &mut self,
        nesting: usize,
        in_plural: bool,
        in_tag: bool,
    ) -> Option<MessageElement> {
        let mut value = String::new();
        loop {
            match self.peek() {
                None => break,
                Some('{') => break,
                Some('}') if nesting > 0 => break,
                Some('#') if in_plural => break,
                Some('<')
                    if self.peek_second().is_some_and(|c| c.is_ascii_alphabetic())
                        || (in_tag && self.peek_second() == Some('/')) =>
                {
                    break;
                }
                Some('\'') => {
                    self.bump();
                    if self.eat('\'') {
                        // `''` is a literal apostrophe.
                        value.push('\'');
                    } else if self.peek().is_some_and(is_quotable) {
                        self.consume_quoted(&mut value);
                    } else {
                        // A lone apostrophe quotes nothing.
                        value.push('\'');
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.bump();
                }
            }
        }
        if value.is_empty() {
            None
        } else {
            Some(MessageElement::Literal { value })
        }
    }

    /// Read quoted text up to the closing apostrophe. `''` inside the
    /// quote is an escaped apostrophe; a missing closer quotes the rest of
    /// the input (lenient, matching common ICU implementations).
    fn consume_quoted(&mut self, out: &mut String) {
        while let Some(c) = self.bump() {
            if c == '\'' {
                if self.eat('\'') {
                    out.push('\'');
                } else {
                    return;
                }
            } else {
                out.push(c);
            }
        }
    }

    fn parse_argument(
        &mut self,
        nesting: usize,
        in_plural: bool,
    ) -> Result<MessageElement, ParseError> {
        let brace_pos = self.pos;
        self.bump(); // '{'
        self.skip_ws();

        let name = self.take_ident();
        if name.is_empty() {
            let kind = if self.peek().is_none() {
                ErrorKind::UnclosedBrace
            } else {
                ErrorKind::ExpectedArgumentName
            };
            return Err(ParseError::new(kind, brace_pos));
        }
        self.skip_ws();

        match self.peek() {
            Some('}') => {
                self.bump();
                Ok(MessageElement::Argument {
                    value: name.to_string(),
                })
            }
            Some(',') => {
                self.bump();
                self.parse_argument_body(name, brace_pos, nesting, in_plural)
            }
            None => Err(ParseError::new(ErrorKind::UnclosedBrace, brace_pos)),
            Some(_) => Err(ParseError::new(ErrorKind::MalformedArgument, self.pos)),
        }
    }

    /// Everything after `{name,` up to and including the closing brace.
    fn parse_argument_body(
        &mut self,
        name: &str,
        brace_pos: usize,
        nesting: usize,
        in_plural: bool,
    ) -> Result<MessageElement, ParseError> {
        self.skip_ws();
        let type_pos = self.pos;
        let arg_type = match self.take_ident() {
            "number" => ArgType::Simple(|value, style| MessageElement::Number { value, style }),
            "date" => ArgType::Simple(|value, style| MessageElement::Date { value, style }),
            "time" => ArgType::Simple(|value, style| MessageElement::Time { value, style }),
            "plural" => ArgType::Plural(PluralType::Cardinal),
            "selectordinal" => ArgType::Plural(PluralType::Ordinal),
            "select" => ArgType::Select,
            word => {
                return Err(ParseError::new(
                    ErrorKind::InvalidArgumentType(word.to_string()),
                    type_pos,
                ));
            }
        };

        match arg_type {
            ArgType::Simple(build) => {
                let style = self.parse_style(brace_pos)?;
                Ok(build(name.to_string(), style))
            }
            ArgType::Plural(plural_type) => {
                self.skip_ws();
                if !self.eat(',') {
                    return Err(ParseError::new(ErrorKind::ExpectedOptions, self.pos));
                }
                let offset = self.parse_offset()?;
                let options = self.parse_options(brace_pos, nesting, true)?;
                Ok(MessageElement::Plural {
                    value: name.to_string(),
                    plural_type,
                    offset,
                    options,
                })
            }
            ArgType::Select => {
                self.skip_ws();
                if !self.eat(',') {
                    return Err(ParseError::new(ErrorKind::ExpectedOptions, self.pos));
                }
                let options = self.parse_options(brace_pos, nesting, false)?;
                Ok(MessageElement::Select {
                    value: name.to_string(),
                    options,
                })
            }
        }
    }

    /// Optional `, style` suffix of a number/date/time argument, then `}`.
    fn parse_style(&mut self, brace_pos: usize) -> Result<Option<String>, ParseError> {
        self.skip_ws();
        let style = if self.eat(',') {
            let raw = self.take_while(|c| c != '}').trim();
            (!raw.is_empty()).then(|| raw.to_string())
        } else {
            None
        };
        if !self.eat('}') {
            return Err(ParseError::new(ErrorKind::UnclosedBrace, brace_pos));
        }
        Ok(style)
    }

    /// Optional `offset:N` immediately before the first plural selector.
    fn parse_offset(&mut self) -> Result<u64, ParseError> {
        self.skip_ws();
        if !self.rest().starts_with("offset:") {
            return Ok(0);
        }
        self.pos += "offset:".len();
        self.skip_ws();
        let digits_pos = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        digits
            .parse()
            .map_err(|_| ParseError::new(ErrorKind::InvalidOffset, digits_pos))
    }

    /// `selector {message}` pairs up to the construct's closing brace.
    fn parse_options(
        &mut self,
        brace_pos: usize,
        nesting: usize,
        in_plural: bool,
    ) -> Result<Options, ParseError> {
        let mut options: Options = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err(ParseError::new(ErrorKind::UnclosedBrace, brace_pos)),
                Some(_) => {}
            }

            let selector_pos = self.pos;
            let selector = self.take_while(|c| {
                !c.is_whitespace() && c != '{' && c != '}'
            });
            if selector.is_empty() {
                return Err(ParseError::new(ErrorKind::ExpectedSelector, selector_pos));
            }

            self.skip_ws();
            let option_pos = self.pos;
            if !self.eat('{') {
                return Err(ParseError::new(ErrorKind::ExpectedOptionMessage, self.pos));
            }
            let message = self.parse_message(nesting + 1, in_plural, false)?;
            if !self.eat('}') {
                return Err(ParseError::new(ErrorKind::UnclosedOption, option_pos));
            }
            options.push((selector.to_string(), message));
        }

        if options.is_empty() {
            return Err(ParseError::new(ErrorKind::ExpectedSelector, self.pos));
        }
        if !options.iter().any(|(selector, _)| selector == "other") {
            return Err(ParseError::new(ErrorKind::MissingOtherClause, brace_pos));
        }
        Ok(options)
    }

    fn parse_tag(
        &mut self,
        nesting: usize,
        in_plural: bool,
    ) -> Result<MessageElement, ParseError> {
        let open_pos = self.pos;
        self.bump(); // '<'
        let name = self.take_ident().to_string();
        self.skip_ws();

        // Self-closing: `<br/>`.
        if self.eat('/') {
            if !self.eat('>') {
                return Err(ParseError::new(ErrorKind::InvalidTag(name), open_pos));
            }
            return Ok(MessageElement::Tag {
                value: name,
                children: Vec::new(),
            });
        }
        if !self.eat('>') {
            return Err(ParseError::new(ErrorKind::InvalidTag(name), open_pos));
        }

        let children = self.parse_message(nesting, in_plural, true)?;

        if !self.rest().starts_with("</") {
            return Err(ParseError::new(ErrorKind::UnclosedTag(name), open_pos));
        }
        self.bump();
        self.bump();
        let closing = self.take_ident().to_string();
        if !self.eat('>') {
            return Err(ParseError::new(ErrorKind::InvalidTag(closing), open_pos));
        }
        if closing != name {
            return Err(ParseError::new(
                ErrorKind::UnmatchedClosingTag {
                    expected: name,
                    found: closing,
                },
                open_pos,
            ));
        }
        Ok(MessageElement::Tag {
            value: name,
            children,
        })
    }
}

fn is_quotable(c: char) -> bool {
    matches!(c, '{' | '}' | '#' | '<' | '>')
}
