//! DOT tokenizer
//!
//! Identifiers come in three shapes: bare (`[A-Za-z0-9_.]` and any
//! non-ASCII char), numerals (`-1.5`) and quoted strings. HTML ids
//! (`<...>`) are kept verbatim without the outer brackets. Comments (`//`,
//! `/* */` and `#` lines) are dropped.

use crate::error::{Result, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Identifier; `quoted` ids are never keywords
    Id { text: String, quoted: bool },
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Equals,
    Semicolon,
    Comma,
    Colon,
    /// `->`
    Arrow,
    /// `--`
    Line,
}

impl Token {
    /// Whether the token is the bare keyword `keyword` (case-insensitive)
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Id { text, quoted: false } if text.eq_ignore_ascii_case(keyword))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
}

fn is_bare_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || !c.is_ascii()
}

pub fn tokenize(text: &str) -> Result<Vec<Spanned>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut at_line_start = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start_line = line;

        if c == '\n' {
            line += 1;
            at_line_start = true;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // `#` lines are preprocessor output
        if c == '#' && at_line_start {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }
        at_line_start = false;

        let next = chars.get(i + 1).copied();
        let simple = match c {
            '{' => Some(Token::LBrace),
            '}' => Some(Token::RBrace),
            '[' => Some(Token::LBracket),
            ']' => Some(Token::RBracket),
            '=' => Some(Token::Equals),
            ';' => Some(Token::Semicolon),
            ',' => Some(Token::Comma),
            ':' => Some(Token::Colon),
            _ => None,
        };
        if let Some(token) = simple {
            tokens.push(Spanned { token, line });
            i += 1;
            continue;
        }

        match (c, next) {
            ('/', Some('/')) => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            ('/', Some('*')) => {
                i += 2;
                loop {
                    match (chars.get(i), chars.get(i + 1)) {
                        (Some('*'), Some('/')) => {
                            i += 2;
                            break;
                        }
                        (Some(ch), _) => {
                            if *ch == '\n' {
                                line += 1;
                            }
                            i += 1;
                        }
                        (None, _) => return Err(StorageError::parse(start_line, "unterminated comment")),
                    }
                }
            }
            ('-', Some('>')) => {
                tokens.push(Spanned { token: Token::Arrow, line });
                i += 2;
            }
            ('-', Some('-')) => {
                tokens.push(Spanned { token: Token::Line, line });
                i += 2;
            }
            ('"', _) => {
                let mut value = String::new();
                i += 1;
                loop {
                    match (chars.get(i), chars.get(i + 1)) {
                        (Some('"'), _) => {
                            i += 1;
                            break;
                        }
                        (Some('\\'), Some('"')) => {
                            value.push('"');
                            i += 2;
                        }
                        (Some('\\'), Some('\\')) => {
                            value.push('\\');
                            i += 2;
                        }
                        // line continuation
                        (Some('\\'), Some('\n')) => {
                            line += 1;
                            i += 2;
                        }
                        (Some(ch), _) => {
                            if *ch == '\n' {
                                line += 1;
                            }
                            value.push(*ch);
                            i += 1;
                        }
                        (None, _) => return Err(StorageError::parse(start_line, "unterminated string")),
                    }
                }
                tokens.push(Spanned {
                    token: Token::Id {
                        text: value,
                        quoted: true,
                    },
                    line: start_line,
                });
            }
            ('<', _) => {
                let mut depth = 1;
                let mut value = String::new();
                i += 1;
                while depth > 0 {
                    let Some(&ch) = chars.get(i) else {
                        return Err(StorageError::parse(start_line, "unterminated HTML id"));
                    };
                    match ch {
                        '<' => depth += 1,
                        '>' => depth -= 1,
                        '\n' => line += 1,
                        _ => {}
                    }
                    if depth > 0 {
                        value.push(ch);
                    }
                    i += 1;
                }
                tokens.push(Spanned {
                    token: Token::Id {
                        text: value,
                        quoted: true,
                    },
                    line: start_line,
                });
            }
            ('-', Some(n)) if n.is_ascii_digit() || n == '.' => {
                let begin = i;
                i += 1;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                tokens.push(Spanned {
                    token: Token::Id {
                        text: chars[begin..i].iter().collect(),
                        quoted: false,
                    },
                    line,
                });
            }
            (ch, _) if is_bare_char(ch) => {
                let begin = i;
                while i < chars.len() && is_bare_char(chars[i]) {
                    i += 1;
                }
                tokens.push(Spanned {
                    token: Token::Id {
                        text: chars[begin..i].iter().collect(),
                        quoted: false,
                    },
                    line,
                });
            }
            (ch, _) => {
                return Err(StorageError::parse(line, format!("unexpected character '{}'", ch)));
            }
        }
    }
    Ok(tokens)
}
