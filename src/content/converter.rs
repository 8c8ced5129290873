//! Text-to-markup conversion
//!
//! Content files use a small markdown-like vocabulary. Conversion is an
//! ordered list of substitution rules folded over the text: every rule sees
//! the output of the rules before it, so reordering [`RULES`] changes the
//! result. The chain is deliberately not CommonMark; its quirks (a single
//! `<ul>` spanning every list item, lines starting with inline tags wrapped
//! in `<p>`, code fences eaten by the inline code rule) are part of the
//! observable output and are kept as is.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// How a rule rewrites its matches
#[derive(Debug, Clone, Copy)]
pub enum Substitution {
    /// Replace every match with the template (`${1}` is the first group)
    All(&'static str),
    /// Replace only the leftmost match
    First(&'static str),
    /// Wrap each matched line (group 2, after the terminator in group 1) in
    /// `<p>` unless it opens with `<h`, `<u`, `<p`, `<b` or `<|`
    WrapUntagged,
}

/// One named substitution step
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    substitution: Substitution,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, substitution: Substitution) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("converter rule pattern must compile"),
            substitution,
        }
    }

    /// Apply this rule alone
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.substitution {
            Substitution::All(template) => self.pattern.replace_all(text, template),
            Substitution::First(template) => self.pattern.replace(text, template),
            Substitution::WrapUntagged => self.pattern.replace_all(text, |caps: &Captures| {
                let (terminator, line) = (&caps[1], &caps[2]);
                if is_tagged(line) {
                    format!("{}{}", terminator, line)
                } else {
                    format!("{}<p>{}</p>", terminator, line)
                }
            }),
        }
    }
}

/// Lines already opened by a heading, list, paragraph or `<b…>` tag. The
/// `|` is a member of the set too.
fn is_tagged(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<') && matches!(chars.next(), Some('h' | 'u' | 'p' | 'b' | '|'))
}

/// Start of a line: the start of the text or a captured line terminator
const LINE_START: &str = r"(^|[\r\n\x{2028}\x{2029}])";

/// Any character except a line terminator
const LINE_CHAR: &str = r"[^\r\n\x{2028}\x{2029}]";

lazy_static! {
    /// The conversion chain, in application order.
    ///
    /// Line terminators are `\n`, `\r`, U+2028 and U+2029. Line-anchored rules
    /// capture the terminator before the line as group 1 and put it back.
    pub static ref RULES: Vec<Rule> = vec![
        Rule::new(
            "heading",
            &format!("{}# ({}*)", LINE_START, LINE_CHAR),
            Substitution::All("${1}<h2>${2}</h2>"),
        ),
        Rule::new(
            "subheading",
            &format!("{}## ({}*)", LINE_START, LINE_CHAR),
            Substitution::All("${1}<h3>${2}</h3>"),
        ),
        Rule::new(
            "strong",
            &format!(r"\*\*({}*?)\*\*", LINE_CHAR),
            Substitution::All("<strong>${1}</strong>"),
        ),
        Rule::new(
            "emphasis",
            &format!(r"\*({}*?)\*", LINE_CHAR),
            Substitution::All("<em>${1}</em>"),
        ),
        Rule::new(
            "code",
            &format!(r"`({}*?)`", LINE_CHAR),
            Substitution::All("<code>${1}</code>"),
        ),
        Rule::new(
            "preformatted",
            r"```([\s\S]*?)```",
            Substitution::All("<pre><code>${1}</code></pre>"),
        ),
        Rule::new(
            "blockquote",
            &format!("{}> ({}*)", LINE_START, LINE_CHAR),
            Substitution::All("${1}<blockquote>${2}</blockquote>"),
        ),
        Rule::new(
            "list_item",
            &format!("{}- ({}*)", LINE_START, LINE_CHAR),
            Substitution::All("${1}<li>${2}</li>"),
        ),
        Rule::new("list", r"(?s)(<li>.*</li>)", Substitution::First("<ul>${1}</ul>")),
        Rule::new("paragraph_break", r"\n\n", Substitution::All("</p><p>")),
        Rule::new(
            "paragraph",
            &format!("{}({}*)", LINE_START, LINE_CHAR),
            Substitution::WrapUntagged,
        ),
        Rule::new("empty_paragraph", r"<p></p>", Substitution::All("")),
    ];
}

/// Look up a rule by name
pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.name == name)
}

/// Convert content text to HTML. Never fails.
pub fn convert(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}
