use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Rewrites fenced code blocks in a markdown event stream into highlighted HTML.
///
/// Blocks whose language is unknown are highlighted as plain text. If syntect
/// fails on a block, its original events are passed through untouched.
pub fn highlight<'a, It>(events: It) -> Vec<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let Some(theme) = THEMES.themes.get(THEME) else {
        log::warn!("highlight theme {THEME} missing, leaving code blocks plain");
        return events.collect();
    };

    let mut out = Vec::new();
    let mut block: Option<CodeBlock<'a>> = None;

    for event in events {
        if let Some(b) = block.as_mut() {
            match event {
                Event::Text(text) => {
                    b.code.push_str(&text);
                    b.raw.push(Event::Text(text));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(b) = block.take() {
                        out.extend(b.render(theme));
                    }
                }
                e => b.raw.push(e),
            }
            continue;
        }
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match &kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                block = Some(CodeBlock {
                    lang,
                    code: String::new(),
                    raw: vec![Event::Start(Tag::CodeBlock(kind))],
                });
            }
            e => out.push(e),
        }
    }
    // unterminated block: keep what we saw
    if let Some(b) = block {
        out.extend(b.raw);
    }
    out
}

struct CodeBlock<'a> {
    lang: String,
    code: String,
    raw: Vec<Event<'a>>,
}

impl<'a> CodeBlock<'a> {
    fn render(mut self, theme: &Theme) -> Vec<Event<'a>> {
        let syntax = SYNTAXES
            .find_syntax_by_token(&self.lang)
            .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
        match highlighted_html_for_string(&self.code, &SYNTAXES, syntax, theme) {
            Ok(html) => vec![Event::Html(CowStr::from(html))],
            Err(e) => {
                log::warn!("couldn't highlight {} block: {e}", self.lang);
                self.raw.push(Event::End(TagEnd::CodeBlock));
                self.raw
            }
        }
    }
}
