//! Lesson Markdown Renderer
//!
//! pulldown-cmark with:
//! - Syntax highlighting (syntect)
//! - Media links resolved against the API asset base
//!   - Videos (<video> tag for mp4/webm/mov/mkv)
//!   - Images constrained to the preview width

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use catalog_core::config::AppConfig;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

// Unsafe characters in asset paths
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Render lesson markdown to HTML
pub fn render_lesson(text: &str, config: &AppConfig) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser, config);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    // Swallows the alt text of a replaced image
    InMedia { dropped_depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>, config: &AppConfig) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let url = resolve_media_url(&dest_url, config);
                    let html = if is_video_url(&url) {
                        format!(r#"<video controls src="{}" class="lesson-media"></video>"#, url)
                    } else {
                        format!(r#"<img src="{}" class="lesson-media" />"#, url)
                    };
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InMedia { dropped_depth: 0 };
                }
                // Raw HTML in lesson text is shown, never interpreted
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    let dest_url = if is_script_url(&dest_url) { CowStr::from("#") } else { dest_url };
                    events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            State::InMedia { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let fallback = || format!("<pre><code>{}</code></pre>", escape_html(code));
    let Some(theme) = get_theme() else {
        return fallback();
    };

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| fallback())
}

/// Server-relative paths point at the API host
fn resolve_media_url(url: &str, config: &AppConfig) -> String {
    let encoded = utf8_percent_encode(url.trim(), PATH_ENCODE_SET).to_string();
    if encoded.contains("://") || encoded.starts_with("//") || encoded.starts_with("data:") {
        encoded
    } else {
        config.asset_url(&encoded)
    }
}

fn is_script_url(url: &str) -> bool {
    let scheme: String = url.trim().chars().filter(|c| !c.is_ascii_whitespace()).take(11).collect();
    let scheme = scheme.to_ascii_lowercase();
    scheme.starts_with("javascript:") || scheme.starts_with("vbscript:")
}

fn is_video_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    [".mp4", ".webm", ".mov", ".mkv"].iter().any(|ext| lower.ends_with(ext))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::new("https://api.example.com")
    }

    #[test]
    fn test_relative_image_points_at_api() {
        let html = render_lesson("![diagram](</static/a b.png>)", &config());
        assert!(html.contains(r#"src="https://api.example.com/static/a%20b.png""#));
        assert!(!html.contains("diagram"));
    }

    #[test]
    fn test_absolute_image_untouched() {
        let html = render_lesson("![x](https://cdn.example.com/x.png)", &config());
        assert!(html.contains(r#"src="https://cdn.example.com/x.png""#));
    }

    #[test]
    fn test_video_link() {
        let html = render_lesson("![intro](media/intro.mp4)", &config());
        assert!(html.contains("<video controls"));
        assert!(html.contains("https://api.example.com/media/intro.mp4"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render_lesson("```rust\nfn main() {}\n```", &config());
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_lesson("hello <img src=x onerror=alert(document.cookie)>", &config());
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x"));

        let html = render_lesson("<div onclick=\"steal()\">block</div>\n", &config());
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;div"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_lesson("[click](javascript:alert(1)) and [ok](https://example.com)", &config());
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn test_plain_markdown() {
        let html = render_lesson("# Title\n\nSome *text*", &config());
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }
}
