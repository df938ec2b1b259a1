use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use url::Url;

/// Toggles mirroring the extraction call: links, images and formatting
/// control the rendered Markdown, `with_metadata` controls the
/// frontmatter block. Everything defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub include_links: bool,
    pub include_images: bool,
    pub include_formatting: bool,
    pub with_metadata: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_links: true,
            include_images: true,
            include_formatting: true,
            with_metadata: true,
        }
    }
}

/// Renders extracted HTML to Markdown by walking the DOM.
///
/// Anchors resolve against the page URL so relative links survive the
/// conversion. Fragment-only and `javascript:` references render as
/// plain text.
pub struct MarkdownRenderer {
    options: ExtractOptions,
}

impl MarkdownRenderer {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, html: &str, base_url: Option<&str>) -> String {
        let fragment = Html::parse_fragment(html);
        let base = base_url.and_then(|b| Url::parse(b).ok());
        let mut ctx = RenderContext::new(base);

        for child in fragment.root_element().children() {
            self.visit_node(child, &mut ctx);
        }

        ctx.into_markdown()
    }

    fn visit_node(&self, node: NodeRef<'_, Node>, ctx: &mut RenderContext) {
        match node.value() {
            Node::Text(text) => ctx.append_text(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.visit_element(element, ctx);
                }
            }
            _ => {
                for child in node.children() {
                    self.visit_node(child, ctx);
                }
            }
        }
    }

    fn visit_element(&self, element: ElementRef, ctx: &mut RenderContext) {
        let formatting = self.options.include_formatting;
        let tag = element.value().name().to_ascii_lowercase();
        match tag.as_str() {
            "a" => self.render_anchor(element, ctx),
            "img" => self.render_image(element, ctx),
            "br" => ctx.ensure_newline(),
            "hr" => {
                ctx.ensure_blank_line();
                if formatting {
                    ctx.push_raw("---");
                    ctx.ensure_blank_line();
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = usize::from(tag.as_bytes()[1] - b'0');
                ctx.ensure_blank_line();
                if formatting {
                    for _ in 0..level {
                        ctx.push_raw("#");
                    }
                    ctx.push_raw(" ");
                }
                self.visit_children(element, ctx);
                ctx.ensure_blank_line();
            }
            "strong" | "b" => self.render_inline(element, ctx, "**"),
            "em" | "i" => self.render_inline(element, ctx, "*"),
            "code" => self.render_inline(element, ctx, "`"),
            "pre" => {
                ctx.ensure_blank_line();
                let text: String = element.text().collect();
                if formatting {
                    ctx.push_raw("```\n");
                    ctx.push_raw(text.trim_end());
                    ctx.push_raw("\n```");
                } else {
                    ctx.append_text(&text);
                }
                ctx.ensure_blank_line();
            }
            "blockquote" => {
                ctx.ensure_blank_line();
                if formatting {
                    ctx.push_raw("> ");
                }
                self.visit_children(element, ctx);
                ctx.ensure_blank_line();
            }
            "li" => {
                ctx.ensure_newline();
                ctx.push_raw("- ");
                self.visit_children(element, ctx);
                ctx.ensure_newline();
            }
            "ul" | "ol" => {
                ctx.ensure_blank_line();
                self.visit_children(element, ctx);
                ctx.ensure_blank_line();
            }
            "p" | "div" | "section" | "article" | "header" | "footer" | "nav" | "figure"
            | "figcaption" | "main" | "aside" | "address" => {
                ctx.ensure_blank_line();
                self.visit_children(element, ctx);
                ctx.ensure_blank_line();
            }
            "table" | "tr" | "td" | "th" => {
                ctx.ensure_newline();
                self.visit_children(element, ctx);
                ctx.ensure_newline();
            }
            "script" | "style" | "noscript" | "iframe" | "template" | "head" => {
                // skip scripting and presentation-only sections
            }
            _ => self.visit_children(element, ctx),
        }
    }

    fn visit_children(&self, element: ElementRef, ctx: &mut RenderContext) {
        for child in element.children() {
            self.visit_node(child, ctx);
        }
    }

    fn render_inline(&self, element: ElementRef, ctx: &mut RenderContext, mark: &str) {
        if self.options.include_formatting {
            ctx.push_raw(mark);
        }
        self.visit_children(element, ctx);
        if self.options.include_formatting {
            ctx.push_raw(mark);
        }
    }

    fn render_anchor(&self, element: ElementRef, ctx: &mut RenderContext) {
        let href = element
            .value()
            .attr("href")
            .and_then(|raw| resolve_url(raw, ctx.base.as_ref()));
        match href {
            Some(url) if self.options.include_links => {
                ctx.push_raw("[");
                self.visit_children(element, ctx);
                ctx.push_raw("](");
                ctx.push_raw(url.as_str());
                ctx.push_raw(")");
            }
            _ => self.visit_children(element, ctx),
        }
    }

    fn render_image(&self, element: ElementRef, ctx: &mut RenderContext) {
        if !self.options.include_images {
            return;
        }
        let Some(src) = element
            .value()
            .attr("src")
            .and_then(|raw| resolve_url(raw, ctx.base.as_ref()))
        else {
            return;
        };
        let alt = element.value().attr("alt").unwrap_or("").trim();
        ctx.push_raw("![");
        ctx.push_raw(alt);
        ctx.push_raw("](");
        ctx.push_raw(src.as_str());
        ctx.push_raw(")");
    }
}

fn resolve_url(reference: &str, base: Option<&Url>) -> Option<Url> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('#') || lower.starts_with('?') || lower.starts_with("javascript:") {
        return None;
    }
    if let Ok(url) = Url::parse(trimmed) {
        return Some(url);
    }
    base.and_then(|base| base.join(trimmed).ok())
}

struct RenderContext {
    out: String,
    base: Option<Url>,
    last_char: Option<char>,
}

impl RenderContext {
    fn new(base: Option<Url>) -> Self {
        Self {
            out: String::new(),
            base,
            last_char: None,
        }
    }

    fn into_markdown(self) -> String {
        self.out.trim().to_string()
    }

    fn append_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if self.last_char == Some(' ') || self.last_char == Some('\n') {
                    continue;
                }
                self.push_char(' ');
            } else {
                self.push_char(ch);
            }
        }
    }

    fn push_raw(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_char(ch);
        }
    }

    fn ensure_newline(&mut self) {
        if self.last_char == Some('\n') || self.out.is_empty() {
            return;
        }
        self.push_char('\n');
    }

    fn ensure_blank_line(&mut self) {
        if self.out.is_empty() {
            return;
        }
        while !self.out.ends_with("\n\n") {
            self.push_char('\n');
        }
    }

    fn push_char(&mut self, ch: char) {
        self.out.push(ch);
        self.last_char = Some(ch);
    }
}
