//! Page shell around rendered blocks.

use block_core::RenderMode;

use crate::node::escape_html;

/// AMP runtime script.
const AMP_RUNTIME: &str = "https://cdn.ampproject.org/v0.js";

/// Required AMP boilerplate style.
const AMP_BOILERPLATE: &str = "<style amp-boilerplate>body{-webkit-animation:-amp-start 8s steps(1,end) 0s 1 normal both;animation:-amp-start 8s steps(1,end) 0s 1 normal both}@keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}</style><noscript><style amp-boilerplate>body{-webkit-animation:none;animation:none}</style></noscript>";

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Canonical URL of the page.
    pub canonical: Option<String>,
    /// Stylesheet links.
    pub stylesheets: Vec<String>,
    /// Inline CSS.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Set the canonical URL.
    pub fn with_canonical(mut self, href: impl Into<String>) -> Self {
        self.canonical = Some(href.into());
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.styles.push(css.into());
        self
    }

    /// Render head content to HTML.
    ///
    /// AMP pages allow a single `<style amp-custom>` and no external stylesheets
    /// beyond the runtime, so inline styles are merged and links are dropped.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        if let Some(canonical) = &self.canonical {
            html.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                escape_html(canonical)
            ));
        }

        match mode {
            RenderMode::Interactive => {
                for href in &self.stylesheets {
                    html.push_str(&format!(
                        "<link rel=\"stylesheet\" href=\"{}\">\n",
                        escape_html(href)
                    ));
                }
                for css in &self.styles {
                    html.push_str(&format!("<style>{}</style>\n", css));
                }
            }
            RenderMode::Amp => {
                html.push_str(&format!("<script async src=\"{}\"></script>\n", AMP_RUNTIME));
                html.push_str(AMP_BOILERPLATE);
                html.push('\n');
                if !self.styles.is_empty() {
                    html.push_str(&format!(
                        "<style amp-custom>{}</style>\n",
                        self.styles.join("\n")
                    ));
                }
            }
        }

        html
    }
}

/// Full HTML document wrapper.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Render mode of the page.
    pub mode: RenderMode,
    /// Head content.
    pub head: HeadContent,
    /// HTML before the blocks (opening body, wrapper divs, etc.).
    pub body_start: String,
    /// HTML after the blocks (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent, mode: RenderMode) -> Self {
        Self {
            mode,
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "\n</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before blocks).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        match self.mode {
            RenderMode::Interactive => html.push_str("<html>\n<head>\n"),
            RenderMode::Amp => html.push_str("<html amp>\n<head>\n"),
        }
        html.push_str(&self.head.render(self.mode));
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after blocks).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Render a complete document around `body`.
    pub fn render_document(&self, body: &str) -> String {
        let mut html = self.render_opening();
        html.push_str(body);
        html.push_str(&self.render_closing());
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_document() {
        let shell = Shell::new(
            HeadContent::new("Lamp & Co")
                .with_meta("viewport", "width=device-width")
                .with_stylesheet("/site.css")
                .with_style(".a{color:red}"),
            RenderMode::Interactive,
        );
        let html = shell.render_document("<section></section>");
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n"));
        assert!(html.contains("<title>Lamp &amp; Co</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/site.css">"#));
        assert!(html.contains("<style>.a{color:red}</style>"));
        assert!(html.contains("<main>\n<section></section>\n</main>"));
        assert!(!html.contains(AMP_RUNTIME));
    }

    #[test]
    fn test_amp_document() {
        let shell = Shell::new(
            HeadContent::new("Lamp")
                .with_canonical("https://shop.example.com/p")
                .with_stylesheet("/site.css")
                .with_style(".a{color:red}")
                .with_style(".b{color:blue}"),
            RenderMode::Amp,
        );
        let html = shell.render_opening();
        assert!(html.contains("<html amp>"));
        assert!(html.contains(AMP_RUNTIME));
        assert!(html.contains("amp-boilerplate"));
        assert!(html.contains("<style amp-custom>.a{color:red}\n.b{color:blue}</style>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://shop.example.com/p">"#));
        assert!(!html.contains("/site.css"));
    }
}
