//! Product description with a "view more / view less" toggle.

use std::rc::Rc;

use block_core::{keys, HostUtils, RenderMode, UrlParams};
use block_markup::{css, ActionBinding, ClassMap, Element, Node};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::host::Host;
use crate::styles::description_rules;

/// Collapsed descriptions are cut to this many characters.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 300;

/// Marker appended to a truncated description.
pub const DEFAULT_ENDING: &str = "[...]";

/// Description props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionProps {
    /// HTML description from the catalog.
    pub description: String,
    pub show_full_description: bool,
    pub length: usize,
    pub ending: String,
}

impl Default for DescriptionProps {
    fn default() -> Self {
        Self {
            description: String::new(),
            show_full_description: true,
            length: DEFAULT_TRUNCATE_LENGTH,
            ending: DEFAULT_ENDING.to_string(),
        }
    }
}

impl DescriptionProps {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_show_full_description(mut self, show: bool) -> Self {
        self.show_full_description = show;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionMsg {
    Toggle,
}

/// Description component. The expanded flag lives with the parent block.
#[derive(Clone)]
pub struct Description {
    classes: ClassMap,
    utils: Rc<dyn HostUtils>,
}

impl Description {
    pub fn new(host: &Host) -> Self {
        Self {
            classes: host.styles.create(description_rules(&host.global)),
            utils: host.utils.clone(),
        }
    }

    pub fn view(&self, props: &DescriptionProps) -> Node<DescriptionMsg> {
        let label = if props.show_full_description {
            "view less"
        } else {
            "view more"
        };

        let toggle = ActionBinding::for_mode(self.mode(), DescriptionMsg::Toggle, || {
            UrlParams::new().with(keys::SHOW_FULL_DESCRIPTION, !props.show_full_description)
        })
        .bind(
            Element::new("a")
                .attr("href", "#")
                .class(css(&["link dib fw6", self.classes.get("viewMore")]))
                .attr("data-role", "toggle-description")
                .text(label),
            self.utils.as_ref(),
        );

        Element::new("div")
            .class("measure")
            .child(
                Element::new("div")
                    .class(self.classes.get("descriptionText"))
                    .child(Element::new("div").child(Node::Raw(render_description(props))))
                    .child(toggle),
            )
            .into()
    }

    fn mode(&self) -> RenderMode {
        self.utils.render_mode()
    }
}

/// Description HTML as displayed: scripts removed, then truncated when collapsed.
pub fn render_description(props: &DescriptionProps) -> String {
    let clean = strip_script_tags(&props.description);
    if props.show_full_description {
        clean
    } else {
        truncate_description(&clean, props.length, &props.ending)
    }
}

/// Cut `description` to `length` characters, ending with `" " + ending`.
///
/// Text no longer than `length` is returned unchanged. Otherwise the first
/// `length - ending.len()` characters are kept, so the result is one
/// character longer than `length`.
pub fn truncate_description(description: &str, length: usize, ending: &str) -> String {
    if description.chars().count() <= length {
        return description.to_string();
    }
    let keep = length.saturating_sub(ending.chars().count());
    let head: String = description.chars().take(keep).collect();
    format!("{} {}", head, ending)
}

/// Any character except a line terminator.
const NOT_NEWLINE: &str = r"[^\n\r\x{2028}\x{2029}]";

static SCRIPT_PAIR: Lazy<Regex> = Lazy::new(|| {
    let any = NOT_NEWLINE;
    Regex::new(&format!(
        "(?i)<{any}*?script{any}*?>{any}*?</{any}*?script{any}*?>"
    ))
    .expect("script pattern compiles")
});

/// Remove `<script ...>...</script>` pairs, case-insensitively.
///
/// A pair must start and end on the same line; the first closing tag after an
/// opening tag ends the match.
pub fn strip_script_tags(html: &str) -> String {
    SCRIPT_PAIR.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::{RequestContext, RequestId, RequestUtils};
    use block_observability::StructuredLogger;

    fn host(mode: RenderMode) -> Host {
        let ctx = RequestContext::from_path_with_query("/product/7?ref=home");
        Host::new(
            Rc::new(RequestUtils::new(&ctx, mode)),
            StructuredLogger::new(RequestId::from_string("test")),
        )
    }

    #[test]
    fn test_strip_script_tags() {
        assert_eq!(
            strip_script_tags("<p>Hi</p>\n<script>alert(1)</script><p>there</p>"),
            "<p>Hi</p>\n<p>there</p>"
        );
        // The match starts at the first `<` on the line.
        assert_eq!(
            strip_script_tags("<p>Hi</p><script>alert(1)</script><p>there</p>"),
            "<p>there</p>"
        );
        assert_eq!(
            strip_script_tags(r#"a<SCRIPT type="text/javascript">x()</Script >b"#),
            "ab"
        );
        assert_eq!(
            strip_script_tags("<script>a</script>keep<script>b</script>"),
            "keep"
        );
    }

    #[test]
    fn test_strip_leaves_unmatched_markup() {
        assert_eq!(strip_script_tags("<p>plain</p>"), "<p>plain</p>");
        assert_eq!(strip_script_tags("<script>no end"), "<script>no end");
        assert_eq!(
            strip_script_tags("<script>\nacross lines\n</script>"),
            "<script>\nacross lines\n</script>"
        );
        assert_eq!(strip_script_tags("caf\u{e9} <script>x</script>!"), "caf\u{e9} !");
        assert_eq!(
            strip_script_tags("x<script>a\u{2028}b</script>y"),
            "x<script>a\u{2028}b</script>y"
        );
    }

    #[test]
    fn test_strip_long_single_line_markup() {
        let minified = "<p>x</p>".repeat(8000);
        assert_eq!(strip_script_tags(&minified), minified);

        let with_script = format!("{}\n<script>x()</script>{}", minified, minified);
        assert_eq!(
            strip_script_tags(&with_script),
            format!("{}\n{}", minified, minified)
        );
    }

    #[test]
    fn test_expanded_long_description_is_not_truncated() {
        let body = "d".repeat(400);
        let props = DescriptionProps {
            description: format!("<p>{}</p>\n<script>track()</script>\n<p>end</p>", body),
            show_full_description: true,
            ..DescriptionProps::default()
        };
        assert_eq!(
            render_description(&props),
            format!("<p>{}</p>\n\n<p>end</p>", body)
        );
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("short", 300, "[...]"), "short");

        let long = "a".repeat(301);
        let cut = truncate_description(&long, 300, "[...]");
        assert_eq!(cut, format!("{} [...]", "a".repeat(295)));
        assert_eq!(cut.chars().count(), 301);

        assert_eq!(truncate_description("abcdef", 3, "[...]"), " [...]");
    }

    #[test]
    fn test_render_description_sanitizes_before_truncating() {
        let props = DescriptionProps {
            description: format!("<script>x</script>{}", "b".repeat(20)),
            show_full_description: false,
            length: 10,
            ending: "..".into(),
        };
        assert_eq!(render_description(&props), "bbbbbbbb ..");
    }

    #[test]
    fn test_interactive_toggle() {
        let description = Description::new(&host(RenderMode::Interactive));
        let props = DescriptionProps::new("<p>Soft</p>").with_show_full_description(false);
        let node = description.view(&props);

        let toggle = node.find_by_attr("data-role", "toggle-description")[0];
        assert_eq!(toggle.get_attr("href"), Some("#"));
        assert_eq!(toggle.dispatch(block_markup::Event::Click, ""), Some(DescriptionMsg::Toggle));
        assert_eq!(node.text_content(), "<p>Soft</p>view more");
    }

    #[test]
    fn test_amp_toggle_links_to_opposite_state() {
        let description = Description::new(&host(RenderMode::Amp));
        let node = description.view(&DescriptionProps::new("<p>Soft</p>"));

        let toggle = node.find_by_attr("data-role", "toggle-description")[0];
        assert_eq!(
            toggle.get_attr("href"),
            Some("/product/7?ref=home&showFullDescription=false")
        );
        assert!(toggle.handler(block_markup::Event::Click).is_none());
        assert!(node.text_content().ends_with("view less"));
    }
}
