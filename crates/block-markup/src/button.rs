//! Shared button primitive.

use block_core::HostUtils;

use crate::action::ActionBinding;
use crate::node::{Element, Node};
use crate::style::{css, ClassMap, GlobalStyles, Style, StyleSheet};

/// Button from the host's component registry, themed by the global colors.
#[derive(Debug, Clone)]
pub struct Button {
    classes: ClassMap,
}

impl Button {
    pub fn new(sheet: &StyleSheet, global: &GlobalStyles) -> Self {
        let classes = sheet.create(vec![(
            "button",
            Style::new()
                .prop("background-color", global.color.primary.clone())
                .prop("color", global.color.primary_text.clone())
                .prop("text-decoration", "none"),
        )]);
        Self { classes }
    }

    /// Render the button with `label`, triggering `binding`.
    pub fn view<M>(&self, label: &str, binding: ActionBinding<M>, utils: &dyn HostUtils) -> Node<M> {
        let element = Element::new("a")
            .class(css(&[
                "btn dib pointer tc ph4 pv3 f5 fw6 ttu",
                self.classes.get("button"),
            ]))
            .text(label);
        binding.bind(element, utils).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::{RenderMode, RequestContext, RequestUtils, UrlParams};

    #[test]
    fn test_button_link_in_amp() {
        let sheet = StyleSheet::new();
        let button = Button::new(&sheet, &GlobalStyles::default());
        let ctx = RequestContext::new("/p");
        let utils = RequestUtils::new(&ctx, RenderMode::Amp);

        let node: Node<()> = button.view(
            "Add to Cart",
            ActionBinding::LinkWithParams(UrlParams::new().with("openCart", true)),
            &utils,
        );
        let html = node.to_html();
        assert!(html.starts_with("<a class=\"btn dib"));
        assert!(html.contains(r#"href="/p?openCart=true""#));
        assert!(html.ends_with(">Add to Cart</a>"));
        assert!(sheet.render_css().contains("background-color:#111111"));
    }
}
