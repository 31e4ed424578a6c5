//! Thumbnail strip for picking an image.

use block_core::{keys, HostUtils, RenderMode, UrlParams};
use block_data::{ProductImage, THUMBNAIL_SIZE};
use block_markup::{css, ActionBinding, ClassMap, Element, Node};

use super::SliderMsg;
use crate::host::Host;
use crate::styles::alternates_rules;

const AMP_THUMBNAIL_SIZE: &str = "128";

#[derive(Debug, Clone)]
pub struct ImageAlternates {
    classes: ClassMap,
}

impl ImageAlternates {
    pub fn new(host: &Host) -> Self {
        Self {
            classes: host.styles.create(alternates_rules(&host.global)),
        }
    }

    pub fn view(
        &self,
        images: &[ProductImage],
        selected: usize,
        utils: &dyn HostUtils,
    ) -> Node<SliderMsg> {
        let mode = utils.render_mode();
        let thumbnails = images.iter().enumerate().map(|(index, image)| {
            let binding = ActionBinding::for_mode(mode, SliderMsg::Select(index), || {
                UrlParams::new().with(keys::SELECTED_IMAGE_IDX, index)
            });
            let link = binding.bind(
                Element::new("a")
                    .class("pa1 pointer w-20")
                    .attr("data-role", "thumbnail"),
                utils,
            );
            Node::from(link.child(self.thumbnail(image, index == selected, mode)))
        });

        Element::new("div")
            .class("flex flex-wrap tc justify-center w-100")
            .children(thumbnails)
            .into()
    }

    fn thumbnail(&self, image: &ProductImage, selected: bool, mode: RenderMode) -> Element<SliderMsg> {
        let base = "border-box h-auto db outline-0 v-mid center b--solid bw1";
        let width = if mode.is_amp() { "" } else { "w4-ns" };
        let state = if selected {
            self.classes.get("selected")
        } else {
            "b--transparent o-50"
        };
        let class = css(&[width, base, state]);
        let src = image.url(THUMBNAIL_SIZE);

        match mode {
            RenderMode::Interactive => Element::new("img")
                .class(class)
                .attr("src", src)
                .attr("alt", "Alternate"),
            RenderMode::Amp => Element::new("amp-img")
                .class(class)
                .attr("src", src)
                .attr("alt", "Alternate")
                .attr("width", AMP_THUMBNAIL_SIZE)
                .attr("height", AMP_THUMBNAIL_SIZE)
                .attr("layout", "responsive"),
        }
    }
}
