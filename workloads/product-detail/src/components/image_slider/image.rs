//! Main product image.

use block_core::{HostUtils, RenderMode};
use block_data::{ProductImage, MAIN_IMAGE_SIZE};
use block_markup::{ActionBinding, Element, Node};

use super::{SliderArrows, SliderMsg};
use crate::host::Host;

/// AMP images need explicit dimensions.
const AMP_MAIN_IMAGE_SIZE: &str = "496";

#[derive(Clone)]
pub struct MainImage {
    arrows: SliderArrows,
}

impl MainImage {
    pub fn new(host: &Host) -> Self {
        Self {
            arrows: SliderArrows::new(host),
        }
    }

    pub fn view(
        &self,
        image: &ProductImage,
        previous: ActionBinding<SliderMsg>,
        next: ActionBinding<SliderMsg>,
        utils: &dyn HostUtils,
    ) -> Node<SliderMsg> {
        let src = image.url(MAIN_IMAGE_SIZE);
        let img = match utils.render_mode() {
            RenderMode::Interactive => Element::new("img")
                .class("center db outline-0 mw-100 h-auto")
                .attr("src", src)
                .attr("alt", "Product image"),
            RenderMode::Amp => Element::new("amp-img")
                .attr("src", src)
                .attr("alt", "Product image")
                .attr("height", AMP_MAIN_IMAGE_SIZE)
                .attr("width", AMP_MAIN_IMAGE_SIZE)
                .attr("layout", "responsive"),
        };

        Element::new("div")
            .class("relative pv2 pa2-m pa2-l mw6 w-100")
            .child(self.arrows.view(previous, next, utils))
            .child(img.attr("data-role", "main-image"))
            .into()
    }
}
