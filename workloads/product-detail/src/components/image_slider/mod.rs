//! Image slider: main image with previous/next arrows and a thumbnail strip.

mod alternates;
mod arrows;
mod image;

pub use alternates::*;
pub use arrows::*;
pub use image::*;

use std::rc::Rc;

use block_core::{keys, HostUtils, RenderMode, UrlParams};
use block_data::ProductImage;
use block_markup::{ActionBinding, Element, Node};

use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderMsg {
    Next,
    Previous,
    Select(usize),
}

/// Slider state: the product images and the selected index.
///
/// The index is always a valid position in `images`, or 0 when there are none.
#[derive(Clone)]
pub struct ImageSlider {
    images: Vec<ProductImage>,
    selected: usize,
    main: MainImage,
    alternates: ImageAlternates,
    utils: Rc<dyn HostUtils>,
}

impl ImageSlider {
    /// Create a slider starting at `initial` (clamped), or the first image.
    pub fn new(host: &Host, images: Vec<ProductImage>, initial: Option<usize>) -> Self {
        let selected = clamp_index(initial.unwrap_or(0), images.len());
        Self {
            images,
            selected,
            main: MainImage::new(host),
            alternates: ImageAlternates::new(host),
            utils: host.utils.clone(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    /// Index after the current one, wrapping to the first image.
    pub fn next_index(&self) -> usize {
        match self.images.len() {
            0 => 0,
            len => (self.selected + 1) % len,
        }
    }

    /// Index before the current one, wrapping to the last image.
    pub fn previous_index(&self) -> usize {
        match self.images.len() {
            0 => 0,
            len => (self.selected + len - 1) % len,
        }
    }

    pub fn update(&mut self, msg: SliderMsg) {
        self.selected = match msg {
            SliderMsg::Next => self.next_index(),
            SliderMsg::Previous => self.previous_index(),
            SliderMsg::Select(index) => clamp_index(index, self.images.len()),
        };
    }

    pub fn view(&self) -> Node<SliderMsg> {
        let container = Element::new("div")
            .class("flex tc flex-column justify-center items-center");

        let Some(image) = self.images.get(self.selected) else {
            return container
                .child(
                    Element::new("div")
                        .class("relative pv2 pa2-m pa2-l mw6 w-100")
                        .attr("data-role", "image-placeholder"),
                )
                .into();
        };

        let previous = self.binding(SliderMsg::Previous, self.previous_index());
        let next = self.binding(SliderMsg::Next, self.next_index());

        container
            .child(self.main.view(image, previous, next, self.utils.as_ref()))
            .child(
                self.alternates
                    .view(&self.images, self.selected, self.utils.as_ref()),
            )
            .into()
    }

    fn binding(&self, message: SliderMsg, target: usize) -> ActionBinding<SliderMsg> {
        ActionBinding::for_mode(self.mode(), message, || {
            UrlParams::new().with(keys::SELECTED_IMAGE_IDX, target)
        })
    }

    fn mode(&self) -> RenderMode {
        self.utils.render_mode()
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
