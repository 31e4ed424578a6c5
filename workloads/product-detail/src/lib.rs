//! Product Detail block.
//!
//! Renders one catalog product for the page builder:
//! - Image slider with thumbnails
//! - Name, price and a collapsible description
//! - Quantity selector and add-to-cart
//!
//! Every control works in two modes. Interactive pages bind click messages
//! that the host feeds back through `Block::update`; AMP pages render links
//! back to the same URL whose query parameters seed the next render.

mod components;
#[cfg(target_arch = "wasm32")]
mod http;
mod host;
mod page;
mod styles;

use block_core::{BlockConfig, ConfigSpec, HostUtils, PropSpec, ProductLayout, QueryParams};
use block_data::{get_data_props, DataContext, DataProps, FetchError, Product, ProductClient};
use block_markup::{css, ClassMap, Element, HeadContent, Node, Shell};

pub use components::*;
pub use host::Host;
pub use page::{error_document, extract_product_id, render_page, response_headers, PageRequest};

/// Name the block registers under.
pub const BLOCK_NAME: &str = "product-detail";

/// Props the host passes when mounting the block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockProps {
    pub data: DataProps,
    pub query: QueryParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockMsg {
    Slider(SliderMsg),
    Controls(ControlsMsg),
    ToggleDescription,
}

/// A configured block, ready to fetch data and mount.
pub struct BlockFactory {
    host: Host,
    config: BlockConfig,
}

impl BlockFactory {
    pub fn new(host: Host, config: BlockConfig) -> Self {
        Self {
            host,
            config: config.with_defaults(),
        }
    }

    pub fn config(&self) -> &BlockConfig {
        &self.config
    }

    /// Configuration schema shown in the host editor.
    pub fn config_spec() -> ConfigSpec {
        ConfigSpec::new(vec![
            PropSpec::string("productId").required(),
            PropSpec::one_of("productLayout", &ProductLayout::NAMES).required(),
            PropSpec::shape("color", vec![PropSpec::color("background").required()]).required(),
        ])
    }

    /// Resolve the configured product and mount the block.
    pub async fn load(
        &self,
        client: &dyn ProductClient,
        query: QueryParams,
    ) -> Result<Block, FetchError> {
        let ctx = DataContext {
            utils: self.host.utils.as_ref(),
            client,
            logger: &self.host.logger,
        };
        let data = get_data_props(&ctx, self.config.product_id.as_deref()).await?;
        Ok(self.mount(BlockProps { data, query }))
    }

    /// Mount the block with already resolved props.
    pub fn mount(&self, props: BlockProps) -> Block {
        let host = &self.host;
        let BlockProps { data, query } = props;
        let product = data.product;

        host.logger
            .debug_builder("Mounting product block")
            .field("product_id", product.id.clone())
            .field("layout", self.config.product_layout.as_str())
            .field_i64("images", product.images.len() as i64)
            .field_bool("amp", host.utils.is_amp_request())
            .emit();

        let controls = Controls::new(
            host,
            ControlsProps {
                product_id: product.id.clone(),
                increment_qty: query.increment_qty,
                decrement_qty: query.decrement_qty,
            },
        );
        let slider = ImageSlider::new(host, product.images.clone(), query.selected_image_idx);

        Block {
            host: host.clone(),
            layout: self.config.product_layout,
            classes: host.styles.create(styles::block_rules(&self.config)),
            show_full_description: query.show_full_description.unwrap_or(false),
            description: Description::new(host),
            controls,
            slider,
            product,
        }
    }
}

/// A mounted product block.
pub struct Block {
    host: Host,
    layout: ProductLayout,
    classes: ClassMap,
    product: Product,
    show_full_description: bool,
    description: Description,
    controls: Controls,
    slider: ImageSlider,
}

impl Block {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn show_full_description(&self) -> bool {
        self.show_full_description
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn slider(&self) -> &ImageSlider {
        &self.slider
    }

    /// Apply a message. Returns a cart request when the visitor adds to cart.
    pub fn update(&mut self, msg: BlockMsg) -> Option<CartRequest> {
        match msg {
            BlockMsg::Slider(msg) => {
                self.slider.update(msg);
                None
            }
            BlockMsg::Controls(msg) => {
                let request = self.controls.update(msg)?;
                self.host
                    .logger
                    .info_builder("Add to cart")
                    .field("product_id", request.product_id.clone())
                    .field_i64("quantity", request.quantity)
                    .emit();
                Some(request)
            }
            BlockMsg::ToggleDescription => {
                self.show_full_description = !self.show_full_description;
                None
            }
        }
    }

    pub fn view(&self) -> Node<BlockMsg> {
        let pane = || {
            Element::<BlockMsg>::new("div")
                .class(format!("fn {} w-50-l pa2", self.layout.float_class()))
        };

        let description = DescriptionProps::new(self.product.description.clone())
            .with_show_full_description(self.show_full_description);

        Element::new("section")
            .class(css(&["cf pa4 ph6-l", self.classes.get("block")]))
            .attr("data-block", crate::BLOCK_NAME)
            .child(pane().child(self.slider.view().map(BlockMsg::Slider)))
            .child(
                pane()
                    .child(view_name(&self.product.name))
                    .child(view_price(self.product.price))
                    .child(
                        self.description
                            .view(&description)
                            .map(|DescriptionMsg::Toggle| BlockMsg::ToggleDescription),
                    )
                    .child(self.controls.view().map(BlockMsg::Controls)),
            )
            .into()
    }

    pub fn render_html(&self) -> String {
        self.view().to_html()
    }

    /// Render a standalone page around the block, with the collected CSS.
    pub fn render_document(&self, title: &str) -> String {
        let mode = self.host.mode();
        let body = self.render_html();
        let head = HeadContent::new(title)
            .with_meta("viewport", "width=device-width,minimum-scale=1,initial-scale=1")
            .with_canonical(self.host.utils.page_url())
            .with_style(self.host.styles.render_css());
        Shell::new(head, mode).render_document(&body)
    }
}
