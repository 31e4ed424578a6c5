//! Quantity selector and add-to-cart button.

use std::rc::Rc;

use block_core::{keys, HostUtils, RenderMode, UrlParams};
use block_markup::{css, ActionBinding, Button, ClassMap, Element, Event, Node};

use crate::host::Host;
use crate::styles::controls_rules;

/// Controls props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlsProps {
    pub product_id: String,
    /// The request asked for a quantity of 2 (AMP "+" link).
    pub increment_qty: bool,
    /// The request asked for a quantity of 0 (AMP "-" link).
    pub decrement_qty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlsMsg {
    Increment,
    Decrement,
    /// The visitor typed into the quantity field.
    Input(String),
    /// The quantity field lost focus with this value.
    Blur(String),
    AddToCart,
}

/// Request to add a product to the host's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Quantity state and its markup.
///
/// `qty` is `None` while the field holds text that is not a number; such a
/// field counts as 1 for the buttons and the cart.
#[derive(Clone)]
pub struct Controls {
    product_id: String,
    qty: Option<i64>,
    classes: ClassMap,
    button: Button,
    utils: Rc<dyn HostUtils>,
}

impl Controls {
    pub fn new(host: &Host, props: ControlsProps) -> Self {
        Self {
            qty: Some(initial_quantity(props.increment_qty, props.decrement_qty)),
            product_id: props.product_id,
            classes: host.styles.create(controls_rules()),
            button: Button::new(&host.styles, &host.global),
            utils: host.utils.clone(),
        }
    }

    /// Raw quantity, `None` while the field is not a number.
    pub fn quantity(&self) -> Option<i64> {
        self.qty
    }

    /// Quantity used for the buttons and the cart.
    pub fn effective_quantity(&self) -> i64 {
        self.qty.unwrap_or(1)
    }

    pub fn update(&mut self, msg: ControlsMsg) -> Option<CartRequest> {
        match msg {
            ControlsMsg::Increment => {
                self.qty = Some(self.effective_quantity().saturating_add(1));
            }
            ControlsMsg::Decrement => {
                self.qty = Some(self.effective_quantity().saturating_sub(1).max(1));
            }
            ControlsMsg::Input(value) => {
                self.qty = parse_quantity(&value);
            }
            ControlsMsg::Blur(value) => {
                self.qty = Some(parse_quantity(&value).filter(|q| *q > 0).unwrap_or(1));
            }
            ControlsMsg::AddToCart => {
                return Some(CartRequest {
                    product_id: self.product_id.clone(),
                    quantity: self.effective_quantity(),
                });
            }
        }
        None
    }

    pub fn view(&self) -> Node<ControlsMsg> {
        let mode = self.utils.render_mode();
        let utils = self.utils.as_ref();
        let button_class = self.classes.get("qtyInputButton");

        let decrement = ActionBinding::for_mode(mode, ControlsMsg::Decrement, || {
            UrlParams::new().with(keys::DECREMENT_QTY, true)
        })
        .bind(
            Element::new("a")
                .class(css(&["outline-0 pointer f3 pv2 ph3 bt bb bl dib br-0", button_class]))
                .attr("data-role", "decrement")
                .text("-"),
            utils,
        );

        let increment = ActionBinding::for_mode(mode, ControlsMsg::Increment, || {
            UrlParams::new().with(keys::INCREMENT_QTY, true)
        })
        .bind(
            Element::new("a")
                .class(css(&["outline-0 pointer f3 pv2 ph3 dib bt br bb bl-0", button_class]))
                .attr("data-role", "increment")
                .text("+"),
            utils,
        );

        let mut field = Element::new("input")
            .class(css(&[
                "outline-0 pv2 ph3 w3 tc ba dib",
                self.classes.get("qtyInputField"),
            ]))
            .attr("type", "text")
            .attr("placeholder", "1")
            .attr("value", self.qty.map(|q| q.to_string()).unwrap_or_default())
            .attr("data-role", "quantity");
        if mode == RenderMode::Interactive {
            field = field
                .on_value(Event::Input, ControlsMsg::Input)
                .on_value(Event::Blur, ControlsMsg::Blur);
        }

        let product_id = self.product_id.clone();
        let add_to_cart = ActionBinding::for_mode(mode, ControlsMsg::AddToCart, move || {
            UrlParams::new()
                .with(keys::ADD_TO_CART, product_id)
                .with(keys::OPEN_CART, true)
        });

        Element::new("div")
            .class("mv5")
            .child(
                Element::new("div")
                    .class("mb5")
                    .child(
                        Element::new("div")
                            .class(css(&["dib f6 mr5", self.classes.get("qtyLabel")]))
                            .text("Qty"),
                    )
                    .child(
                        Element::new("div").class("dib").child(
                            Element::new("div")
                                .class("flex flex-nowrap")
                                .child(decrement)
                                .child(field)
                                .child(increment),
                        ),
                    ),
            )
            .child(self.button.view("Add to Cart", add_to_cart, utils))
            .into()
    }
}

/// Starting quantity: 0 after an AMP "-", 2 after an AMP "+", else 1.
pub fn initial_quantity(increment_qty: bool, decrement_qty: bool) -> i64 {
    if decrement_qty {
        0
    } else if increment_qty {
        2
    } else {
        1
    }
}

/// Leading integer of `text`, ignoring leading whitespace and trailing junk.
///
/// `"12abc"` is 12, `" -3"` is -3, `"abc"` is `None`. Values beyond `i64`
/// saturate.
pub fn parse_quantity(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    });
    Some(match (magnitude, negative) {
        (Some(n), false) => n,
        (Some(n), true) => -n,
        (None, false) => i64::MAX,
        (None, true) => i64::MIN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::{RequestContext, RequestId, RequestUtils};
    use block_observability::StructuredLogger;

    fn host(mode: RenderMode) -> Host {
        let ctx = RequestContext::new("/product/7");
        Host::new(
            Rc::new(RequestUtils::new(&ctx, mode)),
            StructuredLogger::new(RequestId::from_string("test")),
        )
    }

    fn controls(props: ControlsProps) -> Controls {
        Controls::new(&host(RenderMode::Interactive), props)
    }

    fn props() -> ControlsProps {
        ControlsProps {
            product_id: "p7".into(),
            ..ControlsProps::default()
        }
    }

    #[test]
    fn test_initial_quantity() {
        assert_eq!(initial_quantity(false, false), 1);
        assert_eq!(initial_quantity(true, false), 2);
        assert_eq!(initial_quantity(false, true), 0);
        assert_eq!(initial_quantity(true, true), 0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut c = controls(props());
        c.update(ControlsMsg::Increment);
        c.update(ControlsMsg::Increment);
        assert_eq!(c.quantity(), Some(3));

        for _ in 0..5 {
            c.update(ControlsMsg::Decrement);
        }
        assert_eq!(c.quantity(), Some(1));
    }

    #[test]
    fn test_decrement_from_zero_floors_at_one() {
        let mut c = controls(ControlsProps {
            decrement_qty: true,
            ..props()
        });
        assert_eq!(c.quantity(), Some(0));
        c.update(ControlsMsg::Decrement);
        assert_eq!(c.quantity(), Some(1));
    }

    #[test]
    fn test_input_and_blur() {
        let mut c = controls(props());
        c.update(ControlsMsg::Input("12 boxes".into()));
        assert_eq!(c.quantity(), Some(12));

        c.update(ControlsMsg::Input("-4".into()));
        assert_eq!(c.quantity(), Some(-4));
        c.update(ControlsMsg::Blur("-4".into()));
        assert_eq!(c.quantity(), Some(1));

        c.update(ControlsMsg::Input("abc".into()));
        assert_eq!(c.quantity(), None);
        assert_eq!(c.effective_quantity(), 1);
        c.update(ControlsMsg::Increment);
        assert_eq!(c.quantity(), Some(2));

        c.update(ControlsMsg::Blur("".into()));
        assert_eq!(c.quantity(), Some(1));
    }

    #[test]
    fn test_add_to_cart() {
        let mut c = controls(props());
        c.update(ControlsMsg::Input("4".into()));
        assert_eq!(
            c.update(ControlsMsg::AddToCart),
            Some(CartRequest {
                product_id: "p7".into(),
                quantity: 4,
            })
        );
        assert_eq!(c.quantity(), Some(4));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("7"), Some(7));
        assert_eq!(parse_quantity("  +3x"), Some(3));
        assert_eq!(parse_quantity("-0"), Some(0));
        assert_eq!(parse_quantity("x3"), None);
        assert_eq!(parse_quantity("-"), None);
        assert_eq!(parse_quantity("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_interactive_view_dispatches() {
        let c = controls(props());
        let node = c.view();

        let field = node.find_by_attr("data-role", "quantity")[0];
        assert_eq!(field.get_attr("value"), Some("1"));
        assert_eq!(field.get_attr("placeholder"), Some("1"));
        assert_eq!(
            field.dispatch(Event::Input, "5"),
            Some(ControlsMsg::Input("5".into()))
        );
        assert_eq!(
            field.dispatch(Event::Blur, "0"),
            Some(ControlsMsg::Blur("0".into()))
        );

        let minus = node.find_by_attr("data-role", "decrement")[0];
        assert_eq!(minus.dispatch(Event::Click, ""), Some(ControlsMsg::Decrement));
        assert!(minus.get_attr("href").is_none());

        let cart = node.find_by_class("btn")[0];
        assert_eq!(cart.dispatch(Event::Click, ""), Some(ControlsMsg::AddToCart));
    }

    #[test]
    fn test_amp_view_links() {
        let c = Controls::new(
            &host(RenderMode::Amp),
            ControlsProps {
                increment_qty: true,
                ..props()
            },
        );
        let node = c.view();

        assert_eq!(
            node.find_by_attr("data-role", "increment")[0].get_attr("href"),
            Some("/product/7?incrementQty=true")
        );
        assert_eq!(
            node.find_by_attr("data-role", "decrement")[0].get_attr("href"),
            Some("/product/7?decrementQty=true")
        );
        assert_eq!(
            node.find_by_class("btn")[0].get_attr("href"),
            Some("/product/7?addToCart=p7&openCart=true")
        );

        let field = node.find_by_attr("data-role", "quantity")[0];
        assert_eq!(field.get_attr("value"), Some("2"));
        assert!(field.handler(Event::Input).is_none());
        assert_eq!(node.text_content(), "Qty-+Add to Cart");
    }
}
