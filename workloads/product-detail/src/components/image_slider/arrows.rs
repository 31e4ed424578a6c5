//! Previous/next arrows drawn over the main image.

use block_core::HostUtils;
use block_markup::{css, ActionBinding, ClassMap, Element, Node};

use super::SliderMsg;
use crate::host::Host;
use crate::styles::arrows_rules;

const PREVIOUS_POINTS: &str = "352,128.4 319.7,96 160,256 160,256 160,256 319.7,416 352,383.6 224.7,256";
const NEXT_POINTS: &str = "160,128.4 192.3,96 352,256 352,256 352,256 192.3,416 160,383.6 287.3,256";

#[derive(Debug, Clone)]
pub struct SliderArrows {
    classes: ClassMap,
}

impl SliderArrows {
    pub fn new(host: &Host) -> Self {
        Self {
            classes: host.styles.create(arrows_rules()),
        }
    }

    pub fn view(
        &self,
        previous: ActionBinding<SliderMsg>,
        next: ActionBinding<SliderMsg>,
        utils: &dyn HostUtils,
    ) -> Node<SliderMsg> {
        Element::new("div")
            .class(css(&[
                self.classes.get("controlsWrap"),
                "flex justify-between ph4 absolute left-0 right-0",
            ]))
            .child(self.arrow("previous-image", PREVIOUS_POINTS, previous, utils))
            .child(self.arrow("next-image", NEXT_POINTS, next, utils))
            .into()
    }

    fn arrow(
        &self,
        role: &str,
        points: &str,
        binding: ActionBinding<SliderMsg>,
        utils: &dyn HostUtils,
    ) -> Element<SliderMsg> {
        let icon = Element::new("svg")
            .class(css(&[
                self.classes.get("controlsImage"),
                "w1 h1 absolute absolute--fill",
            ]))
            .attr("viewBox", "0 0 512 512")
            .child(Element::new("polygon").attr("points", points));

        binding.bind(
            Element::new("a")
                .class("w2 h2 br4 pointer bg-black o-50 glow relative")
                .attr("data-role", role)
                .child(icon),
            utils,
        )
    }
}
