//! Everything a block borrows from the page it is mounted into.

use std::rc::Rc;

use block_core::{HostUtils, RenderMode};
use block_markup::{GlobalStyles, StyleSheet};
use block_observability::StructuredLogger;

/// Services shared by all components of one page render.
#[derive(Clone)]
pub struct Host {
    pub utils: Rc<dyn HostUtils>,
    pub styles: Rc<StyleSheet>,
    pub global: GlobalStyles,
    pub logger: StructuredLogger,
}

impl Host {
    /// Create a host with a fresh style sheet and the default theme.
    pub fn new(utils: Rc<dyn HostUtils>, logger: StructuredLogger) -> Self {
        Self {
            utils,
            styles: Rc::new(StyleSheet::new()),
            global: GlobalStyles::default(),
            logger,
        }
    }

    /// Use the site theme.
    pub fn with_global_styles(mut self, global: GlobalStyles) -> Self {
        self.global = global;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.utils.render_mode()
    }
}
