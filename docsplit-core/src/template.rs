use serde::Serialize;
use tera::{Context, Tera};

use crate::config::NavigationConfig;
use crate::error::Result;

const PREVIOUS: &str = "previous";
const NEXT: &str = "next";

/// Link to a neighbouring page, as seen by the navigation templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

pub struct NavigationRenderer {
    tera: Tera,
    separator: String,
}

impl NavigationRenderer {
    pub fn new(config: &NavigationConfig) -> Result<Self> {
        let mut tera = Tera::default();
        // Names without an .html suffix, so tera leaves titles unescaped.
        tera.add_raw_templates(vec![
            (PREVIOUS, config.previous.as_str()),
            (NEXT, config.next.as_str()),
        ])?;

        Ok(Self {
            tera,
            separator: config.separator.clone(),
        })
    }

    /// Render the footer links. Either side may be absent.
    pub fn render(&self, previous: Option<&NavItem>, next: Option<&NavItem>) -> Result<String> {
        let mut links = Vec::with_capacity(2);
        if let Some(item) = previous {
            links.push(self.render_item(PREVIOUS, item)?);
        }
        if let Some(item) = next {
            links.push(self.render_item(NEXT, item)?);
        }

        Ok(links.join(&self.separator))
    }

    fn render_item(&self, template: &str, item: &NavItem) -> Result<String> {
        let context = Context::from_serialize(item)?;
        Ok(self.tera.render(template, &context)?)
    }
}
