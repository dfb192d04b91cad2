use crate::constants::CLEF_ICON_IDS;
use crate::dom::{element_by_id, set_style};
use keyfall_core::layout::{icon_anchor, Icon};
use keyfall_core::Visualization;
use web_sys as web;

/// DOM clef icons drawn over the canvas in sheet mode.
pub struct ClefIcons {
    icons: Vec<(Icon, web::HtmlElement)>,
    placed_for: Option<(Visualization, u32)>,
}

impl ClefIcons {
    /// Collect whichever clef elements the page provides; missing ones are
    /// skipped.
    pub fn find() -> Self {
        let mut icons = Vec::new();
        for id in CLEF_ICON_IDS {
            let icon = match id.parse::<Icon>() {
                Ok(icon) => icon,
                Err(e) => {
                    log::warn!("[overlay] {e}");
                    continue;
                }
            };
            match element_by_id::<web::HtmlElement>(id) {
                Ok(el) => icons.push((icon, el)),
                Err(e) => log::debug!("[overlay] {e}"),
            }
        }
        Self {
            icons,
            placed_for: None,
        }
    }

    /// Show and position the clefs in sheet mode, hide them otherwise.
    /// `height` is the canvas backing height; positions are converted to
    /// CSS pixels.
    pub fn place(&mut self, visualization: Visualization, height: u32, dpr: f64) {
        if self.placed_for == Some((visualization, height)) {
            return;
        }
        self.placed_for = Some((visualization, height));
        for (icon, el) in &self.icons {
            if visualization != Visualization::Sheet {
                set_style(el, "display", "none");
                continue;
            }
            let anchor = icon_anchor(*icon, height as f64);
            set_style(el, "display", "");
            set_style(el, "left", &format!("{}px", anchor.x / dpr));
            set_style(el, "top", &format!("{}px", anchor.y / dpr));
            set_style(el, "height", &format!("{}px", anchor.height / dpr));
        }
    }
}
