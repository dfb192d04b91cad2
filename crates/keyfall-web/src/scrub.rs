//! Measure strip under the canvas showing where playback is in the song.
//!
//! A long song has hundreds of measures, so only the cells overlapping the
//! strip are kept in the DOM. Cells are positioned in strip coordinates and
//! the whole track is shifted with a CSS `translateX`.

use crate::constants::{SCRUB_CELL_CLASS, SCRUB_CURRENT_CLASS};
use crate::dom::set_style;
use anyhow::anyhow;
use keyfall_core::{Event, VirtualList};
use std::ops::Range;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Cell {
    offset: f64,
    width: f64,
    number: u32,
    node: Option<web::HtmlElement>,
}

pub struct ScrubBar {
    container: web::HtmlElement,
    track: web::HtmlElement,
    px_per_sec: f64,
    cells: Vec<Cell>,
    list: VirtualList,
    mounted: Range<usize>,
    current: Option<usize>,
}

impl ScrubBar {
    /// Attach to `container`, creating an inner track element to translate.
    pub fn new(container: web::HtmlElement, px_per_sec: f64) -> anyhow::Result<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| anyhow!("scrub container is detached"))?;
        let track = document
            .create_element("div")
            .map_err(|e| anyhow!("createElement failed: {:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        set_style(&track, "position", "relative");
        set_style(&track, "will-change", "transform");
        container
            .append_child(&track)
            .map_err(|e| anyhow!("appendChild failed: {:?}", e))?;
        Ok(Self {
            container,
            track,
            px_per_sec,
            cells: Vec::new(),
            list: VirtualList::new(),
            mounted: 0..0,
            current: None,
        })
    }

    /// Rebuild the cells from the measures of a timeline. A measure's cell
    /// runs until the next measure, the last one until the final note ends.
    pub fn set_song(&mut self, items: &[Event]) {
        self.unmount(self.mounted.clone());
        self.mounted = 0..0;
        self.current = None;
        self.list.reset();

        let song_end = items
            .iter()
            .map(|e| e.time() + e.duration())
            .fold(0.0, f64::max);
        let starts: Vec<(f64, u32)> = items
            .iter()
            .filter_map(|e| match e {
                Event::Measure(m) => Some((m.time, m.number)),
                Event::Note(_) => None,
            })
            .collect();
        self.cells = starts
            .iter()
            .enumerate()
            .map(|(i, &(time, number))| {
                let next = starts.get(i + 1).map_or(song_end, |s| s.0);
                Cell {
                    offset: time * self.px_per_sec,
                    width: (next - time).max(0.0) * self.px_per_sec,
                    number,
                    node: None,
                }
            })
            .collect();
        log::info!("[scrub] {} measures", self.cells.len());
    }

    /// Scroll so `time` sits in the middle of the strip.
    pub fn update(&mut self, time: f64) {
        let viewport = self.container.client_width() as f64;
        let scroll = time * self.px_per_sec - viewport / 2.0;
        let window = self
            .list
            .update(&self.cells, |c| (c.offset, c.width), scroll, viewport);

        if window.range != self.mounted {
            let old = self.mounted.clone();
            let new = window.range.clone();
            for i in old.clone() {
                if !new.contains(&i) {
                    self.unmount(i..i + 1);
                }
            }
            for i in new.clone() {
                if !old.contains(&i) {
                    self.mount(i);
                }
            }
            self.mounted = new;
        }

        let current = self.cells.partition_point(|c| c.offset <= time * self.px_per_sec);
        let current = current.checked_sub(1);
        if current != self.current {
            self.mark_current(self.current, SCRUB_CELL_CLASS);
            self.mark_current(current, SCRUB_CURRENT_CLASS);
            self.current = current;
        }

        set_style(
            &self.track,
            "transform",
            &format!("translateX({}px)", window.translate_px),
        );
    }

    fn mount(&mut self, i: usize) {
        let Some(document) = self.track.owner_document() else {
            return;
        };
        let Ok(el) = document.create_element("div") else {
            return;
        };
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        let cell = &mut self.cells[i];
        let class = if self.current == Some(i) {
            SCRUB_CURRENT_CLASS
        } else {
            SCRUB_CELL_CLASS
        };
        el.set_class_name(class);
        el.set_text_content(Some(&cell.number.to_string()));
        set_style(&el, "position", "absolute");
        set_style(&el, "left", &format!("{}px", cell.offset));
        set_style(&el, "width", &format!("{}px", cell.width));
        let _ = self.track.append_child(&el);
        cell.node = Some(el);
    }

    fn unmount(&mut self, range: Range<usize>) {
        for cell in &mut self.cells[range] {
            if let Some(node) = cell.node.take() {
                node.remove();
            }
        }
    }

    fn mark_current(&self, idx: Option<usize>, class: &str) {
        if let Some(node) = idx.and_then(|i| self.cells.get(i)).and_then(|c| c.node.as_ref()) {
            node.set_class_name(class);
        }
    }
}
