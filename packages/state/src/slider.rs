//! Drag-to-scroll for `.slider` / `[data-slider]` strips, plus their responsive
//! scroll-snap layout.

use std::collections::HashMap;

use crate::config::{millis, SliderConfig};
use crate::debounce::{Debouncer, Ticket};
use crate::dom::{DomOp, Target};
use crate::effect::{Effect, TimerKey};
use crate::event::Pointer;

#[derive(Clone, Copy, Debug, Default)]
struct Drag {
    start_x: Option<f64>,
    initial: f64,
    mouse_down: bool,
}

#[derive(Debug)]
pub struct Sliders {
    breakpoint: f64,
    threshold: f64,
    resize: Debouncer<f64>,
    count: usize,
    drags: HashMap<usize, Drag>,
}

impl Sliders {
    pub fn new(config: &SliderConfig) -> Self {
        Self {
            breakpoint: config.breakpoint_px,
            threshold: config.drag_threshold_px,
            resize: Debouncer::new(millis(config.resize_debounce_ms)),
            count: 0,
            drags: HashMap::new(),
        }
    }

    fn style(slider: usize, property: &'static str, value: &'static str) -> Effect {
        DomOp::SetStyle(Target::Slider(slider), property, value).into()
    }

    pub fn found(&mut self, count: usize, width: f64) -> Vec<Effect> {
        self.count = count;
        self.layout(width)
    }

    /// Inline styles for the current viewport width.
    fn layout(&self, width: f64) -> Vec<Effect> {
        let narrow = width < self.breakpoint;
        let mut effects = Vec::new();
        for slider in 0..self.count {
            effects.push(Self::style(slider, "overflow-x", "auto"));
            if narrow {
                effects.push(Self::style(slider, "scroll-snap-type", "x mandatory"));
                effects.push(
                    DomOp::SetStyle(Target::SliderItems(slider), "scroll-snap-align", "start")
                        .into(),
                );
                effects.push(
                    DomOp::SetStyle(Target::SliderItems(slider), "flex-shrink", "0").into(),
                );
            }
        }
        effects
    }

    pub fn pressed(
        &mut self,
        slider: usize,
        pointer: Pointer,
        x: f64,
        scroll_left: f64,
    ) -> Vec<Effect> {
        let drag = self.drags.entry(slider).or_default();
        drag.start_x = Some(x);
        drag.initial = scroll_left;
        let mut effects = vec![Self::style(slider, "scroll-behavior", "auto")];
        if pointer == Pointer::Mouse {
            drag.mouse_down = true;
            effects.push(Self::style(slider, "cursor", "grabbing"));
            effects.push(Effect::PreventDefault);
        }
        effects
    }

    pub fn moved(&mut self, slider: usize, pointer: Pointer, x: f64) -> Vec<Effect> {
        let Some(drag) = self.drags.get(&slider) else {
            return vec![];
        };
        if pointer == Pointer::Mouse && !drag.mouse_down {
            return vec![];
        }
        let Some(start_x) = drag.start_x else {
            return vec![];
        };
        let diff = start_x - x;
        let scrolled = DomOp::SetScrollLeft(Target::Slider(slider), drag.initial + diff);
        let mut effects = vec![scrolled.into()];
        if pointer == Pointer::Touch && diff.abs() > self.threshold {
            effects.push(Effect::PreventDefault);
        }
        effects
    }

    pub fn released(&mut self, slider: usize, pointer: Pointer) -> Vec<Effect> {
        let drag = self.drags.entry(slider).or_default();
        let mut effects = vec![Self::style(slider, "scroll-behavior", "smooth")];
        match pointer {
            Pointer::Touch => drag.start_x = None,
            Pointer::Mouse => {
                drag.mouse_down = false;
                effects.push(Self::style(slider, "cursor", "grab"));
            }
        }
        effects
    }

    pub fn left(&mut self, slider: usize) -> Vec<Effect> {
        match self.drags.get_mut(&slider) {
            Some(drag) if drag.mouse_down => {
                drag.mouse_down = false;
                vec![Self::style(slider, "cursor", "grab")]
            }
            _ => vec![],
        }
    }

    pub fn resized(&mut self, width: f64) -> Option<Effect> {
        if self.count == 0 {
            return None;
        }
        Some(Effect::Arm {
            key: TimerKey::SliderResize,
            ticket: self.resize.call(width),
            delay: self.resize.window(),
        })
    }

    pub fn resize_fired(&mut self, ticket: Ticket) -> Vec<Effect> {
        match self.resize.fire(ticket) {
            Some(width) => self.layout(width),
            None => vec![],
        }
    }
}
