use std::ops::RangeInclusive;

use crate::tree::{Element, Property};

pub mod html;

/// Class the engine puts on each per-line element
pub(crate) const LINE_CLASS: &str = "line";
pub(crate) const LINE_NUMBER_ATTR: &str = "data-line";
pub(crate) const LINE_HIGHLIGHTED_ATTR: &str = "data-line-highlighted";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Which lines to highlight. 1-indexed.
    pub highlight_lines: Vec<RangeInclusive<usize>>,
}

/// Reworks the engine tree for the page it ends up in.
///
/// The block element loses its class and tabindex since the page handles styling
/// and focus. Each line element loses its class, gets its 1-indexed line number
/// and, if asked for, the highlighted flag.
pub fn decorate(block: &mut Element, options: &RenderOptions) {
    block.remove_property("class");
    block.remove_property("tabindex");

    let mut line_num = 1;
    block.visit_descendants_mut(&mut |el| {
        if !el.has_class(LINE_CLASS) {
            return;
        }
        el.remove_property("class");
        el.set_property(LINE_NUMBER_ATTR, line_num);
        if options
            .highlight_lines
            .iter()
            .any(|r| r.contains(&line_num))
        {
            el.set_property(LINE_HIGHLIGHTED_ATTR, Property::Flag);
        }
        line_num += 1;
    });
}
