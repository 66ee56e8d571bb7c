use log::{debug, warn};

use crate::config;
use crate::scroll::ScrollAnimator;

/// Document offset of an anchor, corrected for the sticky header.
/// Never negative: anchors near the top of the page scroll to 0.
pub fn scroll_target(anchor_top: f64, page_offset: f64) -> f64 {
    (anchor_top + page_offset - config::HEADER_OFFSET_PX).max(0.0)
}

/// Where a click on `anchor` should scroll, or `None` when the page has no
/// such anchor. `locate` returns the anchor's top relative to the viewport.
pub fn plan_navigation<F>(anchor: &str, locate: F, page_offset: f64) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    locate(anchor).map(|top| scroll_target(top, page_offset))
}

fn anchor_viewport_top(anchor: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(anchor)?;
    Some(element.get_bounding_client_rect().top())
}

/// Smooth-scroll to the element with id `anchor`. Silently does nothing if
/// it is not on the page.
pub fn navigate_to(animator: &ScrollAnimator, anchor: &str) {
    let page_offset = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);

    let Some(target) = plan_navigation(anchor, anchor_viewport_top, page_offset) else {
        debug!("no #{} on the page, skipping scroll", anchor);
        return;
    };

    debug!("navigating to #{} at {}px", anchor, target);
    if let Err(e) = animator.start(target, config::NAV_SCROLL_DURATION_MS) {
        warn!("could not scroll to #{}: {}", anchor, e);
    }
}
