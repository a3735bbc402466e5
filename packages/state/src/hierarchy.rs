use crate::dom::{class, DomOp, Target};
use crate::effect::Effect;

const EXPANDED_ICON: &str = "\u{2212}";
const COLLAPSED_ICON: &str = "+";

/// Flip a `.hierarchy-toggle` and the section its `data-target` names.
///
/// `content_collapsed` is the section's current state, `None` when the page has no
/// element with that id. The toggle's own `collapsed` class flips independently.
pub fn toggle(
    target: &str,
    content_collapsed: Option<bool>,
    toggle_collapsed: bool,
) -> Vec<Effect> {
    let mut effects = vec![Effect::PreventDefault];
    let Some(was_collapsed) = content_collapsed else {
        return effects;
    };
    let expanded = was_collapsed;
    let content = Target::HierarchyContent(target.to_string());
    let toggle = Target::HierarchyToggle(target.to_string());

    effects.extend([
        class(content.clone(), "collapsed", !expanded).into(),
        class(toggle.clone(), "collapsed", !toggle_collapsed).into(),
        DomOp::SetAttribute(toggle, "aria-expanded", expanded.to_string()).into(),
        DomOp::SetAttribute(content, "aria-hidden", (!expanded).to_string()).into(),
        DomOp::SetText(
            Target::ToggleIcon(target.to_string()),
            if expanded { EXPANDED_ICON } else { COLLAPSED_ICON }.to_string(),
        )
        .into(),
    ]);
    effects
}
