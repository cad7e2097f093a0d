use crate::error::{BehaviorError, BehaviorResult};
use crate::page::{Page, Trigger};

pub const DEFAULT_TARGET_ATTRIBUTE: &str = "data-href";

/// Navigate to the row's target, returning the URL that was followed
///
/// The attribute value is used as-is. Modifier keys are not inspected, so a
/// ctrl/middle click navigates the current tab like any other click.
pub fn navigate_row<P: Page, T: Trigger>(page: &P, row: &T, attribute: &str) -> BehaviorResult<String> {
    let target = row.attribute(attribute).ok_or_else(|| BehaviorError::MissingAttribute {
        attribute: attribute.to_string(),
    })?;

    log::debug!("Row {} navigating to {}", row.describe(), target);
    page.navigate(&target)?;
    Ok(target)
}
