/// Stylesheet linked from the navigation document.
///
/// Hides the landmarks and page-list navs and drops list markers
/// from the table of contents.
pub(super) const NAV_CSS: &str = "nav#landmarks {display:none;} \
nav#page-list {display:none;} \
ol {list-style-type: none;}";
