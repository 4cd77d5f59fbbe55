use serde::{Deserialize, Serialize};

/// Presentation flags of the site navbar.
///
/// Lives only as long as the page; a reload starts from `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub is_sticky: bool,
    pub is_mobile_menu_open: bool,
}
