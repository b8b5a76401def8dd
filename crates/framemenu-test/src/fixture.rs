//! Ready-made menus.

use framemenu_widgets::{Menu, MenuItem, MenuItems};

/// Items labelled `Item 0` .. `Item {count-1}`.
#[must_use]
pub fn numbered_items(count: usize) -> MenuItems {
    (0..count).map(|i| MenuItem::new(format!("Item {i}"))).collect()
}

/// A hidden menu titled `title` holding [`numbered_items`].
#[must_use]
pub fn numbered_menu(title: &str, count: usize) -> Menu {
    let mut menu = Menu::new(title, "");
    let items = numbered_items(count);
    menu.update_items(|list| *list = items);
    menu
}
