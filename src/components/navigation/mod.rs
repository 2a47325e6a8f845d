pub mod nav_item;
pub mod sidebar_menu;

pub use nav_item::NavItem;
pub use sidebar_menu::SidebarMenu;
