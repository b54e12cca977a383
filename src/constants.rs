/// Upload root the weekly menus are published under.
pub const BASE_URL: &str = "http://assicanti.pt/wp-content/uploads/";

/// Leading tokens of the menu lines worth printing.
pub const FOOD_CATEGORIES: [&str; 4] = ["SOPA", "CARNE", "PEIXE", "VEGETARIANO"];

/// Date pattern used in the menu file names, e.g. `19-10-2026`.
pub const MENU_DATE_FORMAT: &str = "%d-%m-%Y";

/// Sent with every menu download.
pub const USER_AGENT: &str = "uptec-menu/0.1";
