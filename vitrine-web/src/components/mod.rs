pub mod theme_menu;
