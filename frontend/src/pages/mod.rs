pub mod editor_page;
