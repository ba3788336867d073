pub mod page;
pub mod prompts;
pub mod render;
pub mod view;

pub use page::{parse_row_key, row_key, Controls, Page, Row};
pub use prompts::{
    menu_choices, prompt_action, prompt_form, prompt_row, prompt_yes_no, MenuChoice,
};
pub use render::{draw_page, format_page};
pub use view::View;
