use crate::interface::page::Page;

/// Text rendering of a page, as printed by [`draw_page`].
pub fn format_page(page: &Page) -> String {
    let mut out = String::new();

    if !page.brand.is_empty() {
        out.push_str(&format!("=== {} ===\n\n", page.brand));
    }

    if page.list_visible {
        let width = page.rows.len().to_string().len();
        for (i, row) in page.rows.iter().enumerate() {
            out.push_str(&format!("  {:>width$}. {}\n", i + 1, row.content, width = width));
        }
        out.push('\n');
    }

    out.push_str(&format!("Total Calories: {}\n", page.total_display));

    if page.controls.is_edit_mode() {
        out.push_str(&format!(
            "\nEditing: {} ({} calories)\n",
            page.name_input, page.calories_input
        ));
    }

    out
}

/// Print the page to stdout.
pub fn draw_page(page: &Page) {
    println!();
    print!("{}", format_page(page));
    println!();
}
