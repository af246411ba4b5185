//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use petrovich::Case;

/// Format the case forms of a name as an ASCII table.
pub fn format_declension_table(name: &str, forms: &[String; 5]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Case", name]);

    for (case, form) in Case::ALL.iter().zip(forms) {
        table.add_row(vec![case_label(*case).to_string(), form.clone()]);
    }

    table
}

fn case_label(case: Case) -> &'static str {
    match case {
        Case::Genitive => "genitive (родительный)",
        Case::Dative => "dative (дательный)",
        Case::Accusative => "accusative (винительный)",
        Case::Instrumental => "instrumental (творительный)",
        Case::Prepositional => "prepositional (предложный)",
    }
}
