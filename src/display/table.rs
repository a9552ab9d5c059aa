use crate::storage::config::Config;
use comfy_table::{Attribute, Cell, Table, presets};

/// Render the effective configuration as a two-column table
pub fn render_config_table(config: &Config, source: &str) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for (key, value) in config.entries() {
        table.add_row(vec![key.to_string(), value]);
    }

    format!("Configuration ({}):\n{}", source, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_table_lists_every_key() {
        let rendered = render_config_table(&Config::default(), "defaults");
        assert!(rendered.starts_with("Configuration (defaults):"));
        for needle in ["input", "output", "trailing", "input.txt", "output.txt", "flush"] {
            assert!(rendered.contains(needle), "missing {}", needle);
        }
    }
}
