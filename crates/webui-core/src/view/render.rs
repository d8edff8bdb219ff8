use serde::Serialize;

use crate::instances::Instance;

pub const INSTANCE_HEADER: &str = "Instance";

/// One table row. `key` is the row's position in the current list, not the
/// instance identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

pub fn render_row(index: usize, instance: &Instance) -> Row {
    Row {
        key: index,
        cells: vec![instance.instance_id.clone()],
    }
}

/// Render one row per instance under a single "Instance" header.
pub fn render_table(instances: &[Instance]) -> RenderedTable {
    RenderedTable {
        headers: vec![INSTANCE_HEADER.to_string()],
        rows: instances
            .iter()
            .enumerate()
            .map(|(index, instance)| render_row(index, instance))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_list_keeps_header() {
        let table = render_table(&[]);
        assert_eq!(table.headers, vec!["Instance"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_render_uses_positional_keys() {
        let instances = vec![Instance::new("3"), Instance::new("5"), Instance::new("10")];
        let table = render_table(&instances);

        assert_eq!(
            table.rows,
            vec![
                Row { key: 0, cells: vec!["3".to_string()] },
                Row { key: 1, cells: vec!["5".to_string()] },
                Row { key: 2, cells: vec!["10".to_string()] },
            ]
        );
    }
}
