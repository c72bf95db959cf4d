// Fri Oct 16 2026 - Alex

use crate::error::Result;
use crate::output::Flat;
use crate::structure::{layout, Field, Structure};
use itertools::Itertools;
use serde::Serialize;

/// Renders a whole report in one pass.
pub trait Formatter: Send + Sync {
    fn format(&self, flat: &Flat) -> Result<Vec<u8>>;
}

#[derive(Serialize)]
struct Entry<'a> {
    id: &'a str,
    name: &'a str,
    size: i64,
    align: i64,
    ptr: i64,
    comment: &'a [String],
    fields: &'a [Field],
}

impl<'a> Entry<'a> {
    fn new(id: &'a str, st: &'a Structure) -> Self {
        let layout = st.layout();
        Self {
            id,
            name: &st.name,
            size: layout.size,
            align: layout.align,
            ptr: layout.ptr,
            comment: &st.comment,
            fields: &st.fields,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, flat: &Flat) -> Result<Vec<u8>> {
        let entries: Vec<Entry> = flat.iter().map(|(id, st)| Entry::new(id, st)).collect();
        let mut buf = if self.pretty {
            serde_json::to_vec_pretty(&entries)?
        } else {
            serde_json::to_vec(&entries)?
        };
        buf.push(b'\n');
        Ok(buf)
    }
}

/// Human readable tables, one per struct, with field offsets and the
/// struct layout summary.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    name_width: usize,
    type_width: usize,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            name_width: 24,
            type_width: 24,
        }
    }

    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    pub fn with_type_width(mut self, width: usize) -> Self {
        self.type_width = width;
        self
    }

    fn format_struct(&self, id: &str, st: &Structure) -> String {
        let mut lines = Vec::with_capacity(st.fields.len() + st.comment.len() + 4);
        lines.push(format!("{} [{}]", st.name, id));
        lines.extend(st.comment.iter().cloned());
        lines.push(format!(
            "{:>8} {:>8} {:>6}  {:<nw$} {:<tw$}",
            "offset",
            "size",
            "align",
            "name",
            "type",
            nw = self.name_width,
            tw = self.type_width
        ));
        for (field, offset) in st.fields.iter().zip(layout::offsets(&st.fields)) {
            let mut line = format!(
                "{:>8} {:>8} {:>6}  {:<nw$} {:<tw$}",
                offset,
                field.size,
                field.align,
                field.name,
                field.type_name,
                nw = self.name_width,
                tw = self.type_width
            );
            if !field.tag.is_empty() {
                line.push_str(&format!(" `{}`", field.tag));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.push(st.layout().to_string());
        lines.join("\n")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, flat: &Flat) -> Result<Vec<u8>> {
        let mut out = flat
            .iter()
            .map(|(id, st)| self.format_struct(id, st))
            .join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::pad_field;

    fn flat() -> Flat {
        let a = Structure::new("A")
            .with_comment("// A doc")
            .with_field(Field::new("flag", "bool", 1, 1))
            .with_field(pad_field(7))
            .with_field(Field::new("ptr", "*int", 8, 8).with_ptr(8));
        let b = Structure::new("B").with_field(Field::new("n", "int32", 4, 4));
        vec![("2".to_string(), b), ("1".to_string(), a)].into_iter().collect()
    }

    #[test]
    fn test_json_entries_are_ordered_with_layout() {
        let buf = JsonFormatter::compact().format(&flat()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "1");
        assert_eq!(entries[0]["name"], "A");
        assert_eq!(entries[0]["size"], 16);
        assert_eq!(entries[0]["align"], 8);
        assert_eq!(entries[0]["ptr"], 16);
        assert_eq!(entries[0]["fields"][1]["name"], "_");
        assert_eq!(entries[0]["fields"][1]["type"], "[7]byte");
        assert_eq!(entries[1]["name"], "B");
    }

    #[test]
    fn test_json_pretty_and_compact_agree() {
        let pretty = JsonFormatter::new().format(&flat()).unwrap();
        let compact = JsonFormatter::compact().format(&flat()).unwrap();
        assert!(pretty.len() > compact.len());
        let a: serde_json::Value = serde_json::from_slice(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_slice(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_tables() {
        let text = String::from_utf8(TextFormatter::new().format(&flat()).unwrap()).unwrap();
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("A [1]\n// A doc\n"));
        assert!(blocks[0].contains("       8        8      8  ptr"));
        assert!(blocks[0].ends_with("struct size: 16 bytes; struct align: 8 bytes; struct ptr scan size: 16 bytes"));
        assert!(blocks[1].starts_with("B [2]"));
    }

    #[test]
    fn test_text_empty_report() {
        assert!(TextFormatter::new().format(&Flat::new()).unwrap().is_empty());
    }
}
