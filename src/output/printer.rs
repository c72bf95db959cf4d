// Fri Oct 16 2026 - Alex

use crate::error::Result;
use crate::source::{RecordDecl, SourceUnit};
use std::io::Write;

/// Serializes a source unit back to text.
pub trait Printer: Send + Sync {
    fn print(&self, unit: &SourceUnit, out: &mut dyn Write) -> Result<()>;
}

/// Prints struct declarations in gofmt style: one `type X struct` block per
/// declaration, nested declarations following their parent, field names
/// padded into a column.
#[derive(Debug, Clone, Copy)]
pub struct SourcePrinter {
    indent: usize,
    tab_width: usize,
    use_space: bool,
}

impl SourcePrinter {
    pub fn new() -> Self {
        Self {
            indent: 1,
            tab_width: 4,
            use_space: false,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_spaces(mut self, use_space: bool) -> Self {
        self.use_space = use_space;
        self
    }

    fn prefix(&self) -> String {
        if self.use_space {
            " ".repeat(self.indent * self.tab_width)
        } else {
            "\t".repeat(self.indent)
        }
    }

    fn print_decl(&self, decl: &RecordDecl, out: &mut dyn Write) -> Result<()> {
        for line in &decl.comment {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "type {} struct {{", decl.name)?;

        let prefix = self.prefix();
        let width = decl
            .fields
            .iter()
            .filter(|f| !f.embedded)
            .map(|f| f.name.len())
            .max()
            .unwrap_or(0);
        for field in &decl.fields {
            for line in &field.comment {
                writeln!(out, "{}{}", prefix, line)?;
            }
            let mut line = if field.embedded {
                format!("{}{}", prefix, field.type_name)
            } else {
                format!("{}{:<width$} {}", prefix, field.name, field.type_name, width = width)
            };
            if !field.tag.is_empty() {
                line.push_str(&format!(" `{}`", field.tag));
            }
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "}}")?;

        for nested in &decl.nested {
            writeln!(out)?;
            self.print_decl(nested, out)?;
        }
        Ok(())
    }
}

impl Default for SourcePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for SourcePrinter {
    fn print(&self, unit: &SourceUnit, out: &mut dyn Write) -> Result<()> {
        for line in &unit.header {
            writeln!(out, "{}", line)?;
        }
        for (i, decl) in unit.records.iter().enumerate() {
            if i > 0 || !unit.header.is_empty() {
                writeln!(out)?;
            }
            self.print_decl(decl, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Position, RawField};

    fn raw(name: &str, type_name: &str) -> RawField {
        RawField {
            name: name.to_string(),
            type_name: type_name.to_string(),
            ..Default::default()
        }
    }

    fn unit() -> SourceUnit {
        let mut decl = RecordDecl::new("A", Position::new("a.go", 3, 6))
            .with_field(raw("flag", "bool"))
            .with_field(RawField {
                tag: "layout:\"memory_pack\"".to_string(),
                comment: vec!["// hot".to_string()],
                ..raw("n", "int64")
            })
            .with_field(RawField {
                embedded: true,
                ..raw("Base", "Base")
            })
            .with_nested(RecordDecl::new("B", Position::new("a.go", 9, 6)).with_field(raw("x", "int")));
        decl.comment.push("// A doc".to_string());
        SourceUnit {
            path: "a.go".to_string(),
            header: vec!["package a".to_string()],
            records: vec![decl],
        }
    }

    #[test]
    fn test_print_with_tabs() {
        let mut out = Vec::new();
        SourcePrinter::new().print(&unit(), &mut out).unwrap();
        let expected = "package a\n\n// A doc\ntype A struct {\n\tflag bool\n\t// hot\n\tn    int64 `layout:\"memory_pack\"`\n\tBase\n}\n\ntype B struct {\n\tx int\n}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_print_with_spaces() {
        let mut out = Vec::new();
        SourcePrinter::new()
            .with_spaces(true)
            .with_tab_width(2)
            .print(&unit(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  flag bool\n"));
        assert!(!text.contains('\t'));
    }
}
