// Fri Oct 16 2026 - Alex

use crate::engine::Context;
use crate::error::Result;
use crate::source::{RawField, RecordDecl};
use crate::structure::{Field, Structure};

/// Bridges parser declarations into the struct model, field for field
/// and in declared order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumerate;

impl Enumerate {
    pub fn extract(&self, ctx: &Context, decl: &RecordDecl) -> Result<Structure> {
        ctx.check()?;
        Ok(Structure {
            name: decl.name.clone(),
            comment: decl.comment.clone(),
            fields: decl.fields.iter().map(Self::field).collect(),
        })
    }

    fn field(raw: &RawField) -> Field {
        Field {
            name: raw.name.clone(),
            type_name: raw.type_name.clone(),
            size: raw.size,
            align: raw.align,
            ptr: raw.ptr,
            tag: raw.tag.clone(),
            comment: raw.comment.clone(),
            exported: raw.exported,
            embedded: raw.embedded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::source::Position;

    fn raw(name: &str, type_name: &str, size: i64) -> RawField {
        RawField {
            name: name.to_string(),
            type_name: type_name.to_string(),
            size,
            align: size,
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_keeps_order_and_metadata() {
        let mut decl = RecordDecl::new("Test", Position::new("a.go", 1, 6))
            .with_field(raw("z", "int64", 8))
            .with_field(RawField {
                tag: "layout:\"memory_pack\"".to_string(),
                exported: true,
                embedded: true,
                ptr: 8,
                ..raw("Embedded", "*Other", 8)
            })
            .with_field(raw("a", "bool", 1));
        decl.comment.push("// Test doc".to_string());

        let st = Enumerate.extract(&Context::background(), &decl).unwrap();
        assert_eq!(st.name, "Test");
        assert_eq!(st.comment, vec!["// Test doc".to_string()]);
        let names: Vec<_> = st.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["z", "Embedded", "a"]);
        assert_eq!(st.fields[1].tag, "layout:\"memory_pack\"");
        assert!(st.fields[1].exported && st.fields[1].embedded);
        assert_eq!(st.fields[1].ptr, 8);
    }

    #[test]
    fn test_extract_on_canceled_context() {
        let ctx = Context::background();
        ctx.cancel();
        let decl = RecordDecl::new("Test", Position::new("a.go", 1, 6));
        assert!(matches!(Enumerate.extract(&ctx, &decl), Err(Error::Cancelled)));
    }
}
