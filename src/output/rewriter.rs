// Fri Oct 16 2026 - Alex

use crate::error::{Error, Result};
use crate::source::{RawField, RecordDecl};
use crate::structure::{Field, Structure};

/// Pushes a transformed struct back into its declaration.
pub trait DeclRewriter: Send + Sync {
    fn apply(&self, decl: &mut RecordDecl, st: &Structure) -> Result<()>;
}

/// Overwrites fields, tags and comments of the declaration. Nested
/// declarations and the position are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRewriter;

impl FieldRewriter {
    fn raw(field: &Field) -> RawField {
        RawField {
            name: field.name.clone(),
            type_name: field.type_name.clone(),
            size: field.size,
            align: field.align,
            ptr: field.ptr,
            tag: field.tag.clone(),
            comment: field.comment.clone(),
            exported: field.exported,
            embedded: field.embedded,
        }
    }
}

impl DeclRewriter for FieldRewriter {
    fn apply(&self, decl: &mut RecordDecl, st: &Structure) -> Result<()> {
        if decl.name != st.name {
            return Err(Error::collaborator(
                "rewrite declaration",
                format!("struct {:?} can't replace declaration {:?}", st.name, decl.name),
            ));
        }
        decl.comment = st.comment.clone();
        decl.fields = st.fields.iter().map(Self::raw).collect();
        Ok(())
    }
}
