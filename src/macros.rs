#![allow(unused_macros)]

/// Helper macro for looking up a typed node by id
///
/// ```rust, ignore
///  let usage = node_as!(model, usage_id, TypeUsage)?;
///  println!("{:?}", usage.edm_type);
/// ```
macro_rules! node_as {
    ($model:expr, $id:expr, $variant:ident) => {
        match $model.node($id)? {
            crate::metadata::model::MetadataNode::$variant(node) => Ok(node),
            other => Err(crate::Error::KindMismatch {
                id: $id,
                expected: crate::metadata::model::MetadataKind::$variant,
                found: other.kind(),
            }),
        }
    };
}

/// Helper macro for mutably looking up a typed node inside the builder arena
///
/// ```rust, ignore
///  if let Some(entity) = node_as_mut!(self.nodes, id, EntityType) {
///      entity.properties.push(property);
///  }
/// ```
macro_rules! node_as_mut {
    ($nodes:expr, $id:expr, $variant:ident) => {
        match ($id.row() as usize)
            .checked_sub(1)
            .and_then(|index| $nodes.get_mut(index))
        {
            Some(crate::metadata::model::MetadataNode::$variant(node)) if node.id == $id => {
                Some(node)
            }
            _ => None,
        }
    };
}
