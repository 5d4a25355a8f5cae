use crate::ast::Type;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

/// Renders a type reference the way it is written in SDL (e.g. `[ID!]!`).
pub fn print_type(type_: &Type) -> String {
    match type_ {
        Type::NamedType(name) => name.to_owned(),
        Type::ListType(inner) => format!("[{}]", print_type(inner)),
        Type::NonNullType(inner) => format!("{}!", print_type(inner)),
    }
}

fn named_type(type_: &Type) -> &str {
    match type_ {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => named_type(inner),
    }
}

/// Two types have the same shape when they wrap the same number of lists at
/// the same positions. Non-null wrappers only need to match when
/// `strict_nullability` is set.
fn same_shape(existing: &Type, incoming: &Type, strict_nullability: bool) -> bool {
    match (existing, incoming) {
        (Type::NamedType(_), Type::NamedType(_)) => true,
        (Type::NonNullType(existing), Type::NonNullType(incoming))
        | (Type::ListType(existing), Type::ListType(incoming)) => {
            same_shape(existing, incoming, strict_nullability)
        },
        (Type::NonNullType(existing), incoming) => {
            !strict_nullability && same_shape(existing, incoming, strict_nullability)
        },
        (existing, Type::NonNullType(incoming)) => {
            !strict_nullability && same_shape(existing, incoming, strict_nullability)
        },
        _ => false,
    }
}

/// Verifies that two declarations of the field `type_name.field_name` can be
/// merged: both must name the same underlying type with the same list
/// structure. Nullability may differ unless `throw_on_conflict` is set.
pub(crate) fn check_field_types(
    type_name: &str,
    field_name: &str,
    existing: &Type,
    incoming: &Type,
    throw_on_conflict: bool,
) -> Result<()> {
    if existing == incoming {
        return Ok(());
    }

    if named_type(existing) != named_type(incoming) {
        return Err(MergeError::FieldTypeConflict {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            existing_type: named_type(existing).to_string(),
            incoming_type: named_type(incoming).to_string(),
        });
    }

    if !same_shape(existing, incoming, throw_on_conflict) {
        return Err(MergeError::FieldTypeChanged {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            existing_type: print_type(existing),
            incoming_type: print_type(incoming),
        });
    }

    Ok(())
}
