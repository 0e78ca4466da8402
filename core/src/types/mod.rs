//! The value categories of the language and their structural properties.
//!
//! Types are constructed during checking, are immutable, and compare
//! structurally. `Unknown` stands in for a bound variable whose concrete
//! type has not been pinned down yet; it carries the set of structural
//! properties the surrounding expression requires of it.

mod properties;

pub use properties::{Properties, Property};

use core::fmt;

/// A type in the language.
///
/// The codomain of every function is `Logic`, so `Lambda` records only the
/// domain. `Pair` is a heterogeneous product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Natural numbers.
    Nat,
    /// Observable truth: an expression of this type either terminates with
    /// the sole logic value or never terminates.
    Logic,
    /// Heterogeneous product.
    Pair(Box<Type>, Box<Type>),
    /// Function into `Logic`; the box is the domain.
    Lambda(Box<Type>),
    /// A not-yet-determined type, constrained to possess the given
    /// properties.
    Unknown(Properties),
}

impl Type {
    /// The structural properties this type is known to possess.
    ///
    /// `Nat` carries everything the operator table can ask for except
    /// division and compactness; it is the only overt type, which is what
    /// makes existential search over it computable. `Logic` is compact but
    /// nothing else. An `Unknown` possesses exactly what it promises.
    pub fn properties(&self) -> Properties {
        match self {
            Type::Nat => {
                Properties::DISCRETE
                    | Properties::HAUSDORFF
                    | Properties::OVERT
                    | Properties::STRICT_ORDER
                    | Properties::LOOSE_ORDER
                    | Properties::ARITHMETIC
            }
            Type::Logic => Properties::COMPACT,
            Type::Pair(..) | Type::Lambda(..) => Properties::empty(),
            Type::Unknown(props) => *props,
        }
    }

    /// Whether this type possesses a single structural property.
    pub fn has(&self, property: Property) -> bool {
        self.properties().contains(property.as_flag())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nat => write!(f, "Nat"),
            Type::Logic => write!(f, "Logic"),
            Type::Pair(left, right) => write!(f, "({} * {})", left, right),
            Type::Lambda(domain) => write!(f, "({} -> Logic)", domain),
            Type::Unknown(props) if props.is_empty() => write!(f, "_"),
            Type::Unknown(props) => write!(f, "_{{{}}}", props),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nat_is_the_only_overt_type() {
        assert!(Type::Nat.has(Property::Overt));
        assert!(!Type::Logic.has(Property::Overt));
        assert!(!Type::Pair(Box::new(Type::Nat), Box::new(Type::Logic)).has(Property::Overt));
        assert!(!Type::Lambda(Box::new(Type::Nat)).has(Property::Overt));
    }

    #[test]
    fn unknown_possesses_what_it_promises() {
        let ty = Type::Unknown(Properties::DISCRETE | Properties::ARITHMETIC);
        assert!(ty.has(Property::Discrete));
        assert!(ty.has(Property::Arithmetic));
        assert!(!ty.has(Property::Overt));
    }

    #[test]
    fn display_is_structural() {
        let ty = Type::Pair(
            Box::new(Type::Nat),
            Box::new(Type::Lambda(Box::new(Type::Logic))),
        );
        assert_eq!(ty.to_string(), "(Nat * (Logic -> Logic))");
    }
}
