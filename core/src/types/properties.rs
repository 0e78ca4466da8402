use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Structural properties a type may possess.
    ///
    /// The operator table in the analyzer is expressed in terms of these:
    /// an operator is legal on an operand exactly when the operand's type
    /// possesses the property the operator needs. The flags are fixed per
    /// concrete type; `Unknown` types carry their own promised set.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Properties: u16 {
        /// Equality of two elements is observable (`==`).
        const DISCRETE = 1;
        /// Inequality of two elements is observable (`!=`).
        const HAUSDORFF = 1 << 1;
        /// Existential quantification is computable as a search that
        /// terminates on true.
        const OVERT = 1 << 2;
        /// Universal quantification is computable.
        const COMPACT = 1 << 3;
        /// `<` and `>` are observable.
        const STRICT_ORDER = 1 << 4;
        /// `<=` and `>=` are observable.
        const LOOSE_ORDER = 1 << 5;
        /// Addition and multiplication are available.
        const ARITHMETIC = 1 << 6;
        /// Division is available.
        const DIVISION = 1 << 7;
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{}", name.to_lowercase())?;
            first = false;
        }
        Ok(())
    }
}

/// A single structural property, for operator requirements and error
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Discrete,
    Hausdorff,
    Overt,
    Compact,
    StrictOrder,
    LooseOrder,
    Arithmetic,
    Division,
}

impl Property {
    /// The corresponding single-bit flag set.
    pub fn as_flag(self) -> Properties {
        match self {
            Property::Discrete => Properties::DISCRETE,
            Property::Hausdorff => Properties::HAUSDORFF,
            Property::Overt => Properties::OVERT,
            Property::Compact => Properties::COMPACT,
            Property::StrictOrder => Properties::STRICT_ORDER,
            Property::LooseOrder => Properties::LOOSE_ORDER,
            Property::Arithmetic => Properties::ARITHMETIC,
            Property::Division => Properties::DIVISION,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Discrete => "discrete",
            Property::Hausdorff => "hausdorff",
            Property::Overt => "overt",
            Property::Compact => "compact",
            Property::StrictOrder => "strictly ordered",
            Property::LooseOrder => "loosely ordered",
            Property::Arithmetic => "arithmetic",
            Property::Division => "divisible",
        };
        write!(f, "{}", name)
    }
}
