//! Named, typed parameters read by conditions and written by host code.
//!
//! A parameter's variant is fixed at construction. Every comparison against
//! an operand of an incompatible shape evaluates to `false` instead of
//! failing, so conditions degrade to "not met" rather than erroring mid-tick.

use std::any::{type_name, TypeId};
use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Trait for enumerations usable as parameter values.
///
/// Usually implemented through the [`param_enum!`](crate::param_enum) macro.
pub trait ParamEnum: Copy + 'static {
    /// Numeric ordinal used for ordering and flag-subset matching.
    fn ordinal(&self) -> i64;

    /// Variant name for display.
    fn label(&self) -> &'static str;
}

/// Type-tagged enumeration ordinal.
///
/// Two enum values are only comparable when they originate from the same
/// Rust type.
#[derive(Clone, Copy, Debug)]
pub struct EnumValue {
    type_id: TypeId,
    type_name: &'static str,
    ordinal: i64,
    label: &'static str,
}

impl EnumValue {
    /// Capture an enum variant together with its type tag.
    pub fn of<E: ParamEnum>(value: E) -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            type_name: type_name::<E>(),
            ordinal: value.ordinal(),
            label: value.label(),
        }
    }

    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Fully qualified name of the originating enum type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether both values come from the same enum type.
    pub fn same_type(&self, other: &EnumValue) -> bool {
        self.type_id == other.type_id
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other) && self.ordinal == other.ordinal
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Closed set of value shapes a parameter can hold or be compared against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Bool(bool),
    Enum(EnumValue),
}

impl ParamValue {
    /// Short name of the shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Enum(_) => "enum",
        }
    }

    /// Narrow this value to a boolean.
    ///
    /// Numbers narrow only when they are exactly `0` or `1`.
    fn as_strict_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            Self::Float(n) if n == 1.0 => Some(true),
            Self::Float(n) if n == 0.0 => Some(false),
            _ => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EnumValue> for ParamValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Enum(e) => write!(f, "{e}"),
        }
    }
}

/// A named, typed mutable value.
///
/// # Example
///
/// ```rust
/// use animstate::core::{ParamValue, Parameter};
///
/// let mut speed = Parameter::float("speed", 2.0);
/// assert!(speed.is_less_than(&ParamValue::Float(3.0)));
///
/// // Shape mismatches never fail, they just don't match.
/// assert!(!speed.set_value(ParamValue::Bool(true)));
/// assert!(!speed.is_equal_to(&ParamValue::Bool(true)));
/// assert_eq!(speed.value(), ParamValue::Float(2.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    value: ParamValue,
}

impl Parameter {
    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Float(value),
        }
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Bool(value),
        }
    }

    pub fn enumeration<E: ParamEnum>(name: impl Into<String>, value: E) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Enum(EnumValue::of(value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> ParamValue {
        self.value
    }

    /// Narrow `raw` to this parameter's variant and store it.
    ///
    /// Returns `false` without mutating when the shape does not fit. A bool
    /// parameter accepts numbers, storing `true` only for exactly `1`.
    pub fn set_value(&mut self, raw: ParamValue) -> bool {
        let narrowed = match (self.value, raw) {
            (ParamValue::Float(_), ParamValue::Float(n)) => ParamValue::Float(n),
            (ParamValue::Bool(_), ParamValue::Bool(b)) => ParamValue::Bool(b),
            (ParamValue::Bool(_), ParamValue::Float(n)) => ParamValue::Bool(n == 1.0),
            (ParamValue::Enum(current), ParamValue::Enum(new)) if current.same_type(&new) => {
                ParamValue::Enum(new)
            }
            _ => return false,
        };
        self.value = narrowed;
        true
    }

    /// Check whether `operand` has a shape this parameter can be compared to.
    pub fn accepts(&self, operand: &ParamValue) -> bool {
        match (self.value, operand) {
            (ParamValue::Float(_), ParamValue::Float(_)) => true,
            (ParamValue::Bool(_), other) => other.as_strict_bool().is_some(),
            (ParamValue::Enum(current), ParamValue::Enum(other)) => current.same_type(other),
            _ => false,
        }
    }

    pub fn is_less_than(&self, operand: &ParamValue) -> bool {
        self.compare(operand) == Some(Ordering::Less)
    }

    pub fn is_more_than(&self, operand: &ParamValue) -> bool {
        self.compare(operand) == Some(Ordering::Greater)
    }

    pub fn is_equal_to(&self, operand: &ParamValue) -> bool {
        self.compare(operand) == Some(Ordering::Equal)
    }

    /// Logical match used by the `AND` operator.
    ///
    /// For enums this is the flag-subset test `(value & operand) == value`;
    /// for floats and booleans it is plain equality.
    pub fn logical_match(&self, operand: &ParamValue) -> bool {
        match (self.value, operand) {
            (ParamValue::Enum(current), ParamValue::Enum(other)) => {
                current.same_type(other) && (current.ordinal & other.ordinal) == current.ordinal
            }
            _ => self.is_equal_to(operand),
        }
    }

    /// Order this parameter against `operand`, `None` on shape mismatch.
    ///
    /// Booleans order `false < true`; enums order by ordinal.
    fn compare(&self, operand: &ParamValue) -> Option<Ordering> {
        match (self.value, operand) {
            (ParamValue::Float(a), ParamValue::Float(b)) => a.partial_cmp(b),
            (ParamValue::Bool(a), other) => other.as_strict_bool().map(|b| a.cmp(&b)),
            (ParamValue::Enum(a), ParamValue::Enum(b)) if a.same_type(b) => {
                Some(a.ordinal.cmp(&b.ordinal))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Shared handle to a [`Parameter`].
///
/// Conditions on many edges may reference the same parameter; the machine
/// registers the handle and host writes through it are seen by every
/// condition. Handles compare by identity, not by value.
#[derive(Clone)]
pub struct ParamHandle(Rc<RefCell<Parameter>>);

impl ParamHandle {
    pub fn new(parameter: Parameter) -> Self {
        Self(Rc::new(RefCell::new(parameter)))
    }

    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self::new(Parameter::float(name, value))
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(Parameter::boolean(name, value))
    }

    pub fn enumeration<E: ParamEnum>(name: impl Into<String>, value: E) -> Self {
        Self::new(Parameter::enumeration(name, value))
    }

    /// Borrow the underlying parameter.
    pub fn get(&self) -> Ref<'_, Parameter> {
        self.0.borrow()
    }

    pub fn value(&self) -> ParamValue {
        self.0.borrow().value()
    }

    /// See [`Parameter::set_value`].
    pub fn set_value(&self, raw: impl Into<ParamValue>) -> bool {
        self.0.borrow_mut().set_value(raw.into())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.0.borrow().name() == name
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &ParamHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ParamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}
