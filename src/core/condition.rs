//! Conditions comparing a parameter to an operand through combinable operators.

use super::param::{ParamHandle, ParamValue};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Operator flags of a [`Condition`].
    ///
    /// Base flags are OR-accumulated, then `NOT` inverts the aggregate, so
    /// `LEQ` holds when either "less" or "equal" holds.
    ///
    /// # Example
    ///
    /// ```
    /// use animstate::core::ConditionOp;
    ///
    /// assert_eq!(ConditionOp::LEQ, ConditionOp::LSS | ConditionOp::EQU);
    /// assert!(ConditionOp::NEQ.contains(ConditionOp::NOT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConditionOp: u8 {
        /// Logical match: equality for floats and booleans, flag subset for enums.
        const AND = 1 << 0;
        /// Less than.
        const LSS = 1 << 1;
        /// Greater than.
        const GTR = 1 << 2;
        /// Inverts the accumulated result.
        const NOT = 1 << 3;
        /// Equals.
        const EQU = 1 << 4;

        /// Less than or equal.
        const LEQ = Self::LSS.bits() | Self::EQU.bits();
        /// Greater than or equal.
        const GEQ = Self::GTR.bits() | Self::EQU.bits();
        /// Not equal.
        const NEQ = Self::NOT.bits() | Self::EQU.bits();
    }
}

impl ConditionOp {
    /// Operator glyphs in display order.
    fn symbol(&self) -> String {
        let mut op = String::new();
        if self.contains(Self::NOT) {
            op.push('!');
        }
        if self.contains(Self::AND) {
            op.push('&');
        }
        if self.contains(Self::LSS) {
            op.push('<');
        }
        if self.contains(Self::GTR) {
            op.push('>');
        }
        if self.contains(Self::EQU) {
            op.push('=');
        }
        if op == "=" {
            op.push('=');
        }
        op
    }
}

/// A (parameter, operand, operator) triple.
///
/// The parameter is shared: writes made through any handle to it are
/// observed the next time the condition is evaluated.
#[derive(Clone, Debug)]
pub struct Condition {
    parameter: ParamHandle,
    operand: ParamValue,
    op: ConditionOp,
}

impl Condition {
    pub fn new(parameter: &ParamHandle, operand: impl Into<ParamValue>, op: ConditionOp) -> Self {
        Self {
            parameter: parameter.clone(),
            operand: operand.into(),
            op,
        }
    }

    pub fn parameter(&self) -> &ParamHandle {
        &self.parameter
    }

    pub fn operand(&self) -> ParamValue {
        self.operand
    }

    pub fn op(&self) -> ConditionOp {
        self.op
    }

    /// Evaluate the condition.
    ///
    /// Every base flag present contributes an OR-term; `AND` mixed with other
    /// flags is just one more term. `NOT` is applied last.
    pub fn is_satisfied(&self) -> bool {
        let parameter = self.parameter.get();
        let operand = &self.operand;

        let mut met = false;
        if self.op.contains(ConditionOp::AND) {
            met = met || parameter.logical_match(operand);
        }
        if self.op.contains(ConditionOp::LSS) {
            met = met || parameter.is_less_than(operand);
        }
        if self.op.contains(ConditionOp::GTR) {
            met = met || parameter.is_more_than(operand);
        }
        if self.op.contains(ConditionOp::EQU) {
            met = met || parameter.is_equal_to(operand);
        }
        if self.op.contains(ConditionOp::NOT) {
            met = !met;
        }
        met
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {}) = {}",
            self.parameter.value(),
            self.op.symbol(),
            self.operand,
            self.is_satisfied()
        )
    }
}

/// Check that every condition holds; an empty list holds vacuously.
pub fn all_satisfied(conditions: &[Condition]) -> bool {
    conditions.iter().all(Condition::is_satisfied)
}
