use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::runtime::{
        class::ClassInstance,
        object::{is_true, Context, ObjectHolder},
    },
};

/// Result type used by the comparison kernel.
pub type CompareResult = Result<bool, RuntimeError>;

/// Compares two values for equality.
///
/// Two invalid holders are equal; an invalid holder never compares against a
/// valid one. Strings, numbers and booleans compare by payload against the
/// same type. Two class instances compare through the left instance's
/// `__eq__` method when it is defined with one parameter. Every other
/// combination is an error.
///
/// # Errors
/// Returns a [`RuntimeError`] when the operands cannot be compared or the
/// `__eq__` dispatch raises.
pub fn equal(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut dyn Context) -> CompareResult {
    if !lhs.is_valid() && !rhs.is_valid() {
        return Ok(true);
    }
    if !lhs.is_valid() || !rhs.is_valid() {
        return Err(RuntimeError::NotComparable { operation: "equality" });
    }

    if let (Some(a), Some(b)) = (lhs.as_str(), rhs.as_str()) {
        return Ok(a == b);
    }
    if let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) {
        return Ok(a == b);
    }
    if let (Some(a), Some(b)) = (lhs.as_bool(), rhs.as_bool()) {
        return Ok(a == b);
    }

    let (Some(left), Some(_)) = (lhs.as_instance(), rhs.as_instance()) else {
        return Err(RuntimeError::NotComparable { operation: "equality" });
    };

    if left.borrow().has_method("__eq__", 1) {
        let left = Rc::clone(left);
        let result = ClassInstance::call(&left, "__eq__", &[rhs.clone()], context)?;
        return Ok(is_true(&result));
    }

    Err(RuntimeError::NotComparable { operation: "equality" })
}

/// Compares two values for strict ordering.
///
/// Strings, numbers and booleans compare by payload against the same type.
/// Two class instances compare through the left instance's `__lt__` method
/// when it is defined with one parameter. Every other combination, and any
/// invalid holder, is an error.
///
/// # Errors
/// Returns a [`RuntimeError`] when the operands cannot be ordered or the
/// `__lt__` dispatch raises.
pub fn less(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut dyn Context) -> CompareResult {
    if !lhs.is_valid() || !rhs.is_valid() {
        return Err(RuntimeError::NotComparable { operation: "less" });
    }

    if let (Some(a), Some(b)) = (lhs.as_str(), rhs.as_str()) {
        return Ok(a < b);
    }
    if let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) {
        return Ok(a < b);
    }
    if let (Some(a), Some(b)) = (lhs.as_bool(), rhs.as_bool()) {
        return Ok(!a && b);
    }

    let (Some(left), Some(_)) = (lhs.as_instance(), rhs.as_instance()) else {
        return Err(RuntimeError::NotComparable { operation: "less" });
    };

    if left.borrow().has_method("__lt__", 1) {
        let left = Rc::clone(left);
        let result = ClassInstance::call(&left, "__lt__", &[rhs.clone()], context)?;
        return Ok(is_true(&result));
    }

    Err(RuntimeError::NotComparable { operation: "less" })
}

/// Negation of [`equal`].
///
/// # Errors
/// Propagates errors from [`equal`].
pub fn not_equal(lhs: &ObjectHolder,
                 rhs: &ObjectHolder,
                 context: &mut dyn Context)
                 -> CompareResult {
    Ok(!equal(lhs, rhs, context)?)
}

/// `lhs > rhs`, derived as neither less nor equal.
///
/// # Errors
/// Propagates errors from [`less`] and [`equal`].
pub fn greater(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut dyn Context) -> CompareResult {
    Ok(!less(lhs, rhs, context)? && !equal(lhs, rhs, context)?)
}

/// `lhs <= rhs`, derived as not greater.
///
/// # Errors
/// Propagates errors from [`greater`].
pub fn less_or_equal(lhs: &ObjectHolder,
                     rhs: &ObjectHolder,
                     context: &mut dyn Context)
                     -> CompareResult {
    Ok(!greater(lhs, rhs, context)?)
}

/// `lhs >= rhs`, derived as not less.
///
/// # Errors
/// Propagates errors from [`less`].
pub fn greater_or_equal(lhs: &ObjectHolder,
                        rhs: &ObjectHolder,
                        context: &mut dyn Context)
                        -> CompareResult {
    Ok(!less(lhs, rhs, context)?)
}
