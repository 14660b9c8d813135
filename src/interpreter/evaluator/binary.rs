use std::rc::Rc;

use crate::{
    ast::{ComparisonOp, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        runtime::{
            class::ClassInstance,
            compare,
            object::{is_true, Closure, Context, Object, ObjectHolder},
        },
    },
};

/// Evaluates `lhs + rhs`.
///
/// Numbers add (wrapping two's-complement), strings concatenate, and a
/// left-hand class instance defining `__add__` with one parameter dispatches
/// to it.
///
/// # Errors
/// Returns a [`RuntimeError`] for any other operand combination or when the
/// `__add__` dispatch raises.
pub fn eval_add(lhs: &Expr,
                rhs: &Expr,
                closure: &Closure,
                context: &mut dyn Context)
                -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    let right = rhs.eval(closure, context)?;

    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return Ok(ObjectHolder::own(Object::Number(a.wrapping_add(b))));
    }
    if let (Some(a), Some(b)) = (left.as_str(), right.as_str()) {
        return Ok(ObjectHolder::own(Object::String(format!("{a}{b}"))));
    }
    if let Some(instance) = left.as_instance() {
        if instance.borrow().has_method("__add__", 1) {
            let instance = Rc::clone(instance);
            return ClassInstance::call(&instance, "__add__", &[right], context);
        }
        return Err(RuntimeError::MissingAddMethod);
    }

    Err(RuntimeError::InvalidOperands { operation: "add" })
}

/// Evaluates `lhs - rhs` on two numbers.
///
/// # Errors
/// Returns a [`RuntimeError`] unless both operands are numbers.
pub fn eval_sub(lhs: &Expr,
                rhs: &Expr,
                closure: &Closure,
                context: &mut dyn Context)
                -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    let right = rhs.eval(closure, context)?;

    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return Ok(ObjectHolder::own(Object::Number(a.wrapping_sub(b))));
    }

    Err(RuntimeError::InvalidOperands { operation: "subtract" })
}

/// Evaluates `lhs * rhs` on two numbers.
///
/// # Errors
/// Returns a [`RuntimeError`] unless both operands are numbers.
pub fn eval_mult(lhs: &Expr,
                 rhs: &Expr,
                 closure: &Closure,
                 context: &mut dyn Context)
                 -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    let right = rhs.eval(closure, context)?;

    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return Ok(ObjectHolder::own(Object::Number(a.wrapping_mul(b))));
    }

    Err(RuntimeError::InvalidOperands { operation: "multiply" })
}

/// Evaluates `lhs / rhs` on two numbers, truncating toward zero.
///
/// # Errors
/// Returns a [`RuntimeError`] unless both operands are numbers, or when the
/// divisor is zero.
pub fn eval_div(lhs: &Expr,
                rhs: &Expr,
                closure: &Closure,
                context: &mut dyn Context)
                -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    let right = rhs.eval(closure, context)?;

    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        return Ok(ObjectHolder::own(Object::Number(a.wrapping_div(b))));
    }

    Err(RuntimeError::InvalidOperands { operation: "divide" })
}

/// Evaluates `lhs or rhs`.
///
/// Short-circuits: the right operand is only evaluated when the left is
/// falsy. The result is always a boolean.
///
/// # Errors
/// Propagates evaluation errors from the operands.
pub fn eval_or(lhs: &Expr,
               rhs: &Expr,
               closure: &Closure,
               context: &mut dyn Context)
               -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    if is_true(&left) {
        return Ok(ObjectHolder::own(Object::Bool(true)));
    }

    let right = rhs.eval(closure, context)?;
    Ok(ObjectHolder::own(Object::Bool(is_true(&right))))
}

/// Evaluates `lhs and rhs`.
///
/// Both operands are always evaluated; the result is a boolean.
///
/// # Errors
/// Propagates evaluation errors from the operands.
pub fn eval_and(lhs: &Expr,
                rhs: &Expr,
                closure: &Closure,
                context: &mut dyn Context)
                -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    let right = rhs.eval(closure, context)?;
    Ok(ObjectHolder::own(Object::Bool(is_true(&left) && is_true(&right))))
}

/// Evaluates `not arg`.
///
/// # Errors
/// Propagates evaluation errors from the operand.
pub fn eval_not(arg: &Expr,
                closure: &Closure,
                context: &mut dyn Context)
                -> EvalResult<ObjectHolder> {
    let value = arg.eval(closure, context)?;
    Ok(ObjectHolder::own(Object::Bool(!is_true(&value))))
}

/// Evaluates a comparison through the type-directed kernel, wrapping the
/// outcome in a boolean.
///
/// # Errors
/// Returns a [`RuntimeError`] when the operands cannot be compared.
pub fn eval_comparison(op: ComparisonOp,
                       lhs: &Expr,
                       rhs: &Expr,
                       closure: &Closure,
                       context: &mut dyn Context)
                       -> EvalResult<ObjectHolder> {
    let left = lhs.eval(closure, context)?;
    let right = rhs.eval(closure, context)?;

    let result = match op {
        ComparisonOp::Equal => compare::equal(&left, &right, context)?,
        ComparisonOp::NotEqual => compare::not_equal(&left, &right, context)?,
        ComparisonOp::Less => compare::less(&left, &right, context)?,
        ComparisonOp::Greater => compare::greater(&left, &right, context)?,
        ComparisonOp::LessOrEqual => compare::less_or_equal(&left, &right, context)?,
        ComparisonOp::GreaterOrEqual => compare::greater_or_equal(&left, &right, context)?,
    };

    Ok(ObjectHolder::own(Object::Bool(result)))
}
