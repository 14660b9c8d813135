use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::EvalResult,
        runtime::{
            class::ClassInstance,
            object::{Closure, Context, DummyContext, Object, ObjectHolder},
        },
    },
};

/// Evaluates a method call expression.
///
/// The receiver and the arguments are evaluated in the caller's frame; their
/// errors propagate. The call itself is the single intentional silencer of
/// the interpreter: a non-instance receiver, an unknown method, an arity
/// mismatch or any error raised inside the callee all yield the invalid
/// holder.
///
/// # Errors
/// Returns a [`RuntimeError`](crate::error::RuntimeError) only from
/// evaluating the receiver or argument expressions.
pub fn eval_method_call(object: &Expr,
                        method: &str,
                        args: &[Expr],
                        closure: &Closure,
                        context: &mut dyn Context)
                        -> EvalResult<ObjectHolder> {
    let receiver = object.eval(closure, context)?;
    let Some(instance) = receiver.as_instance().map(Rc::clone) else {
        return Ok(ObjectHolder::none());
    };

    let mut arg_holders = Vec::with_capacity(args.len());
    for arg in args {
        arg_holders.push(arg.eval(closure, context)?);
    }

    Ok(ClassInstance::call(&instance, method, &arg_holders, context)
        .unwrap_or_else(|_| ObjectHolder::none()))
}

/// Evaluates a class instantiation.
///
/// The call site owns its instance: every evaluation returns a shared
/// holder on the same object. When the class defines `__init__` with a
/// formal arity matching the argument count, the arguments are evaluated
/// and the initializer runs; its errors propagate.
///
/// # Errors
/// Returns a [`RuntimeError`](crate::error::RuntimeError) from argument
/// evaluation or from inside `__init__`.
pub fn eval_new_instance(instance: &Rc<RefCell<ClassInstance>>,
                         args: &[Expr],
                         closure: &Closure,
                         context: &mut dyn Context)
                         -> EvalResult<ObjectHolder> {
    if instance.borrow().has_method("__init__", args.len()) {
        let mut arg_holders = Vec::with_capacity(args.len());
        for arg in args {
            arg_holders.push(arg.eval(closure, context)?);
        }
        ClassInstance::call(instance, "__init__", &arg_holders, context)?;
    }

    Ok(ObjectHolder::share(Rc::clone(instance)))
}

/// Evaluates the `str(...)` builtin.
///
/// # Errors
/// Returns a [`RuntimeError`](crate::error::RuntimeError) from evaluating
/// the argument; stringification itself never fails.
pub fn eval_stringify(arg: &Expr,
                      closure: &Closure,
                      context: &mut dyn Context)
                      -> EvalResult<ObjectHolder> {
    let value = arg.eval(closure, context)?;
    Ok(stringify(&value))
}

/// Renders a value as an owned string holder.
///
/// Strings are copied, numbers print in decimal, booleans as
/// `True`/`False`, the invalid holder as `None`. A class instance is asked
/// for `__str__()` under a discarding context, recursing while the result
/// is itself an instance; any failure along the way falls back to the
/// instance's identity string.
fn stringify(value: &ObjectHolder) -> ObjectHolder {
    let rendered = match value.object() {
        Some(Object::String(s)) => s.clone(),
        Some(Object::Number(n)) => n.to_string(),
        Some(Object::Bool(b)) => String::from(if *b { "True" } else { "False" }),
        Some(Object::Instance(instance)) => {
            let mut dummy = DummyContext::new();
            return match ClassInstance::call(instance, "__str__", &[], &mut dummy) {
                Ok(result) => stringify(&result),
                Err(_) => ObjectHolder::own(Object::String(instance.borrow().identity())),
            };
        },
        _ => String::from("None"),
    };

    ObjectHolder::own(Object::String(rendered))
}
