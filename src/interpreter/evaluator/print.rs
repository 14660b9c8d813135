use std::io::Write;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::EvalResult,
        runtime::object::{Closure, Context, Object, ObjectHolder},
    },
};

/// Executes a `print` statement.
///
/// The arguments are evaluated and printed left to right with a single
/// space between them, followed by a newline. A bare `print` emits just the
/// newline.
///
/// # Errors
/// Returns a [`RuntimeError`](crate::error::RuntimeError) from argument
/// evaluation, `__str__` dispatch or the output stream.
pub fn execute_print(args: &[Expr], closure: &Closure, context: &mut dyn Context) -> EvalResult<()> {
    let mut first = true;
    for arg in args {
        if !first {
            write!(context.output_stream(), " ")?;
        }
        first = false;
        let value = arg.eval(closure, context)?;
        print_object(&value, closure, context)?;
    }

    writeln!(context.output_stream())?;
    Ok(())
}

/// Prints a single value, applying the closure re-resolution rule.
///
/// A string whose text names a binding in the current closure prints the
/// bound value instead of the string itself, recursively. Bindings holding
/// class objects are exempt, so a method result that happens to spell a
/// class name still prints verbatim. Invalid holders print `None`.
fn print_object(value: &ObjectHolder,
                closure: &Closure,
                context: &mut dyn Context)
                -> EvalResult<()> {
    match value.object() {
        Some(Object::String(text)) => {
            if let Some(bound) = closure.get(text) {
                if bound.as_class().is_none() {
                    return print_object(bound, closure, context);
                }
            }
            write!(context.output_stream(), "{text}")?;
        },
        Some(object) => object.print(context)?,
        None => write!(context.output_stream(), "None")?,
    }
    Ok(())
}
