use std::rc::Rc;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, call, print},
        runtime::object::{is_true, Closure, Context, Object, ObjectHolder},
    },
};

/// Result type used by expression evaluation.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The unwinding channel of statement execution.
///
/// A `return` statement does not error: it travels this channel until the
/// enclosing method-body barrier catches it and turns the carried value into
/// the method result. Runtime errors travel the same channel and propagate
/// to the driver.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` is unwinding the current method body.
    Return(ObjectHolder),
    /// A runtime error is propagating.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

/// Result type used by statement execution.
pub type ExecResult = Result<ObjectHolder, Unwind>;

impl Stmt {
    /// Executes the statement in the given activation frame.
    ///
    /// # Errors
    /// Returns an [`Unwind`] carrying either a propagating runtime error or
    /// an in-flight `return` value.
    pub fn execute(&self, closure: &mut Closure, context: &mut dyn Context) -> ExecResult {
        match self {
            Self::Expression(expr) => Ok(expr.eval(closure, context)?),
            Self::Assignment { var, value } => {
                let value = value.eval(closure, context)?;
                closure.insert(var.clone(), value.clone());
                Ok(value)
            },
            Self::FieldAssignment { object_path,
                                    field_name,
                                    value, } => {
                let value = value.eval(closure, context)?;
                let target = resolve_variable(object_path, closure)?;
                let Some(instance) = target.as_instance().map(Rc::clone) else {
                    return Err(RuntimeError::NotAnInstance.into());
                };
                instance.borrow_mut()
                        .fields_mut()
                        .insert(field_name.clone(), value.clone());
                Ok(value)
            },
            Self::Print { args } => {
                print::execute_print(args, closure, context)?;
                Ok(ObjectHolder::none())
            },
            Self::Return { value } => Err(Unwind::Return(value.eval(closure, context)?)),
            Self::Compound(statements) => {
                for statement in statements {
                    statement.execute(closure, context)?;
                }
                Ok(ObjectHolder::none())
            },
            Self::MethodBody { body } => match body.execute(closure, context) {
                Ok(_) => Ok(ObjectHolder::none()),
                Err(Unwind::Return(value)) => Ok(value),
                Err(error) => Err(error),
            },
            Self::IfElse { condition,
                           then_body,
                           else_body, } => {
                let condition = condition.eval(closure, context)?;
                if is_true(&condition) {
                    then_body.execute(closure, context)
                } else if let Some(else_body) = else_body {
                    else_body.execute(closure, context)
                } else {
                    Ok(ObjectHolder::none())
                }
            },
            Self::ClassDefinition { class } => {
                let holder = ObjectHolder::own(Object::Class(Rc::clone(class)));
                closure.insert(class.name().to_string(), holder.clone());
                Ok(holder)
            },
        }
    }

    /// Executes a method body, converting the unwinding channel into a plain
    /// runtime result.
    ///
    /// The statement must be the [`Stmt::MethodBody`] barrier the parser
    /// wraps every method in; a `return` escaping it is an interpreter bug.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] raised anywhere in the body.
    ///
    /// # Panics
    /// Panics if an uncaught `return` reaches this boundary.
    pub fn execute_method_body(&self,
                               closure: &mut Closure,
                               context: &mut dyn Context)
                               -> EvalResult<ObjectHolder> {
        match self.execute(closure, context) {
            Ok(value) => Ok(value),
            Err(Unwind::Error(error)) => Err(error),
            Err(Unwind::Return(_)) => {
                unreachable!("a return must be caught by the enclosing method body")
            },
        }
    }
}

impl Expr {
    /// Evaluates the expression in the given activation frame.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] on missing names, type mismatches, failed
    /// calls or output failures.
    pub fn eval(&self, closure: &Closure, context: &mut dyn Context) -> EvalResult<ObjectHolder> {
        match self {
            Self::NumericConst(value) => Ok(ObjectHolder::own(Object::Number(*value))),
            Self::StringConst(value) => Ok(ObjectHolder::own(Object::String(value.clone()))),
            Self::BoolConst(value) => Ok(ObjectHolder::own(Object::Bool(*value))),
            Self::NoneConst => Ok(ObjectHolder::none()),
            Self::Variable { dotted_ids } => resolve_variable(dotted_ids, closure),
            Self::Stringify { arg } => call::eval_stringify(arg, closure, context),
            Self::Add { lhs, rhs } => binary::eval_add(lhs, rhs, closure, context),
            Self::Sub { lhs, rhs } => binary::eval_sub(lhs, rhs, closure, context),
            Self::Mult { lhs, rhs } => binary::eval_mult(lhs, rhs, closure, context),
            Self::Div { lhs, rhs } => binary::eval_div(lhs, rhs, closure, context),
            Self::Or { lhs, rhs } => binary::eval_or(lhs, rhs, closure, context),
            Self::And { lhs, rhs } => binary::eval_and(lhs, rhs, closure, context),
            Self::Not { arg } => binary::eval_not(arg, closure, context),
            Self::Comparison { op, lhs, rhs } => {
                binary::eval_comparison(*op, lhs, rhs, closure, context)
            },
            Self::MethodCall { object,
                               method,
                               args, } => {
                call::eval_method_call(object, method, args, closure, context)
            },
            Self::NewInstance { instance, args } => {
                call::eval_new_instance(instance, args, closure, context)
            },
        }
    }
}

/// Resolves a dotted variable path against an activation frame.
///
/// The first component is looked up in the closure; each further component
/// in the field closure of the previously resolved class instance. When an
/// intermediate value is not a class instance, resolution stops and that
/// value is returned with the remaining components ignored.
///
/// # Errors
/// Returns [`RuntimeError::UndefinedVariable`] when a component fails to
/// resolve.
pub fn resolve_variable(dotted_ids: &[String], closure: &Closure) -> EvalResult<ObjectHolder> {
    let Some((first, rest)) = dotted_ids.split_first() else {
        return Ok(ObjectHolder::none());
    };

    let mut result = closure.get(first)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UndefinedVariable { name: first.clone() })?;

    for id in rest {
        let Some(instance) = result.as_instance().map(Rc::clone) else {
            break;
        };
        let field = instance.borrow().fields().get(id).cloned();
        result = field.ok_or_else(|| RuntimeError::UndefinedVariable { name: id.clone() })?;
    }

    Ok(result)
}
