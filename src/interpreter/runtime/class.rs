use std::{
    cell::RefCell,
    io::Write,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    ast::Stmt,
    error::RuntimeError,
    interpreter::runtime::object::{Closure, Context, Object, ObjectHolder},
};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// A method of a user-defined class.
#[derive(Debug)]
pub struct Method {
    /// The method name, including dunder names such as `__init__`.
    pub name:          String,
    /// Formal parameter names in declaration order, excluding the implicit
    /// `self` receiver.
    pub formal_params: Vec<String>,
    /// The method body, wrapped in the non-local-exit barrier node.
    pub body:          Rc<Stmt>,
}

/// An immutable class definition: a named, ordered method table with an
/// optional parent class.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: Vec<Method>,
    parent:  Option<Rc<Class>>,
}

impl Class {
    /// Creates a class from its parts.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Self>>) -> Self {
        Self { name,
               methods,
               parent }
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a method by name.
    ///
    /// Methods are searched in declaration order on the class itself, then
    /// once on the parent's own methods. Grandparents are not searched.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        if let Some(found) = self.methods.iter().find(|m| m.name == name) {
            return Some(found);
        }
        if let Some(parent) = &self.parent {
            return parent.methods.iter().find(|m| m.name == name);
        }
        None
    }
}

/// A runtime object whose behavior is defined by a [`Class`] and whose state
/// is a field closure. Fields are created on first assignment.
#[derive(Debug)]
pub struct ClassInstance {
    class:  Rc<Class>,
    fields: Closure,
    id:     u64,
}

impl ClassInstance {
    /// Allocates a fresh, field-less instance of `class`.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Self {
        Self { class,
               fields: Closure::new(),
               id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed) }
    }

    /// Returns the instance's class.
    #[must_use]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Returns the instance's field closure.
    #[must_use]
    pub fn fields(&self) -> &Closure {
        &self.fields
    }

    /// Returns the instance's field closure for mutation.
    pub fn fields_mut(&mut self) -> &mut Closure {
        &mut self.fields
    }

    /// Returns whether the class defines a method with the given name whose
    /// formal arity equals `argument_count`.
    #[must_use]
    pub fn has_method(&self, method: &str, argument_count: usize) -> bool {
        self.class
            .method(method)
            .is_some_and(|m| m.formal_params.len() == argument_count)
    }

    /// Returns a stable, address-like identity string for the instance,
    /// derived from a monotonic instance id rather than a pointer.
    #[must_use]
    pub fn identity(&self) -> String {
        format!("<{} object at {:#x}>", self.class.name(), self.id)
    }

    /// Calls a method on the instance.
    ///
    /// Builds a fresh closure binding the formal parameters to
    /// `actual_args` in order and `self` to a shared holder on the
    /// instance, then executes the method body with the caller's context.
    /// The result is the value carried by a `return` inside the body, or the
    /// invalid holder when the body falls through.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if no method matches the name and
    /// argument count, or if execution of the body raises.
    pub fn call(this: &Rc<RefCell<Self>>,
                method: &str,
                actual_args: &[ObjectHolder],
                context: &mut dyn Context)
                -> Result<ObjectHolder, RuntimeError> {
        let (body, mut method_closure) = {
            let instance = this.borrow();
            let Some(found) = instance.class.method(method) else {
                return Err(RuntimeError::IncorrectCall { method: method.to_string() });
            };
            if found.formal_params.len() != actual_args.len() {
                return Err(RuntimeError::IncorrectCall { method: method.to_string() });
            }

            let mut closure = Closure::new();
            for (param, arg) in found.formal_params.iter().zip(actual_args) {
                closure.insert(param.clone(), arg.clone());
            }
            closure.insert("self".to_string(), ObjectHolder::share(Rc::clone(this)));
            (Rc::clone(&found.body), closure)
        };

        body.execute_method_body(&mut method_closure, context)
    }

    /// Prints the instance to the context's output stream.
    ///
    /// When the class defines `__str__` with no arguments, the method is
    /// called and a string, number or boolean result is printed; any other
    /// result, or the absence of `__str__`, prints the identity string.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if the `__str__` call raises or writing
    /// fails.
    pub fn print(this: &Rc<RefCell<Self>>, context: &mut dyn Context) -> Result<(), RuntimeError> {
        if this.borrow().has_method("__str__", 0) {
            let result = Self::call(this, "__str__", &[], context)?;
            match result.object() {
                Some(Object::String(value)) => {
                    write!(context.output_stream(), "{value}")?;
                    return Ok(());
                },
                Some(Object::Number(value)) => {
                    write!(context.output_stream(), "{value}")?;
                    return Ok(());
                },
                Some(Object::Bool(value)) => {
                    write!(context.output_stream(), "{}", if *value { "True" } else { "False" })?;
                    return Ok(());
                },
                _ => {},
            }
        }

        let identity = this.borrow().identity();
        write!(context.output_stream(), "{identity}")?;
        Ok(())
    }
}
