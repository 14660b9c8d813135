use std::{cell::RefCell, rc::Rc};

use crate::interpreter::runtime::class::{Class, ClassInstance};

/// A comparison operator of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
}

/// An abstract syntax tree node producing a value.
///
/// Expressions cover literals, variable and field reads, the arithmetic and
/// logical operators, comparisons, stringification, method calls and class
/// instantiation. Every variant evaluates to an
/// [`ObjectHolder`](crate::interpreter::runtime::object::ObjectHolder).
#[derive(Debug, Clone)]
pub enum Expr {
    /// An integer literal.
    NumericConst(i32),
    /// A string literal.
    StringConst(String),
    /// A boolean literal, `True` or `False`.
    BoolConst(bool),
    /// The `None` literal; evaluates to the invalid holder.
    NoneConst,
    /// A variable or dotted field path such as `point.origin.x`.
    ///
    /// The first component resolves in the activation closure, each further
    /// component in the field closure of the previously resolved instance.
    Variable {
        /// Path components, outermost first. Never empty.
        dotted_ids: Vec<String>,
    },
    /// The `str(...)` builtin: renders its argument as a string.
    Stringify {
        /// The expression to render.
        arg: Box<Expr>,
    },
    /// Addition of numbers, concatenation of strings, or `__add__` dispatch
    /// on a left-hand class instance.
    Add {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Numeric subtraction.
    Sub {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Numeric multiplication.
    Mult {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Numeric division, truncating toward zero.
    Div {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Logical `or`; short-circuits on a truthy left operand.
    Or {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Logical `and`; both operands are always evaluated.
    And {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Logical negation of the argument's truthiness.
    Not {
        /// The negated expression.
        arg: Box<Expr>,
    },
    /// A comparison, evaluated through the type-directed kernel.
    Comparison {
        /// The operator.
        op:  ComparisonOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// A method call on the value of `object`.
    MethodCall {
        /// The receiver expression.
        object: Box<Expr>,
        /// The method name.
        method: String,
        /// Argument expressions in call order.
        args:   Vec<Expr>,
    },
    /// Instantiation of a class, e.g. `Point(1, 2)`.
    ///
    /// The node owns the instance it produces: it is allocated when the node
    /// is built, and every evaluation returns a shared holder on that same
    /// object after running `__init__` when one matches the argument count.
    NewInstance {
        /// The instance owned by this call site.
        instance: Rc<RefCell<ClassInstance>>,
        /// Constructor argument expressions.
        args:     Vec<Expr>,
    },
}

/// An abstract syntax tree statement node.
///
/// Every variant executes to an
/// [`ObjectHolder`](crate::interpreter::runtime::object::ObjectHolder), with
/// `return` unwinding to the enclosing method-body barrier.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression evaluated for its effect, e.g. a bare method call.
    Expression(Expr),
    /// Binds `var` in the activation closure, overwriting any previous
    /// binding, and yields the assigned value.
    Assignment {
        /// The variable name.
        var:   String,
        /// The assigned expression.
        value: Expr,
    },
    /// Assigns a field on the instance named by `object_path`; the field is
    /// created on first assignment.
    FieldAssignment {
        /// Dotted path to the target instance.
        object_path: Vec<String>,
        /// The field to write.
        field_name:  String,
        /// The assigned expression.
        value:       Expr,
    },
    /// Prints the arguments, space-separated, followed by a newline.
    Print {
        /// Argument expressions; empty for a bare `print`.
        args: Vec<Expr>,
    },
    /// Evaluates the expression and unwinds the enclosing method body with
    /// its value.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// Executes child statements in order; yields the invalid holder.
    Compound(Vec<Stmt>),
    /// The non-local-exit barrier wrapping every method body: a `return`
    /// unwinding inside `body` is caught here and becomes the method result.
    MethodBody {
        /// The wrapped body.
        body: Box<Stmt>,
    },
    /// Conditional execution directed by the condition's truthiness.
    IfElse {
        /// The condition expression.
        condition: Expr,
        /// Statement executed on a truthy condition.
        then_body: Box<Stmt>,
        /// Statement executed otherwise, when present.
        else_body: Option<Box<Stmt>>,
    },
    /// Binds the class object into the closure under its own name.
    ClassDefinition {
        /// The defined class.
        class: Rc<Class>,
    },
}
