/// Arithmetic, logic and comparison evaluation.
///
/// Implements the binary operators (`+ - * /`, `and`/`or`, the comparison
/// set) and logical `not` over runtime values, including the `__add__`
/// fallback on class instances.
pub mod binary;
/// Method calls, instantiation and stringification.
///
/// Evaluates method-call expressions (silencing callee failures), class
/// instantiation through a call site's owned instance, and the `str()`
/// builtin with its `__str__` dispatch.
pub mod call;
/// Core evaluation logic.
///
/// Defines the unwinding channel that carries `return` values and runtime
/// errors, the statement and expression entry points, and dotted-path
/// variable resolution.
pub mod core;
/// Evaluation of the `print` statement.
///
/// Renders argument values onto the context's output stream, including the
/// closure re-resolution applied to string arguments.
pub mod print;
