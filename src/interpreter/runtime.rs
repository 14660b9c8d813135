/// Class and instance machinery.
///
/// Defines `Class` (an immutable method table with optional single parent),
/// `Method`, and `ClassInstance` (per-object field storage plus dynamic
/// method dispatch, including the dunder methods invoked by operators).
pub mod class;
/// Comparison kernel.
///
/// Type-directed equality and ordering over runtime values, with fallback
/// dispatch to user-defined `__eq__`/`__lt__` methods on class instances,
/// and the comparators derived from them by negation.
pub mod compare;
/// Runtime values and their holders.
///
/// Declares the polymorphic `Object` value, the `ObjectHolder` handle the
/// whole interpreter passes around, per-frame `Closure` maps, truthiness,
/// value printing, and the `Context` abstraction that supplies the output
/// stream.
pub mod object;
