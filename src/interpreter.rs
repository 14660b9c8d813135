/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, dispatches method calls, and
/// writes interpreted output through the runtime context. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes AST nodes, performing all supported operations.
/// - Threads `return` unwinding to the enclosing method-body barrier.
/// - Reports runtime errors such as missing names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens for
/// language elements such as numbers, identifiers, operators, keywords and
/// string literals. Because the language is indentation-sensitive, the
/// stream also carries explicit `Newline`, `Indent` and `Dedent` markers
/// describing the line and block structure.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, line by line.
/// - Decodes string escapes and strips comments.
/// - Synthesizes balanced indentation markers from leading spaces.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of statements and
/// expressions. Class names are resolved against a parse-time registry so
/// instantiation sites and parent references are checked up front.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, block structure and call targets.
/// - Restricts `return` to method bodies.
pub mod parser;
/// The runtime module defines the object model of the interpreted language.
///
/// This module declares the polymorphic value type and its holders, the
/// class and instance machinery behind dynamic method dispatch, per-frame
/// closures, truthiness and printing, and the type-directed comparison
/// kernel with its dunder-method fallbacks.
///
/// # Responsibilities
/// - Defines `Object`, `ObjectHolder` and the `Closure` frame map.
/// - Implements classes, instances, fields and method dispatch.
/// - Provides equality and ordering over runtime values.
pub mod runtime;
