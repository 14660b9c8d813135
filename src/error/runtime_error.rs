#[derive(Debug)]
/// Represents all errors that can be raised while executing a program.
pub enum RuntimeError {
    /// Tried to read an undefined variable or field.
    UndefinedVariable {
        /// The name that failed to resolve.
        name: String,
    },
    /// A method call did not match any method with the given name and
    /// argument count.
    IncorrectCall {
        /// The name of the requested method.
        method: String,
    },
    /// A field was assigned on a value that is not a class instance.
    NotAnInstance,
    /// Two values could not be compared.
    NotComparable {
        /// The comparison that failed, e.g. `equality`.
        operation: &'static str,
    },
    /// An arithmetic operation received operands of unsupported types.
    InvalidOperands {
        /// The operation that failed, e.g. `add`.
        operation: &'static str,
    },
    /// The left operand of `+` is a class instance without `__add__`.
    MissingAddMethod,
    /// Attempted division by zero.
    DivisionByZero,
    /// Writing to the output stream failed.
    Output(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Unable to evaluate a variable with the given name: '{name}'.")
            },
            Self::IncorrectCall { method } => {
                write!(f, "Incorrect call of method '{method}'.")
            },
            Self::NotAnInstance => {
                write!(f, "Only class instances have fields.")
            },
            Self::NotComparable { operation } => {
                write!(f, "Cannot compare objects for {operation}.")
            },
            Self::InvalidOperands { operation } => {
                write!(f, "Cannot {operation} operands with the given types.")
            },
            Self::MissingAddMethod => {
                write!(f, "The left operand does not have a method __add__.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Output(e) => write!(f, "Failed to write to the output stream: {e}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}
