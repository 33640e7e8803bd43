use std::fmt;

// Exported symbols, one per printable Wabbit type.
pub const PRINT_INT: &str = "__wabbit_print_int"; // fn(x: i32) -> void
pub const PRINT_FLOAT: &str = "__wabbit_print_float"; // fn(x: double) -> void
pub const PRINT_BOOL: &str = "__wabbit_print_bool"; // fn(flag: i32) -> void
pub const PRINT_CHAR: &str = "__wabbit_print_char"; // fn(code_unit: i32) -> void

/// Parameter type of a runtime entry point as seen by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// C `int`.
    I32,
    /// C `double`.
    Double,
}

impl AbiType {
    pub fn llvm_name(self) -> &'static str {
        match self {
            AbiType::I32 => "i32",
            AbiType::Double => "double",
        }
    }
}

/// One of the four print entry points the compiler selects from,
/// based on the static type of the printed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Int,
    Float,
    Bool,
    Char,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 4] = [
        EntryPoint::Int,
        EntryPoint::Float,
        EntryPoint::Bool,
        EntryPoint::Char,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            EntryPoint::Int => PRINT_INT,
            EntryPoint::Float => PRINT_FLOAT,
            EntryPoint::Bool => PRINT_BOOL,
            EntryPoint::Char => PRINT_CHAR,
        }
    }

    /// The runtime's own parameter type, not the type the compiler computes
    /// the value in. Bools and chars are passed as a full C `int`, so the
    /// caller widens them first: `zext i1` for a bool (`true` becomes 1),
    /// and `zext` or `sext` for an `i8` char (only the low byte is printed).
    /// Passing the narrow value unwidened leaves the upper bits undefined.
    pub fn param_type(self) -> AbiType {
        match self {
            EntryPoint::Float => AbiType::Double,
            EntryPoint::Int | EntryPoint::Bool | EntryPoint::Char => AbiType::I32,
        }
    }

    /// Only the character printer leaves the line open.
    pub fn appends_newline(self) -> bool {
        !matches!(self, EntryPoint::Char)
    }

    pub fn from_symbol(symbol: &str) -> Option<EntryPoint> {
        EntryPoint::ALL.into_iter().find(|e| e.symbol() == symbol)
    }

    /// LLVM IR declaration a module needs before calling this entry point.
    pub fn llvm_declaration(self) -> String {
        format!(
            "declare void @{}({})",
            self.symbol(),
            self.param_type().llvm_name()
        )
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryPoint::Int => "print-integer",
            EntryPoint::Float => "print-float",
            EntryPoint::Bool => "print-boolean",
            EntryPoint::Char => "print-character",
        };
        write!(f, "{}", name)
    }
}

/// Declarations for every entry point, one per line.
pub fn llvm_declarations() -> String {
    EntryPoint::ALL
        .iter()
        .map(|e| e.llvm_declaration())
        .collect::<Vec<_>>()
        .join("\n")
}
