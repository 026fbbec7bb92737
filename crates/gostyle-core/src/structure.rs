//! Structural view of a Go file.
//!
//! The structural view is the declaration-level representation of a file that
//! parsed successfully. It keeps only what rules inspect: top-level functions,
//! types and package-level variables, plus per-function parameters, doc text
//! and a few facts about the body.
//!
//! [`StructuralParser`] is the extension point that produces it. The tree-sitter
//! implementation lives in `gostyle-go`; rules only ever see these types, so they
//! can be tested against hand-built views.

/// Returns true if a Go identifier is exported (first character uppercase).
#[must_use]
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// A type expression, reduced to the shapes rules distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A bare type name such as `int` or `Config`.
    Named(String),
    /// A package-qualified name such as `testing.T`.
    Qualified {
        /// Package identifier.
        package: String,
        /// Type name within the package.
        name: String,
    },
    /// `*X`.
    Pointer(Box<TypeExpr>),
    /// An anonymous `struct { ... }` type.
    Struct,
    /// `[]X`.
    Slice(Box<TypeExpr>),
    /// `[N]X` or `[...]X`.
    Array(Box<TypeExpr>),
    /// Anything else (maps, channels, funcs, generics), kept as source text.
    Other(String),
}

impl TypeExpr {
    /// Convenience constructor for a qualified name.
    #[must_use]
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Convenience constructor for a pointer.
    #[must_use]
    pub fn pointer(inner: Self) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Returns true for `*package.name`.
    #[must_use]
    pub fn is_pointer_to(&self, package: &str, name: &str) -> bool {
        match self {
            Self::Pointer(inner) => matches!(
                inner.as_ref(),
                Self::Qualified { package: p, name: n } if p == package && n == name
            ),
            _ => false,
        }
    }

    /// Returns true for `*pkg.name` where the package is any identifier.
    #[must_use]
    pub fn is_pointer_to_selector(&self, name: &str) -> bool {
        match self {
            Self::Pointer(inner) => {
                matches!(inner.as_ref(), Self::Qualified { name: n, .. } if n == name)
            }
            _ => false,
        }
    }

    /// Returns true for an anonymous struct type or a pointer to one.
    #[must_use]
    pub fn is_struct_like(&self) -> bool {
        match self {
            Self::Struct => true,
            Self::Pointer(inner) => matches!(inner.as_ref(), Self::Struct),
            _ => false,
        }
    }

    /// Returns true for slice and array types.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Slice(_) | Self::Array(_))
    }

    /// The simple type name, for bare named types only.
    #[must_use]
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Struct => write!(f, "struct{{...}}"),
            Self::Slice(inner) => write!(f, "[]{inner}"),
            Self::Array(inner) => write!(f, "[...]{inner}"),
            Self::Other(text) => write!(f, "{text}"),
        }
    }
}

/// One parameter group of a function signature.
///
/// `a, b int` is a single group; `name` holds its first identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    /// First declared name, absent for unnamed parameters.
    pub name: Option<String>,
    /// Declared type.
    pub ty: TypeExpr,
}

/// Package-qualified name suffixes of parameters that carry framework context.
const FRAMEWORK_CONTEXT_TYPES: &[&str] = &["T", "DUTDevice"];

impl ParamDecl {
    /// Creates a named parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    /// Creates an unnamed parameter.
    #[must_use]
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self { name: None, ty }
    }

    /// `*x.T` or `*x.DUTDevice`: exempt from the struct-parameter rule.
    #[must_use]
    pub fn is_framework_context(&self) -> bool {
        FRAMEWORK_CONTEXT_TYPES
            .iter()
            .any(|name| self.ty.is_pointer_to_selector(name))
    }

    /// `*testing.T`.
    #[must_use]
    pub fn is_testing_t(&self) -> bool {
        self.ty.is_pointer_to("testing", "T")
    }

    /// `*testing.M`.
    #[must_use]
    pub fn is_testing_m(&self) -> bool {
        self.ty.is_pointer_to("testing", "M")
    }
}

/// A call of the form `qualifier.Selector(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedCall {
    /// Identifier on the left of the dot.
    pub qualifier: String,
    /// Selected member name.
    pub selector: String,
}

/// Facts about a function body.
///
/// The body itself is not exposed; rules query it through these methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionBody {
    calls: Vec<QualifiedCall>,
    has_table_value: bool,
    has_range_loop: bool,
}

impl FunctionBody {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `qualifier.selector(...)` call.
    #[must_use]
    pub fn with_call(mut self, qualifier: impl Into<String>, selector: impl Into<String>) -> Self {
        self.record_call(qualifier, selector);
        self
    }

    /// Records that the body builds a slice/array/composite value.
    #[must_use]
    pub fn with_table_value(mut self) -> Self {
        self.has_table_value = true;
        self
    }

    /// Records that the body contains a `for ... range` loop.
    #[must_use]
    pub fn with_range_loop(mut self) -> Self {
        self.has_range_loop = true;
        self
    }

    /// Records a call in place.
    pub fn record_call(&mut self, qualifier: impl Into<String>, selector: impl Into<String>) {
        self.calls.push(QualifiedCall {
            qualifier: qualifier.into(),
            selector: selector.into(),
        });
    }

    /// Marks a table value in place.
    pub fn mark_table_value(&mut self) {
        self.has_table_value = true;
    }

    /// Marks a range loop in place.
    pub fn mark_range_loop(&mut self) {
        self.has_range_loop = true;
    }

    /// Returns true if the body calls `qualifier.selector(...)` anywhere.
    #[must_use]
    pub fn calls(&self, qualifier: &str, selector: &str) -> bool {
        self.calls
            .iter()
            .any(|c| c.qualifier == qualifier && c.selector == selector)
    }

    /// Returns true if the body builds a table-like collection value.
    #[must_use]
    pub fn has_table_value(&self) -> bool {
        self.has_table_value
    }

    /// Returns true if the body contains a range loop.
    #[must_use]
    pub fn has_range_loop(&self) -> bool {
        self.has_range_loop
    }

    /// A table value plus iteration over something.
    #[must_use]
    pub fn is_table_driven(&self) -> bool {
        self.has_table_value && self.has_range_loop
    }
}

/// A top-level function or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Function name.
    pub name: String,
    /// Line of the `func` keyword (1-indexed).
    pub line: usize,
    /// Whether this is a method.
    pub has_receiver: bool,
    /// Parameter groups, in order.
    pub params: Vec<ParamDecl>,
    /// Doc comment text, absent when there is no non-empty doc comment.
    pub doc: Option<String>,
    /// Body facts, absent for bodiless declarations.
    pub body: Option<FunctionBody>,
}

impl FunctionDecl {
    /// Creates a free function with no parameters, doc or body.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            has_receiver: false,
            params: Vec::new(),
            doc: None,
            body: None,
        }
    }

    /// Marks the function as a method.
    #[must_use]
    pub fn with_receiver(mut self) -> Self {
        self.has_receiver = true;
        self
    }

    /// Appends a parameter group.
    #[must_use]
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Sets the doc text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Sets the body facts.
    #[must_use]
    pub fn with_body(mut self, body: FunctionBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether the name is exported.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }

    /// Whether the name carries the `Test` prefix.
    #[must_use]
    pub fn has_test_prefix(&self) -> bool {
        self.name.starts_with("Test")
    }

    /// A `Test`-prefixed function other than `TestMain`.
    #[must_use]
    pub fn is_test_entry(&self) -> bool {
        self.has_test_prefix() && self.name != "TestMain"
    }

    /// `TestMain(m *testing.M)`.
    #[must_use]
    pub fn is_test_main_hook(&self) -> bool {
        self.name == "TestMain" && self.params.len() == 1 && self.params[0].is_testing_m()
    }

    /// A free function without the `Test` prefix: the shape of a test helper.
    #[must_use]
    pub fn is_plain_free_function(&self) -> bool {
        !self.has_receiver && !self.has_test_prefix()
    }
}

/// A top-level type declaration, including aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Type name.
    pub name: String,
    /// Line of the name (1-indexed).
    pub line: usize,
}

impl TypeDecl {
    /// Creates a type declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }

    /// Whether the name is exported.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Whether a package-level value was declared with `var` or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// `var`.
    Var,
    /// `const`.
    Const,
}

/// A package-level variable or constant. One per declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    /// Declared name.
    pub name: String,
    /// Line of the name (1-indexed).
    pub line: usize,
    /// Explicit type, absent when inferred.
    pub ty: Option<TypeExpr>,
    /// `var` or `const`.
    pub kind: VarKind,
}

impl VariableDecl {
    /// Creates a `var` declaration.
    #[must_use]
    pub fn var(name: impl Into<String>, line: usize, ty: Option<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            line,
            ty,
            kind: VarKind::Var,
        }
    }

    /// Creates a `const` declaration.
    #[must_use]
    pub fn constant(name: impl Into<String>, line: usize, ty: Option<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            line,
            ty,
            kind: VarKind::Const,
        }
    }

    /// Whether the name is exported.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// A top-level named construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Function or method.
    Function(FunctionDecl),
    /// Type.
    Type(TypeDecl),
    /// Package-level variable or constant.
    Variable(VariableDecl),
}

impl Declaration {
    /// Declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(f) => &f.name,
            Self::Type(t) => &t.name,
            Self::Variable(v) => &v.name,
        }
    }

    /// Source line.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Function(f) => f.line,
            Self::Type(t) => t.line,
            Self::Variable(v) => v.line,
        }
    }
}

/// Declarations of one successfully parsed file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStructure {
    /// Top-level declarations.
    pub declarations: Vec<Declaration>,
}

impl FileStructure {
    /// Creates a structure from declarations.
    #[must_use]
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Function declarations.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Function(f) => Some(f),
            _ => None,
        })
    }

    /// Type declarations.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Type(t) => Some(t),
            _ => None,
        })
    }

    /// Variable and constant declarations.
    pub fn variables(&self) -> impl Iterator<Item = &VariableDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Variable(v) => Some(v),
            _ => None,
        })
    }
}

/// The file could not be turned into a structural view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed parsing: {reason}")]
pub struct ParseFailure {
    /// What went wrong, for logging.
    pub reason: String,
    /// First line with a syntax error, if known.
    pub line: Option<usize>,
}

impl ParseFailure {
    /// Creates a parse failure.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            line: None,
        }
    }

    /// Sets the first offending line.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Builds the structural view of a file.
///
/// Implementations must be pure and must report malformed input as a
/// [`ParseFailure`] rather than panicking.
pub trait StructuralParser: Send + Sync {
    /// Language identifier (e.g., `"go"`).
    fn language_id(&self) -> &'static str;

    /// Parses `source` into declarations.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailure`] when the source is not syntactically valid.
    fn parse(&self, source: &str) -> Result<FileStructure, ParseFailure>;
}
