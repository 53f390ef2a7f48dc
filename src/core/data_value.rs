use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use chrono::{NaiveDateTime, SecondsFormat};
use serde_json::Value;

use crate::core::error::{Error, Result};

/// A single cell value.
///
/// Columns are not statically typed: any cell may hold any variant, and the
/// column's [`DType`](crate::core::dtype::DType) is inferred from the values.
///
/// `PartialEq`/`Eq`/`Hash` follow SameValueZero semantics so scalars can be
/// used as labels and map keys: `Int(1) == Float(1.0)` and `NaN == NaN`.
/// Use [`Scalar::strict_eq`] for element comparisons where `NaN != NaN`.
#[derive(Debug, Clone)]
pub enum Scalar {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    DateTime(NaiveDateTime),
    /// Nested arrays or objects
    Object(Value),
}

/// Elementwise arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    pub fn name(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Sub => "sub",
            ArithmeticOp::Mul => "mul",
            ArithmeticOp::Div => "div",
        }
    }
}

enum Num {
    I(i64),
    F(f64),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Scalar::Float(f) if f.is_nan())
    }

    /// Null or NaN
    pub fn is_missing(&self) -> bool {
        self.is_null() || self.is_nan()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_))
    }

    /// Numeric view of the value; booleans count as 0/1
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "bool",
            Scalar::Str(_) => "str",
            Scalar::DateTime(_) => "datetime",
            Scalar::Object(_) => "object",
        }
    }

    fn numeric(&self) -> Option<Num> {
        match self {
            Scalar::Int(i) => Some(Num::I(*i)),
            Scalar::Float(f) => Some(Num::F(*f)),
            Scalar::Bool(b) => Some(Num::I(*b as i64)),
            _ => None,
        }
    }

    /// Strict equality: numbers compare by value, `NaN` never equals itself,
    /// and values of different kinds are never equal.
    pub fn strict_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => {
                cmp_int_float(*a, *b) == Some(Ordering::Equal)
            }
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            (Scalar::Object(a), Scalar::Object(b)) => a == b,
            _ => false,
        }
    }

    /// Relational comparison used by `lt`/`gt` and friends.
    ///
    /// Numbers and booleans compare numerically, strings lexicographically,
    /// datetimes chronologically. Everything else (including null and NaN)
    /// is incomparable.
    pub fn compare(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(b)),
            (Scalar::Str(a), Scalar::Str(b)) => Some(a.cmp(b)),
            (Scalar::DateTime(a), Scalar::DateTime(b)) => Some(a.cmp(b)),
            (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(*a, *b),
            (Scalar::Float(a), Scalar::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            _ => match (self.numeric(), other.numeric()) {
                (Some(_), Some(_)) => self.as_f64()?.partial_cmp(&other.as_f64()?),
                _ => None,
            },
        }
    }

    /// Apply an arithmetic operator. Null on either side yields Null.
    pub fn binary_op(&self, other: &Scalar, op: ArithmeticOp) -> Result<Scalar> {
        if self.is_null() || other.is_null() {
            return Ok(Scalar::Null);
        }

        if let (ArithmeticOp::Add, Scalar::Str(a), Scalar::Str(b)) = (op, self, other) {
            return Ok(Scalar::Str(format!("{}{}", a, b)));
        }

        let (a, b) = match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(Error::Type(format!(
                    "{} does not support operands {} and {}",
                    op.name(),
                    self.type_name(),
                    other.type_name()
                )))
            }
        };

        let result = match (a, b) {
            (Num::I(a), Num::I(b)) => {
                let checked = match op {
                    ArithmeticOp::Add => a.checked_add(b),
                    ArithmeticOp::Sub => a.checked_sub(b),
                    ArithmeticOp::Mul => a.checked_mul(b),
                    ArithmeticOp::Div => None,
                };
                match checked {
                    Some(v) => Scalar::Int(v),
                    None => Scalar::Float(apply_f64(a as f64, b as f64, op)),
                }
            }
            (a, b) => Scalar::Float(apply_f64(num_to_f64(a), num_to_f64(b), op)),
        };

        Ok(result)
    }

    /// JSON representation. Non-finite floats become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Int(i) => Value::from(*i),
            Scalar::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Str(s) => Value::String(s.clone()),
            Scalar::DateTime(dt) => {
                Value::String(dt.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Scalar::Object(v) => v.clone(),
        }
    }

    /// Build a scalar from a JSON value; arrays and objects become `Object`
    pub fn from_json(value: &Value) -> Scalar {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Scalar::Str(s.clone()),
            other => Scalar::Object(other.clone()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Scalar::Null => 0,
            Scalar::Bool(_) => 1,
            Scalar::Int(_) | Scalar::Float(_) => 2,
            Scalar::DateTime(_) => 3,
            Scalar::Str(_) => 4,
            Scalar::Object(_) => 5,
        }
    }
}

fn num_to_f64(n: Num) -> f64 {
    match n {
        Num::I(i) => i as f64,
        Num::F(f) => f,
    }
}

fn apply_f64(a: f64, b: f64, op: ArithmeticOp) -> f64 {
    match op {
        ArithmeticOp::Add => a + b,
        ArithmeticOp::Sub => a - b,
        ArithmeticOp::Mul => a * b,
        ArithmeticOp::Div => a / b,
    }
}

// 2^63, the first float past i64::MAX
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float, `None` when the float is NaN.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    Some(match i.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ordering => ordering,
    })
}

// NaN sorts after every other number
fn cmp_f64_total(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Float(a), Scalar::Float(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_eq(other),
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Scalar::Null => {}
            Scalar::Int(i) => i.hash(state),
            Scalar::Float(f) => {
                // Integral floats hash like the equal Int
                if f.fract() == 0.0 && *f >= -I64_BOUND && *f < I64_BOUND {
                    (*f as i64).hash(state)
                } else if f.is_nan() {
                    u64::MAX.hash(state)
                } else {
                    f.to_bits().hash(state)
                }
            }
            Scalar::Bool(b) => b.hash(state),
            Scalar::Str(s) => s.hash(state),
            Scalar::DateTime(dt) => dt.hash(state),
            Scalar::Object(v) => v.to_string().hash(state),
        }
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
            (Scalar::Float(a), Scalar::Float(b)) => cmp_f64_total(*a, *b),
            (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(*a, *b).unwrap_or(Ordering::Less),
            (Scalar::Float(a), Scalar::Int(b)) => {
                cmp_int_float(*b, *a).map_or(Ordering::Greater, Ordering::reverse)
            }
            (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
            (Scalar::Str(a), Scalar::Str(b)) => a.cmp(b),
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a.cmp(b),
            (Scalar::Object(a), Scalar::Object(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) if v.is_nan() => write!(f, "NaN"),
            Scalar::Float(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Scalar::Object(v) => write!(f, "{}", v),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Null
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(i) => Scalar::Int(i),
            Err(_) => Scalar::Float(value as f64),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Str(value.clone())
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(value: NaiveDateTime) -> Self {
        Scalar::DateTime(value)
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Scalar::from_json(&value)
    }
}

impl From<&Scalar> for Scalar {
    fn from(value: &Scalar) -> Self {
        value.clone()
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Scalar::Null,
        }
    }
}
