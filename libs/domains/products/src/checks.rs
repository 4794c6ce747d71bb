//! Input check chains for the product routes.
//!
//! Each route declares an ordered list of checks over its path parameter and
//! body fields. Every check in the chain runs; failures are collected and the
//! request is rejected with a single 400 carrying the full set, in declaration
//! order. The loose coercions (numeric strings count as numbers, "true"/"1"
//! count as flags) are part of the wire contract.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Matches integer and decimal numerals, with an optional sign
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?(\d*\.)?\d+$").unwrap());

/// Where a checked value is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single failed check, in the shape clients receive
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldFailure {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The offending value, omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    pub msg: &'static str,
    pub path: &'static str,
    pub location: Location,
}

/// A named predicate bound to one request field
pub struct Check {
    pub location: Location,
    pub field: &'static str,
    pub msg: &'static str,
    pub test: fn(Option<&Value>) -> bool,
}

/// Chain for routes addressing a single product by path id
pub const KEY_CHECKS: &[Check] = &[Check {
    location: Location::Params,
    field: "id",
    msg: "ID is not valid",
    test: is_integer,
}];

/// Chain for the creation body
pub const CREATE_CHECKS: &[Check] = &[
    Check {
        location: Location::Body,
        field: "name",
        msg: "The name of the product should be fulfilled",
        test: not_empty,
    },
    Check {
        location: Location::Body,
        field: "price",
        msg: "the value not valid",
        test: is_numeric,
    },
    Check {
        location: Location::Body,
        field: "price",
        msg: "The price of the product should be fulfilled",
        test: not_empty,
    },
    Check {
        location: Location::Body,
        field: "price",
        msg: "The price is not valid",
        test: exceeds_zero,
    },
];

/// Chain for the replacement route: the path id first, then the full body
pub const REPLACE_CHECKS: &[Check] = &[
    Check {
        location: Location::Params,
        field: "id",
        msg: "ID is not valid",
        test: is_integer,
    },
    Check {
        location: Location::Body,
        field: "name",
        msg: "The name of the product should be fulfilled",
        test: not_empty,
    },
    Check {
        location: Location::Body,
        field: "price",
        msg: "the value not valid",
        test: is_numeric,
    },
    Check {
        location: Location::Body,
        field: "price",
        msg: "The price of the product should be fulfilled",
        test: not_empty,
    },
    Check {
        location: Location::Body,
        field: "price",
        msg: "The price is not valid",
        test: exceeds_zero,
    },
    Check {
        location: Location::Body,
        field: "availability",
        msg: "The availability value is not valid",
        test: is_flag,
    },
];

/// Run a chain over the request inputs, collecting failures in declaration order.
///
/// No check short-circuits the rest: a request with several bad fields reports
/// all of them in one response.
pub fn run_checks(checks: &[Check], path_id: Option<&str>, body: &Value) -> Vec<FieldFailure> {
    let mut failures = Vec::new();
    for check in checks {
        let value = match check.location {
            Location::Params => path_id.map(|raw| Value::String(raw.to_owned())),
            Location::Body => body.get(check.field).cloned(),
        };
        if !(check.test)(value.as_ref()) {
            failures.push(FieldFailure {
                kind: "field",
                value,
                msg: check.msg,
                path: check.field,
                location: check.location,
            });
        }
    }
    failures
}

// Coercions. Strings, numbers and booleans all have a text form; a numeric
// string is as good as a number.

pub(crate) fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) if NUMERIC.is_match(text) => text.parse().ok(),
        _ => None,
    }
}

pub(crate) fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(number) => match number.as_f64() {
            Some(n) if n == 1.0 => Some(true),
            Some(n) if n == 0.0 => Some(false),
            _ => None,
        },
        _ => None,
    }
}

// Predicates. Each receives the raw field value, None when the field is absent.

fn is_integer(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(raw)) => raw.parse::<i32>().is_ok(),
        _ => false,
    }
}

fn not_empty(value: Option<&Value>) -> bool {
    value.and_then(as_text).is_some_and(|text| !text.is_empty())
}

fn is_numeric(value: Option<&Value>) -> bool {
    value.and_then(as_number).is_some()
}

fn exceeds_zero(value: Option<&Value>) -> bool {
    value.and_then(as_number).is_some_and(|price| price > 0.0)
}

fn is_flag(value: Option<&Value>) -> bool {
    value.and_then(as_flag).is_some()
}
